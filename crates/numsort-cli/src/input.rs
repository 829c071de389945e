//! Line reading for the CLI
//!
//! Owns the input-length bound: the parser only ever sees a line of at most
//! `MAX_LINE_LEN` bytes with its terminator removed.

use numsort_core::MAX_LINE_LEN;
use std::io::{BufRead, Read};

/// Read the first line, at most `MAX_LINE_LEN` bytes of it. Anything past the
/// bound stays unread. `None` on end of input or a read error.
pub fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut buffer = Vec::with_capacity(MAX_LINE_LEN);
    match input
        .by_ref()
        .take(MAX_LINE_LEN as u64)
        .read_until(b'\n', &mut buffer)
    {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(String::from_utf8_lossy(&buffer).into_owned()),
    }
}

/// Cut `line` to at most `MAX_LINE_LEN` bytes, backing off to a char boundary
#[must_use]
pub fn bound_line(line: &str) -> &str {
    if line.len() <= MAX_LINE_LEN {
        return line;
    }
    let mut end = MAX_LINE_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

/// Drop one trailing `\n` or `\r\n`
#[must_use]
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}
