//! Parser for comma-separated number lines
//!
//! Turns one input line into a [`NumberSequence`]. The default contract never
//! fails: malformed fields become 0 and values past [`CAPACITY`] are dropped
//! silently. [`Parser::parse_strict`] reports the same conditions as errors.
//!
//! Precondition: the caller bounds the line to [`numsort_core::MAX_LINE_LEN`]
//! bytes. The parser does not check it.

use numsort_core::{CAPACITY, NumberSequence, NumsortError};
use numsort_lexer::{Lexer, SpannedToken};

pub mod integer;

pub use integer::{Scan, is_c_space, parse_or_default, scan_integer};

pub struct Parser<'input> {
    input: &'input str,
}

impl<'input> Parser<'input> {
    /// Create a new parser for one input line, terminator already stripped
    #[must_use]
    pub const fn new(input: &'input str) -> Self {
        Self { input }
    }

    /// Parse with best-effort conversion and silent truncation
    #[must_use]
    pub fn parse(&self) -> NumberSequence {
        self.fields()
            .take(CAPACITY)
            .map(|field| parse_or_default(field.text))
            .collect()
    }

    /// Parse, rejecting anything the default contract would paper over
    ///
    /// # Errors
    ///
    /// Returns `NumsortError` for a field that is not exactly one integer
    /// (surrounding whitespace allowed), for a value outside `i32`, or for
    /// more than `CAPACITY` fields.
    pub fn parse_strict(&self) -> Result<NumberSequence, NumsortError> {
        let mut sequence = NumberSequence::new();

        for field in self.fields() {
            let value = self.strict_value(&field)?;
            if !sequence.push_or_ignore(value) {
                return Err(NumsortError::capacity_exceeded(field.span, self.input));
            }
        }

        Ok(sequence)
    }

    fn strict_value(&self, field: &SpannedToken<'_>) -> Result<i32, NumsortError> {
        let trimmed = field.text.trim_matches(|c: char| c.is_ascii() && is_c_space(c as u8));

        match scan_integer(field.text) {
            Some(scan) if field.text[scan.consumed..].bytes().all(is_c_space) => {
                if scan.overflowed {
                    Err(NumsortError::overflow(trimmed, field.span, self.input))
                } else {
                    Ok(scan.value)
                }
            }
            _ => Err(NumsortError::invalid_number(trimmed, field.span, self.input)),
        }
    }

    fn fields(&self) -> impl Iterator<Item = SpannedToken<'input>> {
        Lexer::new(self.input).fields()
    }
}

/// Parse one line under the default contract
#[must_use]
pub fn parse_line(input: &str) -> NumberSequence {
    Parser::new(input).parse()
}
