//! Best-effort base-10 integer conversion
//!
//! Reads the longest valid integer prefix of a field: leading C whitespace,
//! an optional sign, then ASCII digits. Values outside `i32` saturate.

/// Result of scanning an integer prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// Converted value, saturated to the `i32` range
    pub value: i32,
    /// Bytes consumed, leading whitespace included
    pub consumed: usize,
    /// The digits did not fit in `i32`
    pub overflowed: bool,
}

/// The C `isspace` set in the "C" locale
#[must_use]
pub const fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Scan the integer prefix of `text`. `None` when there are no digits.
#[must_use]
pub fn scan_integer(text: &str) -> Option<Scan> {
    let bytes = text.as_bytes();
    let mut pos = bytes.iter().take_while(|&&b| is_c_space(b)).count();

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    let mut magnitude: i64 = 0;
    while let Some(&digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
        pos += 1;
    }

    if pos == digits_start {
        return None;
    }

    let signed = if negative { -magnitude } else { magnitude };
    let (value, overflowed) = match i32::try_from(signed) {
        Ok(value) => (value, false),
        Err(_) if negative => (i32::MIN, true),
        Err(_) => (i32::MAX, true),
    };

    Some(Scan {
        value,
        consumed: pos,
        overflowed,
    })
}

/// Convert a field, falling back to 0 when it holds no digits. Never fails.
#[must_use]
pub fn parse_or_default(text: &str) -> i32 {
    scan_integer(text).map_or(0, |scan| scan.value)
}
