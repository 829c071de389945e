//! Core types for numsort
//!
//! The bounded number sequence shared by the parser, the sorter and the
//! formatter, plus source spans and the positioned error type.

use std::fmt;

/// Maximum number of values a sequence holds. Extra input values are dropped.
pub const CAPACITY: usize = 16;

/// Maximum line length, in bytes, handed to the parser. Enforced by the
/// line reader, not by the parser.
pub const MAX_LINE_LEN: usize = 255;

/// Separator written between values on output
pub const OUTPUT_SEPARATOR: &str = ", ";

/// Byte range in the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// 1-based character column of a byte offset in `source`
#[must_use]
pub fn column_of(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source
        .get(..offset)
        .map_or(offset, |prefix| prefix.chars().count())
        + 1
}

/// Fixed-capacity sequence of signed integers.
///
/// Only the first `len()` slots are live; the rest are never read, compared
/// or printed.
#[derive(Clone, Copy)]
pub struct NumberSequence {
    values: [i32; CAPACITY],
    len: usize,
}

impl NumberSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [0; CAPACITY],
            len: 0,
        }
    }

    /// Append `value` if there is room. Returns `false` and leaves the
    /// sequence untouched once it is full.
    pub fn push_or_ignore(&mut self, value: i32) -> bool {
        if self.is_full() {
            return false;
        }
        self.values[self.len] = value;
        self.len += 1;
        true
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == CAPACITY
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.values[..self.len]
    }

    /// Live elements, mutable. Reordering is allowed; the length is not.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.values[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }
}

impl Default for NumberSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for NumberSequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for NumberSequence {}

impl fmt::Debug for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Values joined by `", "`, no trailing separator, no newline
impl fmt::Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(OUTPUT_SEPARATOR)?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl Extend<i32> for NumberSequence {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            if !self.push_or_ignore(value) {
                break;
            }
        }
    }
}

impl FromIterator<i32> for NumberSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<'a> IntoIterator for &'a NumberSequence {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors reported by strict parsing, positioned by input column
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NumsortError {
    #[error("numsort:{column}: ERR_INVALID_NUMBER: '{text}' is not an integer")]
    InvalidNumber {
        text: String,
        span: Span,
        column: usize,
    },

    #[error("numsort:{column}: ERR_OVERFLOW: '{text}' does not fit in 32 bits")]
    Overflow {
        text: String,
        span: Span,
        column: usize,
    },

    #[error("numsort:{column}: ERR_CAPACITY: more than {capacity} values")]
    CapacityExceeded {
        capacity: usize,
        span: Span,
        column: usize,
    },
}

impl NumsortError {
    #[must_use]
    pub fn invalid_number(text: &str, span: Span, source: &str) -> Self {
        Self::InvalidNumber {
            text: text.to_string(),
            span,
            column: column_of(source, span.start),
        }
    }

    #[must_use]
    pub fn overflow(text: &str, span: Span, source: &str) -> Self {
        Self::Overflow {
            text: text.to_string(),
            span,
            column: column_of(source, span.start),
        }
    }

    #[must_use]
    pub fn capacity_exceeded(span: Span, source: &str) -> Self {
        Self::CapacityExceeded {
            capacity: CAPACITY,
            span,
            column: column_of(source, span.start),
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::InvalidNumber { span, .. }
            | Self::Overflow { span, .. }
            | Self::CapacityExceeded { span, .. } => *span,
        }
    }
}
