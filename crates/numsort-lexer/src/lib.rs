//! Tokenizer for comma-separated number lines
//!
//! Splits an input line on the literal `,` delimiter using logos. Fields keep
//! their surrounding whitespace; conversion is the parser's job.

use logos::Logos;
use numsort_core::Span;

/// Line tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Field delimiter
    #[token(",")]
    Comma,

    /// Any run of non-comma characters, whitespace included. Never empty, so
    /// consecutive delimiters yield no field between them.
    #[regex(r"[^,]+")]
    Field,

    /// End of input
    Eof,

    /// Lexer error
    Error,
}

/// Token with location information, borrowing its text from the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedToken<'input> {
    pub token: Token,
    pub span: Span,
    pub text: &'input str,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken<'input> {
        match self.lexer.next() {
            Some(result) => {
                let span = self.lexer.span();
                SpannedToken {
                    token: result.unwrap_or(Token::Error),
                    span: Span::new(span.start, span.end),
                    text: &self.input[span],
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: "",
            },
        }
    }

    /// Tokenize the entire input, `Eof` included
    pub fn tokenize(&mut self) -> Vec<SpannedToken<'input>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Lazily yield only the field tokens, in input order
    pub fn fields(self) -> impl Iterator<Item = SpannedToken<'input>> {
        self.filter(|token| token.token == Token::Field)
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = SpannedToken<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.token != Token::Eof).then_some(token)
    }
}
