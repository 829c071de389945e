//! Integration tests for the lexer + parser + sorter pipeline
//! Tests component interactions from raw line to formatted output

use numsort_core::{CAPACITY, NumberSequence, NumsortError};
use numsort_lexer::{Lexer, Token};
use numsort_parser::{Parser, parse_line};
use numsort_sort::sort_sequence;

fn sort_line(line: &str) -> String {
    let mut sequence = parse_line(line);
    sort_sequence(&mut sequence);
    sequence.to_string()
}

#[test]
fn test_pipeline_format_exactness() {
    assert_eq!(sort_line("3,1,2"), "1, 2, 3");
}

#[test]
fn test_pipeline_negative_and_repeated() {
    assert_eq!(sort_line("5,-3,5,0"), "-3, 0, 5, 5");
}

#[test]
fn test_pipeline_garbage_token() {
    assert_eq!(sort_line("2,abc,1"), "0, 1, 2");
}

#[test]
fn test_pipeline_empty_line() {
    assert_eq!(sort_line(""), "");
}

#[test]
fn test_pipeline_capacity_cap() {
    let line = (1..=20).rev().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
    let mut sequence = parse_line(&line);
    assert_eq!(sequence.len(), CAPACITY);

    sort_sequence(&mut sequence);
    assert_eq!(sequence.as_slice(), (5..=20).collect::<Vec<_>>().as_slice());
}

#[test]
fn test_lexer_fields_match_parsed_values() {
    let line = " 4, x ,-2";
    let fields: Vec<_> = Lexer::new(line)
        .filter(|token| token.token == Token::Field)
        .map(|token| token.text)
        .collect();
    assert_eq!(fields, vec![" 4", " x ", "-2"]);
    assert_eq!(parse_line(line).as_slice(), &[4, 0, -2]);
}

#[test]
fn test_strict_and_default_agree_on_clean_input() {
    let line = "8, -1, 0, 3";
    let default = Parser::new(line).parse();
    let strict = Parser::new(line).parse_strict().unwrap();
    assert_eq!(default, strict);
}

#[test]
fn test_strict_error_points_at_field() {
    let error = Parser::new("1,2,  oops").parse_strict().unwrap_err();
    assert_eq!(error.span().start, 4);
    assert!(matches!(error, NumsortError::InvalidNumber { column: 5, .. }));
}

#[test]
fn test_sorting_does_not_change_length() {
    let mut sequence: NumberSequence = [2, 2, 1].into_iter().collect();
    sort_sequence(&mut sequence);
    assert_eq!(sequence.len(), 3);
    assert_eq!(sequence.to_string(), "1, 2, 2");
}
