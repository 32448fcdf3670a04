//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Line and column tracking
//! - Comments
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{LiteralValue, TokenKind},
};
use crate::errors::errors::ErrorImpl;

#[test]
fn test_tokenize_keywords() {
    let source = "let fn class if else while do for switch case default break continue return print self super".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    let expected = [
        TokenKind::Let,
        TokenKind::Fn,
        TokenKind::Class,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::For,
        TokenKind::Switch,
        TokenKind::Case,
        TokenKind::Default,
        TokenKind::Break,
        TokenKind::Continue,
        TokenKind::Return,
        TokenKind::Print,
        TokenKind::SelfKw,
        TokenKind::Super,
        TokenKind::EOF,
    ];

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase selfish".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    for (token, name) in tokens
        .iter()
        .zip(["foo", "bar", "baz_123", "_underscore", "CamelCase", "selfish"])
    {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, name);
        assert!(token.literal.is_none());
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 2.5 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[0].literal, Some(LiteralValue::Number(42.0)));
    assert_eq!(tokens[1].literal, Some(LiteralValue::Number(2.5)));
    assert_eq!(tokens[2].literal, Some(LiteralValue::Number(0.0)));
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words""#.to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[0].literal, Some(LiteralValue::String("hello".to_string())));
    assert_eq!(
        tokens[1].literal,
        Some(LiteralValue::String("multiple words".to_string()))
    );
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""line\nnext\t\"quoted\" \\""#.to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!(
        tokens[0].literal,
        Some(LiteralValue::String("line\nnext\t\"quoted\" \\".to_string()))
    );
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_literal_keywords() {
    let source = "true false nil".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[0].literal, Some(LiteralValue::Bool(true)));
    assert_eq!(tokens[1].literal, Some(LiteralValue::Bool(false)));
    assert_eq!(tokens[2].literal, Some(LiteralValue::Nil));
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % = == != ! < <= > >= && || ? : . , ;".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    let expected = [
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Assignment,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Not,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::EOF,
    ];

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_tokenize_brackets() {
    let source = "( ) { }".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
}

#[test]
fn test_tokenize_comments() {
    let source = "let x = 5; // this is a comment\nlet y = 10;".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    let identifiers: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Identifier)
        .map(|token| token.value.as_str())
        .collect();
    assert_eq!(identifiers, ["x", "y"]);
    assert_eq!(tokens.len(), 11);
}

#[test]
fn test_tokenize_tracks_lines_and_columns() {
    let source = "let a = 1;\n  print a;".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    assert_eq!((tokens[1].line(), tokens[1].column()), (1, 5));
    assert_eq!(tokens[5].kind, TokenKind::Print);
    assert_eq!((tokens[5].line(), tokens[5].column()), (2, 3));
    assert_eq!(tokens[5].span.start.offset, 13);
    assert_eq!((tokens[6].line(), tokens[6].column()), (2, 9));
}

#[test]
fn test_tokenize_multiline_string_advances_line() {
    let source = "\"a\nb\" x".to_string();
    let tokens = tokenize(source, Some("test.lox".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "x");
    assert_eq!((tokens[1].line(), tokens[1].column()), (2, 4));
}

#[test]
fn test_tokenize_empty_input() {
    let tokens = tokenize(String::new(), Some("test.lox".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("let a = @;".to_string(), Some("test.lox".to_string())).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("print \"oops;".to_string(), Some("test.lox".to_string())).unwrap_err();

    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().column, 7);
}
