// Lexer tests: classification, line tracking and lexical errors.

use intlang::error::ErrorKind;
use intlang::{tokenize, Lexer, TokenType};

fn kinds(source: &str) -> Vec<TokenType> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.token_type)
        .collect()
}

#[test]
fn classifies_a_full_program() {
    use TokenType::*;

    assert_eq!(
        kinds("int x = (1+2)*3/4-5; print(x);"),
        vec![
            Int, Identifier, Equal, LeftParen, Number, Plus, Number, RightParen, Star, Number,
            Slash, Number, Minus, Number, Semicolon, Print, LeftParen, Identifier, RightParen,
            Semicolon, Eof,
        ]
    );
}

#[test]
fn keywords_match_exactly() {
    use TokenType::*;

    assert_eq!(
        kinds("int print integer printf Int PRINT"),
        vec![Int, Print, Identifier, Identifier, Identifier, Identifier, Eof]
    );
}

#[test]
fn lexemes_keep_raw_text() {
    let tokens = tokenize("count_1 = 0042 12abc").unwrap();
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["count_1", "=", "0042", "12", "abc", ""]);
}

#[test]
fn numbers_are_not_range_checked() {
    let tokens = tokenize("123456789012345678901234567890").unwrap();
    assert_eq!(tokens[0].token_type, TokenType::Number);
    assert_eq!(tokens[0].lexeme, "123456789012345678901234567890");
}

#[test]
fn single_character_tokens_round_trip() {
    for ch in "+-*/=;()".chars() {
        let source = ch.to_string();
        let tokens = tokenize(&source).unwrap();
        assert_eq!(tokens.len(), 2, "{:?}", source);
        assert_eq!(tokens[0].token_type.to_string(), source);
        assert_eq!(tokens[0].lexeme, source);
    }
}

#[test]
fn keywords_round_trip() {
    let tokens = tokenize("int print").unwrap();
    assert_eq!(tokens[0].token_type.to_string(), "int");
    assert_eq!(tokens[1].token_type.to_string(), "print");
}

#[test]
fn tracks_lines_across_newlines() {
    let tokens = tokenize("int a\n=\n\n1;\r\n  print(a);\n").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 4, 4, 5, 5, 5, 5, 5, 6]);
}

#[test]
fn spans_cover_lexemes() {
    let source = "  print(abc);";
    for token in tokenize(source).unwrap() {
        assert_eq!(&source[token.span.start..token.span.end], token.lexeme);
    }
}

#[test]
fn next_token_is_lazy_and_stops_at_eof() {
    let mut lexer = Lexer::new("print $".to_string());

    let first = lexer.next_token().unwrap();
    assert_eq!(first.token_type, TokenType::Print);

    // the bad character is only seen when asked for
    let error = lexer.next_token().unwrap_err();
    assert_eq!(error.kind, ErrorKind::LexicalError);

    let mut lexer = Lexer::new("x".to_string());
    assert_eq!(lexer.next_token().unwrap().token_type, TokenType::Identifier);
    assert_eq!(lexer.next_token().unwrap().token_type, TokenType::Eof);
    assert_eq!(lexer.next_token().unwrap().token_type, TokenType::Eof);
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenType::Eof]);
    assert_eq!(kinds(" \t\n\r\n"), vec![TokenType::Eof]);

    let tokens = tokenize("\n\n").unwrap();
    assert_eq!(tokens[0].line, 3);
}

#[test]
fn unexpected_character_reports_line() {
    let error = tokenize("int a = 1;\nint b = 2 # 3;").unwrap_err();
    assert_eq!(error.kind, ErrorKind::LexicalError);
    assert_eq!(error.line, 2);
    assert_eq!(error.message, "Unexpected character '#'");
    assert_eq!(error.to_string(), "Error at line 2: Unexpected character '#'");
}

#[test]
fn unexpected_multibyte_character() {
    let source = "a → b";
    let error = tokenize(source).unwrap_err();
    assert_eq!(error.message, "Unexpected character '→'");
    assert_eq!(&source[error.span.start..error.span.end], "→");
}

#[test]
fn control_characters_are_escaped_in_diagnostics() {
    let error = tokenize("print(1);\0").unwrap_err();
    assert_eq!(error.message, "Unexpected character '\\0'");

    let error = tokenize("int a = 1;\n\u{7}").unwrap_err();
    assert_eq!(error.line, 2);
    assert_eq!(error.message, "Unexpected character '\\u{7}'");
}
