use crate::error::{LangError, Span};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Keywords
    Int,
    Print,

    // Literals
    Identifier,
    Number,

    // Single-character tokens
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    Semicolon,
    LeftParen,
    RightParen,

    // Special
    Eof,
}

impl TokenType {
    /// Human-readable name used by the `--tokens` dump.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Int => "INT",
            TokenType::Print => "PRINT",
            TokenType::Identifier => "IDENT",
            TokenType::Number => "NUMBER",
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Star => "STAR",
            TokenType::Slash => "SLASH",
            TokenType::Equal => "EQUAL",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::LeftParen => "LPAREN",
            TokenType::RightParen => "RPAREN",
            TokenType::Eof => "EOF",
        }
    }
}

/// Spelling of the fixed tokens. Identifiers and numbers have no fixed
/// spelling and render as their kind.
impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            TokenType::Int => "int",
            TokenType::Print => "print",
            TokenType::Identifier => "identifier",
            TokenType::Number => "number",
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Star => "*",
            TokenType::Slash => "/",
            TokenType::Equal => "=",
            TokenType::Semicolon => ";",
            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::Eof => "end of input",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub span: Span,
    /// 1-based line the token starts on.
    pub line: usize,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: String, span: Span, line: usize) -> Self {
        Self {
            token_type,
            lexeme,
            span,
            line,
        }
    }
}

/// Pull-based lexer: every call to [`Lexer::next_token`] classifies exactly
/// one lexeme. Nothing is buffered.
pub struct Lexer {
    source: String,
    start: usize,
    current: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: String) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Tokenizes the whole source up front. The last token is always `Eof`.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>, LangError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.token_type == TokenType::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LangError> {
        self.skip_whitespace();
        self.start = self.current;

        if self.is_at_end() {
            return Ok(Token::new(
                TokenType::Eof,
                String::new(),
                Span::new(self.current, self.current),
                self.line,
            ));
        }

        let c = self.peek();
        if c.is_ascii_alphabetic() {
            return Ok(self.identifier());
        }
        if c.is_ascii_digit() {
            return Ok(self.number());
        }

        let token_type = match c {
            b'+' => TokenType::Plus,
            b'-' => TokenType::Minus,
            b'*' => TokenType::Star,
            b'/' => TokenType::Slash,
            b'=' => TokenType::Equal,
            b';' => TokenType::Semicolon,
            b'(' => TokenType::LeftParen,
            b')' => TokenType::RightParen,
            _ => {
                let ch = self.source[self.current..].chars().next().unwrap_or('\0');
                // control characters (NUL included) are shown escaped
                let shown = if ch.is_control() {
                    ch.escape_debug().to_string()
                } else {
                    ch.to_string()
                };
                return Err(LangError::lexical(
                    Span::new(self.current, self.current + ch.len_utf8()),
                    self.line,
                    format!("Unexpected character '{}'", shown),
                ));
            }
        };

        self.current += 1;
        Ok(self.make_token(token_type))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.current).copied().unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                b'\n' => self.line += 1,
                b' ' | b'\t' | b'\r' | 0x0b | 0x0c => {}
                _ => return,
            }
            self.current += 1;
        }
    }

    fn identifier(&mut self) -> Token {
        while self.peek().is_ascii_alphanumeric() || self.peek() == b'_' {
            self.current += 1;
        }

        let token_type = match &self.source[self.start..self.current] {
            "int" => TokenType::Int,
            "print" => TokenType::Print,
            _ => TokenType::Identifier,
        };
        self.make_token(token_type)
    }

    // Range checking is left to the interpreter.
    fn number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.current += 1;
        }
        self.make_token(TokenType::Number)
    }

    fn make_token(&self, token_type: TokenType) -> Token {
        Token::new(
            token_type,
            self.source[self.start..self.current].to_string(),
            Span::new(self.start, self.current),
            self.line,
        )
    }
}
