use crate::error::{LangError, Span};
use crate::lexer::{Lexer, Token, TokenType};
use crate::symbols::{SymbolError, SymbolTable};
use std::io::Write;
use std::mem;

/// Deepest parenthesized group accepted before giving up with a
/// diagnostic instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Single-pass recursive-descent interpreter.
///
/// Each production both recognizes its syntax and computes its value, so
/// no tree is ever built. Tokens are pulled from the lexer one at a time
/// with a single token of lookahead held in `current`.
///
/// ```text
/// Program     := Statement* EndOfInput
/// Statement   := Declaration | PrintStmt
/// Declaration := "int" Identifier "=" Expression ";"
/// PrintStmt   := "print" "(" Expression ")" ";"
/// Expression  := Term (("+" | "-") Term)*
/// Term        := Factor (("*" | "/") Factor)*
/// Factor      := Number | Identifier | "(" Expression ")"
/// ```
pub struct Interpreter<W: Write> {
    lexer: Lexer,
    current: Token,
    symbols: SymbolTable,
    out: W,
    /// Line of the first token of the statement being parsed.
    statement_line: usize,
    /// Open parentheses around the current factor.
    depth: usize,
}

impl<W: Write> Interpreter<W> {
    pub fn new(source: &str, out: W) -> Self {
        Self::with_symbols(source, SymbolTable::new(), out)
    }

    /// Continues a session: `source` sees every name already in `symbols`.
    pub fn with_symbols(source: &str, symbols: SymbolTable, out: W) -> Self {
        Self {
            lexer: Lexer::new(source.to_string()),
            // replaced by the first real token in `run`
            current: Token::new(TokenType::Eof, String::new(), Span::new(0, 0), 1),
            symbols,
            out,
            statement_line: 1,
            depth: 0,
        }
    }

    /// Executes the whole program. The first error stops the run; output
    /// already written by earlier `print` statements stays written.
    pub fn run(mut self) -> Result<SymbolTable, LangError> {
        self.current = self.lexer.next_token()?;

        while !self.check(TokenType::Eof) {
            self.statement()?;
        }

        Ok(self.symbols)
    }

    fn statement(&mut self) -> Result<(), LangError> {
        self.statement_line = self.current.line;

        match self.current.token_type {
            TokenType::Int => self.declaration(),
            TokenType::Print => self.print_statement(),
            _ => Err(self
                .error_at_current("Expected 'int' or 'print' statement")
                .with_help("Statements start with 'int' (a declaration) or 'print'.")),
        }
    }

    fn declaration(&mut self) -> Result<(), LangError> {
        let keyword = self.advance()?;
        let name = self.consume(TokenType::Identifier, "Expected identifier after 'int'")?;
        self.consume(TokenType::Equal, "Expected '=' in declaration")?;

        let value = self.expression()?;

        // Reported against the `int` line, not wherever the parse ended up.
        if !self.check(TokenType::Semicolon) {
            return Err(LangError::syntax(
                self.current.span.clone(),
                keyword.line,
                "Expected ';' at end of statement",
            )
            .with_help("Every statement ends with ';'."));
        }
        self.advance()?;

        self.symbols
            .declare(&name.lexeme, value)
            .map_err(|err| symbol_error(err, &name, keyword.line))
    }

    fn print_statement(&mut self) -> Result<(), LangError> {
        let keyword = self.advance()?;
        self.consume(TokenType::LeftParen, "Expected '(' after 'print'")?;
        let value = self.expression()?;
        self.consume(TokenType::RightParen, "Expected ')' after expression")?;
        self.consume(TokenType::Semicolon, "Expected ';' at end of statement")?;

        writeln!(self.out, "{}", value)
            .map_err(|err| LangError::output(keyword.span.clone(), keyword.line, err))
    }

    fn expression(&mut self) -> Result<i64, LangError> {
        let mut result = self.term()?;

        while self.check(TokenType::Plus) || self.check(TokenType::Minus) {
            let operator = self.advance()?;
            let right = self.term()?;

            let value = if operator.token_type == TokenType::Plus {
                result.checked_add(right)
            } else {
                result.checked_sub(right)
            };
            result = value.ok_or_else(|| self.overflow(&operator))?;
        }

        Ok(result)
    }

    fn term(&mut self) -> Result<i64, LangError> {
        let mut result = self.factor()?;

        while self.check(TokenType::Star) || self.check(TokenType::Slash) {
            let operator = self.advance()?;
            let right = self.factor()?;

            let value = if operator.token_type == TokenType::Star {
                result.checked_mul(right)
            } else {
                if right == 0 {
                    return Err(LangError::division_by_zero(
                        operator.span.clone(),
                        self.statement_line,
                    ));
                }
                result.checked_div(right)
            };
            result = value.ok_or_else(|| self.overflow(&operator))?;
        }

        Ok(result)
    }

    fn factor(&mut self) -> Result<i64, LangError> {
        match self.current.token_type {
            TokenType::Number => {
                let value = self.current.lexeme.parse::<i64>().map_err(|_| {
                    LangError::numeric_overflow(
                        self.current.span.clone(),
                        self.current.line,
                        format!("Integer literal '{}' is out of range", self.current.lexeme),
                    )
                })?;
                self.advance()?;
                Ok(value)
            }
            TokenType::Identifier => {
                let name = self.advance()?;
                self.symbols
                    .lookup(&name.lexeme)
                    .map_err(|err| symbol_error(err, &name, name.line))
            }
            TokenType::LeftParen => {
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(self.error_at_current("Expression nested too deeply"));
                }
                self.advance()?;
                self.depth += 1;
                let value = self.expression()?;
                self.depth -= 1;
                self.consume(TokenType::RightParen, "Expected ')'")?;
                Ok(value)
            }
            _ => Err(self.error_at_current("Expected number, identifier, or '('")),
        }
    }

    // Helper methods

    fn check(&self, token_type: TokenType) -> bool {
        self.current.token_type == token_type
    }

    /// Moves to the next token and hands back the one just consumed.
    fn advance(&mut self) -> Result<Token, LangError> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    fn consume(&mut self, token_type: TokenType, message: &str) -> Result<Token, LangError> {
        if self.check(token_type) {
            self.advance()
        } else {
            Err(self.error_at_current(message))
        }
    }

    fn error_at_current(&self, message: &str) -> LangError {
        LangError::syntax(self.current.span.clone(), self.current.line, message)
    }

    fn overflow(&self, operator: &Token) -> LangError {
        LangError::numeric_overflow(
            operator.span.clone(),
            self.statement_line,
            format!("Integer overflow in '{}'", operator.lexeme),
        )
    }
}

fn symbol_error(err: SymbolError, name: &Token, line: usize) -> LangError {
    let span = name.span.clone();
    match err {
        SymbolError::Undefined => LangError::undefined_variable(span, line, &name.lexeme),
        SymbolError::Uninitialized => LangError::use_before_init(span, line, &name.lexeme),
        SymbolError::AlreadyDeclared => {
            LangError::duplicate_declaration(span, line, &name.lexeme)
        }
    }
}
