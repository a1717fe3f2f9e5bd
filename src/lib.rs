// intlang interpreter library
//
// A single-pass interpreter for a tiny imperative language of write-once
// integer declarations and print statements. Parsing and evaluation are
// fused: there is no AST.

// Public modules
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod repl;
pub mod runner;
pub mod symbols;

// Re-export commonly used items
pub use error::{ErrorKind, LangError, Span};
pub use interpreter::{Interpreter, MAX_NESTING_DEPTH};
pub use lexer::{Lexer, Token, TokenType};
pub use symbols::{Symbol, SymbolError, SymbolTable};

// Re-export main functions
pub use repl::start as start_repl;
pub use runner::{run, tokenize, write_tokens};
