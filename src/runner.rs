use crate::error::{ErrorKind, LangError};
use crate::interpreter::Interpreter;
use crate::lexer::{Lexer, Token};
use std::io::{self, Write};

/// Runs a program against a fresh symbol table, writing `print` output to
/// `out`. `Ok` means the program ran to completion.
pub fn run<W: Write>(source: &str, out: W) -> Result<(), LangError> {
    Interpreter::new(source, out).run()?;
    Ok(())
}

/// Tokenizes `source` completely without executing anything.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LangError> {
    Lexer::new(source.to_string()).scan_tokens()
}

/// Runs a program with output on stdout and reports any error there as
/// well. With `pretty` set, a source snippet also goes to stderr.
pub fn run_source(source: &str, filename: Option<&str>, pretty: bool) -> Result<(), LangError> {
    let result = run(source, io::stdout().lock());
    if let Err(ref error) = result {
        report(error, source, filename, pretty);
    }
    result
}

/// Prints one token per line as `<line>\t<kind>\t<lexeme>`.
pub fn dump_tokens(source: &str, filename: Option<&str>, pretty: bool) -> Result<(), LangError> {
    let result = tokenize(source).and_then(|tokens| write_tokens(&tokens, io::stdout().lock()));
    if let Err(ref error) = result {
        report(error, source, filename, pretty);
    }
    result
}

/// Writes the `--tokens` listing. A failed write is an `Output` error.
pub fn write_tokens<W: Write>(tokens: &[Token], mut out: W) -> Result<(), LangError> {
    for token in tokens {
        writeln!(out, "{}\t{}\t{}", token.line, token.token_type.name(), token.lexeme)
            .map_err(|err| LangError::output(token.span.clone(), token.line, err))?;
    }
    Ok(())
}

/// Writes the one-line diagnostic. An `Output` error means stdout itself
/// failed, so that one goes to stderr. Write failures here are dropped.
pub(crate) fn report(error: &LangError, source: &str, filename: Option<&str>, pretty: bool) {
    let _ = match error.kind {
        ErrorKind::Output => writeln!(io::stderr(), "{}", error),
        _ => writeln!(io::stdout(), "{}", error),
    };
    if pretty {
        error.report(source, filename);
    }
}
