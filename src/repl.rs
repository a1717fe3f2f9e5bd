use crate::interpreter::Interpreter;
use crate::runner::report;
use crate::symbols::SymbolTable;
use std::io::{self, Write};

/// Interactive session. Declarations persist between lines; an error only
/// discards the line that raised it.
pub fn start(pretty: bool) {
    println!("intlang v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' or press Ctrl+D to quit");
    println!();

    let mut symbols = SymbolTable::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    println!("Goodbye!");
                    break;
                }

                symbols = run_repl_line(line, symbols, pretty);
            }
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                break;
            }
        }
    }
}

fn run_repl_line(source: &str, symbols: SymbolTable, pretty: bool) -> SymbolTable {
    let interpreter = Interpreter::with_symbols(source, symbols.clone(), io::stdout().lock());
    match interpreter.run() {
        Ok(updated) => updated,
        Err(error) => {
            report(&error, source, None, pretty);
            symbols
        }
    }
}
