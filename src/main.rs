use clap::{Arg, ArgAction, Command};
use intlang::{repl, runner};
use std::fs;
use std::process;

fn main() {
    let matches = Command::new("intlang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A single-pass interpreter for a tiny integer language")
        .arg(
            Arg::new("file")
                .help("The program file to execute")
                .value_name("FILE")
                .index(1),
        )
        .arg(
            Arg::new("tokens")
                .short('t')
                .long("tokens")
                .help("Print the token stream instead of executing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pretty")
                .short('p')
                .long("pretty")
                .help("Also render errors as annotated source snippets on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start in interactive REPL mode")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let pretty = matches.get_flag("pretty");

    match matches.get_one::<String>("file") {
        Some(path) if !matches.get_flag("interactive") => {
            let tokens_only = matches.get_flag("tokens");
            process::exit(run_file(path, tokens_only, pretty));
        }
        _ => repl::start(pretty),
    }
}

fn run_file(path: &str, tokens_only: bool, pretty: bool) -> i32 {
    // non-UTF-8 bytes surface later as an unexpected-character error
    let source = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => {
            println!("Error: Cannot open file '{}'", path);
            return 1;
        }
    };

    let result = if tokens_only {
        runner::dump_tokens(&source, Some(path), pretty)
    } else {
        runner::run_source(&source, Some(path), pretty)
    };

    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
