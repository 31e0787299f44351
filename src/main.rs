use std::{fs, process::ExitCode};

use clap::Parser;
use shunting::{
    Error, evaluate,
    interpreter::{
        converter::to_postfix,
        lexer::{format_tokens, tokenize},
    },
};

/// shunting evaluates infix arithmetic expressions such as `(2 + 3) * 4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunting to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Print the postfix form of each expression before its result.
    #[arg(short, long)]
    postfix: bool,

    contents: String,
}

fn postfix_of(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    Ok(format_tokens(&to_postfix(&tokens)?))
}

/// Evaluates one expression, printing its result or error. Returns whether it
/// succeeded.
fn run(source: &str, show_postfix: bool) -> bool {
    if show_postfix && let Ok(postfix) = postfix_of(source) {
        println!("{postfix}");
    }

    match evaluate(source) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let ok = if args.file {
        let Ok(script) = fs::read_to_string(&args.contents) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            return ExitCode::FAILURE;
        };
        script.lines()
              .filter(|line| !line.trim().is_empty())
              .fold(true, |ok, line| run(line, args.postfix) && ok)
    } else {
        run(&args.contents, args.postfix)
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
