use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use rpncalc::interpreter::session::{Outcome, Session};

/// rpncalc evaluates arithmetic expressions through Reverse Polish notation.
/// Lines of the form `name=expression` store their result for later lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read the lines from a file instead of the argument.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Only print results, without the postfix form of each expression.
    #[arg(short, long)]
    quiet: bool,

    /// An expression, or a path when `--file` is given. Without it, lines are
    /// read from standard input.
    contents: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut session = Session::new();

    match &args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            for line in script.lines() {
                run_line(&mut session, line, args.quiet);
            }
        },
        Some(line) => run_line(&mut session, line, args.quiet),
        None => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => run_line(&mut session, &line, args.quiet),
                    Err(e) => {
                        eprintln!("Failed to read from standard input: {e}");
                        break;
                    },
                }
            }
        },
    }
}

/// Processes one line and reports its outcome; errors never stop the session.
fn run_line(session: &mut Session, line: &str, quiet: bool) {
    match session.process_line(line) {
        Ok(Outcome::Empty) => {},
        Ok(Outcome::Value { expression, value } | Outcome::Assigned { expression, value, .. }) => {
            if !quiet {
                println!("RPN: {expression}");
            }
            println!("Result: {value}");
        },
        Err(e) => eprintln!("{e}"),
    }
}
