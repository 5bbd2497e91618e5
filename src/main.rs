use std::io::{self, BufRead, Write};

use clap::Parser;
use evalia::eval_expression;

/// evalia is an easy to use evaluator for arithmetic and boolean
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match eval_expression(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }

        return;
    }

    run_prompt();
}

/// Runs the interactive read-evaluate-print loop.
///
/// One expression is read per line. Empty lines are skipped, `exit` (or end
/// of input) terminates the loop, and an error in one expression is reported
/// on stderr without affecting the next.
fn run_prompt() {
    println!("Expression Evaluator");
    println!("Supported operators: +, -, *, /, ^, ==, !=, >, <, >=, <=, &&, ||");
    println!("Type 'exit' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        // Stop on EOF (Ctrl+D) or a read failure.
        let Some(Ok(expression)) = lines.next() else {
            break;
        };

        if expression.is_empty() {
            continue;
        } else if expression == "exit" {
            break;
        }

        match eval_expression(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
