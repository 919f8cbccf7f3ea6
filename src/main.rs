use std::fs;

use clap::Parser;
use terneval::{evaluate, interpreter::evaluator::core::Context};

/// terneval is an easy to use evaluator for integer conditional
/// expressions of the form `if(condition, truthy, falsy)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells terneval to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// A variable binding of the form `name=value`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let mut context = Context::new();

    for binding in &args.vars {
        match parse_binding(binding) {
            Some((name, value)) => context.define(name, value),
            None => {
                eprintln!("Invalid variable binding '{binding}'. Expected the form name=value.");
                std::process::exit(1);
            },
        }
    }

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate(&source, &context) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn parse_binding(binding: &str) -> Option<(&str, i64)> {
    let (name, value) = binding.split_once('=')?;
    Some((name.trim(), value.trim().parse().ok()?))
}
