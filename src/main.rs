use std::{env, fs, process};

use swiftlet::errors::errors::Reporter;
use swiftlet::parse_source;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: swiftlet <script>");
        process::exit(1);
    }

    let source = fs::read_to_string(&args[1]).expect("Failed to read file!");

    let mut reporter = Reporter::new();
    let statements = parse_source(&source, &mut reporter);

    for diagnostic in reporter.diagnostics() {
        eprintln!("{diagnostic}");
    }

    if reporter.had_error() {
        process::exit(1);
    }

    println!("{statements:#?}");
}
