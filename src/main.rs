use std::io::Read;

use corpus_lint::rules::built_in_rules;
use corpus_lint::{EXIT_FAILURE, EXIT_SUCCESS, engine};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    match run_impl() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn run_impl() -> corpus_lint::Result<()> {
    // 1. Read the whole input document from stdin
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    // 2. Decode, evaluate the built-in battery, encode
    let rules = built_in_rules();
    let output = engine::run(&rules, &input)?;

    // 3. Write the output document to stdout
    println!("{output}");
    Ok(())
}
