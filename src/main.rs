use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead},
    process::exit,
    time::Instant,
};

use tokenizer::{display_error, errors::errors::Error, get_line_at, Tokenizer};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_stdin(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: tokenizer [FILE]");
            exit(1);
        }
    }
}

/// Tokenizes a whole file in one call and prints the listing followed by
/// diagnostics for every invalid lexeme.
fn run_file(path: &str) {
    let contents = read_to_string(path).expect("Failed to read file!");

    let start = Instant::now();
    let mut tokenizer = Tokenizer::default();
    tokenizer.tokenize(&contents);

    println!("Tokenized in {:?}", start.elapsed());

    print_tokens(&tokenizer);
    report_invalid(&tokenizer, path, &contents);
}

/// The reference console loop: one tokenize call per stdin line, reset
/// between lines so each starts with fresh numbering.
fn run_stdin() {
    let mut tokenizer = Tokenizer::default();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.expect("Failed to read line!");

        tokenizer.tokenize(&line);
        print_tokens(&tokenizer);
        report_invalid(&tokenizer, "<stdin>", &line);

        tokenizer.reset();
    }
}

fn print_tokens(tokenizer: &Tokenizer) {
    for token in tokenizer.tokens() {
        token.debug();
    }
}

fn report_invalid(tokenizer: &Tokenizer, source_name: &str, contents: &str) {
    for token in tokenizer.tokens() {
        if let Some(error) = Error::from_token(token, tokenizer.profile()) {
            let line_text = get_line_at(contents, error.line()).unwrap_or("");
            display_error(&error, source_name, line_text);
        }
    }
}
