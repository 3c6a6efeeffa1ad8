// wordsift-hyphen: Classify hyphenated tokens from stdin.
//
// Reads tokens from stdin (one per line) and reports whether each is a
// recognized word. Tokens are lowercased before lookup. Output:
//   C: token    (recognized)
//   W: token    (not recognized)
//
// Usage:
//   wordsift-hyphen [-d PATH] [--latin1] [TOKEN...]

use std::io::{self, BufRead, Write};

use clap::Parser;
use wordsift_cli::CommonArgs;
use wordsift_text::{Dictionary, is_known};

#[derive(Parser, Debug)]
#[command(name = "wordsift-hyphen")]
#[command(about = "Check hyphenated compounds against a word list")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Tokens to check (stdin, one per line, if omitted)
    tokens: Vec<String>,
}

fn classify(token: &str, dictionary: &Dictionary, out: &mut impl Write) {
    let tag = if is_known(&token.to_lowercase(), dictionary) {
        'C'
    } else {
        'W'
    };
    let _ = writeln!(out, "{tag}: {token}");
}

fn main() {
    let cli = Cli::parse();
    wordsift_cli::init_logging(cli.common.verbose);

    let dictionary =
        wordsift_cli::load_dictionary(&cli.common).unwrap_or_else(|e| wordsift_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !cli.tokens.is_empty() {
        for token in &cli.tokens {
            classify(token, &dictionary, &mut out);
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        classify(token, &dictionary, &mut out);
    }
}
