// wordsift-words: Print the normalized words of a text.
//
// One word per line, prefixed by its character span:
//   [0..4] Once
//   [8..32] Hong Kong and New   York
//
// Control characters inside merged names are escaped ("New\nYork").
// No word list is needed.
//
// Usage:
//   wordsift-words [--raw] [FILE]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use wordsift_text::{Normalizer, extract};

#[derive(Parser, Debug)]
#[command(name = "wordsift-words")]
#[command(about = "List the words of a text with their character spans")]
struct Cli {
    /// Print scanner tokens without merging names or stripping possessives
    #[arg(long)]
    raw: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Text file (stdin if omitted or "-")
    file: Option<PathBuf>,
}

/// Escape control characters so every word stays on one line.
fn escape_controls(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.extend(c.escape_unicode()),
            c => out.push(c),
        }
    }
    out
}

fn main() {
    let cli = Cli::parse();
    wordsift_cli::init_logging(cli.verbose);

    let text =
        wordsift_cli::read_input(cli.file.as_deref()).unwrap_or_else(|e| wordsift_cli::fatal(&e));

    let tokens = extract(&text);
    let spans: Vec<(usize, usize, String)> = if cli.raw {
        tokens.into_iter().map(|t| (t.start, t.end, t.text)).collect()
    } else {
        Normalizer::new()
            .normalize(&tokens, &text)
            .into_iter()
            .map(|w| (w.start, w.end, w.text))
            .collect()
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for (start, end, word) in &spans {
        let _ = writeln!(out, "[{start}..{end}] {}", escape_controls(word));
    }
}
