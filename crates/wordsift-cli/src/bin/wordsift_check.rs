// wordsift-check: Highlight unrecognized words in a text file.
//
// Reads a UTF-8 text file (or stdin) and prints it back with every word
// missing from the word list highlighted, followed by a summary line:
//   Unrecognized unique words / unique Words (U/W): Percent P
//
// Usage:
//   wordsift-check [-d PATH] [--latin1] [--html] [--check-numbers] [FILE]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use wordsift_cli::CommonArgs;
use wordsift_text::render::{render_console, render_html};
use wordsift_text::{CheckOptions, TextChecker};

#[derive(Parser, Debug)]
#[command(name = "wordsift-check")]
#[command(about = "Highlight words not found in a word list")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Emit a standalone HTML page instead of ANSI-highlighted text
    #[arg(long)]
    html: bool,

    /// Also flag words made only of digits
    #[arg(long)]
    check_numbers: bool,

    /// Text file to check (stdin if omitted or "-")
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    wordsift_cli::init_logging(cli.common.verbose);

    let dictionary =
        wordsift_cli::load_dictionary(&cli.common).unwrap_or_else(|e| wordsift_cli::fatal(&e));
    let text =
        wordsift_cli::read_input(cli.file.as_deref()).unwrap_or_else(|e| wordsift_cli::fatal(&e));

    let options = CheckOptions {
        skip_numbers: !cli.check_numbers,
        ..CheckOptions::default()
    };
    let checker = TextChecker::with_options(dictionary, options);
    let report = checker.check(&text);

    let output = if cli.html {
        render_html(&text, &report)
    } else {
        render_console(&text, &report)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = writeln!(out, "{output}") {
        if e.kind() != io::ErrorKind::BrokenPipe {
            wordsift_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
}
