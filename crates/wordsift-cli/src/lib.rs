// wordsift-cli: shared utilities for CLI tools.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args};
use tracing::{Level, debug};
use wordsift_text::{Dictionary, DictionaryError, WordListEncoding};

/// Environment variable naming a word list file.
pub const DICT_ENV: &str = "WORDSIFT_DICT";

/// Word list locations tried after the explicit and environment paths.
const DEFAULT_WORD_LISTS: &[&str] = &["dict/words", "/usr/share/dict/words", "/usr/dict/words"];

/// Options shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Word list file, one word per line
    #[arg(short = 'd', long = "dict", value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Decode the word list as ISO-8859-1 instead of UTF-8
    #[arg(long)]
    pub latin1: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn encoding(&self) -> WordListEncoding {
        if self.latin1 {
            WordListEncoding::Latin1
        } else {
            WordListEncoding::Utf8
        }
    }
}

/// Install a stderr `fmt` subscriber. Warnings only by default; `-v` shows
/// debug events and `-vv` trace events.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Find a word list and load it.
///
/// Search order:
/// 1. `--dict` argument (if provided)
/// 2. `WORDSIFT_DICT` environment variable
/// 3. `dict/words` under the current directory
/// 4. `/usr/share/dict/words`, then `/usr/dict/words`
pub fn load_dictionary(args: &CommonArgs) -> Result<Dictionary, String> {
    let env_path = std::env::var_os(DICT_ENV).map(PathBuf::from);
    let search_paths = build_search_paths(args.dict.as_deref(), env_path.as_deref());

    for path in &search_paths {
        if path.is_file() {
            debug!(path = %path.display(), "using word list");
            return Dictionary::load(path, args.encoding()).map_err(|e| match e {
                DictionaryError::Encoding { .. } => format!("{e} (try --latin1)"),
                DictionaryError::Io { .. } => e.to_string(),
            });
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of word list files to try, in order.
fn build_search_paths(dict: Option<&Path>, env_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = dict {
        paths.push(p.to_path_buf());
    }
    if let Some(p) = env_path {
        paths.push(p.to_path_buf());
    }
    paths.extend(DEFAULT_WORD_LISTS.iter().map(PathBuf::from));
    paths
}

/// Read the whole input: the named file, or stdin when `path` is `None` or
/// `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| format!("failed to read {}: {}", p.display(), e)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(text)
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn search_order() {
        let paths = build_search_paths(Some(Path::new("mine.txt")), Some(Path::new("/env/words")));
        assert_eq!(paths[0], PathBuf::from("mine.txt"));
        assert_eq!(paths[1], PathBuf::from("/env/words"));
        assert_eq!(paths[2], PathBuf::from("dict/words"));
        assert_eq!(paths.last(), Some(&PathBuf::from("/usr/dict/words")));
    }

    #[test]
    fn search_without_overrides() {
        let paths = build_search_paths(None, None);
        assert_eq!(paths.len(), DEFAULT_WORD_LISTS.len());
    }

    #[test]
    fn encoding_flag() {
        let mut args = CommonArgs::default();
        assert_eq!(args.encoding(), WordListEncoding::Utf8);
        args.latin1 = true;
        assert_eq!(args.encoding(), WordListEncoding::Latin1);
    }

    #[test]
    fn explicit_dictionary_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zebra").unwrap();
        let args = CommonArgs {
            dict: Some(file.path().to_path_buf()),
            ..CommonArgs::default()
        };
        let dict = load_dictionary(&args).unwrap();
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("zebra"));
    }

    #[test]
    fn bad_utf8_suggests_latin1() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9\n").unwrap();
        let args = CommonArgs {
            dict: Some(file.path().to_path_buf()),
            ..CommonArgs::default()
        };
        let err = load_dictionary(&args).unwrap_err();
        assert!(err.ends_with("(try --latin1)"), "{err}");
    }

    #[test]
    fn read_named_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Once upon a tyme").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "Once upon a tyme");
        assert!(read_input(Some(Path::new("/nonexistent/input.txt"))).is_err());
    }
}
