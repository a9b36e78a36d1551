//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while reading a word list from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse word list {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load words from a file
///
/// Two formats are accepted:
/// - a JSON array of strings (`["СЛОВО", "ВОЛНА"]`)
/// - plain text with one word per line; blank lines and `#` comments are skipped
///
/// Entries that are not valid game words are skipped with a debug log.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or a JSON file is malformed.
///
/// # Examples
/// ```no_run
/// use slovo::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = if content.trim_start().starts_with('[') {
        let entries: Vec<String> =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        parse_entries(entries.iter().map(String::as_str))
    } else {
        parse_entries(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    };

    if words.is_empty() {
        warn!(path = %path.display(), "word list contains no usable words");
    } else {
        info!(path = %path.display(), count = words.len(), "loaded word list");
    }

    Ok(words)
}

fn parse_entries<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    entries
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!(entry, error = %e, "skipping word list entry");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use slovo::wordlists::loader::words_from_slice;
/// use slovo::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "slovo-loader-{}-{name}",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["слово", "ВОЛНА", "арбуз"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "СЛОВО");
        assert_eq!(words[2].text(), "АРБУЗ");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["слово", "карандаш", "слон", "crane", "волна"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "СЛОВО");
        assert_eq!(words[1].text(), "ВОЛНА");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_json_array() {
        let path = temp_file("array.json", r#"["СЛОВО", "волна", "слон"]"#);
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "ВОЛНА");
    }

    #[test]
    fn load_text_lines_with_comments() {
        let path = temp_file("list.txt", "# dictionary\nСЛОВО\n\n  арбуз  \nxyzzy\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "СЛОВО");
        assert_eq!(words[1].text(), "АРБУЗ");
    }

    #[test]
    fn load_malformed_json_is_error() {
        let path = temp_file("broken.json", r#"["СЛОВО", "#);
        let result = load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(LoadError::Json { .. })));
    }

    #[test]
    fn load_missing_file_is_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
