//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::{BUILTIN, WordList, WordSource};
use crate::error::WordSourceError;
use std::fs;
use std::path::Path;

/// Load candidate words from a file, one per line
///
/// Line terminators are stripped. Blank or invalid lines are kept so the
/// session can reject and redraw them, but a file without a single valid word
/// is an error.
///
/// # Errors
///
/// Returns `WordSourceError::Unreadable` if the file cannot be opened or is not
/// UTF-8, and `WordSourceError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
/// use hangman::wordlists::WordSource;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordSourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordSourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    from_text(path.display().to_string(), &content)
}

/// Build a word list from newline-separated text
///
/// # Errors
///
/// Returns `WordSourceError::Empty` if no line is a valid secret word.
pub fn from_text(origin: String, content: &str) -> Result<WordList, WordSourceError> {
    let lines = content.lines().map(str::to_string).collect();
    let list = WordList::new(origin, lines);
    if list.distinct_words() == 0 {
        return Err(WordSourceError::Empty {
            origin: list.origin().to_string(),
        });
    }

    tracing::debug!(
        origin = list.origin(),
        lines = list.len(),
        "word list loaded"
    );
    Ok(list)
}

/// Resolve the `--wordlist` argument
///
/// `builtin` selects the embedded list; anything else is a file path.
///
/// # Errors
///
/// Propagates errors from [`load_from_file`].
pub fn load(spec: &str) -> Result<WordList, WordSourceError> {
    if spec == BUILTIN {
        Ok(WordList::builtin())
    } else {
        load_from_file(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("hangman-{}-{name}", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn from_text_strips_terminators() {
        let list = from_text("test".to_string(), "cabin\r\ncastle\ncrypt\n").unwrap();
        assert_eq!(list.lines(), &["cabin", "castle", "crypt"]);
        assert_eq!(list.distinct_words(), 3);
    }

    #[test]
    fn from_text_keeps_blank_lines_as_candidates() {
        let list = from_text("test".to_string(), "cabin\n\ncastle\n").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.distinct_words(), 2);
    }

    #[test]
    fn from_text_rejects_blank_content() {
        assert!(matches!(
            from_text("test".to_string(), ""),
            Err(WordSourceError::Empty { .. })
        ));
        assert!(matches!(
            from_text("test".to_string(), "\n  \n\n"),
            Err(WordSourceError::Empty { .. })
        ));
    }

    #[test]
    fn from_text_rejects_only_invalid_lines() {
        let err = from_text("digits.txt".to_string(), "1234\nr2d2\n").unwrap_err();
        assert!(matches!(err, WordSourceError::Empty { .. }));
        assert_eq!(err.to_string(), "word list digits.txt contains no words");
    }

    #[test]
    fn load_from_file_with_no_valid_word() {
        let path = temp_file("invalid.txt", "1234\nr2d2\n");
        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(WordSourceError::Empty { .. })));
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = temp_file("words.txt", "gazebo\nhaiku\n");
        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.lines(), &["gazebo", "haiku"]);
        assert_eq!(list.origin(), path.display().to_string());
    }

    #[test]
    fn load_from_missing_file() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, WordSourceError::Unreadable { .. }));
        assert!(err.to_string().contains("/definitely/not/here/words.txt"));
    }

    #[test]
    fn load_builtin() {
        let list = load(BUILTIN).unwrap();
        assert_eq!(list.origin(), BUILTIN);
        assert!(!list.is_empty());
    }
}
