//! Word finder over a generated word list.

use crate::error::WordListError;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// How the available letters may be spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SolveMode {
    /// Each letter may be used at most once, like tiles on a rack.
    Scrabble,
    /// Letters may repeat, like pointing at a ouija board.
    Ouija,
}

/// Linear scan over every word in the list.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    words: Vec<String>,
}

impl Solver {
    /// Builds a solver from newline separated text, skipping empty lines.
    pub fn from_word_list(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    /// Reads a word list from disk.
    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path).map_err(|source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_word_list(&text))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn solve(&self, letters: &str, mode: SolveMode) -> Vec<&str> {
        match mode {
            SolveMode::Scrabble => self.scrabble(letters),
            SolveMode::Ouija => self.ouija(letters),
        }
    }

    /// Words spelled only from `letters`, reusing them freely.
    pub fn ouija(&self, letters: &str) -> Vec<&str> {
        let available: HashSet<char> = fold(letters).collect();

        self.words
            .iter()
            .filter(|word| fold(word).all(|c| available.contains(&c)))
            .map(String::as_str)
            .collect()
    }

    /// Words spelled from `letters` using each one at most once.
    pub fn scrabble(&self, letters: &str) -> Vec<&str> {
        let rack = tally(letters);

        self.words
            .iter()
            .filter(|word| {
                tally(word)
                    .iter()
                    .all(|(c, n)| rack.get(c).is_some_and(|have| have >= n))
            })
            .map(String::as_str)
            .collect()
    }
}

/// Case-folded characters of `s`.
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn tally(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in fold(s) {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LIST: &str = "EE\nEEL\nEH\nHELL\nHELLO\nHOLE\nOLE\nQI";

    #[test]
    fn test_from_word_list_skips_blank_lines() {
        let solver = Solver::from_word_list("\nAA\n\nAB\n");
        assert_eq!(solver.len(), 2);
        assert!(Solver::from_word_list("").is_empty());
    }

    #[test]
    fn test_ouija_allows_repeats() {
        let solver = Solver::from_word_list(LIST);
        assert_eq!(
            solver.ouija("helo"),
            vec!["EE", "EEL", "EH", "HELL", "HELLO", "HOLE", "OLE"]
        );
    }

    #[test]
    fn test_scrabble_spends_each_letter_once() {
        let solver = Solver::from_word_list(LIST);
        assert_eq!(solver.scrabble("hello"), vec!["EH", "HELL", "HELLO", "HOLE", "OLE"]);
        assert_eq!(solver.scrabble("helo"), vec!["EH", "HOLE", "OLE"]);
    }

    #[test]
    fn test_matching_ignores_case() {
        let solver = Solver::from_word_list("qi\nQI");
        assert_eq!(solver.solve("IQ", SolveMode::Scrabble), vec!["qi", "QI"]);
        assert_eq!(solver.solve("iq", SolveMode::Ouija), vec!["qi", "QI"]);
    }

    #[test]
    fn test_no_letters_matches_nothing() {
        let solver = Solver::from_word_list(LIST);
        assert!(solver.scrabble("").is_empty());
        assert!(solver.ouija("").is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordlist.txt");
        std::fs::write(&path, LIST).unwrap();

        let solver = Solver::load(&path).unwrap();
        assert_eq!(solver.len(), 8);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Solver::load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, WordListError::Read { .. }));
    }
}
