use crate::error::WordSetError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of words in one set
pub const MAX_WORDS_PER_SET: usize = 20;

/// The words to find in one level.
///
/// Words are uppercase A-Z, unique and kept in the order they were entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    /// Validate and normalise a list of words
    pub fn new<I, S>(words: I) -> Result<Self, WordSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        let mut seen = HashSet::new();

        for word in words {
            let word = normalize(word.as_ref())?;
            if !seen.insert(word.clone()) {
                return Err(WordSetError::Duplicate { word });
            }
            normalized.push(word);
        }

        if normalized.is_empty() {
            return Err(WordSetError::NoWords);
        }
        if normalized.len() > MAX_WORDS_PER_SET {
            return Err(WordSetError::TooManyWords {
                count: normalized.len(),
                max: MAX_WORDS_PER_SET,
            });
        }

        Ok(Self { words: normalized })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Letter count of the longest word
    pub fn longest(&self) -> usize {
        self.words.iter().map(|w| w.len()).max().unwrap_or(0)
    }
}

impl TryFrom<Vec<String>> for WordSet {
    type Error = WordSetError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        WordSet::new(words)
    }
}

impl From<WordSet> for Vec<String> {
    fn from(set: WordSet) -> Self {
        set.words
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Result of offering a word to a [`WordSetBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Added,
    /// The word was already in the set and was skipped
    AlreadyPresent,
    /// The set holds [`MAX_WORDS_PER_SET`] words and takes no more
    Full,
}

/// Collects words one at a time the way an input box would.
///
/// Duplicates are skipped rather than rejected, and the builder refuses new
/// words once the set is full.
#[derive(Debug, Clone, Default)]
pub struct WordSetBuilder {
    words: Vec<String>,
}

impl WordSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: &str) -> Result<PushOutcome, WordSetError> {
        if self.is_full() {
            return Ok(PushOutcome::Full);
        }
        let word = normalize(word)?;
        if self.words.contains(&word) {
            debug!("{} is already in the list", word);
            return Ok(PushOutcome::AlreadyPresent);
        }
        self.words.push(word);
        Ok(PushOutcome::Added)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.words.len() >= MAX_WORDS_PER_SET
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn build(self) -> Result<WordSet, WordSetError> {
        WordSet::new(self.words)
    }
}

fn normalize(word: &str) -> Result<String, WordSetError> {
    let word = word.trim().to_uppercase();
    if word.is_empty() {
        return Err(WordSetError::EmptyWord);
    }
    if let Some(ch) = word.chars().find(|c| !c.is_ascii_uppercase()) {
        return Err(WordSetError::InvalidCharacter { word, ch });
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_words() {
        let set = WordSet::new([" cat", "Dog ", "BIRD"]).unwrap();
        assert_eq!(set.words(), ["CAT", "DOG", "BIRD"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.longest(), 4);
        assert!(set.contains("DOG"));
        assert!(!set.contains("dog"));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(WordSet::new(Vec::<String>::new()), Err(WordSetError::NoWords));
        assert_eq!(WordSet::new(["CAT", "  "]), Err(WordSetError::EmptyWord));
        assert_eq!(
            WordSet::new(["cat", "CAT"]),
            Err(WordSetError::Duplicate { word: "CAT".into() })
        );
        assert_eq!(
            WordSet::new(["ICE CREAM"]),
            Err(WordSetError::InvalidCharacter {
                word: "ICE CREAM".into(),
                ch: ' '
            })
        );
    }

    #[test]
    fn test_too_many_words() {
        let words: Vec<String> = (0..=MAX_WORDS_PER_SET)
            .map(|i| format!("W{}", (b'A' + i as u8) as char))
            .collect();
        assert_eq!(
            WordSet::new(words),
            Err(WordSetError::TooManyWords {
                count: MAX_WORDS_PER_SET + 1,
                max: MAX_WORDS_PER_SET
            })
        );
    }

    #[test]
    fn test_builder_skips_duplicates_and_fills_up() {
        let mut builder = WordSetBuilder::new();
        assert_eq!(builder.push("apple"), Ok(PushOutcome::Added));
        assert_eq!(builder.push(" APPLE "), Ok(PushOutcome::AlreadyPresent));
        assert_eq!(builder.push(""), Err(WordSetError::EmptyWord));
        assert_eq!(builder.len(), 1);

        for i in 1..MAX_WORDS_PER_SET {
            let word: String = std::iter::repeat('A').take(i).chain(['Z']).collect();
            assert_eq!(builder.push(&word), Ok(PushOutcome::Added));
        }
        assert!(builder.is_full());
        assert_eq!(builder.push("LATE"), Ok(PushOutcome::Full));

        let set = builder.build().unwrap();
        assert_eq!(set.len(), MAX_WORDS_PER_SET);
        assert_eq!(set.words()[0], "APPLE");
    }

    #[test]
    fn test_serde_validates() {
        let set: WordSet = serde_json::from_str(r#"["sun", "moon"]"#).unwrap();
        assert_eq!(set.words(), ["SUN", "MOON"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["SUN","MOON"]"#);

        assert!(serde_json::from_str::<WordSet>(r#"["SUN", "sun"]"#).is_err());
        assert!(serde_json::from_str::<WordSet>("[]").is_err());
    }
}
