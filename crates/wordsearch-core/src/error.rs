use thiserror::Error;

/// Reasons a list of words cannot become a [`WordSet`](crate::WordSet)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSetError {
    #[error("a word set needs at least one word")]
    NoWords,
    #[error("empty words are not allowed")]
    EmptyWord,
    #[error("word {word:?} contains {ch:?}, only the letters A-Z are allowed")]
    InvalidCharacter { word: String, ch: char },
    #[error("word {word:?} is already in the set")]
    Duplicate { word: String },
    #[error("{count} words given, a set holds at most {max}")]
    TooManyWords { count: usize, max: usize },
}

/// Reasons grid generation gave up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("grid size {size} is over the limit of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("word {word:?} has {len} letters but the grid is only {size} wide")]
    WordTooLong { word: String, len: usize, size: usize },
    #[error("could not place {word:?} after {attempts} grid attempts")]
    WordUnplaceable { word: String, attempts: usize },
}

/// Reasons a stored grid cannot be loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("a {size}x{size} grid needs {size}² cells, found {found}")]
    CellCount { size: usize, found: usize },
}

/// Errors raised while starting or switching levels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a game needs at least one word set")]
    NoLevels,
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
