//! Word search engine
//!
//! Lays a list of words into a square letter grid and tracks a player's
//! cell selections until every word has been found.
//!
//! ```
//! use wordsearch_core::{GameSession, Generator, SelectionRules, WordSet};
//!
//! let words = WordSet::new(["cat", "dog"]).unwrap();
//! let mut session =
//!     GameSession::new(vec![words], Generator::with_seed(1), SelectionRules::default()).unwrap();
//!
//! let hint = session.hint().unwrap();
//! for pos in hint.cells() {
//!     session.click(pos);
//! }
//! assert_eq!(session.found_words(), ["CAT"]);
//! ```

mod error;
mod generator;
mod grid;
mod selection;
mod session;
mod word_set;

pub use error::{GenerateError, GridError, SessionError, WordSetError};
pub use generator::{
    Generator, GeneratorConfig, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS_PER_WORD, MAX_GRID_SIZE,
};
pub use grid::{Direction, Grid, Placement, Position};
pub use selection::{ClickOutcome, SelectionEngine, SelectionRules};
pub use session::GameSession;
pub use word_set::{PushOutcome, WordSet, WordSetBuilder, MAX_WORDS_PER_SET};
