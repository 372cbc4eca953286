//! Cell selection and word matching for one level.
//!
//! The engine sees the grid only through [`Position`]s. Each click updates
//! the in-progress chain of selected cells, and when the chain spells a word
//! that has not been found yet the word is confirmed.

use crate::{Grid, Position, WordSet};
use log::{debug, info, trace};

/// Optional matching behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionRules {
    /// Hold back a match while the next cell along the current line would
    /// still extend the chain into a longer unfound word
    pub lookahead: bool,
}

/// What a single click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Round over or click outside the grid
    Ignored,
    /// Cell appended to the chain
    Selected,
    /// Cell (and anything chained after it) removed from the chain
    Deselected,
    /// Cell was not next to the chain; it starts a new chain on its own
    ChainReset,
    /// The chain spelled an unfound word
    WordFound { word: String, cells: Vec<Position> },
    /// Same as `WordFound`, and it was the last word of the level
    LevelComplete { word: String, cells: Vec<Position> },
}

impl ClickOutcome {
    pub fn found_word(&self) -> Option<&str> {
        match self {
            ClickOutcome::WordFound { word, .. } | ClickOutcome::LevelComplete { word, .. } => {
                Some(word)
            }
            _ => None,
        }
    }

    pub fn is_level_complete(&self) -> bool {
        matches!(self, ClickOutcome::LevelComplete { .. })
    }
}

/// Tracks the chain, confirmed cells and found words of one level
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    grid: Grid,
    words: WordSet,
    rules: SelectionRules,
    /// Selected, unconfirmed cells in click order
    chain: Vec<Position>,
    /// Row-major flags for cells belonging to a found word
    confirmed: Vec<bool>,
    /// Found words in the order they were found
    found: Vec<String>,
    round_ended: bool,
}

impl SelectionEngine {
    pub fn new(grid: Grid, words: WordSet, rules: SelectionRules) -> Self {
        let cells = grid.size() * grid.size();
        Self {
            grid,
            words,
            rules,
            chain: Vec::new(),
            confirmed: vec![false; cells],
            found: Vec::new(),
            round_ended: false,
        }
    }

    /// Process one click
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.round_ended {
            trace!("round over, ignoring click at {}", pos);
            return ClickOutcome::Ignored;
        }
        if !self.grid.contains(pos) {
            trace!("click at {} is outside the grid", pos);
            return ClickOutcome::Ignored;
        }

        // Re-clicking a chained cell is checked before adjacency, since a
        // cell is adjacent to itself
        let outcome = if let Some(idx) = self.chain.iter().position(|p| *p == pos) {
            self.chain.truncate(idx);
            ClickOutcome::Deselected
        } else if self.chain.last().is_some_and(|last| !last.is_adjacent(pos)) {
            self.chain.clear();
            self.chain.push(pos);
            ClickOutcome::ChainReset
        } else {
            self.chain.push(pos);
            ClickOutcome::Selected
        };

        self.check_match().unwrap_or(outcome)
    }

    /// Drop the current chain. Returns false if it was already empty.
    pub fn clear_chain(&mut self) -> bool {
        if self.round_ended || self.chain.is_empty() {
            return false;
        }
        self.chain.clear();
        true
    }

    /// Letters of the chained cells in click order
    pub fn candidate(&self) -> String {
        self.grid.letters(&self.chain)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    pub fn rules(&self) -> SelectionRules {
        self.rules
    }

    pub fn chain(&self) -> &[Position] {
        &self.chain
    }

    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.iter().any(|w| w == word)
    }

    /// Words of the set not found yet, in set order
    pub fn remaining_words(&self) -> impl Iterator<Item = &String> {
        self.words.iter().filter(|w| !self.is_found(w))
    }

    pub fn is_selected(&self, pos: Position) -> bool {
        self.chain.contains(&pos)
    }

    pub fn is_confirmed(&self, pos: Position) -> bool {
        self.grid.contains(pos) && self.confirmed[self.index(pos)]
    }

    pub fn is_round_ended(&self) -> bool {
        self.round_ended
    }

    fn check_match(&mut self) -> Option<ClickOutcome> {
        let candidate = self.candidate();
        let word = self.remaining_words().find(|w| **w == candidate)?.clone();

        if self.rules.lookahead && self.continues_to_longer_word(&candidate) {
            debug!("holding back {}, the line continues into a longer word", word);
            return None;
        }

        let cells = std::mem::take(&mut self.chain);
        for pos in &cells {
            let idx = self.index(*pos);
            self.confirmed[idx] = true;
        }
        self.found.push(word.clone());
        info!("found {} ({}/{})", word, self.found.len(), self.words.len());

        if self.found.len() == self.words.len() {
            self.round_ended = true;
            info!("all {} words found, round over", self.words.len());
            Some(ClickOutcome::LevelComplete { word, cells })
        } else {
            Some(ClickOutcome::WordFound { word, cells })
        }
    }

    /// Whether the cell one step further along the last move would make
    /// the chain a prefix of some unfound word
    fn continues_to_longer_word(&self, candidate: &str) -> bool {
        let [.., prev, last] = self.chain.as_slice() else {
            return false;
        };
        let Some(next) = prev
            .direction_to(*last)
            .and_then(|dir| last.offset(dir, 1))
        else {
            return false;
        };
        let Some(letter) = self.grid.get(next) else {
            return false;
        };

        let mut extended = String::with_capacity(candidate.len() + 1);
        extended.push_str(candidate);
        extended.push(letter);
        self.remaining_words().any(|w| w.starts_with(&extended))
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.grid.size() + pos.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn engine(rows: &[&str], words: &[&str]) -> SelectionEngine {
        let grid = Grid::from_rows(rows).unwrap();
        let words = WordSet::new(words).unwrap();
        SelectionEngine::new(grid, words, SelectionRules::default())
    }

    fn cat_engine() -> SelectionEngine {
        engine(&["CATX", "QWER", "ASDF", "ZXCV"], &["CAT"])
    }

    #[test]
    fn test_cat_completes_level() {
        let mut engine = cat_engine();

        assert_eq!(engine.click(p(0, 0)), ClickOutcome::Selected);
        assert_eq!(engine.click(p(0, 1)), ClickOutcome::Selected);
        assert_eq!(engine.candidate(), "CA");

        let outcome = engine.click(p(0, 2));
        assert_eq!(
            outcome,
            ClickOutcome::LevelComplete {
                word: "CAT".into(),
                cells: vec![p(0, 0), p(0, 1), p(0, 2)],
            }
        );
        assert_eq!(engine.found_words(), ["CAT"]);
        assert!(engine.chain().is_empty());
        assert!(engine.is_round_ended());
        assert!(engine.is_confirmed(p(0, 1)));
        assert!(!engine.is_confirmed(p(1, 1)));
    }

    #[test]
    fn test_non_adjacent_click_starts_new_chain() {
        let mut engine = cat_engine();

        engine.click(p(0, 0));
        assert_eq!(engine.click(p(2, 2)), ClickOutcome::ChainReset);
        assert_eq!(engine.chain(), [p(2, 2)]);
    }

    #[test]
    fn test_reclick_deselects() {
        let mut engine = cat_engine();

        engine.click(p(0, 0));
        engine.click(p(0, 1));
        // The same cell is adjacent to itself, but the toggle path wins
        assert_eq!(engine.click(p(0, 1)), ClickOutcome::Deselected);
        assert_eq!(engine.chain(), [p(0, 0)]);

        assert_eq!(engine.click(p(0, 0)), ClickOutcome::Deselected);
        assert!(engine.chain().is_empty());
    }

    #[test]
    fn test_deselecting_inside_chain_truncates() {
        let mut engine = engine(&["ABCD", "EFGH", "IJKL", "MNOP"], &["ZZZ"]);

        engine.click(p(0, 0));
        engine.click(p(1, 1));
        engine.click(p(2, 2));
        engine.click(p(3, 3));
        assert_eq!(engine.click(p(1, 1)), ClickOutcome::Deselected);
        assert_eq!(engine.chain(), [p(0, 0)]);
    }

    #[test]
    fn test_adjacent_to_earlier_cell_only_resets() {
        let mut engine = engine(&["ABCD", "EFGH", "IJKL", "MNOP"], &["ZZZ"]);

        engine.click(p(0, 0));
        engine.click(p(0, 1));
        engine.click(p(0, 2));
        // Touches (0,0) but not the end of the chain
        assert_eq!(engine.click(p(1, 0)), ClickOutcome::ChainReset);
        assert_eq!(engine.chain(), [p(1, 0)]);
    }

    #[test]
    fn test_chain_stays_adjacent() {
        let mut engine = engine(
            &["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"],
            &["NOTHERE"],
        );

        let mut seed: usize = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345) % (1 << 31);
            let pos = p(seed % 5, (seed / 5) % 5);
            engine.click(pos);

            for pair in engine.chain().windows(2) {
                assert!(pair[0].is_adjacent(pair[1]), "{} and {} are apart", pair[0], pair[1]);
                assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_found_word_is_not_found_twice() {
        let mut engine = engine(&["CATX", "DOGX", "CATX", "XXXX"], &["CAT", "DOG"]);

        let first = engine.click(p(0, 0));
        assert_eq!(first, ClickOutcome::Selected);
        engine.click(p(0, 1));
        assert_eq!(engine.click(p(0, 2)).found_word(), Some("CAT"));

        // Spell CAT again on row 2
        engine.click(p(2, 0));
        engine.click(p(2, 1));
        assert_eq!(engine.click(p(2, 2)), ClickOutcome::Selected);
        assert_eq!(engine.found_words(), ["CAT"]);
        assert_eq!(engine.chain().len(), 3);
        assert!(!engine.is_round_ended());
    }

    #[test]
    fn test_confirmed_cells_can_anchor_new_words() {
        // CAT across the top, TOP down from the T
        let mut engine = engine(&["CAT", "XXO", "XXP"], &["CAT", "TOP"]);

        engine.click(p(0, 0));
        engine.click(p(0, 1));
        assert!(engine.click(p(0, 2)).found_word().is_some());
        assert!(engine.is_confirmed(p(0, 2)));

        assert_eq!(engine.click(p(0, 2)), ClickOutcome::Selected);
        engine.click(p(1, 2));
        let outcome = engine.click(p(2, 2));
        assert!(outcome.is_level_complete());
        assert!(engine.is_confirmed(p(0, 2)));
    }

    #[test]
    fn test_deselecting_confirmed_cell_keeps_it_confirmed() {
        let mut engine = engine(&["CAT", "XXO", "XXP"], &["CAT", "TOP"]);

        engine.click(p(0, 0));
        engine.click(p(0, 1));
        engine.click(p(0, 2));

        engine.click(p(0, 2));
        assert_eq!(engine.click(p(0, 2)), ClickOutcome::Deselected);
        assert!(engine.is_confirmed(p(0, 2)));
    }

    #[test]
    fn test_round_ended_blocks_input() {
        let mut engine = cat_engine();
        engine.click(p(0, 0));
        engine.click(p(0, 1));
        engine.click(p(0, 2));

        assert_eq!(engine.click(p(1, 1)), ClickOutcome::Ignored);
        assert!(engine.chain().is_empty());
        assert!(!engine.clear_chain());
    }

    #[test]
    fn test_completion_waits_for_every_word() {
        let mut engine = engine(&["CAT", "DOG", "XXX"], &["CAT", "DOG"]);

        for col in 0..3 {
            engine.click(p(0, col));
        }
        assert!(!engine.is_round_ended());
        assert_eq!(engine.remaining_words().collect::<Vec<_>>(), ["DOG"]);

        engine.click(p(1, 0));
        engine.click(p(1, 1));
        assert!(engine.click(p(1, 2)).is_level_complete());
        assert_eq!(engine.found_words().len(), engine.words().len());
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut engine = cat_engine();
        engine.click(p(0, 0));
        assert_eq!(engine.click(p(4, 0)), ClickOutcome::Ignored);
        assert_eq!(engine.click(p(0, 9)), ClickOutcome::Ignored);
        assert_eq!(engine.chain(), [p(0, 0)]);
    }

    #[test]
    fn test_clear_chain() {
        let mut engine = cat_engine();
        assert!(!engine.clear_chain());
        engine.click(p(0, 0));
        assert!(engine.clear_chain());
        assert!(engine.chain().is_empty());
    }

    #[test]
    fn test_matches_backwards_words() {
        let mut engine = engine(&["TAC", "XXX", "XXX"], &["CAT"]);
        engine.click(p(0, 2));
        engine.click(p(0, 1));
        assert!(engine.click(p(0, 0)).is_level_complete());
    }

    #[test]
    fn test_lookahead_holds_back_prefix_match() {
        let grid = Grid::from_rows(&["CARTX", "XXXXX", "XXXXX", "XXXXX", "XXXXX"]).unwrap();
        let words = WordSet::new(["CAR", "CART"]).unwrap();

        let mut plain = SelectionEngine::new(grid.clone(), words.clone(), SelectionRules::default());
        plain.click(p(0, 0));
        plain.click(p(0, 1));
        assert_eq!(plain.click(p(0, 2)).found_word(), Some("CAR"));

        let rules = SelectionRules { lookahead: true };
        let mut engine = SelectionEngine::new(grid, words, rules);
        engine.click(p(0, 0));
        engine.click(p(0, 1));
        assert_eq!(engine.click(p(0, 2)), ClickOutcome::Selected);
        assert_eq!(engine.click(p(0, 3)).found_word(), Some("CART"));

        // CART is found, so CAR no longer waits
        engine.click(p(0, 0));
        engine.click(p(0, 1));
        assert!(engine.click(p(0, 2)).is_level_complete());
    }

    #[test]
    fn test_lookahead_only_follows_last_move() {
        // CART continues downwards from R, but the chain moved east
        let grid = Grid::from_rows(&["CARX", "XXTX", "XXXX", "XXXX"]).unwrap();
        let words = WordSet::new(["CAR", "CART"]).unwrap();
        let mut engine = SelectionEngine::new(grid, words, SelectionRules { lookahead: true });

        engine.click(p(0, 0));
        engine.click(p(0, 1));
        assert_eq!(engine.click(p(0, 2)).found_word(), Some("CAR"));
    }
}
