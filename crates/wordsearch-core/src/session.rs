use crate::error::SessionError;
use crate::selection::{ClickOutcome, SelectionEngine, SelectionRules};
use crate::{Generator, Grid, Placement, Position, WordSet};
use log::info;

/// One game: a list of word sets played as levels, one active at a time
pub struct GameSession {
    /// Word sets, one per level
    levels: Vec<WordSet>,
    /// Index of the active level
    current: usize,
    /// Grid source for every level
    generator: Generator,
    /// Matching rules applied to every level
    rules: SelectionRules,
    /// Selection state of the active level
    engine: SelectionEngine,
    /// Hints requested on the active level
    hints_used: usize,
}

impl GameSession {
    /// Start a game on the first level
    pub fn new(
        levels: Vec<WordSet>,
        mut generator: Generator,
        rules: SelectionRules,
    ) -> Result<Self, SessionError> {
        let first = levels.first().ok_or(SessionError::NoLevels)?;
        let grid = generator.generate(first)?;
        let engine = SelectionEngine::new(grid, first.clone(), rules);
        info!("starting level 1 of {}", levels.len());

        Ok(Self {
            levels,
            current: 0,
            generator,
            rules,
            engine,
            hints_used: 0,
        })
    }

    /// Pass a click on to the active level
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        self.engine.click(pos)
    }

    /// Drop the current selection chain
    pub fn clear_chain(&mut self) -> bool {
        self.engine.clear_chain()
    }

    /// Move to the next word set, wrapping back to the first after the last
    pub fn next_level(&mut self) -> Result<(), SessionError> {
        let next = (self.current + 1) % self.levels.len();
        self.load_level(next)
    }

    /// Play the current word set again on a fresh grid
    pub fn restart_level(&mut self) -> Result<(), SessionError> {
        self.load_level(self.current)
    }

    /// Generate the grid first so a failure leaves the active level as it was
    fn load_level(&mut self, level: usize) -> Result<(), SessionError> {
        let words = &self.levels[level];
        let grid = self.generator.generate(words)?;

        self.engine = SelectionEngine::new(grid, words.clone(), self.rules);
        self.current = level;
        self.hints_used = 0;
        info!("starting level {} of {}", level + 1, self.levels.len());
        Ok(())
    }

    /// Where the first unfound word is hidden
    pub fn hint(&mut self) -> Option<Placement> {
        if self.engine.is_round_ended() {
            return None;
        }
        let placement = self
            .engine
            .remaining_words()
            .find_map(|word| self.engine.grid().find_word(word))?;
        self.hints_used += 1;
        Some(placement)
    }

    /// Active level, counting from 0
    pub fn level(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn words(&self) -> &WordSet {
        self.engine.words()
    }

    pub fn found_words(&self) -> &[String] {
        self.engine.found_words()
    }

    pub fn remaining_words(&self) -> impl Iterator<Item = &String> {
        self.engine.remaining_words()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.engine.is_found(word)
    }

    pub fn chain(&self) -> &[Position] {
        self.engine.chain()
    }

    /// Letters spelled by the current chain
    pub fn candidate(&self) -> String {
        self.engine.candidate()
    }

    pub fn is_selected(&self, pos: Position) -> bool {
        self.engine.is_selected(pos)
    }

    pub fn is_confirmed(&self, pos: Position) -> bool {
        self.engine.is_confirmed(pos)
    }

    pub fn is_round_ended(&self) -> bool {
        self.engine.is_round_ended()
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn rules(&self) -> SelectionRules {
        self.rules
    }
}
