use crate::error::GenerateError;
use crate::{Direction, Grid, Position, WordSet};
use log::{debug, warn};

/// Letters used to fill cells no word passes through
const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default grid width and height
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Largest grid the generator will build
pub const MAX_GRID_SIZE: usize = 50;

/// Default random draws per word before the grid is rebuilt
pub const DEFAULT_MAX_ATTEMPTS_PER_WORD: usize = 500;

/// Configuration for grid generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Width and height of the square grid
    pub size: usize,
    /// Random start/direction draws tried for one word before the grid is
    /// thrown away
    pub max_attempts_per_word: usize,
    /// Fresh grids tried before giving up on the word set
    pub max_grid_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            max_attempts_per_word: DEFAULT_MAX_ATTEMPTS_PER_WORD,
            max_grid_attempts: 20,
        }
    }
}

impl GeneratorConfig {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

/// Word search grid generator
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Generator {
    /// Create a randomly seeded generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Replace the configuration, keeping the random stream
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Lay every word of `words` into a fresh grid and fill the rest with
    /// random letters
    pub fn generate(&mut self, words: &WordSet) -> Result<Grid, GenerateError> {
        let size = self.config.size;
        if size == 0 {
            return Err(GenerateError::EmptyGrid);
        }
        if size > MAX_GRID_SIZE {
            return Err(GenerateError::GridTooLarge {
                size,
                max: MAX_GRID_SIZE,
            });
        }
        if let Some(word) = words.iter().find(|w| w.len() > size) {
            return Err(GenerateError::WordTooLong {
                word: word.clone(),
                len: word.len(),
                size,
            });
        }

        let attempts = self.config.max_grid_attempts.max(1);
        let mut last_failed = String::new();

        for attempt in 1..=attempts {
            match self.place_all(words) {
                Ok(mut grid) => {
                    self.fill_empty(&mut grid);
                    return Ok(grid);
                }
                Err(word) => {
                    warn!(
                        "grid attempt {}/{} could not fit {}, starting over",
                        attempt, attempts, word
                    );
                    last_failed = word;
                }
            }
        }

        Err(GenerateError::WordUnplaceable {
            word: last_failed,
            attempts,
        })
    }

    /// Place the words in order on an empty grid. Returns the first word
    /// that ran out of attempts.
    fn place_all(&mut self, words: &WordSet) -> Result<Grid, String> {
        let mut grid = Grid::new(self.config.size);
        for word in words {
            if !self.place_word(&mut grid, word) {
                return Err(word.clone());
            }
        }
        Ok(grid)
    }

    /// Try random starts and directions until the word fits
    fn place_word(&mut self, grid: &mut Grid, word: &str) -> bool {
        let size = self.config.size;
        for attempt in 1..=self.config.max_attempts_per_word {
            let start = Position::new(self.rng.next_usize(size), self.rng.next_usize(size));
            let direction = Direction::ALL[self.rng.next_usize(Direction::ALL.len())];

            if grid.can_place(word, start, direction) {
                grid.place(word, start, direction);
                debug!(
                    "placed {} at {} going {} after {} attempts",
                    word, start, direction, attempt
                );
                return true;
            }
        }
        false
    }

    fn fill_empty(&mut self, grid: &mut Grid) {
        for pos in Position::all(grid.size()) {
            if grid.get(pos).is_none() {
                let letter = ALPHABET[self.rng.next_usize(ALPHABET.len())] as char;
                grid.set(pos, letter);
            }
        }
    }
}

/// Small seedable PRNG so grids can be replayed from a seed
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
