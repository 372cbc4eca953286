use anyhow::{bail, Context};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use wordsearch_core::{
    GeneratorConfig, PushOutcome, SelectionRules, WordSet, WordSetBuilder, WordSetError,
    DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS_PER_WORD, MAX_GRID_SIZE, MAX_WORDS_PER_SET,
};

/// Find the hidden words in a grid of letters
#[derive(Debug, Parser)]
#[command(name = "wordsearch", version, about)]
pub struct Args {
    /// Width and height of the grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_size)]
    pub size: usize,

    /// Seed for a reproducible grid (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma separated words for one level; repeat for more levels
    #[arg(short, long = "level", value_name = "WORDS")]
    pub levels: Vec<String>,

    /// JSON file holding a list of word lists
    #[arg(short = 'f', long, value_name = "FILE")]
    pub word_sets: Option<PathBuf>,

    /// Hold back a match while the selection can still grow into a longer word
    #[arg(long)]
    pub lookahead: bool,

    /// Placement attempts per word before the grid is rebuilt
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS_PER_WORD)]
    pub max_attempts: usize,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Levels from `--word-sets`, then `--level`, or the built-in list
    pub fn word_sets(&self) -> anyhow::Result<Vec<WordSet>> {
        let mut sets = Vec::new();

        if let Some(path) = &self.word_sets {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            sets.extend(
                parse_word_sets(&json).with_context(|| format!("loading {}", path.display()))?,
            );
        }

        for (i, level) in self.levels.iter().enumerate() {
            let set = parse_level(level).with_context(|| format!("--level #{}", i + 1))?;
            sets.push(set);
        }

        if sets.is_empty() {
            sets = default_levels();
        }
        Ok(sets)
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            size: self.size,
            max_attempts_per_word: self.max_attempts,
            ..GeneratorConfig::default()
        }
    }

    pub fn rules(&self) -> SelectionRules {
        SelectionRules {
            lookahead: self.lookahead,
        }
    }
}

/// Accepted layouts for a word-set file
#[derive(Deserialize)]
#[serde(untagged)]
enum WordSetsFile {
    Plain(Vec<Vec<String>>),
    Named { levels: Vec<Vec<String>> },
}

/// Parse `[["CAT", "DOG"], ["OAK"]]` or `{"levels": [...]}`
pub fn parse_word_sets(json: &str) -> anyhow::Result<Vec<WordSet>> {
    let file: WordSetsFile = serde_json::from_str(json).context("expected a list of word lists")?;
    let raw = match file {
        WordSetsFile::Plain(levels) | WordSetsFile::Named { levels } => levels,
    };
    if raw.is_empty() {
        bail!("no word sets in file");
    }

    raw.into_iter()
        .enumerate()
        .map(|(i, words)| build_level(words).with_context(|| format!("word set #{}", i + 1)))
        .collect()
}

/// Split `"cat, dog,bird"` into a word set
pub fn parse_level(list: &str) -> Result<WordSet, WordSetError> {
    build_level(list.split(',').map(str::trim).filter(|w| !w.is_empty()))
}

/// Collect words as if typed one by one: repeats are skipped, and a word
/// past [`MAX_WORDS_PER_SET`] fails the whole level
fn build_level<I, S>(words: I) -> Result<WordSet, WordSetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: Vec<S> = words.into_iter().collect();
    let mut builder = WordSetBuilder::new();
    for word in &words {
        if builder.push(word.as_ref())? == PushOutcome::Full {
            return Err(WordSetError::TooManyWords {
                count: words.len(),
                max: MAX_WORDS_PER_SET,
            });
        }
    }
    builder.build()
}

/// Grid sizes the terminal can show
fn parse_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg.parse().map_err(|e| format!("{}", e))?;
    if (1..=MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("must be between 1 and {}", MAX_GRID_SIZE))
    }
}

/// Levels played when none are given on the command line
pub fn default_levels() -> Vec<WordSet> {
    const LEVELS: &[&[&str]] = &[
        &["RUST", "CARGO", "CRATE", "TRAIT", "BORROW", "LIFETIME"],
        &["APPLE", "BANANA", "CHERRY", "GRAPE", "LEMON", "MANGO", "PEACH"],
        &["MERCURY", "VENUS", "EARTH", "MARS", "JUPITER", "SATURN", "URANUS", "NEPTUNE"],
    ];
    LEVELS
        .iter()
        .filter_map(|words| WordSet::new(words.iter()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wordsearch"]).unwrap();
        assert_eq!(args.size, DEFAULT_GRID_SIZE);
        assert_eq!(args.seed, None);
        assert!(!args.lookahead);
        assert_eq!(args.word_sets().unwrap().len(), default_levels().len());
        assert_eq!(
            args.generator_config().max_attempts_per_word,
            DEFAULT_MAX_ATTEMPTS_PER_WORD
        );
    }

    #[test]
    fn test_levels_from_flags() {
        let args = Args::try_parse_from([
            "wordsearch",
            "--size",
            "12",
            "--seed",
            "42",
            "-l",
            "cat, dog",
            "--level",
            "owl",
            "--lookahead",
        ])
        .unwrap();

        let sets = args.word_sets().unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].words(), ["CAT", "DOG"]);
        assert_eq!(sets[1].words(), ["OWL"]);
        assert_eq!(args.generator_config().size, 12);
        assert_eq!(args.seed, Some(42));
        assert!(args.rules().lookahead);
    }

    #[test]
    fn test_bad_level_flag() {
        let args = Args::try_parse_from(["wordsearch", "-l", "cat,d0g"]).unwrap();
        let err = args.word_sets().unwrap_err();
        assert!(format!("{:#}", err).contains("only the letters A-Z"));
    }

    #[test]
    fn test_repeated_words_are_skipped() {
        let args = Args::try_parse_from(["wordsearch", "-l", "cat, dog, CAT"]).unwrap();
        assert_eq!(args.word_sets().unwrap()[0].words(), ["CAT", "DOG"]);

        let sets = parse_word_sets(r#"[["sun", "SUN", "moon"]]"#).unwrap();
        assert_eq!(sets[0].words(), ["SUN", "MOON"]);
    }

    #[test]
    fn test_level_over_word_limit() {
        let words: Vec<String> = (0..=MAX_WORDS_PER_SET)
            .map(|i| format!("W{}", (b'A' + i as u8) as char))
            .collect();
        assert_eq!(
            parse_level(&words.join(",")),
            Err(WordSetError::TooManyWords {
                count: MAX_WORDS_PER_SET + 1,
                max: MAX_WORDS_PER_SET
            })
        );
        assert!(parse_level(&words[..MAX_WORDS_PER_SET].join(",")).is_ok());
    }

    #[test]
    fn test_size_is_bounded() {
        let max = MAX_GRID_SIZE.to_string();
        let args = Args::try_parse_from(["wordsearch", "--size", &max]).unwrap();
        assert_eq!(args.size, MAX_GRID_SIZE);

        let over = (MAX_GRID_SIZE + 1).to_string();
        for size in ["0", over.as_str(), "30000", "-1", "big"] {
            assert!(Args::try_parse_from(["wordsearch", "--size", size]).is_err());
        }
    }

    #[test]
    fn test_parse_level_skips_blanks() {
        let set = parse_level(" red,, blue ,").unwrap();
        assert_eq!(set.words(), ["RED", "BLUE"]);
        assert_eq!(parse_level(" , "), Err(WordSetError::NoWords));
    }

    #[test]
    fn test_parse_word_sets_layouts() {
        let plain = parse_word_sets(r#"[["cat", "dog"], ["oak"]]"#).unwrap();
        assert_eq!(plain.len(), 2);
        assert_eq!(plain[1].words(), ["OAK"]);

        let named = parse_word_sets(r#"{"levels": [["sun"]]}"#).unwrap();
        assert_eq!(named[0].words(), ["SUN"]);
    }

    #[test]
    fn test_parse_word_sets_errors() {
        assert!(parse_word_sets("[]").is_err());
        assert!(parse_word_sets(r#"{"words": []}"#).is_err());

        let err = parse_word_sets(r#"[["ok"], ["two words"]]"#).unwrap_err();
        assert!(format!("{:#}", err).contains("word set #2"));
    }

    #[test]
    fn test_default_levels_are_valid() {
        let levels = default_levels();
        assert_eq!(levels.len(), 3);
        assert!(levels.iter().all(|set| set.longest() <= DEFAULT_GRID_SIZE));
    }
}
