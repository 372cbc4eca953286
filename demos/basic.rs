//! Basic example of using the word search engine

use wordsearch_core::{
    ClickOutcome, GameSession, Generator, GeneratorConfig, Position, SelectionRules, WordSet,
};

fn main() {
    // Build the word sets
    let levels = vec![
        WordSet::new(["rust", "cargo", "crate", "trait", "borrow"]).expect("valid words"),
        WordSet::new(["apple", "pear", "plum"]).expect("valid words"),
    ];

    // Generate a puzzle
    println!("Generating a 12x12 grid...\n");
    let generator = Generator::with_config(GeneratorConfig::with_size(12));
    let mut session = match GameSession::new(levels, generator, SelectionRules::default()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Could not start: {}", e);
            return;
        }
    };

    println!("Level {} of {}", session.level() + 1, session.level_count());
    println!("{}", session.grid());
    println!("Words: {}\n", session.words().words().join(", "));

    // A click that starts a chain, and one far away that replaces it
    session.click(Position::new(0, 0));
    let outcome = session.click(Position::new(5, 5));
    println!("Clicking (0, 0) then (5, 5): {:?}", outcome);
    session.clear_chain();

    // Let the hints play the level
    while let Some(placement) = session.hint() {
        println!(
            "{} starts at {} going {}",
            placement.word, placement.start, placement.direction
        );
        for pos in placement.cells() {
            match session.click(pos) {
                ClickOutcome::WordFound { word, cells } => {
                    println!("  found {} over {} cells", word, cells.len());
                }
                ClickOutcome::LevelComplete { word, .. } => {
                    println!("  found {}, level complete!", word);
                }
                _ => {}
            }
        }
    }

    // Move on to the next word set
    println!("\n--- Next level ---\n");
    if let Err(e) = session.next_level() {
        eprintln!("Could not change level: {}", e);
        return;
    }
    println!("{}", session.grid());
    println!("Words: {}", session.words().words().join(", "));
}
