//! Property tests for the generation invariants.

use proptest::prelude::*;
use wordgrid::{generate, normalize_words, GenerationConfig, Generator, WordSearchGenerator};

const DIRECTION_NAMES: [&str; 8] = [
    "RIGHT",
    "LEFT",
    "DOWN",
    "UP",
    "DOWN_RIGHT",
    "DOWN_LEFT",
    "UP_RIGHT",
    "UP_LEFT",
];

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z ]{0,6}", 0..6)
}

fn arb_direction_names() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(0usize..DIRECTION_NAMES.len(), 1..8)
        .prop_map(|picks| picks.into_iter().map(|i| DIRECTION_NAMES[i]).collect())
}

proptest! {
    /// Any valid configuration yields a correctly shaped, fully lettered
    /// grid whose placements replay exactly, and the generator's own
    /// validation agrees.
    #[test]
    fn generated_puzzle_upholds_invariants(
        words in arb_words(),
        rows in 1u32..12,
        cols in 1u32..12,
        seed in any::<u64>(),
        directions in arb_direction_names(),
    ) {
        let config = GenerationConfig::new(words.clone(), rows, cols)
            .with_directions(&directions)
            .with_seed(seed);
        let puzzle = generate(&config).unwrap();

        prop_assert_eq!(puzzle.grid.rows(), rows);
        prop_assert_eq!(puzzle.grid.cols(), cols);
        prop_assert_eq!(puzzle.grid.empty_cell_count(), 0);
        for pos in puzzle.grid.positions() {
            let letter = puzzle.grid.get(pos).unwrap().letter().unwrap();
            prop_assert!(letter.is_ascii_uppercase());
        }

        prop_assert_eq!(&puzzle.words, &normalize_words(&words));

        for placement in &puzzle.placements {
            let letters = puzzle.letters_at(placement);
            prop_assert_eq!(letters.as_deref(), Some(placement.word.as_str()));
        }

        // Every normalized word is either placed or reported skipped
        prop_assert_eq!(
            puzzle.placements.len() + puzzle.unplaced_words().len(),
            puzzle.words.len()
        );

        WordSearchGenerator::new().validate(&puzzle, &config).unwrap();
    }

    /// Same configuration, same seed: identical puzzles.
    #[test]
    fn generation_is_reproducible(
        words in arb_words(),
        rows in 1u32..10,
        cols in 1u32..10,
        seed in any::<u64>(),
    ) {
        let config = GenerationConfig::new(words, rows, cols)
            .with_directions(&["RIGHT", "DOWN", "UP_LEFT"])
            .with_seed(seed);

        prop_assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    /// Normalization is idempotent for arbitrary printable inputs.
    #[test]
    fn normalization_is_idempotent(words in prop::collection::vec("[ -~]{0,10}", 0..8)) {
        let once = normalize_words(&words);
        let twice = normalize_words(&once);
        prop_assert_eq!(once, twice);
    }
}
