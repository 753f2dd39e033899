//! # Generation Module
//!
//! Word-search puzzle generation: configuration, placement records,
//! diagnostics, and the [`Generator`] abstraction.
//!
//! Generation is strictly sequential and single-threaded. Words are processed
//! in input order (after normalization); each word's committed letters are
//! visible to the collision checks of every later word, so grid state
//! accumulates across the word list. A whole generation call owns its grid
//! exclusively and hands it to the caller on return.

pub mod filler;
pub mod placement;

pub use filler::*;
pub use placement::*;

use crate::grid::{Direction, Grid, Position};
use crate::{config, WordGridResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for word-search generation.
///
/// # Examples
///
/// ```
/// use wordgrid::GenerationConfig;
///
/// let config = GenerationConfig::new(vec!["fox".to_string()], 8, 8)
///     .with_directions(&["RIGHT", "DOWN", "DOWN_RIGHT"])
///     .with_seed(7);
/// assert_eq!(config.max_retries_per_word, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Words to place, in placement order. Normalized (trimmed, uppercased,
    /// blanks dropped) at the start of generation; duplicates are kept.
    pub words: Vec<String>,
    /// Number of grid rows.
    pub rows: u32,
    /// Number of grid columns.
    pub cols: u32,
    /// Direction names from the set `RIGHT`, `LEFT`, `DOWN`, `UP`,
    /// `DOWN_RIGHT`, `DOWN_LEFT`, `UP_RIGHT`, `UP_LEFT`. Unrecognized names
    /// are dropped with a diagnostic, not errored.
    pub allowed_directions: Vec<String>,
    /// Placement attempts per word before the word is skipped.
    pub max_retries_per_word: u32,
    /// Random seed for reproducible generation.
    pub seed: u64,
}

impl GenerationConfig {
    /// Creates a configuration with the default direction set (right and
    /// down), retry budget, and seed.
    pub fn new(words: Vec<String>, rows: u32, cols: u32) -> Self {
        Self {
            words,
            rows,
            cols,
            allowed_directions: Direction::default_set()
                .into_iter()
                .map(|d| d.name().to_string())
                .collect(),
            max_retries_per_word: config::DEFAULT_MAX_RETRIES_PER_WORD,
            seed: config::DEFAULT_SEED,
        }
    }

    /// Creates a small configuration for testing.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            words: vec!["cat".to_string(), "dog".to_string()],
            rows: 6,
            cols: 6,
            allowed_directions: vec!["RIGHT".to_string(), "DOWN".to_string()],
            max_retries_per_word: 50,
            seed,
        }
    }

    /// Replaces the allowed direction names.
    pub fn with_directions(mut self, names: &[&str]) -> Self {
        self.allowed_directions = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Replaces the per-word retry budget.
    pub fn with_max_retries(mut self, max_retries_per_word: u32) -> Self {
        self.max_retries_per_word = max_retries_per_word;
        self
    }

    /// Replaces the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A committed (word, start, direction) triple for answer-key reconstruction.
///
/// Created exactly once per successfully placed word and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed word, normalized.
    pub word: String,
    /// Grid cell holding the word's first letter.
    pub start: Position,
    /// Direction the word reads along.
    pub direction: Direction,
}

impl Placement {
    /// Creates a placement record.
    pub fn new(word: String, start: Position, direction: Direction) -> Self {
        Self {
            word,
            start,
            direction,
        }
    }

    /// X component of the direction step vector.
    pub fn dx(&self) -> i32 {
        self.direction.to_delta().x
    }

    /// Y component of the direction step vector.
    pub fn dy(&self) -> i32 {
        self.direction.to_delta().y
    }

    /// Iterates over the grid positions covered by this placement, first
    /// letter first.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let start = self.start;
        let direction = self.direction;
        (0..self.word.chars().count() as i32).map(move |i| start.stepped(direction, i))
    }
}

/// Non-fatal events observed during generation.
///
/// Diagnostics are returned in the [`WordSearch`] result so callers and tests
/// can inspect them programmatically; each is also mirrored to `log::warn!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A configured direction name did not match the known set and was
    /// dropped.
    UnknownDirection {
        /// The unrecognized name, as configured.
        name: String,
    },
    /// A word exhausted its retry budget without finding a valid placement
    /// and was skipped.
    UnplacedWord {
        /// The normalized word that could not be placed.
        word: String,
        /// Number of attempts made.
        attempts: u32,
    },
}

/// A finished word-search puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearch {
    /// The fully lettered grid; no empty cells remain.
    pub grid: Grid,
    /// One record per successfully placed word, in processing order.
    pub placements: Vec<Placement>,
    /// The normalized word list used for generation. May be shorter than the
    /// configured list if blank entries were supplied.
    pub words: Vec<String>,
    /// Non-fatal events observed during generation.
    pub diagnostics: Vec<Diagnostic>,
}

impl WordSearch {
    /// Returns the words that exhausted their retries without placing.
    pub fn unplaced_words(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnplacedWord { word, .. } => Some(word.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replays a placement against the grid, returning the letters read along
    /// its path. Returns `None` if any stepped position falls outside the
    /// grid, which indicates a corrupted record.
    pub fn letters_at(&self, placement: &Placement) -> Option<String> {
        placement
            .positions()
            .map(|pos| self.grid.get(pos).and_then(|cell| cell.letter()))
            .collect()
    }
}

/// Trait for puzzle generation algorithms.
///
/// Generators are pure with respect to the provided RNG: the same
/// configuration and RNG state always produce the same content.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WordGridResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WordGridResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Normalizes a word list: trims whitespace, uppercases, drops blank entries.
///
/// Order is preserved and duplicates are kept. Normalization is idempotent.
///
/// # Examples
///
/// ```
/// use wordgrid::normalize_words;
///
/// let words = vec!["  cat ".to_string(), "".to_string(), "Dog".to_string()];
/// assert_eq!(normalize_words(&words), vec!["CAT".to_string(), "DOG".to_string()]);
/// ```
pub fn normalize_words(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.trim().to_uppercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Generates a word search from the configuration, seeding the generator's
/// RNG from `config.seed`.
///
/// Two calls with identical configurations produce identical puzzles.
pub fn generate(config: &GenerationConfig) -> WordGridResult<WordSearch> {
    let mut rng = utils::create_rng(config);
    WordSearchGenerator::new().generate(config, &mut rng)
}

/// Generates a word search from OS entropy, for callers that don't need
/// reproducibility. `config.seed` is ignored.
pub fn generate_from_entropy(config: &GenerationConfig) -> WordGridResult<WordSearch> {
    let mut rng = StdRng::from_entropy();
    WordSearchGenerator::new().generate(config, &mut rng)
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use crate::WordGridError;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Resolves configured direction names into directions, dropping
    /// unrecognized names with a diagnostic.
    ///
    /// Returns [`WordGridError::NoUsableDirections`] if nothing survives
    /// resolution; the placement loop must never sample from an empty
    /// direction list.
    pub fn resolve_directions(
        names: &[String],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> WordGridResult<Vec<Direction>> {
        let mut directions = Vec::with_capacity(names.len());
        for name in names {
            match Direction::from_name(name) {
                Some(direction) => directions.push(direction),
                None => {
                    log::warn!("dropping unknown direction name: {name:?}");
                    diagnostics.push(Diagnostic::UnknownDirection { name: name.clone() });
                }
            }
        }

        if directions.is_empty() {
            return Err(WordGridError::NoUsableDirections);
        }
        Ok(directions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordGridError;

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::new(vec!["owl".to_string()], 9, 12);
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 12);
        assert_eq!(config.allowed_directions, vec!["RIGHT", "DOWN"]);
        assert_eq!(
            config.max_retries_per_word,
            crate::config::DEFAULT_MAX_RETRIES_PER_WORD
        );
    }

    #[test]
    fn test_generation_config_builders() {
        let config = GenerationConfig::new(vec![], 5, 5)
            .with_directions(&["UP", "UP_LEFT"])
            .with_max_retries(10)
            .with_seed(99);
        assert_eq!(config.allowed_directions, vec!["UP", "UP_LEFT"]);
        assert_eq!(config.max_retries_per_word, 10);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_normalize_words() {
        let words = vec![
            " cat".to_string(),
            "DOG ".to_string(),
            "".to_string(),
            "  ".to_string(),
            "fox".to_string(),
        ];
        assert_eq!(normalize_words(&words), vec!["CAT", "DOG", "FOX"]);
    }

    #[test]
    fn test_normalize_words_is_idempotent() {
        let words = vec![" bat ".to_string(), "Eel".to_string(), " ".to_string()];
        let once = normalize_words(&words);
        assert_eq!(normalize_words(&once), once);
    }

    #[test]
    fn test_normalize_words_keeps_duplicates_and_order() {
        let words = vec!["b".to_string(), "a".to_string(), "B".to_string()];
        assert_eq!(normalize_words(&words), vec!["B", "A", "B"]);
    }

    #[test]
    fn test_placement_accessors() {
        let placement = Placement::new(
            "OWL".to_string(),
            Position::new(2, 1),
            Direction::DownLeft,
        );
        assert_eq!(placement.dx(), -1);
        assert_eq!(placement.dy(), 1);

        let positions: Vec<Position> = placement.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 3)
            ]
        );
    }

    #[test]
    fn test_resolve_directions_drops_unknown_names() {
        let names = vec![
            "RIGHT".to_string(),
            "SIDEWAYS".to_string(),
            "DOWN".to_string(),
        ];
        let mut diagnostics = Vec::new();
        let directions = utils::resolve_directions(&names, &mut diagnostics).unwrap();
        assert_eq!(directions, vec![Direction::Right, Direction::Down]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnknownDirection {
                name: "SIDEWAYS".to_string()
            }]
        );
    }

    #[test]
    fn test_resolve_directions_empty_is_an_error() {
        let names = vec!["NORTH".to_string(), "SOUTH".to_string()];
        let mut diagnostics = Vec::new();
        assert_eq!(
            utils::resolve_directions(&names, &mut diagnostics),
            Err(WordGridError::NoUsableDirections)
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_utils_rng_creation_is_seed_stable() {
        use rand::Rng;

        let config = GenerationConfig::for_testing(12345);
        let mut a = utils::create_rng(&config);
        let mut b = utils::create_rng(&config);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
