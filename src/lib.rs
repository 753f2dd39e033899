//! # Wordgrid
//!
//! A word-search puzzle generator: places a list of words into a 2D letter
//! grid along compass directions, then fills the leftover cells with random
//! letters.
//!
//! ## Architecture Overview
//!
//! The crate is a pure in-memory transform built from three pieces:
//!
//! - **Grid**: a rows × cols matrix of [`Cell`]s, each empty or holding one
//!   uppercase letter
//! - **Generation System**: randomized trial-and-error word placement with a
//!   permissive match-or-empty collision rule and a bounded retry budget per
//!   word, followed by a random-letter fill pass
//! - **Diagnostics**: non-fatal events (unknown direction names, words that
//!   could not be placed) returned alongside the puzzle and mirrored to the
//!   `log` facade
//!
//! All randomness flows through an explicitly threaded [`rand::rngs::StdRng`],
//! so two runs with the same [`GenerationConfig`] (including its `seed`)
//! produce identical puzzles.
//!
//! ## Example
//!
//! ```
//! use wordgrid::{generate, GenerationConfig};
//!
//! let config = GenerationConfig::new(
//!     vec!["cat".to_string(), "dog".to_string()],
//!     10,
//!     10,
//! );
//! let puzzle = generate(&config).expect("valid configuration");
//!
//! assert_eq!(puzzle.grid.rows(), 10);
//! assert_eq!(puzzle.words, vec!["CAT".to_string(), "DOG".to_string()]);
//! ```

pub mod generation;
pub mod grid;

// Core module re-exports
pub use generation::*;
pub use grid::*;

/// Core error type for the wordgrid crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WordGridError {
    /// Grid dimensions must both be at least 1.
    #[error("invalid grid dimensions: {rows} rows x {cols} cols (both must be >= 1)")]
    InvalidDimensions {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },

    /// Every configured direction name was unrecognized, leaving nothing to
    /// sample placements from.
    #[error("no usable directions: every configured direction name was unrecognized")]
    NoUsableDirections,

    /// A generated puzzle failed post-generation validation.
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(String),
}

/// Result type used throughout the wordgrid codebase.
pub type WordGridResult<T> = Result<T, WordGridError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation configuration constants.
pub mod config {
    /// Default number of placement attempts per word before it is skipped.
    pub const DEFAULT_MAX_RETRIES_PER_WORD: u32 = 200;

    /// Default seed for reproducible generation.
    pub const DEFAULT_SEED: u64 = 42;

    /// Alphabet used to fill cells not covered by any placed word.
    pub const FILLER_ALPHABET: &[char] = &[
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];
}
