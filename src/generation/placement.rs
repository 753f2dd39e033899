//! # Word Placement
//!
//! Randomized trial-and-error placement of words into the grid.
//!
//! The generator works the way a person builds a word search by hand: for
//! each word it keeps throwing (direction, start) candidates at the grid
//! until one fits or the retry budget runs out. A candidate fits when every
//! stepped cell is in bounds and either empty or already holding the same
//! letter, so words may legitimately cross where they share a letter.

use crate::generation::{
    filler, normalize_words, utils, Diagnostic, GenerationConfig, Generator, Placement, WordSearch,
};
use crate::grid::{Cell, Direction, Grid, Position};
use crate::{WordGridError, WordGridResult};
use rand::rngs::StdRng;
use rand::Rng;

/// Word-search puzzle generator.
///
/// Places each word by:
/// 1. Sampling a direction uniformly from the resolved direction list
/// 2. Sampling a start cell uniformly from the whole grid
/// 3. Testing the candidate with the match-or-empty collision rule
/// 4. Committing on success, or retrying up to the per-word budget
///
/// Words that exhaust their budget are skipped with a diagnostic; generation
/// never fails because of an unlucky word.
#[derive(Debug, Clone, Default)]
pub struct WordSearchGenerator;

impl WordSearchGenerator {
    /// Creates a new word-search generator.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether `word` can be written starting at `start` and stepping
    /// by `direction`.
    ///
    /// Rejects any candidate that leaves the grid, even partially. A
    /// non-empty cell is acceptable only when it already holds the letter the
    /// word wants there.
    pub fn can_place_word(
        &self,
        grid: &Grid,
        word: &str,
        start: Position,
        direction: Direction,
    ) -> bool {
        for (i, letter) in word.chars().enumerate() {
            let pos = start.stepped(direction, i as i32);
            match grid.get(pos) {
                None => return false,
                Some(Cell::Letter(existing)) if existing != letter => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Writes `word` into the grid along `direction` from `start`.
    ///
    /// Performs no bounds or conflict checking of its own; the caller must
    /// have validated the exact same candidate with
    /// [`WordSearchGenerator::can_place_word`] first.
    pub fn commit_word(&self, grid: &mut Grid, word: &str, start: Position, direction: Direction) {
        for (i, letter) in word.chars().enumerate() {
            grid.set(start.stepped(direction, i as i32), Cell::Letter(letter));
        }
    }

    /// Attempts to place a single word within the retry budget.
    ///
    /// Returns `None` when every attempt was rejected; the caller records the
    /// skip and moves on.
    fn try_place_word(
        &self,
        grid: &mut Grid,
        word: &str,
        directions: &[Direction],
        max_retries: u32,
        rng: &mut StdRng,
    ) -> Option<Placement> {
        for _ in 0..max_retries {
            let direction = directions[rng.gen_range(0..directions.len())];
            let start = Position::new(
                rng.gen_range(0..grid.cols() as i32),
                rng.gen_range(0..grid.rows() as i32),
            );

            if self.can_place_word(grid, word, start, direction) {
                self.commit_word(grid, word, start, direction);
                return Some(Placement::new(word.to_string(), start, direction));
            }
        }

        None // Failed to place word after all attempts
    }

    /// Places every word in order, accumulating grid state as it goes.
    ///
    /// Earlier words' committed letters participate in later words' collision
    /// checks, which is what makes crossings possible.
    fn place_words(
        &self,
        grid: &mut Grid,
        words: &[String],
        directions: &[Direction],
        max_retries: u32,
        rng: &mut StdRng,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<Placement> {
        let mut placements = Vec::new();

        for word in words {
            match self.try_place_word(grid, word, directions, max_retries, rng) {
                Some(placement) => {
                    log::debug!(
                        "placed {:?} at ({}, {}) going {}",
                        placement.word,
                        placement.start.x,
                        placement.start.y,
                        placement.direction.name()
                    );
                    placements.push(placement);
                }
                None => {
                    log::warn!("could not place word {word:?} after {max_retries} attempts");
                    diagnostics.push(Diagnostic::UnplacedWord {
                        word: word.clone(),
                        attempts: max_retries,
                    });
                }
            }
        }

        placements
    }
}

impl Generator<WordSearch> for WordSearchGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WordGridResult<WordSearch> {
        let mut diagnostics = Vec::new();

        let mut grid = Grid::new(config.rows, config.cols)?;
        let directions = utils::resolve_directions(&config.allowed_directions, &mut diagnostics)?;
        let words = normalize_words(&config.words);

        let placements = self.place_words(
            &mut grid,
            &words,
            &directions,
            config.max_retries_per_word,
            rng,
            &mut diagnostics,
        );

        filler::fill_empty_cells(&mut grid, rng);

        Ok(WordSearch {
            grid,
            placements,
            words,
            diagnostics,
        })
    }

    fn validate(&self, content: &WordSearch, config: &GenerationConfig) -> WordGridResult<()> {
        if content.grid.rows() != config.rows || content.grid.cols() != config.cols {
            return Err(WordGridError::InvalidPuzzle(format!(
                "grid is {}x{}, expected {}x{}",
                content.grid.rows(),
                content.grid.cols(),
                config.rows,
                config.cols
            )));
        }

        if content.grid.empty_cell_count() > 0 {
            return Err(WordGridError::InvalidPuzzle(
                "grid contains unfilled cells".to_string(),
            ));
        }

        for placement in &content.placements {
            match content.letters_at(placement) {
                Some(ref letters) if *letters == placement.word => {}
                _ => {
                    return Err(WordGridError::InvalidPuzzle(format!(
                        "placement of {:?} does not match grid content",
                        placement.word
                    )));
                }
            }
        }

        // Every word is accounted for exactly once, placed or skipped.
        let skipped = content.unplaced_words().len();
        if content.placements.len() + skipped != content.words.len() {
            return Err(WordGridError::InvalidPuzzle(format!(
                "{} placements + {} skipped words != {} words",
                content.placements.len(),
                skipped,
                content.words.len()
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "word_search"
    }
}
