//! # Filler Pass
//!
//! Replaces every still-empty cell with a uniformly random letter once word
//! placement has finished.

use crate::config::FILLER_ALPHABET;
use crate::grid::{Cell, Grid};
use rand::rngs::StdRng;
use rand::Rng;

/// Fills every empty cell with a uniform random letter from `A..=Z`.
///
/// Cells already holding a word letter are untouched. Runs regardless of how
/// many words placed; after it returns the grid contains only letters.
pub fn fill_empty_cells(grid: &mut Grid, rng: &mut StdRng) {
    for pos in grid.positions().collect::<Vec<_>>() {
        if grid.get(pos).is_some_and(|cell| cell.is_empty()) {
            let letter = FILLER_ALPHABET[rng.gen_range(0..FILLER_ALPHABET.len())];
            grid.set(pos, Cell::Letter(letter));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use rand::SeedableRng;

    #[test]
    fn test_fill_leaves_no_empty_cells() {
        let mut grid = Grid::new(6, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        fill_empty_cells(&mut grid, &mut rng);

        assert_eq!(grid.empty_cell_count(), 0);
        for pos in grid.positions() {
            let letter = grid.get(pos).unwrap().letter().unwrap();
            assert!(letter.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_fill_preserves_existing_letters() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(Position::new(2, 2), Cell::Letter('Z'));
        grid.set(Position::new(0, 4), Cell::Letter('K'));
        let mut rng = StdRng::seed_from_u64(9);

        fill_empty_cells(&mut grid, &mut rng);

        assert_eq!(grid.get(Position::new(2, 2)), Some(Cell::Letter('Z')));
        assert_eq!(grid.get(Position::new(0, 4)), Some(Cell::Letter('K')));
        assert_eq!(grid.empty_cell_count(), 0);
    }

    #[test]
    fn test_fill_is_deterministic_for_a_seed() {
        let mut a = Grid::new(4, 4).unwrap();
        let mut b = Grid::new(4, 4).unwrap();

        fill_empty_cells(&mut a, &mut StdRng::seed_from_u64(77));
        fill_empty_cells(&mut b, &mut StdRng::seed_from_u64(77));

        assert_eq!(a, b);
    }
}
