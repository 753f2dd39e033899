//! # Grid Module
//!
//! The 2D letter grid and its coordinate types.
//!
//! A word-search grid is a rows × cols matrix of [`Cell`]s addressed by
//! [`Position`] (x = column, y = row, both growing right/down). Words step
//! through the grid along one of eight compass [`Direction`]s, each a unit
//! (Δx, Δy) vector.

use crate::{WordGridError, WordGridResult};
use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate in the grid.
///
/// # Examples
///
/// ```
/// use wordgrid::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the position reached by taking `steps` steps in `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid::{Direction, Position};
    ///
    /// let pos = Position::new(2, 3);
    /// assert_eq!(pos.stepped(Direction::Right, 4), Position::new(6, 3));
    /// assert_eq!(pos.stepped(Direction::UpLeft, 2), Position::new(0, 1));
    /// ```
    pub fn stepped(self, direction: Direction, steps: i32) -> Position {
        let delta = direction.to_delta();
        Position::new(self.x + delta.x * steps, self.y + delta.y * steps)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Directions a word can read along in the grid.
///
/// Each direction is a unit (Δx, Δy) step vector; x grows rightward and y
/// grows downward, so [`Direction::Up`] has a negative Δy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid::{Direction, Position};
    ///
    /// let delta = Direction::Up.to_delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::Right => Position::new(1, 0),
            Direction::Left => Position::new(-1, 0),
            Direction::Down => Position::new(0, 1),
            Direction::Up => Position::new(0, -1),
            Direction::DownRight => Position::new(1, 1),
            Direction::DownLeft => Position::new(-1, 1),
            Direction::UpRight => Position::new(1, -1),
            Direction::UpLeft => Position::new(-1, -1),
        }
    }

    /// Converts a position delta to a direction.
    ///
    /// Returns None if the delta doesn't correspond to a valid direction.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        match (delta.x, delta.y) {
            (1, 0) => Some(Direction::Right),
            (-1, 0) => Some(Direction::Left),
            (0, 1) => Some(Direction::Down),
            (0, -1) => Some(Direction::Up),
            (1, 1) => Some(Direction::DownRight),
            (-1, 1) => Some(Direction::DownLeft),
            (1, -1) => Some(Direction::UpRight),
            (-1, -1) => Some(Direction::UpLeft),
            _ => None,
        }
    }

    /// Parses a configuration name like `"RIGHT"` or `"DOWN_LEFT"`.
    ///
    /// Names are matched exactly; anything unrecognized yields `None` so the
    /// caller can drop it with a diagnostic rather than fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid::Direction;
    ///
    /// assert_eq!(Direction::from_name("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_name("SIDEWAYS"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Direction> {
        match name {
            "RIGHT" => Some(Direction::Right),
            "LEFT" => Some(Direction::Left),
            "DOWN" => Some(Direction::Down),
            "UP" => Some(Direction::Up),
            "DOWN_RIGHT" => Some(Direction::DownRight),
            "DOWN_LEFT" => Some(Direction::DownLeft),
            "UP_RIGHT" => Some(Direction::UpRight),
            "UP_LEFT" => Some(Direction::UpLeft),
            _ => None,
        }
    }

    /// Returns the configuration name for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "RIGHT",
            Direction::Left => "LEFT",
            Direction::Down => "DOWN",
            Direction::Up => "UP",
            Direction::DownRight => "DOWN_RIGHT",
            Direction::DownLeft => "DOWN_LEFT",
            Direction::UpRight => "UP_RIGHT",
            Direction::UpLeft => "UP_LEFT",
        }
    }

    /// Returns all 8 directions.
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::Right,
            Direction::Left,
            Direction::Down,
            Direction::Up,
            Direction::DownRight,
            Direction::DownLeft,
            Direction::UpRight,
            Direction::UpLeft,
        ]
    }

    /// Returns the default placement directions: right and down.
    pub fn default_set() -> Vec<Direction> {
        vec![Direction::Right, Direction::Down]
    }
}

/// A single grid cell: empty, or holding one uppercase letter.
///
/// Finished puzzles contain no [`Cell::Empty`]; the variant only exists
/// between grid allocation and the fill pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No letter assigned yet.
    Empty,
    /// An assigned uppercase letter.
    Letter(char),
}

impl Cell {
    /// Returns true if no letter has been assigned.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the contained letter, if any.
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(c) => Some(c),
        }
    }
}

/// A rows × cols matrix of letter cells.
///
/// Owned exclusively by one generation call and handed to the caller as part
/// of the finished [`crate::WordSearch`].
///
/// # Examples
///
/// ```
/// use wordgrid::{Cell, Grid, Position};
///
/// let grid = Grid::new(3, 5).unwrap();
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.cols(), 5);
/// assert_eq!(grid.get(Position::new(4, 2)), Some(Cell::Empty));
/// assert_eq!(grid.get(Position::new(5, 2)), None); // out of bounds
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    rows: u32,
    cols: u32,
}

impl Grid {
    /// Creates an empty grid with the given dimensions.
    ///
    /// Returns [`WordGridError::InvalidDimensions`] if either dimension is
    /// zero; a degenerate grid is never silently produced.
    pub fn new(rows: u32, cols: u32) -> WordGridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(WordGridError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            cells: vec![vec![Cell::Empty; cols as usize]; rows as usize],
            rows,
            cols,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Checks whether a position lies within the grid bounds.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.cols as i32 && pos.y >= 0 && pos.y < self.rows as i32
    }

    /// Gets the cell at a position, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.y as usize][pos.x as usize])
    }

    /// Sets the cell at a position. Out-of-bounds positions are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if self.in_bounds(pos) {
            self.cells[pos.y as usize][pos.x as usize] = cell;
        }
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |y| (0..cols).map(move |x| Position::new(x, y)))
    }

    /// Returns the rows of the grid as slices of cells.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// Counts the cells still marked empty.
    pub fn empty_cell_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_empty())
            .count()
    }
}

impl std::fmt::Display for Grid {
    /// Renders the grid as space-separated letters, one row per line.
    /// Empty cells render as `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let mut first = true;
            for cell in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Letter(c) => write!(f, "{}", c)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
