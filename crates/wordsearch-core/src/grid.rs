use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Iterate all positions of a `size`×`size` grid in row-major order
    pub fn all(size: usize) -> impl Iterator<Item = Position> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Chess-king distance: the larger of the row and column differences
    pub fn chebyshev_distance(&self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Whether `other` is one of the 8 surrounding cells.
    ///
    /// A cell counts as adjacent to itself; callers that need to tell a
    /// re-click apart from a neighbour must check equality first.
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.chebyshev_distance(other) <= 1
    }

    /// Move `steps` cells along `dir`, or `None` when that leaves the
    /// non-negative quadrant. Upper bounds are the grid's business.
    pub fn offset(&self, dir: Direction, steps: usize) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row as isize + dr * steps as isize;
        let col = self.col as isize + dc * steps as isize;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    /// The direction of a single step from `self` to `other`
    pub fn direction_to(&self, other: Position) -> Option<Direction> {
        if *self == other || !self.is_adjacent(other) {
            return None;
        }
        let dr = other.row as isize - self.row as isize;
        let dc = other.col as isize - self.col as isize;
        Direction::from_delta(dr, dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the 8 queen-move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Row and column step for this direction
    pub const fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn from_delta(dr: isize, dc: isize) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == (dr, dc))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        f.write_str(name)
    }
}

/// Where a word sits in a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// The cells covered by the word, first letter first
    pub fn cells(&self) -> Vec<Position> {
        (0..self.word.chars().count())
            .filter_map(|i| self.start.offset(self.direction, i))
            .collect()
    }
}

/// Square letter grid.
///
/// Cells start empty while words are laid out and are all filled once the
/// generator is done with the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

/// Grid as stored, before the cell count is checked
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(GridError::CellCount {
                size: raw.size,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create an empty `size`×`size` grid. The generator bounds `size`
    /// before calling this.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from equal-length rows. `.` marks an empty cell.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut grid = Grid::new(size);
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != size {
                return None;
            }
            for (col, ch) in chars.into_iter().enumerate() {
                match ch {
                    '.' => {}
                    'A'..='Z' => grid.set(Position::new(row, col), ch),
                    _ => return None,
                }
            }
        }
        Some(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Letter at `pos`, `None` when empty or out of bounds
    pub fn get(&self, pos: Position) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Position, ch: char) {
        let idx = self.index(pos);
        self.cells[idx] = Some(ch);
    }

    /// Number of cells without a letter
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    /// Positions of every letter of a `len`-letter run starting at `start`,
    /// or `None` if any of them falls off the grid
    pub fn run(&self, start: Position, dir: Direction, len: usize) -> Option<Vec<Position>> {
        (0..len)
            .map(|i| start.offset(dir, i).filter(|p| self.contains(*p)))
            .collect()
    }

    /// Whether `word` fits at `start` going `dir`: in bounds, and every cell
    /// is either empty or already holds the same letter
    pub fn can_place(&self, word: &str, start: Position, dir: Direction) -> bool {
        let Some(cells) = self.run(start, dir, word.chars().count()) else {
            return false;
        };
        cells
            .iter()
            .zip(word.chars())
            .all(|(pos, ch)| self.get(*pos).map_or(true, |c| c == ch))
    }

    /// Write `word` along `dir`. Callers check [`Grid::can_place`] first.
    pub(crate) fn place(&mut self, word: &str, start: Position, dir: Direction) {
        if let Some(cells) = self.run(start, dir, word.chars().count()) {
            for (pos, ch) in cells.into_iter().zip(word.chars()) {
                self.set(pos, ch);
            }
        }
    }

    /// Whether the letters of `word` appear exactly along the run
    pub fn reads(&self, word: &str, start: Position, dir: Direction) -> bool {
        match self.run(start, dir, word.chars().count()) {
            Some(cells) => cells
                .iter()
                .zip(word.chars())
                .all(|(pos, ch)| self.get(*pos) == Some(ch)),
            None => false,
        }
    }

    /// Search every start cell and direction for `word`
    pub fn find_word(&self, word: &str) -> Option<Placement> {
        let first = word.chars().next()?;
        Position::all(self.size)
            .filter(|pos| self.get(*pos) == Some(first))
            .find_map(|start| {
                Direction::ALL
                    .into_iter()
                    .find(|dir| self.reads(word, start, *dir))
                    .map(|direction| Placement {
                        word: word.to_string(),
                        start,
                        direction,
                    })
            })
    }

    /// Concatenate the letters under `cells`, skipping empty ones
    pub fn letters(&self, cells: &[Position]) -> String {
        cells.iter().filter_map(|pos| self.get(*pos)).collect()
    }

    /// Row-by-row letters, `.` for empty cells
    pub fn to_string_compact(&self) -> String {
        self.cells.iter().map(|c| c.unwrap_or('.')).collect()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|col| self.get(Position::new(row, col)).unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
