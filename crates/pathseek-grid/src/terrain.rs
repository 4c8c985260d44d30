//! Terrain maps: a rectangle of integer terrain codes.
//!
//! Codes ≤ 0 are impassable; a positive code is the cost of entering the
//! cell. Maps can be written as text, one character per cell:
//!
//! | Char | Cell |
//! |---|---|
//! | `#` | [`Cell::WALL`] |
//! | `.` | [`Cell::FLOOR`] |
//! | `1`–`9` | floor with that entry cost |
//!
//! Printing a map writes `1` back as `.`, and codes above 9 as `?`, which
//! does not parse.

use std::fmt;

use crate::geom::{Point, Range};

/// A terrain code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// Impassable terrain; every code ≤ 0 behaves the same.
    pub const WALL: Cell = Cell(0);
    /// Plain floor, costing 1 to enter.
    pub const FLOOR: Cell = Cell(1);

    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_passable(self) -> bool {
        self.0 > 0
    }

    /// Cost of entering this cell, `None` for walls.
    #[inline]
    pub const fn cost(self) -> Option<i32> {
        if self.is_passable() { Some(self.0) } else { None }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::WALL),
            '.' => Some(Self::FLOOR),
            '1'..='9' => ch.to_digit(10).map(|d| Self(d as i32)),
            _ => None,
        }
    }

    /// Text form of the cell. `1` prints as `.`, so a parsed `1` comes back
    /// as `.`; codes above 9 have no text form and print as `?`.
    fn to_char(self) -> char {
        match self.0 {
            i32::MIN..=0 => '#',
            1 => '.',
            n @ 2..=9 => char::from_digit(n as u32, 10).unwrap_or('?'),
            _ => '?',
        }
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// A rectangle of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    range: Range,
    cells: Vec<Cell>,
}

impl TerrainGrid {
    /// A grid covering `range`, filled with [`Cell::FLOOR`].
    pub fn new(range: Range) -> Self {
        Self {
            range,
            cells: vec![Cell::FLOOR; range.len()],
        }
    }

    /// Parse a text map anchored at the origin. Every line must have the
    /// same number of characters.
    pub fn from_text(text: &str) -> Result<Self, TerrainError> {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(TerrainError::Empty);
        }

        let mut cells = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(TerrainError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(TerrainError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            range: Range::sized(width as i32, lines.len() as i32),
            cells,
        })
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.range.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` if `p` is outside the grid.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        match self.range.index(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `p` is inside the grid and passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Cost of entering `p`, `None` for walls and points outside the grid.
    #[inline]
    pub fn cost_at(&self, p: Point) -> Option<i32> {
        self.at(p).and_then(Cell::cost)
    }

    /// Iterate impassable points in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.range
            .points()
            .zip(self.cells.iter())
            .filter(|(_, c)| !c.is_passable())
            .map(|(p, _)| p)
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.range.width().max(1) as usize;
        for (i, row) in self.cells.chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.to_char())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// The text has no cells.
    Empty,
    /// A line differs in width from the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "terrain: empty map"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "terrain: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "terrain contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for TerrainError {}
