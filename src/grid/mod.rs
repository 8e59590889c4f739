//! Occupancy grid storage and the blocked-cell query interface.
//!
//! The planner never owns or mutates the grid. It sees the world only
//! through [`BlockedQuery`], a read-only "is this cell blocked?" question,
//! while the grid itself belongs to the caller. [`OccupancyGrid`] is the
//! dense boolean implementation used by the demo and the tests; the
//! reference deployment is 25x14 cells.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CellPoint;

/// Read-only occupancy query the planner searches against.
///
/// The grid must not change while a search is in flight; behavior is
/// unspecified otherwise.
pub trait BlockedQuery {
    /// Whether the cell at `cell` is blocked.
    fn is_blocked(&self, cell: CellPoint) -> bool;
}

/// Errors from parsing an ASCII occupancy map.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridParseError {
    /// The map text contained no rows.
    #[error("map text contains no rows")]
    EmptyMap,

    /// A row's width differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// 0-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A character other than `#` or `.` appeared in the map.
    #[error("unknown map symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// 0-based row index.
        row: usize,
        /// 0-based column index.
        col: usize,
    },
}

/// Dense 2D occupancy table with fixed dimensions.
///
/// Cells are boolean blocked flags in row-major order
/// (index = y * width + x). Coordinates outside the grid report blocked,
/// which keeps a search from wandering off the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create a grid with every cell free.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Mark the cell at (x, y) blocked. Out-of-range coordinates are ignored.
    pub fn set_blocked(&mut self, x: usize, y: usize) {
        self.set(x, y, true);
    }

    /// Mark the cell at (x, y) free. Out-of-range coordinates are ignored.
    pub fn clear_blocked(&mut self, x: usize, y: usize) {
        self.set(x, y, false);
    }

    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = blocked;
        }
    }

    /// Whether the cell at signed indices (x, y) is blocked.
    ///
    /// Coordinates outside the grid report blocked.
    #[inline]
    pub fn blocked_at(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.cells[y * self.width + x]
    }

    /// Parse a grid from ASCII rows: `#` blocked, `.` free.
    ///
    /// Leading/trailing blank lines are skipped; every row must have the
    /// same width.
    pub fn from_ascii(text: &str) -> Result<Self, GridParseError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let first = rows.first().ok_or(GridParseError::EmptyMap)?;
        let width = first.chars().count();
        let height = rows.len();

        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                match symbol {
                    '#' => grid.set_blocked(x, y),
                    '.' => {}
                    other => {
                        return Err(GridParseError::UnknownSymbol {
                            symbol: other,
                            row: y,
                            col: x,
                        })
                    }
                }
            }
        }

        Ok(grid)
    }
}

impl BlockedQuery for OccupancyGrid {
    fn is_blocked(&self, cell: CellPoint) -> bool {
        // Truncate to the integral cell the coordinates address.
        self.blocked_at(cell.x as i32, cell.y as i32)
    }
}
