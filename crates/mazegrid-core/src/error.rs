//! Error types for the maze model.

use std::fmt;

use crate::cell::Cell;

/// Rejected attempt to place a maze endpoint on an unusable cell.
///
/// Returned by [`Maze::set_start`](crate::Maze::set_start) and
/// [`Maze::set_end`](crate::Maze::set_end); the maze is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointError {
    /// The cell lies outside the grid bounds.
    OutOfBounds { cell: Cell, rows: i32, cols: i32 },
    /// The cell is classified as a wall.
    Wall(Cell),
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "endpoint {cell} outside {rows}x{cols} grid")
            }
            Self::Wall(cell) => write!(f, "endpoint {cell} is a wall cell"),
        }
    }
}

impl std::error::Error for EndpointError {}
