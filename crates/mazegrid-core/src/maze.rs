//! The [`Maze`] type — a grid plus its start and end cells.

use crate::cell::Cell;
use crate::error::EndpointError;
use crate::grid::{Grid, Tile};

/// A maze: a [`Grid`] together with designated start and end cells.
///
/// Invariant expected by the solvers: `start` and `end` reference
/// [`Tile::Path`] cells. Generation guarantees this for the default
/// endpoints; [`set_start`](Maze::set_start) and [`set_end`](Maze::set_end)
/// enforce it for relocations. Whether a relocated endpoint is *reachable*
/// from the other one is the caller's responsibility — an unreachable pair
/// yields an empty path from every solver, which is a valid result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    grid: Grid,
    start: Cell,
    end: Cell,
}

impl Maze {
    /// Default start cell for any grid: `(1, 1)`.
    #[inline]
    pub const fn default_start() -> Cell {
        Cell::new(1, 1)
    }

    /// Default end cell for a `rows × cols` grid: `(rows-2, cols-2)`.
    #[inline]
    pub const fn default_end(rows: i32, cols: i32) -> Cell {
        Cell::new(rows - 2, cols - 2)
    }

    /// Wrap a grid with the default endpoints.
    ///
    /// Does not touch the grid: the generator is responsible for carving the
    /// default endpoints open before wrapping.
    pub fn new(grid: Grid) -> Self {
        let end = Self::default_end(grid.rows(), grid.cols());
        Self {
            grid,
            start: Self::default_start(),
            end,
        }
    }

    /// Wrap a grid with explicit endpoints, validating both.
    pub fn with_endpoints(grid: Grid, start: Cell, end: Cell) -> Result<Self, EndpointError> {
        let mut maze = Self::new(grid);
        maze.set_start(start)?;
        maze.set_end(end)?;
        Ok(maze)
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current start cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The current end cell.
    #[inline]
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Relocate the start cell. Rejects out-of-bounds and wall cells
    /// without mutating.
    pub fn set_start(&mut self, cell: Cell) -> Result<(), EndpointError> {
        self.check_endpoint(cell)?;
        self.start = cell;
        Ok(())
    }

    /// Relocate the end cell. Rejects out-of-bounds and wall cells
    /// without mutating.
    pub fn set_end(&mut self, cell: Cell) -> Result<(), EndpointError> {
        self.check_endpoint(cell)?;
        self.end = cell;
        Ok(())
    }

    /// Restore the default endpoints.
    pub fn reset_endpoints(&mut self) {
        self.start = Self::default_start();
        self.end = Self::default_end(self.grid.rows(), self.grid.cols());
    }

    fn check_endpoint(&self, cell: Cell) -> Result<(), EndpointError> {
        match self.grid.at(cell) {
            None => Err(EndpointError::OutOfBounds {
                cell,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            }),
            Some(Tile::Wall) => Err(EndpointError::Wall(cell)),
            Some(Tile::Path) => Ok(()),
        }
    }
}
