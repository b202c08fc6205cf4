//! **mazegrid-core** — cell grid and maze model for the mazegrid engine.
//!
//! This crate provides the foundational types shared by the generator and
//! the solvers: [`Cell`] coordinates, the [`Tile`] wall/path classification,
//! the [`Grid`] matrix, and the [`Maze`] aggregate with validated endpoints.

pub mod cell;
pub mod error;
pub mod grid;
pub mod maze;

pub use cell::Cell;
pub use error::EndpointError;
pub use grid::{Grid, Tile};
pub use maze::Maze;
