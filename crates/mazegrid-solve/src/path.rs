//! Shared predecessor-map path reconstruction.

use mazegrid_core::{Cell, Grid};

/// Rebuild the start→end cell sequence from a flat predecessor map.
///
/// Walks backward from `end` until a cell with no recorded predecessor (the
/// start), then reverses. Callers only invoke this once `end` has actually
/// been reached; an unreached end is reported as an empty path without
/// coming through here.
pub(crate) fn reconstruct(parents: &[Option<Cell>], grid: &Grid, end: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(cell) = current {
        path.push(cell);
        current = grid.idx(cell).and_then(|i| parents[i]);
    }
    path.reverse();
    path
}
