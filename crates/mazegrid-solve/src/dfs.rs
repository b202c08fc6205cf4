use mazegrid_core::{Cell, Maze};
use mazegrid_frontier::Stack;

use crate::path::reconstruct;

/// Depth-first search from the maze's start to its end.
///
/// Visits every reachable cell before giving up, so it finds *a* path
/// whenever one exists — but not necessarily the shortest. The specific
/// path is determined by the fixed up/right/down/left neighbor order.
/// Returns the empty vector when the end is unreachable.
pub fn dfs_path(maze: &Maze) -> Vec<Cell> {
    let grid = maze.grid();
    let end = maze.end();

    let mut visited = vec![false; grid.len()];
    let mut parents: Vec<Option<Cell>> = vec![None; grid.len()];
    let mut stack = Stack::new();

    let Some(si) = grid.idx(maze.start()) else {
        return Vec::new();
    };
    visited[si] = true;
    stack.push(maze.start());

    while let Ok(current) = stack.pop() {
        if current == end {
            return reconstruct(&parents, grid, end);
        }
        for neighbor in current.neighbors4() {
            let Some(ni) = grid.idx(neighbor) else {
                continue;
            };
            if visited[ni] || !grid.is_path(neighbor) {
                continue;
            }
            visited[ni] = true;
            parents[ni] = Some(current);
            stack.push(neighbor);
        }
    }

    Vec::new()
}
