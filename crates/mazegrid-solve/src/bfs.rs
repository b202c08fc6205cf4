use mazegrid_core::{Cell, Maze};
use mazegrid_frontier::Queue;

use crate::path::reconstruct;

/// Breadth-first search from the maze's start to its end.
///
/// Explores in non-decreasing distance layers, so the returned path has the
/// fewest possible cells. Returns the empty vector when the end is
/// unreachable.
pub fn bfs_path(maze: &Maze) -> Vec<Cell> {
    let grid = maze.grid();
    let end = maze.end();

    let mut visited = vec![false; grid.len()];
    let mut parents: Vec<Option<Cell>> = vec![None; grid.len()];
    let mut queue = Queue::new();

    let Some(si) = grid.idx(maze.start()) else {
        return Vec::new();
    };
    visited[si] = true;
    queue.enqueue(maze.start());

    while let Ok(current) = queue.dequeue() {
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
            queue.enqueue(neighbor);
        }
    }

    Vec::new()
}
