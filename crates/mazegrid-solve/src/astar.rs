use mazegrid_core::{Cell, Maze};
use mazegrid_frontier::MinHeap;

use crate::distance::manhattan;
use crate::path::reconstruct;

/// Sentinel for "no recorded cost yet" in the score arrays.
const UNREACHED: i32 = i32::MAX;

/// A* search from the maze's start to its end, guided by the Manhattan
/// heuristic.
///
/// The open list is a [`MinHeap`] keyed on f-score (cost so far plus the
/// heuristic estimate). Improving a cell's score pushes a fresh entry and
/// leaves the stale one in the heap; stale entries are discarded on pop via
/// the finalized check (lazy deletion). With an admissible, consistent
/// heuristic the first pop of the end cell is optimal, so the path length
/// always matches BFS's. Returns the empty vector when the end is
/// unreachable.
pub fn astar_path(maze: &Maze) -> Vec<Cell> {
    let grid = maze.grid();
    let (start, end) = (maze.start(), maze.end());

    let mut g = vec![UNREACHED; grid.len()];
    let mut f = vec![UNREACHED; grid.len()];
    let mut finalized = vec![false; grid.len()];
    let mut parents: Vec<Option<Cell>> = vec![None; grid.len()];
    let mut open = MinHeap::new();

    let Some(si) = grid.idx(start) else {
        return Vec::new();
    };
    g[si] = 0;
    f[si] = manhattan(start, end);
    open.push(f[si], start);

    while let Ok((_, current)) = open.pop() {
        let Some(ci) = grid.idx(current) else {
            continue;
        };
        if finalized[ci] {
            // Stale duplicate from a superseded score.
            continue;
        }
        finalized[ci] = true;
        if current == end {
            return reconstruct(&parents, grid, end);
        }

        for neighbor in current.neighbors4() {
            let Some(ni) = grid.idx(neighbor) else {
                continue;
            };
            if finalized[ni] || !grid.is_path(neighbor) {
                continue;
            }
            let tentative = g[ci] + 1;
            if tentative < g[ni] {
                parents[ni] = Some(current);
                g[ni] = tentative;
                f[ni] = tentative + manhattan(neighbor, end);
                open.push(f[ni], neighbor);
            }
        }
    }

    Vec::new()
}
