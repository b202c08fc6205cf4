//! **mazegrid-gen** — maze generation by randomized depth-first
//! backtracking.
//!
//! [`Carver`] turns an all-wall grid into a *perfect* maze: every open cell
//! is reachable from the origin and the open subgraph is a tree, because
//! each carve step connects a fresh cell to exactly one already-visited
//! cell. The random source is injected so that a seeded generator
//! reproduces the same maze.
//!
//! ```
//! use mazegrid_gen::Carver;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut carver = Carver::new(StdRng::seed_from_u64(7));
//! let maze = carver.generate(21, 31);
//! assert!(maze.grid().is_path(maze.start()));
//! assert!(maze.grid().is_path(maze.end()));
//! ```

use mazegrid_core::{Cell, Grid, Maze, Tile};
use mazegrid_frontier::Stack;
use rand::{Rng, RngExt};

/// Two-step carve directions: up, right, down, left.
///
/// The carver works on the odd-coordinate lattice, jumping two cells at a
/// time and opening the wall cell in between.
const LATTICE_DIRS: [(i32, i32); 4] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// Maze generator carving walls with randomized depth-first backtracking.
pub struct Carver<R: Rng> {
    rng: R,
}

impl<R: Rng> Carver<R> {
    /// Create a carver drawing from the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` maze with the default endpoints.
    ///
    /// Both dimensions should be odd and at least 5 so the two-step lattice
    /// reaches every interior corner; other sizes carve what they can and
    /// still force the endpoints open.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is less than 3: there is no interior to
    /// carve.
    pub fn generate(&mut self, rows: i32, cols: i32) -> Maze {
        assert!(
            rows >= 3 && cols >= 3,
            "maze needs at least a 3x3 grid, got {rows}x{cols}"
        );
        let mut grid = Grid::new(rows, cols);
        self.carve(&mut grid);
        // The endpoints are part of the contract whatever the carve did.
        grid.set(Maze::default_start(), Tile::Path);
        grid.set(Maze::default_end(rows, cols), Tile::Path);
        Maze::new(grid)
    }

    fn carve(&mut self, grid: &mut Grid) {
        let origin = Maze::default_start();
        grid.set(origin, Tile::Path);

        let mut visited = vec![false; grid.len()];
        if let Some(i) = grid.idx(origin) {
            visited[i] = true;
        }

        let mut stack = Stack::new();
        stack.push(origin);
        let mut candidates: Vec<Cell> = Vec::with_capacity(4);

        // The current cell stays on the stack while it still has unvisited
        // lattice neighbors; popping is the backtrack step.
        while let Ok(&current) = stack.peek() {
            candidates.clear();
            for (dr, dc) in LATTICE_DIRS {
                let next = current.shift(dr, dc);
                if next.row > 0
                    && next.row < grid.rows() - 1
                    && next.col > 0
                    && next.col < grid.cols() - 1
                    && grid.idx(next).is_some_and(|i| !visited[i])
                {
                    candidates.push(next);
                }
            }

            if candidates.is_empty() {
                let _ = stack.pop();
                continue;
            }

            let next = candidates[self.rng.random_range(0..candidates.len())];
            let between = Cell::new((current.row + next.row) / 2, (current.col + next.col) / 2);
            grid.set(between, Tile::Path);
            grid.set(next, Tile::Path);
            if let Some(i) = grid.idx(next) {
                visited[i] = true;
            }
            stack.push(next);
        }
    }
}

/// Generate a maze with a thread-local random source.
///
/// Convenience for callers that do not need reproducibility; tests should
/// construct a [`Carver`] over a seeded generator instead.
pub fn generate(rows: i32, cols: i32) -> Maze {
    Carver::new(rand::rng()).generate(rows, cols)
}
