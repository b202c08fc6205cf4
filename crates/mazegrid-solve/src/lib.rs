//! **mazegrid-solve** — pathfinding over a generated maze.
//!
//! Three interchangeable strategies route between a maze's start and end
//! cells:
//!
//! - **BFS** ([`bfs_path`]) — layer-by-layer; shortest path guaranteed
//! - **DFS** ([`dfs_path`]) — stack-driven; *a* path, not the shortest
//! - **A\*** ([`astar_path`]) — Manhattan-guided best-first; shortest path
//!   guaranteed
//!
//! All three share the same contract: the path runs from start to end
//! inclusive, and an unreachable end yields an empty sequence — a normal
//! outcome, not an error. Each call allocates its own visitation and
//! predecessor bookkeeping, so solves never contaminate one another.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod path;

pub use astar::astar_path;
pub use bfs::bfs_path;
pub use dfs::dfs_path;
pub use distance::manhattan;

use std::fmt;

use mazegrid_core::{Cell, Maze};

/// Which search strategy [`solve`] should run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// A* with the Manhattan heuristic.
    AStar,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => write!(f, "BFS"),
            Self::Dfs => write!(f, "DFS"),
            Self::AStar => write!(f, "A*"),
        }
    }
}

/// Find a path from the maze's start to its end with the given strategy.
///
/// Returns the full cell sequence including both endpoints, or an empty
/// vector when the end is unreachable.
pub fn solve(maze: &Maze, strategy: Strategy) -> Vec<Cell> {
    match strategy {
        Strategy::Bfs => bfs_path(maze),
        Strategy::Dfs => dfs_path(maze),
        Strategy::AStar => astar_path(maze),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Strategy;
    use mazegrid_core::{Grid, Tile};
    use mazegrid_gen::Carver;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::AStar];

    fn carve_seeded(seed: u64, rows: i32, cols: i32) -> Maze {
        Carver::new(StdRng::seed_from_u64(seed)).generate(rows, cols)
    }

    fn assert_valid_path(maze: &Maze, path: &[Cell]) {
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.end()));
        for cell in path {
            assert!(maze.grid().is_path(*cell), "{cell} is not open");
        }
        // Consecutive cells are orthogonally adjacent.
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn all_strategies_solve_a_generated_maze() {
        let maze = carve_seeded(11, 21, 31);
        for strategy in ALL {
            let path = solve(&maze, strategy);
            assert!(!path.is_empty(), "{strategy} found no path");
            assert_valid_path(&maze, &path);
        }
    }

    #[test]
    fn minimal_5x5_is_solvable_by_all() {
        let maze = carve_seeded(0, 5, 5);
        assert_eq!(maze.start(), Cell::new(1, 1));
        assert_eq!(maze.end(), Cell::new(3, 3));
        for strategy in ALL {
            assert_valid_path(&maze, &solve(&maze, strategy));
        }
    }

    #[test]
    fn bfs_and_astar_agree_on_length() {
        for seed in 0..10 {
            let maze = carve_seeded(seed, 17, 23);
            let bfs = bfs_path(&maze);
            let astar = astar_path(&maze);
            assert_eq!(bfs.len(), astar.len(), "seed {seed}");
        }
    }

    #[test]
    fn dfs_is_never_shorter_than_bfs() {
        for seed in 0..10 {
            let maze = carve_seeded(seed, 17, 23);
            let bfs = bfs_path(&maze);
            let dfs = dfs_path(&maze);
            assert!(dfs.len() >= bfs.len(), "seed {seed}");
        }
    }

    #[test]
    fn solving_twice_is_identical() {
        let maze = carve_seeded(77, 15, 15);
        for strategy in ALL {
            assert_eq!(solve(&maze, strategy), solve(&maze, strategy));
        }
    }

    #[test]
    fn walled_off_end_returns_empty_everywhere() {
        // Open grid with an unbroken wall ring around the end.
        let mut grid = Grid::new(9, 9);
        grid.fill(Tile::Path);
        for col in 5..9 {
            grid.set(Cell::new(5, col), Tile::Wall);
        }
        for row in 5..9 {
            grid.set(Cell::new(row, 5), Tile::Wall);
        }
        grid.set(Cell::new(7, 7), Tile::Path);
        let maze = Maze::with_endpoints(grid, Cell::new(1, 1), Cell::new(7, 7)).unwrap();
        for strategy in ALL {
            assert_eq!(solve(&maze, strategy), Vec::new(), "{strategy}");
        }
    }

    #[test]
    fn start_equals_end() {
        let mut grid = Grid::new(3, 3);
        grid.fill(Tile::Path);
        let maze = Maze::with_endpoints(grid, Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        for strategy in ALL {
            assert_eq!(solve(&maze, strategy), vec![Cell::new(1, 1)], "{strategy}");
        }
    }

    #[test]
    fn corner_blocked_3x3() {
        // 3x3 all open except the two corners that would complete a
        // diagonal detour; the L-shaped corridor of length 5 remains.
        let mut grid = Grid::new(3, 3);
        grid.fill(Tile::Path);
        grid.set(Cell::new(0, 2), Tile::Wall);
        grid.set(Cell::new(2, 0), Tile::Wall);
        let maze = Maze::with_endpoints(grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert_eq!(bfs_path(&maze).len(), 5);
        assert_eq!(astar_path(&maze).len(), 5);
        assert_valid_path(&maze, &dfs_path(&maze));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        // Optimality and validity across random mazes and sizes.
        #[test]
        fn strategies_agree_for_all_mazes(
            seed in 0u64..500,
            half_rows in 2i32..10,
            half_cols in 2i32..10,
        ) {
            let maze = carve_seeded(seed, 2 * half_rows + 1, 2 * half_cols + 1);
            let bfs = bfs_path(&maze);
            let dfs = dfs_path(&maze);
            let astar = astar_path(&maze);
            // A carved maze always connects its default endpoints.
            prop_assert!(!bfs.is_empty());
            prop_assert_eq!(bfs.len(), astar.len());
            prop_assert!(dfs.len() >= bfs.len());
            for path in [&bfs, &dfs, &astar] {
                prop_assert_eq!(path.first(), Some(&maze.start()));
                prop_assert_eq!(path.last(), Some(&maze.end()));
                for pair in path.windows(2) {
                    prop_assert_eq!(manhattan(pair[0], pair[1]), 1);
                }
            }
        }
    }
}
