//! Styled grid rendering.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::style::Stylize;
use mazegrid_core::{Cell, Maze, Tile};

/// Draw the maze with the solution overlaid, two columns per cell so the
/// output is roughly square in a terminal font.
pub fn draw(out: &mut impl Write, maze: &Maze, path: &[Cell]) -> io::Result<()> {
    let on_path: HashSet<Cell> = path.iter().copied().collect();
    let last_col = maze.grid().cols() - 1;
    for (cell, tile) in maze.grid().iter() {
        if cell == maze.start() {
            write!(out, "{}", "S ".green().bold())?;
        } else if cell == maze.end() {
            write!(out, "{}", "E ".red().bold())?;
        } else if on_path.contains(&cell) {
            write!(out, "{}", "··".blue())?;
        } else if tile == Tile::Wall {
            write!(out, "{}", "██".dark_grey())?;
        } else {
            write!(out, "  ")?;
        }
        if cell.col == last_col {
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegrid_core::Grid;

    #[test]
    fn one_line_per_row() {
        let mut grid = Grid::new(4, 6);
        grid.fill(Tile::Path);
        let maze = Maze::new(grid);
        let mut buf = Vec::new();
        draw(&mut buf, &maze, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 4);
    }
}
