//! mazeview — generate a maze in the terminal and watch it solved.

mod render;

use std::error::Error;
use std::io::{self, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use mazegrid_core::Cell;
use mazegrid_gen::Carver;
use mazegrid_solve::{Strategy, solve};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(
    name = "mazeview",
    about = "Generate a maze in the terminal and watch it solved"
)]
struct Args {
    /// Grid rows (odd, at least 5).
    #[arg(long, default_value_t = 31)]
    rows: i32,

    /// Grid columns (odd, at least 5).
    #[arg(long, default_value_t = 41)]
    cols: i32,

    /// Seed for a reproducible maze; drawn from the thread RNG when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Search strategy.
    #[arg(long, value_enum, default_value = "bfs")]
    strategy: StrategyArg,

    /// Run all three strategies side by side.
    #[arg(long)]
    all: bool,

    /// Relocate the start cell, as `row,col` (must be an open cell).
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,

    /// Relocate the end cell, as `row,col` (must be an open cell).
    #[arg(long, value_parser = parse_cell)]
    end: Option<Cell>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Bfs,
    Dfs,
    Astar,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bfs => Strategy::Bfs,
            StrategyArg::Dfs => Strategy::Dfs,
            StrategyArg::Astar => Strategy::AStar,
        }
    }
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row.trim().parse().map_err(|_| format!("bad row in `{s}`"))?;
    let col = col.trim().parse().map_err(|_| format!("bad col in `{s}`"))?;
    Ok(Cell::new(row, col))
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.rows < 5 || args.cols < 5 || args.rows % 2 == 0 || args.cols % 2 == 0 {
        return Err("rows and cols must be odd and at least 5".into());
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().next_u64());
    let t0 = Instant::now();
    let mut maze = Carver::new(StdRng::seed_from_u64(seed)).generate(args.rows, args.cols);
    log::debug!("carved {}x{} maze in {:?}", args.rows, args.cols, t0.elapsed());

    if let Some(cell) = args.start {
        maze.set_start(cell)?;
    }
    if let Some(cell) = args.end {
        maze.set_end(cell)?;
    }

    let strategies: Vec<Strategy> = if args.all {
        vec![Strategy::Bfs, Strategy::Dfs, Strategy::AStar]
    } else {
        vec![args.strategy.into()]
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{}x{} maze, seed {seed}", args.rows, args.cols)?;
    for strategy in strategies {
        let t0 = Instant::now();
        let path = solve(&maze, strategy);
        let elapsed = t0.elapsed();
        log::debug!("{strategy} explored in {elapsed:?}");

        render::draw(&mut out, &maze, &path)?;
        if path.is_empty() {
            writeln!(out, "{strategy}: no path ({elapsed:.2?})")?;
        } else {
            writeln!(out, "{strategy}: {} cells in {elapsed:.2?}", path.len())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
