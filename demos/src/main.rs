//! ASCII maze pathfinding demo.
//!
//! Run: cargo run --bin pathstar-demo -- [MAP_FILE] [--heuristic none|manhattan|chebyshev|crow|straight] [--octile]

use pathstar_demos::{DEFAULT_MAZE, Options, configure, run};
use pathstar_grid::AsciiMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options::parse(std::env::args().skip(1))?;
    let text = match &opts.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAZE.to_string(),
    };
    let map = configure(AsciiMap::parse(&text)?, &opts);
    println!("{}", run(&map, opts.heuristic)?);
    Ok(())
}
