//! route-demo: plan a path on an occupancy grid and print it.
//!
//! Stands in for a graphical consumer: loads a scenario, runs the planner,
//! and renders the grid with the route as ASCII.
//!
//! # Usage
//!
//! ```bash
//! # Reference scenario: empty 25x14 grid, start (3,3), target (15,7)
//! cargo run --bin route-demo
//!
//! # With a scenario file
//! cargo run --bin route-demo -- --scenario scenario.toml
//!
//! # With command line overrides
//! cargo run --bin route-demo -- --start 0,0 --target 24,13
//! ```

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;

use marga_plan::{search, CellPoint, OccupancyGrid};

/// Scenario file structure.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scenario {
    /// Grid width in cells.
    width: usize,
    /// Grid height in cells.
    height: usize,
    /// Start cell as [x, y].
    start: [f32; 2],
    /// Target cell as [x, y].
    target: [f32; 2],
    /// Blocked cells as [x, y] pairs.
    blocked: Vec<[usize; 2]>,
    /// Optional ASCII map file (overrides width/height/blocked).
    map: Option<String>,
}

impl Default for Scenario {
    fn default() -> Self {
        // The reference deployment: 25x14 cells, start (3,3), target (15,7).
        Self {
            width: 25,
            height: 14,
            start: [3.0, 3.0],
            target: [15.0, 7.0],
            blocked: Vec::new(),
            map: None,
        }
    }
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "route-demo")]
#[command(about = "Plan a path on an occupancy grid and print it")]
struct Args {
    /// Scenario TOML file
    #[arg(short, long)]
    scenario: Option<String>,

    /// Start cell override, "x,y"
    #[arg(long)]
    start: Option<String>,

    /// Target cell override, "x,y"
    #[arg(long)]
    target: Option<String>,

    /// ASCII map file override ('#' blocked, '.' free)
    #[arg(long)]
    map: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut scenario = match &args.scenario {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => Scenario::default(),
    };
    if let Some(map) = &args.map {
        scenario.map = Some(map.clone());
    }

    let grid = match &scenario.map {
        Some(path) => OccupancyGrid::from_ascii(&fs::read_to_string(path)?)?,
        None => {
            let mut grid = OccupancyGrid::new(scenario.width, scenario.height);
            for [x, y] in &scenario.blocked {
                grid.set_blocked(*x, *y);
            }
            grid
        }
    };

    let start = match &args.start {
        Some(text) => parse_cell(text)?,
        None => CellPoint::new(scenario.start[0], scenario.start[1]),
    };
    let target = match &args.target {
        Some(text) => parse_cell(text)?,
        None => CellPoint::new(scenario.target[0], scenario.target[1]),
    };

    log::info!(
        "planning on {}x{} grid: ({}, {}) -> ({}, {})",
        grid.width(),
        grid.height(),
        start.x,
        start.y,
        target.x,
        target.y
    );

    let route = search(&grid, start, target)?;

    log::info!(
        "route found: {} cells, total length {:.0}",
        route.len(),
        route.total_length()
    );

    print!("{}", render(&grid, &route.cells(), start, target));
    Ok(())
}

/// Parse "x,y" into a cell.
fn parse_cell(text: &str) -> Result<CellPoint, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {:?}", text))?;
    let x: f32 = x.trim().parse().map_err(|_| format!("bad x in {:?}", text))?;
    let y: f32 = y.trim().parse().map_err(|_| format!("bad y in {:?}", text))?;
    Ok(CellPoint::new(x, y))
}

/// Render the grid with the route overlaid.
///
/// `S` start, `T` target, `*` route, `#` blocked, `.` free.
fn render(grid: &OccupancyGrid, route: &[CellPoint], start: CellPoint, target: CellPoint) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = CellPoint::new(x as f32, y as f32);
            let symbol = if cell == start {
                'S'
            } else if cell == target {
                'T'
            } else if route.contains(&cell) {
                '*'
            } else if grid.blocked_at(x as i32, y as i32) {
                '#'
            } else {
                '.'
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
