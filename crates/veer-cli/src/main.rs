//! `veer` — solve a heading-aware maze from a text file.

mod report;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use veer_core::{Grid, Heading};
use veer_paths::{CostModel, Query};

use report::Report;

#[derive(Parser)]
#[command(name = "veer")]
#[command(about = "Minimum-cost routes through a maze where turning costs extra", long_about = None)]
#[command(version)]
struct Cli {
    /// Maze file (`.` empty, `#` wall, `S` start, `E` goal), or `-` for stdin
    input: PathBuf,

    /// Cost of moving one cell forward
    #[arg(long, default_value_t = CostModel::DEFAULT_ADVANCE)]
    advance_cost: u32,

    /// Cost of one 90° turn
    #[arg(long, default_value_t = CostModel::DEFAULT_TURN)]
    turn_cost: u32,

    /// Heading the agent starts with
    #[arg(long, value_enum, default_value_t = HeadingArg::East)]
    heading: HeadingArg,

    /// Print the maze with optimal-route cells marked
    #[arg(long)]
    render: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeadingArg {
    North,
    East,
    South,
    West,
}

impl From<HeadingArg> for Heading {
    fn from(h: HeadingArg) -> Self {
        match h {
            HeadingArg::North => Heading::North,
            HeadingArg::East => Heading::East,
            HeadingArg::South => Heading::South,
            HeadingArg::West => Heading::West,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let text = read_input(&cli.input)?;
    let grid = Grid::parse(&text)
        .with_context(|| format!("invalid maze in {}", cli.input.display()))?;
    let costs = CostModel::new(cli.advance_cost, cli.turn_cost).context("invalid cost model")?;
    info!(
        "loaded {}x{} maze from {}",
        grid.rows(),
        grid.cols(),
        cli.input.display()
    );

    let solution = Query::new(&grid)
        .with_costs(costs)
        .with_heading(cli.heading.into())
        .run();
    let report = Report::new(&grid, &solution, cli.render);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read maze from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
