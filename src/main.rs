// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Algoscope CLI entrypoint.
//!
//! Without a subcommand this opens the interactive TUI. `path` and `sort` run a single algorithm
//! headless and print the final state as text or JSON.

use std::fs::{self, OpenOptions};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use algoscope::config::{ConfigError, Overrides, Settings};
use algoscope::error::AppError;
use algoscope::exec::Speed;
use algoscope::headless::{self, PathRequest, SortRequest};
use algoscope::model::{Coord, Grid, Maze};
use algoscope::pathfinding::Algorithm;
use algoscope::sorting::SortAlgorithm;
use algoscope::sound::{self, AudioMode};
use algoscope::tui;

const LOG_ENV: &str = "ALGOSCOPE_LOG";

#[derive(Debug, Parser)]
#[command(name = "algoscope", version, about = "Animated pathfinding and sorting in the terminal")]
struct Cli {
    /// Config file; `./algoscope.toml` is read when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    audio: Option<AudioMode>,

    /// Append logs to this file. The TUI logs nowhere else.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one search and print the final grid
    Path(PathArgs),
    /// Sort one array and print the counters
    Sort(SortArgs),
}

#[derive(Debug, Args)]
struct PathArgs {
    /// dijkstra, astar, depth-first-search or bidirectional
    #[arg(long, default_value = "dijkstra")]
    algorithm: Algorithm,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// `x,y`; defaults to the top-left corner
    #[arg(long)]
    start: Option<Coord>,

    /// `x,y`; defaults to the bottom-right corner
    #[arg(long)]
    end: Option<Coord>,

    /// `x,y`, repeatable
    #[arg(long = "wall")]
    walls: Vec<Coord>,

    /// Built-in layout: spiral, walled-in or barriers
    #[arg(long, value_parser = parse_maze, conflicts_with_all = ["rows", "cols"])]
    maze: Option<Maze>,

    /// ASCII grid file using `.#SE`, one row per line
    #[arg(long, conflicts_with_all = ["rows", "cols", "maze"])]
    layout: Option<PathBuf>,

    /// Delay per visited cell
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct SortArgs {
    /// bubble, selection, shaker or merge
    #[arg(long, default_value = "selection")]
    algorithm: SortAlgorithm,

    /// Number of random values: 10, 20, 30, 40 or 50; defaults to the configured element count
    #[arg(long, conflicts_with = "values")]
    len: Option<usize>,

    /// Comma-separated input values
    #[arg(long, value_delimiter = ',')]
    values: Option<Vec<u32>>,

    #[arg(long)]
    seed: Option<u64>,

    /// Speed multiplier: 0.5, 1, 4 or 100
    #[arg(long, default_value_t = 100.0)]
    speed: f64,

    #[arg(long)]
    json: bool,
}

fn parse_maze(value: &str) -> Result<Maze, String> {
    Maze::from_slug(value).ok_or_else(|| {
        let known = Maze::ALL.iter().map(|maze| maze.slug()).collect::<Vec<_>>().join(", ");
        format!("unknown maze `{value}` (expected one of {known})")
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("algoscope: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = Settings::resolve(cli.config.as_deref(), &overrides(&cli))?;

    let headless = cli.command.is_some();
    init_logging(settings.log_file.as_deref(), headless)?;
    // the bell writes to stdout, which headless runs reserve for their report
    let audio = match (headless, settings.audio) {
        (true, AudioMode::Bell) => AudioMode::Trace,
        (_, mode) => mode,
    };
    sound::configure(audio);
    tracing::debug!(?settings, "settings resolved");

    match cli.command {
        None => tui::run(&settings),
        Some(Command::Path(args)) => run_path(args, &settings),
        Some(Command::Sort(args)) => run_sort(args, &settings),
    }
}

/// Command-line layer of the settings. `sort --len` is held to the same element counts as the TUI.
fn overrides(cli: &Cli) -> Overrides {
    let mut overrides =
        Overrides { audio: cli.audio, log_file: cli.log_file.clone(), ..Overrides::default() };
    match &cli.command {
        Some(Command::Path(args)) => {
            overrides.rows = args.rows;
            overrides.cols = args.cols;
        }
        Some(Command::Sort(args)) => overrides.elements = args.len,
        None => {}
    }
    overrides
}

fn run_path(args: PathArgs, settings: &Settings) -> Result<(), AppError> {
    let grid = match (args.maze, &args.layout) {
        (Some(maze), _) => maze.grid(),
        (None, Some(layout)) => Grid::from_ascii(&fs::read_to_string(layout)?)?,
        (None, None) => Grid::new(settings.rows, settings.cols),
    };
    let request = PathRequest {
        algorithm: args.algorithm,
        grid,
        start: args.start,
        end: args.end,
        walls: args.walls,
        delay: Duration::from_millis(args.delay_ms),
    };
    let report = block_on(headless::run_path(&request))??;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", headless::render_path(&report));
    }
    Ok(())
}

fn run_sort(args: SortArgs, settings: &Settings) -> Result<(), AppError> {
    let speed = Speed::from_multiplier(args.speed).ok_or(ConfigError::Speed(args.speed))?;
    let request = SortRequest {
        algorithm: args.algorithm,
        values: args.values,
        len: settings.elements,
        seed: args.seed,
        speed,
        base_delay: settings.sort_base_delay(),
    };
    let summary = block_on(headless::run_sort(&request))??;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", headless::render_sort(&summary));
    }
    Ok(())
}

fn block_on<F: Future>(future: F) -> Result<F::Output, AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
    Ok(runtime.block_on(future))
}

/// Headless runs log to stderr. The TUI owns the terminal, so it only logs to a file.
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<(), AppError> {
    let filter = || EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| AppError::LogFile { path: path.to_owned(), source })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt().with_env_filter(filter()).with_writer(io::stderr).with_target(false).init();
        }
        None => {}
    }
    Ok(())
}
