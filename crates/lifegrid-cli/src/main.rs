use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lifegrid::cells::{render_rows, write_cells_with_comment};
use lifegrid::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step a grid for a number of generations
    Run(RunArgs),
    /// Write a new random or empty grid to a `.cells` file
    New(NewArgs),
}

/// Settings shared by both subcommands. Flags override the config file.
#[derive(Args, Debug, Default)]
struct GridArgs {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<i32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Seed for reproducible randomization
    #[arg(long)]
    seed: Option<u64>,

    /// Edge behaviour: finite or toroidal
    #[arg(short, long)]
    boundary: Option<BoundaryMode>,

    /// Randomize from OS entropy instead of the seed
    #[arg(long)]
    entropy: bool,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    grid: GridArgs,

    /// Starting `.cells` document (randomized from the seed if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of generations to step
    #[arg(short = 'n', long, default_value_t = 100)]
    generations: u64,

    /// Print every generation, pausing `interval_ms` between them
    #[arg(short, long)]
    watch: bool,

    /// Override the configured interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Where to save the final generation
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct NewArgs {
    #[command(flatten)]
    grid: GridArgs,

    /// Leave every cell dead instead of randomizing
    #[arg(long)]
    empty: bool,

    /// Comment line for the document (defaults to a timestamp)
    #[arg(long)]
    comment: Option<String>,

    /// Destination `.cells` file
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(args),
        Command::New(args) => new(args),
    }
}

/// Load the config file (if any) and apply flag overrides on top.
fn resolve_config(args: &GridArgs) -> Result<LifeConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            LifeConfig::from_toml_str(&text)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => LifeConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(boundary) = args.boundary {
        config.boundary = boundary;
    }
    if args.entropy {
        config.reproducible = false;
    }
    config.validate()?;
    Ok(config)
}

fn open_document(path: &Path) -> Result<Grid> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_cells(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}

fn save_document(path: &Path, grid: &Grid, comment: Option<&str>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let written = match comment {
        Some(comment) => write_cells_with_comment(&mut writer, grid, comment),
        None => write_cells(&mut writer, grid),
    };
    written.with_context(|| format!("writing {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn run(args: RunArgs) -> Result<()> {
    let mut config = resolve_config(&args.grid)?;
    if let Some(interval_ms) = args.interval_ms {
        config.interval_ms = interval_ms;
        config.validate()?;
    }
    let mut life = LockstepLife::new(config)?;

    match &args.input {
        Some(path) => {
            let grid = open_document(path)?;
            tracing::info!(path = %path.display(), "loaded document");
            life.load(grid);
        }
        None => life.randomize_as_configured(),
    }

    if args.watch {
        let interval = Duration::from_millis(life.interval_ms());
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write!(out, "{}", render_rows(life.grid()))?;
        for _ in 0..args.generations {
            thread::sleep(interval);
            let result = life.step_sync();
            writeln!(out, "-- generation {} --", result.generation)?;
            write!(out, "{}", render_rows(result.grid))?;
            out.flush()?;
        }
    } else {
        life.run(args.generations);
    }

    let status = life.status();
    tracing::info!(
        generation = status.generation.0,
        alive = status.alive,
        boundary = %status.boundary,
        width = status.width,
        height = status.height,
        "run finished"
    );
    println!("{status}");

    if let Some(path) = &args.output {
        save_document(path, life.grid(), None)?;
        tracing::info!(path = %path.display(), "saved final generation");
    }
    Ok(())
}

fn new(args: NewArgs) -> Result<()> {
    let config = resolve_config(&args.grid)?;
    let mut grid = Grid::new(config.width, config.height)?;
    if !args.empty {
        randomize(&mut grid, config.seed, config.reproducible);
    }
    save_document(&args.output, &grid, args.comment.as_deref())?;
    tracing::info!(
        path = %args.output.display(),
        width = grid.width(),
        height = grid.height(),
        alive = grid.active_count(),
        "wrote new grid"
    );
    Ok(())
}
