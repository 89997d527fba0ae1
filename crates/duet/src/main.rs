//! duet - line and word level diffs for the terminal

mod config;
mod demo;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::Config;
use duet_core::{annotate_hunks, ColorMode, DiffEngine, Layout};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Compare two files line by line, highlighting the words that changed
#[derive(Parser, Debug)]
#[command(name = "duet", about, version)]
struct Cli {
    /// Original file
    #[arg(required_unless_present = "demo")]
    old: Option<PathBuf>,

    /// Modified file
    #[arg(required_unless_present = "demo")]
    new: Option<PathBuf>,

    /// Unchanged lines shown around each change
    #[arg(short = 'U', long, value_name = "N")]
    context: Option<usize>,

    /// inline, side-by-side or prefer-side-by-side
    #[arg(short, long)]
    layout: Option<Layout>,

    /// auto, always or never
    #[arg(long, value_name = "WHEN")]
    color: Option<ColorMode>,

    /// Output width in columns (default: terminal width)
    #[arg(short, long, value_name = "COLS")]
    width: Option<usize>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Config file (default: ~/.config/duet/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show a built-in sample in every layout
    #[arg(long, conflicts_with_all = ["old", "new"])]
    demo: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Rendered diff
    #[default]
    Text,
    /// Annotated hunks as JSON
    Json,
}

/// Whether the inputs differed, for the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Same,
    Differ,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Outcome::Same) => ExitCode::SUCCESS,
        Ok(Outcome::Differ) => ExitCode::from(1),
        Err(err) => {
            eprintln!("duet: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr; stdout carries the diff
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DUET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let engine = build_engine(cli, &config);
    tracing::debug!(?engine, "resolved settings");

    if cli.demo {
        write_stdout(&demo::render(engine))?;
        return Ok(Outcome::Same);
    }

    let (Some(old), Some(new)) = (cli.old.as_deref(), cli.new.as_deref()) else {
        anyhow::bail!("two files are required unless --demo is given");
    };

    match cli.format {
        OutputFormat::Text => {
            let output = engine.diff_files(old, new)?;
            write_stdout(&output)?;
            Ok(outcome(!output.is_empty()))
        }
        OutputFormat::Json => {
            let old_text = read(old)?;
            let new_text = read(new)?;
            let hunks = engine.hunks(&old_text, &new_text);
            let json = serde_json::to_string_pretty(&annotate_hunks(&hunks))
                .context("Failed to serialize hunks")?;
            write_stdout(&format!("{json}\n"))?;
            Ok(outcome(!hunks.is_empty()))
        }
    }
}

/// Flags win over the config file, which wins over the defaults
fn build_engine(cli: &Cli, config: &Config) -> DiffEngine {
    let mut engine = DiffEngine::new();
    if let Some(context) = cli.context.or(config.context) {
        engine = engine.with_context(context);
    }
    if let Some(layout) = cli.layout.or(config.layout) {
        engine = engine.with_layout(layout);
    }
    if let Some(color) = cli.color.or(config.color) {
        engine = engine.with_color(color);
    }
    if let Some(width) = cli.width.or(config.width) {
        engine = engine.with_width(width);
    }
    engine
}

fn outcome(differ: bool) -> Outcome {
    if differ {
        Outcome::Differ
    } else {
        Outcome::Same
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write output")
}
