//! wordsphere - rotating word cloud in the terminal
//!
//! Usage:
//!   wordsphere run [WORDS...]            # interactive, q quits, space pauses
//!   wordsphere snapshot --ticks 90       # JSON lines of the placed labels
//!   wordsphere measure --height 300      # preferred size and ring plan
//!
//! With no words the numbered demo list 0..49 is used.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wordsphere_cli::settings::{CloudOverrides, Settings};

/// Rotating spherical word cloud
#[derive(Parser)]
#[command(name = "wordsphere")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to wordsphere.toml in the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    overrides: CloudOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the cloud in the terminal until q or Esc
    Run {
        /// Words to show
        words: Vec<String>,

        /// Milliseconds between frames
        #[arg(long)]
        tick_ms: Option<u64>,
    },

    /// Advance the cloud headlessly and print the final frame as JSON lines
    Snapshot {
        /// Words to show
        words: Vec<String>,

        /// Ticks to advance before capturing
        #[arg(short, long, default_value = "0")]
        ticks: u64,

        /// Surface width
        #[arg(long, default_value = "520")]
        width: f64,

        /// Surface height
        #[arg(long, default_value = "520")]
        height: f64,
    },

    /// Print the size the cloud asks for
    Measure {
        /// Words to lay out
        words: Vec<String>,

        /// Exact width imposed by the host
        #[arg(long)]
        width: Option<f64>,

        /// Exact height imposed by the host
        #[arg(long)]
        height: Option<f64>,
    },
}

fn init_logging(level: &str, log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{}'", level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_file.as_ref())?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply(&cli.overrides);

    match cli.command {
        Commands::Run { words, tick_ms } => {
            if let Some(tick_ms) = tick_ms {
                settings.terminal.tick_ms = tick_ms;
            }
            let words = settings.resolve_words(&words);
            wordsphere_cli::run_interactive(&settings, words)
        }
        Commands::Snapshot {
            words,
            ticks,
            width,
            height,
        } => {
            let words = settings.resolve_words(&words);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            wordsphere_cli::write_snapshot(&settings, words, ticks, width, height, &mut out)
        }
        Commands::Measure {
            words,
            width,
            height,
        } => {
            let words = settings.resolve_words(&words);
            let report = wordsphere_cli::measure(&settings, words, width, height)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
