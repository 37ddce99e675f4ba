//! keyspan: find the keys between two keys on a QWERTY keyboard.
//!
//! # Usage
//!
//! ```text
//! keyspan [OPTIONS] <COMMAND>
//!
//! Commands:
//!   layout       Print the keyboard rows
//!   options      Print valid "to" keys for a "from" key (or every key)
//!   between      Print the keys strictly between FROM and TO
//!   resolve      Resolve FROM:TO pairs and print the concatenated result
//!   interactive  Edit selections line by line and watch the result
//!   config       Print the effective configuration
//!
//! Options:
//!   --config <PATH>        Config file [env: KEYSPAN_CONFIG]
//!   --format <text|json>   Output format [env: KEYSPAN_FORMAT]
//!   -v, --verbose          Per-selection report in text output
//! ```
//!
//! Results go to stdout; diagnostics go to stderr through `tracing`.  The log
//! level comes from `RUST_LOG`, falling back to `general.log_level` in the
//! config file.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use keyspan_cli::application::command::parse_pair;
use keyspan_cli::application::render::{
    render_keys, render_layout, render_report, OutputFormat, Report,
};
use keyspan_cli::application::session::ChoiceSession;
use keyspan_cli::infrastructure::console::{run_console, ConsoleOptions};
use keyspan_cli::infrastructure::storage::config::{self, AppConfig, GeneralConfig};
use keyspan_core::{between, Aggregator, Layout, SelectionList};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Find the keys between two keys on a QWERTY keyboard.
#[derive(Debug, Parser)]
#[command(name = "keyspan", version)]
struct Cli {
    /// Path to a TOML config file.
    ///
    /// Without it the platform config file is used if present.
    #[arg(long, global = true, env = "KEYSPAN_CONFIG")]
    config: Option<PathBuf>,

    /// Output format; overrides `output.format` from the config file.
    #[arg(long, global = true, value_enum, env = "KEYSPAN_FORMAT")]
    format: Option<OutputFormat>,

    /// Print one line per selection above the result (text format).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the keyboard rows.
    Layout,

    /// Print the valid "to" keys for a "from" key, or every key.
    Options {
        /// The selected "from" key.
        #[arg(long, allow_hyphen_values = true)]
        from: Option<String>,
    },

    /// Print the keys strictly between FROM and TO on the same row.
    Between {
        #[arg(allow_hyphen_values = true)]
        from: String,
        #[arg(allow_hyphen_values = true)]
        to: String,
    },

    /// Resolve FROM:TO pairs in order and print the concatenated result.
    ///
    /// An empty side leaves that field unset (`a:`, `:b`).  Incomplete,
    /// unknown, cross-row and reversed pairs contribute nothing.
    Resolve {
        #[arg(value_name = "FROM:TO", allow_hyphen_values = true)]
        pairs: Vec<String>,
    },

    /// Edit selections line by line; type `help` for commands.
    Interactive,

    /// Print the effective configuration as TOML.
    Config {
        /// Write a default config file to the platform location (or
        /// `--config`) if none exists.
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    /// Loads the config file named by `--config`, or the platform one.
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config {
            Some(path) => config::load_config_from(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => config::load_config().context("failed to load platform config"),
        }
    }

    /// Writes a default config file at `--config`, or at the platform path.
    ///
    /// Returns the path written.
    fn init_config(&self) -> anyhow::Result<PathBuf> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => config::config_file_path()?,
        };
        config::init_config_at(&path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(path)
    }
}

/// Initialises structured logging on stderr.  `RUST_LOG` wins over `default_filter`.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `config --init` creates the file every other command reads, so it runs
    // before any config is loaded.
    if matches!(cli.command, Commands::Config { init: true }) {
        init_tracing(&GeneralConfig::default().log_level);
        let path = cli.init_config()?;
        info!(path = %path.display(), "wrote default config");
        println!("wrote {}", path.display());
        return Ok(());
    }

    let config = cli.load_config()?;
    init_tracing(&config.general.log_level);

    debug!(?config, "configuration loaded");

    let format = cli.format.unwrap_or(config.output.format);
    let verbose = cli.verbose || config.output.verbose;
    let aggregator = Aggregator::standard();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Layout => {
            writeln!(out, "{}", render_layout(Layout::standard(), format)?)?;
        }
        Commands::Options { from } => {
            let keys = aggregator.options_for_to(from.as_deref());
            writeln!(out, "{}", render_keys(&keys, format)?)?;
        }
        Commands::Between { from, to } => {
            let keys = between(&from, &to)
                .with_context(|| format!("no keys between {from:?} and {to:?}"))?;
            writeln!(out, "{}", render_keys(&keys, format)?)?;
        }
        Commands::Resolve { pairs } => {
            let selections = parse_selections(&pairs)?;
            let report = Report::build(&aggregator, &selections);
            writeln!(out, "{}", render_report(&report, format, verbose)?)?;
        }
        Commands::Interactive => {
            let mut session = ChoiceSession::new(aggregator);
            let options = ConsoleOptions {
                format,
                verbose,
                prompt: config.output.prompt.clone(),
            };
            let stdin = io::stdin();
            run_console(&mut session, stdin.lock(), &mut out, &options)?;
        }
        Commands::Config { .. } => {
            write!(out, "{}", toml::to_string_pretty(&config)?)?;
        }
    }

    Ok(())
}

/// Builds a selection list from `FROM:TO` arguments.
///
/// No arguments gives the starting list of one empty selection.
fn parse_selections(pairs: &[String]) -> anyhow::Result<SelectionList> {
    if pairs.is_empty() {
        return Ok(SelectionList::new());
    }
    pairs
        .iter()
        .map(|pair| parse_pair(pair).map_err(anyhow::Error::from))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
