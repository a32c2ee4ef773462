//! Command line interface for the daily papers client.
//!
//! This crate provides the `dailypapers` binary, a terminal front end to the `dailypapers`
//! library. It supports:
//! - Setting up the client configuration and greeting the backend
//! - Listing the papers the backend has for the day
//! - Showing the details of a single paper
//!
//! # Usage
//!
//! ```bash
//! # Point the client at a backend and say hello
//! dailypapers init --backend-url http://localhost:5000
//!
//! # List today's papers
//! dailypapers list
//!
//! # Show one of them, or render it as HTML
//! dailypapers detail --day 2024-11-05 --id 2411.01234
//! dailypapers detail --query "day=2024-11-05&id=2411.01234" --html
//! ```
//!
//! Output is colored, and logging detail goes to stderr with the `-v` flag.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use dailypapers::{
  backend::HttpBackend,
  configuration::Config,
  installer::notify_installed,
  view::{DetailQuery, PaperDetailView, PaperListView},
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;
use url::Url;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Browse the papers digested by the daily papers backend")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default platform-specific
  /// configuration directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Root URL of the backend, overriding the configuration file
  #[arg(long, global = true, env = "DAILYPAPERS_BACKEND_URL")]
  backend_url: Option<Url>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// The configuration file this invocation works with.
  fn config_path(&self) -> PathBuf { self.config.clone().unwrap_or_else(Config::default_path) }

  /// The stored configuration with command line overrides applied.
  fn resolve_config(&self) -> Result<Config> {
    let config = Config::load_or_default(self.config_path())?;
    Ok(match &self.backend_url {
      Some(url) => config.with_backend_url(url.clone()),
      None => config,
    })
  }
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set. Logs go to stderr so command output stays clean.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the dailypapers CLI application
///
/// Handles command line argument parsing, sets up logging, and executes the requested command.
///
/// # Errors
///
/// Returns [`DailyPapersCliError`] when the configuration cannot be read or written, or a prompt
/// fails. Backend problems are shown as part of the command's output instead.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let interaction = Terminal::new(cli.accept_defaults);
  match &cli.command {
    Commands::Init(init_options) => init(&interaction, &cli, init_options).await,
    Commands::List(list_options) => list(&interaction, &cli, list_options).await,
    Commands::Detail(detail_options) => detail(&interaction, &cli, detail_options).await,
  }
}
