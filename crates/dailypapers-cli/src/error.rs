//! Errors for the `dailypapers` binary.

use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, DailyPapersCliError>;

/// Failures that end a CLI invocation with a non-zero exit code.
#[derive(Error, Debug)]
pub enum DailyPapersCliError {
  /// An error from the `dailypapers` library
  #[error(transparent)]
  DailyPapers(#[from] dailypapers::error::DailyPapersError),

  /// A prompt could not be shown or answered
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Writing to the terminal failed
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
