//! Error types for the dailypapers library.
//!
//! Every fallible operation in the crate returns [`DailyPapersError`]. The variants follow the
//! ways a view can fail to show a paper:
//! - The detail page was opened without the parameters it needs
//! - The backend could not be reached
//! - The backend answered with a non-success status
//! - The backend answered with a body that is not the expected JSON
//!
//! # Examples
//!
//! ```no_run
//! use dailypapers::{backend::HttpBackend, error::DailyPapersError, prelude::*};
//!
//! # async fn example(backend: HttpBackend) -> Result<(), DailyPapersError> {
//! match backend.paper("2024-11-05", "2411.01234").await {
//!   Err(DailyPapersError::Status { status, .. }) => println!("Backend said {status}"),
//!   Err(DailyPapersError::Network(e)) => println!("Network error: {e}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(paper) => println!("Found {}", paper.title),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`dailypapers`](crate) crate.
pub type Result<T> = core::result::Result<T, DailyPapersError>;

/// Errors that can occur when talking to the backend or building views.
#[derive(Error, Debug)]
pub enum DailyPapersError {
  /// The detail page was opened without a `day` and/or `id` query parameter.
  ///
  /// Holds the names of the parameters that were missing or empty, in the order
  /// `day`, `id`.
  #[error("Missing required parameters: {}", .0.join(", "))]
  MissingParameters(Vec<&'static str>),

  /// A network request failed before a response arrived.
  ///
  /// This can occur when:
  /// - The backend is not running
  /// - The connection is refused or reset
  /// - The response body could not be read
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The backend answered with a non-success HTTP status.
  ///
  /// `detail` carries the `detail` field of the error body when the backend sent one.
  #[error("Backend responded with {status}{}", detail_suffix(.detail))]
  Status {
    /// Status code of the response
    status: reqwest::StatusCode,
    /// Message from the backend's error body, if any
    detail: Option<String>,
  },

  /// The response body was not the JSON shape that was asked for.
  #[error("Failed to parse backend response: {0}")]
  Parse(#[from] serde_json::Error),

  /// A configured backend URL could not be parsed.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),

  /// The backend URL cannot have path segments appended to it (e.g. `mailto:` URLs).
  #[error("Backend URL cannot be used as a base: {0}")]
  NotABase(String),

  /// A view was asked to leave the loading state a second time.
  #[error("View has already finished loading")]
  AlreadySettled,

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The configuration file is not valid TOML for [`Config`](crate::configuration::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be written as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// Any other configuration problem.
  #[error("{0}")]
  Config(String),
}

/// Formats the optional backend detail message as `": <detail>"`.
fn detail_suffix(detail: &Option<String>) -> String {
  detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}
