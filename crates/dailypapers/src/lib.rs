//! Client library for the daily papers backend.
//!
//! `dailypapers` fetches the papers a local backend has digested for the day and turns them into
//! views that can be shown to a reader:
//!
//! - A list of paper summaries, each carrying a "View Details" action
//! - A detail page for a single paper with its explanation rendered from Markdown
//! - A one-off notification to the backend when the client is first installed
//!
//! # Getting Started
//!
//! ```no_run
//! use dailypapers::{
//!   backend::HttpBackend,
//!   configuration::Config,
//!   view::{DetailQuery, PaperDetailView, PaperListView},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::load_or_default(Config::default_path())?;
//!   let backend = HttpBackend::from_config(&config);
//!
//!   // Everything the backend has for today
//!   let list = PaperListView::load(&backend).await;
//!   for row in list.rows() {
//!     println!("{} ({})", row.title, row.authors);
//!   }
//!
//!   // A single paper, addressed the same way the detail page is
//!   let query = DetailQuery::parse("?day=2024-11-05&id=2411.01234");
//!   let detail = PaperDetailView::load(&backend, query).await;
//!   println!("{}", detail.render_html());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`paper`]: The summary and detail records the backend returns
//! - [`backend`]: The [`Backend`](backend::Backend) trait and its HTTP implementation
//! - [`view`]: List and detail views with their loading/error/loaded states
//! - [`markdown`]: Markdown to HTML conversion for paper explanations
//! - [`installer`]: The notification sent once on installation
//! - [`configuration`]: Where the backend lives and how that is persisted
//! - [`error`]: Error type shared by the whole crate

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace};
use url::Url;
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod backend;
pub mod configuration;
pub mod error;
pub mod installer;
pub mod markdown;
pub mod paper;
pub mod view;

use crate::{backend::*, configuration::*, error::*, paper::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use dailypapers::{backend::HttpBackend, prelude::*, view::PaperListView};
///
/// async fn example(backend: &impl Backend) -> Result<(), DailyPapersError> {
///   let papers = backend.papers().await?;
///   println!("{} papers today", papers.len());
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{backend::Backend, error::DailyPapersError};
}
