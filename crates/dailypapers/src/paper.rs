//! Paper records as the backend serves them.
//!
//! Two read-only shapes come back from the backend:
//!
//! - [`PaperSummary`]: one row of the daily list
//! - [`PaperDetail`]: the full record for a single paper, with a Markdown explanation
//!
//! Both are built straight from the response body and never modified afterwards; views only read
//! them.
//!
//! # Examples
//!
//! ```
//! use dailypapers::paper::PaperDetail;
//!
//! let detail: PaperDetail = serde_json::from_str(
//!   r#"{ "title": "T", "authors": ["A", "B"], "explanation": "**x**" }"#,
//! )
//! .unwrap();
//! assert_eq!(detail.authors_text(), "A, B");
//! ```

use serde_json::Value;

use super::*;

/// Separator used when showing a list of author names on one line.
pub const AUTHOR_SEPARATOR: &str = ", ";

/// Shown instead of the author names when a detail record has none.
pub const AUTHORS_PLACEHOLDER: &str = "Not available";

/// Lightweight representation of a paper, as listed by `GET /api/papers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSummary {
  /// Backend identifier of the paper, unique within its day
  pub id:         String,
  /// The day the paper was digested, used as the collection name by the backend
  pub day:        String,
  /// The paper's full title
  pub title:      String,
  /// Author names in the order the paper lists them
  pub by:         Vec<String>,
  /// Key topics, already joined into a single string by the backend
  pub key_topics: String,
  /// Short summary of the paper, when the backend provides one
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary:    Option<String>,
}

/// Full record for a single paper, as returned by `GET /api/paper/{day}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDetail {
  /// The paper's full title
  pub title:       String,
  /// Author names, or `None` if the backend did not send a proper list of them
  #[serde(default, deserialize_with = "deserialize_authors")]
  pub authors:     Option<Vec<String>>,
  /// Long-form explanation of the paper, formatted as Markdown
  pub explanation: String,
}

impl PaperSummary {
  /// Author names joined with [`AUTHOR_SEPARATOR`].
  pub fn authors_text(&self) -> String { self.by.join(AUTHOR_SEPARATOR) }
}

impl PaperDetail {
  /// Author names joined with [`AUTHOR_SEPARATOR`], or [`AUTHORS_PLACEHOLDER`] when the record
  /// carries no author list.
  pub fn authors_text(&self) -> String {
    match &self.authors {
      Some(authors) => authors.join(AUTHOR_SEPARATOR),
      None => AUTHORS_PLACEHOLDER.to_string(),
    }
  }

  /// The explanation converted from Markdown to HTML.
  pub fn explanation_html(&self) -> String { markdown::to_html(&self.explanation) }
}

impl Display for PaperSummary {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({}/{})", self.title, self.day, self.id)
  }
}

/// Accepts any JSON value for `authors` and keeps it only if it is an array.
///
/// Array entries that are not strings are shown the way they are written in JSON, except `null`
/// which becomes an empty name.
fn deserialize_authors<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where D: serde::Deserializer<'de> {
  let value = Value::deserialize(deserializer)?;
  Ok(match value {
    Value::Array(entries) => Some(
      entries
        .into_iter()
        .map(|entry| match entry {
          Value::String(name) => name,
          Value::Null => String::new(),
          other => other.to_string(),
        })
        .collect(),
    ),
    _ => None,
  })
}
