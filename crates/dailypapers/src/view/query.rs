//! The `day`/`id` pair that addresses a detail view.

use url::form_urlencoded;

use super::*;

/// Page the "View Details" action opens.
pub const DETAIL_PAGE: &str = "details.html";

/// Query parameters of a detail view, as read from its URL.
///
/// Either parameter may be missing; [`DetailQuery::validate`] decides whether the view can load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailQuery {
  /// The `day` parameter
  pub day: Option<String>,
  /// The `id` parameter
  pub id:  Option<String>,
}

impl DetailQuery {
  /// A query addressing paper `id` of `day`.
  pub fn new(day: impl Into<String>, id: impl Into<String>) -> Self {
    Self { day: Some(day.into()), id: Some(id.into()) }
  }

  /// Reads `day` and `id` from a query string.
  ///
  /// Accepts a bare query (`day=..&id=..`), one with a leading `?`, or a whole URL. When a
  /// parameter appears more than once the first occurrence wins.
  ///
  /// # Examples
  ///
  /// ```
  /// use dailypapers::view::DetailQuery;
  ///
  /// let query = DetailQuery::parse("details.html?day=2024-11-05&id=2411.01234");
  /// assert_eq!(query, DetailQuery::new("2024-11-05", "2411.01234"));
  ///
  /// let query = DetailQuery::parse("?day=2024-11-05");
  /// assert!(query.id.is_none());
  /// ```
  pub fn parse(input: &str) -> Self {
    let query = Self::query_part(input.trim());

    let mut parsed = Self::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
      match &*key {
        "day" if parsed.day.is_none() => parsed.day = Some(value.into_owned()),
        "id" if parsed.id.is_none() => parsed.id = Some(value.into_owned()),
        _ => {},
      }
    }
    parsed
  }

  /// The query string inside `input`, without any page prefix or fragment.
  ///
  /// Only a leading `?`, an absolute URL, or a page name before the first `?` is stripped; a
  /// bare query keeps any `?` inside its values.
  fn query_part(input: &str) -> &str {
    let query = match input.strip_prefix('?') {
      Some(query) => query,
      None => match input.split_once('?') {
        Some((page, query)) if Url::parse(input).is_ok() || !page.contains(['=', '&']) => query,
        _ => input,
      },
    };
    query.split_once('#').map_or(query, |(query, _)| query)
  }

  /// Returns `(day, id)` if both are present and non-empty.
  ///
  /// # Errors
  ///
  /// Returns [`DailyPapersError::MissingParameters`] naming every parameter that is missing or
  /// empty.
  pub fn validate(&self) -> Result<(&str, &str)> {
    let day = self.day.as_deref().filter(|day| !day.is_empty());
    let id = self.id.as_deref().filter(|id| !id.is_empty());
    match (day, id) {
      (Some(day), Some(id)) => Ok((day, id)),
      _ => {
        let mut missing = Vec::new();
        if day.is_none() {
          missing.push("day");
        }
        if id.is_none() {
          missing.push("id");
        }
        Err(DailyPapersError::MissingParameters(missing))
      },
    }
  }

  /// The query string carrying whichever parameters are set, URL-encoded.
  pub fn to_query_string(&self) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(day) = &self.day {
      serializer.append_pair("day", day);
    }
    if let Some(id) = &self.id {
      serializer.append_pair("id", id);
    }
    serializer.finish()
  }

  /// Link to the detail page for this query.
  ///
  /// ```
  /// use dailypapers::view::DetailQuery;
  ///
  /// let query = DetailQuery::new("2024-11-05", "2411.01234");
  /// assert_eq!(query.href(), "details.html?day=2024-11-05&id=2411.01234");
  /// ```
  pub fn href(&self) -> String { format!("{DETAIL_PAGE}?{}", self.to_query_string()) }
}
