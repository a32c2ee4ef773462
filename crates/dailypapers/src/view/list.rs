//! The list of the day's papers.

use super::*;

/// Shown when the backend lists no papers at all.
pub const NO_PAPERS_MESSAGE: &str = "No papers available for today";

/// Shown when the paper list could not be fetched.
pub const LIST_FAILURE_MESSAGE: &str = "Failed to load papers. Please try again later.";

/// Label of the per-row action opening the detail view.
pub const VIEW_DETAILS_LABEL: &str = "View Details";

/// One rendered row of the paper list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRow {
  /// The paper's title
  pub title:   String,
  /// Author names joined into one line
  pub authors: String,
  /// Key topics as sent by the backend
  pub topics:  String,
  /// Short summary, when the backend sent one
  pub summary: Option<String>,
  /// Where the "View Details" action leads
  pub details: DetailQuery,
}

/// View over every paper the backend lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperListView {
  /// Current state; rows are only present once loaded
  state: ViewState<Vec<PaperRow>>,
}

impl From<&PaperSummary> for PaperRow {
  fn from(paper: &PaperSummary) -> Self {
    Self {
      title:   paper.title.clone(),
      authors: paper.authors_text(),
      topics:  paper.key_topics.clone(),
      summary: paper.summary.clone(),
      details: DetailQuery::new(&paper.day, &paper.id),
    }
  }
}

impl PaperListView {
  /// A view that has not heard from the backend yet.
  pub fn new() -> Self { Self::default() }

  /// Fetches the paper list once and settles on the outcome.
  ///
  /// Never fails: a backend problem becomes an error notice in the view.
  pub async fn load<B: Backend + ?Sized>(backend: &B) -> Self {
    Self { state: Self::outcome(backend.papers().await) }
  }

  /// Settles a loading view with the result of fetching the paper list.
  ///
  /// # Errors
  ///
  /// Returns [`DailyPapersError::AlreadySettled`] if the view already settled.
  pub fn apply(&mut self, fetched: Result<Vec<PaperSummary>>) -> Result<()> {
    self.state.settle(Self::outcome(fetched))
  }

  /// The state a fetch result leads to.
  fn outcome(fetched: Result<Vec<PaperSummary>>) -> ViewState<Vec<PaperRow>> {
    match fetched {
      Ok(papers) if papers.is_empty() => {
        info!("Backend listed no papers");
        ViewState::Error(Notice::new(NoticeKind::NothingToShow, NO_PAPERS_MESSAGE))
      },
      Ok(papers) => {
        debug!("Fetched {} papers", papers.len());
        ViewState::Loaded(papers.iter().map(PaperRow::from).collect())
      },
      Err(e) => {
        error!("Error fetching papers: {e}");
        ViewState::Error(Notice::new(NoticeKind::Failed, LIST_FAILURE_MESSAGE))
      },
    }
  }

  /// Current state of the view.
  pub fn state(&self) -> &ViewState<Vec<PaperRow>> { &self.state }

  /// The rendered rows, empty unless the view loaded.
  pub fn rows(&self) -> &[PaperRow] { self.state.content().map(Vec::as_slice).unwrap_or_default() }

  /// Renders the view as the popup's HTML fragment.
  ///
  /// All three regions are always present; only the one matching the state is displayed.
  pub fn render_html(&self) -> String {
    let visibility = self.state.visibility();
    let notice = self.state.notice().map(|notice| notice.message.as_str()).unwrap_or_default();

    let mut html = String::with_capacity(1024);
    html.push_str(&format!(
      "<div id=\"loading\" style=\"display: {}\">Loading papers...</div>\n",
      display(visibility.loading)
    ));
    html.push_str(&format!(
      "<div id=\"error\" style=\"display: {}\">{}</div>\n",
      display(visibility.error),
      markdown::escape_html(notice)
    ));
    html.push_str(&format!(
      "<div id=\"paperList\" style=\"display: {}\">\n",
      display(visibility.content)
    ));
    for row in self.rows() {
      render_row(&mut html, row);
    }
    html.push_str("</div>\n");
    html
  }
}

/// Appends one `.paper-item` to `html`.
fn render_row(html: &mut String, row: &PaperRow) {
  let day = row.details.day.as_deref().unwrap_or_default();
  let id = row.details.id.as_deref().unwrap_or_default();

  html.push_str("  <div class=\"paper-item\">\n");
  html.push_str(&format!(
    "    <h3 class=\"paper-title\">{}</h3>\n",
    markdown::escape_html(&row.title)
  ));
  html.push_str(&format!(
    "    <p class=\"paper-authors\">By: {}</p>\n",
    markdown::escape_html(&row.authors)
  ));
  html.push_str(&format!(
    "    <p class=\"paper-topics\">Topics: {}</p>\n",
    markdown::escape_html(&row.topics)
  ));
  if let Some(summary) = &row.summary {
    html.push_str(&format!(
      "    <p class=\"paper-summary\">{}</p>\n",
      markdown::escape_html(summary)
    ));
  }
  html.push_str(&format!(
    "    <a class=\"details-btn\" href=\"{}\" target=\"_blank\" data-day=\"{}\" \
     data-id=\"{}\">{}</a>\n",
    markdown::escape_html(&row.details.href()),
    markdown::escape_html(day),
    markdown::escape_html(id),
    VIEW_DETAILS_LABEL
  ));
  html.push_str("  </div>\n");
}
