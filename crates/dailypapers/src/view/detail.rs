//! The detail page of a single paper.

use super::*;

/// Placeholder shown in the explanation region while the paper is being fetched.
pub const LOADING_PLACEHOLDER: &str = "<p>Loading...</p>";

/// Prefix of the message shown when the paper could not be fetched.
pub const DETAIL_FAILURE_PREFIX: &str = "Failed to fetch paper details";

/// What a loaded detail view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
  /// The paper's title
  pub title:                String,
  /// Author names joined into one line, or the "Not available" placeholder
  pub authors:              String,
  /// The explanation as the backend wrote it
  pub explanation_markdown: String,
  /// The explanation rendered to HTML
  pub explanation_html:     String,
}

/// View over a single paper, addressed by a [`DetailQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperDetailView {
  /// Parameters the view was opened with
  query: DetailQuery,
  /// Current state
  state: ViewState<DetailContent>,
}

impl From<PaperDetail> for DetailContent {
  fn from(paper: PaperDetail) -> Self {
    Self {
      authors:              paper.authors_text(),
      explanation_html:     paper.explanation_html(),
      title:                paper.title,
      explanation_markdown: paper.explanation,
    }
  }
}

impl PaperDetailView {
  /// A view opened with `query` that has not heard from the backend yet.
  ///
  /// A query missing `day` or `id` settles the view on an error straight away, so no fetch
  /// result can be applied to it.
  pub fn new(query: DetailQuery) -> Self {
    let state = match query.validate() {
      Ok(_) => ViewState::Loading,
      Err(e) => Self::missing(e),
    };
    Self { query, state }
  }

  /// Validates `query`, then fetches the paper once and settles on the outcome.
  ///
  /// A query missing `day` or `id` settles the view on an error straight away, without any
  /// request. Never fails: backend problems become an error notice in the view.
  pub async fn load<B: Backend + ?Sized>(backend: &B, query: DetailQuery) -> Self {
    debug!("Opening paper details for {query:?}");
    let state = match query.validate() {
      Ok((day, id)) => Self::outcome(backend.paper(day, id).await),
      Err(e) => Self::missing(e),
    };
    Self { query, state }
  }

  /// Settles a loading view with the result of fetching the paper.
  ///
  /// # Errors
  ///
  /// Returns [`DailyPapersError::AlreadySettled`] if the view already settled.
  pub fn apply(&mut self, fetched: Result<PaperDetail>) -> Result<()> {
    self.state.settle(Self::outcome(fetched))
  }

  /// The state a query that failed validation leads to.
  fn missing(e: DailyPapersError) -> ViewState<DetailContent> {
    error!("{e}");
    ViewState::Error(Notice::new(NoticeKind::MissingParameters, e.to_string()))
  }

  /// The state a fetch result leads to.
  fn outcome(fetched: Result<PaperDetail>) -> ViewState<DetailContent> {
    match fetched {
      Ok(paper) => {
        debug!("Fetched paper details: {}", paper.title);
        ViewState::Loaded(DetailContent::from(paper))
      },
      Err(e) => {
        error!("Error fetching paper details: {e}");
        ViewState::Error(Notice::new(NoticeKind::Failed, format!("{DETAIL_FAILURE_PREFIX}: {e}")))
      },
    }
  }

  /// Parameters the view was opened with.
  pub fn query(&self) -> &DetailQuery { &self.query }

  /// Current state of the view.
  pub fn state(&self) -> &ViewState<DetailContent> { &self.state }

  /// Text of the title element: empty while loading, `Error` after a failure.
  pub fn title(&self) -> &str {
    match &self.state {
      ViewState::Loading => "",
      ViewState::Error(_) => ERROR_TITLE,
      ViewState::Loaded(content) => &content.title,
    }
  }

  /// Text of the authors element, once loaded.
  pub fn authors(&self) -> Option<&str> {
    self.state.content().map(|content| content.authors.as_str())
  }

  /// HTML of the explanation region.
  pub fn body_html(&self) -> String {
    match &self.state {
      ViewState::Loading => LOADING_PLACEHOLDER.to_string(),
      ViewState::Error(notice) => format!("<p>{}</p>", markdown::escape_html(&notice.message)),
      ViewState::Loaded(content) => content.explanation_html.clone(),
    }
  }

  /// Renders the view as the detail page's HTML fragment.
  pub fn render_html(&self) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(&format!(
      "<h1 id=\"title\">{}</h1>\n",
      markdown::escape_html(self.title())
    ));
    html.push_str(&format!(
      "<p class=\"authors\">Authors: <span id=\"authors-list\">{}</span></p>\n",
      markdown::escape_html(self.authors().unwrap_or_default())
    ));
    html.push_str(&format!("<div id=\"explanation\">{}</div>\n", self.body_html()));
    html
  }
}
