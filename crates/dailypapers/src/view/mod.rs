//! Views over the backend's papers.
//!
//! Each view starts out [`ViewState::Loading`] and moves, exactly once, to either
//! [`ViewState::Error`] or [`ViewState::Loaded`]. There is no way back: a view that should be
//! refreshed is simply loaded again.
//!
//! - [`PaperListView`]: every paper the backend lists for the day
//! - [`PaperDetailView`]: a single paper, addressed by a [`DetailQuery`]
//!
//! Both views render to the same HTML the extension pages use, so their output can be dropped into
//! a page or written to a file.

use super::*;

mod detail;
mod list;
mod query;

pub use detail::*;
pub use list::*;
pub use query::*;

/// Title shown by a view that ended in an error.
pub const ERROR_TITLE: &str = "Error";

/// The three mutually exclusive states of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
  /// The request has been issued and nothing is known yet
  Loading,
  /// The view has nothing to show; the notice says why
  Error(Notice),
  /// The view has content
  Loaded(T),
}

/// What a view shows in its error region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  /// Why the view has nothing to show
  pub kind:    NoticeKind,
  /// Text shown to the reader
  pub message: String,
}

/// The reasons a view can end up showing a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
  /// The backend answered fine but had nothing to list. Not a failure.
  NothingToShow,
  /// The detail view was opened without the parameters it needs
  MissingParameters,
  /// The backend could not be reached, refused the request, or sent something unreadable
  Failed,
}

/// Which region of a view is on screen. Exactly one of the three is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
  /// The loading indicator
  pub loading: bool,
  /// The error region
  pub error:   bool,
  /// The view's content (the paper list, or the paper details)
  pub content: bool,
}

impl<T> ViewState<T> {
  /// Leaves the loading state for `next`.
  ///
  /// # Errors
  ///
  /// Returns [`DailyPapersError::AlreadySettled`] if the view already left the loading state, or
  /// if `next` is itself [`ViewState::Loading`].
  pub fn settle(&mut self, next: ViewState<T>) -> Result<()> {
    if !self.is_loading() || next.is_loading() {
      return Err(DailyPapersError::AlreadySettled);
    }
    *self = next;
    Ok(())
  }

  /// `true` until the view has settled.
  pub fn is_loading(&self) -> bool { matches!(self, ViewState::Loading) }

  /// The notice shown in the error region, if the view ended in an error.
  pub fn notice(&self) -> Option<&Notice> {
    match self {
      ViewState::Error(notice) => Some(notice),
      _ => None,
    }
  }

  /// The view's content, if it loaded.
  pub fn content(&self) -> Option<&T> {
    match self {
      ViewState::Loaded(content) => Some(content),
      _ => None,
    }
  }

  /// Which region this state puts on screen.
  pub fn visibility(&self) -> Visibility {
    Visibility {
      loading: matches!(self, ViewState::Loading),
      error:   matches!(self, ViewState::Error(_)),
      content: matches!(self, ViewState::Loaded(_)),
    }
  }
}

impl<T> Default for ViewState<T> {
  fn default() -> Self { ViewState::Loading }
}

impl Notice {
  /// Creates a notice of the given kind.
  pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into() }
  }
}

impl Display for Notice {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.message) }
}

/// CSS `display` value for a region.
fn display(visible: bool) -> &'static str {
  if visible {
    "block"
  } else {
    "none"
  }
}
