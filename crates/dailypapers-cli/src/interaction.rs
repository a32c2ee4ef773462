//! How the CLI talks to the person running it.

use console::Emoji;
use dailypapers::view::{PaperRow, ViewState};
use dialoguer::Confirm;

use super::*;

// Prefixes and glyphs shared by every reply
/// Marks informational lines
pub static INFO_PREFIX: &str = "ℹ ";
/// Marks completed actions
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Marks failures
pub static ERROR_PREFIX: &str = "✗ ";
/// Precedes confirmation prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Branch for a list entry
pub static ITEM_PREFIX: &str = "├─";
/// Branch for the final list entry
pub static LAST_ITEM_PREFIX: &str = "└─";
/// Continues a branch onto following lines
pub static CONTINUE_PREFIX: &str = "│  ";
/// Points at a follow-up command
pub static ARROW: &str = "→";
/// Heads a paper's detail output
pub static PAPER: Emoji<'static, 'static> = Emoji("📄 ", "");
/// Heads a list of results
pub static LOOKING_GLASS: Emoji<'static, 'static> = Emoji("🔍 ", "");

/// Something to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A settled paper list; `detailed` also shows each paper's summary
  PaperList {
    /// The list to show
    view:     &'a PaperListView,
    /// Whether to include summaries
    detailed: bool,
  },
  /// A settled detail view
  PaperDetail(&'a PaperDetailView),
  /// Markup to print verbatim
  Html(&'a str),
  /// Something worked
  Success(&'a str),
  /// Something failed; printed to stderr
  Error(&'a str),
  /// Anything else worth saying
  Info(&'a str),
}

/// The prompts and output a command needs, so commands can run against any front end.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// [`UserInteraction`] on the process's terminal.
pub struct Terminal {
  /// Answer every prompt with its default instead of asking
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal front end; with `accept_defaults` no prompt is ever shown.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{} {}", style(PROMPT_PREFIX).yellow(), message))
        .default(false)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::PaperList { view, detailed } => print_list(view, detailed),
      ResponseContent::PaperDetail(view) => print_detail(view),
      ResponseContent::Html(html) => print!("{html}"),
      ResponseContent::Success(message) =>
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(message).white()),
      ResponseContent::Error(message) =>
        eprintln!("{} {}", style(ERROR_PREFIX).red(), style(message).red()),
      ResponseContent::Info(message) =>
        println!("{} {}", style(INFO_PREFIX).cyan(), style(message).white()),
    }
    Ok(())
  }
}

/// Prints every row of a settled list, or its notice.
fn print_list(view: &PaperListView, detailed: bool) {
  match view.state() {
    ViewState::Loading => println!("{} Loading papers...", style(INFO_PREFIX).cyan()),
    ViewState::Error(notice) => println!("{} {}", style(ERROR_PREFIX).red(), style(notice).red()),
    ViewState::Loaded(rows) => {
      println!("{}Found {} papers:", style(LOOKING_GLASS).cyan(), style(rows.len()).yellow());
      for (i, row) in rows.iter().enumerate() {
        let last = i + 1 == rows.len();
        print_row(row, detailed, last);
      }
    },
  }
}

/// Prints one paper of the list as a tree branch.
fn print_row(row: &PaperRow, detailed: bool, last: bool) {
  let (branch, cont) = if last { (LAST_ITEM_PREFIX, "   ") } else { (ITEM_PREFIX, CONTINUE_PREFIX) };
  println!("{} {}", branch, style(&row.title).white().bold());
  println!("{} {} {}", cont, style("By:").green(), row.authors);
  println!("{} {} {}", cont, style("Topics:").green(), row.topics);
  if detailed {
    if let Some(summary) = &row.summary {
      println!("{} {} {}", cont, style("Summary:").green(), summary);
    }
  }
  let day = row.details.day.as_deref().unwrap_or_default();
  let id = row.details.id.as_deref().unwrap_or_default();
  println!(
    "{} {} {}",
    cont,
    style(ARROW).cyan(),
    style(format!("dailypapers detail --day {day} --id {id}")).dim()
  );
}

/// Prints a settled detail view.
fn print_detail(view: &PaperDetailView) {
  match view.state() {
    ViewState::Loading => println!("{} Loading...", style(INFO_PREFIX).cyan()),
    ViewState::Error(notice) => {
      println!("{} {}", style(ERROR_PREFIX).red(), style(view.title()).red().bold());
      println!("   {}", style(notice).red());
    },
    ViewState::Loaded(content) => {
      println!("\n{}{}", style(PAPER).green(), style(&content.title).white().bold());
      println!("   {} {}", style("Authors:").green().bold(), style(&content.authors).white());
      println!();
      for line in content.explanation_markdown.lines() {
        println!("   {line}");
      }
    },
  }
}
