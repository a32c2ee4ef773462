//! Markdown to HTML conversion for paper explanations.
//!
//! The backend writes each explanation as a series of `## Section` blocks. These are rendered with
//! [`comrak`] using the common GitHub-style extensions. Raw HTML embedded in the Markdown is not
//! passed through.

use comrak::ComrakOptions;

/// Options used for every conversion.
fn options() -> ComrakOptions {
  let mut options = ComrakOptions::default();
  options.extension.strikethrough = true;
  options.extension.table = true;
  options.extension.autolink = true;
  options.extension.footnotes = true;
  options
}

/// Converts Markdown text to an HTML fragment.
///
/// # Examples
///
/// ```
/// let html = dailypapers::markdown::to_html("**x**");
/// assert_eq!(html.trim(), "<p><strong>x</strong></p>");
/// ```
pub fn to_html(markdown: &str) -> String { comrak::markdown_to_html(markdown, &options()) }

/// Escapes text so it can be placed inside HTML elements and quoted attributes.
pub fn escape_html(text: &str) -> String {
  text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
