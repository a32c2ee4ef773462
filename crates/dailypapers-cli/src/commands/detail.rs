//! Module for the detail view of a single paper.

use super::*;

#[derive(Args, Clone)]
pub struct DetailOptions {
  /// Day the paper was digested, e.g. "2024-11-05"
  #[arg(long)]
  pub day: Option<String>,

  /// Backend identifier of the paper
  #[arg(long)]
  pub id: Option<String>,

  /// A detail page query string or URL, e.g. "details.html?day=2024-11-05&id=2411.01234"
  #[arg(long, conflicts_with_all = ["day", "id"])]
  pub query: Option<String>,

  /// Print the details as HTML instead of text
  #[arg(long)]
  pub html: bool,
}

impl DetailOptions {
  /// The query the detail view is opened with.
  fn detail_query(&self) -> DetailQuery {
    match &self.query {
      Some(query) => DetailQuery::parse(query),
      None => DetailQuery { day: self.day.clone(), id: self.id.clone() },
    }
  }
}

/// Function for the [`Commands::Detail`] in the CLI.
pub async fn detail<I: UserInteraction>(
  interaction: &I,
  cli: &Cli,
  detail_options: &DetailOptions,
) -> Result<()> {
  let config = cli.resolve_config()?;
  let backend = HttpBackend::from_config(&config);

  let query = detail_options.detail_query();
  trace!("Opening {} against {}", query.href(), config.backend_url);
  let view = PaperDetailView::load(&backend, query).await;

  if detail_options.html {
    interaction.reply(ResponseContent::Html(&view.render_html()))
  } else {
    interaction.reply(ResponseContent::PaperDetail(&view))
  }
}
