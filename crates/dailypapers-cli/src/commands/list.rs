//! Module for the paper list.

use super::*;

#[derive(Args, Clone)]
pub struct ListOptions {
  /// Also show each paper's summary
  #[arg(long)]
  pub detailed: bool,

  /// Print the list as HTML instead of text
  #[arg(long)]
  pub html: bool,
}

/// Function for the [`Commands::List`] in the CLI.
pub async fn list<I: UserInteraction>(
  interaction: &I,
  cli: &Cli,
  list_options: &ListOptions,
) -> Result<()> {
  let config = cli.resolve_config()?;
  trace!("Listing papers from {}", config.backend_url);
  let backend = HttpBackend::from_config(&config);

  let view = PaperListView::load(&backend).await;

  if list_options.html {
    interaction.reply(ResponseContent::Html(&view.render_html()))
  } else {
    interaction.reply(ResponseContent::PaperList { view: &view, detailed: list_options.detailed })
  }
}
