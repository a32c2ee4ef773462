//! Module for setting up the client, the CLI's equivalent of installing it.

use super::*;

#[derive(Args, Clone)]
pub struct InitOptions {
  /// Overwrite an existing configuration without asking
  #[arg(long, action = ArgAction::SetTrue)]
  pub force: bool,
}

/// Function for the [`Commands::Init`] in the CLI.
pub async fn init<I: UserInteraction>(
  interaction: &I,
  cli: &Cli,
  init_options: &InitOptions,
) -> Result<()> {
  let path = cli.config_path();

  if path.exists()
    && !init_options.force
    && !interaction.confirm(&format!(
      "A configuration already exists at {}, do you want to overwrite it?",
      path.display()
    ))?
  {
    interaction.reply(ResponseContent::Info(
      "Keeping the existing configuration. Pass --config to write one somewhere else.",
    ))?;
    return Ok(());
  }

  // Start from defaults rather than the old file so a broken configuration can be replaced.
  let config = match &cli.backend_url {
    Some(url) => Config::default().with_backend_url(url.clone()),
    None => Config::default(),
  };
  config.save(&path)?;
  debug!("Wrote configuration {config:?} to {}", path.display());
  interaction.reply(ResponseContent::Success(&format!(
    "Saved configuration to {}\nBackend: {}",
    path.display(),
    config.backend_url
  )))?;

  let backend = HttpBackend::from_config(&config);
  match notify_installed(&backend).await {
    Some(response) => interaction.reply(ResponseContent::Success(&format!(
      "Backend at {} answered: {response}",
      config.backend_url
    ))),
    None => interaction.reply(ResponseContent::Error(&format!(
      "Backend at {} did not answer; make sure it is running before listing papers",
      config.backend_url
    ))),
  }
}
