//! Client configuration.
//!
//! The only thing the client needs to know is where the backend lives. The configuration is kept
//! as a small TOML file:
//!
//! ```toml
//! backend_url = "http://localhost:5000/"
//! ```

use super::*;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Persisted client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Root URL of the backend; the `/api/...` endpoints are resolved against it
  #[serde(default = "default_backend_url")]
  pub backend_url: Url,
}

impl Default for Config {
  fn default() -> Self { Self { backend_url: default_backend_url() } }
}

impl Config {
  /// Returns the default path for the configuration file.
  ///
  /// - On Unix: `~/.config/dailypapers/config.toml`
  /// - On macOS: `~/Library/Application Support/dailypapers/config.toml`
  /// - On Windows: `%APPDATA%\dailypapers\config.toml`
  /// - Fallback: `./dailypapers/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join("dailypapers")
      .join("config.toml")
  }

  /// Reads the configuration stored at `path`.
  ///
  /// # Errors
  ///
  /// Fails if the file cannot be read or is not a valid configuration.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    debug!("Loaded configuration from {}: {config:?}", path.display());
    Ok(config)
  }

  /// Reads the configuration stored at `path`, falling back to [`Config::default`] when there is
  /// no file there.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Writes the configuration to `path`, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string(self)?)?;
    debug!("Saved configuration to {}", path.display());
    Ok(())
  }

  /// Replaces the backend URL.
  pub fn with_backend_url(mut self, backend_url: Url) -> Self {
    self.backend_url = backend_url;
    self
  }
}

/// Parsed form of [`DEFAULT_BACKEND_URL`].
fn default_backend_url() -> Url {
  Url::parse(DEFAULT_BACKEND_URL).unwrap_or_else(|_| unreachable!("default backend URL is valid"))
}
