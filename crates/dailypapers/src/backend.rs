//! Access to the daily papers backend.
//!
//! The backend exposes three endpoints, all plain unauthenticated `GET`s:
//!
//! - `GET /api` — a demonstration endpoint answering with arbitrary JSON
//! - `GET /api/papers` — the list of [`PaperSummary`] records for the most recent day
//! - `GET /api/paper/{day}/{id}` — a single [`PaperDetail`]
//!
//! Views talk to the backend through the [`Backend`] trait so they can be exercised without a
//! server. [`HttpBackend`] is the real implementation on top of [`reqwest`].
//!
//! # Examples
//!
//! ```no_run
//! use dailypapers::{backend::HttpBackend, prelude::*};
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = HttpBackend::new(Url::parse("http://localhost:5000")?);
//! for paper in backend.papers().await? {
//!   println!("{paper}");
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::*;
use crate::installer::Greeting;

/// Operations the views need from the backend.
///
/// Every method performs exactly one request. Nothing is cached or retried.
#[async_trait]
pub trait Backend: Send + Sync {
  /// Sends `greeting` to the demonstration endpoint and returns whatever JSON comes back.
  async fn greet(&self, greeting: &Greeting) -> Result<Value>;

  /// Fetches the paper summaries, in the order the backend lists them.
  async fn papers(&self) -> Result<Vec<PaperSummary>>;

  /// Fetches the full record of the paper `id` digested on `day`.
  async fn paper(&self, day: &str, id: &str) -> Result<PaperDetail>;
}

/// [`Backend`] reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
  /// Shared HTTP client
  client:   Client,
  /// Root URL of the backend
  base_url: Url,
}

impl HttpBackend {
  /// Creates a backend rooted at `base_url`.
  pub fn new(base_url: Url) -> Self { Self { client: Client::new(), base_url } }

  /// Creates a backend for the URL in `config`.
  pub fn from_config(config: &Config) -> Self { Self::new(config.backend_url.clone()) }

  /// Root URL of the backend.
  pub fn base_url(&self) -> &Url { &self.base_url }

  /// Builds the URL for an endpoint below the backend root.
  ///
  /// Each segment is percent-encoded on its own, so a `day` or `id` containing `/` or `?` stays
  /// a single path segment.
  ///
  /// # Examples
  ///
  /// ```
  /// use dailypapers::backend::HttpBackend;
  /// use url::Url;
  ///
  /// let backend = HttpBackend::new(Url::parse("http://localhost:5000").unwrap());
  /// let url = backend.endpoint(&["api", "paper", "2024-11-05", "a/b"]).unwrap();
  /// assert_eq!(url.as_str(), "http://localhost:5000/api/paper/2024-11-05/a%2Fb");
  /// ```
  pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| DailyPapersError::NotABase(self.base_url.to_string()))?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }

  /// Sends `request` and decodes the body of a successful response as `T`.
  async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    debug!("Backend answered {} for {}", status, response.url());

    if !status.is_success() {
      let detail = error_detail(response).await;
      return Err(DailyPapersError::Status { status, detail });
    }

    let data = response.bytes().await?;
    trace!("Backend response body: {}", String::from_utf8_lossy(&data));
    Ok(serde_json::from_slice(&data)?)
  }
}

#[async_trait]
impl Backend for HttpBackend {
  async fn greet(&self, greeting: &Greeting) -> Result<Value> {
    let url = self.endpoint(&["api"])?;
    debug!("Greeting backend at {url}");

    // The demonstration endpoint answers with JSON whatever its status, so only the body matters.
    let response = self.client.get(url).json(greeting).send().await?;
    debug!("Backend answered {} to greeting", response.status());
    let data = response.bytes().await?;
    Ok(serde_json::from_slice(&data)?)
  }

  async fn papers(&self) -> Result<Vec<PaperSummary>> {
    let url = self.endpoint(&["api", "papers"])?;
    debug!("Fetching paper list from {url}");
    self.fetch_json(self.client.get(url)).await
  }

  async fn paper(&self, day: &str, id: &str) -> Result<PaperDetail> {
    let url = self.endpoint(&["api", "paper", day, id])?;
    debug!("Fetching paper details from {url}");
    self.fetch_json(self.client.get(url)).await
  }
}

/// Pulls the `detail` message out of an error response, if the body has one.
async fn error_detail(response: Response) -> Option<String> {
  let data = response.bytes().await.ok()?;
  trace!("Backend error body: {}", String::from_utf8_lossy(&data));
  match serde_json::from_slice::<Value>(&data).ok()?.get("detail")? {
    Value::String(detail) => Some(detail.clone()),
    other => Some(other.to_string()),
  }
}
