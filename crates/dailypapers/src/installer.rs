//! Notification sent to the backend when the client is installed.
//!
//! This is a demonstration round trip: it lets the backend's logs show that a client came up, and
//! lets the client's logs show whether the backend is reachable. Nothing depends on the outcome.

use serde_json::Value;

use super::*;

/// Message carried by the installation [`Greeting`].
pub const GREETING_MESSAGE: &str = "Hello from the daily papers client";

/// Payload sent along with the installation notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
  /// Free-form message for the backend's logs
  pub message: String,
}

impl Default for Greeting {
  fn default() -> Self { Self { message: GREETING_MESSAGE.to_string() } }
}

/// Logs the installation and greets the backend once.
///
/// Returns the backend's JSON answer, or `None` if the request failed for any reason. Failures are
/// logged and never propagated.
pub async fn notify_installed<B: Backend + ?Sized>(backend: &B) -> Option<Value> {
  info!("Client installed");

  match backend.greet(&Greeting::default()).await {
    Ok(response) => {
      info!("Response from backend: {response}");
      Some(response)
    },
    Err(e) => {
      error!("Error communicating with backend: {e}");
      None
    },
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::view::tests::StubBackend;

  #[traced_test]
  #[tokio::test]
  async fn test_greeting_response_is_returned() {
    let backend = StubBackend::default().with_greeting(Ok(json!({ "status": "ok" })));

    let response = notify_installed(&backend).await;

    assert_eq!(response, Some(json!({ "status": "ok" })));
    assert_eq!(backend.calls(), 1);
    assert_eq!(backend.greetings(), vec![Greeting::default()]);
    assert!(logs_contain("Client installed"));
    assert!(logs_contain("Response from backend"));
  }

  #[traced_test]
  #[tokio::test]
  async fn test_failure_is_logged_not_propagated() {
    let backend = StubBackend::default().with_greeting(Err(DailyPapersError::Status {
      status: reqwest::StatusCode::BAD_GATEWAY,
      detail: None,
    }));

    assert!(notify_installed(&backend).await.is_none());
    assert_eq!(backend.calls(), 1);
    assert!(logs_contain("Error communicating with backend"));
  }
}
