//! An in-process stand-in for the papers backend.

use axum::{
  extract::Path,
  http::StatusCode,
  routing::get,
  Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

/// Serves `router` on an ephemeral local port and returns its root URL.
pub async fn spawn_backend(router: Router) -> Url {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
  Url::parse(&format!("http://{addr}")).unwrap()
}

/// A backend with two papers on `2024-11-05`, the first of which has no author list.
pub fn sample_router() -> Router {
  Router::new()
    .route("/api", get(|| async { Json(json!({ "message": "Hello from the backend" })) }))
    .route("/api/papers", get(|| async { Json(sample_papers()) }))
    .route("/api/paper/{day}/{id}", get(paper))
}

/// A backend whose every endpoint fails the way the real one does when its database is down.
pub fn failing_router() -> Router {
  async fn fail() -> (StatusCode, Json<Value>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "database unavailable" })))
  }
  Router::new()
    .route("/api", get(|| async { "not json" }))
    .route("/api/papers", get(fail))
    .route("/api/paper/{day}/{id}", get(fail))
}

/// A backend with nothing to list.
pub fn empty_router() -> Router {
  Router::new().route("/api/papers", get(|| async { Json(json!([])) }))
}

/// A backend that answers successfully with bodies that do not match the expected shapes.
pub fn malformed_router() -> Router {
  Router::new()
    .route("/api/papers", get(|| async { Json(json!({ "papers": [] })) }))
    .route("/api/paper/{day}/{id}", get(|| async { Json(json!({ "title": "T" })) }))
}

pub fn sample_papers() -> Value {
  json!([
    {
      "id": "2411.00001",
      "title": "Sparse Attention at Scale",
      "summary": "Attention, but sparse.",
      "by": ["Ada Lovelace", "Alan Turing"],
      "key_topics": "attention, sparsity",
      "day": "2024-11-05"
    },
    {
      "id": "2411.00002",
      "title": "Retrieval for Everyone",
      "summary": "Retrieval, but cheap.",
      "by": ["Grace Hopper"],
      "key_topics": "retrieval",
      "day": "2024-11-05"
    }
  ])
}

async fn paper(Path((day, id)): Path<(String, String)>) -> (StatusCode, Json<Value>) {
  match (day.as_str(), id.as_str()) {
    ("2024-11-05", "2411.00001") => (
      StatusCode::OK,
      Json(json!({
        "title": "Sparse Attention at Scale",
        "explanation": "## problems\nAttention is **quadratic**.\n\n## solutions\nMake it sparse."
      })),
    ),
    ("2024-11-05", "2411.00002") => (
      StatusCode::OK,
      Json(json!({
        "title": "Retrieval for Everyone",
        "authors": ["Grace Hopper"],
        "explanation": "**x**"
      })),
    ),
    _ => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Paper not found" }))),
  }
}
