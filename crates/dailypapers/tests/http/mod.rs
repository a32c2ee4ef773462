use super::*;
use crate::common::{empty_router, failing_router, malformed_router, sample_router, spawn_backend};

#[tokio::test]
async fn test_fetch_papers() -> TestResult<()> {
  let backend = HttpBackend::new(spawn_backend(sample_router()).await);

  let papers = backend.papers().await?;

  assert_eq!(papers.len(), 2);
  assert_eq!(papers[0].id, "2411.00001");
  assert_eq!(papers[0].by, vec!["Ada Lovelace", "Alan Turing"]);
  assert_eq!(papers[1].summary.as_deref(), Some("Retrieval, but cheap."));
  Ok(())
}

#[tokio::test]
async fn test_fetch_paper() -> TestResult<()> {
  let backend = HttpBackend::new(spawn_backend(sample_router()).await);

  let paper = backend.paper("2024-11-05", "2411.00002").await?;

  assert_eq!(paper.title, "Retrieval for Everyone");
  assert_eq!(paper.authors, Some(vec!["Grace Hopper".to_string()]));
  assert_eq!(paper.explanation, "**x**");
  Ok(())
}

#[tokio::test]
async fn test_not_found_carries_backend_detail() {
  let backend = HttpBackend::new(spawn_backend(sample_router()).await);

  let err = backend.paper("2024-11-05", "missing").await.unwrap_err();

  match err {
    DailyPapersError::Status { status, detail } => {
      assert_eq!(status.as_u16(), 404);
      assert_eq!(detail.as_deref(), Some("Paper not found"));
    },
    other => panic!("unexpected error: {other:?}"),
  }
}

#[tokio::test]
async fn test_server_error_is_a_status_error() {
  let backend = HttpBackend::new(spawn_backend(failing_router()).await);

  let err = backend.papers().await.unwrap_err();

  assert!(matches!(err, DailyPapersError::Status { status, .. } if status.as_u16() == 500));
}

#[tokio::test]
async fn test_empty_list_is_not_an_error() -> TestResult<()> {
  let backend = HttpBackend::new(spawn_backend(empty_router()).await);
  assert!(backend.papers().await?.is_empty());
  Ok(())
}

#[tokio::test]
async fn test_greeting_round_trip() -> TestResult<()> {
  let backend = HttpBackend::new(spawn_backend(sample_router()).await);

  let response = notify_installed(&backend).await;

  assert_eq!(response, Some(json!({ "message": "Hello from the backend" })));
  Ok(())
}

#[tokio::test]
async fn test_greeting_with_non_json_answer() {
  let backend = HttpBackend::new(spawn_backend(failing_router()).await);
  assert!(notify_installed(&backend).await.is_none());
}

#[tokio::test]
async fn test_list_that_is_not_an_array_is_a_parse_error() {
  let backend = HttpBackend::new(spawn_backend(malformed_router()).await);

  let err = backend.papers().await.unwrap_err();

  assert!(matches!(err, DailyPapersError::Parse(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_paper_missing_explanation_is_a_parse_error() {
  let backend = HttpBackend::new(spawn_backend(malformed_router()).await);

  let err = backend.paper("2024-11-05", "2411.00001").await.unwrap_err();

  match err {
    DailyPapersError::Parse(e) => assert!(e.to_string().contains("missing field `explanation`")),
    other => panic!("unexpected error: {other:?}"),
  }
}
