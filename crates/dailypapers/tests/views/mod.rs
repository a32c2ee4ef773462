use super::*;
use crate::common::{empty_router, failing_router, malformed_router, sample_router, spawn_backend};

#[tokio::test]
async fn test_list_view_from_backend() {
  let backend = HttpBackend::new(spawn_backend(sample_router()).await);

  let view = PaperListView::load(&backend).await;

  let rows = view.rows();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].authors, "Ada Lovelace, Alan Turing");
  assert_eq!(rows[1].authors, "Grace Hopper");
  assert_eq!(rows[1].details.href(), "details.html?day=2024-11-05&id=2411.00002");
  assert!(view.state().visibility().content);
}

#[tokio::test]
async fn test_list_view_with_nothing_to_show() {
  let backend = HttpBackend::new(spawn_backend(empty_router()).await);

  let view = PaperListView::load(&backend).await;

  let notice = view.state().notice().unwrap();
  assert_eq!(notice.kind, NoticeKind::NothingToShow);
  assert_eq!(notice.message, NO_PAPERS_MESSAGE);
  assert!(!view.state().visibility().content);
}

#[tokio::test]
async fn test_list_view_with_failing_backend() {
  let backend = HttpBackend::new(spawn_backend(failing_router()).await);

  let view = PaperListView::load(&backend).await;

  let visibility = view.state().visibility();
  assert!(visibility.error);
  assert!(!visibility.content);
  assert_eq!(view.state().notice().unwrap().message, LIST_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_list_view_with_unreachable_backend() {
  let backend = HttpBackend::new(url::Url::parse("http://127.0.0.1:9").unwrap());

  let view = PaperListView::load(&backend).await;

  assert_eq!(view.state().notice().unwrap().kind, NoticeKind::Failed);
}

#[tokio::test]
async fn test_row_action_opens_matching_detail_view() {
  let backend = HttpBackend::new(spawn_backend(sample_router()).await);
  let list = PaperListView::load(&backend).await;

  let query = DetailQuery::parse(&list.rows()[1].details.href());
  let detail = PaperDetailView::load(&backend, query).await;

  assert_eq!(detail.title(), "Retrieval for Everyone");
  assert_eq!(detail.authors(), Some("Grace Hopper"));
  assert!(detail.body_html().contains("<strong>x</strong>"));
}

#[tokio::test]
async fn test_detail_view_without_authors() {
  let backend = HttpBackend::new(spawn_backend(sample_router()).await);

  let detail =
    PaperDetailView::load(&backend, DetailQuery::new("2024-11-05", "2411.00001")).await;

  assert_eq!(detail.authors(), Some(AUTHORS_PLACEHOLDER));
  assert!(detail.body_html().contains("<h2>problems</h2>"));
  assert!(detail.body_html().contains("<strong>quadratic</strong>"));
}

#[tokio::test]
async fn test_detail_view_not_found() {
  let backend = HttpBackend::new(spawn_backend(sample_router()).await);

  let detail = PaperDetailView::load(&backend, DetailQuery::new("2024-11-05", "nope")).await;

  assert_eq!(detail.title(), ERROR_TITLE);
  assert_eq!(
    detail.state().notice().unwrap().message,
    "Failed to fetch paper details: Backend responded with 404 Not Found: Paper not found"
  );
}

#[tokio::test]
async fn test_detail_view_missing_id_makes_no_request() {
  // Port 9 refuses connections, so a request would turn into a network failure notice.
  let backend = HttpBackend::new(url::Url::parse("http://127.0.0.1:9").unwrap());

  let detail = PaperDetailView::load(&backend, DetailQuery::parse("day=2024-11-05")).await;

  assert_eq!(detail.title(), ERROR_TITLE);
  assert_eq!(detail.state().notice().unwrap().kind, NoticeKind::MissingParameters);
  assert!(detail.render_html().contains("Missing required parameters: id"));
}

#[tokio::test]
async fn test_list_view_with_malformed_body() {
  let backend = HttpBackend::new(spawn_backend(malformed_router()).await);

  let view = PaperListView::load(&backend).await;

  let notice = view.state().notice().unwrap();
  assert_eq!(notice.kind, NoticeKind::Failed);
  assert_eq!(notice.message, LIST_FAILURE_MESSAGE);
  assert!(view.rows().is_empty());
}

#[tokio::test]
async fn test_detail_view_with_incomplete_body() {
  let backend = HttpBackend::new(spawn_backend(malformed_router()).await);

  let detail = PaperDetailView::load(&backend, DetailQuery::new("2024-11-05", "2411.00001")).await;

  assert_eq!(detail.title(), ERROR_TITLE);
  let notice = detail.state().notice().unwrap();
  assert_eq!(notice.kind, NoticeKind::Failed);
  assert!(notice.message.starts_with("Failed to fetch paper details: "));
  assert!(notice.message.contains("explanation"));
}
