//! Error-path coverage for the repository layer.

use soilcast::db::models::DatasetKey;
use soilcast::db::repositories::LocalRepository;
use soilcast::db::repository::{DatasetRepository, ErrorContext, RepositoryError};
use soilcast::models::frame::Frame;
use soilcast::sources::SourceId;

fn small_frame() -> Frame {
    let mut frame = Frame::new(vec!["sm_surface".to_string()]);
    frame.push_row(vec![0.25]).unwrap();
    frame
}

#[tokio::test]
async fn test_fetch_missing_dataset() {
    let repo = LocalRepository::new();
    let key = DatasetKey::source_year("Rajasthan", SourceId::Smap, 2021);

    let err = repo.fetch_dataset(&key).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Rajasthan_soil_moisture_2021"));
}

#[tokio::test]
async fn test_delete_reports_whether_anything_was_removed() {
    let repo = LocalRepository::new();
    let key = DatasetKey::history("Bihar");

    assert!(!repo.delete_dataset(&key).await.unwrap());

    repo.store_dataset(&key, small_frame()).await.unwrap();
    assert!(repo.delete_dataset(&key).await.unwrap());
    assert!(!repo.has_dataset(&key).await.unwrap());
}

#[tokio::test]
async fn test_empty_frame_is_a_validation_error() {
    let repo = LocalRepository::new();
    let key = DatasetKey::history("Bihar");

    let err = repo
        .store_dataset(&key, Frame::new(vec!["sm_surface".to_string()]))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert!(!err.is_not_found());
}

#[test]
fn test_error_context_display() {
    let context = ErrorContext::new("store_dataset")
        .with_entity("dataset")
        .with_entity_id("Data - Rajasthan Done")
        .with_details("row count mismatch")
        .retryable();

    let rendered = context.to_string();
    assert!(rendered.contains("operation=store_dataset"));
    assert!(rendered.contains("id=Data - Rajasthan Done"));
    assert!(rendered.contains("retryable=true"));

    let err = RepositoryError::not_found_with_context("dataset missing", context);
    assert!(err.to_string().contains("dataset missing"));
}
