use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::interviews::catalog::{CatalogRepository, InMemoryCatalog, RepositoryError};
use crate::workflows::interviews::domain::{
    ClassificationProfile, Interview, InterviewId, Question, QuestionId, Student,
};
use crate::workflows::interviews::{interview_router, InterviewService};

pub(super) fn build_service() -> (InterviewService<InMemoryCatalog>, Arc<InMemoryCatalog>) {
    let catalog = Arc::new(InMemoryCatalog::seeded());
    let service = InterviewService::new(catalog.clone()).expect("service builds");
    (service, catalog)
}

pub(super) fn router_with_service(service: InterviewService<InMemoryCatalog>) -> axum::Router {
    interview_router(Arc::new(service))
}

pub(super) fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 2, 9, 15, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn question(catalog: &InMemoryCatalog, id: &str) -> Question {
    catalog
        .question(&QuestionId(id.to_string()))
        .expect("catalog readable")
        .expect("question present")
}

pub(super) fn mid_level_technology() -> ClassificationProfile {
    ClassificationProfile::default()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Catalog whose storage is always down.
pub(super) struct UnavailableCatalog;

impl CatalogRepository for UnavailableCatalog {
    fn questions(&self) -> Result<Vec<Question>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn students(&self) -> Result<Vec<Student>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn interviews(&self) -> Result<Vec<Interview>, RepositoryError> {
        Ok(Vec::new())
    }

    fn question(&self, _id: &QuestionId) -> Result<Option<Question>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn interview(&self, _id: &InterviewId) -> Result<Option<Interview>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn append(&self, _interview: Interview) -> Result<Interview, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}
