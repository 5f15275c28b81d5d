use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::assembler::AssemblyError;
use super::catalog::{CatalogRepository, RepositoryError};
use super::domain::{
    ClassificationProfile, ExperienceLevel, Industry, InterviewId, InterviewType, Language,
    Question, QuestionId, StudentStatus, Vocabulary,
};
use super::service::{InterviewService, InterviewServiceError, StudentFilter};
use super::views::{InterviewCardView, InterviewDetailView, RosterView};

/// Body accepted when creating an interview from previously suggested question ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInterviewRequest {
    pub title: String,
    #[serde(flatten)]
    pub profile: ClassificationProfile,
    pub question_ids: Vec<QuestionId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub profile: ClassificationProfile,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocabularyView {
    pub industries: Vec<&'static str>,
    pub interview_types: Vec<&'static str>,
    pub languages: Vec<&'static str>,
    pub experience_levels: Vec<&'static str>,
    pub student_statuses: Vec<&'static str>,
}

impl VocabularyView {
    pub fn current() -> Self {
        Self {
            industries: Industry::labels(),
            interview_types: InterviewType::labels(),
            languages: Language::labels(),
            experience_levels: ExperienceLevel::labels(),
            student_statuses: StudentStatus::labels(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InterviewSearch {
    #[serde(default)]
    search: Option<String>,
}

/// Router builder exposing the catalog, matcher, and interview creation endpoints.
pub fn interview_router<C>(service: Arc<InterviewService<C>>) -> Router
where
    C: CatalogRepository + 'static,
{
    Router::new()
        .route("/api/v1/vocabulary", get(vocabulary_handler))
        .route(
            "/api/v1/questions/suggestions",
            get(suggestions_handler::<C>),
        )
        .route(
            "/api/v1/interviews",
            get(list_handler::<C>).post(create_handler::<C>),
        )
        .route(
            "/api/v1/interviews/:interview_id",
            get(detail_handler::<C>),
        )
        .route("/api/v1/students", get(roster_handler::<C>))
        .route("/api/v1/students/export", get(export_handler::<C>))
        .route("/api/v1/dashboard", get(dashboard_handler::<C>))
        .with_state(service)
}

pub(crate) async fn vocabulary_handler() -> Json<VocabularyView> {
    Json(VocabularyView::current())
}

pub(crate) async fn suggestions_handler<C>(
    State(service): State<Arc<InterviewService<C>>>,
    query: Result<Query<ClassificationProfile>, QueryRejection>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    let Query(profile) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match service.suggest_questions(&profile) {
        Ok(questions) => {
            (StatusCode::OK, Json(SuggestionsResponse { profile, questions })).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<C>(
    State(service): State<Arc<InterviewService<C>>>,
    query: Result<Query<InterviewSearch>, QueryRejection>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match service.interviews(query.search.as_deref()) {
        Ok(interviews) => {
            let cards: Vec<InterviewCardView> =
                interviews.iter().map(InterviewCardView::from).collect();
            (StatusCode::OK, Json(json!({ "interviews": cards }))).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<C>(
    State(service): State<Arc<InterviewService<C>>>,
    request: Result<Json<CreateInterviewRequest>, JsonRejection>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    let CreateInterviewRequest {
        title,
        profile,
        question_ids,
    } = request;

    match service.create_interview_from_ids(title, profile, &question_ids) {
        Ok(interview) => {
            let view = InterviewDetailView::from(interview);
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn detail_handler<C>(
    State(service): State<Arc<InterviewService<C>>>,
    Path(interview_id): Path<String>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    match service.interview(&InterviewId(interview_id)) {
        Ok(interview) => {
            (StatusCode::OK, Json(InterviewDetailView::from(interview))).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn roster_handler<C>(
    State(service): State<Arc<InterviewService<C>>>,
    filter: Result<Query<StudentFilter>, QueryRejection>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    let Query(filter) = match filter {
        Ok(filter) => filter,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match service.students(&filter) {
        Ok(students) => (StatusCode::OK, Json(RosterView::from(students))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn export_handler<C>(
    State(service): State<Arc<InterviewService<C>>>,
    filter: Result<Query<StudentFilter>, QueryRejection>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    let Query(filter) = match filter {
        Ok(filter) => filter,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    let mut buffer = Vec::new();
    let exported = service.export_students(&filter, &mut buffer);
    match exported {
        Ok(_) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"students.csv\"",
                ),
            ],
            buffer,
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn dashboard_handler<C>(
    State(service): State<Arc<InterviewService<C>>>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    match service.dashboard() {
        Ok(analytics) => (StatusCode::OK, Json(analytics)).into_response(),
        Err(err) => error_response(err),
    }
}

/// HTTP status for a service failure.
pub(crate) fn status_for(err: &InterviewServiceError) -> StatusCode {
    match err {
        InterviewServiceError::Assembly(AssemblyError::IdentifiersExhausted) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        InterviewServiceError::Assembly(_) => StatusCode::UNPROCESSABLE_ENTITY,
        InterviewServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        InterviewServiceError::Repository(RepositoryError::Conflict { .. }) => {
            StatusCode::CONFLICT
        }
        InterviewServiceError::Repository(RepositoryError::Unavailable(_))
        | InterviewServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn error_response(err: InterviewServiceError) -> Response {
    let payload = json!({
        "error": err.to_string(),
    });
    (status_for(&err), Json(payload)).into_response()
}

/// Malformed query strings and bodies share the validation contract.
fn rejection_response(message: String) -> Response {
    tracing::debug!(error = %message, "request rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": message })),
    )
        .into_response()
}
