//! Interview catalog, question matching, and interview assembly.
//!
//! Questions are matched by their four classification attributes, a caller picks from the
//! suggestions through the [`InterviewWizard`], and the [`InterviewService`] assembles and
//! appends the resulting [`Interview`] to the catalog.

pub mod analytics;
pub mod assembler;
pub mod catalog;
pub mod domain;
pub mod fixtures;
pub mod matcher;
pub mod router;
pub mod service;
pub mod views;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use analytics::{DashboardAnalytics, DepartmentShare, KpiCard, MonthlyInterviews};
pub use assembler::{AssemblyError, InterviewAssembler, InterviewDraft};
pub use catalog::{CatalogRepository, InMemoryCatalog, RepositoryError};
pub use domain::{
    ClassificationProfile, ExperienceLevel, Industry, Interview, InterviewId, InterviewType,
    Language, Question, QuestionId, Student, StudentId, StudentStatus, Vocabulary,
    VocabularyError,
};
pub use fixtures::CatalogFixtures;
pub use matcher::match_questions;
pub use router::{interview_router, CreateInterviewRequest, SuggestionsResponse, VocabularyView};
pub use service::{InterviewService, InterviewServiceError, StudentFilter};
pub use views::{InterviewCardView, InterviewDetailView, RosterView, StatusBreakdown};
pub use wizard::{InterviewWizard, WizardError, WizardStep};
