use std::io;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info, warn};

use super::analytics::DashboardAnalytics;
use super::assembler::{AssemblyError, InterviewAssembler, InterviewDraft};
use super::catalog::{CatalogRepository, RepositoryError};
use super::domain::{
    ClassificationProfile, Interview, InterviewId, Question, QuestionId, Student, StudentStatus,
};
use super::matcher::match_questions;
use super::views::StudentExportRow;

/// Facade over the catalog used by the HTTP router and the command line.
pub struct InterviewService<C> {
    catalog: Arc<C>,
    assembler: InterviewAssembler,
}

impl<C> InterviewService<C>
where
    C: CatalogRepository + 'static,
{
    pub fn new(catalog: Arc<C>) -> Result<Self, InterviewServiceError> {
        let existing = catalog.interviews()?;
        let assembler = InterviewAssembler::starting_after(&existing)?;
        Ok(Self { catalog, assembler })
    }

    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    /// Catalog questions matching all four classification attributes.
    pub fn suggest_questions(
        &self,
        profile: &ClassificationProfile,
    ) -> Result<Vec<Question>, InterviewServiceError> {
        let questions = self.catalog.questions()?;
        let matched = match_questions(&questions, profile);
        debug!(%profile, matches = matched.len(), "question suggestions generated");
        Ok(matched)
    }

    pub fn create_interview(
        &self,
        draft: InterviewDraft,
    ) -> Result<Interview, InterviewServiceError> {
        self.create_interview_at(draft, Utc::now())
    }

    /// Assemble `draft` and append it to the catalog.
    pub fn create_interview_at(
        &self,
        draft: InterviewDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Interview, InterviewServiceError> {
        let questions = self.catalog.questions()?;
        let interview = self
            .assembler
            .assemble(draft, &questions, created_at)
            .inspect_err(|err| warn!(error = %err, "interview draft rejected"))?;
        let stored = self.catalog.append(interview)?;

        info!(
            interview_id = %stored.id,
            title = %stored.title,
            questions = stored.questions.len(),
            "interview created"
        );
        Ok(stored)
    }

    /// Resolve question ids in caller order, then create the interview.
    pub fn create_interview_from_ids(
        &self,
        title: impl Into<String>,
        profile: ClassificationProfile,
        question_ids: &[QuestionId],
    ) -> Result<Interview, InterviewServiceError> {
        let mut questions = Vec::with_capacity(question_ids.len());
        for question_id in question_ids {
            let question = self.catalog.question(question_id)?.ok_or_else(|| {
                AssemblyError::UnknownQuestion {
                    question_id: question_id.clone(),
                }
            })?;
            questions.push(question);
        }

        self.create_interview(InterviewDraft {
            title: title.into(),
            profile,
            questions,
        })
    }

    pub fn interview(&self, id: &InterviewId) -> Result<Interview, InterviewServiceError> {
        self.catalog
            .interview(id)?
            .ok_or_else(|| InterviewServiceError::NotFound(id.clone()))
    }

    /// Interviews whose title contains `search`, ignoring case. Blank searches list everything.
    pub fn interviews(&self, search: Option<&str>) -> Result<Vec<Interview>, InterviewServiceError> {
        let interviews = self.catalog.interviews()?;
        let needle = search
            .map(|raw| raw.trim().to_lowercase())
            .filter(|needle| !needle.is_empty());

        Ok(match needle {
            Some(needle) => interviews
                .into_iter()
                .filter(|interview| interview.title.to_lowercase().contains(&needle))
                .collect(),
            None => interviews,
        })
    }

    pub fn students(&self, filter: &StudentFilter) -> Result<Vec<Student>, InterviewServiceError> {
        Ok(self
            .catalog
            .students()?
            .into_iter()
            .filter(|student| filter.matches(student))
            .collect())
    }

    /// Write the filtered roster as CSV, returning the number of data rows.
    pub fn export_students<W: io::Write>(
        &self,
        filter: &StudentFilter,
        writer: W,
    ) -> Result<usize, InterviewServiceError> {
        let students = self.students(filter)?;
        let mut csv_writer = csv::Writer::from_writer(writer);
        for student in &students {
            csv_writer.serialize(StudentExportRow::from(student))?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(students.len())
    }

    pub fn dashboard(&self) -> Result<DashboardAnalytics, InterviewServiceError> {
        let interviews = self.catalog.interviews()?;
        Ok(DashboardAnalytics::snapshot(&interviews))
    }
}

/// Roster filter: free-text search over name, e-mail, and applied position plus a status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "blank_status_as_none")]
    pub status: Option<StudentStatus>,
}

/// An empty `status=` means "all statuses".
fn blank_status_as_none<'de, D>(deserializer: D) -> Result<Option<StudentStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<StudentStatus>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(status) = self.status {
            if student.status != status {
                return false;
            }
        }

        let needle = match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => needle.to_lowercase(),
            _ => return true,
        };

        [&student.name, &student.email, &student.applied_position]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Error raised by the interview service.
#[derive(Debug, thiserror::Error)]
pub enum InterviewServiceError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("interview '{0}' not found")]
    NotFound(InterviewId),
    #[error("roster export failed: {0}")]
    Export(#[from] csv::Error),
}
