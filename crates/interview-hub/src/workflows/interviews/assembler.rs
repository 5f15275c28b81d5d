use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ClassificationProfile, Interview, InterviewId, Question, QuestionId};

/// Interview metadata plus the caller's chosen questions, before an id is minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewDraft {
    pub title: String,
    #[serde(flatten)]
    pub profile: ClassificationProfile,
    pub questions: Vec<Question>,
}

/// Validates drafts and mints `i{n}` identifiers from a monotonic counter.
#[derive(Debug)]
pub struct InterviewAssembler {
    next_sequence: AtomicU64,
}

impl InterviewAssembler {
    /// Start numbering one past the highest identifier already in `existing`.
    pub fn starting_after(existing: &[Interview]) -> Result<Self, AssemblyError> {
        let highest = existing
            .iter()
            .filter_map(|interview| interview.id.sequence())
            .max()
            .unwrap_or(0)
            .max(u64::try_from(existing.len()).unwrap_or(u64::MAX));
        let next = highest
            .checked_add(1)
            .ok_or(AssemblyError::IdentifiersExhausted)?;
        Ok(Self {
            next_sequence: AtomicU64::new(next),
        })
    }

    fn next_id(&self) -> Result<InterviewId, AssemblyError> {
        let sequence = self
            .next_sequence
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| AssemblyError::IdentifiersExhausted)?;
        Ok(InterviewId(format!("i{sequence}")))
    }

    /// Build a new interview from `draft`.
    ///
    /// Every draft question must be present, unchanged, in `catalog`. Identifiers are only
    /// consumed by drafts that pass validation.
    pub fn assemble(
        &self,
        draft: InterviewDraft,
        catalog: &[Question],
        created_at: DateTime<Utc>,
    ) -> Result<Interview, AssemblyError> {
        let InterviewDraft {
            title,
            profile,
            questions,
        } = draft;

        let title = title.trim();
        if title.is_empty() {
            return Err(AssemblyError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(AssemblyError::NoQuestions);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(&question.id) {
                return Err(AssemblyError::DuplicateQuestion {
                    question_id: question.id.clone(),
                });
            }
            if !catalog.contains(question) {
                return Err(AssemblyError::UnknownQuestion {
                    question_id: question.id.clone(),
                });
            }
            if question.profile != profile {
                tracing::debug!(
                    question_id = %question.id,
                    question_profile = %question.profile,
                    interview_profile = %profile,
                    "question classification differs from interview"
                );
            }
        }

        Ok(Interview {
            id: self.next_id()?,
            title: title.to_string(),
            created_at,
            profile,
            questions,
            students: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    #[error("interview title must not be blank")]
    EmptyTitle,
    #[error("select at least one question")]
    NoQuestions,
    #[error("question '{question_id}' is not in the catalog")]
    UnknownQuestion { question_id: QuestionId },
    #[error("question '{question_id}' was selected more than once")]
    DuplicateQuestion { question_id: QuestionId },
    #[error("interview identifiers are exhausted")]
    IdentifiersExhausted,
}
