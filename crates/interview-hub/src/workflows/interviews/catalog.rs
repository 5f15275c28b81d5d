use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::domain::{Interview, InterviewId, Question, QuestionId, Student};
use super::fixtures::CatalogFixtures;

/// Read access to the catalog plus the single append used when interviews are assembled.
///
/// There is no update or delete: questions and students are fixed at construction and
/// interviews only ever grow.
pub trait CatalogRepository: Send + Sync {
    fn questions(&self) -> Result<Vec<Question>, RepositoryError>;
    fn students(&self) -> Result<Vec<Student>, RepositoryError>;
    fn interviews(&self) -> Result<Vec<Interview>, RepositoryError>;
    fn question(&self, id: &QuestionId) -> Result<Option<Question>, RepositoryError>;
    fn interview(&self, id: &InterviewId) -> Result<Option<Interview>, RepositoryError>;
    fn append(&self, interview: Interview) -> Result<Interview, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record '{id}' already exists")]
    Conflict { id: String },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct CatalogState {
    questions: Vec<Question>,
    students: Vec<Student>,
    interviews: Vec<Interview>,
}

/// Process-local catalog shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    /// Catalog seeded with the standard fixture set.
    pub fn seeded() -> Self {
        let CatalogFixtures {
            questions,
            students,
            interviews,
        } = CatalogFixtures::standard();
        Self {
            state: RwLock::new(CatalogState {
                questions,
                students,
                interviews,
            }),
        }
    }

    /// Build a catalog from explicit collections, rejecting duplicate identifiers.
    pub fn from_parts(
        questions: Vec<Question>,
        students: Vec<Student>,
        interviews: Vec<Interview>,
    ) -> Result<Self, RepositoryError> {
        ensure_unique(questions.iter().map(|question| question.id.0.as_str()))?;
        ensure_unique(students.iter().map(|student| student.id.0.as_str()))?;
        ensure_unique(interviews.iter().map(|interview| interview.id.0.as_str()))?;

        Ok(Self {
            state: RwLock::new(CatalogState {
                questions,
                students,
                interviews,
            }),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogState>, RepositoryError> {
        self.state
            .read()
            .map_err(|_| RepositoryError::Unavailable("catalog lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatalogState>, RepositoryError> {
        self.state
            .write()
            .map_err(|_| RepositoryError::Unavailable("catalog lock poisoned".to_string()))
    }
}

fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), RepositoryError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RepositoryError::Conflict { id: id.to_string() });
        }
    }
    Ok(())
}

impl CatalogRepository for InMemoryCatalog {
    fn questions(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.read()?.questions.clone())
    }

    fn students(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.read()?.students.clone())
    }

    fn interviews(&self) -> Result<Vec<Interview>, RepositoryError> {
        Ok(self.read()?.interviews.clone())
    }

    fn question(&self, id: &QuestionId) -> Result<Option<Question>, RepositoryError> {
        let guard = self.read()?;
        Ok(guard
            .questions
            .iter()
            .find(|question| &question.id == id)
            .cloned())
    }

    fn interview(&self, id: &InterviewId) -> Result<Option<Interview>, RepositoryError> {
        let guard = self.read()?;
        Ok(guard
            .interviews
            .iter()
            .find(|interview| &interview.id == id)
            .cloned())
    }

    fn append(&self, interview: Interview) -> Result<Interview, RepositoryError> {
        let mut guard = self.write()?;
        if guard
            .interviews
            .iter()
            .any(|existing| existing.id == interview.id)
        {
            return Err(RepositoryError::Conflict {
                id: interview.id.0.clone(),
            });
        }
        guard.interviews.push(interview.clone());
        Ok(interview)
    }
}
