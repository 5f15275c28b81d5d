use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{
    ClassificationProfile, Interview, InterviewId, Student, StudentStatus, Vocabulary,
};

/// Dashboard card for one interview.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewCardView {
    pub id: InterviewId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub created_on: String,
    #[serde(flatten)]
    pub profile: ClassificationProfile,
    pub question_count: usize,
    pub student_count: usize,
    pub completion_rate: u8,
}

impl From<&Interview> for InterviewCardView {
    fn from(interview: &Interview) -> Self {
        Self {
            id: interview.id.clone(),
            title: interview.title.clone(),
            created_at: interview.created_at,
            created_on: interview.created_at.format("%b %-d, %Y").to_string(),
            profile: interview.profile,
            question_count: interview.questions.len(),
            student_count: interview.students.len(),
            completion_rate: interview.completion_rate(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub completed: usize,
    pub pending: usize,
    pub no_show: usize,
}

impl StatusBreakdown {
    pub fn tally<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        students
            .into_iter()
            .fold(Self::default(), |mut breakdown, student| {
                match student.status {
                    StudentStatus::Completed => breakdown.completed += 1,
                    StudentStatus::Pending => breakdown.pending += 1,
                    StudentStatus::NoShow => breakdown.no_show += 1,
                }
                breakdown
            })
    }

    pub fn total(&self) -> usize {
        self.completed + self.pending + self.no_show
    }
}

/// Full interview with its question list and student status tallies.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewDetailView {
    #[serde(flatten)]
    pub interview: Interview,
    pub created_on: String,
    pub status_breakdown: StatusBreakdown,
}

impl From<Interview> for InterviewDetailView {
    fn from(interview: Interview) -> Self {
        let created_on = interview.created_at.format("%B %-d, %Y").to_string();
        let status_breakdown = StatusBreakdown::tally(&interview.students);
        Self {
            interview,
            created_on,
            status_breakdown,
        }
    }
}

/// Roster listing plus headline counts.
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    pub total: usize,
    #[serde(flatten)]
    pub status_breakdown: StatusBreakdown,
    pub students: Vec<Student>,
}

impl From<Vec<Student>> for RosterView {
    fn from(students: Vec<Student>) -> Self {
        Self {
            total: students.len(),
            status_breakdown: StatusBreakdown::tally(&students),
            students,
        }
    }
}

/// Row layout for roster CSV exports.
#[derive(Debug, Serialize)]
pub(crate) struct StudentExportRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub applied_position: &'a str,
    pub interview_date: String,
    pub status: &'static str,
    pub notes: &'a str,
}

impl<'a> From<&'a Student> for StudentExportRow<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            id: &student.id.0,
            name: &student.name,
            email: &student.email,
            phone_number: &student.phone_number,
            applied_position: &student.applied_position,
            interview_date: student.interview_date.format("%Y-%m-%dT%H:%M:%S").to_string(),
            status: student.status.label(),
            notes: student.notes.as_deref().unwrap_or_default(),
        }
    }
}
