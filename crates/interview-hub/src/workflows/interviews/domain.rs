use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed vocabulary used to classify questions, interviews, and students.
///
/// Values travel as their human label (`"Mid-Level (3-5 years)"`); parsing also accepts
/// the short kebab-case key (`"mid-level"`), both case-insensitively.
pub trait Vocabulary: Copy + Sized + 'static {
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn key(self) -> &'static str;

    fn parse(raw: &str) -> Result<Self, VocabularyError> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| {
                value.label().eq_ignore_ascii_case(needle)
                    || value.key().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| VocabularyError {
                kind: Self::KIND,
                value: raw.to_string(),
            })
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.label()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct VocabularyError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! vocabulary_traits {
    ($($name:ty),+ $(,)?) => {$(
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = VocabularyError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <$name as Vocabulary>::parse(raw)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                <$name as Vocabulary>::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    )+};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Education,
    Manufacturing,
    Retail,
    Marketing,
    Hospitality,
}

impl Vocabulary for Industry {
    const KIND: &'static str = "industry";
    const ALL: &'static [Self] = &[
        Self::Technology,
        Self::Finance,
        Self::Healthcare,
        Self::Education,
        Self::Manufacturing,
        Self::Retail,
        Self::Marketing,
        Self::Hospitality,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Marketing => "Marketing",
            Self::Hospitality => "Hospitality",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Manufacturing => "manufacturing",
            Self::Retail => "retail",
            Self::Marketing => "marketing",
            Self::Hospitality => "hospitality",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InterviewType {
    Technical,
    NonTechnical,
}

impl Vocabulary for InterviewType {
    const KIND: &'static str = "interview type";
    const ALL: &'static [Self] = &[Self::Technical, Self::NonTechnical];

    fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::NonTechnical => "Non-Technical",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::NonTechnical => "non-technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Mandarin,
    Hindi,
    Arabic,
    Russian,
}

impl Vocabulary for Language {
    const KIND: &'static str = "language";
    const ALL: &'static [Self] = &[
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Mandarin,
        Self::Hindi,
        Self::Arabic,
        Self::Russian,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Mandarin => "Mandarin",
            Self::Hindi => "Hindi",
            Self::Arabic => "Arabic",
            Self::Russian => "Russian",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::German => "german",
            Self::Mandarin => "mandarin",
            Self::Hindi => "hindi",
            Self::Arabic => "arabic",
            Self::Russian => "russian",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExperienceLevel {
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
    Expert,
}

impl Vocabulary for ExperienceLevel {
    const KIND: &'static str = "experience level";
    const ALL: &'static [Self] = &[
        Self::EntryLevel,
        Self::Junior,
        Self::MidLevel,
        Self::Senior,
        Self::Expert,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry Level (0-1 years)",
            Self::Junior => "Junior (1-3 years)",
            Self::MidLevel => "Mid-Level (3-5 years)",
            Self::Senior => "Senior (5-10 years)",
            Self::Expert => "Expert (10+ years)",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::EntryLevel => "entry-level",
            Self::Junior => "junior",
            Self::MidLevel => "mid-level",
            Self::Senior => "senior",
            Self::Expert => "expert",
        }
    }
}

/// Outcome of a student's scheduled interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudentStatus {
    Pending,
    Completed,
    NoShow,
}

impl Vocabulary for StudentStatus {
    const KIND: &'static str = "student status";
    const ALL: &'static [Self] = &[Self::Pending, Self::Completed, Self::NoShow];

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::NoShow => "No Show",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::NoShow => "no-show",
        }
    }
}

vocabulary_traits!(Industry, InterviewType, Language, ExperienceLevel, StudentStatus);

/// The four classification attributes shared by questions and interviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationProfile {
    pub industry: Industry,
    pub interview_type: InterviewType,
    pub language: Language,
    pub experience_level: ExperienceLevel,
}

impl ClassificationProfile {
    pub const fn new(
        industry: Industry,
        interview_type: InterviewType,
        language: Language,
        experience_level: ExperienceLevel,
    ) -> Self {
        Self {
            industry,
            interview_type,
            language,
            experience_level,
        }
    }
}

impl Default for ClassificationProfile {
    fn default() -> Self {
        Self::new(
            Industry::Technology,
            InterviewType::Technical,
            Language::English,
            ExperienceLevel::MidLevel,
        )
    }
}

impl fmt::Display for ClassificationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.industry, self.interview_type, self.language, self.experience_level
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterviewId(pub String);

impl InterviewId {
    /// Numeric suffix of canonical `i{n}` identifiers: ASCII digits, no leading zero.
    pub fn sequence(&self) -> Option<u64> {
        let digits = self.0.strip_prefix('i')?;
        let canonical = !digits.is_empty()
            && digits.bytes().all(|byte| byte.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !canonical {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for InterviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interview prompt tagged with its classification. Immutable once catalogued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(flatten)]
    pub profile: ClassificationProfile,
}

/// Candidate scheduled for one of the mock interviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub applied_position: String,
    pub interview_date: NaiveDateTime,
    pub status: StudentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub profile: ClassificationProfile,
    pub questions: Vec<Question>,
    pub students: Vec<Student>,
}

impl Interview {
    pub fn count_students(&self, status: StudentStatus) -> usize {
        self.students
            .iter()
            .filter(|student| student.status == status)
            .count()
    }

    /// Share of assigned students whose interview is completed, rounded to a whole percent.
    pub fn completion_rate(&self) -> u8 {
        if self.students.is_empty() {
            return 0;
        }
        let completed = self.count_students(StudentStatus::Completed) as f64;
        ((completed / self.students.len() as f64) * 100.0).round() as u8
    }
}
