use chrono::{NaiveDate, NaiveDateTime};

use super::domain::{
    ClassificationProfile, ExperienceLevel, Industry, Interview, InterviewId, InterviewType,
    Language, Question, QuestionId, Student, StudentId, StudentStatus,
};

/// Seed data loaded into the catalog at startup.
#[derive(Debug, Clone)]
pub struct CatalogFixtures {
    pub questions: Vec<Question>,
    pub students: Vec<Student>,
    pub interviews: Vec<Interview>,
}

impl CatalogFixtures {
    pub fn standard() -> Self {
        let questions = standard_questions();
        let students = standard_students();
        let interviews = standard_interviews(&questions, &students);
        Self {
            questions,
            students,
            interviews,
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn question(
    id: &str,
    text: &str,
    industry: Industry,
    interview_type: InterviewType,
    experience_level: ExperienceLevel,
) -> Question {
    Question {
        id: QuestionId(id.to_string()),
        text: text.to_string(),
        profile: ClassificationProfile::new(
            industry,
            interview_type,
            Language::English,
            experience_level,
        ),
    }
}

fn standard_questions() -> Vec<Question> {
    use ExperienceLevel::{Junior, MidLevel, Senior};
    use InterviewType::{NonTechnical, Technical};

    vec![
        question(
            "q1",
            "Explain the difference between RESTful and GraphQL APIs and when you would use each.",
            Industry::Technology,
            Technical,
            MidLevel,
        ),
        question(
            "q2",
            "How do you handle state management in React applications?",
            Industry::Technology,
            Technical,
            MidLevel,
        ),
        question(
            "q3",
            "Explain how you would design a database schema for an e-commerce website.",
            Industry::Technology,
            Technical,
            Senior,
        ),
        question(
            "q4",
            "Tell me about a challenging project you worked on and how you overcame obstacles.",
            Industry::Technology,
            NonTechnical,
            MidLevel,
        ),
        question(
            "q5",
            "How do you prioritize tasks when working on multiple projects with tight deadlines?",
            Industry::Technology,
            NonTechnical,
            Junior,
        ),
        question(
            "q6",
            "Describe your experience with agile development methodologies.",
            Industry::Technology,
            NonTechnical,
            MidLevel,
        ),
        question(
            "q7",
            "Explain the accounting equation and how it relates to the balance sheet.",
            Industry::Finance,
            Technical,
            MidLevel,
        ),
        question(
            "q8",
            "What strategies would you use to improve patient satisfaction scores?",
            Industry::Healthcare,
            NonTechnical,
            Senior,
        ),
        question(
            "q9",
            "How do you develop engaging curriculum for diverse learning needs?",
            Industry::Education,
            Technical,
            MidLevel,
        ),
        question(
            "q10",
            "Describe a marketing campaign you developed that significantly increased brand awareness.",
            Industry::Marketing,
            Technical,
            Senior,
        ),
    ]
}

fn standard_students() -> Vec<Student> {
    vec![
        Student {
            id: StudentId("s1".to_string()),
            name: "Arjun Patel".to_string(),
            email: "arjun.patel@email.com".to_string(),
            phone_number: "(555) 123-4567".to_string(),
            applied_position: "Frontend Developer".to_string(),
            interview_date: at(2025, 4, 15, 10, 0),
            status: StudentStatus::Completed,
            notes: Some("Strong React knowledge, good communication skills.".to_string()),
        },
        Student {
            id: StudentId("s2".to_string()),
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@email.com".to_string(),
            phone_number: "(555) 234-5678".to_string(),
            applied_position: "Backend Developer".to_string(),
            interview_date: at(2025, 4, 16, 14, 30),
            status: StudentStatus::Completed,
            notes: Some(
                "Excellent problem-solving skills, experience with Node.js and MongoDB."
                    .to_string(),
            ),
        },
        Student {
            id: StudentId("s3".to_string()),
            name: "Rahul Verma".to_string(),
            email: "rahul.verma@email.com".to_string(),
            phone_number: "(555) 345-6789".to_string(),
            applied_position: "Full Stack Developer".to_string(),
            interview_date: at(2025, 4, 17, 11, 0),
            status: StudentStatus::Pending,
            notes: None,
        },
        Student {
            id: StudentId("s4".to_string()),
            name: "Neha Gupta".to_string(),
            email: "neha.gupta@email.com".to_string(),
            phone_number: "(555) 456-7890".to_string(),
            applied_position: "UI/UX Designer".to_string(),
            interview_date: at(2025, 4, 18, 13, 0),
            status: StudentStatus::NoShow,
            notes: None,
        },
        Student {
            id: StudentId("s5".to_string()),
            name: "Vikram Singh".to_string(),
            email: "vikram.singh@email.com".to_string(),
            phone_number: "(555) 567-8901".to_string(),
            applied_position: "Product Manager".to_string(),
            interview_date: at(2025, 4, 19, 15, 0),
            status: StudentStatus::Pending,
            notes: None,
        },
    ]
}

/// Picks catalog entries by position so fixture interviews share the catalog's values.
fn pick<T: Clone>(items: &[T], positions: &[usize]) -> Vec<T> {
    positions
        .iter()
        .filter_map(|&position| items.get(position).cloned())
        .collect()
}

fn standard_interviews(questions: &[Question], students: &[Student]) -> Vec<Interview> {
    use ExperienceLevel::{Junior, MidLevel, Senior};
    use InterviewType::{NonTechnical, Technical};

    let interview = |id: &str,
                     title: &str,
                     created_at: NaiveDateTime,
                     interview_type: InterviewType,
                     experience_level: ExperienceLevel,
                     question_positions: &[usize],
                     student_positions: &[usize]| Interview {
        id: InterviewId(id.to_string()),
        title: title.to_string(),
        created_at: created_at.and_utc(),
        profile: ClassificationProfile::new(
            Industry::Technology,
            interview_type,
            Language::English,
            experience_level,
        ),
        questions: pick(questions, question_positions),
        students: pick(students, student_positions),
    };

    vec![
        interview(
            "i1",
            "Frontend Developer Interview - Q2 2025",
            at(2025, 4, 10, 9, 30),
            Technical,
            MidLevel,
            &[0, 1, 3, 4],
            &[0, 2],
        ),
        interview(
            "i2",
            "Backend Developer Interview - April 2025",
            at(2025, 4, 11, 11, 45),
            Technical,
            Senior,
            &[0, 2, 3, 5],
            &[1],
        ),
        interview(
            "i3",
            "UI/UX Designer Interview - Spring 2025",
            at(2025, 4, 12, 14, 15),
            NonTechnical,
            Junior,
            &[3, 4, 5],
            &[3],
        ),
        interview(
            "i4",
            "Product Manager Interview - April 2025",
            at(2025, 4, 13, 10, 0),
            NonTechnical,
            Senior,
            &[3, 4, 5],
            &[4],
        ),
    ]
}
