use super::common::*;
use crate::workflows::interviews::assembler::{AssemblyError, InterviewDraft};
use crate::workflows::interviews::catalog::{CatalogRepository, InMemoryCatalog, RepositoryError};
use crate::workflows::interviews::fixtures::CatalogFixtures;
use crate::workflows::interviews::domain::{
    ClassificationProfile, ExperienceLevel, InterviewId, QuestionId, StudentStatus,
};
use crate::workflows::interviews::wizard::InterviewWizard;
use crate::workflows::interviews::{InterviewService, InterviewServiceError, StudentFilter};
use chrono::DateTime;
use std::sync::Arc;

#[test]
fn suggestions_include_matching_question_and_exclude_other_levels() {
    let (service, _) = build_service();

    let mid = service
        .suggest_questions(&mid_level_technology())
        .expect("suggestions");
    assert!(mid.iter().any(|question| question.id.0 == "q1"));

    let senior = service
        .suggest_questions(&ClassificationProfile {
            experience_level: ExperienceLevel::Senior,
            ..mid_level_technology()
        })
        .expect("suggestions");
    assert!(senior.iter().all(|question| question.id.0 != "q1"));
}

#[test]
fn created_interview_is_appended_and_retrievable() {
    let (service, catalog) = build_service();
    let picked = vec![question(&catalog, "q1"), question(&catalog, "q2")];

    let interview = service
        .create_interview(InterviewDraft {
            title: "Q2 Review".to_string(),
            profile: mid_level_technology(),
            questions: picked.clone(),
        })
        .expect("interview created");

    assert!(!interview.id.0.is_empty());
    assert_eq!(interview.questions, picked);
    assert!(interview.students.is_empty());
    DateTime::parse_from_rfc3339(&interview.created_at.to_rfc3339())
        .expect("timestamp parses");

    let fetched = service.interview(&interview.id).expect("retrievable");
    assert_eq!(fetched, interview);
    assert_eq!(catalog.interviews().expect("interviews").len(), 5);
}

#[test]
fn sequential_creations_get_distinct_ids() {
    let (service, catalog) = build_service();
    let draft = InterviewDraft {
        title: "Loop".to_string(),
        profile: mid_level_technology(),
        questions: vec![question(&catalog, "q1")],
    };

    let first = service
        .create_interview_at(draft.clone(), created_at())
        .expect("first");
    let second = service
        .create_interview_at(draft, created_at())
        .expect("second");

    assert_ne!(first.id, second.id);
    assert_eq!(first.id, InterviewId("i5".to_string()));
    assert_eq!(second.id, InterviewId("i6".to_string()));
}

#[test]
fn rejected_drafts_leave_catalog_untouched() {
    let (service, catalog) = build_service();

    match service.create_interview(InterviewDraft {
        title: " ".to_string(),
        profile: mid_level_technology(),
        questions: vec![question(&catalog, "q1")],
    }) {
        Err(InterviewServiceError::Assembly(AssemblyError::EmptyTitle)) => {}
        other => panic!("expected empty title rejection, got {other:?}"),
    }

    match service.create_interview_from_ids(
        "Unknown refs",
        mid_level_technology(),
        &[QuestionId("q1".to_string()), QuestionId("q404".to_string())],
    ) {
        Err(InterviewServiceError::Assembly(AssemblyError::UnknownQuestion { question_id })) => {
            assert_eq!(question_id.0, "q404");
        }
        other => panic!("expected unknown question, got {other:?}"),
    }

    assert_eq!(catalog.interviews().expect("interviews").len(), 4);
}

#[test]
fn create_from_ids_preserves_caller_order() {
    let (service, _) = build_service();
    let interview = service
        .create_interview_from_ids(
            "Ordered",
            mid_level_technology(),
            &[QuestionId("q2".to_string()), QuestionId("q1".to_string())],
        )
        .expect("created");
    let ids: Vec<_> = interview.questions.iter().map(|q| q.id.0.as_str()).collect();
    assert_eq!(ids, vec!["q2", "q1"]);
}

#[test]
fn wizard_flow_feeds_the_service() {
    let (service, _) = build_service();
    let mut wizard = InterviewWizard::new();
    wizard.set_title("Wizard built").expect("title");
    let suggestions = service
        .suggest_questions(&wizard.profile())
        .expect("suggestions");
    wizard.generate_suggestions(suggestions).expect("generated");
    wizard
        .toggle(&QuestionId("q2".to_string()))
        .expect("toggle q2");

    let interview = service
        .create_interview(wizard.into_draft().expect("draft"))
        .expect("created");
    assert_eq!(interview.questions.len(), 1);
    assert_eq!(interview.questions[0].id.0, "q2");
}

#[test]
fn interview_search_is_case_insensitive() {
    let (service, _) = build_service();

    let all = service.interviews(None).expect("list");
    assert_eq!(all.len(), 4);
    assert_eq!(service.interviews(Some("  ")).expect("list").len(), 4);

    let april = service.interviews(Some("APRIL")).expect("search");
    let ids: Vec<_> = april.iter().map(|i| i.id.0.as_str()).collect();
    assert_eq!(ids, vec!["i2", "i4"]);

    assert!(service
        .interviews(Some("data scientist"))
        .expect("search")
        .is_empty());
}

#[test]
fn missing_interview_is_not_found() {
    let (service, _) = build_service();
    match service.interview(&InterviewId("i99".to_string())) {
        Err(InterviewServiceError::NotFound(id)) => assert_eq!(id.0, "i99"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn roster_filters_by_search_and_status() {
    let (service, _) = build_service();

    let developers = service
        .students(&StudentFilter {
            search: Some("developer".to_string()),
            status: None,
        })
        .expect("roster");
    assert_eq!(developers.len(), 3);

    let by_email = service
        .students(&StudentFilter {
            search: Some("NEHA.GUPTA@".to_string()),
            status: None,
        })
        .expect("roster");
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Neha Gupta");

    let pending_developers = service
        .students(&StudentFilter {
            search: Some("developer".to_string()),
            status: Some(StudentStatus::Pending),
        })
        .expect("roster");
    assert_eq!(pending_developers.len(), 1);
    assert_eq!(pending_developers[0].name, "Rahul Verma");
}

#[test]
fn roster_export_writes_header_and_rows() {
    let (service, _) = build_service();
    let mut buffer = Vec::new();
    let rows = service
        .export_students(
            &StudentFilter {
                search: None,
                status: Some(StudentStatus::NoShow),
            },
            &mut buffer,
        )
        .expect("export");
    assert_eq!(rows, 1);

    let csv = String::from_utf8(buffer).expect("utf8");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,email,phone_number,applied_position,interview_date,status,notes")
    );
    assert_eq!(
        lines.next(),
        Some("s4,Neha Gupta,neha.gupta@email.com,(555) 456-7890,UI/UX Designer,2025-04-18T13:00:00,No Show,")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn dashboard_counts_new_interviews() {
    let (service, catalog) = build_service();
    service
        .create_interview_at(
            InterviewDraft {
                title: "Extra".to_string(),
                profile: mid_level_technology(),
                questions: vec![question(&catalog, "q1")],
            },
            created_at(),
        )
        .expect("created");

    let dashboard = service.dashboard().expect("dashboard");
    let total = dashboard.kpi("Total Interviews").expect("total card");
    assert_eq!(total.value, 5);
}

#[test]
fn repository_failures_propagate() {
    let service = InterviewService::new(Arc::new(UnavailableCatalog)).expect("service builds");

    match service.suggest_questions(&mid_level_technology()) {
        Err(InterviewServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "offline");
        }
        other => panic!("expected unavailable, got {other:?}"),
    }
    assert!(matches!(
        service.students(&StudentFilter::default()),
        Err(InterviewServiceError::Repository(_))
    ));
}

#[test]
fn exhausted_identifier_space_fails_service_construction() {
    let CatalogFixtures {
        questions,
        students,
        mut interviews,
    } = CatalogFixtures::standard();
    interviews[0].id = InterviewId(format!("i{}", u64::MAX));
    let catalog = InMemoryCatalog::from_parts(questions, students, interviews).expect("catalog");

    match InterviewService::new(Arc::new(catalog)) {
        Err(InterviewServiceError::Assembly(AssemblyError::IdentifiersExhausted)) => {}
        Err(other) => panic!("expected exhausted identifiers, got {other:?}"),
        Ok(_) => panic!("expected exhausted identifiers"),
    }
}

#[test]
fn blank_status_filter_means_every_status() {
    let filter: StudentFilter =
        serde_json::from_value(serde_json::json!({ "status": "  " })).expect("filter");
    assert_eq!(filter.status, None);

    let filter: StudentFilter =
        serde_json::from_value(serde_json::json!({ "status": "no-show" })).expect("filter");
    assert_eq!(filter.status, Some(StudentStatus::NoShow));

    assert!(serde_json::from_value::<StudentFilter>(serde_json::json!({ "status": "absent" }))
        .is_err());
}
