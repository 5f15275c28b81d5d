use crate::infra::seeded_service;
use clap::Args;
use interview_hub::error::AppError;
use interview_hub::workflows::interviews::{
    ClassificationProfile, DashboardAnalytics, ExperienceLevel, Industry, Interview,
    InterviewCardView, InterviewDetailView, InterviewId, InterviewType, InterviewWizard,
    Language, Question, QuestionId, RosterView, StudentFilter, StudentStatus,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub(crate) struct ProfileArgs {
    /// Industry label or key (e.g. "Technology", "healthcare")
    #[arg(long, default_value_t = Industry::Technology)]
    pub(crate) industry: Industry,
    /// Interview type ("technical" or "non-technical")
    #[arg(long = "type", default_value_t = InterviewType::Technical)]
    pub(crate) interview_type: InterviewType,
    /// Interview language
    #[arg(long, default_value_t = Language::English)]
    pub(crate) language: Language,
    /// Experience level label or key (e.g. "mid-level")
    #[arg(long = "experience", default_value_t = ExperienceLevel::MidLevel)]
    pub(crate) experience_level: ExperienceLevel,
}

impl ProfileArgs {
    pub(crate) fn profile(&self) -> ClassificationProfile {
        ClassificationProfile::new(
            self.industry,
            self.interview_type,
            self.language,
            self.experience_level,
        )
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct InterviewListArgs {
    /// Case-insensitive title search
    #[arg(long)]
    pub(crate) search: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ShowInterviewArgs {
    /// Interview id, e.g. i1
    pub(crate) id: String,
}

#[derive(Args, Debug)]
pub(crate) struct CreateInterviewArgs {
    /// Interview title
    #[arg(long)]
    pub(crate) title: String,
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Suggested question id to include; repeat to pick several in order
    #[arg(long = "question")]
    pub(crate) questions: Vec<String>,
    /// Include every suggested question
    #[arg(long)]
    pub(crate) all: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StudentListArgs {
    /// Search over name, e-mail, and applied position
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Status filter ("pending", "completed", "no-show")
    #[arg(long)]
    pub(crate) status: Option<StudentStatus>,
}

impl StudentListArgs {
    fn filter(&self) -> StudentFilter {
        StudentFilter {
            search: self.search.clone(),
            status: self.status,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) filter: StudentListArgs,
    /// Write the CSV here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_question_suggestions(args: ProfileArgs) -> Result<(), AppError> {
    let service = seeded_service()?;
    let profile = args.profile();
    let questions = service.suggest_questions(&profile)?;
    println!("Suggested questions for {}", profile);
    render_questions(&questions);
    Ok(())
}

pub(crate) fn run_interview_list(args: InterviewListArgs) -> Result<(), AppError> {
    let service = seeded_service()?;
    let interviews = service.interviews(args.search.as_deref())?;
    if interviews.is_empty() {
        println!("No interviews found.");
        return Ok(());
    }
    for interview in &interviews {
        render_card(&InterviewCardView::from(interview));
    }
    Ok(())
}

pub(crate) fn run_interview_show(args: ShowInterviewArgs) -> Result<(), AppError> {
    let service = seeded_service()?;
    let interview = service.interview(&InterviewId(args.id))?;
    render_detail(&InterviewDetailView::from(interview));
    Ok(())
}

pub(crate) fn run_interview_create(args: CreateInterviewArgs) -> Result<(), AppError> {
    let CreateInterviewArgs {
        title,
        profile,
        questions,
        all,
    } = args;

    let service = seeded_service()?;
    let mut wizard = InterviewWizard::new();
    wizard.set_title(title)?;
    wizard.set_profile(profile.profile())?;
    let suggestions = service.suggest_questions(&wizard.profile())?;
    wizard.generate_suggestions(suggestions)?;

    if all {
        wizard.select_all()?;
    } else {
        for question_id in questions {
            wizard.toggle(&QuestionId(question_id))?;
        }
    }

    if !wizard.can_create() {
        println!("Suggested questions for {}", wizard.profile());
        render_questions(wizard.suggestions());
        println!("Pick questions with --question <id> or pass --all.");
    }

    let interview = service.create_interview(wizard.into_draft()?)?;
    println!("Interview created successfully.");
    render_detail(&InterviewDetailView::from(interview));
    Ok(())
}

pub(crate) fn run_student_list(args: StudentListArgs) -> Result<(), AppError> {
    let service = seeded_service()?;
    let roster = RosterView::from(service.students(&args.filter())?);
    render_roster(&roster);
    Ok(())
}

pub(crate) fn run_student_export(args: ExportArgs) -> Result<(), AppError> {
    let service = seeded_service()?;
    let filter = args.filter.filter();
    match args.output {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path)?);
            let rows = service.export_students(&filter, writer)?;
            println!("Exported {} students to {}", rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            service.export_students(&filter, stdout.lock())?;
        }
    }
    Ok(())
}

pub(crate) fn run_dashboard() -> Result<(), AppError> {
    let service = seeded_service()?;
    render_dashboard(&service.dashboard()?);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = seeded_service()?;

    println!("Interview Spark Hub demo");
    render_dashboard(&service.dashboard()?);

    let mut wizard = InterviewWizard::new();
    wizard.set_title("Frontend Developer Interview - Demo")?;
    let suggestions = service.suggest_questions(&wizard.profile())?;
    println!(
        "\nStep 1: {} suggestion(s) for {}",
        suggestions.len(),
        wizard.profile()
    );
    wizard.generate_suggestions(suggestions)?;
    render_questions(wizard.suggestions());

    wizard.select_all()?;
    println!(
        "\nStep 2: selected {} question(s), creating interview",
        wizard.selected().len()
    );
    let interview = match service.create_interview(wizard.into_draft()?) {
        Ok(interview) => interview,
        Err(err) => {
            println!("  Interview rejected: {}", err);
            return Ok(());
        }
    };
    render_detail(&InterviewDetailView::from(interview.clone()));

    println!("\nInterviews on the dashboard");
    for listed in service.interviews(None)? {
        render_card(&InterviewCardView::from(&listed));
    }

    let roster = RosterView::from(service.students(&StudentFilter::default())?);
    println!();
    render_roster(&roster);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "\nRoster export preview")?;
    service.export_students(
        &StudentFilter {
            search: None,
            status: Some(StudentStatus::Pending),
        },
        &mut handle,
    )?;

    render_created_summary(&interview);
    Ok(())
}

fn render_questions(questions: &[Question]) {
    if questions.is_empty() {
        println!("  No questions match these parameters.");
        return;
    }
    for question in questions {
        println!("  - [{}] {}", question.id, question.text);
    }
}

fn render_card(card: &InterviewCardView) {
    println!(
        "- {} {} (created {})",
        card.id, card.title, card.created_on
    );
    println!(
        "  {} | {} | {} | {}",
        card.profile.industry,
        card.profile.interview_type,
        card.profile.language,
        card.profile.experience_level
    );
    println!(
        "  {} questions | {} students | {}% complete",
        card.question_count, card.student_count, card.completion_rate
    );
}

fn render_detail(detail: &InterviewDetailView) {
    let interview = &detail.interview;
    println!("{} [{}]", interview.title, interview.id);
    println!("  Created {}", detail.created_on);
    println!("  Parameters: {}", interview.profile);
    println!("  Questions:");
    for (position, question) in interview.questions.iter().enumerate() {
        println!("    {}. {}", position + 1, question.text);
    }
    if interview.students.is_empty() {
        println!("  Students: none assigned yet");
    } else {
        println!(
            "  Students: {} completed / {} pending / {} no show",
            detail.status_breakdown.completed,
            detail.status_breakdown.pending,
            detail.status_breakdown.no_show
        );
        for student in &interview.students {
            println!(
                "    - {} <{}> {}",
                student.name, student.email, student.status
            );
        }
    }
}

fn render_roster(roster: &RosterView) {
    println!(
        "Students: {} total | {} completed | {} pending | {} no show",
        roster.total,
        roster.status_breakdown.completed,
        roster.status_breakdown.pending,
        roster.status_breakdown.no_show
    );
    for student in &roster.students {
        println!(
            "  - {} | {} | {} | {} | {}",
            student.name,
            student.applied_position,
            student.interview_date.format("%b %-d, %Y %-I:%M %p"),
            student.status,
            student.notes.as_deref().unwrap_or("-")
        );
    }
}

fn render_dashboard(analytics: &DashboardAnalytics) {
    println!("Dashboard");
    for card in &analytics.kpis {
        println!(
            "  {}: {} ({:+}% from last month)",
            card.label,
            card.display_value(),
            card.change_from_last_month_pct
        );
    }
    println!("  Interviews per month:");
    for month in &analytics.monthly_interviews {
        println!("    {} {}", month.month, month.interviews);
    }
    println!("  Interviews by department:");
    for share in &analytics.interviews_by_department {
        println!(
            "    {} {} ({}%)",
            share.department, share.interviews, share.share_pct
        );
    }
}

fn render_created_summary(interview: &Interview) {
    println!(
        "\nDemo interview {} holds {} question(s); the catalog is discarded on exit.",
        interview.id,
        interview.questions.len()
    );
}
