use crate::demo::{
    run_dashboard, run_demo, run_interview_create, run_interview_list, run_interview_show,
    run_question_suggestions, run_student_export, run_student_list, CreateInterviewArgs,
    ExportArgs, InterviewListArgs, ProfileArgs, ShowInterviewArgs, StudentListArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use interview_hub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Interview Spark Hub",
    about = "Run the mock interview dashboard service or explore its catalog from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse question suggestions
    Questions {
        #[command(subcommand)]
        command: QuestionCommand,
    },
    /// List, inspect, and create interviews
    Interviews {
        #[command(subcommand)]
        command: InterviewCommand,
    },
    /// Browse or export the student roster
    Students {
        #[command(subcommand)]
        command: StudentCommand,
    },
    /// Print the dashboard KPIs and charts
    Dashboard,
    /// Walk through suggesting questions, creating an interview, and reviewing the roster
    Demo,
}

#[derive(Subcommand, Debug)]
enum QuestionCommand {
    /// List catalog questions matching a classification profile
    Suggest(ProfileArgs),
}

#[derive(Subcommand, Debug)]
enum InterviewCommand {
    /// List interviews, optionally filtered by title
    List(InterviewListArgs),
    /// Show one interview with its questions and students
    Show(ShowInterviewArgs),
    /// Create an interview from suggested questions
    Create(CreateInterviewArgs),
}

#[derive(Subcommand, Debug)]
enum StudentCommand {
    /// List students, optionally filtered by search text and status
    List(StudentListArgs),
    /// Write the roster as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions {
            command: QuestionCommand::Suggest(args),
        } => run_question_suggestions(args),
        Command::Interviews { command } => match command {
            InterviewCommand::List(args) => run_interview_list(args),
            InterviewCommand::Show(args) => run_interview_show(args),
            InterviewCommand::Create(args) => run_interview_create(args),
        },
        Command::Students { command } => match command {
            StudentCommand::List(args) => run_student_list(args),
            StudentCommand::Export(args) => run_student_export(args),
        },
        Command::Dashboard => run_dashboard(),
        Command::Demo => run_demo(),
    }
}
