use crate::reports::{
    run_demo, run_questions, run_roi_calculate, run_score, DemoArgs, RoiCalculateArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ops_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Operational Readiness Portal",
    about = "Score readiness assessments, project ROI and serve the portal API",
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
    /// Inspect the question catalog or score an answer sheet
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Project annual savings for a set of business figures
    Roi {
        #[command(subcommand)]
        command: RoiCommand,
    },
    /// Print a demo assessment and ROI report for the demo company
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// List the 15 catalog questions with their answer options
    Questions,
    /// Score a JSON or CSV answer sheet and print the readiness profile
    Score(ScoreArgs),
}

#[derive(Subcommand, Debug)]
enum RoiCommand {
    /// Calculate ROI for a preset, custom inputs or the baseline
    Calculate(RoiCalculateArgs),
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
        Command::Assessment {
            command: AssessmentCommand::Questions,
        } => {
            run_questions();
            Ok(())
        }
        Command::Assessment {
            command: AssessmentCommand::Score(args),
        } => run_score(args),
        Command::Roi {
            command: RoiCommand::Calculate(args),
        } => run_roi_calculate(args),
        Command::Demo(args) => run_demo(args),
    }
}
