use crate::demo::{run_demo, DemoArgs};
use crate::score::{run_list, run_score, run_show, ScoreArgs, ShowArgs};
use clap::{Parser, Subcommand};
use nirvana::config::AppConfig;
use nirvana::error::AppError;
use nirvana::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "nirvana",
    about = "Take and score the Nirvana self-assessment questionnaires from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the bundled questionnaires (default command)
    List,
    /// Print a questionnaire's items and answer scale
    Show(ShowArgs),
    /// Score a set of answers against a questionnaire
    Score(ScoreArgs),
    /// Walk through every bundled questionnaire with a simulated respondent
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    debug!(
        environment = ?config.environment,
        policy = %config.scoring.policy,
        "configuration loaded"
    );

    match cli.command.unwrap_or(Command::List) {
        Command::List => run_list(),
        Command::Show(args) => run_show(args),
        Command::Score(args) => run_score(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}
