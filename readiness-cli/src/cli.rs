use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use crate::config::AppConfig;
use crate::error::CliError;
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "career-readiness",
    about = "Should you become a medical assistant? A guided career-readiness assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the assessment interactively (default command)
    Take(TakeArgs),
    /// Score a file of prepared answers without prompting
    Score(ScoreArgs),
    /// List the question bank
    Questions,
}

/// How a finished result is presented.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct OutputArgs {
    /// Print the result as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Also write an HTML report to this path
    #[arg(long, value_name = "PATH")]
    pub(crate) report: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Disable colors in the prompts
    #[arg(long)]
    pub(crate) plain: bool,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object mapping question ids to answer tokens, e.g. {"p1": "4", "t1": "1"}
    #[arg(long, value_name = "FILE")]
    pub(crate) answers: PathBuf,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

pub(crate) fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Take(TakeArgs::default()));

    match command {
        Command::Take(args) => commands::take(args, &config),
        Command::Score(args) => commands::score(args),
        Command::Questions => {
            commands::questions();
            Ok(())
        }
    }
}
