use clap::{Args, Parser, Subcommand, ValueEnum};
use snippet_eval::analyze::dimensions::PredicateSet;
use snippet_eval::analyze::predicates::Predicate;
use snippet_eval::report::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "snippet-eval",
    version,
    about = "Quality scoring for documentation code-snippet collections"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file used in place of ./snippet-eval.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score formatting, metadata and initialization of snippet files
    Static(StaticCommand),
    /// List the predicates that fire on each snippet
    Flags(FlagsCommand),
    /// Score one library from its snippets and pre-computed grades
    Score(ScoreCommand),
    /// Score two libraries documenting the same product
    Compare(CompareCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PredicateSetArg {
    Current,
    Legacy,
}

impl From<PredicateSetArg> for PredicateSet {
    fn from(set: PredicateSetArg) -> Self {
        match set {
            PredicateSetArg::Current => PredicateSet::Current,
            PredicateSetArg::Legacy => PredicateSet::Legacy,
        }
    }
}

#[derive(Args)]
pub struct StaticCommand {
    /// Snippet file, or a directory searched for `*.txt` files
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Overrides `[metrics] predicate_set` from the config
    #[arg(long, value_enum)]
    pub predicate_set: Option<PredicateSetArg>,
}

#[derive(Args)]
pub struct FlagsCommand {
    pub file: PathBuf,
    /// Only evaluate this predicate (e.g. `code_too_short`)
    #[arg(long)]
    pub only: Option<Predicate>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub library: String,
    #[arg(long)]
    pub snippets: PathBuf,
    #[arg(long)]
    pub question: f64,
    #[arg(long)]
    pub llm: f64,
    #[arg(long, default_value = "")]
    pub question_explanation: String,
    #[arg(long, default_value = "")]
    pub llm_explanation: String,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CompareCommand {
    pub first: String,
    pub second: String,
    #[arg(long, num_args = 2, required = true)]
    pub snippets: Vec<PathBuf>,
    #[arg(long, num_args = 2, required = true)]
    pub question: Vec<f64>,
    #[arg(long, num_args = 2, required = true)]
    pub llm: Vec<f64>,
    #[arg(long, num_args = 2)]
    pub question_explanation: Vec<String>,
    #[arg(long, num_args = 2)]
    pub llm_explanation: Vec<String>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}
