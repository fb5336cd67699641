use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "founderfit",
    version,
    about = "Founder/idea fit scoring, ranking and prompt compilation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding founderfit.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one idea against a founder profile
    Score(ScoreCommand),
    /// Rank and filter a set of ideas
    Rank(RankCommand),
    /// Check an idea draft before saving it
    Validate(ValidateCommand),
    /// Compile an LLM prompt
    Prompt(PromptCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortBy {
    Opportunity,
    FounderFit,
    CreatedAt,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(long)]
    pub profile: PathBuf,
    /// Idea document tagged with "version": "v5" or "v6"
    #[arg(long)]
    pub idea: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RankCommand {
    /// JSON file (object or array) or a directory of JSON files
    #[arg(long)]
    pub ideas: PathBuf,
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub sort_by: Option<SortBy>,
    #[arg(long = "stage")]
    pub stages: Vec<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub min_opportunity: Option<f64>,
    #[arg(long)]
    pub min_fit: Option<f64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ValidateCommand {
    #[arg(long)]
    pub idea: PathBuf,
}

#[derive(Args)]
pub struct PromptCommand {
    #[arg(value_enum)]
    pub kind: PromptTarget,
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[arg(long)]
    pub idea: Option<PathBuf>,
    #[arg(long)]
    pub analysis: Option<PathBuf>,
    /// Number of ideas to request when generating
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=20))]
    pub count: Option<u32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PromptTarget {
    Generate,
    Vet,
    Opportunity,
    Blueprint,
}
