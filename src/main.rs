mod cli;

use clap::Parser;
use founderfit::error::{FitError, Result};
use founderfit::prompt::context::ContextSnapshot;
use founderfit::prompt::{CompiledPrompt, PromptKind};
use founderfit::rank::{FilterOptions, RankOptions, SortKey};
use founderfit::report::{OutputFormat, ScoreReport};
use founderfit::types::config::{FitConfig, DEFAULT_IDEA_COUNT};
use founderfit::{config, fit, load, logging, prompt, rank, report, validate};
use std::path::PathBuf;
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config_dir = cli.config_dir.unwrap_or_else(|| PathBuf::from("."));
    if !config_dir.exists() {
        return Err(FitError::PathNotFound(config_dir.display().to_string()));
    }
    let loaded = config::load_config(&config_dir)?;
    if let Some(cfg) = &loaded {
        info!(project = %cfg.project.name, "loaded config");
    }

    match cli.command {
        cli::Commands::Score(cmd) => {
            let profile = load::load_profile(&cmd.profile)?;
            let idea = load::load_idea_shape(&cmd.idea)?;
            let breakdown = fit::score_idea(&profile, &idea);
            info!(
                version = idea.version(),
                overall = breakdown.overall,
                "scored idea"
            );

            let score_report = ScoreReport {
                title: idea.title().map(str::to_string),
                version: idea.version(),
                breakdown: breakdown.explain(),
            };
            println!(
                "{}",
                report::render_score(&score_report, output_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rank(cmd) => {
            let ideas = load::load_ideas(&cmd.ideas)?;
            let profile = cmd
                .profile
                .as_deref()
                .map(load::load_profile)
                .transpose()?;

            let sort_by = cmd.sort_by.map(sort_key).unwrap_or_else(|| {
                loaded
                    .as_ref()
                    .map(FitConfig::sort_by)
                    .unwrap_or_default()
            });
            let mut filter: FilterOptions = loaded
                .as_ref()
                .map(FitConfig::filter)
                .unwrap_or_default()
                .into();
            if !cmd.stages.is_empty() {
                filter.stages = cmd.stages;
            }
            if !cmd.tags.is_empty() {
                filter.tags = cmd.tags;
            }
            if let Some(min) = cmd.min_opportunity {
                filter.min_opportunity_score = min;
            }
            if let Some(min) = cmd.min_fit {
                filter.min_fit_score = min;
            }

            let ranked = rank::rank_ideas(
                &ideas,
                &RankOptions {
                    sort_by,
                    founder_profile: profile.as_ref(),
                },
            );
            let kept = rank::filter_ideas(&ranked, &filter);
            info!(loaded = ideas.len(), kept = kept.len(), "ranked ideas");

            println!(
                "{}",
                report::render_ranking(&kept, output_format(cmd.format))?
            );
            if kept.is_empty() {
                warn!("no idea survived filtering");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let draft = load::load_draft(&cmd.idea)?;
            let result = validate::validate_idea(&draft);
            if result.valid {
                println!("validate: idea is valid");
                return Ok(exit_code::SUCCESS);
            }

            println!("validate: {} error(s)", result.errors.len());
            for error in &result.errors {
                println!("- {error}");
            }
            Ok(exit_code::WARNINGS)
        }
        cli::Commands::Prompt(cmd) => {
            let profile = cmd
                .profile
                .as_deref()
                .map(load::load_profile)
                .transpose()?;
            let idea = cmd.idea.as_deref().map(load::load_idea).transpose()?;
            let analysis = cmd
                .analysis
                .as_deref()
                .map(load::load_analysis)
                .transpose()?;

            let (kind, pair) = match cmd.kind {
                cli::PromptTarget::Generate => {
                    let count = cmd.count.unwrap_or_else(|| {
                        loaded
                            .as_ref()
                            .map_or(DEFAULT_IDEA_COUNT, FitConfig::idea_count)
                    });
                    (
                        PromptKind::IdeaGeneration,
                        prompt::build_idea_generation_prompt(
                            required(profile.as_ref(), "--profile")?,
                            count,
                        ),
                    )
                }
                cli::PromptTarget::Vet => (
                    PromptKind::IdeaVetting,
                    prompt::build_idea_vetting_prompt(
                        required(profile.as_ref(), "--profile")?,
                        required(idea.as_ref(), "--idea")?,
                    ),
                ),
                cli::PromptTarget::Opportunity => (
                    PromptKind::OpportunityScoring,
                    prompt::build_opportunity_prompt(
                        required(idea.as_ref(), "--idea")?,
                        analysis.as_ref(),
                    ),
                ),
                cli::PromptTarget::Blueprint => (
                    PromptKind::Blueprint,
                    prompt::build_blueprint_prompt(
                        required(profile.as_ref(), "--profile")?,
                        required(idea.as_ref(), "--idea")?,
                        analysis.as_ref(),
                    ),
                ),
            };

            let context = ContextSnapshot {
                profile: profile.as_ref(),
                idea: idea.as_ref(),
                analysis: analysis.as_ref(),
            };
            let compiled = CompiledPrompt::new(kind, pair, &context)?;
            info!(kind = ?kind, hash = %compiled.context_hash, "compiled prompt");
            println!("{}", serde_json::to_string_pretty(&compiled)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn required<'a, T>(value: Option<&'a T>, flag: &str) -> Result<&'a T> {
    value.ok_or_else(|| FitError::MissingInput(format!("{flag} is required for this prompt")))
}

fn output_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn sort_key(sort_by: cli::SortBy) -> SortKey {
    match sort_by {
        cli::SortBy::Opportunity => SortKey::Opportunity,
        cli::SortBy::FounderFit => SortKey::FounderFit,
        cli::SortBy::CreatedAt => SortKey::CreatedAt,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
