use crate::infra::{parse_industry, recommendation_builder};
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use career_compass::telemetry::{self, LogTarget};
use career_compass::workflows::progression::{IndustryContext, Recommendation, TeamSummary};
use career_compass::workflows::roster::{
    write_recommendations, RosterImport, RosterImporter, RosterIssue,
};
use chrono::Local;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;

const SAMPLE_ROSTER: &str = include_str!("../sample_data/team_members_sample.csv");

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Roster CSV with one row per team member
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Industry label or key (defaults to APP_INDUSTRY)
    #[arg(long, value_parser = parse_industry)]
    pub(crate) industry: Option<IndustryContext>,
    /// Write the enriched roster CSV here instead of printing a report
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Ask the configured narrative backend for a development plan per member
    #[arg(long)]
    pub(crate) with_narrative: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Industry label or key (defaults to APP_INDUSTRY)
    #[arg(long, value_parser = parse_industry)]
    pub(crate) industry: Option<IndustryContext>,
    /// Ask the configured narrative backend for a development plan per member
    #[arg(long)]
    pub(crate) with_narrative: bool,
}

pub(crate) async fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        roster,
        industry,
        output,
        with_narrative,
    } = args;

    let config = load_cli_config()?;
    let industry = industry.unwrap_or(config.recommendations.default_industry);
    let import = RosterImporter::from_path(&roster)?;
    let builder = recommendation_builder(&config.recommendations, with_narrative)?;
    let recommendations = builder.build(&import.profiles, industry).await;

    match output {
        Some(path) => {
            write_recommendations(File::create(&path)?, &recommendations)?;
            println!(
                "Wrote {} recommendations to {}",
                recommendations.len(),
                path.display()
            );
            for issue in &import.issues {
                println!("- {}", issue);
            }
        }
        None => {
            let summary = TeamSummary::from_recommendations(
                industry,
                Local::now().date_naive(),
                &recommendations,
            );
            println!("{}", format_report(&summary, &recommendations, &import.issues));
        }
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        industry,
        with_narrative,
    } = args;

    let config = load_cli_config()?;
    let industry = industry.unwrap_or(config.recommendations.default_industry);
    let import = sample_roster()?;
    let builder = recommendation_builder(&config.recommendations, with_narrative)?;
    let recommendations = builder.build(&import.profiles, industry).await;
    let summary =
        TeamSummary::from_recommendations(industry, Local::now().date_naive(), &recommendations);

    println!("Career readiness demo (bundled sample roster)");
    println!("{}", format_report(&summary, &recommendations, &import.issues));
    Ok(())
}

pub(crate) fn run_industries() {
    println!("Supported industries");
    for industry in IndustryContext::ordered() {
        println!("- {} ({})", industry.label(), industry.key());
    }
}

/// Logs go to stderr so reports and CSV on stdout stay clean.
fn load_cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogTarget::Stderr)?;
    Ok(config)
}

pub(crate) fn sample_roster() -> Result<RosterImport, AppError> {
    Ok(RosterImporter::from_reader(SAMPLE_ROSTER.as_bytes())?)
}

pub(crate) fn format_report(
    summary: &TeamSummary,
    recommendations: &[Recommendation],
    issues: &[RosterIssue],
) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Industry: {} | Generated on {}",
        summary.industry, summary.generated_on
    ));
    let average = summary
        .average_score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    lines.push(format!(
        "Members: {} | Average readiness: {} | Narratives generated: {}",
        summary.member_count, average, summary.narratives_generated
    ));

    lines.push("\nScore bands".to_string());
    for entry in &summary.score_bands {
        lines.push(format!("- {}: {}", entry.band_label, entry.count));
    }

    if !summary.role_pipeline.is_empty() {
        lines.push("\nRole pipeline".to_string());
        for entry in &summary.role_pipeline {
            lines.push(format!("- {}: {}", entry.role, entry.count));
        }
    }

    if recommendations.is_empty() {
        lines.push("\nMembers: none".to_string());
    } else {
        lines.push("\nMembers".to_string());
        for recommendation in recommendations {
            let profile = &recommendation.profile;
            lines.push(format!(
                "- {} ({}): {} -> {}",
                profile.name,
                profile.role_or_default(),
                recommendation.score,
                recommendation.next_role
            ));
            lines.push(format!(
                "  Matched rules: {}",
                recommendation.matched_rules.join(", ")
            ));
            for action in &recommendation.actions {
                lines.push(format!("  • {}", action));
            }
            lines.push(format!("  Narrative: {}", recommendation.narrative.as_text()));
        }
    }

    if !issues.is_empty() {
        lines.push("\nInput issues".to_string());
        for issue in issues {
            lines.push(format!("- {}", issue));
        }
    }

    lines.join("\n")
}
