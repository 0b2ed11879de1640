use super::common::*;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::workflows::progression::report::RolePipelineEntry;
use crate::workflows::progression::{
    IndustryContext, RecommendationBuilder, ScoreBand, TeamSummary, LEADERSHIP_TRACK_ROLE,
    UPSKILL_ROLE,
};

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

#[tokio::test]
async fn summary_counts_bands_roles_and_average() {
    let roster = vec![
        top_performer("Asha"),
        newcomer("Ben"),
        profile("Cara"),
        profile("Dee"),
    ];
    let recommendations = builder_with(Arc::new(FailingFor("Ben")))
        .build(&roster, IndustryContext::Technology)
        .await;

    let summary = TeamSummary::from_recommendations(
        IndustryContext::Technology,
        run_date(),
        &recommendations,
    );

    assert_eq!(summary.member_count, 4);
    assert_eq!(summary.narratives_generated, 3);
    assert_eq!(summary.average_score.map(|score| score.value()), Some(57.5));

    let bands: Vec<(ScoreBand, usize)> = summary
        .score_bands
        .iter()
        .map(|entry| (entry.band, entry.count))
        .collect();
    assert_eq!(
        bands,
        vec![
            (ScoreBand::Stretch, 1),
            (ScoreBand::Consolidate, 2),
            (ScoreBand::Foundation, 1),
        ]
    );

    assert_eq!(
        summary.role_pipeline,
        vec![
            RolePipelineEntry {
                role: "Mid-level Software Engineer".to_string(),
                count: 2,
            },
            RolePipelineEntry {
                role: LEADERSHIP_TRACK_ROLE.to_string(),
                count: 1,
            },
            RolePipelineEntry {
                role: UPSKILL_ROLE.to_string(),
                count: 1,
            },
        ]
    );

    let names: Vec<&str> = summary
        .members
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Asha", "Ben", "Cara", "Dee"]);
}

#[test]
fn empty_batch_has_no_average_and_zeroed_bands() {
    let summary = TeamSummary::from_recommendations(IndustryContext::PublicSector, run_date(), &[]);

    assert_eq!(summary.member_count, 0);
    assert!(summary.average_score.is_none());
    assert!(summary.role_pipeline.is_empty());
    assert_eq!(summary.score_bands.len(), 3);
    assert!(summary.score_bands.iter().all(|entry| entry.count == 0));
}

#[tokio::test]
async fn summary_serializes_industry_label_and_date() {
    let recommendations = RecommendationBuilder::default()
        .build(&[profile("Eli")], IndustryContext::RetailEcommerce)
        .await;

    let summary = TeamSummary::from_recommendations(
        IndustryContext::RetailEcommerce,
        run_date(),
        &recommendations,
    );
    let payload = serde_json::to_value(&summary).expect("serialize summary");

    assert_eq!(payload["industry"], "Retail / E-commerce");
    assert_eq!(payload["generated_on"], "2024-03-01");
    assert_eq!(payload["average_score"], 63.0);
    assert_eq!(payload["score_bands"][1]["band"], "consolidate");
    assert_eq!(payload["narratives_generated"], 0);
}
