use super::domain::{IndustryContext, ReadinessScore, Recommendation};
use super::scoring::ScoreBand;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberScoreEntry {
    pub name: String,
    pub score: ReadinessScore,
    pub next_role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolePipelineEntry {
    pub role: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBandEntry {
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub count: usize,
}

/// Team-level view of a batch: readiness per member and the suggested role pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub industry: IndustryContext,
    pub generated_on: NaiveDate,
    pub member_count: usize,
    pub average_score: Option<ReadinessScore>,
    pub narratives_generated: usize,
    pub score_bands: Vec<ScoreBandEntry>,
    pub role_pipeline: Vec<RolePipelineEntry>,
    pub members: Vec<MemberScoreEntry>,
}

impl TeamSummary {
    pub fn from_recommendations(
        industry: IndustryContext,
        generated_on: NaiveDate,
        recommendations: &[Recommendation],
    ) -> Self {
        let member_count = recommendations.len();
        let average_score = (member_count > 0).then(|| {
            let total: f64 = recommendations
                .iter()
                .map(|recommendation| recommendation.score.value())
                .sum();
            ReadinessScore::from_raw(total / member_count as f64)
        });

        let mut band_counts: HashMap<ScoreBand, usize> = HashMap::new();
        let mut role_counts: HashMap<&str, usize> = HashMap::new();
        for recommendation in recommendations {
            *band_counts
                .entry(ScoreBand::for_score(recommendation.score))
                .or_default() += 1;
            *role_counts
                .entry(recommendation.next_role.as_str())
                .or_default() += 1;
        }

        let score_bands = ScoreBand::ordered()
            .into_iter()
            .map(|band| ScoreBandEntry {
                band,
                band_label: band.label(),
                count: band_counts.get(&band).copied().unwrap_or(0),
            })
            .collect();

        let mut role_pipeline: Vec<RolePipelineEntry> = role_counts
            .into_iter()
            .map(|(role, count)| RolePipelineEntry {
                role: role.to_string(),
                count,
            })
            .collect();
        role_pipeline.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.role.cmp(&b.role)));

        let members = recommendations
            .iter()
            .map(|recommendation| MemberScoreEntry {
                name: recommendation.profile.name.clone(),
                score: recommendation.score,
                next_role: recommendation.next_role.clone(),
            })
            .collect();

        Self {
            industry,
            generated_on,
            member_count,
            average_score,
            narratives_generated: recommendations
                .iter()
                .filter(|recommendation| recommendation.narrative.is_generated())
                .count(),
            score_bands,
            role_pipeline,
            members,
        }
    }
}
