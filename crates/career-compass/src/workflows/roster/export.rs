use super::{OUTPUT_COLUMNS, REQUIRED_COLUMNS};
use crate::workflows::progression::Recommendation;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct RecommendationRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "CurrentRole")]
    current_role: &'a str,
    #[serde(rename = "YearsExperience")]
    years_experience: f64,
    #[serde(rename = "TechSkillRating")]
    tech_skill_rating: f64,
    #[serde(rename = "SoftSkillRating")]
    soft_skill_rating: f64,
    #[serde(rename = "PerformanceRating")]
    performance_rating: f64,
    #[serde(rename = "LeadershipInterest")]
    leadership_interest: &'a str,
    #[serde(rename = "DomainInterest")]
    domain_interest: &'a str,
    #[serde(rename = "CareerGoal")]
    career_goal: &'a str,
    #[serde(rename = "ReadinessScore")]
    readiness_score: f64,
    #[serde(rename = "SuggestedNextRole")]
    suggested_next_role: &'a str,
    #[serde(rename = "RecommendedActions")]
    recommended_actions: String,
    #[serde(rename = "Narrative")]
    narrative: &'a str,
}

impl<'a> RecommendationRow<'a> {
    fn from_recommendation(recommendation: &'a Recommendation) -> Self {
        let profile = &recommendation.profile;
        Self {
            name: &profile.name,
            current_role: profile.current_role.as_deref().unwrap_or(""),
            years_experience: profile.years_experience,
            tech_skill_rating: profile.tech_skill_rating,
            soft_skill_rating: profile.soft_skill_rating,
            performance_rating: profile.performance_rating,
            leadership_interest: &profile.leadership_interest,
            domain_interest: &profile.domain_interest,
            career_goal: &profile.career_goal,
            readiness_score: recommendation.score.value(),
            suggested_next_role: &recommendation.next_role,
            recommended_actions: recommendation.actions_as_bullets(),
            narrative: recommendation.narrative.as_text(),
        }
    }
}

/// Writes the input columns followed by the derived columns, one row per recommendation.
pub fn write_recommendations<W: Write>(
    writer: W,
    recommendations: &[Recommendation],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if recommendations.is_empty() {
        csv_writer.write_record(REQUIRED_COLUMNS.iter().chain(OUTPUT_COLUMNS.iter()))?;
    }
    for recommendation in recommendations {
        csv_writer.serialize(RecommendationRow::from_recommendation(recommendation))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn recommendations_to_csv(recommendations: &[Recommendation]) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_recommendations(&mut buffer, recommendations)?;
    String::from_utf8(buffer)
        .map_err(|err| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, err)))
}
