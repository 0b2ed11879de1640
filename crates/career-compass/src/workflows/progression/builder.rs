use std::sync::Arc;

use tracing::{debug, info, warn};

use super::actions::ActionRuleEngine;
use super::domain::{IndustryContext, MemberProfile, Narrative, ReadinessScore, Recommendation};
use super::narrative::{profile_text, NarrativeGenerator};
use super::role::recommend_role;
use super::scoring::compute_score;

/// Deterministic part of a recommendation, before any narrative is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: ReadinessScore,
    pub next_role: String,
    pub actions: Vec<String>,
    pub matched_rules: Vec<&'static str>,
}

/// Composes scoring, role inference, rule evaluation and the optional narrative call.
pub struct RecommendationBuilder {
    engine: ActionRuleEngine,
    narrator: Option<Arc<dyn NarrativeGenerator>>,
}

impl Default for RecommendationBuilder {
    fn default() -> Self {
        Self::new(ActionRuleEngine::standard())
    }
}

impl RecommendationBuilder {
    pub fn new(engine: ActionRuleEngine) -> Self {
        Self {
            engine,
            narrator: None,
        }
    }

    pub fn with_narrator(mut self, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    pub fn has_narrator(&self) -> bool {
        self.narrator.is_some()
    }

    /// Score, role and actions for one member. Pure.
    pub fn assess(&self, profile: &MemberProfile, industry: IndustryContext) -> Assessment {
        let score = compute_score(profile);
        let next_role = recommend_role(profile, score);
        let plan = self.engine.evaluate(profile, score, industry);

        Assessment {
            score,
            next_role,
            actions: plan.actions,
            matched_rules: plan.matched_rules,
        }
    }

    /// Full recommendation for one member. Narrative failures degrade to
    /// [`Narrative::Unavailable`] and never propagate.
    pub async fn recommend(
        &self,
        profile: &MemberProfile,
        industry: IndustryContext,
    ) -> Recommendation {
        let assessment = self.assess(profile, industry);
        debug!(
            member = %profile.name,
            score = %assessment.score,
            rules = assessment.matched_rules.len(),
            "member assessed"
        );

        let narrative = self.narrate(profile, &assessment, industry).await;

        Recommendation {
            profile: profile.clone(),
            score: assessment.score,
            next_role: assessment.next_role,
            actions: assessment.actions,
            matched_rules: assessment
                .matched_rules
                .into_iter()
                .map(str::to_string)
                .collect(),
            narrative,
        }
    }

    /// One recommendation per member, in roster order.
    pub async fn build(
        &self,
        roster: &[MemberProfile],
        industry: IndustryContext,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::with_capacity(roster.len());
        for profile in roster {
            recommendations.push(self.recommend(profile, industry).await);
        }

        let narrated = recommendations
            .iter()
            .filter(|recommendation| recommendation.narrative.is_generated())
            .count();
        info!(
            members = recommendations.len(),
            narrated,
            industry = industry.label(),
            "roster recommendations built"
        );

        recommendations
    }

    async fn narrate(
        &self,
        profile: &MemberProfile,
        assessment: &Assessment,
        industry: IndustryContext,
    ) -> Narrative {
        let Some(narrator) = &self.narrator else {
            return Narrative::Unavailable;
        };

        let text = profile_text(profile, assessment.score, &assessment.next_role);
        match narrator.generate(&text, industry.label()).await {
            Ok(narrative) => Narrative::Generated(narrative),
            Err(err) => {
                warn!(member = %profile.name, error = %err, "narrative unavailable");
                Narrative::Unavailable
            }
        }
    }
}
