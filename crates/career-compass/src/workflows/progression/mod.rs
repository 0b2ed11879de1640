//! Readiness scoring, next-role inference, and rule-based development actions for a roster.

pub mod actions;
mod builder;
pub mod domain;
pub mod narrative;
pub mod report;
mod role;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use actions::{derive_actions, ActionPlan, ActionRule, ActionRuleEngine, RuleCondition};
pub use builder::{Assessment, RecommendationBuilder};
pub use domain::{
    IndustryContext, MemberProfile, Narrative, ReadinessScore, Recommendation, UnknownIndustry,
    NARRATIVE_UNAVAILABLE,
};
pub use narrative::{
    profile_text, CachedNarrator, NarrativeError, NarrativeGenerator, OpenAiNarrator,
    OpenAiNarratorConfig,
};
pub use report::TeamSummary;
pub use role::{recommend_role, LEADERSHIP_TRACK_ROLE, UPSKILL_ROLE};
pub use router::recommendation_router;
pub use scoring::{compute_score, score_breakdown, ScoreBand, ScoreBreakdown};
