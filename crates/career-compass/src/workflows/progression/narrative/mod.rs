//! Best-effort narrative plans from an external text-generation service.
//!
//! The engine only sees [`NarrativeGenerator`]; any error it returns is absorbed by the
//! builder and rendered as the unavailable placeholder for that one member.

mod cache;
mod openai;

pub use cache::CachedNarrator;
pub use openai::{OpenAiNarrator, OpenAiNarratorConfig};

use super::domain::{MemberProfile, ReadinessScore};
use async_trait::async_trait;

/// Capability boundary for the language-model call.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, profile_text: &str, industry: &str)
        -> Result<String, NarrativeError>;
}

/// Every way the collaborator can fail to produce a narrative.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative request timed out")]
    Timeout,
    #[error("narrative transport failed: {0}")]
    Transport(String),
    #[error("narrative service returned status {0}")]
    Status(u16),
    #[error("narrative service returned no text")]
    EmptyResponse,
}

/// Textual profile handed to the collaborator; also the cache key together with the industry.
pub fn profile_text(profile: &MemberProfile, score: ReadinessScore, next_role: &str) -> String {
    format!(
        "Name: {}\n\
Current role: {}\n\
Years of experience: {}\n\
Tech skill rating (1-5): {}\n\
Soft skill rating (1-5): {}\n\
Performance rating (1-5): {}\n\
Leadership interest: {}\n\
Domain interest: {}\n\
Career goal: {}\n\
Readiness score (0-100): {}\n\
Suggested next role (rule-based): {}",
        profile.name,
        profile.current_role.as_deref().unwrap_or(""),
        profile.years_experience,
        profile.tech_skill_rating,
        profile.soft_skill_rating,
        profile.performance_rating,
        profile.leadership_interest,
        profile.domain_interest,
        profile.career_goal,
        score,
        next_role,
    )
}

pub(crate) fn coaching_prompt(profile_text: &str, industry: &str) -> String {
    format!(
        "You are a career coach helping a manager plan growth for their team member.\n\n\
Given the profile below and the industry, write:\n\
1) A short narrative summary of the person's current strengths and gaps.\n\
2) A concrete 30-60-90 day development plan.\n\
Use concise bullet points. Avoid generic advice.\n\n\
Industry: {industry}\n\
Profile:\n{profile_text}\n\n\
Answer:"
    )
}
