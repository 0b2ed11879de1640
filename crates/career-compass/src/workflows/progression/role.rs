use super::domain::{MemberProfile, ReadinessScore};
use super::scoring::ScoreBand;

pub const LEADERSHIP_TRACK_ROLE: &str = "Team Lead / Scrum Master / SAFe Team Coach";
pub const UPSKILL_ROLE: &str = "Upskill & Consolidate Current Role";

/// Suggests the next role; first matching row of the decision table wins.
pub fn recommend_role(profile: &MemberProfile, score: ReadinessScore) -> String {
    match ScoreBand::for_score(score) {
        ScoreBand::Stretch if profile.wants_leadership() => LEADERSHIP_TRACK_ROLE.to_string(),
        ScoreBand::Stretch => format!("Senior {}", profile.role_or_default()),
        ScoreBand::Consolidate => format!("Mid-level {}", profile.role_or_default()),
        ScoreBand::Foundation => UPSKILL_ROLE.to_string(),
    }
}
