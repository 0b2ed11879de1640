use super::domain::{MemberProfile, ReadinessScore};
use serde::Serialize;

/// Lower bound (inclusive) of the senior / stretch band.
pub const SENIOR_THRESHOLD: f64 = 80.0;
/// Lower bound (inclusive) of the mid-level / consolidation band.
pub const MID_LEVEL_THRESHOLD: f64 = 60.0;

const EXPERIENCE_CAP_YEARS: f64 = 10.0;
const SUB_SCORE_MAX: f64 = 5.0;
const LEADERSHIP_INTERESTED: f64 = 5.0;
const LEADERSHIP_NOT_INTERESTED: f64 = 2.0;

const EXPERIENCE_WEIGHT: f64 = 0.3;
const TECH_WEIGHT: f64 = 0.2;
const SOFT_WEIGHT: f64 = 0.2;
const PERFORMANCE_WEIGHT: f64 = 0.2;
const LEADERSHIP_WEIGHT: f64 = 0.1;

/// Sub-scores (each nominally 0-5) that feed the weighted composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub experience: f64,
    pub tech: f64,
    pub soft: f64,
    pub performance: f64,
    pub leadership: f64,
    pub composite: f64,
    pub score: ReadinessScore,
}

/// Score band shared by the role table and the first action-rule group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Stretch,
    Consolidate,
    Foundation,
}

impl ScoreBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::Stretch, Self::Consolidate, Self::Foundation]
    }

    pub fn for_score(score: ReadinessScore) -> Self {
        let value = score.value();
        if value >= SENIOR_THRESHOLD {
            Self::Stretch
        } else if value >= MID_LEVEL_THRESHOLD {
            Self::Consolidate
        } else {
            Self::Foundation
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stretch => "Ready for stretch (80+)",
            Self::Consolidate => "Consolidating (60-79)",
            Self::Foundation => "Building foundations (<60)",
        }
    }
}

pub fn compute_score(profile: &MemberProfile) -> ReadinessScore {
    score_breakdown(profile).score
}

pub fn score_breakdown(profile: &MemberProfile) -> ScoreBreakdown {
    let experience =
        finite_or_zero(profile.years_experience).min(EXPERIENCE_CAP_YEARS) / EXPERIENCE_CAP_YEARS
            * SUB_SCORE_MAX;
    let tech = finite_or_zero(profile.tech_skill_rating);
    let soft = finite_or_zero(profile.soft_skill_rating);
    let performance = finite_or_zero(profile.performance_rating);
    let leadership = if profile.wants_leadership() {
        LEADERSHIP_INTERESTED
    } else {
        LEADERSHIP_NOT_INTERESTED
    };

    let composite = EXPERIENCE_WEIGHT * experience
        + TECH_WEIGHT * tech
        + SOFT_WEIGHT * soft
        + PERFORMANCE_WEIGHT * performance
        + LEADERSHIP_WEIGHT * leadership;

    ScoreBreakdown {
        experience,
        tech,
        soft,
        performance,
        leadership,
        composite,
        score: ReadinessScore::from_raw(composite / SUB_SCORE_MAX * 100.0),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
