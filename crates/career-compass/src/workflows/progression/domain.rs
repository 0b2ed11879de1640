use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder rendered whenever no narrative could be produced for a member.
pub const NARRATIVE_UNAVAILABLE: &str =
    "Narrative unavailable; using rule-based recommendations only.";

/// One roster row, as supplied by the caller. Never mutated during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub name: String,
    pub current_role: Option<String>,
    pub years_experience: f64,
    pub tech_skill_rating: f64,
    pub soft_skill_rating: f64,
    pub performance_rating: f64,
    pub leadership_interest: String,
    pub domain_interest: String,
    pub career_goal: String,
}

impl MemberProfile {
    /// `true` when the leadership answer is "yes" or "y", ignoring case and padding.
    pub fn wants_leadership(&self) -> bool {
        matches!(
            self.leadership_interest.trim().to_lowercase().as_str(),
            "yes" | "y"
        )
    }

    /// Current role with blank values treated as absent.
    pub fn role_or_default(&self) -> &str {
        self.current_role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .unwrap_or("Professional")
    }

    pub(crate) fn domain_lowercase(&self) -> String {
        self.domain_interest.to_lowercase()
    }

    pub(crate) fn goal_lowercase(&self) -> String {
        self.career_goal.to_lowercase()
    }
}

/// Business sector applied uniformly to a whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum IndustryContext {
    Technology,
    Consulting,
    BankingFintech,
    Healthcare,
    RetailEcommerce,
    Manufacturing,
    Education,
    PublicSector,
}

impl IndustryContext {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Technology,
            Self::Consulting,
            Self::BankingFintech,
            Self::Healthcare,
            Self::RetailEcommerce,
            Self::Manufacturing,
            Self::Education,
            Self::PublicSector,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Consulting => "Consulting",
            Self::BankingFintech => "Banking / FinTech",
            Self::Healthcare => "Healthcare",
            Self::RetailEcommerce => "Retail / E-commerce",
            Self::Manufacturing => "Manufacturing",
            Self::Education => "Education",
            Self::PublicSector => "Public Sector/Government",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Consulting => "consulting",
            Self::BankingFintech => "banking_fintech",
            Self::Healthcare => "healthcare",
            Self::RetailEcommerce => "retail_ecommerce",
            Self::Manufacturing => "manufacturing",
            Self::Education => "education",
            Self::PublicSector => "public_sector",
        }
    }
}

impl fmt::Display for IndustryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown industry '{0}'")]
pub struct UnknownIndustry(pub String);

impl FromStr for IndustryContext {
    type Err = UnknownIndustry;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|industry| {
                industry.label().eq_ignore_ascii_case(trimmed)
                    || industry.key().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownIndustry(raw.to_string()))
    }
}

impl TryFrom<String> for IndustryContext {
    type Error = UnknownIndustry;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IndustryContext> for &'static str {
    fn from(value: IndustryContext) -> Self {
        value.label()
    }
}

/// Readiness on a 0-100 scale, held to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadinessScore(f64);

impl ReadinessScore {
    /// Rounds half away from zero to one decimal place. Ties are judged on the binary
    /// value of `raw * 10.0`: a computed value that should be a decimal tie but lands just
    /// below it (`4.1 + 0.05` is 4.1499...) rounds down.
    pub fn from_raw(raw: f64) -> Self {
        Self((raw * 10.0).round() / 10.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ReadinessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Free-text plan from the narrative collaborator, or the explicit unavailable marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum Narrative {
    Generated(String),
    Unavailable,
}

impl Narrative {
    pub fn as_text(&self) -> &str {
        match self {
            Narrative::Generated(text) => text,
            Narrative::Unavailable => NARRATIVE_UNAVAILABLE,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Narrative::Generated(_))
    }
}

/// Per-member output of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub profile: MemberProfile,
    pub score: ReadinessScore,
    pub next_role: String,
    pub actions: Vec<String>,
    pub matched_rules: Vec<String>,
    pub narrative: Narrative,
}

impl Recommendation {
    /// Actions rendered as a bullet list, one per line.
    pub fn actions_as_bullets(&self) -> String {
        bullet_join(&self.actions)
    }
}

pub(crate) fn bullet_join(actions: &[String]) -> String {
    if actions.is_empty() {
        return String::new();
    }
    format!("• {}", actions.join("\n• "))
}
