mod catalog;

use super::domain::{IndustryContext, MemberProfile, ReadinessScore};
use super::scoring::ScoreBand;
use serde::Serialize;
use std::collections::HashSet;

pub use catalog::STANDARD_RULES;

/// Predicate half of an action rule. Conditions only read the member's attributes,
/// the score, and the batch industry; never other rules' output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCondition {
    ScoreBand(ScoreBand),
    /// Any keyword appears (case-insensitive substring) in DomainInterest.
    DomainMentions(&'static [&'static str]),
    LeadershipInterest,
    /// Any keyword appears (case-insensitive substring) in CareerGoal.
    CareerGoalMentions(&'static [&'static str]),
    Industry(IndustryContext),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRule {
    pub key: &'static str,
    pub condition: RuleCondition,
    pub actions: &'static [&'static str],
}

/// Lower-cased view of the fields rules are matched against.
struct RuleInput {
    domain: String,
    goal: String,
    leadership: bool,
    band: ScoreBand,
    industry: IndustryContext,
}

impl RuleCondition {
    fn matches(&self, input: &RuleInput) -> bool {
        match self {
            RuleCondition::ScoreBand(band) => *band == input.band,
            RuleCondition::DomainMentions(keywords) => mentions(&input.domain, keywords),
            RuleCondition::LeadershipInterest => input.leadership,
            RuleCondition::CareerGoalMentions(keywords) => mentions(&input.goal, keywords),
            RuleCondition::Industry(industry) => *industry == input.industry,
        }
    }
}

fn mentions(haystack: &str, keywords: &[&str]) -> bool {
    !haystack.is_empty() && keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Deduplicated actions plus the keys of every rule that fired, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionPlan {
    pub actions: Vec<String>,
    pub matched_rules: Vec<&'static str>,
}

/// Evaluates an ordered table of independent rules; all matches contribute.
#[derive(Debug, Clone)]
pub struct ActionRuleEngine {
    rules: Vec<ActionRule>,
}

impl Default for ActionRuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl ActionRuleEngine {
    pub fn standard() -> Self {
        Self::with_rules(STANDARD_RULES.to_vec())
    }

    pub fn with_rules(rules: Vec<ActionRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ActionRule] {
        &self.rules
    }

    pub fn evaluate(
        &self,
        profile: &MemberProfile,
        score: ReadinessScore,
        industry: IndustryContext,
    ) -> ActionPlan {
        let input = RuleInput {
            domain: profile.domain_lowercase(),
            goal: profile.goal_lowercase(),
            leadership: profile.wants_leadership(),
            band: ScoreBand::for_score(score),
            industry,
        };

        let mut plan = ActionPlan::default();
        let mut seen: HashSet<&'static str> = HashSet::new();

        for rule in self.rules.iter().filter(|rule| rule.condition.matches(&input)) {
            plan.matched_rules.push(rule.key);
            for action in rule.actions {
                if seen.insert(*action) {
                    plan.actions.push((*action).to_string());
                }
            }
        }

        plan
    }

    pub fn derive_actions(
        &self,
        profile: &MemberProfile,
        score: ReadinessScore,
        industry: IndustryContext,
    ) -> Vec<String> {
        self.evaluate(profile, score, industry).actions
    }
}

/// Convenience wrapper over the standard rule table.
pub fn derive_actions(
    profile: &MemberProfile,
    score: ReadinessScore,
    industry: IndustryContext,
) -> Vec<String> {
    ActionRuleEngine::standard().derive_actions(profile, score, industry)
}
