use super::common::*;
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::workflows::progression::narrative::coaching_prompt;
use crate::workflows::progression::{
    profile_text, CachedNarrator, Narrative, NarrativeError, NarrativeGenerator, ReadinessScore,
    NARRATIVE_UNAVAILABLE,
};

/// Fails on the first call, succeeds afterwards.
#[derive(Default)]
struct FlakyNarrator {
    calls: AtomicUsize,
}

#[async_trait]
impl NarrativeGenerator for FlakyNarrator {
    async fn generate(
        &self,
        _profile_text: &str,
        industry: &str,
    ) -> Result<String, NarrativeError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(NarrativeError::Status(503))
        } else {
            Ok(format!("{industry} plan"))
        }
    }
}

#[test]
fn profile_text_lists_attributes_score_and_suggested_role() {
    let mut member = profile("Asha");
    member.domain_interest = "Cloud".to_string();
    member.career_goal = "Architect".to_string();

    let text = profile_text(
        &member,
        ReadinessScore::from_raw(63.0),
        "Mid-level Software Engineer",
    );

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"Name: Asha"));
    assert!(lines.contains(&"Current role: Software Engineer"));
    assert!(lines.contains(&"Domain interest: Cloud"));
    assert!(lines.contains(&"Career goal: Architect"));
    assert!(lines.contains(&"Readiness score (0-100): 63.0"));
    assert_eq!(
        lines.last(),
        Some(&"Suggested next role (rule-based): Mid-level Software Engineer")
    );
}

#[test]
fn profile_text_leaves_absent_role_blank() {
    let mut member = newcomer("Ben");
    member.current_role = None;

    let text = profile_text(&member, ReadinessScore::from_raw(4.0), "Upskill");

    assert!(text.contains("Current role: \n"));
}

#[test]
fn coaching_prompt_embeds_industry_and_profile() {
    let prompt = coaching_prompt("Name: Asha", "Healthcare");

    assert!(prompt.contains("Industry: Healthcare"));
    assert!(prompt.contains("Profile:\nName: Asha"));
    assert!(prompt.contains("30-60-90 day development plan"));
}

#[tokio::test]
async fn cache_reuses_success_for_same_text_and_industry() {
    let inner = Arc::new(EchoNarrator::default());
    let cache = CachedNarrator::new(inner.clone());
    assert!(cache.is_empty());

    let first = cache.generate("Name: Asha", "Technology").await.expect("first");
    let second = cache.generate("Name: Asha", "Technology").await.expect("second");
    let other_industry = cache.generate("Name: Asha", "Education").await.expect("third");

    assert_eq!(first, second);
    assert_eq!(other_industry, "Plan for Name: Asha");
    assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn cache_does_not_remember_failures() {
    let inner = Arc::new(FlakyNarrator::default());
    let cache = CachedNarrator::new(inner.clone());

    let error = cache
        .generate("Name: Ben", "Consulting")
        .await
        .expect_err("first call fails");
    assert!(matches!(error, NarrativeError::Status(503)));
    assert!(cache.is_empty());

    let text = cache.generate("Name: Ben", "Consulting").await.expect("retry succeeds");
    assert_eq!(text, "Consulting plan");
    assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn narrative_serializes_with_status_tag() {
    let generated = serde_json::to_value(Narrative::Generated("Plan".to_string()))
        .expect("serialize generated");
    let unavailable = serde_json::to_value(Narrative::Unavailable).expect("serialize unavailable");

    assert_eq!(generated, json!({ "status": "generated", "text": "Plan" }));
    assert_eq!(unavailable, json!({ "status": "unavailable" }));
    assert_eq!(Narrative::Unavailable.as_text(), NARRATIVE_UNAVAILABLE);
}
