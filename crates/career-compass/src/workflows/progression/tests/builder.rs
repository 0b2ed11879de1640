use super::common::*;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::workflows::progression::{
    ActionRuleEngine, CachedNarrator, IndustryContext, Narrative, RecommendationBuilder,
    LEADERSHIP_TRACK_ROLE, NARRATIVE_UNAVAILABLE, UPSKILL_ROLE,
};

#[tokio::test]
async fn build_returns_one_recommendation_per_member_in_roster_order() {
    let roster = vec![top_performer("Asha"), newcomer("Ben"), profile("Cara")];
    let builder = RecommendationBuilder::default();

    let recommendations = builder.build(&roster, IndustryContext::Technology).await;

    let names: Vec<&str> = recommendations
        .iter()
        .map(|recommendation| recommendation.profile.name.as_str())
        .collect();
    assert_eq!(names, vec!["Asha", "Ben", "Cara"]);
    assert_eq!(recommendations[0].next_role, LEADERSHIP_TRACK_ROLE);
    assert_eq!(recommendations[1].next_role, UPSKILL_ROLE);
    assert_eq!(recommendations[2].next_role, "Mid-level Software Engineer");
    assert_eq!(recommendations[2].score.value(), 63.0);
}

#[tokio::test]
async fn empty_roster_yields_no_recommendations() {
    let narrator = Arc::new(EchoNarrator::default());
    let builder = builder_with(narrator.clone());

    let recommendations = builder.build(&[], IndustryContext::Education).await;

    assert!(recommendations.is_empty());
    assert_eq!(narrator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_narrator_marks_every_narrative_unavailable() {
    let builder = RecommendationBuilder::default();
    assert!(!builder.has_narrator());

    let recommendations = builder
        .build(&[profile("Asha"), profile("Ben")], IndustryContext::Consulting)
        .await;

    for recommendation in &recommendations {
        assert_eq!(recommendation.narrative, Narrative::Unavailable);
        assert_eq!(recommendation.narrative.as_text(), NARRATIVE_UNAVAILABLE);
        assert!(!recommendation.actions.is_empty());
    }
}

#[tokio::test]
async fn narrative_failure_is_isolated_to_one_member() {
    let builder = builder_with(Arc::new(FailingFor("Ben")));
    let roster = vec![profile("Asha"), profile("Ben"), profile("Cara")];

    let recommendations = builder.build(&roster, IndustryContext::Healthcare).await;

    assert_eq!(
        recommendations[0].narrative,
        Narrative::Generated("30-60-90 plan".to_string())
    );
    assert_eq!(recommendations[1].narrative, Narrative::Unavailable);
    assert_eq!(
        recommendations[2].narrative,
        Narrative::Generated("30-60-90 plan".to_string())
    );
    assert_eq!(recommendations[1].score, recommendations[0].score);
    assert_eq!(recommendations[1].actions, recommendations[0].actions);
}

#[tokio::test]
async fn narrator_receives_profile_text_and_industry_label() {
    let narrator = Arc::new(EchoNarrator::default());
    let builder = builder_with(narrator.clone());

    let recommendation = builder
        .recommend(&profile("Asha"), IndustryContext::BankingFintech)
        .await;

    assert_eq!(
        recommendation.narrative,
        Narrative::Generated("Plan for Name: Asha".to_string())
    );
    assert_eq!(narrator.calls.load(Ordering::SeqCst), 1);
    let industries = narrator.industries.lock().expect("industries mutex poisoned");
    assert_eq!(industries.as_slice(), ["Banking / FinTech".to_string()]);
}

#[tokio::test]
async fn cached_narrator_skips_repeat_calls_for_identical_members() {
    let inner = Arc::new(EchoNarrator::default());
    let builder = builder_with(Arc::new(CachedNarrator::new(inner.clone())));
    let roster = vec![profile("Asha"), profile("Asha"), profile("Ben")];

    let recommendations = builder.build(&roster, IndustryContext::Technology).await;

    assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    assert_eq!(recommendations[0].narrative, recommendations[1].narrative);
    assert!(recommendations
        .iter()
        .all(|recommendation| recommendation.narrative.is_generated()));
}

#[test]
fn assess_matches_the_recommendation_without_narrative() {
    let mut member = profile("Dee");
    member.domain_interest = "Cloud".to_string();
    let builder = RecommendationBuilder::new(ActionRuleEngine::standard());

    let assessment = builder.assess(&member, IndustryContext::RetailEcommerce);

    assert_eq!(assessment.score.value(), 63.0);
    assert_eq!(
        assessment.matched_rules,
        vec!["band_consolidate", "domain_cloud", "industry_retail_ecommerce"]
    );
    assert_eq!(assessment.next_role, "Mid-level Software Engineer");
}

#[tokio::test]
async fn profile_is_returned_unchanged() {
    let mut member = profile("Eli");
    member.career_goal = "  Architect  ".to_string();
    member.leadership_interest = " YES ".to_string();

    let recommendation = RecommendationBuilder::default()
        .recommend(&member, IndustryContext::Manufacturing)
        .await;

    assert_eq!(recommendation.profile, member);
}
