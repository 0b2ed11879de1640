use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::progression::{
    MemberProfile, NarrativeError, NarrativeGenerator, RecommendationBuilder,
};

pub(super) fn profile(name: &str) -> MemberProfile {
    MemberProfile {
        name: name.to_string(),
        current_role: Some("Software Engineer".to_string()),
        years_experience: 5.0,
        tech_skill_rating: 4.0,
        soft_skill_rating: 3.0,
        performance_rating: 4.0,
        leadership_interest: "No".to_string(),
        domain_interest: String::new(),
        career_goal: String::new(),
    }
}

pub(super) fn top_performer(name: &str) -> MemberProfile {
    MemberProfile {
        years_experience: 10.0,
        tech_skill_rating: 5.0,
        soft_skill_rating: 5.0,
        performance_rating: 5.0,
        leadership_interest: "Yes".to_string(),
        ..profile(name)
    }
}

pub(super) fn newcomer(name: &str) -> MemberProfile {
    MemberProfile {
        years_experience: 0.0,
        tech_skill_rating: 0.0,
        soft_skill_rating: 0.0,
        performance_rating: 0.0,
        ..profile(name)
    }
}

pub(super) const ROSTER_CSV: &str = "Name,CurrentRole,YearsExperience,TechSkillRating,SoftSkillRating,PerformanceRating,LeadershipInterest,DomainInterest,CareerGoal\n\
Asha,Developer,10,5,5,5,Yes,\"Data Analytics, Agile\",Engineering manager\n\
Ben,QA Engineer,3,3,3,3,No,Test automation,\n";

/// Echoes a fixed narrative and counts calls.
#[derive(Default)]
pub(super) struct EchoNarrator {
    pub(super) calls: AtomicUsize,
    pub(super) industries: Mutex<Vec<String>>,
}

#[async_trait]
impl NarrativeGenerator for EchoNarrator {
    async fn generate(&self, profile_text: &str, industry: &str) -> Result<String, NarrativeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.industries
            .lock()
            .expect("industries mutex poisoned")
            .push(industry.to_string());
        let first_line = profile_text.lines().next().unwrap_or_default();
        Ok(format!("Plan for {first_line}"))
    }
}

/// Fails for any profile whose text mentions the given name.
pub(super) struct FailingFor(pub(super) &'static str);

#[async_trait]
impl NarrativeGenerator for FailingFor {
    async fn generate(
        &self,
        profile_text: &str,
        _industry: &str,
    ) -> Result<String, NarrativeError> {
        if profile_text.contains(self.0) {
            Err(NarrativeError::Timeout)
        } else {
            Ok("30-60-90 plan".to_string())
        }
    }
}

pub(super) fn builder_with(narrator: Arc<dyn NarrativeGenerator>) -> RecommendationBuilder {
    RecommendationBuilder::default().with_narrator(narrator)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
