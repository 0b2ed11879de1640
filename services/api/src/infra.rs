use career_compass::config::RecommendationConfig;
use career_compass::error::AppError;
use career_compass::workflows::progression::{
    CachedNarrator, IndustryContext, NarrativeGenerator, OpenAiNarrator, RecommendationBuilder,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builder wired to the configured narrative backend, if any. Narratives are memoised
/// for the life of the process.
pub(crate) fn recommendation_builder(
    config: &RecommendationConfig,
    with_narrative: bool,
) -> Result<RecommendationBuilder, AppError> {
    let builder = RecommendationBuilder::default();
    if !with_narrative {
        return Ok(builder);
    }

    let Some(narrative) = config.narrative.clone() else {
        warn!("narratives requested but APP_NARRATIVE_URL is not set; continuing without them");
        return Ok(builder);
    };

    let narrator: Arc<dyn NarrativeGenerator> = Arc::new(CachedNarrator::new(Arc::new(
        OpenAiNarrator::new(narrative)?,
    )));
    Ok(builder.with_narrator(narrator))
}

pub(crate) fn parse_industry(raw: &str) -> Result<IndustryContext, String> {
    raw.parse::<IndustryContext>().map_err(|err| {
        let known: Vec<&str> = IndustryContext::ordered()
            .into_iter()
            .map(IndustryContext::label)
            .collect();
        format!("{err}; expected one of: {}", known.join(", "))
    })
}
