use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::builder::RecommendationBuilder;
use super::domain::{IndustryContext, Recommendation};
use super::report::TeamSummary;
use crate::workflows::roster::{recommendations_to_csv, RosterImporter, RosterIssue};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationRequest {
    pub industry: IndustryContext,
    pub roster_csv: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub industry: IndustryContext,
    pub generated_on: NaiveDate,
    pub recommendations: Vec<Recommendation>,
    pub issues: Vec<RosterIssue>,
    pub summary: TeamSummary,
}

#[derive(Debug, Serialize)]
struct IndustryView {
    key: &'static str,
    label: &'static str,
}

/// Router builder exposing roster evaluation and export over HTTP.
pub fn recommendation_router(builder: Arc<RecommendationBuilder>) -> Router {
    Router::new()
        .route("/api/v1/industries", get(industries_handler))
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/recommendations/export", post(export_handler))
        .with_state(builder)
}

pub(crate) async fn industries_handler() -> Json<serde_json::Value> {
    let industries: Vec<IndustryView> = IndustryContext::ordered()
        .into_iter()
        .map(|industry| IndustryView {
            key: industry.key(),
            label: industry.label(),
        })
        .collect();
    Json(json!({ "industries": industries }))
}

pub(crate) async fn recommend_handler(
    State(builder): State<Arc<RecommendationBuilder>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let RecommendationRequest {
        industry,
        roster_csv,
    } = request;

    let import = match RosterImporter::from_reader(Cursor::new(roster_csv.into_bytes())) {
        Ok(import) => import,
        Err(err) => return bad_request(err.to_string()),
    };

    let recommendations = builder.build(&import.profiles, industry).await;
    let generated_on = Local::now().date_naive();
    let summary = TeamSummary::from_recommendations(industry, generated_on, &recommendations);

    let response = RecommendationResponse {
        industry,
        generated_on,
        recommendations,
        issues: import.issues,
        summary,
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn export_handler(
    State(builder): State<Arc<RecommendationBuilder>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let import = match RosterImporter::from_reader(Cursor::new(request.roster_csv.into_bytes())) {
        Ok(import) => import,
        Err(err) => return bad_request(err.to_string()),
    };

    let recommendations = builder.build(&import.profiles, request.industry).await;
    match recommendations_to_csv(&recommendations) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"career_recommendations.csv\"",
                ),
            ],
            body,
        )
            .into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn bad_request(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
