use crate::infra::{demo_answers, demo_context, resolve_inputs, resolve_scenario, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use ops_readiness::assessment::{
    answered_count, calculate_assessment_outcome, highlight_segments, highlight_spans,
    missing_questions, normalize_answers, questions, AnswerScale, AnswersMap, AssessmentOutcome,
    HighlightSpan, Question, RawAnswer, SummarySegment,
};
use ops_readiness::error::AppError;
use ops_readiness::roi::{
    calculate_roi, compare_scenarios, RoiInputs, RoiPreset, RoiResult, RoiScenario,
};
use ops_readiness::ActivationContext;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    #[serde(flatten)]
    pub(crate) question: &'static Question,
    pub(crate) dimension_label: &'static str,
    pub(crate) section_title: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) answers: BTreeMap<String, RawAnswer>,
    #[serde(default)]
    pub(crate) scale: AnswerScale,
    #[serde(default)]
    pub(crate) activation: Option<ActivationContext>,
    #[serde(default)]
    pub(crate) require_complete: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) outcome: AssessmentOutcome,
    pub(crate) summary: String,
    pub(crate) highlights: Vec<HighlightSpan>,
    pub(crate) segments: Vec<SummarySegment>,
    pub(crate) answered: usize,
    pub(crate) missing: Vec<&'static str>,
    pub(crate) generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PresetView {
    pub(crate) key: RoiPreset,
    pub(crate) label: &'static str,
    pub(crate) description: &'static str,
    pub(crate) inputs: RoiInputs,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RoiRequest {
    pub(crate) inputs: Option<RoiInputs>,
    pub(crate) preset: Option<RoiPreset>,
    pub(crate) scenario: Option<RoiScenario>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoiResponse {
    pub(crate) inputs: RoiInputs,
    pub(crate) result: RoiResult,
    pub(crate) generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoiComparisonResponse {
    pub(crate) inputs: RoiInputs,
    pub(crate) results: Vec<RoiResult>,
    pub(crate) generated_at: DateTime<Utc>,
}

pub(crate) fn portal_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/questions", get(questions_endpoint))
        .route("/api/v1/assessment/outcome", post(assessment_endpoint))
        .route("/api/v1/assessment/demo", get(demo_assessment_endpoint))
        .route("/api/v1/roi/presets", get(presets_endpoint))
        .route("/api/v1/roi", post(roi_endpoint))
        .route("/api/v1/roi/scenarios", post(roi_scenarios_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint() -> Json<Vec<QuestionView>> {
    let catalog = questions()
        .iter()
        .map(|question| QuestionView {
            question,
            dimension_label: question.dimension.label(),
            section_title: question.dimension.section_title(),
        })
        .collect();
    Json(catalog)
}

fn assessment_response(answers: &AnswersMap, ctx: &ActivationContext) -> AssessmentResponse {
    let outcome = calculate_assessment_outcome(answers, ctx);
    let summary = outcome.summary();
    let highlights = highlight_spans(&summary, ctx);
    let segments = highlight_segments(&summary, ctx);

    AssessmentResponse {
        summary,
        highlights,
        segments,
        answered: answered_count(answers),
        missing: missing_questions(answers),
        generated_at: Utc::now(),
        outcome,
    }
}

pub(crate) async fn assessment_endpoint(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest {
        answers,
        scale,
        activation,
        require_complete,
    } = payload;

    let answers = normalize_answers(&answers, scale);
    if answered_count(&answers) == 0 {
        return Err(AppError::Validation(
            "no valid answers submitted".to_string(),
        ));
    }

    let missing = missing_questions(&answers);
    if require_complete && !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "missing answers for {}",
            missing.join(", ")
        )));
    }

    let ctx = activation.unwrap_or_default().or_defaults();
    let response = assessment_response(&answers, &ctx);
    info!(
        profile = %response.outcome.profile_key,
        raw_total = response.outcome.raw_total,
        answered = response.answered,
        "assessment scored"
    );

    Ok(Json(response))
}

pub(crate) async fn demo_assessment_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<AssessmentResponse>, AppError> {
    if !state.portal.demo_mode {
        return Err(AppError::NotFound("demo assessment".to_string()));
    }

    Ok(Json(assessment_response(&demo_answers(), &demo_context())))
}

pub(crate) async fn presets_endpoint() -> Json<Vec<PresetView>> {
    let presets = RoiPreset::ordered()
        .into_iter()
        .map(|preset| PresetView {
            key: preset,
            label: preset.label(),
            description: preset.description(),
            inputs: preset.inputs(),
        })
        .collect();
    Json(presets)
}

pub(crate) async fn roi_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RoiRequest>,
) -> Result<Json<RoiResponse>, AppError> {
    let RoiRequest {
        inputs,
        preset,
        scenario,
    } = payload;

    let inputs = resolve_inputs(inputs, preset);
    let scenario = resolve_scenario(scenario, &state.portal);
    let result = calculate_roi(&inputs, scenario);
    info!(
        %scenario,
        total_savings_year = result.totals.total_savings_year,
        "roi projected"
    );

    Ok(Json(RoiResponse {
        inputs,
        result,
        generated_at: Utc::now(),
    }))
}

pub(crate) async fn roi_scenarios_endpoint(
    Json(payload): Json<RoiRequest>,
) -> Result<Json<RoiComparisonResponse>, AppError> {
    let inputs = resolve_inputs(payload.inputs, payload.preset);
    let results = compare_scenarios(&inputs).to_vec();

    Ok(Json(RoiComparisonResponse {
        inputs,
        results,
        generated_at: Utc::now(),
    }))
}
