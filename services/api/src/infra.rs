use metrics_exporter_prometheus::PrometheusHandle;
use ops_readiness::assessment::{
    normalize_answers, questions, AnswerScale, AnswerSheetImporter, AnswersMap, RawAnswer,
};
use ops_readiness::config::PortalConfig;
use ops_readiness::error::AppError;
use ops_readiness::roi::{RoiInputs, RoiPreset, RoiScenario};
use ops_readiness::ActivationContext;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) portal: PortalConfig,
}

pub(crate) const DEMO_CONTACT_NAME: &str = "Demo User";
pub(crate) const DEMO_COMPANY_NAME: &str = "TechVision Solutions";
pub(crate) const DEMO_BUSINESS_TYPE: &str = "Technology & Software Development";
pub(crate) const DEMO_COUNTRY: &str = "United States";

/// Zero-based answers for the demo company, in catalog order.
const DEMO_ANSWER_VALUES: [i64; 15] = [3, 3, 2, 3, 3, 3, 2, 3, 3, 2, 3, 2, 3, 2, 2];

pub(crate) fn demo_context() -> ActivationContext {
    ActivationContext::new(
        DEMO_CONTACT_NAME,
        DEMO_COMPANY_NAME,
        DEMO_BUSINESS_TYPE,
        DEMO_COUNTRY,
    )
}

pub(crate) fn demo_answers() -> AnswersMap {
    questions()
        .iter()
        .zip(DEMO_ANSWER_VALUES)
        .map(|(question, value)| (question.id.to_string(), value))
        .collect()
}

pub(crate) fn parse_scenario(raw: &str) -> Result<RoiScenario, String> {
    raw.parse::<RoiScenario>().map_err(|err| err.to_string())
}

pub(crate) fn parse_preset(raw: &str) -> Result<RoiPreset, String> {
    raw.parse::<RoiPreset>().map_err(|err| err.to_string())
}

pub(crate) fn resolve_scenario(
    explicit: Option<RoiScenario>,
    portal: &PortalConfig,
) -> RoiScenario {
    explicit.unwrap_or(portal.default_scenario)
}

/// Scenario for CLI commands; the environment is read only when none was given.
pub(crate) fn scenario_or_configured(
    explicit: Option<RoiScenario>,
) -> Result<RoiScenario, AppError> {
    match explicit {
        Some(scenario) => Ok(scenario),
        None => Ok(PortalConfig::load()?.default_scenario),
    }
}

/// Explicit inputs take precedence over a preset, a preset over the baseline.
pub(crate) fn resolve_inputs(inputs: Option<RoiInputs>, preset: Option<RoiPreset>) -> RoiInputs {
    inputs
        .or_else(|| preset.map(RoiPreset::inputs))
        .unwrap_or_default()
}

pub(crate) fn load_answers_json(path: &Path, scale: AnswerScale) -> Result<AnswersMap, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let parsed: BTreeMap<String, RawAnswer> = serde_json::from_str(&raw)?;
    Ok(normalize_answers(&parsed, scale))
}

pub(crate) fn load_answers_csv(path: &Path, scale: AnswerScale) -> Result<AnswersMap, AppError> {
    let parsed = AnswerSheetImporter::from_path(path)?;
    Ok(normalize_answers(&parsed, scale))
}

pub(crate) fn load_inputs_json(path: &Path) -> Result<RoiInputs, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ops_readiness::assessment::{calculate_score_summary, is_complete};

    #[test]
    fn demo_answers_cover_the_catalog() {
        let answers = demo_answers();

        assert!(is_complete(&answers));
        let summary = calculate_score_summary(&answers);
        assert_eq!(summary.raw_total, 39);
        assert_eq!(summary.percent, 85);
    }

    #[test]
    fn explicit_inputs_win_over_preset() {
        let custom = RoiInputs {
            employees: 7.0,
            ..RoiInputs::default()
        };

        assert_eq!(resolve_inputs(Some(custom), Some(RoiPreset::Scale)), custom);
        assert_eq!(
            resolve_inputs(None, Some(RoiPreset::Lean)),
            RoiPreset::Lean.inputs()
        );
        assert_eq!(resolve_inputs(None, None), RoiInputs::default());
    }

    #[test]
    fn omitted_scenario_falls_back_to_configured_default() {
        let portal = PortalConfig {
            default_scenario: RoiScenario::Pessimistic,
            ..PortalConfig::default()
        };

        assert_eq!(resolve_scenario(None, &portal), RoiScenario::Pessimistic);
        assert_eq!(
            resolve_scenario(Some(RoiScenario::Optimistic), &portal),
            RoiScenario::Optimistic
        );
        assert_eq!(
            scenario_or_configured(Some(RoiScenario::Expected)).expect("explicit scenario"),
            RoiScenario::Expected
        );
    }

    #[test]
    fn value_parsers_report_unknown_names() {
        assert_eq!(parse_scenario("Optimistic"), Ok(RoiScenario::Optimistic));
        assert!(parse_preset("enterprise").is_err());
    }
}
