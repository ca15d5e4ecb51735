use ops_readiness::assessment::{
    calculate_assessment_outcome, highlight_segments, normalize_answers, questions, AnswerScale,
    AnswersMap, Dimension, RawAnswer, ReadinessProfileKey,
};
use ops_readiness::ActivationContext;
use std::collections::BTreeMap;

fn sectioned_answers(per_section: [i64; 5]) -> AnswersMap {
    questions()
        .iter()
        .map(|question| {
            let value = per_section[usize::from(question.section) - 1];
            (question.id.to_string(), value)
        })
        .collect()
}

#[test]
fn uneven_operations_yield_structured_profile_with_dimension_detail() {
    let answers = sectioned_answers([3, 2, 2, 1, 2]);
    let ctx = ActivationContext::new("Jonas", "Kraftwerk Retail", "Home & Garden", "Germany");

    let outcome = calculate_assessment_outcome(&answers, &ctx);

    assert_eq!(outcome.raw_total, 30);
    assert_eq!(outcome.percent, 65);
    assert_eq!(outcome.overall_stars, 4);
    assert_eq!(outcome.profile_key, ReadinessProfileKey::Structured);
    assert_eq!(outcome.profile.operational_priority, "Optimize & Scale");

    let inventory = outcome
        .dimension(Dimension::InventoryVisibility)
        .expect("inventory rating");
    assert_eq!((inventory.raw, inventory.percent, inventory.stars), (9, 100, 5));

    let integration = outcome
        .dimension(Dimension::MultichannelIntegration)
        .expect("integration rating");
    assert_eq!(
        (integration.raw, integration.percent, integration.stars),
        (3, 35, 2)
    );
}

#[test]
fn legacy_survey_export_scores_like_zero_based_answers() {
    let legacy: BTreeMap<String, RawAnswer> = questions()
        .iter()
        .map(|question| (question.id.to_string(), RawAnswer::Integer(3)))
        .collect();

    let answers = normalize_answers(&legacy, AnswerScale::Legacy);
    let outcome = calculate_assessment_outcome(&answers, &ActivationContext::default());

    assert_eq!(outcome.raw_total, 30);
    assert_eq!(outcome.profile_key, ReadinessProfileKey::Structured);
}

#[test]
fn outcome_serializes_with_profile_content_and_dimension_keys() {
    let outcome =
        calculate_assessment_outcome(&sectioned_answers([0; 5]), &ActivationContext::default());

    let value = serde_json::to_value(&outcome).expect("outcome serializes");

    assert_eq!(value["profile_key"], "p1_critical");
    assert_eq!(value["profile"]["label"], "Critical Risk Zone");
    assert_eq!(value["profile"]["color_tag"], "red");
    assert_eq!(value["dimensions"]["warehouse_operations"]["stars"], 1);
    assert_eq!(value["context"]["company_name"], "Your Company");
}

#[test]
fn rendered_summary_highlights_personalized_terms() {
    let ctx = ActivationContext::new("Priya", "Lotus Foods", "Grocery", "India");
    let outcome = calculate_assessment_outcome(&sectioned_answers([1; 5]), &ctx);

    let highlighted: Vec<String> = highlight_segments(&outcome.summary(), &ctx)
        .into_iter()
        .filter(|segment| segment.highlighted)
        .map(|segment| segment.text)
        .collect();

    assert_eq!(highlighted, vec!["Priya", "Lotus Foods", "Grocery", "India"]);
}
