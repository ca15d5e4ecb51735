use ops_readiness::assessment::{
    calculate_assessment_outcome, highlight_spans, is_complete, missing_questions,
    normalize_answers, questions, readiness_profiles, AnswerScale, AnswerSheetImporter,
    ReadinessProfileKey,
};
use ops_readiness::roi::{calculate_roi, RoiPreset, RoiScenario};
use ops_readiness::ActivationContext;
use std::io::Cursor;

fn answer_sheet(values: &[u8]) -> String {
    let mut sheet = String::from("question_id,value\n");
    for (question, value) in questions().iter().zip(values) {
        sheet.push_str(&format!("{},{}\n", question.id, value));
    }
    sheet
}

#[test]
fn imported_legacy_sheet_flows_into_personalized_outcome() {
    let sheet = answer_sheet(&[1, 2, 1, 2, 1, 2, 1, 1, 2, 1, 1, 1, 2, 2, 1]);
    let raw = AnswerSheetImporter::from_reader(Cursor::new(sheet)).expect("sheet parses");
    let answers = normalize_answers(&raw, AnswerScale::Legacy);
    assert!(is_complete(&answers));

    let ctx = ActivationContext::new("Tomas", "Baltic Freight", "Logistics", "Lithuania");
    let outcome = calculate_assessment_outcome(&answers, &ctx);

    assert_eq!(outcome.raw_total, 6);
    assert_eq!(outcome.percent, 15);
    assert_eq!(outcome.overall_stars, 1);
    assert_eq!(outcome.profile_key, ReadinessProfileKey::Critical);
    assert_eq!(outcome.profile.emoji, "🟥");

    let summary = outcome.summary();
    let terms: Vec<String> = highlight_spans(&summary, &ctx)
        .into_iter()
        .map(|span| span.text)
        .collect();
    assert_eq!(terms, vec!["Tomas", "Baltic Freight", "Logistics", "Lithuania"]);
}

#[test]
fn partial_submission_reports_remaining_questions() {
    let raw = AnswerSheetImporter::from_reader(Cursor::new(answer_sheet(&[3, 3, 3])))
        .expect("sheet parses");
    let answers = normalize_answers(&raw, AnswerScale::ZeroBased);

    let missing = missing_questions(&answers);
    assert_eq!(missing.len(), 12);
    assert_eq!(missing.first(), Some(&"q4"));

    let outcome = calculate_assessment_outcome(&answers, &ActivationContext::default());
    assert_eq!(outcome.raw_total, 9);
    assert_eq!(outcome.percent, 20);
    assert!(outcome.summary().contains("Your Company"));
}

#[test]
fn every_profile_has_complete_narrative() {
    for profile in readiness_profiles() {
        assert_eq!(profile.upsides.len(), 3, "{}", profile.key);
        assert!(!profile.downsides.is_empty(), "{}", profile.key);
        assert!(!profile.future_outlook.is_empty(), "{}", profile.key);
        assert!(!profile.unlocks.is_empty(), "{}", profile.key);
        assert!(!profile.primary_cta_label.is_empty(), "{}", profile.key);
    }
}

#[test]
fn balanced_preset_reproduces_reference_projection() {
    let result = calculate_roi(&RoiPreset::Balanced.inputs(), RoiScenario::Expected);

    assert!((result.totals.total_savings_year - 522_437.5).abs() < 1e-6);
    assert!((result.totals.net_savings_year - 498_437.5).abs() < 1e-6);

    let json = serde_json::to_value(result).expect("serializes");
    assert_eq!(json["scenario"], "expected");
}
