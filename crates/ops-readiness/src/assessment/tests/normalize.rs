use crate::assessment::{compute_raw_total, normalize_answers, AnswerScale, RawAnswer};
use std::collections::BTreeMap;

fn raw(pairs: &[(&str, RawAnswer)]) -> BTreeMap<String, RawAnswer> {
    pairs
        .iter()
        .map(|(id, answer)| (id.to_string(), answer.clone()))
        .collect()
}

#[test]
fn legacy_scale_shifts_one_to_four_down() {
    let submitted = raw(&[
        ("q1", RawAnswer::Integer(4)),
        ("q2", RawAnswer::Integer(1)),
        ("q3", RawAnswer::Integer(0)),
        ("q4", RawAnswer::Text("3".to_string())),
        ("q5", RawAnswer::Integer(5)),
    ]);

    let answers = normalize_answers(&submitted, AnswerScale::Legacy);

    assert_eq!(answers.get("q1"), Some(&3));
    assert_eq!(answers.get("q2"), Some(&0));
    assert_eq!(answers.get("q3"), Some(&0));
    assert_eq!(answers.get("q4"), Some(&2));
    assert!(!answers.contains_key("q5"));
}

#[test]
fn zero_based_scale_keeps_integral_values() {
    let submitted = raw(&[
        ("q1", RawAnswer::Decimal(2.0)),
        ("q2", RawAnswer::Decimal(2.5)),
        ("q3", RawAnswer::Text(" 1 ".to_string())),
        ("q4", RawAnswer::Text("often".to_string())),
        ("q5", RawAnswer::Integer(7)),
    ]);

    let answers = normalize_answers(&submitted, AnswerScale::ZeroBased);

    assert_eq!(answers.get("q1"), Some(&2));
    assert!(!answers.contains_key("q2"));
    assert_eq!(answers.get("q3"), Some(&1));
    assert!(!answers.contains_key("q4"));
    assert_eq!(answers.get("q5"), Some(&7));
    assert_eq!(compute_raw_total(&answers), 3);
}

#[test]
fn raw_answers_deserialize_from_mixed_json() {
    let submitted: BTreeMap<String, RawAnswer> =
        serde_json::from_str(r#"{"q1": 3, "q2": "2", "q3": 1.0}"#).expect("valid json");

    assert_eq!(submitted["q1"], RawAnswer::Integer(3));
    assert_eq!(submitted["q2"], RawAnswer::Text("2".to_string()));
    assert_eq!(submitted["q3"].as_integer(), Some(1));
}

#[test]
fn scale_defaults_to_zero_based() {
    assert_eq!(AnswerScale::default(), AnswerScale::ZeroBased);
    let scale: AnswerScale = serde_json::from_str("\"legacy\"").expect("valid scale");
    assert_eq!(scale, AnswerScale::Legacy);
}

#[test]
fn null_answers_deserialize_and_are_skipped() {
    let submitted: BTreeMap<String, RawAnswer> =
        serde_json::from_str(r#"{"q1": null, "q2": 3}"#).expect("null is accepted");

    assert_eq!(submitted["q1"], RawAnswer::Null);
    assert_eq!(submitted["q1"].as_integer(), None);

    let answers = normalize_answers(&submitted, AnswerScale::ZeroBased);
    assert!(!answers.contains_key("q1"));
    assert_eq!(answers.get("q2"), Some(&3));
}

#[test]
fn blank_text_counts_as_unanswered_on_both_scales() {
    let submitted: BTreeMap<String, RawAnswer> =
        serde_json::from_str(r#"{"q1": "", "q2": 3, "q3": "   "}"#).expect("valid json");

    let legacy = normalize_answers(&submitted, AnswerScale::Legacy);
    assert_eq!(legacy.len(), 1);
    assert_eq!(legacy.get("q2"), Some(&2));

    let zero_based = normalize_answers(&submitted, AnswerScale::ZeroBased);
    assert_eq!(zero_based.len(), 1);
    assert_eq!(zero_based.get("q2"), Some(&3));
}
