use super::common::*;
use crate::assessment::{
    questions, questions_for, readiness_profile, readiness_profiles, AnswerValue, ColorTag,
    Dimension, ReadinessProfileKey, OPTIONS_PER_QUESTION, QUESTIONS_PER_DIMENSION,
};

#[test]
fn catalog_partitions_into_five_dimensions_of_three() {
    assert_eq!(questions().len(), 15);

    for dimension in Dimension::ordered() {
        let members: Vec<_> = questions_for(dimension).collect();
        assert_eq!(members.len(), QUESTIONS_PER_DIMENSION, "{dimension:?}");
        assert!(members
            .iter()
            .all(|question| question.section == dimension.section()));
    }
}

#[test]
fn options_are_ordered_worst_to_best() {
    for question in questions() {
        assert_eq!(question.options.len(), OPTIONS_PER_QUESTION);
        for (index, option) in question.options.iter().enumerate() {
            assert_eq!(usize::from(option.value.get()), index);
            assert_eq!(option.id, format!("{}o{}", question.id, index + 1));
        }
    }
}

#[test]
fn answer_values_stay_within_option_range() {
    assert_eq!(AnswerValue::new(0).map(AnswerValue::get), Some(0));
    assert_eq!(AnswerValue::new(3), Some(AnswerValue::MAX));
    assert_eq!(AnswerValue::new(-1), None);
    assert_eq!(AnswerValue::new(4), None);
}

#[test]
fn every_key_resolves_to_its_own_profile() {
    for key in ReadinessProfileKey::ordered() {
        assert_eq!(readiness_profile(key).key, key);
    }
    assert_eq!(readiness_profiles().len(), 4);
    assert_eq!(
        readiness_profile(ReadinessProfileKey::Critical).color_tag,
        ColorTag::Red
    );
    assert_eq!(
        readiness_profile(ReadinessProfileKey::Integrated).color_tag,
        ColorTag::Green
    );
}

#[test]
fn profile_keys_use_catalog_identifiers() {
    let json = serde_json::to_string(&ReadinessProfileKey::Fragmented).expect("serializes");
    assert_eq!(json, "\"p2_fragmented\"");

    let parsed: ReadinessProfileKey = "p3_structured".parse().expect("known key");
    assert_eq!(parsed, ReadinessProfileKey::Structured);
    assert!("p5_legendary".parse::<ReadinessProfileKey>().is_err());
}

#[test]
fn summaries_interpolate_every_context_field() {
    let ctx = nordlicht_context();

    for profile in readiness_profiles() {
        let summary = profile.summary(&ctx);
        assert!(summary.starts_with("Mara Lindqvist, "), "{:?}", profile.key);
        for term in ctx.terms() {
            assert!(summary.contains(term), "{:?} missing {term}", profile.key);
        }
    }
}

#[test]
fn profile_serialization_omits_summary_template() {
    let value = serde_json::to_value(readiness_profile(ReadinessProfileKey::Structured))
        .expect("serializes");

    assert_eq!(value["key"], "p3_structured");
    assert_eq!(value["operational_priority"], "Optimize & Scale");
    assert_eq!(value["unlocks"].as_array().map(Vec::len), Some(3));
    assert!(value.get("build_summary").is_none());
}
