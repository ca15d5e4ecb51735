use super::profiles::{readiness_profile, ReadinessProfile, ReadinessProfileKey};
use super::questions::{max_raw_total, questions, AnswerValue, Dimension};
use crate::activation::ActivationContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Question id to selected answer value.
///
/// Values outside `0..=3` are ignored during scoring, as are ids that are not
/// part of the catalog.
pub type AnswersMap = BTreeMap<String, i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRating {
    pub dimension: Dimension,
    /// Sum of answered values, 0-9.
    pub raw: u32,
    /// Share of the answered maximum, rounded to the nearest 5.
    pub percent: u32,
    pub stars: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub raw_total: u32,
    pub percent: u32,
    pub overall_stars: u8,
    pub profile_key: ReadinessProfileKey,
    pub profile: &'static ReadinessProfile,
    pub dimensions: BTreeMap<Dimension, DimensionRating>,
    pub context: ActivationContext,
}

impl AssessmentOutcome {
    /// Narrative summary for the context the outcome was computed with.
    pub fn summary(&self) -> String {
        self.profile.summary(&self.context)
    }

    pub fn summary_for(&self, ctx: &ActivationContext) -> String {
        self.profile.summary(ctx)
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionRating> {
        self.dimensions.get(&dimension)
    }
}

/// Scores without the narrative profile attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScoreSummary {
    pub raw_total: u32,
    pub percent: u32,
    pub overall_stars: u8,
    pub dimensions: BTreeMap<Dimension, DimensionRating>,
}

fn valid_answer(answers: &AnswersMap, question_id: &str) -> Option<AnswerValue> {
    answers.get(question_id).copied().and_then(AnswerValue::new)
}

/// `round(value / 5) * 5` with halves rounding up.
fn round_to_nearest_five(value: f64) -> u32 {
    ((value / 5.0 + 0.5).floor() as u32) * 5
}

fn percent_of(raw: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let pct = (f64::from(raw) / f64::from(max)) * 100.0;
    round_to_nearest_five(pct)
}

/// Sum of valid answers across the catalog, 0-45.
pub fn compute_raw_total(answers: &AnswersMap) -> u32 {
    questions()
        .iter()
        .filter_map(|question| valid_answer(answers, question.id))
        .map(|value| u32::from(value.get()))
        .sum()
}

/// Overall percentage against the fixed maximum of 45.
pub fn compute_percent(raw_total: u32) -> u32 {
    percent_of(raw_total, max_raw_total())
}

pub fn compute_overall_stars(percent: u32) -> u8 {
    match percent {
        p if p < 20 => 1,
        p if p < 40 => 2,
        p if p < 60 => 3,
        p if p < 80 => 4,
        _ => 5,
    }
}

/// Raw 0-9 to stars: 0-1 => 1, 2-3 => 2, 4-5 => 3, 6-7 => 4, 8-9 => 5.
pub fn dimension_stars(raw: u32) -> u8 {
    match raw {
        0..=1 => 1,
        2..=3 => 2,
        4..=5 => 3,
        6..=7 => 4,
        _ => 5,
    }
}

/// Per-dimension ratings. The percentage is relative to the answered
/// questions only (answered x 3), not the fixed dimension maximum.
pub fn compute_dimension_ratings(answers: &AnswersMap) -> BTreeMap<Dimension, DimensionRating> {
    let mut sums: BTreeMap<Dimension, (u32, u32)> = Dimension::ordered()
        .into_iter()
        .map(|dimension| (dimension, (0, 0)))
        .collect();

    for question in questions() {
        let Some(value) = valid_answer(answers, question.id) else {
            continue;
        };
        let entry = sums.entry(question.dimension).or_default();
        entry.0 += u32::from(value.get());
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(dimension, (raw, answered))| {
            let max = answered * u32::from(AnswerValue::MAX.get());
            let rating = DimensionRating {
                dimension,
                raw,
                percent: percent_of(raw, max),
                stars: dimension_stars(raw),
            };
            (dimension, rating)
        })
        .collect()
}

/// Bands on the raw total; boundary values belong to the lower band.
pub fn classify_profile(raw_total: u32) -> ReadinessProfileKey {
    match raw_total {
        0..=11 => ReadinessProfileKey::Critical,
        12..=22 => ReadinessProfileKey::Fragmented,
        23..=33 => ReadinessProfileKey::Structured,
        _ => ReadinessProfileKey::Integrated,
    }
}

pub fn calculate_score_summary(answers: &AnswersMap) -> AssessmentScoreSummary {
    let raw_total = compute_raw_total(answers);
    let percent = compute_percent(raw_total);

    AssessmentScoreSummary {
        raw_total,
        percent,
        overall_stars: compute_overall_stars(percent),
        dimensions: compute_dimension_ratings(answers),
    }
}

pub fn calculate_assessment_outcome(
    answers: &AnswersMap,
    ctx: &ActivationContext,
) -> AssessmentOutcome {
    let AssessmentScoreSummary {
        raw_total,
        percent,
        overall_stars,
        dimensions,
    } = calculate_score_summary(answers);
    let profile_key = classify_profile(raw_total);

    AssessmentOutcome {
        raw_total,
        percent,
        overall_stars,
        profile_key,
        profile: readiness_profile(profile_key),
        dimensions,
        context: ctx.clone(),
    }
}

/// Number of catalog questions carrying a valid answer.
pub fn answered_count(answers: &AnswersMap) -> usize {
    questions()
        .iter()
        .filter(|question| valid_answer(answers, question.id).is_some())
        .count()
}

/// Catalog ids without a valid answer, in catalog order.
pub fn missing_questions(answers: &AnswersMap) -> Vec<&'static str> {
    questions()
        .iter()
        .filter(|question| valid_answer(answers, question.id).is_none())
        .map(|question| question.id)
        .collect()
}

pub fn is_complete(answers: &AnswersMap) -> bool {
    answered_count(answers) == questions().len()
}
