//! Operational readiness assessment: question catalog, scoring, narrative
//! profiles and the adapters that turn submitted answer sheets into an
//! [`AnswersMap`].

mod highlight;
mod import;
mod normalize;
mod profiles;
mod questions;
mod scoring;

#[cfg(test)]
mod tests;

pub use highlight::{highlight_segments, highlight_spans, HighlightSpan, SummarySegment};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use normalize::{normalize_answers, AnswerScale, RawAnswer};
pub use profiles::{
    readiness_profile, readiness_profiles, ColorTag, ReadinessProfile, ReadinessProfileKey,
    UnknownProfileKey,
};
pub use questions::{
    max_raw_total, question, questions, questions_for, AnswerOption, AnswerValue, Dimension,
    Question, OPTIONS_PER_QUESTION, QUESTIONS_PER_DIMENSION,
};
pub use scoring::{
    answered_count, calculate_assessment_outcome, calculate_score_summary, classify_profile,
    compute_dimension_ratings, compute_overall_stars, compute_percent, compute_raw_total,
    dimension_stars, is_complete, missing_questions, AnswersMap, AssessmentOutcome,
    AssessmentScoreSummary, DimensionRating,
};
