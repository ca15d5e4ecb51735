use super::scoring::AnswersMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Scale the submitted answers were recorded on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerScale {
    /// 0-3, as the scoring engine expects.
    #[default]
    ZeroBased,
    /// 1-4 as stored by the earlier survey UI.
    Legacy,
}

/// Answer as it arrives from a form, a JSON document or a CSV cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Integer(i64),
    Decimal(f64),
    Text(String),
    /// JSON `null`, sent by forms for a question left unanswered.
    Null,
}

impl RawAnswer {
    /// Integral value, if the answer carries one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawAnswer::Integer(value) => Some(*value),
            RawAnswer::Decimal(value) => integral(*value),
            RawAnswer::Text(raw) => {
                let trimmed = raw.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
            }
            RawAnswer::Null => None,
        }
    }
}

impl From<i64> for RawAnswer {
    fn from(value: i64) -> Self {
        RawAnswer::Integer(value)
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        RawAnswer::Text(value.to_string())
    }
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 {
        Some(value as i64)
    } else {
        None
    }
}

fn rescale(value: i64, scale: AnswerScale) -> Option<i64> {
    match scale {
        AnswerScale::ZeroBased => Some(value),
        AnswerScale::Legacy => match value {
            1..=4 => Some(value - 1),
            0 => Some(0),
            _ => None,
        },
    }
}

/// Convert raw submissions into an [`AnswersMap`].
///
/// Non-numeric entries are dropped. Range checking is left to the scoring
/// engine, except on the legacy scale where only 0-4 can be mapped.
///
/// `null` and blank text are treated as unanswered on both scales. A blank
/// cell is not read as an answer of 0, so an empty CSV value never lowers a
/// legacy score.
pub fn normalize_answers(raw: &BTreeMap<String, RawAnswer>, scale: AnswerScale) -> AnswersMap {
    raw.iter()
        .filter_map(|(question_id, answer)| {
            let value = answer
                .as_integer()
                .and_then(|value| rescale(value, scale));
            if value.is_none() {
                debug!(question_id = %question_id, ?answer, ?scale, "dropping unusable answer");
            }
            value.map(|value| (question_id.clone(), value))
        })
        .collect()
}
