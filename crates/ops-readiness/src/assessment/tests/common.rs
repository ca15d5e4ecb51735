use crate::activation::ActivationContext;
use crate::assessment::{questions, AnswersMap};

pub(super) fn uniform_answers(value: i64) -> AnswersMap {
    questions()
        .iter()
        .map(|question| (question.id.to_string(), value))
        .collect()
}

pub(super) fn answers_from(pairs: &[(&str, i64)]) -> AnswersMap {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

/// Fills questions in catalog order with the best answer until `total` is reached.
pub(super) fn answers_with_total(total: u32) -> AnswersMap {
    let mut remaining = total as i64;
    let mut answers = AnswersMap::new();
    for question in questions() {
        if remaining == 0 {
            break;
        }
        let value = remaining.min(3);
        answers.insert(question.id.to_string(), value);
        remaining -= value;
    }
    answers
}

pub(super) fn nordlicht_context() -> ActivationContext {
    ActivationContext::new(
        "Mara Lindqvist",
        "Nordlicht Supply",
        "Wholesale Distribution",
        "Sweden",
    )
}
