use crate::activation::ActivationContext;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

/// Byte range of a personalized term inside a rendered summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Ordered slice of the summary; concatenating all segments yields the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarySegment {
    pub text: String,
    pub highlighted: bool,
}

fn term_pattern(ctx: &ActivationContext) -> Option<Regex> {
    let terms: Vec<String> = ctx
        .terms()
        .into_iter()
        .filter(|term| !term.is_empty())
        .map(regex::escape)
        .collect();

    if terms.is_empty() {
        return None;
    }

    let pattern = format!("({})", terms.join("|"));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(err) => {
            warn!(%err, "unable to build summary highlight pattern");
            None
        }
    }
}

/// Case-insensitive matches of any non-empty context value.
///
/// A single alternation pass is used, so at each position the first listed
/// term that matches wins and matches never nest.
pub fn highlight_spans(summary: &str, ctx: &ActivationContext) -> Vec<HighlightSpan> {
    let Some(pattern) = term_pattern(ctx) else {
        return Vec::new();
    };

    pattern
        .find_iter(summary)
        .map(|found| HighlightSpan {
            start: found.start(),
            end: found.end(),
            text: found.as_str().to_string(),
        })
        .collect()
}

pub fn highlight_segments(summary: &str, ctx: &ActivationContext) -> Vec<SummarySegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in highlight_spans(summary, ctx) {
        if span.start > cursor {
            segments.push(SummarySegment {
                text: summary[cursor..span.start].to_string(),
                highlighted: false,
            });
        }
        segments.push(SummarySegment {
            text: span.text,
            highlighted: true,
        });
        cursor = span.end;
    }

    if cursor < summary.len() {
        segments.push(SummarySegment {
            text: summary[cursor..].to_string(),
            highlighted: false,
        });
    }

    segments
}
