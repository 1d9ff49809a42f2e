//! Verdict extraction from free-form model output.
//!
//! The response is expected to contain exactly one verdict sentinel, but
//! models leak example text and occasionally self-correct. The resolution
//! rules are applied in order:
//!
//! 1. Neither marker present → `Error::MalformedVerdict`.
//! 2. Exactly one marker present → that marker is the verdict.
//! 3. Both markers present → the one occurring LAST in the text wins,
//!    favoring a late self-correction over an earlier mention.
//!
//! Rule 3 is an inherited heuristic, not a correctness guarantee; it is
//! preserved exactly for compatibility. A structured verdict field in the
//! model output would remove this ambiguity class entirely.

use crate::prompt::{END_MARKER, FALSE_MARKER, TRUE_MARKER};
use veridic_core::error::Error;

/// Labels the prompt teaches the model to use; stripped from explanations.
const ANSWER_LABEL: &str = "Final Answer:";
const ANALYSIS_LABEL: &str = "Analysis:";

/// A parsed verdict with its cleaned-up justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVerdict {
    pub value: bool,
    pub explanation: String,
}

/// Apply the resolution rules to a raw response.
pub fn parse_verdict(response: &str) -> Result<ParsedVerdict, Error> {
    let last_true = response.rfind(TRUE_MARKER);
    let last_false = response.rfind(FALSE_MARKER);

    let value = match (last_true, last_false) {
        (None, None) => {
            return Err(Error::MalformedVerdict {
                response: response.to_string(),
            });
        }
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (Some(t), Some(f)) => t > f,
    };

    Ok(ParsedVerdict {
        value,
        explanation: strip_markup(response),
    })
}

/// Remove all sentinel markers and prompt labels, then trim.
fn strip_markup(response: &str) -> String {
    response
        .replace(TRUE_MARKER, "")
        .replace(FALSE_MARKER, "")
        .replace(END_MARKER, "")
        .replace(ANSWER_LABEL, "")
        .replace(ANALYSIS_LABEL, "")
        .trim()
        .to_string()
}
