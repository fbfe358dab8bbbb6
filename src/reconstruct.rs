use std::fmt;

use crate::config::{COMMENT_TOKEN, DEFAULT_WEIGHT, WEIGHT_CLOSE, WEIGHT_OPEN};
use crate::types::Rule;

/// Serialize a rule back to rule-file text: sentence cloud line, weight
/// annotation, then the rule body verbatim.
///
/// A weight of zero or [`DEFAULT_WEIGHT`] is not written out.
#[must_use]
pub fn reconstruct(rule: &Rule) -> String {
    rule.to_string()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, "{COMMENT_TOKEN}{comment}")?;
        }
        if let Some(weight) = self.weight.filter(|w| *w != 0.0 && *w != DEFAULT_WEIGHT) {
            write!(f, "{WEIGHT_OPEN}{weight}{WEIGHT_CLOSE} ")?;
        }
        f.write_str(&self.text)
    }
}
