//! Splits a scanned rule into condition and action text and decodes the
//! property assignments in its action section.

mod error;
mod grammar;

use tracing::trace;
use winnow::Parser;

pub use error::DecodeError;

use crate::config::{ACTION_CLOSE, ACTION_OPEN, ACTION_SEPARATOR, STATEMENT_SEPARATOR};
use crate::scan::ScannedRule;
use crate::types::{Action, ActionKind, Rule};

/// Decode a scanned rule.
///
/// The rule text is split on the first `=>`. Without a separator the rule has
/// no action section and `action_text` is `None`.
#[must_use]
pub fn decode(scanned: ScannedRule<'_>) -> Rule {
    let (condition, action_text) = match scanned.text.split_once(ACTION_SEPARATOR) {
        Some((condition, actions)) => (condition, Some(actions)),
        None => (scanned.text, None),
    };

    let actions = action_text.map(decode_actions).unwrap_or_default();

    Rule {
        text: scanned.text.to_owned(),
        weight: scanned.weight,
        comment: scanned.comment.map(str::to_owned),
        condition: condition.to_owned(),
        action_text: action_text.map(str::to_owned),
        actions,
        span: scanned.span,
        body: scanned.body,
    }
}

/// Decode the statements of an action section such as `{AddProp.a=1;RemoveProp.b=2;}`.
///
/// Statements with an unrecognized operation or missing `=` are dropped.
#[must_use]
pub fn decode_actions(action_text: &str) -> Vec<Action> {
    let trimmed = action_text.trim();
    let inner = trimmed.strip_prefix(ACTION_OPEN).unwrap_or(trimmed);
    let inner = inner.strip_suffix(ACTION_CLOSE).unwrap_or(inner);

    inner
        .split(STATEMENT_SEPARATOR)
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .filter_map(|stmt| match parse_statement(stmt) {
            Ok(action) => Some(action),
            Err(e) => {
                trace!(statement = stmt, error = %e, "dropping action statement");
                None
            }
        })
        .collect()
}

/// Parse a single `Op.property=value` statement.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOperation`] if the operation is not
/// `AddProp`/`RemoveProp`, and [`DecodeError::MalformedStatement`] if the
/// statement lacks a property name or `=`.
pub fn parse_statement(statement: &str) -> Result<Action, DecodeError> {
    grammar::statement.parse(statement).map_err(|_| {
        let keyword = statement.split_once('.').map_or(statement, |(op, _)| op);
        let statement = statement.to_owned();
        match ActionKind::from_keyword(keyword.trim()) {
            Some(_) => DecodeError::MalformedStatement { statement },
            None => DecodeError::UnknownOperation { statement },
        }
    })
}

/// Parse the text between a weight annotation's angle brackets.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidWeight`] for anything that is not a finite number.
pub fn parse_weight(literal: &str) -> Result<f64, DecodeError> {
    grammar::weight_literal
        .parse(literal)
        .map_err(|_| DecodeError::InvalidWeight {
            literal: literal.to_owned(),
        })
}
