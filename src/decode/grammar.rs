use winnow::ascii::{float, space0};
use winnow::combinator::{alt, delimited};
use winnow::error::{ErrMode, ModalResult};
use winnow::prelude::*;
use winnow::token::{rest, take_till};

use crate::types::{Action, ActionKind};

/// Trailing characters stripped from a statement's value.
const TERMINATORS: &[char] = &[';', ')'];

// -- Weight -----------------------------------------------------------------

/// The text between `<` and `>`: a finite float, optionally padded with spaces.
pub fn weight_literal(input: &mut &str) -> ModalResult<f64> {
    delimited(space0, float, space0)
        .verify(|w: &f64| w.is_finite())
        .parse_next(input)
}

// -- Statements -------------------------------------------------------------

fn action_kind(input: &mut &str) -> ModalResult<ActionKind> {
    alt((
        "AddProp".value(ActionKind::AddProperty),
        "RemoveProp".value(ActionKind::RemoveProperty),
    ))
    .parse_next(input)
}

fn property<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let name = take_till(1.., '=').parse_next(input)?.trim();
    if name.is_empty() {
        return Err(ErrMode::from_input(input));
    }
    Ok(name)
}

fn value<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let raw = rest.parse_next(input)?.trim_end();
    Ok(raw.strip_suffix(TERMINATORS).unwrap_or(raw).trim())
}

/// `AddProp.name=value` or `RemoveProp.name=value`, already split off at `;`
/// and trimmed.
pub fn statement(input: &mut &str) -> ModalResult<Action> {
    let kind = action_kind.parse_next(input)?;
    '.'.parse_next(input)?;
    let name = property.parse_next(input)?;
    '='.parse_next(input)?;
    let val = value.parse_next(input)?;
    Ok(Action::new(kind, name, val))
}
