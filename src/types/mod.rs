mod action;
mod rule;

pub use action::{Action, ActionKind, RequestedAction};
pub use rule::{KeptRule, Rule, Span};
