use crate::types::{RequestedAction, Rule};

/// Returns true if every requested pair is assigned somewhere in the rule's actions.
///
/// Each requested pair is checked independently, so a duplicated request is
/// satisfied by a single action. An empty request matches any rule with an
/// action section; a rule without one never matches.
#[must_use]
pub fn matches(rule: &Rule, requested: &[RequestedAction]) -> bool {
    if !rule.has_actions() {
        return false;
    }
    let hits = requested
        .iter()
        .filter(|req| rule.actions.iter().any(|action| action.satisfies(req)))
        .count();
    hits >= requested.len()
}
