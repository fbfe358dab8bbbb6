//! Post-processing of an extraction: output naming, removing kept rules from
//! their source document, and splicing an include directive into it.

use tracing::{debug, warn};

use crate::config::{INCLUDE_DIRECTIVE, OUTPUT_EXTENSION, OUTPUT_PREFIX};
use crate::types::{KeptRule, RequestedAction};

/// File name for the rules extracted with `requested`.
///
/// Path separators in properties and values are written as `-`, so the name
/// is always a single path component.
///
/// ```
/// use rls_tool::{output_name, RequestedAction};
///
/// let name = output_name(&[RequestedAction::new("a", "1"), RequestedAction::new("b", "2")]);
/// assert_eq!(name, "rules_a_1_b_2.rls");
/// ```
#[must_use]
pub fn output_name(requested: &[RequestedAction]) -> String {
    let mut name = String::from(OUTPUT_PREFIX);
    for req in requested {
        name.push('_');
        push_component(&mut name, &req.property);
        name.push('_');
        push_component(&mut name, &req.value);
    }
    name.push('.');
    name.push_str(OUTPUT_EXTENSION);
    name
}

fn push_component(name: &mut String, part: &str) {
    name.extend(part.chars().map(|c| if matches!(c, '/' | '\\') { '-' } else { c }));
}

/// Remove every kept rule from `source`, the document they were extracted from.
///
/// Each rule's [`span`](KeptRule::span) is cut out once, and only when the
/// source text there is still the rule's [`removal_text`](KeptRule::removal_text).
/// Other spans are skipped. Returns the rewritten text and the number of rules
/// removed.
#[must_use]
pub fn remove_rules(source: &str, kept: &[KeptRule]) -> (String, usize) {
    let mut ordered: Vec<&KeptRule> = kept.iter().collect();
    ordered.sort_by_key(|k| k.span.start);

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut removed = 0;

    for rule in ordered {
        let span = rule.span;
        let fits =
            span.start >= cursor && source.get(span.range()) == Some(rule.removal_text());
        if !fits {
            warn!(
                start = span.start,
                end = span.end,
                "rule span does not match source, not removed"
            );
            continue;
        }
        out.push_str(&source[cursor..span.start]);
        cursor = span.end;
        removed += 1;
    }
    out.push_str(&source[cursor..]);

    debug!(removed, "removed kept rules from source");
    (out, removed)
}

/// Prepend an include directive referencing `output_name` to `source`.
///
/// ```
/// use rls_tool::splice_include;
///
/// assert_eq!(
///     splice_include("(0:a)=>{}", "rules_x_1.rls"),
///     "#include \"rules_x_1.rls\"\n(0:a)=>{}"
/// );
/// ```
#[must_use]
pub fn splice_include(source: &str, output_name: &str) -> String {
    format!("{INCLUDE_DIRECTIVE} \"{output_name}\"\n{source}")
}
