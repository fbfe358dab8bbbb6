use std::ops::Range;

use super::action::Action;
use crate::config::DEFAULT_WEIGHT;

/// A half-open byte range `[start, end)` into the document a rule was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A decoded rule.
///
/// Produced by [`decode`](crate::decode::decode) from a
/// [`ScannedRule`](crate::scan::ScannedRule). `text` is the rule body exactly as
/// it appears in the source, from the `(0:` marker through the closing brace.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub text: String,
    /// Weight annotation, `None` when absent or unparseable.
    pub weight: Option<f64>,
    /// Sentence cloud: everything after `//` on the line above the rule.
    pub comment: Option<String>,
    pub condition: String,
    /// Everything after `=>`, or `None` if the rule has no action section.
    pub action_text: Option<String>,
    pub actions: Vec<Action>,
    /// Comment line and weight annotation through the closing brace.
    pub span: Span,
    /// `text` alone.
    pub body: Span,
}

impl Rule {
    /// Effective weight, falling back to [`DEFAULT_WEIGHT`] when no annotation was written.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    #[must_use]
    pub fn has_actions(&self) -> bool {
        self.action_text.is_some()
    }
}

/// A rule that survived filtering, together with its serialized form.
#[derive(Debug, Clone, PartialEq)]
pub struct KeptRule {
    pub rule: Rule,
    pub reconstruction: String,
    /// Source range removed for this rule. Covers the sentence cloud and
    /// weight only when that source text is exactly `reconstruction`,
    /// otherwise just the rule body.
    pub span: Span,
}

impl KeptRule {
    /// Text expected at `span` in the source document.
    #[must_use]
    pub fn removal_text(&self) -> &str {
        if self.span == self.rule.body {
            &self.rule.text
        } else {
            &self.reconstruction
        }
    }
}
