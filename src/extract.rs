use std::fmt;

use tracing::{debug, trace};

use crate::decode::decode;
use crate::matcher::matches;
use crate::reconstruct::reconstruct;
use crate::scan::{Scanned, Scanner};
use crate::types::{KeptRule, RequestedAction, Rule, Span};

/// Counters collected during one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Every rule marker found, commented-out ones included.
    pub scanned: usize,
    pub commented: usize,
    pub without_action: usize,
    pub kept: usize,
}

impl fmt::Display for ExtractStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scanned, {} commented out, {} without actions, {} kept",
            self.scanned, self.commented, self.without_action, self.kept,
        )
    }
}

/// Result of running the pipeline over a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Each kept rule's reconstruction followed by a blank line.
    pub output: String,
    /// Kept rules in document order.
    pub kept: Vec<KeptRule>,
    pub stats: ExtractStats,
}

impl Extraction {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

/// Scan `document`, decode each rule, and keep those whose actions cover `requested`.
///
/// ```
/// use rls_tool::{extract, RequestedAction};
///
/// let doc = "(0:a)=>{AddProp.state=on;}\n(0:b)=>{AddProp.state=off;}";
/// let result = extract(doc, &[RequestedAction::new("state", "on")]);
/// assert_eq!(result.output, "(0:a)=>{AddProp.state=on;}\n\n");
/// assert_eq!(result.kept.len(), 1);
/// ```
#[must_use]
pub fn extract(document: &str, requested: &[RequestedAction]) -> Extraction {
    let mut extraction = Extraction::default();

    for scanned in Scanner::new(document) {
        extraction.stats.scanned += 1;

        let candidate = match scanned {
            Scanned::Rule(candidate) => candidate,
            Scanned::Commented { .. } => {
                extraction.stats.commented += 1;
                continue;
            }
        };

        let rule = decode(candidate);
        if !rule.has_actions() {
            trace!(offset = rule.body.start, "rule has no action section");
            extraction.stats.without_action += 1;
            continue;
        }

        if !matches(&rule, requested) {
            continue;
        }

        let reconstruction = reconstruct(&rule);
        let span = removal_span(document, &rule, &reconstruction);
        extraction.output.push_str(&reconstruction);
        extraction.output.push_str("\n\n");
        extraction.kept.push(KeptRule {
            rule,
            reconstruction,
            span,
        });
    }

    extraction.stats.kept = extraction.kept.len();
    debug!(stats = %extraction.stats, "extraction finished");
    extraction
}

/// The rule's full span when the source there reads exactly as the
/// reconstruction, otherwise only its body.
fn removal_span(document: &str, rule: &Rule, reconstruction: &str) -> Span {
    if document.get(rule.span.range()) == Some(reconstruction) {
        rule.span
    } else {
        trace!(offset = rule.body.start, "metadata not reproduced, removal limited to body");
        rule.body
    }
}
