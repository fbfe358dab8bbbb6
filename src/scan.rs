//! Rule boundary scanning.
//!
//! The scanner does not parse the rule language. It looks for the literal
//! `(0:` marker, takes everything up to the first `}` after it, and reads the
//! weight annotation and sentence cloud from the text between the previous
//! rule and this one. Nested braces inside a rule end it early.

use tracing::{trace, warn};

use crate::config::{COMMENT_TOKEN, RULE_CLOSE, START_MARKER, WEIGHT_CLOSE, WEIGHT_OPEN};
use crate::decode::parse_weight;
use crate::types::Span;

/// A candidate rule sliced out of a document, before decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedRule<'a> {
    /// Marker through closing brace, inclusive.
    pub text: &'a str,
    pub weight: Option<f64>,
    pub comment: Option<&'a str>,
    pub span: Span,
    pub body: Span,
}

/// One item produced by the [`Scanner`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scanned<'a> {
    Rule(ScannedRule<'a>),
    /// A rule whose marker line carries `//` before the marker. Never decoded.
    Commented { body: Span },
}

impl Scanned<'_> {
    #[must_use]
    pub fn is_commented(&self) -> bool {
        matches!(self, Scanned::Commented { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningForMarker,
    ReadingToClose { marker: usize },
    ExtractingPrefixMetadata { marker: usize, end: usize },
    Done,
}

/// Iterator over the rules of a document, in document order.
///
/// ```
/// use rls_tool::scan::{Scanned, Scanner};
///
/// let doc = "<2> (0:a)=>{AddProp.x=1;}\n// (0:b)=>{AddProp.x=2;}";
/// let items: Vec<_> = Scanner::new(doc).collect();
/// assert_eq!(items.len(), 2);
/// assert!(matches!(&items[0], Scanned::Rule(r) if r.weight == Some(2.0)));
/// assert!(items[1].is_commented());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    document: &'a str,
    /// End of the previous rule; metadata is only read from text after it.
    cursor: usize,
    state: State,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(document: &'a str) -> Self {
        Self {
            document,
            cursor: 0,
            state: State::ScanningForMarker,
        }
    }

    fn extract(&self, marker: usize, end: usize) -> Scanned<'a> {
        let document = self.document;
        let body = Span::new(marker, end);
        let prefix = &document[self.cursor..marker];

        let (marker_line_start, marker_line) = match prefix.rfind('\n') {
            Some(nl) => (self.cursor + nl + 1, &prefix[nl + 1..]),
            None => (self.cursor, prefix),
        };

        if marker_line.contains(COMMENT_TOKEN) {
            trace!(offset = marker, "skipping commented-out rule");
            return Scanned::Commented { body };
        }

        let mut start = marker;

        let weight = weight_annotation(marker_line).and_then(|(offset, literal)| {
            start = marker_line_start + offset;
            match parse_weight(literal) {
                Ok(weight) => Some(weight),
                Err(e) => {
                    trace!(offset = marker, error = %e, "unparseable weight, using default");
                    None
                }
            }
        });

        let comment = previous_line(prefix).and_then(|(line_offset, line)| {
            line.find(COMMENT_TOKEN).map(|idx| {
                start = self.cursor + line_offset + idx;
                &line[idx + COMMENT_TOKEN.len()..]
            })
        });

        Scanned::Rule(ScannedRule {
            text: &document[marker..end],
            weight,
            comment,
            span: Span::new(start, end),
            body,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Scanned<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::ScanningForMarker => {
                    self.state = match self.document[self.cursor..].find(START_MARKER) {
                        Some(offset) => State::ReadingToClose {
                            marker: self.cursor + offset,
                        },
                        None => State::Done,
                    };
                }
                State::ReadingToClose { marker } => {
                    let end = match self.document[marker..].find(RULE_CLOSE) {
                        Some(offset) => marker + offset + RULE_CLOSE.len_utf8(),
                        None => {
                            warn!(offset = marker, "rule has no closing brace, taking rest of document");
                            self.document.len()
                        }
                    };
                    self.state = State::ExtractingPrefixMetadata { marker, end };
                }
                State::ExtractingPrefixMetadata { marker, end } => {
                    let item = self.extract(marker, end);
                    self.cursor = end;
                    self.state = if end >= self.document.len() {
                        State::Done
                    } else {
                        State::ScanningForMarker
                    };
                    return Some(item);
                }
                State::Done => return None,
            }
        }
    }
}

/// Locate `<...>` in a line. Returns the offset of `<` and the text between the brackets.
fn weight_annotation(line: &str) -> Option<(usize, &str)> {
    let open = line.find(WEIGHT_OPEN)?;
    let inner_start = open + WEIGHT_OPEN.len_utf8();
    let close = line[inner_start..].find(WEIGHT_CLOSE)?;
    Some((open, &line[inner_start..inner_start + close]))
}

/// The line before the last one in `prefix`, with its offset into `prefix`.
fn previous_line(prefix: &str) -> Option<(usize, &str)> {
    let last_nl = prefix.rfind('\n')?;
    let before = &prefix[..last_nl];
    Some(match before.rfind('\n') {
        Some(nl) => (nl + 1, &before[nl + 1..]),
        None => (0, before),
    })
}
