//! Dialect constants for `.rls` rule files and request validation.

use crate::error::{Result, RlsError};
use crate::types::RequestedAction;

/// Literal that opens every rule.
pub const START_MARKER: &str = "(0:";

/// Closes a rule body. The first occurrence after the marker wins.
pub const RULE_CLOSE: char = '}';

/// Line comment token. Also introduces a rule's sentence cloud.
pub const COMMENT_TOKEN: &str = "//";

/// Separates the condition nodes from the action section.
pub const ACTION_SEPARATOR: &str = "=>";

/// Wrapping pair around the action section.
pub const ACTION_OPEN: char = '{';
pub const ACTION_CLOSE: char = '}';

/// Separates statements inside the action section.
pub const STATEMENT_SEPARATOR: char = ';';

/// Weight annotation delimiters, e.g. `<2.5> (0:...`.
pub const WEIGHT_OPEN: char = '<';
pub const WEIGHT_CLOSE: char = '>';

/// Weight used when a rule carries no annotation or an unparseable one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Output file names are `rules_<prop>_<value>...rls`.
pub const OUTPUT_PREFIX: &str = "rules";
pub const OUTPUT_EXTENSION: &str = "rls";

/// Directive prepended to a source file to reference the extracted rules.
pub const INCLUDE_DIRECTIVE: &str = "#include";

/// Parse a `KEY=VALUE` token into a [`RequestedAction`].
///
/// The split happens on the first `=`; the key must be non-empty.
///
/// # Errors
///
/// Returns [`RlsError::InvalidRequest`] if there is no `=` or the key is empty.
///
/// # Examples
/// ```
/// use rls_tool::config::parse_request;
///
/// assert!(parse_request("state=on").is_ok());
/// assert!(parse_request("state").is_err());
/// ```
pub fn parse_request(token: &str) -> Result<RequestedAction> {
    match token.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok(RequestedAction::new(key.trim(), value.trim()))
        }
        _ => Err(RlsError::InvalidRequest(token.to_owned())),
    }
}
