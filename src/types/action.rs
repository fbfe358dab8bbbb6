use std::fmt;
use std::str::FromStr;

use crate::error::RlsError;

/// Property operations recognized inside a rule's action section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// `AddProp.name=value`
    AddProperty,
    /// `RemoveProp.name=value`
    RemoveProperty,
}

impl ActionKind {
    /// The keyword that introduces this operation in rule text.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            ActionKind::AddProperty => "AddProp",
            ActionKind::RemoveProperty => "RemoveProp",
        }
    }

    /// The operation introduced by `keyword`, if it is one.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [ActionKind::AddProperty, ActionKind::RemoveProperty]
            .into_iter()
            .find(|kind| kind.keyword() == keyword)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One decoded property assignment from a rule's action section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub property: String,
    pub value: String,
}

impl Action {
    pub fn new(kind: ActionKind, property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            property: property.into(),
            value: value.into(),
        }
    }

    /// True if this action assigns exactly `requested.value` to `requested.property`.
    /// The operation kind is not considered.
    #[must_use]
    pub fn satisfies(&self, requested: &RequestedAction) -> bool {
        self.property == requested.property && self.value == requested.value
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}={}", self.kind, self.property, self.value)
    }
}

/// A `(property, value)` pair the caller filters rules by.
///
/// Parses from `KEY=VALUE`, splitting on the first `=`, so values may
/// themselves contain `=`.
///
/// ```
/// use rls_tool::RequestedAction;
///
/// let req: RequestedAction = "state=on".parse().unwrap();
/// assert_eq!(req.property, "state");
/// assert_eq!(req.value, "on");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestedAction {
    pub property: String,
    pub value: String,
}

impl RequestedAction {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl FromStr for RequestedAction {
    type Err = RlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::config::parse_request(s)
    }
}

impl fmt::Display for RequestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.property, self.value)
    }
}
