use thiserror::Error;

/// A statement or weight literal that did not decode. Carries the rejected text.
///
/// The pipeline recovers from these locally: a bad statement is dropped and a
/// bad weight falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown operation in statement '{statement}', expected AddProp or RemoveProp")]
    UnknownOperation { statement: String },

    #[error("statement '{statement}' is not of the form Op.property=value")]
    MalformedStatement { statement: String },

    #[error("weight '{literal}' is not a finite number")]
    InvalidWeight { literal: String },
}

impl DecodeError {
    /// The text that was rejected.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            DecodeError::UnknownOperation { statement }
            | DecodeError::MalformedStatement { statement } => statement,
            DecodeError::InvalidWeight { literal } => literal,
        }
    }
}
