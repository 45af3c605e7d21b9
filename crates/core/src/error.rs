/// Request-shape errors raised before any rule is evaluated.
///
/// Every variant is a caller-input problem; the first violation found while
/// scanning the request aborts evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("Missing key: {field}")]
    MissingField { field: &'static str },

    #[error("{0}")]
    MalformedRule(String),

    #[error("Value must be an integer")]
    InvalidValueType { rule: String },

    #[error("rule: {rule} is not an allowed rule")]
    UnknownRule { rule: String },
}

impl RuleError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::MissingField { .. } => "MISSING_FIELD",
            RuleError::MalformedRule(_) => "MALFORMED_RULE",
            RuleError::InvalidValueType { .. } => "INVALID_VALUE_TYPE",
            RuleError::UnknownRule { .. } => "UNKNOWN_RULE",
        }
    }
}
