//! Rule, request, and result types.

use serde::{Deserialize, Serialize};

pub const MIN_SIZE: &str = "minSize";
pub const MIN_UPPER_CASE: &str = "minUpperCase";
pub const MIN_LOWER_CASE: &str = "minLowerCase";
pub const MIN_DIGIT: &str = "minDigit";
pub const MIN_SPECIAL_CHARS: &str = "minSpecialChars";
pub const NO_REPEATED: &str = "noRepeated";

/// Misspelling accepted by older clients, only registered when enabled.
pub const NO_REPEATED_LEGACY: &str = "noRepeted";

/// One constraint to check: a registered rule name and its integer threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub rule: String,
    pub value: i64,
}

/// A password plus the ordered rules to check it against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub password: String,
    pub rules: Vec<Rule>,
}

/// Outcome of evaluating every requested rule.
///
/// `no_match` lists failed rule names in the order the rules were supplied,
/// once per failing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verify: bool,
    #[serde(rename = "noMatch")]
    pub no_match: Vec<String>,
}
