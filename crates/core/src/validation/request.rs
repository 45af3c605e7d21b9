//! Request-shape validation.
//!
//! Turns an untyped JSON body into a [`ValidationRequest`], rejecting the first
//! violation found. Fields are checked in order: `password`, `rules`, then each
//! rule entry in turn (`rule` key, `value` key, `value` type, rule name).

use serde_json::{Map, Value};

use crate::error::RuleError;

use super::registry::RuleRegistry;
use super::rules::{Rule, ValidationRequest};

/// Parse and validate a request body against the rules known to `registry`.
///
/// A body that is not a JSON object is treated as having no fields.
pub fn parse_request(
    body: &Value,
    registry: &RuleRegistry,
) -> Result<ValidationRequest, RuleError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let password = match fields.get("password") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(RuleError::MissingField { field: "password" }),
    };

    let entries = match fields.get("rules") {
        None => return Err(RuleError::MissingField { field: "rules" }),
        Some(v) if is_blank(v) => return Err(RuleError::MissingField { field: "rules" }),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(RuleError::MalformedRule(format!(
                "{other} is not a list of rules"
            )))
        }
    };

    let rules = entries
        .iter()
        .map(|entry| parse_rule(entry, registry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidationRequest { password, rules })
}

fn parse_rule(entry: &Value, registry: &RuleRegistry) -> Result<Rule, RuleError> {
    let Value::Object(fields) = entry else {
        return Err(RuleError::MalformedRule(format!(
            "{entry} is not a dictionary"
        )));
    };

    let name = fields
        .get("rule")
        .filter(|v| !is_blank(v))
        .ok_or_else(|| {
            RuleError::MalformedRule("Rule in wrong format. Missing 'rule' key".to_string())
        })?;

    let value = match fields.get("value") {
        None | Some(Value::Null) => {
            return Err(RuleError::MalformedRule(
                "Rule in wrong format. Missing 'value' key".to_string(),
            ))
        }
        Some(v) => v,
    };

    // Booleans are a distinct JSON type, so `true` never reads as 1.
    let value = integer_value(value).ok_or_else(|| RuleError::InvalidValueType {
        rule: display_name(name),
    })?;

    let name = match name {
        Value::String(s) if registry.contains(s) => s.clone(),
        other => {
            return Err(RuleError::UnknownRule {
                rule: display_name(other),
            })
        }
    };

    Ok(Rule { rule: name, value })
}

/// `null`, `false`, zero and empty strings, arrays or objects count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Integral JSON numbers as `i64`, saturating outside the `i64` range.
///
/// Numbers keep their literal text, so a fraction or exponent marks a float
/// even when its value is whole.
fn integer_value(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    let literal = n.to_string();
    if literal.contains(['.', 'e', 'E']) {
        return None;
    }
    Some(n.as_i64().unwrap_or(if literal.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

fn display_name(name: &Value) -> String {
    match name {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
