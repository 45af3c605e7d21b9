//! Rule evaluator -- pure logic, no I/O.

use serde_json::Value;

use crate::error::RuleError;

use super::registry::RuleRegistry;
use super::request::parse_request;
use super::rules::{Rule, ValidationRequest, VerificationResult};

/// Evaluates password rules against a shared [`RuleRegistry`].
///
/// Holds no per-request state, so one engine can serve concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> RuleEngine<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Validate the shape of a raw JSON body, then evaluate it.
    ///
    /// Shape errors abort before any rule runs; the first one found is returned.
    pub fn evaluate_json(&self, body: &Value) -> Result<VerificationResult, RuleError> {
        let request = parse_request(body, self.registry)?;
        self.evaluate(&request.password, &request.rules)
    }

    /// Evaluate an already-parsed request.
    pub fn evaluate_request(
        &self,
        request: &ValidationRequest,
    ) -> Result<VerificationResult, RuleError> {
        self.evaluate(&request.password, &request.rules)
    }

    /// Run every rule against `password`, collecting failures in input order.
    ///
    /// Fails with [`RuleError::UnknownRule`] if a rule is not registered.
    pub fn evaluate(
        &self,
        password: &str,
        rules: &[Rule],
    ) -> Result<VerificationResult, RuleError> {
        let mut verdict = Verdict::new();

        for rule in rules {
            let predicate = self
                .registry
                .get(&rule.rule)
                .ok_or_else(|| RuleError::UnknownRule {
                    rule: rule.rule.clone(),
                })?;
            if predicate(password, rule.value) {
                verdict.fail(&rule.rule);
            }
        }

        Ok(verdict.finish())
    }
}

/// Accumulator threaded through evaluation.
///
/// `verify` only ever moves from `true` to `false`.
#[derive(Debug)]
struct Verdict {
    verify: bool,
    no_match: Vec<String>,
}

impl Verdict {
    fn new() -> Self {
        Self {
            verify: true,
            no_match: Vec::new(),
        }
    }

    fn fail(&mut self, rule: &str) {
        self.verify = false;
        self.no_match.push(rule.to_string());
    }

    fn finish(self) -> VerificationResult {
        VerificationResult {
            verify: self.verify,
            no_match: self.no_match,
        }
    }
}
