use crate::config::toml_config::{BatchConfig, CheckConfig};
use crate::domain::model::{Operation, Outcome};
use crate::domain::ports::NumberChecks;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Passed,
    /// Produced an outcome other than the expected one.
    WrongOutcome { expected: Value, actual: Outcome },
    /// Failed with an error that was not expected, or with the wrong message.
    WrongError { expected: Option<String>, actual: String },
    /// Succeeded where an error was expected.
    MissingError { expected: String, actual: Outcome },
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub name: String,
    pub operation: Operation,
    pub verdict: Verdict,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Passed => write!(f, "PASS {} ({})", self.name, self.operation),
            Verdict::WrongOutcome { expected, actual } => write!(
                f,
                "FAIL {} ({}): expected {}, got {}",
                self.name, self.operation, expected, actual
            ),
            Verdict::WrongError {
                expected: Some(expected),
                actual,
            } => write!(
                f,
                "FAIL {} ({}): expected error '{}', got error '{}'",
                self.name, self.operation, expected, actual
            ),
            Verdict::WrongError {
                expected: None,
                actual,
            } => write!(f, "FAIL {} ({}): error '{}'", self.name, self.operation, actual),
            Verdict::MissingError { expected, actual } => write!(
                f,
                "FAIL {} ({}): expected error '{}', got {}",
                self.name, self.operation, expected, actual
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub reports: Vec<CheckReport>,
    /// Checks not run because an earlier one failed under `fail_fast`.
    pub skipped: usize,
}

impl BatchSummary {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0 && self.skipped == 0
    }
}

pub struct BatchRunner<C: NumberChecks> {
    checks: C,
}

impl<C: NumberChecks> BatchRunner<C> {
    pub fn new(checks: C) -> Self {
        Self { checks }
    }

    pub fn run(&self, config: &BatchConfig) -> BatchSummary {
        tracing::info!(
            "Running batch '{}' with {} checks",
            config.batch.name,
            config.checks.len()
        );

        let mut summary = BatchSummary::default();
        for (i, check) in config.checks.iter().enumerate() {
            let report = self.run_check(check);
            tracing::debug!("{}", report);

            let failed = !report.passed();
            summary.reports.push(report);

            if failed && config.fail_fast() {
                summary.skipped = config.checks.len() - i - 1;
                tracing::warn!(
                    "Stopping after '{}', {} checks skipped",
                    check.name,
                    summary.skipped
                );
                break;
            }
        }

        tracing::info!(
            "Batch '{}': {} passed, {} failed, {} skipped",
            config.batch.name,
            summary.passed(),
            summary.failed(),
            summary.skipped
        );
        summary
    }

    pub fn run_check(&self, check: &CheckConfig) -> CheckReport {
        let result = self.checks.run(check.operation, &check.input);
        let verdict = match (result, &check.expected_error) {
            (Ok(actual), None) => match &check.expected {
                Some(expected) if !values_match(expected, &actual.to_value()) => {
                    Verdict::WrongOutcome {
                        expected: expected.clone(),
                        actual,
                    }
                }
                _ => Verdict::Passed,
            },
            (Ok(actual), Some(expected)) => Verdict::MissingError {
                expected: expected.clone(),
                actual,
            },
            (Err(e), Some(expected)) if e.to_string() == *expected => Verdict::Passed,
            (Err(e), expected) => Verdict::WrongError {
                expected: expected.clone(),
                actual: e.to_string(),
            },
        };

        CheckReport {
            name: check.name.clone(),
            operation: check.operation,
            verdict,
        }
    }
}

/// Structural equality where numbers compare by value, so `2` matches `2.0`.
pub fn values_match(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => {
            a == b || matches!((a.as_f64(), b.as_f64()), (Some(x), Some(y)) if x == y)
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_match(x, y))
        }
        _ => expected == actual,
    }
}
