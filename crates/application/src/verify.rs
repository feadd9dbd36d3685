//! Verification layer.
//!
//! Soft checks record a result and let the scenario carry on; `require*`
//! checks record a fatal failure and hand back an error the scenario
//! propagates with `?`.

use std::fmt::Debug;

use itemcheck_domain::response::ResponseSpec;
use itemcheck_domain::{Assertion, AssertionResult, StatusExpectation};
use tracing::warn;

use crate::error::{ApplicationError, ApplicationResult};

/// Collects assertion results for one scenario.
#[derive(Debug, Default)]
pub struct Verifier {
    results: Vec<AssertionResult>,
}

impl Verifier {
    /// Creates an empty verifier.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Results recorded so far.
    #[must_use]
    pub fn results(&self) -> &[AssertionResult] {
        &self.results
    }

    /// Consumes the verifier, returning its results.
    #[must_use]
    pub fn into_results(self) -> Vec<AssertionResult> {
        self.results
    }

    /// Logs a warning if the status does not match; never records a failure.
    pub fn note_status(&self, expected: &StatusExpectation, response: &ResponseSpec) {
        let actual = response.status.as_u16();
        if !expected.matches(actual) {
            warn!(
                status = %response.status,
                expected = %expected.description(),
                "unexpected status code"
            );
        }
    }

    /// Checks that `actual == expected`.
    pub fn equals<T: PartialEq + Debug + ?Sized>(
        &mut self,
        subject: &str,
        expected: &T,
        actual: &T,
    ) -> bool {
        let assertion = Assertion::Equals {
            subject: subject.to_string(),
            expected: format!("{expected:?}"),
        };
        let result = if expected == actual {
            AssertionResult::pass_with_value(assertion, format!("{actual:?}"))
        } else {
            AssertionResult::fail_with_value(
                assertion,
                format!("{actual:?}"),
                format!("expected {expected:?}, got {actual:?}"),
            )
        };
        self.record(result)
    }

    /// Checks that a string is not blank.
    pub fn not_blank(&mut self, subject: &str, value: &str) -> bool {
        let assertion = Assertion::NotEmpty {
            subject: subject.to_string(),
        };
        let result = if value.trim().is_empty() {
            AssertionResult::fail(assertion, format!("{subject} is blank"))
        } else {
            AssertionResult::pass_with_value(assertion, value)
        };
        self.record(result)
    }

    /// Checks that a slice has at least one element.
    pub fn not_empty<T>(&mut self, subject: &str, items: &[T]) -> bool {
        let result = Self::non_empty_result(subject, items);
        self.record(result)
    }

    /// Checks that `actual >= min`.
    pub fn at_least(&mut self, subject: &str, min: i64, actual: i64) -> bool {
        let assertion = Assertion::AtLeast {
            subject: subject.to_string(),
            min,
        };
        let result = if actual >= min {
            AssertionResult::pass_with_value(assertion, actual.to_string())
        } else {
            AssertionResult::fail_with_value(
                assertion,
                actual.to_string(),
                format!("{subject} is {actual}, expected at least {min}"),
            )
        };
        self.record(result)
    }

    /// Finds the element whose key equals `needle`, recording whether it
    /// was present.
    pub fn find<'a, T>(
        &mut self,
        subject: &str,
        items: &'a [T],
        needle: &str,
        key: impl Fn(&T) -> &str,
    ) -> Option<&'a T> {
        let assertion = Assertion::Contains {
            subject: subject.to_string(),
            needle: needle.to_string(),
        };
        let found = items.iter().find(|item| key(item) == needle);
        let result = if found.is_some() {
            AssertionResult::pass(assertion)
        } else {
            AssertionResult::fail_with_value(
                assertion,
                format!("{} element(s)", items.len()),
                format!("{needle} not found in {subject}"),
            )
        };
        self.record(result);
        found
    }

    /// Returns the first element, or aborts the scenario if there is none.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Assertion` if `items` is empty.
    pub fn require_first<'a, T>(&mut self, subject: &str, items: &'a [T]) -> ApplicationResult<&'a T> {
        let result = Self::non_empty_result(subject, items);
        self.require(result)?;
        items
            .first()
            .ok_or_else(|| ApplicationError::Assertion(format!("{subject} is empty")))
    }

    /// Records a check that must hold for the scenario to continue.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Assertion` describing the failed check.
    pub fn require(&mut self, result: AssertionResult) -> ApplicationResult<()> {
        if result.passed {
            self.record(result);
            return Ok(());
        }
        let result = result.into_fatal();
        let message = result.to_string();
        self.record(result);
        Err(ApplicationError::Assertion(message))
    }

    fn non_empty_result<T>(subject: &str, items: &[T]) -> AssertionResult {
        let assertion = Assertion::NotEmpty {
            subject: subject.to_string(),
        };
        if items.is_empty() {
            AssertionResult::fail_with_value(assertion, "0 element(s)", format!("{subject} is empty"))
        } else {
            AssertionResult::pass_with_value(assertion, format!("{} element(s)", items.len()))
        }
    }

    fn record(&mut self, result: AssertionResult) -> bool {
        let passed = result.passed;
        if !passed {
            warn!(check = %result, "check failed");
        }
        self.results.push(result);
        passed
    }
}
