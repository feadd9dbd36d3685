//! Scenario runner.
//!
//! Tracks one scenario's state, owns its verifier, and turns the outcome
//! into a `ScenarioReport`.

use std::fmt;
use std::future::Future;
use std::time::Instant;

use itemcheck_domain::{ScenarioState, StatusExpectation, TestResults};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{ApplicationError, ApplicationResult};
use crate::item_api::Reply;
use crate::verify::Verifier;

/// State and checks of a scenario in progress.
#[derive(Debug)]
pub struct ScenarioRun {
    id: Uuid,
    name: String,
    state: ScenarioState,
    verifier: Verifier,
    expected_status: StatusExpectation,
    started: Instant,
}

impl ScenarioRun {
    /// Starts a scenario in the `Built` state.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let id = Uuid::now_v7();
        let name = name.into();
        info!(scenario = %name, %id, "scenario built");
        Self {
            id,
            name,
            state: ScenarioState::Built,
            verifier: Verifier::new(),
            expected_status: StatusExpectation::success(),
            started: Instant::now(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ScenarioState {
        &self.state
    }

    /// Verifier for this scenario's checks.
    pub const fn check(&mut self) -> &mut Verifier {
        &mut self.verifier
    }

    /// Runs one API call: `Sent` while in flight, `Decoded` once the body
    /// has been decoded. The status code is compared against 2xx and only
    /// logged.
    ///
    /// # Errors
    ///
    /// Propagates the call's error unchanged, or `InvalidState` if the
    /// scenario cannot send from its current state.
    pub async fn call<T, F>(&mut self, call: F) -> ApplicationResult<Reply<T>>
    where
        F: Future<Output = ApplicationResult<Reply<T>>>,
    {
        self.advance(ScenarioState::Sent)?;
        let reply = call.await?;
        self.verifier
            .note_status(&self.expected_status, &reply.response);
        self.advance(ScenarioState::Decoded)?;
        Ok(reply)
    }

    /// Closes the scenario after its steps returned.
    ///
    /// `Ok` moves to `Verified`; `Err` moves to `Failed` and is kept on the
    /// report.
    #[must_use]
    pub fn finish(mut self, outcome: ApplicationResult<()>) -> ScenarioReport {
        let error = match outcome {
            Ok(()) => self.advance(ScenarioState::Verified).err(),
            Err(err) => Some(err),
        };

        if let Some(err) = &error {
            error!(scenario = %self.name, state = self.state.name(), error = %err, "scenario failed");
            self.state = ScenarioState::Failed {
                reason: err.to_string(),
            };
        }

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = self.started.elapsed().as_millis() as u64;
        let results = TestResults::new(&self.name, self.verifier.into_results(), duration_ms);
        info!(
            scenario = %self.name,
            passed = results.passed,
            failed = results.failed,
            duration_ms,
            "scenario finished"
        );

        ScenarioReport {
            id: self.id,
            state: self.state,
            results,
            error,
        }
    }

    fn advance(&mut self, next: ScenarioState) -> ApplicationResult<()> {
        self.state
            .advance(next)
            .map_err(ApplicationError::InvalidState)
    }
}

/// Outcome of one scenario.
#[derive(Debug)]
pub struct ScenarioReport {
    /// Unique run identifier, for correlating log lines.
    pub id: Uuid,
    /// Final state, `Verified` or `Failed`.
    pub state: ScenarioState,
    /// Every check that ran.
    pub results: TestResults,
    /// The error that aborted the scenario, if any.
    pub error: Option<ApplicationError>,
}

impl ScenarioReport {
    /// Returns true if the scenario completed and every check passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.error.is_none() && self.results.all_passed()
    }

    /// Converts the report into a `Result` for `?`-style test code.
    ///
    /// # Errors
    ///
    /// Returns the aborting error if there was one, otherwise an
    /// `Assertion` error listing every failed soft check.
    pub fn into_result(self) -> ApplicationResult<TestResults> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.results.all_passed() {
            let failures: Vec<String> = self.results.failures().map(ToString::to_string).collect();
            return Err(ApplicationError::Assertion(failures.join("; ")));
        }
        Ok(self.results)
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.results, self.state.name())?;
        if let Some(err) = &self.error {
            write!(f, "\n  aborted: {err}")?;
        }
        Ok(())
    }
}
