//! Scenario execution state.
//!
//! A scenario moves `Built -> Sent -> Decoded`, may loop back to `Sent`
//! for each follow-up call, and ends in `Verified`. Any non-terminal state
//! can move to `Failed`.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Current stage of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScenarioState {
    /// Fixture constructed, nothing sent yet.
    #[default]
    Built,
    /// A request is in flight or its raw response has arrived.
    Sent,
    /// The last response was decoded into typed records.
    Decoded,
    /// All checks ran.
    Verified,
    /// The scenario was aborted.
    Failed {
        /// Why it was aborted.
        reason: String,
    },
}

impl ScenarioState {
    /// Short name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Built => "built",
            Self::Sent => "sent",
            Self::Decoded => "decoded",
            Self::Verified => "verified",
            Self::Failed { .. } => "failed",
        }
    }

    /// Returns true if the scenario was aborted.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Checks whether `next` may follow the current state.
    #[must_use]
    pub const fn can_transition_to(&self, next: &Self) -> bool {
        matches!(
            (self, next),
            (Self::Built | Self::Decoded, Self::Sent)
                | (Self::Sent, Self::Decoded)
                | (Self::Decoded, Self::Verified)
                | (Self::Built | Self::Sent | Self::Decoded, Self::Failed { .. })
        )
    }

    /// Moves to `next`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IllegalTransition` if `next` cannot follow the
    /// current state; the state is left unchanged.
    pub fn advance(&mut self, next: Self) -> DomainResult<()> {
        if !self.can_transition_to(&next) {
            return Err(DomainError::IllegalTransition {
                from: self.name(),
                to: next.name(),
            });
        }
        *self = next;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failed() -> ScenarioState {
        ScenarioState::Failed {
            reason: "boom".to_string(),
        }
    }

    #[test]
    fn test_happy_path_with_follow_up_call() {
        let mut state = ScenarioState::default();
        state.advance(ScenarioState::Sent).unwrap();
        state.advance(ScenarioState::Decoded).unwrap();
        state.advance(ScenarioState::Sent).unwrap();
        state.advance(ScenarioState::Decoded).unwrap();
        state.advance(ScenarioState::Verified).unwrap();
        assert_eq!(state, ScenarioState::Verified);
    }

    #[test]
    fn test_skipping_a_stage_is_rejected() {
        let mut state = ScenarioState::Built;
        let err = state.advance(ScenarioState::Decoded).unwrap_err();
        assert_eq!(
            err,
            DomainError::IllegalTransition {
                from: "built",
                to: "decoded"
            }
        );
        assert_eq!(state, ScenarioState::Built);
    }

    #[test]
    fn test_any_live_state_can_fail() {
        for start in [
            ScenarioState::Built,
            ScenarioState::Sent,
            ScenarioState::Decoded,
        ] {
            let mut state = start;
            state.advance(failed()).unwrap();
            assert!(state.is_failed());
        }
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut state = ScenarioState::Verified;
        assert!(state.advance(failed()).is_err());

        let mut state = failed();
        assert!(state.advance(ScenarioState::Sent).is_err());
    }
}
