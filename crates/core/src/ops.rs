//! Operation-state tracking for simulated asynchronous actions.
//!
//! Every logical "send" in the dashboard (bulk refill broadcast, survey
//! dispatch, message send, voice-note upload, file import) is a timer
//! standing in for a network call. Each carries one [`OpState`]; a
//! second trigger while one is in flight is refused.

use std::time::Duration;

use crate::error::{DashboardError, DashboardResult};

/// Lifecycle of one logical asynchronous action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OpState {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed(String),
}

impl OpState {
    /// Marks the operation as started.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::OperationInFlight`] if it is already
    /// running.
    pub fn begin(&mut self) -> DashboardResult<()> {
        if matches!(self, OpState::Running) {
            return Err(DashboardError::OperationInFlight);
        }
        *self = OpState::Running;
        Ok(())
    }

    pub fn succeed(&mut self) {
        *self = OpState::Succeeded;
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        *self = OpState::Failed(reason.into());
    }

    /// Returns to `Idle`, e.g. when a confirmation banner is dismissed.
    pub fn reset(&mut self) {
        *self = OpState::Idle;
    }

    pub fn is_running(&self) -> bool {
        matches!(self, OpState::Running)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, OpState::Succeeded)
    }
}

/// Stands in for a network round-trip of the given duration.
///
/// Cancellation is dropping the future.
pub async fn simulate_transport(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_double_trigger() {
        let mut state = OpState::default();
        state.begin().expect("first trigger starts");
        assert!(state.is_running());
        assert!(matches!(
            state.begin(),
            Err(DashboardError::OperationInFlight)
        ));
    }

    #[test]
    fn begin_allowed_again_after_completion() {
        let mut state = OpState::default();
        state.begin().expect("first trigger");
        state.succeed();
        assert!(state.is_succeeded());
        state.begin().expect("restart after success");

        state.fail("timeout");
        state.begin().expect("restart after failure");
    }
}
