//! Submission gate state machine.

use log::*;

/// Specifying the states of the submission gate.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    Validating,
    Submitting,
    Error,
}

/// Decides whether and when a form may be handed to the submission
/// collaborator.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionGate {
    state: GateState,
}

impl Default for SubmissionGate {
    fn default() -> Self {
        SubmissionGate {
            state: GateState::Idle,
        }
    }
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether the form is handed off and its controls are disabled.
    ///
    pub fn is_submitting(&self) -> bool {
        self.state == GateState::Submitting
    }

    /// Start validating a submit attempt. Returns false if the attempt must
    /// be ignored.
    ///
    pub fn begin(&mut self) -> bool {
        match self.state {
            GateState::Idle | GateState::Error => self.transition(GateState::Validating),
            _ => {
                debug!("Ignoring submit attempt in state {:?}", self.state);
                false
            }
        }
    }

    /// Finish validating. Moves to `Submitting` when every gated field
    /// passed, otherwise back to `Idle`.
    ///
    pub fn resolve(&mut self, all_valid: bool) -> GateState {
        if self.state == GateState::Validating {
            let next = if all_valid {
                GateState::Submitting
            } else {
                GateState::Idle
            };
            self.transition(next);
        } else {
            warn!("Gate resolved outside validation (state {:?})", self.state);
        }
        self.state
    }

    /// Record an externally reported submission failure.
    ///
    pub fn fail(&mut self) -> bool {
        match self.state {
            GateState::Submitting => self.transition(GateState::Error),
            _ => {
                debug!("Ignoring submission failure in state {:?}", self.state);
                false
            }
        }
    }

    /// Return to `Idle`, e.g. after the form was reset.
    ///
    pub fn reset(&mut self) {
        if self.state != GateState::Idle {
            self.transition(GateState::Idle);
        }
    }

    fn transition(&mut self, next: GateState) -> bool {
        debug!("Submission gate {:?} -> {:?}", self.state, next);
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        assert_eq!(SubmissionGate::new().state(), GateState::Idle);
    }

    #[test]
    fn test_valid_attempt_reaches_submitting() {
        let mut gate = SubmissionGate::new();
        assert!(gate.begin());
        assert_eq!(gate.state(), GateState::Validating);
        assert_eq!(gate.resolve(true), GateState::Submitting);
        assert!(gate.is_submitting());
    }

    #[test]
    fn test_invalid_attempt_returns_to_idle() {
        let mut gate = SubmissionGate::new();
        gate.begin();
        assert_eq!(gate.resolve(false), GateState::Idle);
    }

    #[test]
    fn test_submit_ignored_while_submitting() {
        let mut gate = SubmissionGate::new();
        gate.begin();
        gate.resolve(true);
        assert!(!gate.begin());
        assert_eq!(gate.state(), GateState::Submitting);
    }

    #[test]
    fn test_failure_reenables_retry() {
        let mut gate = SubmissionGate::new();
        gate.begin();
        gate.resolve(true);
        assert!(gate.fail());
        assert_eq!(gate.state(), GateState::Error);
        assert!(!gate.is_submitting());
        assert!(gate.begin());
        assert_eq!(gate.state(), GateState::Validating);
    }

    #[test]
    fn test_failure_ignored_when_idle() {
        let mut gate = SubmissionGate::new();
        assert!(!gate.fail());
        assert_eq!(gate.state(), GateState::Idle);
    }

    #[test]
    fn test_reset() {
        let mut gate = SubmissionGate::new();
        gate.begin();
        gate.resolve(true);
        gate.reset();
        assert_eq!(gate.state(), GateState::Idle);
    }
}
