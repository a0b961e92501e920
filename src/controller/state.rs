//! Generation state shared between the controller and its regeneration tasks.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::GenerateError;

/// Whether a regeneration is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Generating,
}

/// Last good password plus the sequence watermarks of issued and settled
/// regenerations.
pub struct Generation {
    password: Zeroizing<String>,
    issued: u64,
    settled: u64,
    applied: u64,
}

/// What a completed regeneration did to the state.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Settlement {
    Applied,
    Suppressed(GenerateError),
    Stale,
    Unhandled(GenerateError),
}

impl Generation {
    /// Last successful password, empty before the first success.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn status(&self) -> Status {
        if self.settled < self.issued {
            Status::Generating
        } else {
            Status::Idle
        }
    }

    /// Sequence number of the most recently issued regeneration.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Sequence number of the regeneration that produced `password`.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    pub(crate) fn issue(&mut self, seq: u64) {
        self.issued = seq;
    }

    /// Record the outcome of regeneration `seq`.
    ///
    /// Completions older than the applied password are discarded.
    /// Failures outside the suppressible set are always handed back.
    pub(crate) fn settle(
        &mut self,
        seq: u64,
        outcome: Result<String, GenerateError>,
    ) -> Settlement {
        let stale = seq < self.applied;
        self.settled = self.settled.max(seq);

        match outcome {
            Err(err) if !err.is_suppressible() => Settlement::Unhandled(err),
            Ok(mut password) if stale => {
                password.zeroize();
                Settlement::Stale
            }
            Err(_) if stale => Settlement::Stale,
            Ok(password) => {
                self.password = Zeroizing::new(password);
                self.applied = seq;
                Settlement::Applied
            }
            Err(err) => Settlement::Suppressed(err),
        }
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self {
            password: Zeroizing::new(String::new()),
            issued: 0,
            settled: 0,
            applied: 0,
        }
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generation")
            .field("password", &"[REDACTED]")
            .field("issued", &self.issued)
            .field("settled", &self.settled)
            .field("applied", &self.applied)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let generation = Generation::default();
        assert_eq!(generation.status(), Status::Idle);
        assert_eq!(generation.password(), "");
    }

    #[test]
    fn generating_until_latest_settles() {
        let mut generation = Generation::default();
        generation.issue(1);
        generation.issue(2);
        assert_eq!(generation.status(), Status::Generating);

        assert_eq!(generation.settle(1, Ok("one".into())), Settlement::Applied);
        assert_eq!(generation.status(), Status::Generating);

        assert_eq!(generation.settle(2, Ok("two".into())), Settlement::Applied);
        assert_eq!(generation.status(), Status::Idle);
        assert_eq!(generation.password(), "two");
        assert_eq!(generation.applied(), 2);
    }

    #[test]
    fn older_completion_is_discarded() {
        let mut generation = Generation::default();
        generation.issue(1);
        generation.issue(2);

        assert_eq!(generation.settle(2, Ok("new".into())), Settlement::Applied);
        assert_eq!(generation.status(), Status::Idle);
        assert_eq!(generation.settle(1, Ok("old".into())), Settlement::Stale);

        assert_eq!(generation.password(), "new");
        assert_eq!(generation.status(), Status::Idle);
    }

    #[test]
    fn older_success_after_newer_suppressed_failure_is_applied() {
        let mut generation = Generation::default();
        generation.issue(1);
        generation.issue(2);

        assert_eq!(
            generation.settle(2, Err(GenerateError::NoCharsets)),
            Settlement::Suppressed(GenerateError::NoCharsets)
        );
        assert_eq!(generation.settle(1, Ok("old".into())), Settlement::Applied);
        assert_eq!(generation.password(), "old");
        assert_eq!(generation.applied(), 1);
        assert_eq!(generation.status(), Status::Idle);
    }

    #[test]
    fn suppressed_failure_older_than_applied_is_stale() {
        let mut generation = Generation::default();
        generation.issue(1);
        generation.issue(2);
        generation.settle(2, Ok("new".into()));

        assert_eq!(generation.settle(1, Err(GenerateError::MaxRetries)), Settlement::Stale);
        assert_eq!(generation.password(), "new");
    }

    #[test]
    fn suppressed_failure_keeps_password() {
        let mut generation = Generation::default();
        generation.issue(1);
        generation.settle(1, Ok("kept".into()));
        generation.issue(2);

        assert_eq!(
            generation.settle(2, Err(GenerateError::MaxRetries)),
            Settlement::Suppressed(GenerateError::MaxRetries)
        );
        assert_eq!(generation.password(), "kept");
        assert_eq!(generation.applied(), 1);
        assert_eq!(generation.status(), Status::Idle);
    }

    #[test]
    fn unexpected_failure_is_handed_back_even_when_stale() {
        let mut generation = Generation::default();
        generation.issue(1);
        generation.issue(2);
        generation.settle(2, Ok("new".into()));

        let err = GenerateError::Other("entropy source failed".into());
        assert_eq!(generation.settle(1, Err(err.clone())), Settlement::Unhandled(err));
        assert_eq!(generation.password(), "new");
    }

    #[test]
    fn debug_redacts_password() {
        let mut generation = Generation::default();
        generation.issue(1);
        generation.settle(1, Ok("hunter22hunter22".into()));
        let out = format!("{generation:?}");
        assert!(!out.contains("hunter22"));
        assert!(out.contains("[REDACTED]"));
    }
}
