//! Request Phase Timer
//!
//! Splits one request's wall time into consecutive phases. The host calls
//! [`RequestPhaseTimer::start`] on entry, [`RequestPhaseTimer::mark_phase_boundary`]
//! once the handler has returned and [`RequestPhaseTimer::stop`] on completion.
//! The final phase is always finalization, so everything before it is
//! reported as processing time.

use std::time::{Duration, Instant};

use thiserror::Error;

use super::{
    clock::{Clock, MonotonicClock},
    handler::HandlerIdentity,
    report::{FailureClass, PhaseReport},
};

/// Timer lifecycle misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum PhaseTimerError {
    #[error("phase timer already started")]
    AlreadyStarted,

    #[error("phase timer has no open phase")]
    NotRunning,

    #[error("phase timer must be stopped before reporting")]
    NotStopped,

    #[error("phase timer has already reported")]
    AlreadyReported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Running { phase_started: Instant },
    Stopped,
    Reported,
}

/// Single-use timer for one request.
#[derive(Debug)]
pub(crate) struct RequestPhaseTimer<C = MonotonicClock> {
    clock: C,
    phases: Vec<Duration>,
    lifecycle: Lifecycle,
}

impl RequestPhaseTimer {
    pub(crate) fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl<C: Clock> RequestPhaseTimer<C> {
    pub(crate) fn with_clock(clock: C) -> Self {
        Self {
            clock,
            phases: Vec::with_capacity(2),
            lifecycle: Lifecycle::Idle,
        }
    }

    /// Open the first phase.
    pub(crate) fn start(&mut self) -> Result<(), PhaseTimerError> {
        match self.lifecycle {
            Lifecycle::Idle => {
                self.lifecycle = Lifecycle::Running {
                    phase_started: self.clock.now(),
                };

                Ok(())
            }
            Lifecycle::Running { .. } | Lifecycle::Stopped => Err(PhaseTimerError::AlreadyStarted),
            Lifecycle::Reported => Err(PhaseTimerError::AlreadyReported),
        }
    }

    /// Close the open phase and open the next one.
    pub(crate) fn mark_phase_boundary(&mut self) -> Result<(), PhaseTimerError> {
        let now = self.close_phase()?;

        self.lifecycle = Lifecycle::Running { phase_started: now };

        Ok(())
    }

    /// Close the open phase. No boundary may follow.
    pub(crate) fn stop(&mut self) -> Result<(), PhaseTimerError> {
        self.close_phase()?;
        self.lifecycle = Lifecycle::Stopped;

        Ok(())
    }

    /// Summarise the stopped timer. Succeeds once.
    ///
    /// Totals are truncated to whole milliseconds before the processing time
    /// is derived, so `total_ms == processing_ms + last_phase_ms` always holds.
    pub(crate) fn report(
        &mut self,
        path: &str,
        handler: HandlerIdentity,
        status: u16,
        failure: FailureClass,
    ) -> Result<PhaseReport, PhaseTimerError> {
        match self.lifecycle {
            Lifecycle::Stopped => {}
            Lifecycle::Idle | Lifecycle::Running { .. } => return Err(PhaseTimerError::NotStopped),
            Lifecycle::Reported => return Err(PhaseTimerError::AlreadyReported),
        }

        let total: Duration = self.phases.iter().sum();
        let last = self.phases.last().copied().unwrap_or_default();

        let total_ms = whole_millis(total);
        let last_phase_ms = whole_millis(last);

        self.lifecycle = Lifecycle::Reported;

        Ok(PhaseReport {
            path: path.to_owned(),
            handler,
            status,
            failure,
            total_ms,
            processing_ms: total_ms.saturating_sub(last_phase_ms),
            last_phase_ms,
        })
    }

    fn close_phase(&mut self) -> Result<Instant, PhaseTimerError> {
        let phase_started = match self.lifecycle {
            Lifecycle::Running { phase_started } => phase_started,
            Lifecycle::Idle | Lifecycle::Stopped => return Err(PhaseTimerError::NotRunning),
            Lifecycle::Reported => return Err(PhaseTimerError::AlreadyReported),
        };

        let now = self.clock.now();

        self.phases.push(now.saturating_duration_since(phase_started));

        Ok(now)
    }
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
