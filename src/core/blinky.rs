//! Blink-job state machine
//!
//! Translates one asynchronous "start blinking" request into a fixed
//! number of timed on/off LED transitions, sampling a monotonic tick
//! source instead of blocking. Each [`BlinkJob::step`] call performs at
//! most one transition and returns immediately, so the polling loop
//! stays responsive.
//!
//! The only state shared with the producer side is [`JobFlag`], a
//! single atomic word. Everything else lives in the [`BlinkJob`] value
//! owned by the polling loop.

use portable_atomic::{AtomicBool, Ordering};

use crate::config::{CFG_BLINK_CYCLES, CFG_BLINK_HALF_PERIOD};
use crate::tick;
use crate::types::{BlinkState, JobState, Led, Tick};

// ============ Job request flag ============

/// Single-producer/single-consumer job-request flag
///
/// The producer (typically the button ISR) raises it with [`request`];
/// the state machine clears it when a job runs to completion. One
/// atomic word, so partial-update races between an interrupt context
/// and the polling loop cannot occur.
///
/// [`request`]: JobFlag::request
pub struct JobFlag {
    requested: AtomicBool,
}

impl JobFlag {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Request a blink job
    ///
    /// Arms the flag only if no job is pending or running; requests
    /// made while a job is active are ignored and never restart the
    /// in-progress cycle (at most one job, no queue). Safe to call from
    /// an ISR concurrently with [`BlinkJob::step`].
    #[inline]
    pub fn request(&self) {
        let _ = self
            .requested
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire);
    }

    /// Observe the flag
    #[inline]
    pub fn state(&self) -> JobState {
        if self.requested.load(Ordering::Acquire) {
            JobState::Requested
        } else {
            JobState::Finished
        }
    }

    #[inline]
    fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Consumer-side clear; pairs with the Acquire load in `is_requested`
    #[inline]
    fn finish(&self) {
        self.requested.store(false, Ordering::Release);
    }
}

// ============ State machine ============

/// One blink job: a fixed count of timed on/off LED cycles
///
/// Not reentrant; drive it from a single polling context.
pub struct BlinkJob {
    state: BlinkState,
    /// Remaining on/off cycles; meaningful only in `On`/`Off`, never wraps
    cycles_left: u8,
    /// Tick stamped at the start of the current on or off phase
    phase_start: Tick,
}

impl BlinkJob {
    pub const fn new() -> Self {
        Self {
            state: BlinkState::Initial,
            cycles_left: 0,
            phase_start: 0,
        }
    }

    /// Current phase of the machine
    #[inline]
    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Remaining on/off cycles
    #[inline]
    pub fn cycles_left(&self) -> u8 {
        self.cycles_left
    }

    /// Advance the machine by at most one transition
    ///
    /// A no-op while `flag` reads finished: state, cycle counter, and
    /// phase stamp are left untouched. Otherwise transitions follow the
    /// job life cycle, timing each half-period against `now` with
    /// wraparound-safe arithmetic (see [`tick::elapsed_between`]).
    /// Always returns after one transition at most.
    pub fn step<L: Led>(&mut self, flag: &JobFlag, now: Tick, led: &mut L) {
        if !flag.is_requested() {
            return;
        }

        match self.state {
            BlinkState::Initial => {
                led.on();
                self.cycles_left = CFG_BLINK_CYCLES;
                self.phase_start = now;
                self.state = BlinkState::On;
            }
            BlinkState::On => {
                if tick::elapsed_between(self.phase_start, now) > CFG_BLINK_HALF_PERIOD {
                    led.off();
                    self.phase_start = now;
                    self.state = BlinkState::Off;
                }
            }
            BlinkState::Off => {
                if tick::elapsed_between(self.phase_start, now) > CFG_BLINK_HALF_PERIOD {
                    // one full on/off cycle done
                    self.cycles_left -= 1;
                    if self.cycles_left != 0 {
                        led.on();
                        self.phase_start = now;
                        self.state = BlinkState::On;
                    } else {
                        self.state = BlinkState::Stopped;
                    }
                }
            }
            BlinkState::Stopped => {
                // clear the flag first: a request landing between these
                // two stores starts a fresh job on the next step
                flag.finish();
                self.state = BlinkState::Initial;
            }
        }
    }
}

// ============ Global instance ============

/// Request flag shared between the button ISR and the polling loop
static JOB: JobFlag = JobFlag::new();

/// Request a blink job on the global flag
///
/// Producer side of the engine; callable from any context, including
/// interrupts.
#[inline]
pub fn request_job() {
    JOB.request();
}

/// Observe the global job flag
#[inline]
pub fn job_state() -> JobState {
    JOB.state()
}

/// The global flag instance, for wiring into [`BlinkJob::step`]
#[inline]
pub fn job_flag() -> &'static JobFlag {
    &JOB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_starts_finished() {
        let flag = JobFlag::new();
        assert_eq!(flag.state(), JobState::Finished);
    }

    #[test]
    fn request_arms_once() {
        let flag = JobFlag::new();
        flag.request();
        assert_eq!(flag.state(), JobState::Requested);

        // second request while armed changes nothing
        flag.request();
        assert_eq!(flag.state(), JobState::Requested);

        flag.finish();
        assert_eq!(flag.state(), JobState::Finished);
    }
}
