//! Core type definitions for the blink-job engine
//!
//! Strong types for ticks, LED state, and the job life cycle.

/// Tick counter type
///
/// The counter wraps at `u32::MAX`; its modulus is exactly 2^32.
pub type Tick = u32;

/// State of an LED sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedState {
    /// LED is dark
    Off = 0,
    /// LED is lit
    On = 1,
}

impl LedState {
    /// The opposite state
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            LedState::Off => LedState::On,
            LedState::On => LedState::Off,
        }
    }
}

/// State of the shared job-request flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum JobState {
    /// No job pending; a new request will be accepted
    Finished = 0,
    /// A job is pending or running; further requests are ignored
    Requested = 1,
}

/// Phase of the blink state machine
///
/// Life cycle: `Initial` before a job starts, `On`/`Off` alternating for
/// each half-cycle, `Stopped` for one step after the last cycle, then
/// back to `Initial` with the request flag cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BlinkState {
    /// Idle; entered at creation and again after each completed job
    Initial = 0,
    /// LED lit, waiting out the half-period
    On = 1,
    /// LED dark, waiting out the half-period
    Off = 2,
    /// Last cycle finished; next step returns to `Initial`
    Stopped = 3,
}

/// An LED sink the state machine drives
///
/// Setting a state is idempotent and assumed always to succeed.
pub trait Led {
    fn set(&mut self, state: LedState);

    #[inline]
    fn on(&mut self) {
        self.set(LedState::On);
    }

    #[inline]
    fn off(&mut self) {
        self.set(LedState::Off);
    }
}

/// A push button that can be sampled by polling
pub trait Button {
    fn is_pressed(&self) -> bool;
}
