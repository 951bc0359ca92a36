//! Error types for the blink-job engine
//!
//! Uses Rust's Result pattern instead of C-style status globals.
//!
//! The state machine itself has no failure path; errors only arise at
//! the board-support API boundary.

/// Engine error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Error {
    /// No error
    None = 0,

    // ============ Init errors ============
    /// Board support already initialized
    AlreadyInit = 10001,
    /// Cannot initialize hardware from ISR context
    InitIsr = 10002,

    // ============ Tick errors ============
    /// SysTick reload value outside the 24-bit counter range
    TickReloadRange = 20001,
}

/// Result type alias for engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    #[inline]
    pub fn is_ok(self) -> bool {
        self == Error::None
    }

    #[inline]
    pub fn is_err(self) -> bool {
        self != Error::None
    }
}
