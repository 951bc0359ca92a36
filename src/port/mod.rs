//! Port layer - CPU-specific implementations
//!
//! Programs the core peripherals the engine relies on (SysTick) and the
//! idle hint for the polling loop.

#[cfg(target_arch = "arm")]
pub mod cortex_m3;

#[cfg(target_arch = "arm")]
pub use cortex_m3::*;

// Stub implementations for non-ARM targets (for testing)
#[cfg(not(target_arch = "arm"))]
pub mod stub {
    use crate::error::Result;

    pub fn systick_init(_cnts: u32) -> Result<()> {
        // No-op for testing
        Ok(())
    }

    pub fn idle() {
        // No-op for testing
    }
}

#[cfg(not(target_arch = "arm"))]
pub use stub::*;
