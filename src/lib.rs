//! Non-blocking LED blink-job engine for bare-metal Cortex-M
//!
//! A small firmware building block providing:
//! - A monotonic system tick counter with wraparound-safe elapsed math
//! - A cooperative blink-job state machine driven by polling, never by
//!   blocking delays
//! - An ISR-safe, at-most-one-job request flag
//! - Board support for the STM32F103 Blue Pill (LED, button, SysTick)

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Critical Section ============

#[cfg(target_arch = "arm")]
mod cs_impl {
    use cortex_m::interrupt;
    use cortex_m::register::primask;
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct SingleCoreCriticalSection;
    set_impl!(SingleCoreCriticalSection);

    unsafe impl Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let was_active = primask::read().is_active();
            interrupt::disable();
            was_active
        }

        unsafe fn release(was_active: RawRestoreState) {
            if was_active {
                unsafe { interrupt::enable() }
            }
        }
    }
}

// ============ Modules ============

pub mod log;
mod lang_items;

pub mod core;
pub mod port;
pub mod bsp;

// ============ Re-exports ============

pub use core::blinky;
pub use core::blinky::{job_flag, job_state, request_job, BlinkJob, JobFlag};
pub use core::config;
pub use core::config::*;
pub use core::critical;
pub use core::error;
pub use core::error::Error;
pub use core::tick;
pub use core::types;
pub use core::types::*;

#[cfg(feature = "pac")]
pub use stm32_metapac as pac;
