//! Compile-time configuration for the blink-job engine
//!
//! These constants fix the timing behavior and the reference board clock.

use crate::types::Tick;

/// System tick rate in Hz
pub const CFG_TICK_RATE_HZ: Tick = 100;

/// Number of on/off cycles in one blink job
pub const CFG_BLINK_CYCLES: u8 = 5;

/// Ticks in one half of an on/off blink cycle
pub const CFG_BLINK_HALF_PERIOD: Tick = CFG_TICK_RATE_HZ / 2;

/// Core clock feeding SysTick on the reference board (HSI out of reset)
pub const CFG_CPU_CLOCK_HZ: u32 = 8_000_000;

/// NVIC priority for the user-button interrupt (avoid 0, the highest,
/// so fault handlers always preempt it)
pub const CFG_BUTTON_IRQ_PRIO: u8 = 0x10;
