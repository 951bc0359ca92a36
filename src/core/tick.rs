//! System tick counter
//!
//! A monotonic counter advanced from the SysTick exception at
//! [`CFG_TICK_RATE_HZ`](crate::config::CFG_TICK_RATE_HZ). Consumers
//! never wait on it; they sample it and compute elapsed ticks.

use portable_atomic::{AtomicU32, Ordering};

use crate::types::Tick;

/// Global tick counter, written only by [`handler`]
static TICKS: AtomicU32 = AtomicU32::new(0);

/// Get the current tick count
///
/// Single atomic load; callable from any context.
#[inline(always)]
pub fn now() -> Tick {
    TICKS.load(Ordering::Relaxed)
}

/// Ticks elapsed since `since`
///
/// See [`elapsed_between`] for the wraparound contract.
#[inline]
pub fn elapsed(since: Tick) -> Tick {
    elapsed_between(since, now())
}

/// Ticks elapsed from `start` to `now`
///
/// Computed with unsigned wrapping subtraction. This is exact across
/// counter wraparound only because the counter's modulus (2^32) matches
/// the [`Tick`] width: for any real interval shorter than 2^32 ticks,
/// `now.wrapping_sub(start)` is the true elapsed count. A tick source
/// with a different modulus must not be fed through this helper.
#[inline]
pub fn elapsed_between(start: Tick, now: Tick) -> Tick {
    now.wrapping_sub(start)
}

/// Advance the counter by one tick
///
/// Called from the tick interrupt. The increment wraps at `u32::MAX`.
#[inline]
pub fn handler() {
    TICKS.fetch_add(1, Ordering::Relaxed);
}

/// SysTick exception handler
#[no_mangle]
pub extern "C" fn SysTick() {
    handler();
}
