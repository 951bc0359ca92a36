//! Heartbeat Demo - 1 Hz LED toggle timed off the raw tick counter
//!
//! The non-blocking delay pattern with no state machine: sample the
//! tick counter, toggle when a half-period has elapsed.

#![no_std]
#![no_main]

use cortex_m_rt::entry;

use blinkjob::bsp;
use blinkjob::config::CFG_BLINK_HALF_PERIOD;
use blinkjob::tick;
use blinkjob::types::{Led, LedState};

#[entry]
fn main() -> ! {
    let mut board = bsp::init().expect("board init failed");

    let mut state = LedState::On;
    let mut phase_start = tick::now();
    board.led.set(state);

    loop {
        if tick::elapsed(phase_start) > CFG_BLINK_HALF_PERIOD {
            state = state.toggled();
            board.led.set(state);
            phase_start = tick::now();
            blinkjob::trace!("heartbeat toggle");
        }

        blinkjob::port::idle();
    }
}
