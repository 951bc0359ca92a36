//! Blink Job Demo - button-triggered non-blocking LED blink on the Blue Pill
//!
//! Press the user button: the LED blinks five half-second cycles while
//! the loop keeps spinning. Further presses during a job are ignored.

#![no_std]
#![no_main]

use cortex_m_rt::entry;

use blinkjob::bsp;
use blinkjob::tick;
use blinkjob::types::JobState;
use blinkjob::BlinkJob;

#[entry]
fn main() -> ! {
    let mut board = bsp::init().expect("board init failed");

    blinkjob::info!("press the user button to start a blink job");

    let mut job = BlinkJob::new();
    let mut last = blinkjob::job_state();

    loop {
        job.step(blinkjob::job_flag(), tick::now(), &mut board.led);

        let state = blinkjob::job_state();
        if state != last {
            match state {
                JobState::Requested => blinkjob::info!("blink job running"),
                JobState::Finished => blinkjob::info!("blink job finished"),
            }
            last = state;
        }

        // Sleep until the next tick or button edge
        blinkjob::port::idle();
    }
}
