//! Unit tests for the blink-job engine
//!
//! These tests run on the host (not the embedded target) and drive the
//! state machine with a simulated tick source and a mock LED.

use blinkjob::blinky::{BlinkJob, JobFlag};
use blinkjob::types::{BlinkState, JobState, Led, LedState};

/// LED double that records every transition
struct MockLed {
    state: LedState,
    on_events: u32,
    off_events: u32,
}

impl MockLed {
    fn new() -> Self {
        Self {
            state: LedState::Off,
            on_events: 0,
            off_events: 0,
        }
    }
}

impl Led for MockLed {
    fn set(&mut self, state: LedState) {
        match state {
            LedState::On => self.on_events += 1,
            LedState::Off => self.off_events += 1,
        }
        self.state = state;
    }
}

/// Step the machine once per tick from `start` until the job finishes.
/// Returns the tick value after the final transition.
fn run_to_completion(job: &mut BlinkJob, flag: &JobFlag, led: &mut MockLed, start: u32) -> u32 {
    let mut t = start;
    // 5 cycles at ~51 ticks per half-period finish well inside this bound
    for _ in 0..2000 {
        job.step(flag, t, led);
        if flag.state() == JobState::Finished && job.state() == BlinkState::Initial {
            return t;
        }
        t = t.wrapping_add(1);
    }
    panic!("job did not finish");
}

#[cfg(test)]
mod blink_job_tests {
    use super::*;
    use blinkjob::config::CFG_BLINK_CYCLES;

    #[test]
    fn full_job_blinks_five_cycles() {
        let flag = JobFlag::new();
        let mut job = BlinkJob::new();
        let mut led = MockLed::new();

        flag.request();
        run_to_completion(&mut job, &flag, &mut led, 0);

        assert_eq!(led.on_events, CFG_BLINK_CYCLES as u32);
        assert_eq!(led.off_events, CFG_BLINK_CYCLES as u32);
        assert_eq!(led.state, LedState::Off);
        assert_eq!(job.state(), BlinkState::Initial);
        assert_eq!(flag.state(), JobState::Finished);
    }

    #[test]
    fn step_is_noop_while_finished() {
        let flag = JobFlag::new();
        let mut job = BlinkJob::new();
        let mut led = MockLed::new();

        for t in [0, 1, 100, 5000, u32::MAX] {
            job.step(&flag, t, &mut led);
        }

        assert_eq!(job.state(), BlinkState::Initial);
        assert_eq!(job.cycles_left(), 0);
        assert_eq!(led.on_events, 0);
        assert_eq!(led.off_events, 0);
    }

    #[test]
    fn repeated_request_does_not_restart_job() {
        let flag = JobFlag::new();
        let mut job = BlinkJob::new();
        let mut led = MockLed::new();

        flag.request();
        job.step(&flag, 0, &mut led); // Initial -> On
        job.step(&flag, 60, &mut led); // On -> Off, first half-cycle done
        assert_eq!(job.state(), BlinkState::Off);
        let cycles_before = job.cycles_left();

        // a second press mid-job must be ignored
        flag.request();
        job.step(&flag, 65, &mut led);
        assert_eq!(job.state(), BlinkState::Off);
        assert_eq!(job.cycles_left(), cycles_before);

        run_to_completion(&mut job, &flag, &mut led, 66);

        // exactly one job's worth of transitions, not two
        assert_eq!(led.on_events, CFG_BLINK_CYCLES as u32);
        assert_eq!(led.off_events, CFG_BLINK_CYCLES as u32);
        assert_eq!(flag.state(), JobState::Finished);
    }

    #[test]
    fn job_can_rerun_after_completion() {
        let flag = JobFlag::new();
        let mut job = BlinkJob::new();
        let mut led = MockLed::new();

        flag.request();
        let end = run_to_completion(&mut job, &flag, &mut led, 0);

        flag.request();
        run_to_completion(&mut job, &flag, &mut led, end.wrapping_add(1));

        assert_eq!(led.on_events, 2 * CFG_BLINK_CYCLES as u32);
        assert_eq!(led.off_events, 2 * CFG_BLINK_CYCLES as u32);
    }

    #[test]
    fn wraparound_mid_phase_detects_completion() {
        let flag = JobFlag::new();
        let mut job = BlinkJob::new();
        let mut led = MockLed::new();

        flag.request();

        // phase starts 10 ticks before the counter wraps
        let start = u32::MAX - 10;
        job.step(&flag, start, &mut led);
        assert_eq!(job.state(), BlinkState::On);
        assert_eq!(led.on_events, 1);

        // 5 ticks elapsed, still before the wrap: no transition
        job.step(&flag, u32::MAX - 5, &mut led);
        assert_eq!(job.state(), BlinkState::On);

        // counter wrapped; 41 ticks elapsed: still inside the half-period
        job.step(&flag, 30, &mut led);
        assert_eq!(job.state(), BlinkState::On);
        assert_eq!(led.off_events, 0);

        // 56 ticks elapsed across the wrap: phase complete, no miss
        job.step(&flag, 45, &mut led);
        assert_eq!(job.state(), BlinkState::Off);
        assert_eq!(led.off_events, 1);
    }

    #[test]
    fn wraparound_job_runs_to_completion() {
        let flag = JobFlag::new();
        let mut job = BlinkJob::new();
        let mut led = MockLed::new();

        flag.request();
        run_to_completion(&mut job, &flag, &mut led, u32::MAX - 100);

        assert_eq!(led.on_events, CFG_BLINK_CYCLES as u32);
        assert_eq!(led.off_events, CFG_BLINK_CYCLES as u32);
        assert_eq!(flag.state(), JobState::Finished);
    }

    /// The reference observation sequence: tick rate 100 Hz, half-period
    /// 50 ticks, samples at 0, 10, 40, 51, 60, 90, 101.
    #[test]
    fn reference_tick_sequence() {
        let flag = JobFlag::new();
        let mut job = BlinkJob::new();
        let mut led = MockLed::new();

        flag.request();

        // first step lights the LED exactly once
        job.step(&flag, 0, &mut led);
        assert_eq!(led.on_events, 1);
        assert_eq!(job.state(), BlinkState::On);

        // nothing happens until the elapsed difference exceeds 50
        job.step(&flag, 10, &mut led);
        job.step(&flag, 40, &mut led);
        assert_eq!(led.off_events, 0);

        // 51 - 0 > 50: the one LED-off event of this cycle
        job.step(&flag, 51, &mut led);
        assert_eq!(led.off_events, 1);
        assert_eq!(job.state(), BlinkState::Off);

        // 60, 90: within the off half-period; 101 - 51 == 50 is not yet over it
        job.step(&flag, 60, &mut led);
        job.step(&flag, 90, &mut led);
        job.step(&flag, 101, &mut led);
        assert_eq!(led.on_events, 1);
        assert_eq!(led.off_events, 1);
        assert_eq!(job.state(), BlinkState::Off);

        // keep observing every 10 ticks until the job completes
        let mut t = 111;
        while flag.state() == JobState::Requested {
            job.step(&flag, t, &mut led);
            t += 10;
            assert!(t < 10_000, "job did not finish");
        }

        assert_eq!(led.on_events, 5);
        assert_eq!(led.off_events, 5);
        assert_eq!(job.state(), BlinkState::Initial);
    }
}

#[cfg(test)]
mod job_flag_tests {
    use super::*;

    #[test]
    fn starts_finished() {
        let flag = JobFlag::new();
        assert_eq!(flag.state(), JobState::Finished);
    }

    #[test]
    fn request_from_another_thread_is_observed() {
        static FLAG: JobFlag = JobFlag::new();

        std::thread::spawn(|| FLAG.request()).join().unwrap();

        // the write that completed before this step must be visible
        let mut job = BlinkJob::new();
        let mut led = MockLed::new();
        job.step(&FLAG, 0, &mut led);
        assert_eq!(job.state(), BlinkState::On);
    }
}

#[cfg(test)]
mod tick_tests {
    use blinkjob::tick;

    #[test]
    fn elapsed_between_basics() {
        assert_eq!(tick::elapsed_between(0, 0), 0);
        assert_eq!(tick::elapsed_between(0, 50), 50);
        assert_eq!(tick::elapsed_between(100, 251), 151);
    }

    #[test]
    fn elapsed_between_wraps_exactly() {
        assert_eq!(tick::elapsed_between(u32::MAX, 0), 1);
        assert_eq!(tick::elapsed_between(u32::MAX - 9, 5), 15);
        assert_eq!(tick::elapsed_between(1, 0), u32::MAX);
    }

    #[test]
    fn handler_advances_counter() {
        // the only test that touches the global counter
        let before = tick::now();
        tick::handler();
        tick::handler();
        assert_eq!(tick::elapsed_between(before, tick::now()), 2);
        assert_eq!(tick::elapsed(before), 2);
    }
}

#[cfg(test)]
mod config_tests {
    use blinkjob::config::*;

    #[test]
    fn config_values() {
        assert!(CFG_TICK_RATE_HZ >= 10, "Tick rate too slow");
        assert!(CFG_TICK_RATE_HZ <= 10_000, "Tick rate too fast");

        assert_eq!(CFG_BLINK_HALF_PERIOD, CFG_TICK_RATE_HZ / 2);
        assert!(CFG_BLINK_HALF_PERIOD > 0);

        assert!(CFG_BLINK_CYCLES > 0);

        // SysTick reload must fit the 24-bit counter
        let reload = CFG_CPU_CLOCK_HZ / CFG_TICK_RATE_HZ;
        assert!(reload >= 1);
        assert!(reload - 1 <= 0x00FF_FFFF, "Tick reload out of range");

        // keep the button interrupt off the highest priority
        assert!(CFG_BUTTON_IRQ_PRIO > 0);
    }
}

#[cfg(test)]
mod error_tests {
    use blinkjob::error::Error;

    #[test]
    fn error_variants() {
        assert!(Error::None.is_ok());
        assert!(!Error::None.is_err());

        assert!(!Error::AlreadyInit.is_ok());
        assert!(Error::AlreadyInit.is_err());

        assert_eq!(Error::None, Error::None);
        assert_ne!(Error::AlreadyInit, Error::InitIsr);
    }

    #[test]
    fn error_debug() {
        // Ensure errors can be formatted for debugging
        let err = Error::TickReloadRange;
        let _ = format!("{:?}", err);
    }
}

#[cfg(test)]
mod types_tests {
    use blinkjob::types::*;

    #[test]
    fn led_state_toggles() {
        assert_eq!(LedState::On.toggled(), LedState::Off);
        assert_eq!(LedState::Off.toggled(), LedState::On);
    }

    #[test]
    fn blink_state_enum() {
        let state = BlinkState::Initial;
        assert_eq!(state, BlinkState::Initial);
        assert_ne!(state, BlinkState::Stopped);
    }

    #[test]
    fn job_state_enum() {
        assert_ne!(JobState::Finished, JobState::Requested);
    }
}
