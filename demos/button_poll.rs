//! Button Poll Demo - LED mirrors the polled button level
//!
//! No interrupts in the loop at all: the button is sampled each pass
//! and the LED follows it.

#![no_std]
#![no_main]

use cortex_m_rt::entry;

use blinkjob::bsp;
use blinkjob::types::{Button, Led};

#[entry]
fn main() -> ! {
    let mut board = bsp::init().expect("board init failed");

    loop {
        if board.button.is_pressed() {
            board.led.on();
        } else {
            board.led.off();
        }
    }
}
