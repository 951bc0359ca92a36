//! Cortex-M3 port implementation
//!
//! SysTick programming and the idle hint for the reference MCU core.

use cortex_m::peripheral::syst::SystClkSource;

use crate::error::{Error, Result};

/// Largest reload value the 24-bit SysTick counter accepts
const SYST_RELOAD_MAX: u32 = 0x00FF_FFFF;

/// Initialize the SysTick timer for system tick generation
///
/// # Arguments
/// * `cnts` - Core-clock cycles per tick
///
/// # Example
/// For an 8 MHz clock with a 100 Hz tick rate: cnts = 8_000_000 / 100 = 80_000
pub fn systick_init(cnts: u32) -> Result<()> {
    if cnts == 0 || cnts - 1 > SYST_RELOAD_MAX {
        return Err(Error::TickReloadRange);
    }

    let mut p = unsafe { cortex_m::Peripherals::steal() };

    // Configure SysTick timer
    p.SYST.set_reload(cnts - 1);
    p.SYST.clear_current();
    p.SYST.set_clock_source(SystClkSource::Core);
    p.SYST.enable_interrupt();
    p.SYST.enable_counter();

    Ok(())
}

/// Sleep until the next interrupt
#[inline(always)]
pub fn idle() {
    cortex_m::asm::wfi();
}
