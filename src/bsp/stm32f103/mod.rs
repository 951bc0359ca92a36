//! STM32F103 "Blue Pill" board support
//!
//! On-board LED on PC13 (active low), user button on PA0 against the
//! internal pull-up. The button's falling edge fires EXTI0, which
//! raises the blink-job request; the polling loop does everything else.

use cortex_m::peripheral::NVIC;
use portable_atomic::{AtomicBool, Ordering};

use crate::blinky;
use crate::config::{CFG_BUTTON_IRQ_PRIO, CFG_CPU_CLOCK_HZ, CFG_TICK_RATE_HZ};
use crate::critical::{critical_section, is_isr_context};
use crate::error::{Error, Result};
use crate::pac;
use crate::pac::gpio::vals;
use crate::port;
use crate::types::{Button, Led, LedState};

/// On-board LED pin: PC13
const LED_PIN: usize = 13;

/// User button pin: PA0 (EXTI0)
const BUTTON_PIN: usize = 0;

/// One-time initialization guard
static TAKEN: AtomicBool = AtomicBool::new(false);

/// Initialized board peripherals
pub struct Board {
    pub led: OnboardLed,
    pub button: UserButton,
}

/// Board initialization
///
/// Enables the GPIO/AFIO clocks, configures the LED and button pins,
/// arms the falling-edge button interrupt, and starts SysTick at
/// [`CFG_TICK_RATE_HZ`]. Returns the peripheral handles exactly once;
/// a second call fails with [`Error::AlreadyInit`].
pub fn init() -> Result<Board> {
    if is_isr_context() {
        return Err(Error::InitIsr);
    }

    if TAKEN
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return Err(Error::AlreadyInit);
    }

    critical_section(|_cs| {
        // Enable GPIOA, GPIOC and AFIO clocks
        pac::RCC.apb2enr().modify(|w| {
            w.set_gpioaen(true);
            w.set_gpiocen(true);
            w.set_afioen(true);
        });

        // PC13: push-pull output, LED dark (pin high, LED is active low)
        pac::GPIOC.bsrr().write(|w| w.set_bs(LED_PIN, true));
        pac::GPIOC.cr(LED_PIN / 8).modify(|w| {
            w.set_mode(LED_PIN % 8, vals::Mode::OUTPUT2MHZ);
            w.set_cnf_out(LED_PIN % 8, vals::CnfOut::PUSHPULL);
        });

        // PA0: input with pull-up (ODR bit selects the pull direction)
        pac::GPIOA.cr(BUTTON_PIN / 8).modify(|w| {
            w.set_mode(BUTTON_PIN % 8, vals::Mode::INPUT);
            w.set_cnf_in(BUTTON_PIN % 8, vals::CnfIn::PULL);
        });
        pac::GPIOA.bsrr().write(|w| w.set_bs(BUTTON_PIN, true));

        // Route EXTI0 to port A, falling edge only
        pac::AFIO
            .exticr(BUTTON_PIN / 4)
            .modify(|w| w.set_exti(BUTTON_PIN % 4, 0));
        pac::EXTI.ftsr(0).modify(|w| w.set_line(BUTTON_PIN, true));
        pac::EXTI.rtsr(0).modify(|w| w.set_line(BUTTON_PIN, false));
        pac::EXTI.imr(0).modify(|w| w.set_line(BUTTON_PIN, true));

        // Button interrupt below the highest priority, then unmask
        unsafe {
            let mut p = cortex_m::Peripherals::steal();
            p.NVIC
                .set_priority(pac::Interrupt::EXTI0, CFG_BUTTON_IRQ_PRIO);
            NVIC::unmask(pac::Interrupt::EXTI0);
        }
    });

    port::systick_init(CFG_CPU_CLOCK_HZ / CFG_TICK_RATE_HZ)?;

    crate::info!("board initialized, tick rate {} Hz", CFG_TICK_RATE_HZ);

    Ok(Board {
        led: OnboardLed { _private: () },
        button: UserButton { _private: () },
    })
}

/// On-board LED, PC13, active low
pub struct OnboardLed {
    _private: (),
}

impl Led for OnboardLed {
    #[inline]
    fn set(&mut self, state: LedState) {
        // Active low: drive the pin low to light the LED
        pac::GPIOC.bsrr().write(|w| match state {
            LedState::On => w.set_br(LED_PIN, true),
            LedState::Off => w.set_bs(LED_PIN, true),
        });
    }
}

/// User button, PA0, reads low while pressed
pub struct UserButton {
    _private: (),
}

impl Button for UserButton {
    #[inline]
    fn is_pressed(&self) -> bool {
        pac::GPIOA.idr().read().idr(BUTTON_PIN) == vals::Idr::LOW
    }
}

/// EXTI0 interrupt: the button's falling edge requests a blink job
///
/// No debouncing: contact bounce can re-raise the request line, exactly
/// like the reference board firmware. While a job is active the extra
/// edges are absorbed by the at-most-one-job flag.
#[no_mangle]
extern "C" fn EXTI0() {
    if pac::EXTI.pr(0).read().line(BUTTON_PIN) {
        // Clear the pending line, otherwise the interrupt re-enters forever
        pac::EXTI.pr(0).write(|w| w.set_line(BUTTON_PIN, true));

        blinky::request_job();
        crate::debug!("button edge: blink job requested");
    }
}
