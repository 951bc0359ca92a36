//! Board support packages
//!
//! Register-level board initialization: clocks, the LED sink, the user
//! button, its request interrupt, and the SysTick source. The engine
//! itself only ever sees the [`Led`](crate::types::Led) and
//! [`Button`](crate::types::Button) capabilities handed out here.

#[cfg(all(feature = "pac", feature = "rt", target_arch = "arm"))]
pub mod stm32f103;

#[cfg(all(feature = "pac", feature = "rt", target_arch = "arm"))]
pub use stm32f103::*;
