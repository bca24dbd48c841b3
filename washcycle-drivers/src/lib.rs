//! Hardware driver implementations
//!
//! Adapters from `embedded-hal` 1.0 peripherals to the washcycle board
//! traits:
//!
//! - [`board::HalBoard`] - digital pins and one PWM channel as [`BoardIo`]
//! - [`delay::HalDelay`] - any [`DelayNs`] as [`DelayMs`]
//!
//! [`BoardIo`]: washcycle_hal::BoardIo
//! [`DelayMs`]: washcycle_hal::DelayMs
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod board;
pub mod delay;

pub use board::HalBoard;
pub use delay::HalDelay;
