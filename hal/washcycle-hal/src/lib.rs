//! washcycle Hardware Abstraction Layer
//!
//! This crate defines the board I/O traits the controller is written
//! against. Chip-specific crates implement them, so the same sequencer runs
//! on real hardware and on a host-side recording mock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  washcycle-core (sequencer, controllers)│
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  washcycle-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  washcycle-   │       │  test mocks   │
//! │   drivers     │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`board::BoardIo`] - Digital read/write and PWM by logical signal
//! - [`delay::DelayMs`] - Blocking waits

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod delay;
pub mod gpio;
pub mod signal;

// Re-export key items at crate root for convenience
pub use board::BoardIo;
pub use delay::DelayMs;
pub use gpio::{Level, PinMode};
pub use signal::{
    InputSignal, OutputSignal, Signal, DIGITAL_OUTPUT_COUNT, INPUT_COUNT, OUTPUT_COUNT,
};
