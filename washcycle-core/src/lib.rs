//! Board-agnostic core logic for the washing machine controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Program selector decoding and the fixed program scripts
//! - Water fill, water heat and motor/pump controllers
//! - State machine and sequencer for one program run
//! - Door lock safety wrapper (the power-on sequence)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod program;
pub mod safety;
pub mod sequencer;
pub mod state;

#[cfg(test)]
pub(crate) mod mock;

pub use control::Hardware;
pub use safety::PowerOnSequence;
