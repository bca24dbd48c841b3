//! RP2040 board wiring
//!
//! The pin table and constructor are generated from machine.toml by
//! build.rs, so a wiring change is a rebuild, not a code change.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm, PwmOutput};
use embassy_rp::Peripherals;
use washcycle_core::config::{MachineConfig, PinConfig, PinMap, TimingConfig};
use washcycle_drivers::HalBoard;

/// Board type for this firmware
pub type RpBoard = HalBoard<Input<'static>, Output<'static>, PwmOutput<'static>>;

include!(concat!(env!("OUT_DIR"), "/board.rs"));
