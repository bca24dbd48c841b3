//! washcycle - Washing Machine Controller Firmware
//!
//! Main firmware binary for RP2040-based washing machine controllers.
//! One power-on runs one program: the door is locked, the selector read,
//! the program script run to completion, and the door released.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Delay, Timer};
use washcycle_core::{Hardware, PowerOnSequence};
use washcycle_drivers::HalDelay;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod observer;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("washcycle firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let board = board::take_board(p);
    info!("Board initialized");

    let timing = board::MACHINE.timing;
    match timing.sensor_timeout_ms {
        Some(ms) => info!(
            "Polling every {} ms, sensor timeout {} ms",
            timing.poll_interval_ms, ms
        ),
        None => info!(
            "Polling every {} ms, no sensor timeout",
            timing.poll_interval_ms
        ),
    }

    let mut hw = match Hardware::new(board, HalDelay::new(Delay), timing) {
        Ok(hw) => hw,
        Err(e) => defmt::panic!("Invalid timing configuration: {}", e),
    };

    // The whole program runs blocking on this task
    let mut power_on = PowerOnSequence::new();
    let mut log = observer::LogObserver::default();
    match power_on.run(&mut hw, &mut log) {
        Ok(report) => match report.reselected {
            Some(index) => info!(
                "Run complete ({} steps), selector now at {}",
                report.steps_run,
                index.value()
            ),
            None => info!("Run complete ({} steps)", report.steps_run),
        },
        Err(e) => error!(
            "Run stopped: {}, door {}",
            e,
            power_on.door().state()
        ),
    }

    let (board, _) = hw.into_parts();
    if board.faults() > 0 {
        warn!("{} pin errors during the run", board.faults());
    }

    // Nothing left to do until the next power cycle
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
