//! Power-on sequence
//!
//! The single entry point of the controller:
//!
//! 1. configure every pin direction
//! 2. lock the door
//! 3. power the sensor relay and let the switches settle
//! 4. read the selector once and run that script
//! 5. release the door and wait before returning
//!
//! If the run faults the sequence stops after step 4 with the door locked.

use washcycle_hal::{BoardIo, DelayMs};

use super::door::DoorLock;
use crate::control::Hardware;
use crate::sequencer::{RunError, RunObserver, RunReport, Sequencer};
use crate::state::Event;

/// Wait after powering the sensor relay before reading anything
pub const RELAY_SETTLE_MS: u32 = 1000;

/// Wait after releasing the door lock
pub const UNLOCK_SETTLE_MS: u32 = 5000;

/// Door-guarded program run
#[derive(Debug, Default)]
pub struct PowerOnSequence {
    door: DoorLock,
    sequencer: Sequencer,
}

impl PowerOnSequence {
    pub const fn new() -> Self {
        Self {
            door: DoorLock::new(),
            sequencer: Sequencer::new(),
        }
    }

    pub fn door(&self) -> &DoorLock {
        &self.door
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Run the whole power-on sequence once
    pub fn run<B: BoardIo, D: DelayMs>(
        &mut self,
        hw: &mut Hardware<B, D>,
        observer: &mut impl RunObserver,
    ) -> Result<RunReport, RunError> {
        hw.define_io();

        self.door.lock(hw.board_mut());
        observer.on_event(Event::DoorLocked);

        hw.power_on_relay();
        hw.delay_ms(RELAY_SETTLE_MS);

        let program = hw.read_program();
        observer.on_event(Event::ProgramRead(program));

        let report = self.sequencer.run(hw, program, observer)?;

        self.door.unlock(hw.board_mut(), self.sequencer.state())?;
        observer.on_event(Event::DoorUnlocked);
        hw.delay_ms(UNLOCK_SETTLE_MS);

        Ok(report)
    }
}
