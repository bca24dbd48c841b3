//! Door lock interlock

use washcycle_hal::{BoardIo, OutputSignal};

use crate::sequencer::RunError;
use crate::state::State;

/// Door lock position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DoorState {
    Locked,
    #[default]
    Unlocked,
}

/// Owns the door lock output
#[derive(Debug, Default)]
pub struct DoorLock {
    state: DoorState,
}

impl DoorLock {
    pub const fn new() -> Self {
        Self {
            state: DoorState::Unlocked,
        }
    }

    /// Get current lock position
    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == DoorState::Locked
    }

    /// Engage the lock
    pub fn lock<B: BoardIo>(&mut self, board: &mut B) {
        board.set_high(OutputSignal::DoorLock);
        self.state = DoorState::Locked;
    }

    /// Release the lock if the run in `run` has finished
    ///
    /// Refused with [`RunError::Interlock`] in any other state; the output
    /// is not touched then.
    pub fn unlock<B: BoardIo>(&mut self, board: &mut B, run: State) -> Result<(), RunError> {
        if !run.door_release_allowed() {
            return Err(RunError::Interlock);
        }

        board.set_low(OutputSignal::DoorLock);
        self.state = DoorState::Unlocked;
        Ok(())
    }
}
