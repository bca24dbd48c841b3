//! State machine definition
//!
//! One program run per power-on: the machine leaves `Idle` exactly once and
//! ends in `Done` or `Faulted`. Neither end state has a way back.

use washcycle_hal::InputSignal;

use super::events::Event;
use crate::program::ProgramIndex;

/// Sequencer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Nothing run yet
    #[default]
    Idle,
    /// Script for this selector position executing
    Running(ProgramIndex),
    /// Script finished
    Done,
    /// A switch never asserted; actuators off, door kept locked
    Faulted(InputSignal),
}

impl State {
    /// Check if the door may be released in this state
    pub fn door_release_allowed(&self) -> bool {
        matches!(self, State::Done)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, Start(index)) => Running(index),

            (Running(_), ScriptFinished) => Done,
            (Running(_), SensorTimedOut(timeout)) => Faulted(timeout.input),

            // Step progress, reselects and door events do not move the run
            _ => self,
        }
    }
}
