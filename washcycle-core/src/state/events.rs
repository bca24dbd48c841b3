//! Events reported during a run

use crate::control::SensorTimeout;
use crate::program::{ProgramIndex, Step};

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Power-on events
    /// Door lock engaged
    DoorLocked,
    /// Selector read after the relay settled
    ProgramRead(ProgramIndex),
    /// Door lock released
    DoorUnlocked,

    // Sequencer events
    /// Script for this position started
    Start(ProgramIndex),
    /// About to execute a step
    StepStarted(Step),
    /// Selector read again by a reselect step; not dispatched
    Reselected(ProgramIndex),
    /// Last step completed
    ScriptFinished,

    // Fault events
    /// A switch never asserted
    SensorTimedOut(SensorTimeout),
}
