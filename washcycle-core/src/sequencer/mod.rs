//! Program sequencer
//!
//! Runs the fixed script for one selector position against the hardware,
//! driving the state machine and reporting progress to a [`RunObserver`].

pub mod executor;

pub use executor::{RunReport, Sequencer};

use crate::control::SensorTimeout;
use crate::state::Event;

/// Errors from a program run or the door wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunError {
    /// A switch never asserted
    Sensor(SensorTimeout),
    /// Door release refused while the run is not done
    Interlock,
    /// The sequencer already ran
    NotIdle,
}

impl From<SensorTimeout> for RunError {
    fn from(timeout: SensorTimeout) -> Self {
        RunError::Sensor(timeout)
    }
}

/// Receives progress events as a run executes
pub trait RunObserver {
    fn on_event(&mut self, _event: Event) {}
}

/// Discards every event
impl RunObserver for () {}

impl<T: RunObserver + ?Sized> RunObserver for &mut T {
    fn on_event(&mut self, event: Event) {
        T::on_event(self, event)
    }
}

/// Keeps the first `N` events
impl<const N: usize> RunObserver for heapless::Vec<Event, N> {
    fn on_event(&mut self, event: Event) {
        let _ = self.push(event);
    }
}
