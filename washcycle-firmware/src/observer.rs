//! Run progress logging

use defmt::{debug, info, warn};
use washcycle_core::program::{script_for, Step};
use washcycle_core::sequencer::RunObserver;
use washcycle_core::state::Event;

/// Logs every run event over defmt
#[derive(Default)]
pub struct LogObserver {
    steps: u32,
}

impl RunObserver for LogObserver {
    fn on_event(&mut self, event: Event) {
        match event {
            Event::DoorLocked => info!("Door locked"),
            Event::ProgramRead(index) => {
                info!("Selector at {} ({})", index.value(), script_for(index).name())
            }
            Event::Start(index) => {
                let script = script_for(index);
                info!("Running {}: {} steps", script.name(), script.len());
            }
            Event::StepStarted(step) => {
                self.steps += 1;
                match step {
                    Step::Delay(ms) => debug!("Step {}: wait {} ms", self.steps, ms),
                    _ => info!("Step {}: {}", self.steps, step),
                }
            }
            Event::Reselected(index) => {
                info!("Selector re-read: {} (not started)", index.value())
            }
            Event::ScriptFinished => info!("Program finished after {} steps", self.steps),
            Event::SensorTimedOut(timeout) => warn!(
                "{} did not assert within {} ms, actuators off",
                timeout.input.name(),
                timeout.waited_ms
            ),
            Event::DoorUnlocked => info!("Door unlocked"),
        }
    }
}
