//! Script execution
//!
//! Steps run strictly in order with no retries. A sensor timeout stops the
//! script, drives every actuator off and leaves the machine `Faulted`.

use washcycle_hal::{BoardIo, DelayMs};

use super::{RunError, RunObserver};
use crate::control::{Hardware, SensorTimeout};
use crate::program::{script_for, ProgramIndex, Step};
use crate::state::{Event, State};

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunReport {
    /// Position that was dispatched
    pub program: ProgramIndex,
    /// Steps executed
    pub steps_run: usize,
    /// Selector value read by a reselect step, if the script had one
    pub reselected: Option<ProgramIndex>,
}

/// Runs one program script
#[derive(Debug, Default)]
pub struct Sequencer {
    state: State,
}

impl Sequencer {
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    fn emit(&mut self, observer: &mut impl RunObserver, event: Event) {
        self.state = self.state.transition(event);
        observer.on_event(event);
    }

    /// Run the script for `program` to completion
    ///
    /// Only valid from `Idle`. On a sensor timeout every actuator is driven
    /// off before the error is returned.
    pub fn run<B: BoardIo, D: DelayMs>(
        &mut self,
        hw: &mut Hardware<B, D>,
        program: ProgramIndex,
        observer: &mut impl RunObserver,
    ) -> Result<RunReport, RunError> {
        if self.state != State::Idle {
            return Err(RunError::NotIdle);
        }

        let script = script_for(program);
        self.emit(observer, Event::Start(program));

        let mut report = RunReport {
            program,
            steps_run: 0,
            reselected: None,
        };

        for step in script.steps {
            self.emit(observer, Event::StepStarted(*step));

            match execute(hw, *step) {
                Ok(Some(index)) => {
                    report.reselected = Some(index);
                    self.emit(observer, Event::Reselected(index));
                }
                Ok(None) => {}
                Err(timeout) => {
                    hw.all_off();
                    self.emit(observer, Event::SensorTimedOut(timeout));
                    return Err(timeout.into());
                }
            }
            report.steps_run += 1;
        }

        self.emit(observer, Event::ScriptFinished);
        Ok(report)
    }
}

/// Execute one step, returning the selector value for a reselect
fn execute<B: BoardIo, D: DelayMs>(
    hw: &mut Hardware<B, D>,
    step: Step,
) -> Result<Option<ProgramIndex>, SensorTimeout> {
    match step {
        Step::Fill(level) => hw.fill_water(level)?,
        Step::Heat(level) => hw.heat_water(level)?,
        Step::Wash { cycles, speed } => hw.wash(cycles, speed),
        Step::Centrifuge { cycles, speed } => hw.centrifuge(cycles, speed),
        Step::PumpOn => hw.pump_on(),
        Step::PumpOff => hw.pump_off(),
        Step::Delay(ms) => hw.delay_ms(ms),
        Step::Reselect => return Ok(Some(hw.read_program())),
    }
    Ok(None)
}
