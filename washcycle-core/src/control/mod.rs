//! Actuator controllers
//!
//! [`Hardware`] bundles the board, the delay service and the polling
//! configuration. Each controller adds its operations to it:
//!
//! - [`fill`] - water valve against the level switches
//! - [`heat`] - heater against the temperature switches
//! - [`motor`] - agitation, spin and drain pump
//! - [`poll`] - the blocking wait-for-switch primitive they share

pub mod fill;
pub mod heat;
pub mod motor;
pub mod poll;

pub use fill::{FillLevel, FILL_SETTLE_MS};
pub use heat::HeatLevel;
pub use motor::{Direction, MotorCommand, REVERSAL_SETTLE_MS};
pub use poll::SensorTimeout;

use washcycle_hal::{BoardIo, DelayMs, InputSignal, OutputSignal, PinMode, Signal};

use crate::config::{ConfigError, TimingConfig};

/// Board, delay and timing for one controller run
pub struct Hardware<B, D> {
    pub(crate) board: B,
    pub(crate) delay: D,
    pub(crate) timing: TimingConfig,
}

impl<B: BoardIo, D: DelayMs> Hardware<B, D> {
    /// Create the hardware bundle, rejecting invalid timing
    pub fn new(board: B, delay: D, timing: TimingConfig) -> Result<Self, ConfigError> {
        timing.validate()?;
        Ok(Self {
            board,
            delay,
            timing,
        })
    }

    /// Direct access to the board
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Release the board and delay
    pub fn into_parts(self) -> (B, D) {
        (self.board, self.delay)
    }

    /// Block for a fixed time
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Configure every input and output direction
    pub fn define_io(&mut self) {
        for output in OutputSignal::ALL {
            self.board.set_direction(Signal::Output(output), PinMode::Output);
        }
        for input in InputSignal::ALL {
            self.board.set_direction(Signal::Input(input), PinMode::Input);
        }
    }

    /// Power the relay feeding the level and temperature switches
    ///
    /// Held high for the rest of the run.
    pub fn power_on_relay(&mut self) {
        self.board.set_high(OutputSignal::SensorRelay);
    }

    /// Drive every actuator to its safe state
    ///
    /// Leaves the door lock and sensor relay untouched.
    pub fn all_off(&mut self) {
        self.board.set_low(OutputSignal::WaterValve);
        self.board.set_low(OutputSignal::WaterHeater);
        self.board.set_low(OutputSignal::WaterPump);
        self.board.write_pwm(OutputSignal::MotorPwm, 0);
    }
}
