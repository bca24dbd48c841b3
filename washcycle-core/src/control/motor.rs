//! Motor and drain pump controller
//!
//! The drum motor is driven open-loop: a spin is a burst of forward
//! direction/speed commands, a short pause, then the same count backward.
//! Nothing measures rotation, so `cycles` is a command count, not a time.
//!
//! - `spin_motor` - forward burst, reversal pause, backward burst, stop
//! - `wash` - agitation only
//! - `centrifuge` - spin with the drain pump running

use washcycle_hal::{BoardIo, DelayMs, Level, OutputSignal};

use super::Hardware;

/// Pause between the forward and backward bursts
pub const REVERSAL_SETTLE_MS: u32 = 100;

/// Drum rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Level on the direction line (high = forward)
    pub const fn level(self) -> Level {
        match self {
            Direction::Forward => Level::High,
            Direction::Backward => Level::Low,
        }
    }
}

/// One burst of motor commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorCommand {
    /// Number of direction/speed commands to issue
    pub cycles: u16,
    /// PWM duty (0 = stopped)
    pub speed: u8,
    /// Rotation direction
    pub direction: Direction,
}

impl MotorCommand {
    /// Create a running command
    pub const fn running(cycles: u16, speed: u8, direction: Direction) -> Self {
        Self {
            cycles,
            speed,
            direction,
        }
    }
}

impl<B: BoardIo, D: DelayMs> Hardware<B, D> {
    /// Issue one burst of direction + speed commands
    pub fn drive_motor(&mut self, cmd: MotorCommand) {
        for _ in 0..cmd.cycles {
            self.board
                .write_digital(OutputSignal::MotorDirection, cmd.direction.level());
            self.board.write_pwm(OutputSignal::MotorPwm, cmd.speed);
        }
    }

    /// Spin forward, pause, spin backward, then stop the motor
    pub fn spin_motor(&mut self, cycles: u16, speed: u8) {
        self.drive_motor(MotorCommand::running(cycles, speed, Direction::Forward));
        self.delay.delay_ms(REVERSAL_SETTLE_MS);
        self.drive_motor(MotorCommand::running(cycles, speed, Direction::Backward));

        self.board.write_pwm(OutputSignal::MotorPwm, 0);
    }

    /// Agitate without draining
    pub fn wash(&mut self, cycles: u16, speed: u8) {
        self.spin_motor(cycles, speed);
    }

    /// Spin with the drain pump running
    ///
    /// The pump is switched on and off even when `cycles` is zero.
    pub fn centrifuge(&mut self, cycles: u16, speed: u8) {
        self.pump_on();
        self.spin_motor(cycles, speed);
        self.pump_off();
    }

    /// Start the drain pump
    pub fn pump_on(&mut self) {
        self.board.set_high(OutputSignal::WaterPump);
    }

    /// Stop the drain pump
    pub fn pump_off(&mut self) {
        self.board.set_low(OutputSignal::WaterPump);
    }
}
