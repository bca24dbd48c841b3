//! Board I/O abstraction
//!
//! The controller never touches pins directly. It talks to a [`BoardIo`]
//! implementation that resolves logical signal names to hardware.

use crate::gpio::{Level, PinMode};
use crate::signal::{InputSignal, OutputSignal, Signal};

/// Digital and PWM access to the machine's signals
///
/// Implementations should handle the chip-specific pin access and any
/// active-low inversion, so that callers always see active-high logic.
pub trait BoardIo {
    /// Configure the direction of a signal
    ///
    /// Boards whose pin directions are fixed at construction may treat this
    /// as a consistency check only.
    fn set_direction(&mut self, signal: Signal, mode: PinMode);

    /// Read a digital input (true = asserted)
    ///
    /// Takes `&mut self` because some pin reads require mutable access.
    fn read_digital(&mut self, input: InputSignal) -> bool;

    /// Drive a digital output
    fn write_digital(&mut self, output: OutputSignal, level: Level);

    /// Write a PWM duty cycle (0 = off, 255 = full)
    fn write_pwm(&mut self, output: OutputSignal, duty: u8);

    /// Drive an output high
    fn set_high(&mut self, output: OutputSignal) {
        self.write_digital(output, Level::High);
    }

    /// Drive an output low
    fn set_low(&mut self, output: OutputSignal) {
        self.write_digital(output, Level::Low);
    }
}

impl<T: BoardIo + ?Sized> BoardIo for &mut T {
    fn set_direction(&mut self, signal: Signal, mode: PinMode) {
        (**self).set_direction(signal, mode)
    }

    fn read_digital(&mut self, input: InputSignal) -> bool {
        (**self).read_digital(input)
    }

    fn write_digital(&mut self, output: OutputSignal, level: Level) {
        (**self).write_digital(output, level)
    }

    fn write_pwm(&mut self, output: OutputSignal, duty: u8) {
        (**self).write_pwm(output, duty)
    }
}
