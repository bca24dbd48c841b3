//! `embedded-hal` board adapter
//!
//! Resolves logical signals to concrete pins through a fixed table built
//! from the [`PinMap`]. Pin directions are decided when the pins are
//! constructed, so `set_direction` has nothing left to do.
//!
//! Active-low wiring is handled here: a pin marked `inverted` is read and
//! driven with the opposite level, so the controllers above only ever see
//! active-high signals.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;
use washcycle_core::config::PinMap;
use washcycle_hal::{
    BoardIo, InputSignal, Level, OutputSignal, PinMode, Signal, DIGITAL_OUTPUT_COUNT, INPUT_COUNT,
    OUTPUT_COUNT,
};

/// Board over `embedded-hal` input pins, output pins and one PWM channel
///
/// `inputs` are ordered as [`InputSignal::ALL`], `outputs` as
/// [`OutputSignal::DIGITAL`]. The PWM channel drives the motor speed.
pub struct HalBoard<I, O, P> {
    inputs: [I; INPUT_COUNT],
    outputs: [O; DIGITAL_OUTPUT_COUNT],
    pwm: P,
    input_inverted: [bool; INPUT_COUNT],
    output_inverted: [bool; OUTPUT_COUNT],
    faults: u32,
}

impl<I: InputPin, O: OutputPin, P: SetDutyCycle> HalBoard<I, O, P> {
    /// Create a board, taking the inversion flags from `pins`
    pub fn new(
        inputs: [I; INPUT_COUNT],
        outputs: [O; DIGITAL_OUTPUT_COUNT],
        pwm: P,
        pins: &PinMap,
    ) -> Self {
        Self {
            inputs,
            outputs,
            pwm,
            input_inverted: InputSignal::ALL.map(|s| pins.input(s).inverted),
            output_inverted: OutputSignal::ALL.map(|s| pins.output(s).inverted),
            faults: 0,
        }
    }

    /// Number of pin operations that returned an error
    pub fn faults(&self) -> u32 {
        self.faults
    }

    /// Release the pins
    pub fn release(self) -> ([I; INPUT_COUNT], [O; DIGITAL_OUTPUT_COUNT], P) {
        (self.inputs, self.outputs, self.pwm)
    }

    fn record_fault(&mut self, signal: Signal) {
        self.faults = self.faults.saturating_add(1);
        #[cfg(feature = "defmt")]
        defmt::warn!("I/O error on {}", signal.name());
        #[cfg(not(feature = "defmt"))]
        let _ = signal;
    }
}

impl<I: InputPin, O: OutputPin, P: SetDutyCycle> BoardIo for HalBoard<I, O, P> {
    fn set_direction(&mut self, _signal: Signal, _mode: PinMode) {}

    /// A read error counts as "not asserted"
    fn read_digital(&mut self, input: InputSignal) -> bool {
        let inverted = self.input_inverted[input.index()];
        match self.inputs[input.index()].is_high() {
            Ok(high) => high != inverted,
            Err(_) => {
                self.record_fault(Signal::Input(input));
                false
            }
        }
    }

    fn write_digital(&mut self, output: OutputSignal, level: Level) {
        let Some(slot) = output.digital_index() else {
            // Level on the PWM line: full duty or off
            let duty = if level.is_high() { u8::MAX } else { 0 };
            return self.write_pwm(output, duty);
        };

        let level = level.inverted(self.output_inverted[output.index()]);
        let state = if level.is_high() {
            PinState::High
        } else {
            PinState::Low
        };
        if self.outputs[slot].set_state(state).is_err() {
            self.record_fault(Signal::Output(output));
        }
    }

    fn write_pwm(&mut self, output: OutputSignal, duty: u8) {
        if !output.is_pwm() {
            return self.write_digital(output, Level::from(duty > 0));
        }

        let duty = if self.output_inverted[output.index()] {
            u8::MAX - duty
        } else {
            duty
        };
        if self
            .pwm
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            .is_err()
        {
            self.record_fault(Signal::Output(output));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use washcycle_core::config::PinConfig;

    /// Mock GPIO pin for testing
    #[derive(Default)]
    struct MockPin {
        high: bool,
        broken: bool,
    }

    #[derive(Debug)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl ErrorType for MockPin {
        type Error = PinFault;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, PinFault> {
            if self.broken {
                Err(PinFault)
            } else {
                Ok(self.high)
            }
        }

        fn is_low(&mut self) -> Result<bool, PinFault> {
            self.is_high().map(|h| !h)
        }
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), PinFault> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), PinFault> {
            self.high = true;
            Ok(())
        }
    }

    /// PWM channel with an 8-bit range
    #[derive(Default)]
    struct MockPwm {
        duty: u16,
    }

    impl embedded_hal::pwm::ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            255
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
            self.duty = duty;
            Ok(())
        }
    }

    type TestBoard = HalBoard<MockPin, MockPin, MockPwm>;

    fn board(pins: &PinMap) -> TestBoard {
        HalBoard::new(
            Default::default(),
            Default::default(),
            MockPwm::default(),
            pins,
        )
    }

    fn output_high(board: &TestBoard, output: OutputSignal) -> bool {
        board.outputs[output.digital_index().unwrap()].high
    }

    #[test]
    fn test_active_high_output() {
        let mut board = board(&PinMap::default());

        board.set_high(OutputSignal::WaterValve);
        assert!(output_high(&board, OutputSignal::WaterValve));
        assert!(!output_high(&board, OutputSignal::WaterPump));

        board.set_low(OutputSignal::WaterValve);
        assert!(!output_high(&board, OutputSignal::WaterValve));
    }

    #[test]
    fn test_active_low_output() {
        let mut pins = PinMap::default();
        pins.outputs[OutputSignal::DoorLock.index()] = PinConfig::inverted(17);
        let mut board = board(&pins);

        // Lock engaged = pin low
        board.set_high(OutputSignal::DoorLock);
        assert!(!output_high(&board, OutputSignal::DoorLock));

        board.set_low(OutputSignal::DoorLock);
        assert!(output_high(&board, OutputSignal::DoorLock));
    }

    #[test]
    fn test_inverted_input() {
        let mut pins = PinMap::default();
        pins.inputs[InputSignal::TempLow.index()] = PinConfig::inverted(4);
        let mut board = board(&pins);

        assert!(board.read_digital(InputSignal::TempLow));
        assert!(!board.read_digital(InputSignal::TempHigh));

        board.inputs[InputSignal::TempLow.index()].high = true;
        board.inputs[InputSignal::TempHigh.index()].high = true;
        assert!(!board.read_digital(InputSignal::TempLow));
        assert!(board.read_digital(InputSignal::TempHigh));
    }

    #[test]
    fn test_pwm_duty() {
        let mut board = board(&PinMap::default());

        board.write_pwm(OutputSignal::MotorPwm, 128);
        assert_eq!(board.pwm.duty, 128);

        board.write_pwm(OutputSignal::MotorPwm, 0);
        assert_eq!(board.pwm.duty, 0);

        // Level on the PWM line
        board.set_high(OutputSignal::MotorPwm);
        assert_eq!(board.pwm.duty, 255);
    }

    #[test]
    fn test_inverted_pwm() {
        let mut pins = PinMap::default();
        pins.outputs[OutputSignal::MotorPwm.index()] = PinConfig::inverted(10);
        let mut board = board(&pins);

        board.write_pwm(OutputSignal::MotorPwm, 0);
        assert_eq!(board.pwm.duty, 255);
        board.write_pwm(OutputSignal::MotorPwm, 200);
        assert_eq!(board.pwm.duty, 55);
    }

    #[test]
    fn test_read_error_counts_as_low() {
        let mut board = board(&PinMap::default());
        let pin = &mut board.inputs[InputSignal::WaterLevelFull.index()];
        pin.high = true;
        pin.broken = true;

        assert!(!board.read_digital(InputSignal::WaterLevelFull));
        assert_eq!(board.faults(), 1);
    }
}
