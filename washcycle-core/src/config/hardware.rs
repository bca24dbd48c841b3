//! Hardware configuration types
//!
//! Maps every logical signal to a GPIO pin. The map is resolved once during
//! initialization and handed to the board implementation.

use heapless::FnvIndexMap;
use washcycle_hal::{InputSignal, OutputSignal, Signal, INPUT_COUNT, OUTPUT_COUNT};

use super::types::ConfigError;

/// Highest GPIO number accepted by the pin map
pub const MAX_GPIO: u8 = 29;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new active-high pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Signal-to-pin assignment for the whole board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Indexed by [`InputSignal::index`]
    pub inputs: [PinConfig; INPUT_COUNT],
    /// Indexed by [`OutputSignal::index`]
    pub outputs: [PinConfig; OUTPUT_COUNT],
}

impl Default for PinMap {
    /// Default board wiring
    fn default() -> Self {
        let mut inputs = [PinConfig::default(); INPUT_COUNT];
        inputs[InputSignal::ProgramSelect1.index()] = PinConfig::new(0);
        inputs[InputSignal::ProgramSelect2.index()] = PinConfig::new(1);
        inputs[InputSignal::ProgramSelect3.index()] = PinConfig::new(2);
        inputs[InputSignal::ProgramSelect4.index()] = PinConfig::new(3);
        inputs[InputSignal::TempLow.index()] = PinConfig::new(4);
        inputs[InputSignal::TempMedium.index()] = PinConfig::new(5);
        inputs[InputSignal::TempHigh.index()] = PinConfig::new(6);
        inputs[InputSignal::WaterLevelEmpty.index()] = PinConfig::new(7);
        inputs[InputSignal::WaterLevelHalf.index()] = PinConfig::new(8);
        inputs[InputSignal::WaterLevelFull.index()] = PinConfig::new(9);

        let mut outputs = [PinConfig::default(); OUTPUT_COUNT];
        outputs[OutputSignal::MotorPwm.index()] = PinConfig::new(10);
        outputs[OutputSignal::MotorDirection.index()] = PinConfig::new(12);
        outputs[OutputSignal::WaterValve.index()] = PinConfig::new(14);
        outputs[OutputSignal::WaterPump.index()] = PinConfig::new(15);
        outputs[OutputSignal::WaterHeater.index()] = PinConfig::new(16);
        outputs[OutputSignal::DoorLock.index()] = PinConfig::new(17);
        outputs[OutputSignal::SensorRelay.index()] = PinConfig::new(18);

        Self { inputs, outputs }
    }
}

impl PinMap {
    /// Pin assigned to an input
    pub fn input(&self, signal: InputSignal) -> PinConfig {
        self.inputs[signal.index()]
    }

    /// Pin assigned to an output
    pub fn output(&self, signal: OutputSignal) -> PinConfig {
        self.outputs[signal.index()]
    }

    /// Iterate over every (signal, pin) pair, inputs first
    pub fn iter(&self) -> impl Iterator<Item = (Signal, PinConfig)> + '_ {
        let inputs = InputSignal::ALL
            .iter()
            .map(|s| (Signal::Input(*s), self.input(*s)));
        let outputs = OutputSignal::ALL
            .iter()
            .map(|s| (Signal::Output(*s), self.output(*s)));
        inputs.chain(outputs)
    }

    /// Check that every pin is in range and used by exactly one signal
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: FnvIndexMap<u8, Signal, 32> = FnvIndexMap::new();

        for (signal, cfg) in self.iter() {
            if cfg.pin > MAX_GPIO {
                return Err(ConfigError::PinOutOfRange { signal, pin: cfg.pin });
            }
            if let Some(first) = seen.get(&cfg.pin) {
                return Err(ConfigError::DuplicatePin {
                    pin: cfg.pin,
                    first: *first,
                    second: signal,
                });
            }
            // Capacity exceeds the signal count, insert cannot fail
            let _ = seen.insert(cfg.pin, signal);
        }

        Ok(())
    }
}
