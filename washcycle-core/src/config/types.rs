//! Configuration type definitions

use washcycle_hal::Signal;

use super::hardware::PinMap;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two signals share one pin
    DuplicatePin {
        pin: u8,
        first: Signal,
        second: Signal,
    },
    /// Pin number beyond the chip's GPIO range
    PinOutOfRange { signal: Signal, pin: u8 },
    /// A sensor timeout needs a non-zero poll interval to measure elapsed time
    TimeoutWithoutPollInterval,
}

/// Sensor polling configuration
///
/// The default is a tight spin-poll with no timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Delay between sensor polls in ms (0 = spin without sleeping)
    pub poll_interval_ms: u32,
    /// Give up waiting on a switch after this long (None = wait forever)
    pub sensor_timeout_ms: Option<u32>,
}

impl TimingConfig {
    /// Poll with a sleep between reads, never time out
    pub const fn polling(poll_interval_ms: u32) -> Self {
        Self {
            poll_interval_ms,
            sensor_timeout_ms: None,
        }
    }

    /// Poll with a sleep between reads and give up after `timeout_ms`
    pub const fn with_timeout(poll_interval_ms: u32, timeout_ms: u32) -> Self {
        Self {
            poll_interval_ms,
            sensor_timeout_ms: Some(timeout_ms),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sensor_timeout_ms.is_some() && self.poll_interval_ms == 0 {
            return Err(ConfigError::TimeoutWithoutPollInterval);
        }
        Ok(())
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MachineConfig {
    /// Signal-to-pin assignment
    pub pins: PinMap,
    /// Sensor polling behaviour
    pub timing: TimingConfig,
}

impl MachineConfig {
    /// Validate pins and timing
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pins.validate()?;
        self.timing.validate()
    }
}
