//! Water heat controller
//!
//! Same shape as the fill controller, against the thermostat switches.
//! Unlike filling there is no settle delay before the first poll.

use washcycle_hal::{BoardIo, DelayMs, InputSignal, OutputSignal};

use super::{Hardware, SensorTimeout};

/// Target water temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeatLevel {
    Low,
    Medium,
    High,
}

impl HeatLevel {
    /// The temperature switch that reports this level
    pub const fn switch(self) -> InputSignal {
        match self {
            HeatLevel::Low => InputSignal::TempLow,
            HeatLevel::Medium => InputSignal::TempMedium,
            HeatLevel::High => InputSignal::TempHigh,
        }
    }
}

impl<B: BoardIo, D: DelayMs> Hardware<B, D> {
    /// Run the heater until `level` is reached
    pub fn heat_water(&mut self, level: HeatLevel) -> Result<(), SensorTimeout> {
        self.board.set_high(OutputSignal::WaterHeater);

        let reached = self.wait_for(level.switch());

        self.board.set_low(OutputSignal::WaterHeater);
        reached
    }
}
