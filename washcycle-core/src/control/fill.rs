//! Water fill controller
//!
//! The float switches only report "reached or not" per level, so filling to
//! a level means holding the valve open until that level's switch fires.

use washcycle_hal::{BoardIo, DelayMs, InputSignal, OutputSignal};

use super::{Hardware, SensorTimeout};

/// Wait after opening the valve before trusting the level switch
pub const FILL_SETTLE_MS: u32 = 2000;

/// Target water level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FillLevel {
    Empty,
    Half,
    Full,
}

impl FillLevel {
    /// The level switch that reports this level
    pub const fn switch(self) -> InputSignal {
        match self {
            FillLevel::Empty => InputSignal::WaterLevelEmpty,
            FillLevel::Half => InputSignal::WaterLevelHalf,
            FillLevel::Full => InputSignal::WaterLevelFull,
        }
    }
}

impl<B: BoardIo, D: DelayMs> Hardware<B, D> {
    /// Open the valve and hold it open until `level` is reached
    ///
    /// Blocks forever on a stuck switch unless a sensor timeout is
    /// configured. The valve is closed on both outcomes.
    pub fn fill_water(&mut self, level: FillLevel) -> Result<(), SensorTimeout> {
        self.board.set_high(OutputSignal::WaterValve);
        self.delay.delay_ms(FILL_SETTLE_MS);

        let reached = self.wait_for(level.switch());

        self.board.set_low(OutputSignal::WaterValve);
        reached
    }
}
