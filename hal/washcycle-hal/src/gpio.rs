//! Digital level and pin direction types

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if the level is high
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if the level is low
    pub const fn is_low(self) -> bool {
        !self.is_high()
    }

    /// Apply an active-low inversion
    pub const fn inverted(self, inverted: bool) -> Self {
        if inverted {
            match self {
                Level::Low => Level::High,
                Level::High => Level::Low,
            }
        } else {
            self
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Floating digital input
    Input,
    /// Push-pull output
    Output,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
    }

    #[test]
    fn test_inversion() {
        assert_eq!(Level::High.inverted(true), Level::Low);
        assert_eq!(Level::Low.inverted(true), Level::High);
        assert_eq!(Level::High.inverted(false), Level::High);
    }
}
