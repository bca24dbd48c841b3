//! Logical signal names
//!
//! Every physical line the controller touches is addressed by one of these
//! names. Chip-specific boards resolve them to pins once at start-up.

/// Number of digital input signals
pub const INPUT_COUNT: usize = 10;

/// Number of output signals (including the motor PWM line)
pub const OUTPUT_COUNT: usize = 7;

/// Number of level-driven outputs (all but the motor PWM line)
pub const DIGITAL_OUTPUT_COUNT: usize = OUTPUT_COUNT - 1;

/// Digital inputs, all active-high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InputSignal {
    /// Program selector bit 0 (LSB)
    ProgramSelect1 = 0,
    /// Program selector bit 1
    ProgramSelect2 = 1,
    /// Program selector bit 2
    ProgramSelect3 = 2,
    /// Program selector bit 3 (MSB)
    ProgramSelect4 = 3,
    /// Float switch at the bottom of the tub
    WaterLevelEmpty = 4,
    /// Float switch at half fill
    WaterLevelHalf = 5,
    /// Float switch at full fill
    WaterLevelFull = 6,
    /// Thermostat switch, low temperature
    TempLow = 7,
    /// Thermostat switch, medium temperature
    TempMedium = 8,
    /// Thermostat switch, high temperature
    TempHigh = 9,
}

impl InputSignal {
    /// All inputs in index order
    pub const ALL: [InputSignal; INPUT_COUNT] = [
        InputSignal::ProgramSelect1,
        InputSignal::ProgramSelect2,
        InputSignal::ProgramSelect3,
        InputSignal::ProgramSelect4,
        InputSignal::WaterLevelEmpty,
        InputSignal::WaterLevelHalf,
        InputSignal::WaterLevelFull,
        InputSignal::TempLow,
        InputSignal::TempMedium,
        InputSignal::TempHigh,
    ];

    /// Program selector lines, LSB first
    pub const PROGRAM_SELECT: [InputSignal; 4] = [
        InputSignal::ProgramSelect1,
        InputSignal::ProgramSelect2,
        InputSignal::ProgramSelect3,
        InputSignal::ProgramSelect4,
    ];

    /// Position in [`InputSignal::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a signal from its index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Configuration key for this signal (`machine.toml`)
    pub const fn name(self) -> &'static str {
        match self {
            InputSignal::ProgramSelect1 => "program_select_1",
            InputSignal::ProgramSelect2 => "program_select_2",
            InputSignal::ProgramSelect3 => "program_select_3",
            InputSignal::ProgramSelect4 => "program_select_4",
            InputSignal::WaterLevelEmpty => "water_level_empty",
            InputSignal::WaterLevelHalf => "water_level_half",
            InputSignal::WaterLevelFull => "water_level_full",
            InputSignal::TempLow => "temp_low",
            InputSignal::TempMedium => "temp_medium",
            InputSignal::TempHigh => "temp_high",
        }
    }

    /// Look a signal up by configuration key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

/// Outputs driven by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputSignal {
    /// Motor direction (high = forward)
    MotorDirection = 0,
    /// Motor speed, PWM duty 0-255
    MotorPwm = 1,
    /// Inlet water valve
    WaterValve = 2,
    /// Drain pump
    WaterPump = 3,
    /// Heating element
    WaterHeater = 4,
    /// Door lock solenoid (high = locked)
    DoorLock = 5,
    /// Relay powering the level and temperature switches
    SensorRelay = 6,
}

impl OutputSignal {
    /// All outputs in index order
    pub const ALL: [OutputSignal; OUTPUT_COUNT] = [
        OutputSignal::MotorDirection,
        OutputSignal::MotorPwm,
        OutputSignal::WaterValve,
        OutputSignal::WaterPump,
        OutputSignal::WaterHeater,
        OutputSignal::DoorLock,
        OutputSignal::SensorRelay,
    ];

    /// Level-driven outputs, in [`OutputSignal::digital_index`] order
    pub const DIGITAL: [OutputSignal; DIGITAL_OUTPUT_COUNT] = [
        OutputSignal::MotorDirection,
        OutputSignal::WaterValve,
        OutputSignal::WaterPump,
        OutputSignal::WaterHeater,
        OutputSignal::DoorLock,
        OutputSignal::SensorRelay,
    ];

    /// Position in [`OutputSignal::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position in [`OutputSignal::DIGITAL`], None for the PWM line
    pub const fn digital_index(self) -> Option<usize> {
        match self {
            OutputSignal::MotorDirection => Some(0),
            OutputSignal::MotorPwm => None,
            other => Some(other as usize - 1),
        }
    }

    /// Create a signal from its index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this output carries a PWM duty rather than a level
    pub const fn is_pwm(self) -> bool {
        matches!(self, OutputSignal::MotorPwm)
    }

    /// Configuration key for this signal (`machine.toml`)
    pub const fn name(self) -> &'static str {
        match self {
            OutputSignal::MotorDirection => "motor_direction",
            OutputSignal::MotorPwm => "motor_pwm",
            OutputSignal::WaterValve => "water_valve",
            OutputSignal::WaterPump => "water_pump",
            OutputSignal::WaterHeater => "water_heater",
            OutputSignal::DoorLock => "door_lock",
            OutputSignal::SensorRelay => "sensor_relay",
        }
    }

    /// Look a signal up by configuration key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

/// Any signal, used where direction is being configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    Input(InputSignal),
    Output(OutputSignal),
}

impl Signal {
    /// Configuration key for this signal
    pub const fn name(self) -> &'static str {
        match self {
            Signal::Input(s) => s.name(),
            Signal::Output(s) => s.name(),
        }
    }

    /// Look a signal up by configuration key
    pub fn from_name(name: &str) -> Option<Self> {
        InputSignal::from_name(name)
            .map(Signal::Input)
            .or_else(|| OutputSignal::from_name(name).map(Signal::Output))
    }
}

impl From<InputSignal> for Signal {
    fn from(s: InputSignal) -> Self {
        Signal::Input(s)
    }
}

impl From<OutputSignal> for Signal {
    fn from(s: OutputSignal) -> Self {
        Signal::Output(s)
    }
}
