//! Fixed program scripts
//!
//! Each selector position maps to an ordered list of actuator steps. The
//! lists are fixed at build time; positions without a named program share
//! the "wait and re-read the selector" script.

use super::{Program, ProgramIndex};
use crate::control::{FillLevel, HeatLevel};

/// Motor command count used by most programs
pub const DEFAULT_MOTOR_CYCLES: u16 = 100;
/// Motor command count for the gentle program
pub const GENTLE_MOTOR_CYCLES: u16 = 20;
/// Motor command count for long washes and spins
pub const LONG_MOTOR_CYCLES: u16 = 250;

pub const MAX_MOTOR_SPEED: u8 = 255;
pub const MEDIUM_MOTOR_SPEED: u8 = 128;
pub const LOW_MOTOR_SPEED: u8 = 50;

/// Quick: pause between wash and spin
pub const QUICK_SPIN_PAUSE_MS: u32 = 1500;
/// Double wash: soak after heating
pub const DOUBLE_WASH_SOAK_MS: u32 = 1000;
/// Double wash: pause between the two rounds
pub const DOUBLE_WASH_ROUND_PAUSE_MS: u32 = 5000;
/// Double wash: soak after the second fill
pub const DOUBLE_WASH_REFILL_SOAK_MS: u32 = 1000;
/// Double wash: final drain
pub const DOUBLE_WASH_DRAIN_MS: u32 = 2000;
/// Gentle spin: pause between wash and spin
pub const GENTLE_SPIN_PAUSE_MS: u32 = 2000;
/// Wool: soak after filling
pub const WOOL_SOAK_MS: u32 = 1500;
/// Sport: final drain
pub const SPORT_DRAIN_MS: u32 = 10_000;
/// Unmapped positions: wait before re-reading the selector
pub const RESELECT_WAIT_MS: u32 = 5000;

/// One script step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Fill to a level
    Fill(FillLevel),
    /// Heat to a level
    Heat(HeatLevel),
    /// Agitate without draining
    Wash { cycles: u16, speed: u8 },
    /// Spin with the drain pump running
    Centrifuge { cycles: u16, speed: u8 },
    PumpOn,
    PumpOff,
    /// Fixed wait in ms
    Delay(u32),
    /// Read the selector again; the result is reported, not run
    Reselect,
}

/// Ordered steps for one selector position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleScript {
    /// The named program, or None for the re-read script
    pub program: Option<Program>,
    /// Steps in execution order
    pub steps: &'static [Step],
}

impl CycleScript {
    /// Display name
    pub const fn name(&self) -> &'static str {
        match self.program {
            Some(p) => p.name(),
            None => "Select program",
        }
    }

    /// Number of steps
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

const RESELECT_STEPS: &[Step] = &[Step::Delay(RESELECT_WAIT_MS), Step::Reselect];

const STANDARD_STEPS: &[Step] = &[
    Step::Fill(FillLevel::Half),
    Step::Heat(HeatLevel::Medium),
    Step::Wash {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: LOW_MOTOR_SPEED,
    },
    Step::Centrifuge {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: LOW_MOTOR_SPEED,
    },
];

const CENTRIFUGE_ONLY_STEPS: &[Step] = &[Step::Centrifuge {
    cycles: DEFAULT_MOTOR_CYCLES,
    speed: MAX_MOTOR_SPEED,
}];

const QUICK_STEPS: &[Step] = &[
    Step::Fill(FillLevel::Half),
    Step::Wash {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: MAX_MOTOR_SPEED,
    },
    Step::Delay(QUICK_SPIN_PAUSE_MS),
    Step::Centrifuge {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: MAX_MOTOR_SPEED,
    },
];

const DOUBLE_WASH_STEPS: &[Step] = &[
    Step::Fill(FillLevel::Full),
    Step::Heat(HeatLevel::Medium),
    Step::Delay(DOUBLE_WASH_SOAK_MS),
    Step::Wash {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: MEDIUM_MOTOR_SPEED,
    },
    Step::Centrifuge {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: MEDIUM_MOTOR_SPEED,
    },
    Step::Delay(DOUBLE_WASH_ROUND_PAUSE_MS),
    Step::Fill(FillLevel::Half),
    Step::Delay(DOUBLE_WASH_REFILL_SOAK_MS),
    Step::Wash {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: MEDIUM_MOTOR_SPEED,
    },
    Step::Centrifuge {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: MEDIUM_MOTOR_SPEED,
    },
    Step::PumpOn,
    Step::Delay(DOUBLE_WASH_DRAIN_MS),
    Step::PumpOff,
];

const GENTLE_SPIN_STEPS: &[Step] = &[
    Step::Fill(FillLevel::Half),
    Step::Wash {
        cycles: GENTLE_MOTOR_CYCLES,
        speed: LOW_MOTOR_SPEED,
    },
    Step::Delay(GENTLE_SPIN_PAUSE_MS),
    Step::Centrifuge {
        cycles: GENTLE_MOTOR_CYCLES,
        speed: LOW_MOTOR_SPEED,
    },
];

const WOOL_STEPS: &[Step] = &[
    Step::Fill(FillLevel::Full),
    Step::Delay(WOOL_SOAK_MS),
    Step::Wash {
        cycles: DEFAULT_MOTOR_CYCLES,
        speed: MAX_MOTOR_SPEED,
    },
    Step::Centrifuge {
        cycles: LONG_MOTOR_CYCLES,
        speed: MAX_MOTOR_SPEED,
    },
];

// Sport runs on into the re-read script after its drain.
const SPORT_STEPS: &[Step] = &[
    Step::Fill(FillLevel::Full),
    Step::Wash {
        cycles: LONG_MOTOR_CYCLES,
        speed: MAX_MOTOR_SPEED,
    },
    Step::PumpOn,
    Step::Delay(SPORT_DRAIN_MS),
    Step::PumpOff,
    Step::Delay(RESELECT_WAIT_MS),
    Step::Reselect,
];

/// Script for positions without a named program
pub const RESELECT_SCRIPT: CycleScript = CycleScript {
    program: None,
    steps: RESELECT_STEPS,
};

impl Program {
    /// The script this program runs
    pub const fn script(self) -> CycleScript {
        let steps = match self {
            Program::Standard => STANDARD_STEPS,
            Program::CentrifugeOnly => CENTRIFUGE_ONLY_STEPS,
            Program::Quick => QUICK_STEPS,
            Program::DoubleWash => DOUBLE_WASH_STEPS,
            Program::GentleSpin => GENTLE_SPIN_STEPS,
            Program::Wool => WOOL_STEPS,
            Program::Sport => SPORT_STEPS,
        };
        CycleScript {
            program: Some(self),
            steps,
        }
    }
}

/// Look up the script for a selector position
pub const fn script_for(index: ProgramIndex) -> CycleScript {
    match index.program() {
        Some(program) => program.script(),
        None => RESELECT_SCRIPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_positions_share_reselect_script() {
        for value in [0u8, 8, 9, 10, 11, 12, 13, 14, 15] {
            let script = script_for(ProgramIndex::from_bits(value));
            assert_eq!(script, RESELECT_SCRIPT);
            assert_eq!(script.steps, &[Step::Delay(5000), Step::Reselect]);
        }
    }

    #[test]
    fn test_every_named_program_has_actuator_steps() {
        for program in Program::ALL {
            let script = program.script();
            assert!(!script.is_empty());
            assert!(script
                .steps
                .iter()
                .any(|s| !matches!(s, Step::Delay(_) | Step::Reselect)));
            assert_eq!(script.name(), program.name());
        }
    }

    #[test]
    fn test_standard() {
        let script = Program::Standard.script();
        assert_eq!(
            script.steps,
            &[
                Step::Fill(FillLevel::Half),
                Step::Heat(HeatLevel::Medium),
                Step::Wash {
                    cycles: 100,
                    speed: 50
                },
                Step::Centrifuge {
                    cycles: 100,
                    speed: 50
                },
            ]
        );
    }

    #[test]
    fn test_centrifuge_only() {
        let script = Program::CentrifugeOnly.script();
        assert_eq!(
            script.steps,
            &[Step::Centrifuge {
                cycles: 100,
                speed: 255
            }]
        );
    }

    #[test]
    fn test_quick() {
        let script = Program::Quick.script();
        assert_eq!(
            script.steps,
            &[
                Step::Fill(FillLevel::Half),
                Step::Wash {
                    cycles: 100,
                    speed: 255
                },
                Step::Delay(1500),
                Step::Centrifuge {
                    cycles: 100,
                    speed: 255
                },
            ]
        );
    }

    #[test]
    fn test_double_wash() {
        let wash = Step::Wash {
            cycles: 100,
            speed: 128,
        };
        let spin = Step::Centrifuge {
            cycles: 100,
            speed: 128,
        };
        let script = Program::DoubleWash.script();
        assert_eq!(script.len(), 13);
        assert_eq!(
            script.steps,
            &[
                Step::Fill(FillLevel::Full),
                Step::Heat(HeatLevel::Medium),
                Step::Delay(1000),
                wash,
                spin,
                Step::Delay(5000),
                Step::Fill(FillLevel::Half),
                Step::Delay(1000),
                wash,
                spin,
                Step::PumpOn,
                Step::Delay(2000),
                Step::PumpOff,
            ]
        );
    }

    #[test]
    fn test_gentle_spin() {
        let script = Program::GentleSpin.script();
        assert_eq!(
            script.steps,
            &[
                Step::Fill(FillLevel::Half),
                Step::Wash {
                    cycles: 20,
                    speed: 50
                },
                Step::Delay(2000),
                Step::Centrifuge {
                    cycles: 20,
                    speed: 50
                },
            ]
        );
    }

    #[test]
    fn test_wool() {
        let script = Program::Wool.script();
        assert_eq!(
            script.steps,
            &[
                Step::Fill(FillLevel::Full),
                Step::Delay(1500),
                Step::Wash {
                    cycles: 100,
                    speed: 255
                },
                Step::Centrifuge {
                    cycles: 250,
                    speed: 255
                },
            ]
        );
    }

    #[test]
    fn test_sport() {
        let script = Program::Sport.script();
        assert_eq!(
            script.steps,
            &[
                Step::Fill(FillLevel::Full),
                Step::Wash {
                    cycles: 250,
                    speed: 255
                },
                Step::PumpOn,
                Step::Delay(10_000),
                Step::PumpOff,
                Step::Delay(5000),
                Step::Reselect,
            ]
        );
    }

    #[test]
    fn test_sport_falls_through_to_reselect() {
        let steps = Program::Sport.script().steps;
        assert_eq!(&steps[steps.len() - 2..], RESELECT_STEPS);
    }

    #[test]
    fn test_only_sport_rereads_among_named_programs() {
        for program in Program::ALL {
            let rereads = program.script().steps.contains(&Step::Reselect);
            assert_eq!(rereads, program == Program::Sport);
        }
    }
}
