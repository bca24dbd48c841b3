//! Recording board and delay for host tests
//!
//! Every board call and delay lands in one shared [`Trace`] so tests can
//! assert on the exact interleaving of reads, writes and waits.

use std::cell::RefCell;
use std::rc::Rc;

use washcycle_hal::{
    BoardIo, DelayMs, InputSignal, Level, OutputSignal, PinMode, Signal, INPUT_COUNT,
};

use crate::config::TimingConfig;
use crate::control::Hardware;

/// One recorded board or delay call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Direction(Signal, PinMode),
    Read(InputSignal, bool),
    Write(OutputSignal, Level),
    Pwm(OutputSignal, u8),
    Delay(u32),
}

/// Shared call log
#[derive(Debug, Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Op>>>);

impl Trace {
    fn push(&self, op: Op) {
        self.0.borrow_mut().push(op);
    }

    /// Snapshot of every recorded call
    pub fn ops(&self) -> Vec<Op> {
        self.0.borrow().clone()
    }

    /// Recorded calls without the sensor reads
    pub fn actions(&self) -> Vec<Op> {
        self.ops()
            .into_iter()
            .filter(|op| !matches!(op, Op::Read(..) | Op::Direction(..)))
            .collect()
    }

    pub fn reads_of(&self, input: InputSignal) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|op| matches!(op, Op::Read(s, _) if *s == input))
            .count()
    }

    pub fn total_reads(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|op| matches!(op, Op::Read(..)))
            .count()
    }

    pub fn writes_to(&self, output: OutputSignal) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|op| matches!(op, Op::Write(s, _) if *s == output))
            .count()
    }

    pub fn last_write(&self, output: OutputSignal) -> Option<Level> {
        self.0.borrow().iter().rev().find_map(|op| match op {
            Op::Write(s, level) if *s == output => Some(*level),
            _ => None,
        })
    }

    pub fn last_pwm(&self) -> Option<u8> {
        self.0.borrow().iter().rev().find_map(|op| match op {
            Op::Pwm(_, duty) => Some(*duty),
            _ => None,
        })
    }

    pub fn total_delay_ms(&self) -> u64 {
        self.0
            .borrow()
            .iter()
            .map(|op| match op {
                Op::Delay(ms) => *ms as u64,
                _ => 0,
            })
            .sum()
    }
}

/// Scripted input behaviour
#[derive(Debug, Clone, Copy)]
enum Input {
    /// Reads low forever
    Never,
    /// Reads low this many more times, then high
    After(u32),
}

/// Board whose inputs follow a script and whose calls are recorded
pub struct MockBoard {
    inputs: [Input; INPUT_COUNT],
    trace: Trace,
}

impl MockBoard {
    /// All inputs low, nothing ever asserts
    pub fn new() -> Self {
        Self {
            inputs: [Input::Never; INPUT_COUNT],
            trace: Trace::default(),
        }
    }

    /// `input` reads low `reads` times, then high
    pub fn assert_after(mut self, input: InputSignal, reads: u32) -> Self {
        self.inputs[input.index()] = Input::After(reads);
        self
    }

    /// Set the program selector lines to `program` (low 4 bits)
    pub fn with_program(mut self, program: u8) -> Self {
        for (bit, line) in InputSignal::PROGRAM_SELECT.iter().enumerate() {
            self.inputs[line.index()] = if program & (1 << bit) != 0 {
                Input::After(0)
            } else {
                Input::Never
            };
        }
        self
    }

    /// Every level and temperature switch asserts after `reads` low reads
    pub fn with_switches_after(mut self, reads: u32) -> Self {
        for input in InputSignal::ALL {
            if !InputSignal::PROGRAM_SELECT.contains(&input) {
                self.inputs[input.index()] = Input::After(reads);
            }
        }
        self
    }

    pub fn split(self) -> (MockBoard, MockDelay, Trace) {
        let trace = self.trace.clone();
        let delay = MockDelay {
            trace: trace.clone(),
        };
        (self, delay, trace)
    }

    /// Hardware with the default (spin-forever) timing
    pub fn hardware(self) -> (Hardware<MockBoard, MockDelay>, Trace) {
        self.hardware_with(TimingConfig::default())
    }

    pub fn hardware_with(self, timing: TimingConfig) -> (Hardware<MockBoard, MockDelay>, Trace) {
        let (board, delay, trace) = self.split();
        let hw = Hardware::new(board, delay, timing).expect("valid test timing");
        (hw, trace)
    }
}

impl BoardIo for MockBoard {
    fn set_direction(&mut self, signal: Signal, mode: PinMode) {
        self.trace.push(Op::Direction(signal, mode));
    }

    fn read_digital(&mut self, input: InputSignal) -> bool {
        let slot = &mut self.inputs[input.index()];
        let high = match slot {
            Input::Never => false,
            Input::After(0) => true,
            Input::After(n) => {
                *n -= 1;
                false
            }
        };
        self.trace.push(Op::Read(input, high));
        high
    }

    fn write_digital(&mut self, output: OutputSignal, level: Level) {
        self.trace.push(Op::Write(output, level));
    }

    fn write_pwm(&mut self, output: OutputSignal, duty: u8) {
        self.trace.push(Op::Pwm(output, duty));
    }
}

/// Delay that records instead of sleeping
pub struct MockDelay {
    trace: Trace,
}

impl DelayMs for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.trace.push(Op::Delay(ms));
    }
}
