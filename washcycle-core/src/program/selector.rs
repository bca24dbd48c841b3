//! Program selector
//!
//! Four parallel input lines encode the program as a 4-bit number,
//! select-4 most significant. Read once, no debouncing.

use washcycle_hal::{BoardIo, DelayMs, InputSignal};

use super::ProgramIndex;
use crate::control::Hardware;

impl<B: BoardIo, D: DelayMs> Hardware<B, D> {
    /// Read the program selector
    pub fn read_program(&mut self) -> ProgramIndex {
        let select4 = self.board.read_digital(InputSignal::ProgramSelect4);
        let select3 = self.board.read_digital(InputSignal::ProgramSelect3);
        let select2 = self.board.read_digital(InputSignal::ProgramSelect2);
        let select1 = self.board.read_digital(InputSignal::ProgramSelect1);

        ProgramIndex::from_select_lines([select1, select2, select3, select4])
    }
}
