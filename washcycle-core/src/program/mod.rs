//! Program selection and scripts
//!
//! - [`index`] - the 4-bit selector position and the named programs
//! - [`selector`] - reading the selector lines
//! - [`script`] - the fixed step list for each position

pub mod index;
pub mod script;
pub mod selector;

pub use index::{Program, ProgramIndex};
pub use script::{script_for, CycleScript, Step, RESELECT_SCRIPT};
