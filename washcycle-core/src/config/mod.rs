//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware builds a
//! [`MachineConfig`] from `machine.toml` at compile time.

pub mod hardware;
pub mod pwm;
pub mod report;
pub mod types;

pub use hardware::*;
pub use pwm::*;
pub use report::clip;
pub use types::*;
