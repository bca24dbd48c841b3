//! State machine for a program run
//!
//! The state decides what the door wrapper may do: actuators only while
//! running, door release only once done.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
