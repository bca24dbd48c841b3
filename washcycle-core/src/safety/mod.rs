//! Door lock safety
//!
//! The door stays locked from before the sensor relay is powered until the
//! sequencer reports `Done`. A faulted run never releases it.

pub mod door;
pub mod power_on;

pub use door::{DoorLock, DoorState};
pub use power_on::{PowerOnSequence, RELAY_SETTLE_MS, UNLOCK_SETTLE_MS};
