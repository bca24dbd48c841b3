//! Readable configuration diagnostics
//!
//! Shared by the build-time `machine.toml` check and anything else that
//! prints a [`ConfigError`] as text.

use core::fmt;

use super::hardware::MAX_GPIO;
use super::types::ConfigError;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DuplicatePin { pin, first, second } => write!(
                f,
                "GPIO{} assigned to both {} and {}",
                pin,
                first.name(),
                second.name()
            ),
            ConfigError::PinOutOfRange { signal, pin } => {
                write!(f, "{} = {} is not a GPIO (0-{})", signal.name(), pin, MAX_GPIO)
            }
            ConfigError::TimeoutWithoutPollInterval => {
                f.write_str("[timing] sensor_timeout_ms needs a non-zero poll_interval_ms")
            }
        }
    }
}

/// The first `max_chars` characters of `text`
///
/// Cuts on a character boundary, so multi-byte text never splits.
pub fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
