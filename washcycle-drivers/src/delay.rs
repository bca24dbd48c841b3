//! Delay adapter

use embedded_hal::delay::DelayNs;
use washcycle_hal::DelayMs;

/// Blocking millisecond delay over any `embedded-hal` delay provider
pub struct HalDelay<D>(D);

impl<D: DelayNs> HalDelay<D> {
    pub fn new(delay: D) -> Self {
        Self(delay)
    }

    /// Release the inner delay
    pub fn into_inner(self) -> D {
        self.0
    }
}

impl<D: DelayNs> DelayMs for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        DelayNs::delay_ms(&mut self.0, ms);
    }
}
