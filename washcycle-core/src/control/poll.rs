//! Blocking wait on a binary switch
//!
//! With the default [`TimingConfig`](crate::config::TimingConfig) this is a
//! tight spin-poll that never gives up. A poll interval puts the CPU to
//! sleep between reads; a timeout (which needs the interval to measure
//! time) turns a stuck switch into a [`SensorTimeout`].

use washcycle_hal::{BoardIo, DelayMs, InputSignal};

use super::Hardware;

/// A switch did not assert within the configured timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorTimeout {
    /// The switch that never asserted
    pub input: InputSignal,
    /// Time spent waiting in ms
    pub waited_ms: u32,
}

impl<B: BoardIo, D: DelayMs> Hardware<B, D> {
    /// Block until `input` reads high
    pub fn wait_for(&mut self, input: InputSignal) -> Result<(), SensorTimeout> {
        let interval = self.timing.poll_interval_ms;
        let timeout = self.timing.sensor_timeout_ms;
        let mut waited_ms: u32 = 0;

        loop {
            if self.board.read_digital(input) {
                return Ok(());
            }

            if let Some(limit) = timeout {
                if waited_ms >= limit {
                    return Err(SensorTimeout { input, waited_ms });
                }
            }

            if interval == 0 {
                core::hint::spin_loop();
            } else {
                self.delay.delay_ms(interval);
                waited_ms = waited_ms.saturating_add(interval);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::mock::{MockBoard, Op};

    #[test]
    fn test_returns_once_switch_asserts() {
        let board = MockBoard::new().assert_after(InputSignal::WaterLevelHalf, 5);
        let (mut hw, trace) = board.hardware();

        assert_eq!(hw.wait_for(InputSignal::WaterLevelHalf), Ok(()));
        assert_eq!(trace.reads_of(InputSignal::WaterLevelHalf), 6);
        assert_eq!(trace.total_delay_ms(), 0);
    }

    #[test]
    fn test_already_asserted_reads_once() {
        let board = MockBoard::new().assert_after(InputSignal::TempLow, 0);
        let (mut hw, trace) = board.hardware();

        assert_eq!(hw.wait_for(InputSignal::TempLow), Ok(()));
        assert_eq!(trace.ops(), vec![Op::Read(InputSignal::TempLow, true)]);
    }

    #[test]
    fn test_poll_interval_sleeps_between_reads() {
        let board = MockBoard::new().assert_after(InputSignal::WaterLevelFull, 3);
        let (mut hw, trace) = board.hardware_with(TimingConfig::polling(50));

        assert_eq!(hw.wait_for(InputSignal::WaterLevelFull), Ok(()));
        assert_eq!(trace.total_delay_ms(), 150);
        assert_eq!(
            trace.ops(),
            vec![
                Op::Read(InputSignal::WaterLevelFull, false),
                Op::Delay(50),
                Op::Read(InputSignal::WaterLevelFull, false),
                Op::Delay(50),
                Op::Read(InputSignal::WaterLevelFull, false),
                Op::Delay(50),
                Op::Read(InputSignal::WaterLevelFull, true),
            ]
        );
    }

    #[test]
    fn test_timeout_on_stuck_switch() {
        // Switch never asserts
        let board = MockBoard::new();
        let (mut hw, trace) = board.hardware_with(TimingConfig::with_timeout(100, 1000));

        assert_eq!(
            hw.wait_for(InputSignal::TempHigh),
            Err(SensorTimeout {
                input: InputSignal::TempHigh,
                waited_ms: 1000,
            })
        );
        assert_eq!(trace.reads_of(InputSignal::TempHigh), 11);
    }

    #[test]
    fn test_switch_at_deadline_still_succeeds() {
        let board = MockBoard::new().assert_after(InputSignal::TempMedium, 10);
        let (mut hw, _trace) = board.hardware_with(TimingConfig::with_timeout(100, 1000));

        assert_eq!(hw.wait_for(InputSignal::TempMedium), Ok(()));
    }
}
