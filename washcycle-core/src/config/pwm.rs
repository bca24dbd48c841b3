//! Motor PWM timing

/// Counter wrap value; duty is written as 0-255
pub const MOTOR_PWM_TOP: u16 = 255;

/// Target switching frequency for the motor driver
pub const MOTOR_PWM_HZ: u32 = 4_000;

/// Integer clock divider for a PWM counter wrapping at `top`
///
/// The counter period is `top + 1` ticks, so the output runs at
/// `sys_clk_hz / ((top + 1) * divider)`. Rounds to the nearest divider and
/// clamps to the 1-255 range of the hardware's integer part.
pub const fn pwm_divider(sys_clk_hz: u32, top: u16, target_hz: u32) -> u8 {
    let ticks = (top as u64 + 1) * target_hz as u64;
    if ticks == 0 {
        return u8::MAX;
    }
    let divider = (sys_clk_hz as u64 + ticks / 2) / ticks;
    if divider < 1 {
        1
    } else if divider > u8::MAX as u64 {
        u8::MAX
    } else {
        divider as u8
    }
}
