//! Build script for washcycle-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates machine.toml at compile time
//! - Generates the machine configuration and board constructor

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use washcycle_core::config::{
    clip, pwm_divider, MachineConfig, PinConfig, PinMap, TimingConfig, MAX_GPIO, MOTOR_PWM_HZ,
    MOTOR_PWM_TOP,
};
use washcycle_hal::{InputSignal, OutputSignal, Signal, INPUT_COUNT, OUTPUT_COUNT};

/// RP2040 system clock after embassy-rp's default clock setup
const SYS_CLK_HZ: u32 = 125_000_000;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_board(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate machine.toml and build the configuration it describes
fn validate_config() -> MachineConfig {
    // Re-run if machine.toml changes
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: machine.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a machine.toml pin assignment.            ║\n\
            ║  Please create one in the washcycle-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read machine.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let document: toml::Table = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in machine.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    for key in document.keys() {
        if key != "pins" && key != "timing" {
            errors.push(format!("Unknown section [{}]", key));
        }
    }

    let config = MachineConfig {
        pins: parse_pins(&document, &mut errors),
        timing: parse_timing(&document, &mut errors),
    };
    report_errors("Invalid machine.toml", &errors);

    // Cross-field checks shared with the firmware's own validation
    if let Err(e) = config.validate() {
        report_errors("Invalid machine.toml", &[e.to_string()]);
    }

    println!("cargo:warning=machine.toml validated successfully");
    config
}

/// Read the `[pins]` section; every signal must be assigned
fn parse_pins(document: &toml::Table, errors: &mut Vec<String>) -> PinMap {
    let mut pins = PinMap::default();

    let table = match document.get("pins") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[pins] must be a table".to_string());
            return pins;
        }
        None => {
            errors.push("Missing [pins] section".to_string());
            return pins;
        }
    };

    let mut inputs_seen = [false; INPUT_COUNT];
    let mut outputs_seen = [false; OUTPUT_COUNT];

    for (key, value) in table {
        let Some(signal) = Signal::from_name(key) else {
            errors.push(format!("[pins] unknown signal '{}'", key));
            continue;
        };

        let pin = match parse_pin(key, value) {
            Ok(pin) => pin,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };

        match signal {
            Signal::Input(input) => {
                pins.inputs[input.index()] = pin;
                inputs_seen[input.index()] = true;
            }
            Signal::Output(output) => {
                pins.outputs[output.index()] = pin;
                outputs_seen[output.index()] = true;
            }
        }
    }

    for input in InputSignal::ALL {
        if !inputs_seen[input.index()] {
            errors.push(format!("[pins] missing '{}'", input.name()));
        }
    }
    for output in OutputSignal::ALL {
        if !outputs_seen[output.index()] {
            errors.push(format!("[pins] missing '{}'", output.name()));
        }
    }

    pins
}

/// A pin is either a bare GPIO number or `{ pin = N, inverted = bool }`
fn parse_pin(key: &str, value: &toml::Value) -> Result<PinConfig, String> {
    match value {
        toml::Value::Integer(n) => gpio_number(key, *n).map(PinConfig::new),
        toml::Value::Table(t) => {
            for field in t.keys() {
                if field != "pin" && field != "inverted" {
                    return Err(format!("[pins] {} has unknown field '{}'", key, field));
                }
            }
            let pin = match t.get("pin") {
                Some(toml::Value::Integer(n)) => gpio_number(key, *n)?,
                _ => return Err(format!("[pins] {} missing 'pin'", key)),
            };
            let inverted = match t.get("inverted") {
                None => false,
                Some(toml::Value::Boolean(b)) => *b,
                Some(_) => return Err(format!("[pins] {} 'inverted' must be true or false", key)),
            };
            Ok(PinConfig { pin, inverted })
        }
        _ => Err(format!("[pins] {} must be a pin number or a table", key)),
    }
}

fn gpio_number(key: &str, n: i64) -> Result<u8, String> {
    u8::try_from(n)
        .ok()
        .filter(|pin| *pin <= MAX_GPIO)
        .ok_or_else(|| format!("[pins] {} = {} is not a GPIO (0-{})", key, n, MAX_GPIO))
}

/// Read the optional `[timing]` section
fn parse_timing(document: &toml::Table, errors: &mut Vec<String>) -> TimingConfig {
    let mut timing = TimingConfig::default();

    let table = match document.get("timing") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[timing] must be a table".to_string());
            return timing;
        }
        None => return timing,
    };

    for (key, value) in table {
        let ms = match value {
            toml::Value::Integer(n) => match u32::try_from(*n) {
                Ok(ms) => ms,
                Err(_) => {
                    errors.push(format!("[timing] {} must be 0-{}", key, u32::MAX));
                    continue;
                }
            },
            _ => {
                errors.push(format!("[timing] {} must be an integer (ms)", key));
                continue;
            }
        };

        match key.as_str() {
            "poll_interval_ms" => timing.poll_interval_ms = ms,
            "sensor_timeout_ms" => timing.sensor_timeout_ms = Some(ms),
            _ => errors.push(format!("[timing] unknown option '{}'", key)),
        }
    }

    timing
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", clip(line, 61))
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_errors(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Write `$OUT_DIR/board.rs`: the `MACHINE` constant and `take_board`
fn generate_board(config: &MachineConfig) {
    let mut out = String::new();
    let pins = &config.pins;

    writeln!(out, "// Generated by build.rs from machine.toml").unwrap();
    writeln!(out).unwrap();

    // Configuration constant
    writeln!(out, "/// Machine configuration from machine.toml").unwrap();
    writeln!(out, "pub const MACHINE: MachineConfig = MachineConfig {{").unwrap();
    writeln!(out, "    pins: PinMap {{").unwrap();
    writeln!(out, "        inputs: [").unwrap();
    for input in InputSignal::ALL {
        let c = pins.input(input);
        writeln!(
            out,
            "            PinConfig {{ pin: {}, inverted: {} }}, // {}",
            c.pin,
            c.inverted,
            input.name()
        )
        .unwrap();
    }
    writeln!(out, "        ],").unwrap();
    writeln!(out, "        outputs: [").unwrap();
    for output in OutputSignal::ALL {
        let c = pins.output(output);
        writeln!(
            out,
            "            PinConfig {{ pin: {}, inverted: {} }}, // {}",
            c.pin,
            c.inverted,
            output.name()
        )
        .unwrap();
    }
    writeln!(out, "        ],").unwrap();
    writeln!(out, "    }},").unwrap();
    writeln!(out, "    timing: TimingConfig {{").unwrap();
    writeln!(
        out,
        "        poll_interval_ms: {},",
        config.timing.poll_interval_ms
    )
    .unwrap();
    writeln!(
        out,
        "        sensor_timeout_ms: {:?},",
        config.timing.sensor_timeout_ms
    )
    .unwrap();
    writeln!(out, "    }},").unwrap();
    writeln!(out, "}};").unwrap();
    writeln!(out).unwrap();

    // Board constructor
    writeln!(out, "/// Claim the configured pins and build the board").unwrap();
    writeln!(out, "pub fn take_board(p: Peripherals) -> RpBoard {{").unwrap();

    // Active-low switches idle high, so pull them up
    writeln!(out, "    let inputs = [").unwrap();
    for input in InputSignal::ALL {
        let c = pins.input(input);
        let pull = if c.inverted { "Up" } else { "Down" };
        writeln!(
            out,
            "        Input::new(p.PIN_{}, Pull::{}), // {}",
            c.pin,
            pull,
            input.name()
        )
        .unwrap();
    }
    writeln!(out, "    ];").unwrap();

    // Outputs start in their inactive level
    writeln!(out, "    let outputs = [").unwrap();
    for output in OutputSignal::DIGITAL {
        let c = pins.output(output);
        let level = if c.inverted { "High" } else { "Low" };
        writeln!(
            out,
            "        Output::new(p.PIN_{}, Level::{}), // {}",
            c.pin,
            level,
            output.name()
        )
        .unwrap();
    }
    writeln!(out, "    ];").unwrap();

    // Each GPIO pair shares a PWM slice; even pins are channel A
    let pwm = pins.output(OutputSignal::MotorPwm);
    let slice = (pwm.pin / 2) % 8;
    let channel = if pwm.pin % 2 == 0 { 'a' } else { 'b' };
    let idle_compare = if pwm.inverted { 255 } else { 0 };
    writeln!(out, "    let mut pwm_config = PwmConfig::default();").unwrap();
    let divider = pwm_divider(SYS_CLK_HZ, MOTOR_PWM_TOP, MOTOR_PWM_HZ);
    writeln!(out, "    pwm_config.top = {};", MOTOR_PWM_TOP).unwrap();
    writeln!(out, "    pwm_config.divider = {}u8.into();", divider).unwrap();
    writeln!(out, "    pwm_config.compare_{} = {};", channel, idle_compare).unwrap();
    writeln!(
        out,
        "    let pwm = Pwm::new_output_{}(p.PWM_SLICE{}, p.PIN_{}, pwm_config);",
        channel, slice, pwm.pin
    )
    .unwrap();
    let split = if channel == 'a' { "(pwm, _)" } else { "(_, pwm)" };
    writeln!(out, "    let {} = pwm.split();", split).unwrap();
    writeln!(out, "    let pwm = defmt::unwrap!(pwm, \"motor PWM channel\");").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    HalBoard::new(inputs, outputs, pwm, &MACHINE.pins)").unwrap();
    writeln!(out, "}}").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("board.rs"), out).unwrap();
}
