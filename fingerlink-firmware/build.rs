//! Build script for fingerlink-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates relay.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Baud rates the runtime parser accepts
const SUPPORTED_BAUD_RATES: [i64; 5] = [9600, 19200, 38400, 57600, 115200];

/// Serial line sections, all required
const LINES: [&str; 2] = ["console", "sensor"];

fn main() {
    setup_linker();
    validate_config();
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
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate relay.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=relay.toml");

    let config_path = Path::new("relay.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: relay.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a relay.toml configuration file.          ║\n\
            ║  Please create one in the fingerlink-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read relay.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in relay.toml                        ║\n\
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

    if let Some(table) = config.as_table() {
        for name in table.keys() {
            if !LINES.contains(&name.as_str()) {
                errors.push(format!("Unknown section [{}]", name));
            }
        }
    }

    for line in LINES {
        match config.get(line) {
            Some(toml::Value::Table(section)) => validate_line(line, section, &mut errors),
            Some(_) => errors.push(format!("[{}] must be a table", line)),
            None => errors.push(format!("Missing [{}] section", line)),
        }
    }

    report_errors("Invalid serial line configuration", &errors);

    println!("cargo:warning=relay.toml validated successfully");
}

/// Validate one serial line section
fn validate_line(name: &str, section: &toml::Table, errors: &mut Vec<String>) {
    match section.get("baud") {
        Some(toml::Value::Integer(baud)) => {
            if !SUPPORTED_BAUD_RATES.contains(baud) {
                errors.push(format!("[{}] baud {} is not supported", name, baud));
            }
        }
        Some(_) => errors.push(format!("[{}] baud must be an integer", name)),
        None => errors.push(format!("[{}] missing 'baud'", name)),
    }

    match section.get("data_bits") {
        Some(toml::Value::Integer(7 | 8)) | None => {}
        Some(_) => errors.push(format!("[{}] data_bits must be 7 or 8", name)),
    }

    match section.get("parity") {
        Some(toml::Value::String(parity)) => {
            if !["none", "even", "odd"].contains(&parity.as_str()) {
                errors.push(format!(
                    "[{}] parity must be 'none', 'even', or 'odd'",
                    name
                ));
            }
        }
        Some(_) => errors.push(format!("[{}] parity must be a string", name)),
        None => {}
    }

    match section.get("stop_bits") {
        Some(toml::Value::Integer(1 | 2)) | None => {}
        Some(_) => errors.push(format!("[{}] stop_bits must be 1 or 2", name)),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abort the build with every collected error
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
