//! Build script for klepsydra-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates klepsydra.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

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

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate klepsydra.toml at compile time
///
/// The firmware parses the same file at boot with a minimal no_std
/// parser; catching malformed config here keeps boot-time failures to
/// genuinely broken flash images.
fn validate_config() {
    println!("cargo:rerun-if-changed=klepsydra.toml");

    let config_path = Path::new("klepsydra.toml");
    if !config_path.exists() {
        panic!("klepsydra.toml not found; the firmware embeds it at build time");
    }

    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("failed to read klepsydra.toml: {e}"));

    let value: toml::Value = content
        .parse()
        .unwrap_or_else(|e| panic!("klepsydra.toml is not valid TOML: {e}"));

    let timers = value
        .get("timers")
        .and_then(|t| t.as_table())
        .expect("klepsydra.toml: missing [timers] section");

    for key in ["slot_minutes", "total_minutes"] {
        let minutes = timers
            .get(key)
            .and_then(|v| v.as_integer())
            .unwrap_or_else(|| panic!("klepsydra.toml: [timers] {key} must be an integer"));
        if !(1..=600).contains(&minutes) {
            panic!("klepsydra.toml: [timers] {key} = {minutes} out of range 1..=600");
        }
    }

    let presets = value
        .get("preset")
        .and_then(|p| p.as_table())
        .expect("klepsydra.toml: missing [preset.N] sections");

    for n in 1..=5 {
        let entry = presets
            .get(&n.to_string())
            .unwrap_or_else(|| panic!("klepsydra.toml: missing [preset.{n}]"));
        for key in ["slot", "total"] {
            let minutes = entry
                .get(key)
                .and_then(|v| v.as_integer())
                .unwrap_or_else(|| panic!("klepsydra.toml: [preset.{n}] missing integer `{key}`"));
            if !(1..=600).contains(&minutes) {
                panic!("klepsydra.toml: [preset.{n}] {key} = {minutes} out of range 1..=600");
            }
        }
    }
}
