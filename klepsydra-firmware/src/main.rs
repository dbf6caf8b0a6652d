//! Klepsydra - LED panel countdown timer firmware
//!
//! Main firmware binary for RP2040-based boards driving a 32x16
//! bi-color dot-matrix panel over directly wired GPIO.
//!
//! Named after the Greek water clock (κλεψύδρα) that metered speaking
//! time in Athenian courts - the job this panel does today.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use klepsydra_core::font::GlyphFont;
use klepsydra_drivers::{PanelPins, PanelTransport};
use klepsydra_hal_rp2040::{PwmTone, RpInput, RpOutput};

use crate::config::parse_config;

mod channels;
mod config;
mod tasks;

/// Embedded font table: 256 consecutive 16-byte glyph records
static FONT_BYTES: &[u8] = include_bytes!("../assets/font8x16.bin");

/// Embedded timer configuration (edit klepsydra.toml and rebuild)
const EMBEDDED_CONFIG: &str = include_str!("../klepsydra.toml");

// Font table lives for the program duration (task references)
static FONT: StaticCell<GlyphFont<'static>> = StaticCell::new();

/// Buzzer drive duty while a tone sounds
const BUZZER_DUTY_PERCENT: u8 = 50;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Klepsydra firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Font is fatal if short: the control loop must not start without
    // a complete glyph table.
    let font = match GlyphFont::from_bytes(FONT_BYTES) {
        Ok(font) => FONT.init(font),
        Err(e) => {
            defmt::panic!("font resource unusable: {}", e);
        }
    };
    info!("Font table loaded ({} bytes)", FONT_BYTES.len());

    // Config was validated at build time; a parse failure here means
    // the flash image itself is damaged.
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            defmt::panic!("embedded config unusable: {}", e);
        }
    };
    info!(
        "Config loaded: slot {} min, total {} min",
        config.slot_minutes, config.total_minutes
    );

    // Panel connector wiring (all plain push-pull outputs)
    let pins = PanelPins {
        red: RpOutput::new(Output::new(p.PIN_2, Level::Low)),
        green: RpOutput::new(Output::new(p.PIN_3, Level::Low)),
        clock: RpOutput::new(Output::new(p.PIN_4, Level::Low)),
        addr: [
            RpOutput::new(Output::new(p.PIN_5, Level::Low)),
            RpOutput::new(Output::new(p.PIN_6, Level::Low)),
            RpOutput::new(Output::new(p.PIN_7, Level::Low)),
            RpOutput::new(Output::new(p.PIN_8, Level::Low)),
        ],
        ale: RpOutput::new(Output::new(p.PIN_9, Level::Low)),
        we: RpOutput::new(Output::new(p.PIN_10, Level::Low)),
    };
    let switch_a = RpOutput::new(Output::new(p.PIN_11, Level::Low));
    let switch_b = RpOutput::new(Output::new(p.PIN_12, Level::Low));
    let transport = PanelTransport::new(pins, switch_a, switch_b);
    info!("Panel transport initialized");

    // Menu button against the internal pull-up (pressed = low)
    let button = RpInput::new(Input::new(p.PIN_13, Pull::Up));

    // Buzzer on PWM slice 7 channel A (GPIO14)
    let pwm = Pwm::new_output_a(
        p.PWM_SLICE7,
        p.PIN_14,
        embassy_rp::pwm::Config::default(),
    );
    let tone = PwmTone::new(pwm, BUZZER_DUTY_PERCENT);
    info!("Buzzer initialized");

    spawner.spawn(tasks::buzzer_task(tone)).unwrap();
    spawner
        .spawn(tasks::control_task(transport, button, font, config))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
