//! Desktop simulator for the knob-ui display engine.
//!
//! Runs the demo counter menu through the real frame driver in an SDL2
//! window via `embedded-graphics-simulator`, with the keyboard and mouse
//! wheel standing in for the potentiometer and push button.
//!
//! # Key bindings
//!
//! | Key             | Action                      |
//! |-----------------|-----------------------------|
//! | Up / wheel up   | Turn the dial down          |
//! | Down / wheel dn | Turn the dial up            |
//! | Space / Enter   | Press the trigger           |
//! | L               | Toggle light / dark theme   |
//! | Q / Escape      | Quit                        |
//!
//! An optional first argument names a postcard-encoded configuration file.

mod demo;
mod hardware;

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use knob_core::ui::Theme;
use knob_core::{FrameDriver, Hardware, UiConfig};
use log::{error, info, warn};

use demo::CounterMenu;
use hardware::{DialHandle, LogBuzzer, SimDial, SimTrigger, StdDelay, TriggerHandle};

/// Simulated panel size.
const DISPLAY_WIDTH_PX: u32 = 240;
const DISPLAY_HEIGHT_PX: u32 = 160;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 3;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Load the configuration named on the command line, or the defaults.
fn load_config() -> UiConfig {
    let Some(path) = std::env::args().nth(1) else {
        return UiConfig::default();
    };

    match std::fs::read(&path) {
        Ok(bytes) => UiConfig::from_bytes(&bytes).unwrap_or_else(|e| {
            warn!("Ignoring config {}: {}", path, e);
            UiConfig::default()
        }),
        Err(e) => {
            warn!("Cannot read config {}: {}", path, e);
            UiConfig::default()
        }
    }
}

fn main() {
    env_logger::init();
    info!("Starting knob-ui simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: Up/Down=Dial  Space/Enter=Trigger  L=Theme  Q=Quit");

    let config = load_config();
    let dial = DialHandle::default();
    let trigger = TriggerHandle::default();

    let display = SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let hardware = Hardware {
        display,
        dial: SimDial(dial.clone()),
        trigger: SimTrigger(trigger.clone()),
        buzzer: LogBuzzer,
        delay: StdDelay,
    };
    let mut driver = FrameDriver::new(hardware, &config, Theme::dark());
    let mut menu = CounterMenu::default();
    let mut light = false;

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Knob Simulator", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    if let Err(e) = driver.step(&mut menu) {
        error!("First frame failed: {}", e);
    }
    window.update(driver.display());

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::Up => dial.turn(-1),
                    Keycode::Down => dial.turn(1),
                    Keycode::Space | Keycode::Return => trigger.press(),
                    Keycode::L => {
                        light = !light;
                        driver.set_theme(if light { Theme::light() } else { Theme::dark() });
                    }
                    _ => {}
                },

                SimulatorEvent::MouseWheel { scroll_delta, .. } => dial.turn(-scroll_delta.y),

                _ => {}
            }
        }

        // --- Frame --------------------------------------------------------
        match driver.step(&mut menu) {
            Ok(report) if report.activated => {
                info!("Activated slot {:?} of {}", report.selected, report.slots);
            }
            Ok(_) => {}
            Err(e) => error!("Frame failed: {}", e),
        }

        window.update(driver.display());

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
