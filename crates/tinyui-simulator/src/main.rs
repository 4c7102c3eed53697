//! Desktop simulator for the tinyui widget toolkit.
//!
//! Builds a small demo menu, renders it into a [`FrameBuffer`] and flushes
//! the dirty region to an SDL2 window via `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key        | Command            |
//! |------------|--------------------|
//! | Down       | Next               |
//! | Up         | Prev               |
//! | Left/Right | Left / Right       |
//! | Tab        | Next (Shift: Prev) |
//! | Return     | Enter              |
//! | Backspace  | Back               |
//! | Escape     | Esc                |
//! | Q          | Quit               |
//!
//! Holding a key past the configured long-press time sends its long variant.
//! Forward commands (`Next`, `Up`, `Right`) move focus down the menu and
//! raise gauges, so the Down arrow is bound to `Next`.

use std::rc::Rc;
use std::time::{Duration, Instant};

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::{Keycode, Mod},
};
use log::{debug, info};

use tinyui::input::PressClassifier;
use tinyui::ui::{
    Binding, Choice, Clock, ColorPalette, Command, Container, Context, Gauge, Icon, Label, Layout,
    Padding, ScrollChoice, Separator, TextSize, Toggle, Widget,
};
use tinyui::{FrameBuffer, Navigator, NavigatorEvent, UiConfig};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_SIZE: Size = Size::new(160, 128);

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 3;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

const ROW_WIDTH: u32 = 156;

const FAN_MODES: &[&str] = &["Off", "Low", "Mid", "High"];

const PRESETS: &[&str] = &["Morning", "Daytime", "Evening", "Night", "Away", "Party"];

/// 8x8 light bulb, one bit per pixel
const BULB: [u8; 8] = [
    0b0011_1100,
    0b0100_0010,
    0b1000_0001,
    0b1000_0001,
    0b0100_0010,
    0b0011_1100,
    0b0010_0100,
    0b0011_1100,
];

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Wall clock measured from simulator start.
struct StdClock {
    start: Instant,
}

impl StdClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for StdClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

// ---------------------------------------------------------------------------
// Demo menu
// ---------------------------------------------------------------------------

/// Values edited by the demo widgets.
struct Settings {
    sound: Binding<bool>,
    fan: Binding<usize>,
    brightness: Binding<u8>,
    lights: [Binding<bool>; 3],
    preset: Binding<usize>,
}

impl Settings {
    fn new() -> Self {
        Self {
            sound: Binding::new(true),
            fan: Binding::new(1),
            brightness: Binding::new(60),
            lights: [Binding::new(false), Binding::new(true), Binding::new(false)],
            preset: Binding::new(0),
        }
    }
}

fn build_menu(
    settings: &Settings,
    config: &UiConfig,
    clock: Rc<dyn Clock>,
) -> tinyui::Result<Container<8>> {
    let palette = ColorPalette::dark();

    let mut lights = Container::<4>::new(Size::new(ROW_WIDTH, 14))
        .with_layout(Layout::HList(3))
        .with_timeout(config.idle_timeout())
        .with_clock(clock.clone())
        .with_child(
            Icon::new(Size::new(12, 14), ImageRaw::<BinaryColor>::new(&BULB, 8))
                .with_palette(palette)
                .non_selectable(),
        )?;
    for (i, light) in settings.lights.iter().enumerate() {
        let name = ["L1", "L2", "L3"][i];
        lights.add_child(Toggle::new(Size::new(44, 14), name, light.clone()).with_palette(palette))?;
    }

    let mut presets = ScrollChoice::<8>::new(Size::new(ROW_WIDTH, 36))
        .with_layout(Layout::VList(0))
        .with_timeout(config.idle_timeout())
        .with_clock(clock.clone())
        .with_binding(settings.preset.clone())
        .with_on_change(|index| info!("Preset -> {}", PRESETS[index]));
    for name in PRESETS {
        presets.add_child(Label::new(Size::new(ROW_WIDTH - 6, 12), name).with_palette(palette))?;
    }

    Container::<8>::new(DISPLAY_SIZE)
        .with_layout(Layout::VList(2))
        .with_padding(Padding::all(2))
        .with_timeout(config.idle_timeout())
        .with_clock(clock)
        .with_child(
            Label::new(Size::new(ROW_WIDTH, 12), "tinyui demo")
                .with_text_size(TextSize::Small)
                .with_palette(palette)
                .non_selectable(),
        )?
        .with_child(Separator::new(Size::new(ROW_WIDTH, 3)).with_color(palette.border))?
        .with_child(
            Toggle::new(Size::new(ROW_WIDTH, 14), "Sound", settings.sound.clone())
                .with_palette(palette),
        )?
        .with_child(
            Choice::new(Size::new(ROW_WIDTH, 14), "Fan", FAN_MODES, settings.fan.clone())
                .with_palette(palette),
        )?
        .with_child(
            Gauge::new(
                Size::new(ROW_WIDTH, 16),
                "Bright",
                settings.brightness.clone(),
                0u8,
                100,
                1,
            )
            .with_steps(1, 10)
            .with_palette(palette),
        )?
        .with_child(lights)?
        .with_child(presets)
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Map an SDL keycode to a toolkit command.
fn keycode_to_command(keycode: Keycode, keymod: Mod) -> Option<Command> {
    let shift = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
    match keycode {
        Keycode::Down => Some(Command::Next),
        Keycode::Up => Some(Command::Prev),
        Keycode::Left => Some(Command::Left),
        Keycode::Right => Some(Command::Right),
        Keycode::Tab if shift => Some(Command::Prev),
        Keycode::Tab => Some(Command::Next),
        Keycode::Return | Keycode::KpEnter => Some(Command::Enter),
        Keycode::Backspace => Some(Command::Back),
        Keycode::Escape => Some(Command::Esc),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<(), tinyui::Error> {
    env_logger::init();
    info!("Starting tinyui simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_SIZE.width, DISPLAY_SIZE.height, WINDOW_SCALE
    );

    let config = UiConfig::default();
    let clock = Rc::new(StdClock::new());
    let settings = Settings::new();

    let mut nav = Navigator::new(build_menu(&settings, &config, clock.clone())?);
    nav.add_observer(|event: &NavigatorEvent<'_>| {
        let index = event.path.segments().last().and_then(|s| s.index);
        info!(
            "{:?} at depth {} (index {:?})",
            event.kind,
            event.path.len(),
            index
        );
    });
    let mut buttons = PressClassifier::new(&config);

    let mut display = SimulatorDisplay::<Rgb565>::new(DISPLAY_SIZE);
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("tinyui Simulator", &output_settings);
    let mut fb = FrameBuffer::new(DISPLAY_SIZE);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    nav.root_mut().draw(&mut Context::new(&mut fb));
    let _ = fb.flush(&mut display);
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();
        let now = clock.now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown {
                    keycode,
                    keymod,
                    repeat,
                } => {
                    if keycode == Keycode::Q {
                        break 'running;
                    }
                    if !repeat && let Some(cmd) = keycode_to_command(keycode, keymod) {
                        buttons.press(cmd, now);
                    }
                }

                SimulatorEvent::KeyUp { .. } => {
                    if let Some(cmd) = buttons.release(now) {
                        debug!("Key -> {:?}", cmd);
                        nav.dispatch(cmd);
                    }
                }

                _ => {}
            }
        }

        if let Some(cmd) = buttons.poll(now) {
            debug!("Held key -> {:?}", cmd);
            nav.dispatch(cmd);
        }

        // --- Idle tick ----------------------------------------------------
        nav.dispatch(Command::Idle);

        // --- Render -------------------------------------------------------
        nav.root_mut().draw(&mut Context::new(&mut fb));
        if let Err(e) = fb.flush(&mut display) {
            log::error!("Flush error: {:?}", e);
        }
        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!(
        "Simulator exiting: sound={} fan={} brightness={} preset={}",
        settings.sound.get(),
        FAN_MODES[settings.fan.get()],
        settings.brightness.get(),
        PRESETS[settings.preset.get()]
    );
    Ok(())
}
