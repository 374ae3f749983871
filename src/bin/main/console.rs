//! Desktop stand-in for the console: one window showing both screens.

use dsfolio_render::{
    ScreenPair, Surface,
    surface::{HEIGHT, WIDTH},
};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use log::debug;

use crate::keyboard::{KeyboardInput, map_keycode};

/// Vertical gap between the top and bottom screen.
const HINGE_GAP: u32 = 16;
const BOTTOM_Y: i32 = HEIGHT as i32 + HINGE_GAP as i32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WindowState {
    Open,
    Closed,
}

pub(super) struct ConsoleWindow {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
}

impl ConsoleWindow {
    pub(super) fn open(title: &str, scale: u32) -> Self {
        let mut display = SimulatorDisplay::new(Size::new(
            WIDTH as u32,
            HEIGHT as u32 * 2 + HINGE_GAP,
        ));
        let _ = display.clear(Rgb565::BLACK);

        let output_settings = OutputSettingsBuilder::new().scale(scale).build();
        let mut window = Window::new(title, &output_settings);
        // The SDL window only exists after the first update.
        window.update(&display);

        Self { display, window }
    }

    /// Queues mapped key presses. Reports when the window was closed.
    pub(super) fn pump_events(&mut self, input: &mut KeyboardInput) -> WindowState {
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => return WindowState::Closed,
                SimulatorEvent::KeyDown {
                    keycode, repeat, ..
                } => {
                    if repeat {
                        continue;
                    }
                    match map_keycode(keycode) {
                        Some(button) => input.press(button),
                        None => debug!("input: unmapped key {:?}", keycode),
                    }
                }
                _ => {}
            }
        }

        WindowState::Open
    }

    /// Copies every surface flagged for upload and refreshes the window.
    pub(super) fn present(&mut self, surfaces: &mut ScreenPair) {
        let mut uploaded = false;

        if surfaces.top.take_upload() {
            blit(&mut self.display, &surfaces.top, 0);
            uploaded = true;
        }
        if surfaces.bottom.take_upload() {
            blit(&mut self.display, &surfaces.bottom, BOTTOM_Y);
            uploaded = true;
        }

        if uploaded {
            self.window.update(&self.display);
        }
    }
}

fn blit(display: &mut SimulatorDisplay<Rgb565>, surface: &Surface, offset_y: i32) {
    let pixels = surface.pixels().iter().enumerate().map(|(index, color)| {
        let x = (index % WIDTH) as i32;
        let y = (index / WIDTH) as i32 + offset_y;
        Pixel(Point::new(x, y), *color)
    });
    let _ = display.draw_iter(pixels);
}
