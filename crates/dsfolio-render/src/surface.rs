//! In-memory screens the renderer paints into.

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Rgb565, RgbColor},
};

pub const WIDTH: usize = 256;
pub const HEIGHT: usize = 192;
pub const PIXELS: usize = WIDTH * HEIGHT;

/// One 256x192 RGB565 screen.
///
/// `needs_upload` is the "changed, present me" signal: the renderer raises it
/// after every paint and the host clears it with [`Surface::take_upload`].
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    pixels: [Rgb565; PIXELS],
    needs_upload: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Creates a black surface.
    pub const fn new() -> Self {
        Self {
            pixels: [Rgb565::new(0, 0, 0); PIXELS],
            needs_upload: false,
        }
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Rgb565; PIXELS] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        Some(self.pixels[y * WIDTH + x])
    }

    /// Sets a pixel. Returns `false` when it is out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        self.pixels[y * WIDTH + x] = color;
        true
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Darkens one pixel toward black by `percent`.
    pub fn shade(&mut self, x: i32, y: i32, percent: u8) {
        if x < 0 || y < 0 {
            return;
        }

        let (x, y) = (x as usize, y as usize);
        if let Some(color) = self.pixel(x, y) {
            let keep = 100u16.saturating_sub(percent.min(100) as u16);
            let scale = |channel: u8| (channel as u16 * keep / 100) as u8;
            let _ = self.set_pixel(
                x,
                y,
                Rgb565::new(scale(color.r()), scale(color.g()), scale(color.b())),
            );
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_upload = true;
    }

    pub fn needs_upload(&self) -> bool {
        self.needs_upload
    }

    /// Reports and clears the upload flag.
    pub fn take_upload(&mut self) -> bool {
        core::mem::replace(&mut self.needs_upload, false)
    }
}

impl DrawTarget for Surface {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let _ = self.set_pixel(point.x as usize, point.y as usize, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for Surface {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

/// The console's two screens.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ScreenPair {
    pub top: Surface,
    pub bottom: Surface,
}

impl ScreenPair {
    pub const fn new() -> Self {
        Self {
            top: Surface::new(),
            bottom: Surface::new(),
        }
    }
}
