#![cfg_attr(not(test), no_std)]

//! Paints the portfolio view model onto the two console screens.

pub mod ds;
pub mod surface;

use dsfolio_core::{
    app::{FolioApp, TextMetrics},
    render::Screen,
    text_wrap::{FixedAdvance, TextMeasure},
};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use log::debug;

pub use self::{
    ds::DsRenderer,
    surface::{ScreenPair, Surface},
};

/// Padding between the About panel edge and its text, on each side.
const ABOUT_TEXT_INSET: u32 = 8;
/// Horizontal margin of the About panel on the bottom screen.
const ABOUT_PANEL_MARGIN: u32 = 10;

pub trait FrameRenderer {
    /// Fully repaints both screens and raises their upload flags.
    fn render(&mut self, screen: Screen<'_>, now_ms: u64, surfaces: &mut ScreenPair);
}

/// Repaints the current app state.
///
/// Returns `false` without drawing when no surfaces are attached yet.
pub fn render_frame<M, R>(
    app: &FolioApp<'_, M>,
    renderer: &mut R,
    surfaces: Option<&mut ScreenPair>,
    now_ms: u64,
) -> bool
where
    M: TextMeasure,
    R: FrameRenderer,
{
    let Some(surfaces) = surfaces else {
        debug!("render: surfaces not attached, skipping frame at {}ms", now_ms);
        return false;
    };

    app.with_screen(|screen| renderer.render(screen, now_ms, surfaces));
    true
}

/// Wrap metrics matching the About panel and its body font.
pub fn about_text_metrics() -> TextMetrics<FixedAdvance> {
    let panel_width = surface::WIDTH as u32 - ABOUT_PANEL_MARGIN * 2;

    TextMetrics {
        max_width: panel_width - ABOUT_TEXT_INSET * 2,
        measure: FixedAdvance::new(
            FONT_6X10.character_size.width,
            FONT_6X10.character_spacing,
        ),
    }
}
