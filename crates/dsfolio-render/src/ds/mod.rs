//! Dual-screen portfolio renderer.

use core::fmt::Write;

use dsfolio_core::{
    catalog::{ContactEntry, ProjectEntry},
    render::{PageBadge, Screen},
};
use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_5X8, FONT_6X10, FONT_7X13, FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{
        PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
        Triangle,
    },
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

use crate::{
    FrameRenderer,
    surface::{HEIGHT, ScreenPair, Surface, WIDTH},
};

mod about;
mod contact;
mod fx;
mod home;
mod intro;
mod palette;
mod primitives;
mod projects;
mod sprite;

#[allow(unused_imports)]
use self::{
    about::*, contact::*, fx::*, home::*, intro::*, palette::*, primitives::*, projects::*,
    sprite::*,
};

pub use self::palette::{CARD_COLOR_COUNT, CARD_COLORS};

const MARGIN_X: i32 = 12;
const HEADER_H: u32 = 24;
const PANEL_X: i32 = 10;
const PANEL_Y: i32 = 30;
const PANEL_W: u32 = WIDTH as u32 - PANEL_X as u32 * 2;
const PANEL_H: u32 = HEIGHT as u32 - PANEL_Y as u32 - 18;
const CARD_X: i32 = 18;
const CARD_W: u32 = WIDTH as u32 - CARD_X as u32 * 2;
const CARD_H: u32 = 26;
const CARD_TOP: i32 = 36;
const CARD_GAP: i32 = 4;
const CARD_RADIUS: u32 = 6;
const SHADOW_OFFSET: i32 = 2;
const SHADOW_PERCENT: u8 = 50;

fn card_color(colors: &[Rgb888; CARD_COLOR_COUNT], index: usize) -> Rgb888 {
    colors[index % CARD_COLOR_COUNT]
}

/// Paints every [`Screen`] variant onto a [`ScreenPair`].
///
/// Stateless apart from its card palette: output depends only on the screen
/// and the timestamp.
#[derive(Clone, Copy, Debug)]
pub struct DsRenderer {
    card_colors: [Rgb888; CARD_COLOR_COUNT],
}

impl Default for DsRenderer {
    fn default() -> Self {
        Self::new(CARD_COLORS)
    }
}

impl DsRenderer {
    pub const fn new(card_colors: [Rgb888; CARD_COLOR_COUNT]) -> Self {
        Self { card_colors }
    }
}

impl FrameRenderer for DsRenderer {
    fn render(&mut self, screen: Screen<'_>, now_ms: u64, surfaces: &mut ScreenPair) {
        match screen {
            Screen::Intro {
                owner,
                headline,
                tagline,
            } => render_intro(surfaces, owner, headline, tagline, now_ms),
            Screen::Home { notes, caption } => render_home(surfaces, notes, caption, now_ms),
            Screen::Projects {
                badge,
                items,
                selected,
                viewport_start,
                visible_rows,
            } => render_projects(
                surfaces,
                ProjectsView {
                    badge,
                    items,
                    selected,
                    viewport_start,
                    visible_rows,
                },
                &self.card_colors,
            ),
            Screen::About {
                badge,
                title,
                lines,
                more_above,
                more_below,
            } => render_about(
                surfaces,
                AboutView {
                    badge,
                    title,
                    lines,
                    more_above,
                    more_below,
                },
            ),
            Screen::Contact {
                badge,
                items,
                selected,
                composing,
                recipient,
                draft,
            } => render_contact(
                surfaces,
                ContactView {
                    badge,
                    items,
                    selected,
                    composing,
                    recipient,
                    draft,
                },
                &self.card_colors,
            ),
        }

        surfaces.top.mark_dirty();
        surfaces.bottom.mark_dirty();
    }
}
