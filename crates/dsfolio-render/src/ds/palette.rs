use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

pub(super) const fn hex(value: u32) -> Rgb888 {
    Rgb888::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

pub(super) fn to_565(color: Rgb888) -> Rgb565 {
    Rgb565::from(color)
}

/// Adds `percent` of full scale to each channel.
pub(super) fn lighten(color: Rgb888, percent: u8) -> Rgb888 {
    let add = 255 * percent.min(100) as u16 / 100;
    let up = |channel: u8| (channel as u16 + add).min(255) as u8;
    Rgb888::new(up(color.r()), up(color.g()), up(color.b()))
}

/// Scales each channel down by `percent`.
pub(super) fn darken(color: Rgb888, percent: u8) -> Rgb888 {
    let keep = 100 - percent.min(100) as u16;
    let down = |channel: u8| (channel as u16 * keep / 100) as u8;
    Rgb888::new(down(color.r()), down(color.g()), down(color.b()))
}

/// Linear blend, `step` of `steps` of the way from `from` to `to`.
pub(super) fn mix(from: Rgb888, to: Rgb888, step: u32, steps: u32) -> Rgb888 {
    if steps == 0 {
        return from;
    }

    let step = step.min(steps) as i32;
    let steps = steps as i32;
    let lerp = |a: u8, b: u8| (a as i32 + (b as i32 - a as i32) * step / steps) as u8;
    Rgb888::new(
        lerp(from.r(), to.r()),
        lerp(from.g(), to.g()),
        lerp(from.b(), to.b()),
    )
}

pub(super) const TOP_BG: Rgb888 = hex(0x000810);
pub(super) const INTRO_TOP_BG: Rgb888 = hex(0x050816);
pub(super) const LIST_BG: Rgb888 = hex(0x050816);
pub(super) const HOME_BG: Rgb888 = hex(0x050516);
pub(super) const GROUND: Rgb888 = hex(0x101830);
pub(super) const HEADER_BG: Rgb888 = hex(0x192447);
pub(super) const HEADER_TEXT: Rgb888 = hex(0xf5f7ff);
pub(super) const PANEL_BG: Rgb888 = hex(0x0b1020);
pub(super) const OUTLINE: Rgb888 = hex(0x101521);
pub(super) const PANEL_TEXT: Rgb888 = hex(0xdbe3ff);

pub(super) const WHITE: Rgb888 = hex(0xffffff);
pub(super) const ACCENT: Rgb888 = hex(0xa0d0ff);
pub(super) const BODY: Rgb888 = hex(0xc0c8ff);
pub(super) const MUTED: Rgb888 = hex(0x8890b0);
pub(super) const ARROW: Rgb888 = hex(0x7080a0);
pub(super) const TAGLINE: Rgb888 = hex(0x8088c0);
pub(super) const PROMPT_HINT: Rgb888 = hex(0x606880);
pub(super) const CARD_TEXT: Rgb888 = hex(0xf0f0f0);
pub(super) const GLOW: Rgb888 = hex(0xe6ffb0);

pub const CARD_COLOR_COUNT: usize = 7;

/// Default card colors, cycled by item index.
pub const CARD_COLORS: [Rgb888; CARD_COLOR_COUNT] = [
    hex(0x1f5f2a),
    hex(0x18416f),
    hex(0x8b5a1e),
    hex(0x36226d),
    hex(0x2f4f4f),
    hex(0x5c3a5e),
    hex(0x3d3d3d),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_saturates() {
        assert_eq!(lighten(hex(0xf0f0f0), 15), hex(0xffffff));
        assert_eq!(lighten(hex(0x1f5f2a), 5), Rgb888::new(0x1f + 12, 0x5f + 12, 0x2a + 12));
    }

    #[test]
    fn darken_floors() {
        assert_eq!(darken(hex(0x8b5a1e), 25), Rgb888::new(104, 67, 22));
        assert_eq!(darken(WHITE, 100), hex(0x000000));
    }

    #[test]
    fn mix_hits_both_ends() {
        let from = hex(0x102030);
        let to = hex(0x304050);
        assert_eq!(mix(from, to, 0, 25), from);
        assert_eq!(mix(from, to, 25, 25), to);
        assert_eq!(mix(from, to, 0, 0), from);
    }
}
