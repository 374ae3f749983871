//! Palette-coded pixel sprites.

use super::*;

/// Codes: `C` cap, `H` hair, `S` skin, `E` eye line, `M` moustache,
/// `B` jacket. Spaces are transparent.
pub(super) const AVATAR_IDLE: [&str; 12] = [
    "  CCCCC  ",
    " CCCCCCC ",
    " CHHHHHC ",
    " HSSSSSH ",
    " HSE ESH ",
    " HSSMSSH ",
    "  SSSS   ",
    "  BBBB   ",
    " BBBBBB  ",
    " BBBBBB  ",
    "  BB BB  ",
    "  BB BB  ",
];

pub(super) const AVATAR_BLINK: [&str; 12] = [
    "  CCCCC  ",
    " CCCCCCC ",
    " CHHHHHC ",
    " HSSSSSH ",
    " HEE EEH ",
    " HSSMSSH ",
    "  SSSS   ",
    "  BBBB   ",
    " BBBBBB  ",
    " BBBBBB  ",
    "  BB BB  ",
    "  BB BB  ",
];

pub(super) const AVATAR_COLUMNS: u32 = 9;

pub(super) fn avatar_color(code: u8) -> Option<Rgb888> {
    match code {
        b'C' => Some(hex(0x202530)),
        b'H' => Some(hex(0xd29a5a)),
        b'S' => Some(hex(0xf4d0b8)),
        b'E' => Some(hex(0x202020)),
        b'M' => Some(hex(0xc06a3a)),
        b'B' => Some(hex(0x1a1a1a)),
        _ => None,
    }
}

/// Draws `rows` with each code expanded to a `scale`-sized square.
pub(super) fn draw_sprite(
    surface: &mut Surface,
    origin: Point,
    scale: u32,
    rows: &[&str],
    palette: fn(u8) -> Option<Rgb888>,
) {
    let cell = Size::new(scale, scale);

    for (row, line) in rows.iter().enumerate() {
        for (col, code) in line.bytes().enumerate() {
            let Some(color) = palette(code) else {
                continue;
            };

            let top_left = origin + Point::new(col as i32 * scale as i32, row as i32 * scale as i32);
            let _ = Rectangle::new(top_left, cell)
                .into_styled(PrimitiveStyle::with_fill(to_565(color)))
                .draw(surface);
        }
    }
}
