use super::*;

const GROUND_H: u32 = 40;
const AVATAR_SCALE: u32 = 3;

pub(super) fn render_home(surfaces: &mut ScreenPair, notes: &[&str], caption: &str, now_ms: u64) {
    let top = &mut surfaces.top;
    begin_top_page(top, "Home");
    for (row, note) in notes.iter().enumerate() {
        draw_line(top, note, MARGIN_X, 32 + row as i32 * 12, &FONT_6X10, BODY);
    }

    let bottom = &mut surfaces.bottom;
    fill_surface(bottom, HOME_BG);
    let ground_y = HEIGHT as i32 - GROUND_H as i32;
    fill_rect(bottom, 0, ground_y, WIDTH as u32, GROUND_H, GROUND);

    let frame: &[&str] = if avatar_blinking(now_ms) {
        &AVATAR_BLINK
    } else {
        &AVATAR_IDLE
    };
    let sprite_w = AVATAR_COLUMNS * AVATAR_SCALE;
    let sprite_h = frame.len() as u32 * AVATAR_SCALE;

    let avatar_x = (WIDTH as u32 - sprite_w) as i32 / 2;
    let avatar_y = ground_y - sprite_h as i32 - 4 + avatar_bob(now_ms);
    draw_sprite(
        bottom,
        Point::new(avatar_x, avatar_y),
        AVATAR_SCALE,
        frame,
        avatar_color,
    );

    draw_text(
        bottom,
        caption,
        Point::new(WIDTH as i32 / 2, avatar_y - 6),
        &FONT_6X10,
        ACCENT,
        Alignment::Center,
        Baseline::Bottom,
    );
}
