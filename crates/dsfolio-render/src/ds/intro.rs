use super::*;

pub(super) fn render_intro(
    surfaces: &mut ScreenPair,
    owner: &str,
    headline: &str,
    tagline: &str,
    now_ms: u64,
) {
    let center_x = WIDTH as i32 / 2;

    let top = &mut surfaces.top;
    fill_surface(top, INTRO_TOP_BG);
    for (text, y, font, color) in [
        (owner, 24, &FONT_10X20, WHITE),
        (headline, 48, &FONT_7X13, ACCENT),
        (tagline, 70, &FONT_6X10, TAGLINE),
    ] {
        draw_text(
            top,
            text,
            Point::new(center_x, y),
            font,
            color,
            Alignment::Center,
            Baseline::Top,
        );
    }

    let bottom = &mut surfaces.bottom;
    fill_surface(bottom, TOP_BG);
    if intro_prompt_visible(now_ms) {
        draw_text(
            bottom,
            "Press A to Start",
            Point::new(center_x, HEIGHT as i32 / 2),
            &FONT_9X15,
            WHITE,
            Alignment::Center,
            Baseline::Middle,
        );
    }
    draw_text(
        bottom,
        "Use D-Pad + A / B to explore",
        Point::new(center_x, HEIGHT as i32 - 16),
        &FONT_6X10,
        PROMPT_HINT,
        Alignment::Center,
        Baseline::Middle,
    );
}
