use super::*;

const LINE_H: i32 = 14;

pub(super) struct AboutView<'a> {
    pub badge: PageBadge,
    pub title: &'a str,
    pub lines: &'a [&'a str],
    pub more_above: bool,
    pub more_below: bool,
}

pub(super) fn render_about(surfaces: &mut ScreenPair, view: AboutView<'_>) {
    let top = &mut surfaces.top;
    begin_top_page(top, "About");
    draw_line(top, "Scroll to read more about who I am,", MARGIN_X, 32, &FONT_6X10, BODY);
    draw_line(top, "what I build, and what I'm into.", MARGIN_X, 44, &FONT_6X10, BODY);
    draw_line(top, "Up/Down: scroll  B: Home  L/R: page", MARGIN_X, 72, &FONT_6X10, BODY);

    let bottom = &mut surfaces.bottom;
    begin_bottom_page(bottom, view.title, view.badge);
    draw_panel(bottom);

    let text_x = PANEL_X + 8;
    for (row, line) in view.lines.iter().enumerate() {
        let y = PANEL_Y + 10 + row as i32 * LINE_H;
        draw_line(bottom, line, text_x, y, &FONT_6X10, PANEL_TEXT);
    }

    let arrow_x = WIDTH as i32 - 16;
    if view.more_above {
        draw_arrow(bottom, Point::new(arrow_x, PANEL_Y + 8), true, MUTED);
    }
    if view.more_below {
        let y = PANEL_Y + PANEL_H as i32 - 10;
        draw_arrow(bottom, Point::new(arrow_x, y), false, MUTED);
    }

    draw_footer(bottom, PANEL_X + 2, "Up/Down: scroll   B: Home");
}
