use super::*;

const DRAFT_LINE_H: i32 = 14;

pub(super) struct ContactView<'a> {
    pub badge: PageBadge,
    pub items: &'a [ContactEntry],
    pub selected: usize,
    pub composing: bool,
    pub recipient: &'a str,
    pub draft: &'a [&'a str],
}

pub(super) fn render_contact(
    surfaces: &mut ScreenPair,
    view: ContactView<'_>,
    colors: &[Rgb888; CARD_COLOR_COUNT],
) {
    let top = &mut surfaces.top;
    begin_top_page(top, "Contact");
    if let Some(item) = view.items.get(view.selected) {
        draw_line(top, item.label, MARGIN_X, 32, &FONT_7X13, ACCENT);
        draw_line(top, item.value, MARGIN_X, 46, &FONT_6X10, BODY);
        draw_line(top, item.detail, MARGIN_X, 60, &FONT_6X10, BODY);
    }
    let hint = if view.composing {
        "Typing mode: B = back to list"
    } else {
        "A: open / copy, B: Home"
    };
    draw_line(top, hint, MARGIN_X, 78, &FONT_6X10, BODY);

    let bottom = &mut surfaces.bottom;
    begin_bottom_page(bottom, "Contact / Links", view.badge);

    if view.composing {
        draw_panel(bottom);
        let text_x = PANEL_X + 8;
        draw_line(bottom, view.recipient, text_x, PANEL_Y + 8, &FONT_6X10, PANEL_TEXT);
        for (row, line) in view.draft.iter().enumerate() {
            let y = PANEL_Y + 26 + row as i32 * DRAFT_LINE_H;
            draw_line(bottom, line, text_x, y, &FONT_6X10, PANEL_TEXT);
        }
        draw_footer(bottom, PANEL_X + 2, "B: back to contact list");
        return;
    }

    for (index, item) in view.items.iter().enumerate() {
        draw_card(bottom, index, card_color(colors, index), item.label, index == view.selected);
    }
    draw_footer(bottom, 10, "Up/Down: choose   A: open / type   B: Home");
}
