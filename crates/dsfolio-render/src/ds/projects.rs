use super::*;

pub(super) struct ProjectsView<'a> {
    pub badge: PageBadge,
    pub items: &'a [ProjectEntry],
    pub selected: usize,
    pub viewport_start: usize,
    pub visible_rows: usize,
}

pub(super) fn render_projects(
    surfaces: &mut ScreenPair,
    view: ProjectsView<'_>,
    colors: &[Rgb888; CARD_COLOR_COUNT],
) {
    let top = &mut surfaces.top;
    begin_top_page(top, "Projects");
    if let Some(item) = view.items.get(view.selected) {
        draw_line(top, item.label, MARGIN_X, 32, &FONT_7X13, ACCENT);
        draw_line(top, item.subtitle, MARGIN_X, 46, &FONT_6X10, BODY);
    }
    draw_line(top, "Up/Down: select project, A: view", MARGIN_X, 68, &FONT_6X10, BODY);
    draw_line(top, "L/R: switch to Home / About / Contact", MARGIN_X, 80, &FONT_6X10, BODY);

    let bottom = &mut surfaces.bottom;
    begin_bottom_page(bottom, "Select a Project", view.badge);

    let start = view.viewport_start.min(view.items.len());
    let end = (start + view.visible_rows).min(view.items.len());
    for (row, index) in (start..end).enumerate() {
        let color = card_color(colors, index);
        draw_card(bottom, row, color, view.items[index].label, index == view.selected);
    }

    let arrow_x = WIDTH as i32 - 14;
    if start > 0 {
        draw_arrow(bottom, Point::new(arrow_x, CARD_TOP - 10), true, ARROW);
    }
    if end < view.items.len() && end > start {
        let last_y = card_y(end - start - 1);
        draw_arrow(bottom, Point::new(arrow_x, last_y + CARD_H as i32 + 10), false, ARROW);
    }

    draw_footer(bottom, 10, "Up/Down: choose   A: select   B: Home");
}
