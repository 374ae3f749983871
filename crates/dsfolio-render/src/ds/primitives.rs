use super::*;

pub(super) fn fill_surface(surface: &mut Surface, color: Rgb888) {
    surface.fill(to_565(color));
}

pub(super) fn fill_rect(surface: &mut Surface, x: i32, y: i32, w: u32, h: u32, color: Rgb888) {
    let _ = Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(to_565(color)))
        .draw(surface);
}

pub(super) fn rounded(x: i32, y: i32, w: u32, h: u32, radius: u32) -> RoundedRectangle {
    let radius = radius.min(w / 2).min(h / 2);
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::new(x, y), Size::new(w, h)),
        Size::new(radius, radius),
    )
}

pub(super) fn fill_rounded(surface: &mut Surface, shape: &RoundedRectangle, color: Rgb888) {
    let _ = shape
        .into_styled(PrimitiveStyle::with_fill(to_565(color)))
        .draw(surface);
}

pub(super) fn stroke_rounded(
    surface: &mut Surface,
    shape: &RoundedRectangle,
    color: Rgb888,
    width: u32,
) {
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(to_565(color))
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    let _ = shape.into_styled(style).draw(surface);
}

/// Vertical gradient from `top` to `bottom`, clipped to the rounded shape.
pub(super) fn fill_rounded_gradient(
    surface: &mut Surface,
    shape: &RoundedRectangle,
    top: Rgb888,
    bottom: Rgb888,
) {
    let origin_y = shape.rectangle.top_left.y;
    let steps = shape.rectangle.size.height.saturating_sub(1);

    let _ = surface.draw_iter(shape.points().map(|point| {
        let row = (point.y - origin_y).max(0) as u32;
        Pixel(point, to_565(mix(top, bottom, row, steps)))
    }));
}

/// Half-strength shadow of `shape`, pushed down by `offset` pixels.
pub(super) fn drop_shadow(surface: &mut Surface, shape: &RoundedRectangle, offset: i32) {
    for point in shape.translate(Point::new(0, offset)).points() {
        surface.shade(point.x, point.y, SHADOW_PERCENT);
    }
}

pub(super) fn draw_text(
    surface: &mut Surface,
    text: &str,
    at: Point,
    font: &MonoFont<'_>,
    color: Rgb888,
    alignment: Alignment,
    baseline: Baseline,
) {
    let layout = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(baseline)
        .build();
    let style = MonoTextStyle::new(font, to_565(color));
    let _ = Text::with_text_style(text, at, style, layout).draw(surface);
}

/// Left-aligned, top-anchored text, the common case on every page.
pub(super) fn draw_line(
    surface: &mut Surface,
    text: &str,
    x: i32,
    y: i32,
    font: &MonoFont<'_>,
    color: Rgb888,
) {
    draw_text(surface, text, Point::new(x, y), font, color, Alignment::Left, Baseline::Top);
}

/// A halo pass in `glow`, then the face in `face`. Anchored left, middle.
pub(super) fn draw_glow_text(
    surface: &mut Surface,
    text: &str,
    at: Point,
    font: &MonoFont<'_>,
    face: Rgb888,
    glow: Rgb888,
) {
    let outer = darken(glow, 45);
    for offset in [Point::new(-2, 0), Point::new(2, 0), Point::new(0, -2), Point::new(0, 2)] {
        draw_text(surface, text, at + offset, font, outer, Alignment::Left, Baseline::Middle);
    }

    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            draw_text(
                surface,
                text,
                at + Point::new(dx, dy),
                font,
                glow,
                Alignment::Left,
                Baseline::Middle,
            );
        }
    }

    draw_text(surface, text, at, font, face, Alignment::Left, Baseline::Middle);
}

/// Small scroll indicator centered on `center`.
pub(super) fn draw_arrow(surface: &mut Surface, center: Point, up: bool, color: Rgb888) {
    let (tip, base) = if up { (-3, 2) } else { (3, -2) };
    let _ = Triangle::new(
        center + Point::new(0, tip),
        center + Point::new(-3, base),
        center + Point::new(3, base),
    )
    .into_styled(PrimitiveStyle::with_fill(to_565(color)))
    .draw(surface);
}

/// Clear the top screen and draw its page title.
pub(super) fn begin_top_page(surface: &mut Surface, title: &str) {
    fill_surface(surface, TOP_BG);
    draw_line(surface, title, MARGIN_X, 12, &FONT_9X15, WHITE);
}

/// Clear the bottom screen and draw the header bar with its page badge.
pub(super) fn begin_bottom_page(surface: &mut Surface, title: &str, badge: PageBadge) {
    fill_surface(surface, LIST_BG);
    fill_rect(surface, 0, 0, WIDTH as u32, HEADER_H, HEADER_BG);

    let mid = HEADER_H as i32 / 2;
    draw_text(
        surface,
        title,
        Point::new(10, mid),
        &FONT_7X13,
        HEADER_TEXT,
        Alignment::Left,
        Baseline::Middle,
    );

    let mut label: String<16> = String::new();
    if write!(label, "Page {} / {}", badge.number, badge.total).is_ok() {
        draw_text(
            surface,
            &label,
            Point::new(WIDTH as i32 - 10, mid),
            &FONT_7X13,
            HEADER_TEXT,
            Alignment::Right,
            Baseline::Middle,
        );
    }
}

pub(super) fn draw_footer(surface: &mut Surface, x: i32, hint: &str) {
    draw_text(
        surface,
        hint,
        Point::new(x, HEIGHT as i32 - 4),
        &FONT_5X8,
        MUTED,
        Alignment::Left,
        Baseline::Bottom,
    );
}

/// Rounded content panel shared by About and the message composer.
pub(super) fn draw_panel(surface: &mut Surface) {
    let panel = rounded(PANEL_X, PANEL_Y, PANEL_W, PANEL_H, CARD_RADIUS);
    fill_rounded(surface, &panel, PANEL_BG);
    stroke_rounded(surface, &panel, OUTLINE, 2);
}

/// One list card at visible `row`, with shadow, gradient and label.
pub(super) fn draw_card(
    surface: &mut Surface,
    row: usize,
    base: Rgb888,
    label: &str,
    selected: bool,
) {
    let y = card_y(row);
    let card = rounded(CARD_X, y, CARD_W, CARD_H, CARD_RADIUS);

    drop_shadow(surface, &card, SHADOW_OFFSET);

    let (top, bottom) = if selected {
        (lighten(base, 15), darken(base, 15))
    } else {
        (lighten(base, 5), darken(base, 25))
    };
    fill_rounded_gradient(surface, &card, top, bottom);

    if selected {
        stroke_rounded(surface, &card, WHITE, 2);
    } else {
        stroke_rounded(surface, &card, OUTLINE, 1);
    }

    let text_at = Point::new(CARD_X + 14, y + CARD_H as i32 / 2 + 1);
    if selected {
        draw_glow_text(surface, label, text_at, &FONT_7X13, WHITE, GLOW);
    } else {
        draw_text(
            surface,
            label,
            text_at,
            &FONT_7X13,
            CARD_TEXT,
            Alignment::Left,
            Baseline::Middle,
        );
    }
}

pub(super) const fn card_y(row: usize) -> i32 {
    CARD_TOP + row as i32 * (CARD_H as i32 + CARD_GAP)
}
