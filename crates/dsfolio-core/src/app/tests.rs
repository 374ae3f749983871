use super::*;
use crate::{
    catalog::{Catalog, ContactKind},
    input::{ButtonId, InputProvider},
    render::Screen,
    text_wrap::FixedAdvance,
};

const MONO: FixedAdvance = FixedAdvance::new(6, 0);

fn metrics(max_width: u32) -> TextMetrics<FixedAdvance> {
    TextMetrics {
        max_width,
        measure: MONO,
    }
}

fn make_app() -> FolioApp<'static, FixedAdvance> {
    FolioApp::new(Catalog::PORTFOLIO, NavConfig::default(), metrics(220))
}

/// Ten one-word lines: never rewrapped, so max_start is 10 - 7.
const SHORT_ABOUT: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

fn make_short_about_app() -> FolioApp<'static, FixedAdvance> {
    let catalog = Catalog {
        about: &SHORT_ABOUT,
        ..Catalog::PORTFOLIO
    };
    FolioApp::new(catalog, NavConfig::default(), metrics(220))
}

fn open_page(app: &mut FolioApp<'static, FixedAdvance>, page: Page) {
    if app.mode() == UiMode::Intro {
        app.handle_button(ButtonId::A);
    }
    while app.page() != page {
        app.handle_button(ButtonId::Right);
    }
}

struct ScriptedInput<'a> {
    events: &'a [ButtonId],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [ButtonId]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<ButtonId>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

struct BrokenInput {
    polls: usize,
}

impl InputProvider for BrokenInput {
    type Error = &'static str;

    fn poll_event(&mut self) -> Result<Option<ButtonId>, Self::Error> {
        self.polls += 1;
        if self.polls == 1 {
            Ok(Some(ButtonId::A))
        } else {
            Err("bus fault")
        }
    }
}

#[test]
fn intro_only_leaves_on_confirm() {
    let mut app = make_app();

    for button in [
        ButtonId::Up,
        ButtonId::Down,
        ButtonId::Left,
        ButtonId::Right,
        ButtonId::B,
        ButtonId::X,
        ButtonId::Select,
    ] {
        let outcome = app.handle_button(button);
        assert_eq!(outcome.render, TickResult::NoRender);
        assert_eq!(outcome.notice, None);
        assert_eq!(app.mode(), UiMode::Intro);
    }

    let outcome = app.handle_button(ButtonId::A);
    assert!(outcome.needs_render());
    assert_eq!(app.mode(), UiMode::Pages);
    assert_eq!(app.page(), Page::Home);
}

#[test]
fn start_also_confirms_the_intro() {
    let mut app = make_app();
    assert!(app.handle_button(ButtonId::Start).needs_render());
    assert_eq!(app.mode(), UiMode::Pages);
    assert_eq!(app.page(), Page::Home);
}

#[test]
fn pages_cycle_in_both_directions() {
    let mut app = make_app();
    open_page(&mut app, Page::Home);

    for expected in [Page::Projects, Page::About, Page::Contact, Page::Home] {
        assert!(app.handle_button(ButtonId::Right).needs_render());
        assert_eq!(app.page(), expected);
    }

    assert!(app.handle_button(ButtonId::Left).needs_render());
    assert_eq!(app.page(), Page::Contact);
    app.handle_button(ButtonId::Left);
    assert_eq!(app.page(), Page::About);
}

#[test]
fn project_viewport_follows_the_selection() {
    let mut app = make_app();
    open_page(&mut app, Page::Projects);

    for _ in 0..5 {
        assert!(app.handle_button(ButtonId::Down).needs_render());
        let nav = app.nav();
        assert!(nav.project_viewport_start <= nav.project_selected);
        assert!(nav.project_selected <= nav.project_viewport_start + 3);
    }

    let nav = app.nav();
    assert_eq!(nav.project_selected, 5);
    assert_eq!(nav.project_viewport_start, 2);

    app.handle_button(ButtonId::Down);
    assert_eq!(app.nav().project_selected, 6);
    assert_eq!(app.nav().project_viewport_start, 3);

    let before = app.nav();
    let outcome = app.handle_button(ButtonId::Down);
    assert_eq!(outcome.render, TickResult::NoRender);
    assert_eq!(app.nav(), before);

    for _ in 0..4 {
        app.handle_button(ButtonId::Up);
    }
    assert_eq!(app.nav().project_selected, 2);
    assert_eq!(app.nav().project_viewport_start, 2);

    app.handle_button(ButtonId::Up);
    assert_eq!(app.nav().project_selected, 1);
    assert_eq!(app.nav().project_viewport_start, 1);
}

#[test]
fn project_up_at_top_is_a_no_op() {
    let mut app = make_app();
    open_page(&mut app, Page::Projects);

    let outcome = app.handle_button(ButtonId::Up);
    assert_eq!(outcome.render, TickResult::NoRender);
    assert_eq!(app.nav().project_selected, 0);
}

#[test]
fn project_selection_survives_page_switches() {
    let mut app = make_app();
    open_page(&mut app, Page::Projects);
    app.handle_button(ButtonId::Down);
    app.handle_button(ButtonId::Down);

    app.handle_button(ButtonId::Right);
    app.handle_button(ButtonId::Left);

    assert_eq!(app.page(), Page::Projects);
    assert_eq!(app.nav().project_selected, 2);
}

#[test]
fn about_scroll_is_clamped_to_max_start() {
    let mut app = make_short_about_app();
    open_page(&mut app, Page::About);
    assert_eq!(app.about_max_start(), 3);

    let outcome = app.handle_button(ButtonId::Up);
    assert_eq!(outcome.render, TickResult::NoRender);

    for expected in 1..=3 {
        assert!(app.handle_button(ButtonId::Down).needs_render());
        assert_eq!(app.nav().about_scroll, expected);
    }

    let outcome = app.handle_button(ButtonId::Down);
    assert_eq!(outcome.render, TickResult::NoRender);
    assert_eq!(app.nav().about_scroll, 3);
}

#[test]
fn about_scroll_never_exceeds_max_start_for_the_portfolio_text() {
    let mut app = make_app();
    open_page(&mut app, Page::About);

    let max_start = app.about_max_start();
    assert!(max_start > 0);

    for _ in 0..40 {
        app.handle_button(ButtonId::Down);
        assert!(app.nav().about_scroll <= max_start);
    }
    assert_eq!(app.nav().about_scroll, max_start);
}

#[test]
fn entering_about_resets_its_scroll() {
    let mut app = make_short_about_app();
    open_page(&mut app, Page::About);
    app.handle_button(ButtonId::Down);
    app.handle_button(ButtonId::Down);

    app.handle_button(ButtonId::Right);
    app.handle_button(ButtonId::Left);

    assert_eq!(app.page(), Page::About);
    assert_eq!(app.nav().about_scroll, 0);
}

#[test]
fn about_screen_shows_the_visible_window() {
    let mut app = make_short_about_app();
    open_page(&mut app, Page::About);
    app.handle_button(ButtonId::Down);

    let mut seen = None;
    app.with_screen(|screen| {
        if let Screen::About {
            badge,
            lines,
            more_above,
            more_below,
            ..
        } = screen
        {
            seen = Some((badge.number, lines.len(), lines[0] == "b", more_above, more_below));
        }
    });

    assert_eq!(seen, Some((3, 7, true, true, true)));
}

#[test]
fn narrower_metrics_rewrap_and_wider_metrics_clamp_scroll() {
    let mut app = make_app();
    open_page(&mut app, Page::About);
    let wide_max = app.about_max_start();

    assert_eq!(
        app.set_text_metrics(metrics(120)),
        TickResult::RenderRequested
    );
    let narrow_max = app.about_max_start();
    assert!(narrow_max > wide_max);

    for _ in 0..narrow_max {
        app.handle_button(ButtonId::Down);
    }
    assert_eq!(app.nav().about_scroll, narrow_max);

    app.set_text_metrics(metrics(220));
    assert_eq!(app.nav().about_scroll, wide_max);
}

#[test]
fn contact_confirm_on_message_opens_the_composer() {
    let mut app = make_app();
    open_page(&mut app, Page::Contact);

    for _ in 0..3 {
        app.handle_button(ButtonId::Down);
    }
    assert_eq!(app.nav().contact_selected, 3);
    assert_eq!(
        app.catalog().contact_at(3).map(|entry| entry.kind),
        Some(ContactKind::Message)
    );

    let outcome = app.handle_button(ButtonId::A);
    assert!(outcome.needs_render());
    assert_eq!(outcome.notice, None);
    assert_eq!(app.nav().contact_mode, ContactMode::Typing);

    let outcome = app.handle_button(ButtonId::B);
    assert!(outcome.needs_render());
    assert_eq!(app.page(), Page::Contact);
    assert_eq!(app.nav().contact_mode, ContactMode::List);
    assert_eq!(app.nav().contact_selected, 3);
}

#[test]
fn typing_ignores_vertical_input_and_confirm() {
    let mut app = make_app();
    open_page(&mut app, Page::Contact);
    for _ in 0..3 {
        app.handle_button(ButtonId::Down);
    }
    app.handle_button(ButtonId::A);

    for button in [ButtonId::Up, ButtonId::Down, ButtonId::A] {
        let outcome = app.handle_button(button);
        assert_eq!(outcome.render, TickResult::NoRender);
        assert_eq!(outcome.notice, None);
    }
    assert_eq!(app.nav().contact_selected, 3);
}

#[test]
fn leaving_contact_while_typing_resets_the_composer_on_return() {
    let mut app = make_app();
    open_page(&mut app, Page::Contact);
    for _ in 0..3 {
        app.handle_button(ButtonId::Down);
    }
    app.handle_button(ButtonId::A);

    app.handle_button(ButtonId::Right);
    assert_eq!(app.page(), Page::Home);
    app.handle_button(ButtonId::Left);

    assert_eq!(app.page(), Page::Contact);
    assert_eq!(app.nav().contact_mode, ContactMode::List);
}

#[test]
fn contact_link_emits_a_notice_without_render() {
    let mut app = make_app();
    open_page(&mut app, Page::Contact);

    let outcome = app.handle_button(ButtonId::A);
    assert_eq!(outcome.render, TickResult::NoRender);
    match outcome.notice {
        Some(Notice::ContactOpened(entry)) => assert_eq!(entry.id, "github"),
        other => panic!("unexpected notice {other:?}"),
    }
}

#[test]
fn contact_cursor_is_clamped() {
    let mut app = make_app();
    open_page(&mut app, Page::Contact);

    assert_eq!(app.handle_button(ButtonId::Up).render, TickResult::NoRender);
    for _ in 0..10 {
        app.handle_button(ButtonId::Down);
    }
    assert_eq!(app.nav().contact_selected, 3);
}

#[test]
fn project_confirm_emits_a_notice_without_render() {
    let mut app = make_app();
    open_page(&mut app, Page::Projects);
    app.handle_button(ButtonId::Down);

    let outcome = app.handle_button(ButtonId::A);
    assert_eq!(outcome.render, TickResult::NoRender);
    match outcome.notice {
        Some(Notice::ProjectSelected(project)) => assert_eq!(project.id, "ai-picks"),
        other => panic!("unexpected notice {other:?}"),
    }
}

#[test]
fn cancel_returns_home_and_resets_about() {
    let mut app = make_short_about_app();
    open_page(&mut app, Page::About);
    app.handle_button(ButtonId::Down);

    let outcome = app.handle_button(ButtonId::B);
    assert!(outcome.needs_render());
    assert_eq!(app.page(), Page::Home);
    assert_eq!(app.nav().about_scroll, 0);
    assert_eq!(app.nav().contact_mode, ContactMode::List);

    let outcome = app.handle_button(ButtonId::B);
    assert_eq!(outcome.render, TickResult::NoRender);
}

#[test]
fn reserved_buttons_are_reported_but_ignored() {
    let mut app = make_app();
    open_page(&mut app, Page::Projects);
    let before = app.nav();

    for button in [ButtonId::X, ButtonId::Y, ButtonId::Start, ButtonId::Select] {
        let outcome = app.handle_button(button);
        assert_eq!(outcome.render, TickResult::NoRender);
        assert_eq!(
            outcome.notice,
            Some(Notice::Unhandled {
                button,
                page: Page::Projects
            })
        );
    }
    assert_eq!(app.nav(), before);
}

#[test]
fn home_ignores_vertical_input() {
    let mut app = make_app();
    open_page(&mut app, Page::Home);

    assert_eq!(app.handle_button(ButtonId::Up).render, TickResult::NoRender);
    assert_eq!(app.handle_button(ButtonId::Down).render, TickResult::NoRender);
}

#[test]
fn tick_reports_pending_and_animated_frames() {
    let mut app = make_app();

    assert_eq!(app.tick(), TickResult::RenderRequested);
    // Intro blinks, so it keeps asking for frames.
    assert_eq!(app.tick(), TickResult::RenderRequested);

    open_page(&mut app, Page::Projects);
    assert_eq!(app.tick(), TickResult::RenderRequested);
    assert_eq!(app.tick(), TickResult::NoRender);

    app.handle_button(ButtonId::Down);
    assert_eq!(app.tick(), TickResult::RenderRequested);
    assert_eq!(app.tick(), TickResult::NoRender);
}

#[test]
fn set_mode_requests_a_paint_only_on_change() {
    let mut app = make_app();
    assert_eq!(app.set_mode(UiMode::Intro), TickResult::NoRender);
    assert_eq!(app.set_mode(UiMode::Pages), TickResult::RenderRequested);
    assert_eq!(app.page(), Page::Home);
    assert_eq!(app.set_mode(UiMode::Pages), TickResult::NoRender);
}

#[test]
fn drain_input_applies_queued_presses() {
    let mut app = make_app();
    let events = [ButtonId::A, ButtonId::Right, ButtonId::Down, ButtonId::Down];
    let mut input = ScriptedInput::new(&events);

    assert_eq!(app.drain_input(&mut input), TickResult::RenderRequested);
    assert_eq!(app.page(), Page::Projects);
    assert_eq!(app.nav().project_selected, 2);
    assert_eq!(app.drain_input(&mut input), TickResult::NoRender);
}

#[test]
fn drain_input_stops_at_provider_errors() {
    let mut app = make_app();
    let mut input = BrokenInput { polls: 0 };

    assert_eq!(app.drain_input(&mut input), TickResult::RenderRequested);
    assert_eq!(input.polls, 2);
    assert_eq!(app.mode(), UiMode::Pages);
}

#[test]
fn zero_sized_config_is_normalized() {
    let app = FolioApp::new(
        Catalog::PORTFOLIO,
        NavConfig {
            project_rows: 0,
            about_lines: 0,
        },
        metrics(220),
    );
    assert_eq!(app.config().project_rows, 1);
    assert_eq!(app.config().about_lines, 1);
}
