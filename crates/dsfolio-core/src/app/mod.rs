//! Navigation state machine for the intro screen and the paged portfolio.

use log::{debug, info, warn};

use crate::{
    catalog::{Catalog, ContactEntry, ContactKind, ProjectEntry},
    input::{ButtonId, InputProvider},
    render::{PageBadge, Screen},
    text_wrap::{TextMeasure, WrapCache},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// List geometry the navigation rules depend on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavConfig {
    /// Project cards visible at once.
    pub project_rows: u8,
    /// Wrapped About lines visible at once.
    pub about_lines: u8,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            project_rows: 4,
            about_lines: 7,
        }
    }
}

/// Wrap width and font metrics of the surface the About text is drawn on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextMetrics<M> {
    pub max_width: u32,
    pub measure: M,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UiMode {
    Intro,
    Pages,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Page {
    Home,
    Projects,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Projects, Page::About, Page::Contact];
    pub const COUNT: u8 = 4;

    pub const fn index(self) -> u8 {
        match self {
            Self::Home => 0,
            Self::Projects => 1,
            Self::About => 2,
            Self::Contact => 3,
        }
    }

    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }

    pub const fn next(self) -> Self {
        Self::from_index(rotate_cw(self.index(), Self::COUNT))
    }

    pub const fn previous(self) -> Self {
        Self::from_index(rotate_ccw(self.index(), Self::COUNT))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContactMode {
    List,
    Typing,
}

/// Every piece of mutable navigation state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavState {
    pub mode: UiMode,
    pub page: Page,
    pub project_selected: u16,
    /// First visible project card.
    pub project_viewport_start: u16,
    /// First visible wrapped About line.
    pub about_scroll: u16,
    pub contact_selected: u16,
    pub contact_mode: ContactMode,
}

impl NavState {
    pub const INITIAL: NavState = NavState {
        mode: UiMode::Intro,
        page: Page::Home,
        project_selected: 0,
        project_viewport_start: 0,
        about_scroll: 0,
        contact_selected: 0,
        contact_mode: ContactMode::List,
    };
}

impl Default for NavState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Side information a button press produces for the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notice<'a> {
    ProjectSelected(&'a ProjectEntry),
    ContactOpened(&'a ContactEntry),
    Unhandled { button: ButtonId, page: Page },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ButtonOutcome<'a> {
    pub render: TickResult,
    pub notice: Option<Notice<'a>>,
}

impl ButtonOutcome<'_> {
    pub fn needs_render(&self) -> bool {
        self.render == TickResult::RenderRequested
    }
}

pub struct FolioApp<'a, M>
where
    M: TextMeasure,
{
    catalog: Catalog<'a>,
    config: NavConfig,
    metrics: TextMetrics<M>,
    nav: NavState,
    about_wrap: WrapCache<'a>,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
