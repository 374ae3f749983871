//! App-level view models consumed by the screen renderer.

use crate::catalog::{ContactEntry, ProjectEntry};

/// "Page n / total" badge shown in the bottom screen header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageBadge {
    /// 1-based.
    pub number: u8,
    pub total: u8,
}

/// Snapshot of everything one paint needs. Built by
/// [`FolioApp::with_screen`](crate::app::FolioApp::with_screen).
#[derive(Clone, Copy, Debug)]
pub enum Screen<'a> {
    Intro {
        owner: &'a str,
        headline: &'a str,
        tagline: &'a str,
    },
    Home {
        notes: &'a [&'a str],
        caption: &'a str,
    },
    Projects {
        badge: PageBadge,
        items: &'a [ProjectEntry],
        selected: usize,
        viewport_start: usize,
        visible_rows: usize,
    },
    About {
        badge: PageBadge,
        title: &'a str,
        /// Only the visible window of wrapped lines.
        lines: &'a [&'a str],
        more_above: bool,
        more_below: bool,
    },
    Contact {
        badge: PageBadge,
        items: &'a [ContactEntry],
        selected: usize,
        composing: bool,
        recipient: &'a str,
        draft: &'a [&'a str],
    },
}

impl Screen<'_> {
    /// Screens whose pixels depend on the timestamp.
    pub fn is_animated(&self) -> bool {
        matches!(self, Screen::Intro { .. } | Screen::Home { .. })
    }
}
