//! Read-only content shown on the portfolio pages.

/// One row of the Projects list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub subtitle: &'static str,
}

/// What confirming a contact row does.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContactKind {
    /// External link, handed to the host.
    Link,
    /// Opens the in-console message composer.
    Message,
}

/// One row of the Contact list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContactEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
    pub kind: ContactKind,
}

/// Static catalog backing every page.
#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    pub owner: &'a str,
    pub headline: &'a str,
    pub tagline: &'a str,
    pub avatar_caption: &'a str,
    pub about_title: &'a str,
    pub message_recipient: &'a str,
    pub home_notes: &'a [&'a str],
    pub projects: &'a [ProjectEntry],
    pub contacts: &'a [ContactEntry],
    pub about: &'a [&'a str],
    pub message_draft: &'a [&'a str],
}

pub const PROJECT_ENTRIES: [ProjectEntry; 7] = [
    ProjectEntry {
        id: "nova",
        label: "Nova Detailing",
        subtitle: "Custom detailing website",
    },
    ProjectEntry {
        id: "ai-picks",
        label: "AI Picks Bot",
        subtitle: "Discord bot + sports data",
    },
    ProjectEntry {
        id: "ds-portfolio",
        label: "DS Portfolio",
        subtitle: "This playable homepage",
    },
    ProjectEntry {
        id: "sloclap",
        label: "Sloclap Landing",
        subtitle: "Game studio landing page concept",
    },
    ProjectEntry {
        id: "library",
        label: "Mini Library System",
        subtitle: "C project with file storage",
    },
    ProjectEntry {
        id: "ems",
        label: "Employee Management",
        subtitle: "Console CRUD system in C",
    },
    ProjectEntry {
        id: "more",
        label: "More Coming Soon",
        subtitle: "Room for future projects",
    },
];

pub const CONTACT_ENTRIES: [ContactEntry; 4] = [
    ContactEntry {
        id: "github",
        label: "GitHub",
        value: "github.com/liamkeats",
        detail: "Code, projects, and experiments.",
        kind: ContactKind::Link,
    },
    ContactEntry {
        id: "linkedin",
        label: "LinkedIn",
        value: "linkedin.com/in/liam-keats",
        detail: "Professional profile & updates.",
        kind: ContactKind::Link,
    },
    ContactEntry {
        id: "email",
        label: "Email",
        value: "keatsliam@gmail.com",
        detail: "Reach out directly via email.",
        kind: ContactKind::Link,
    },
    ContactEntry {
        id: "message",
        label: "Send a Message",
        value: "Write a little pixel note",
        detail: "Opens a fake DS-style typing screen.",
        kind: ContactKind::Message,
    },
];

pub const ABOUT_LINES: [&str; 16] = [
    "I'm Liam, a CS student and builder from Nova Scotia.",
    "I like making interactive web experiences, tools,",
    "and little toys like this DS portfolio.",
    "",
    "Right now I'm especially into:",
    "- Web dev (React / Astro / Three.js)",
    "- Data & sports analytics projects",
    "- Automation & bots (Discord, scripts, etc.)",
    "",
    "Outside of code I'm running Nova Detailing -",
    "a mobile detailing business - and learning how",
    "to make tech that actually supports real work.",
    "",
    "This page is just a small summary. The Projects",
    "page goes deeper into some of the things I'm",
    "building and experimenting with.",
];

pub const HOME_NOTES: [&str; 3] = [
    "- This is the main screen.",
    "- D-Pad left/right to browse pages.",
    "- Home > Projects > About > Contact",
];

pub const MESSAGE_DRAFT: [&str; 6] = [
    "Hi Liam, I found your DS portfolio",
    "and wanted to reach out.",
    "",
    ">> This is a fake typing screen",
    "   for now, but it shows how",
    "   a message could look.",
];

impl Catalog<'static> {
    pub const PORTFOLIO: Catalog<'static> = Catalog {
        owner: "Liam Keats",
        headline: "DS Portfolio",
        tagline: "A little playable homepage",
        avatar_caption: "Liam.exe",
        about_title: "About Liam",
        message_recipient: "To: Liam (via DS console)",
        home_notes: &HOME_NOTES,
        projects: &PROJECT_ENTRIES,
        contacts: &CONTACT_ENTRIES,
        about: &ABOUT_LINES,
        message_draft: &MESSAGE_DRAFT,
    };
}

impl<'a> Catalog<'a> {
    pub fn project_count(&self) -> u16 {
        self.projects.len().min(u16::MAX as usize) as u16
    }

    pub fn contact_count(&self) -> u16 {
        self.contacts.len().min(u16::MAX as usize) as u16
    }

    pub fn project_at(&self, index: u16) -> Option<&'a ProjectEntry> {
        self.projects.get(index as usize)
    }

    pub fn contact_at(&self, index: u16) -> Option<&'a ContactEntry> {
        self.contacts.get(index as usize)
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::PORTFOLIO
    }
}
