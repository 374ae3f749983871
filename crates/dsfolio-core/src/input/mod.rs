//! Input abstraction layer.

use core::{fmt, str::FromStr};

/// Raw console button ids, one per physical button.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ButtonId {
    A,
    B,
    X,
    Y,
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
}

impl ButtonId {
    pub const ALL: [ButtonId; 10] = [
        ButtonId::A,
        ButtonId::B,
        ButtonId::X,
        ButtonId::Y,
        ButtonId::Up,
        ButtonId::Down,
        ButtonId::Left,
        ButtonId::Right,
        ButtonId::Start,
        ButtonId::Select,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
            Self::Up => "D_UP",
            Self::Down => "D_DOWN",
            Self::Left => "D_LEFT",
            Self::Right => "D_RIGHT",
            Self::Start => "START",
            Self::Select => "SELECT",
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a textual button label names no known button.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseButtonError;

impl fmt::Display for ParseButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized button id")
    }
}

impl FromStr for ButtonId {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|button| button.label() == s)
            .ok_or(ParseButtonError)
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<ButtonId>, Self::Error>;
}
