use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A potion color.
///
/// Colors carry no structure beyond identity; the serialized form is the
/// lowercase name used by the browser front-end (`"darkblue"`, `"pink"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Purple,
    Orange,
    DarkBlue,
    LightBlue,
    DarkGreen,
    LightGreen,
    Brown,
    Pink,
}

/// The classic ten-color palette, in display order.
pub const PALETTE: [Color; 10] = [
    Color::Red,
    Color::Yellow,
    Color::Purple,
    Color::Orange,
    Color::DarkBlue,
    Color::LightBlue,
    Color::DarkGreen,
    Color::LightGreen,
    Color::Brown,
    Color::Pink,
];

impl Color {
    /// Token used on the wire and in asset names (`potion_<name>.png`).
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::DarkBlue => "darkblue",
            Color::LightBlue => "lightblue",
            Color::DarkGreen => "darkgreen",
            Color::LightGreen => "lightgreen",
            Color::Brown => "brown",
            Color::Pink => "pink",
        }
    }

    /// All colors known to the game.
    pub fn all() -> &'static [Color] {
        &PALETTE
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a token does not name any color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color token `{0}`")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        // Accept "dark_blue" / "dark-blue" as well as the canonical "darkblue"
        let compact: String = token.chars().filter(|c| *c != '_' && *c != '-').collect();
        PALETTE
            .iter()
            .copied()
            .find(|c| c.name() == compact)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}
