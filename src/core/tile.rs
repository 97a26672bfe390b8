//! Letters, rack tiles and board modifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Marker used on the wire for a wildcard (blank) tile.
pub const WILDCARD_MARKER: char = '_';

/// A single upper-case letter.
///
/// Construction normalises case so that `a` and `A` compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Letter(char);

impl Letter {
    /// Create a letter, upper-casing it when the upper-case form is a single char.
    #[must_use]
    pub fn new(c: char) -> Self {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Self(u),
            _ => Self(c),
        }
    }

    /// Parse a wire letter: exactly one non-whitespace character.
    ///
    /// Returns `None` for empty or multi-character strings.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Some(Self::new(c)),
            _ => None,
        }
    }

    /// The underlying character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tile sitting in a rack or in the bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RackTile {
    /// A regular letter tile.
    Letter(Letter),
    /// A wildcard that can stand in for any letter of the tile set.
    Wildcard,
}

impl RackTile {
    /// Shorthand for a letter tile.
    #[must_use]
    pub fn letter(c: char) -> Self {
        RackTile::Letter(Letter::new(c))
    }

    #[must_use]
    pub fn is_wildcard(self) -> bool {
        matches!(self, RackTile::Wildcard)
    }
}

impl std::fmt::Display for RackTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RackTile::Letter(l) => write!(f, "{l}"),
            RackTile::Wildcard => write!(f, "{WILDCARD_MARKER}"),
        }
    }
}

/// Scoring bonus attached to a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    DoubleLetter,
    TripleLetter,
    QuadLetter,
    DoubleWord,
    TripleWord,
    QuadWord,
}

impl Modifier {
    /// Factor applied to the tile's own points (1 for word modifiers).
    #[must_use]
    pub const fn letter_multiplier(self) -> u32 {
        match self {
            Modifier::DoubleLetter => 2,
            Modifier::TripleLetter => 3,
            Modifier::QuadLetter => 4,
            _ => 1,
        }
    }

    /// Factor applied to the whole word (1 for letter modifiers).
    #[must_use]
    pub const fn word_multiplier(self) -> u32 {
        match self {
            Modifier::DoubleWord => 2,
            Modifier::TripleWord => 3,
            Modifier::QuadWord => 4,
            _ => 1,
        }
    }

    /// Layout code, e.g. `TW`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Modifier::DoubleLetter => "DL",
            Modifier::TripleLetter => "TL",
            Modifier::QuadLetter => "QL",
            Modifier::DoubleWord => "DW",
            Modifier::TripleWord => "TW",
            Modifier::QuadWord => "QW",
        }
    }
}

/// Unknown modifier code in a board layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown modifier code `{0}`")]
pub struct ParseModifierError(pub String);

impl FromStr for Modifier {
    type Err = ParseModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DL" => Ok(Modifier::DoubleLetter),
            // The center cell is tagged separately in layouts but scores as a triple letter.
            "TL" | "TL-CENTER" => Ok(Modifier::TripleLetter),
            "QL" => Ok(Modifier::QuadLetter),
            "DW" => Ok(Modifier::DoubleWord),
            "TW" => Ok(Modifier::TripleWord),
            "QW" => Ok(Modifier::QuadWord),
            other => Err(ParseModifierError(other.to_string())),
        }
    }
}
