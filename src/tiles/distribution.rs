//! Locale tile sets: tile multiset, point table and board modifier layout.
//!
//! A `TileSet` is static input to session creation and scoring. Tile sets are
//! looked up through the [`TileDistributionProvider`] boundary; the crate ships
//! [`StandardDistributions`] with the English set preloaded.
//!
//! ## Example
//!
//! ```
//! use wordgrid::core::{Letter, Locale, Modifier, Position};
//! use wordgrid::tiles::TileSet;
//!
//! let set = TileSet::new(Locale::new("xx"))
//!     .with_letters("AEIOU", 1, 4)
//!     .with_letters("Q", 10, 1)
//!     .with_wildcards(1)
//!     .with_modifier(Position::new(0, 0), Modifier::TripleWord);
//!
//! assert_eq!(set.total_tiles(), 22);
//! assert_eq!(set.points(Letter::new('q')), 10);
//! assert_eq!(set.modifier_at(Position::new(0, 0)), Some(Modifier::TripleWord));
//! ```

use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::core::{GameError, Letter, Locale, Modifier, Position, RackTile};

/// Tile distribution, point values and modifier layout for one locale.
#[derive(Clone, Debug)]
pub struct TileSet {
    locale: Locale,
    /// Tile -> number of copies in a fresh bag.
    counts: Vec<(RackTile, u32)>,
    points: FxHashMap<Letter, u32>,
    modifiers: FxHashMap<Position, Modifier>,
}

impl TileSet {
    /// Create an empty tile set.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            counts: Vec::new(),
            points: FxHashMap::default(),
            modifiers: FxHashMap::default(),
        }
    }

    /// Add a point band: every letter in `letters` is worth `points` and has `count` copies.
    #[must_use]
    pub fn with_letters(mut self, letters: &str, points: u32, count: u32) -> Self {
        for c in letters.chars() {
            let letter = Letter::new(c);
            self.points.insert(letter, points);
            self.counts.push((RackTile::Letter(letter), count));
        }
        self
    }

    /// Add wildcard tiles.
    #[must_use]
    pub fn with_wildcards(mut self, count: u32) -> Self {
        self.counts.push((RackTile::Wildcard, count));
        self
    }

    /// Attach a modifier to a cell.
    #[must_use]
    pub fn with_modifier(mut self, position: Position, modifier: Modifier) -> Self {
        self.modifiers.insert(position, modifier);
        self
    }

    /// Attach modifiers from `(x, y, code)` layout entries such as `(0, 7, "TW")`.
    pub fn with_layout(mut self, layout: &[(i32, i32, &str)]) -> Result<Self, GameError> {
        for &(x, y, code) in layout {
            let modifier = code
                .parse::<Modifier>()
                .map_err(|e| GameError::InvalidSetup(e.to_string()))?;
            self.modifiers.insert(Position::new(x, y), modifier);
        }
        Ok(self)
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Base points for a letter; letters outside the set score 0.
    #[must_use]
    pub fn points(&self, letter: Letter) -> u32 {
        self.points.get(&letter).copied().unwrap_or(0)
    }

    /// Check whether a wildcard may stand in for `letter`.
    #[must_use]
    pub fn contains_letter(&self, letter: Letter) -> bool {
        self.points.contains_key(&letter)
    }

    /// Modifier on a cell, if any.
    #[must_use]
    pub fn modifier_at(&self, position: Position) -> Option<Modifier> {
        self.modifiers.get(&position).copied()
    }

    /// Total number of tiles in a fresh bag.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n as usize).sum()
    }

    /// Every tile of a fresh bag, grouped by kind.
    #[must_use]
    pub fn full_distribution(&self) -> Vec<RackTile> {
        self.counts
            .iter()
            .flat_map(|&(tile, n)| std::iter::repeat(tile).take(n as usize))
            .collect()
    }
}

/// External source of locale tile sets.
pub trait TileDistributionProvider: Send + Sync {
    /// Tile set for `locale`, or `None` if the locale is unsupported.
    fn tile_set(&self, locale: &Locale) -> Option<Arc<TileSet>>;
}

/// Modifier layout of the standard 15x15 board.
const STANDARD_LAYOUT: &[(i32, i32, &str)] = &[
    (0, 0, "QW"), (0, 3, "QL"), (0, 7, "TW"), (0, 11, "QL"), (0, 14, "QW"),
    (1, 1, "TW"), (1, 5, "TL"), (1, 9, "TL"), (1, 13, "TW"),
    (2, 2, "TW"), (2, 6, "QL"), (2, 8, "QL"), (2, 12, "TW"),
    (3, 0, "QL"), (3, 3, "TW"), (3, 7, "QL"), (3, 11, "TW"), (3, 14, "QL"),
    (4, 4, "TW"), (4, 10, "TW"),
    (5, 1, "TL"), (5, 5, "TL"), (5, 9, "TL"), (5, 13, "TL"),
    (6, 2, "QL"), (6, 6, "QL"), (6, 8, "QL"), (6, 12, "QL"),
    (7, 0, "QW"), (7, 3, "QL"), (7, 7, "TL-CENTER"), (7, 11, "QL"), (7, 14, "QW"),
    (8, 2, "QL"), (8, 6, "QL"), (8, 8, "QL"), (8, 12, "QL"),
    (9, 1, "TL"), (9, 5, "TL"), (9, 9, "TL"), (9, 13, "TL"),
    (10, 4, "TW"), (10, 10, "TW"),
    (11, 0, "QL"), (11, 3, "TW"), (11, 7, "QL"), (11, 11, "TW"), (11, 14, "QL"),
    (12, 2, "TW"), (12, 6, "QL"), (12, 8, "QL"), (12, 12, "TW"),
    (13, 1, "TW"), (13, 5, "TL"), (13, 9, "TL"), (13, 13, "TW"),
    (14, 0, "QW"), (14, 3, "QL"), (14, 7, "TW"), (14, 11, "QL"), (14, 14, "QW"),
];

/// The English tile set: 98 letters and 2 wildcards on the standard board.
pub fn english() -> Result<TileSet, GameError> {
    TileSet::new(Locale::english())
        .with_letters("E", 1, 12)
        .with_letters("AI", 1, 9)
        .with_letters("O", 1, 8)
        .with_letters("NRT", 1, 6)
        .with_letters("LSU", 1, 4)
        .with_letters("D", 2, 4)
        .with_letters("G", 2, 3)
        .with_letters("BCMP", 3, 2)
        .with_letters("FHVWY", 4, 2)
        .with_letters("K", 5, 1)
        .with_letters("JX", 8, 1)
        .with_letters("QZ", 10, 1)
        .with_wildcards(2)
        .with_layout(STANDARD_LAYOUT)
}

/// In-process tile set provider keyed by locale.
#[derive(Clone, Debug, Default)]
pub struct StandardDistributions {
    sets: FxHashMap<Locale, Arc<TileSet>>,
}

impl StandardDistributions {
    /// Create a provider with the English set registered.
    pub fn new() -> Result<Self, GameError> {
        let mut provider = Self::default();
        provider.register(english()?);
        Ok(provider)
    }

    /// Register (or replace) a tile set under its locale.
    pub fn register(&mut self, set: TileSet) {
        self.sets.insert(set.locale().clone(), Arc::new(set));
    }
}

impl TileDistributionProvider for StandardDistributions {
    fn tile_set(&self, locale: &Locale) -> Option<Arc<TileSet>> {
        self.sets.get(locale).cloned()
    }
}
