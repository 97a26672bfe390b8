//! Word and turn scoring.
//!
//! word score = (sum of tile points x letter multiplier) x (product of word multipliers)
//!
//! Letter multipliers apply per tile while summing; the word multiplier is
//! applied once to the finished sum. A wildcard tile scores as the letter it
//! stands for unless `WildcardPoints::Zero` is in force; either way it passes
//! on its cell's word multiplier.

use serde::{Deserialize, Serialize};

use super::extraction::{ExtractedWord, Extraction, WordTile};
use crate::core::{ModifierPolicy, WildcardPoints};
use crate::tiles::TileSet;

/// A scored word in a turn outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub tiles: Vec<WordTile>,
    pub points: u32,
}

/// Score one word.
pub fn score_word(
    word: &ExtractedWord,
    tile_set: &TileSet,
    policy: ModifierPolicy,
    wildcards: WildcardPoints,
) -> u32 {
    let mut sum = 0;
    let mut word_multiplier = 1;

    for tile in &word.tiles {
        let base = match wildcards {
            WildcardPoints::Zero if tile.blank => 0,
            _ => tile_set.points(tile.letter),
        };
        let modifier = match policy {
            ModifierPolicy::EveryTile => tile_set.modifier_at(tile.position),
            ModifierPolicy::PlacedTilesOnly if tile.fresh => tile_set.modifier_at(tile.position),
            ModifierPolicy::PlacedTilesOnly => None,
        };

        match modifier {
            Some(m) => {
                sum += base * m.letter_multiplier();
                word_multiplier *= m.word_multiplier();
            }
            None => sum += base,
        }
    }

    sum * word_multiplier
}

/// Score every word of a move. Returns the scored words and the turn total.
pub fn score_turn(
    extraction: &Extraction,
    tile_set: &TileSet,
    policy: ModifierPolicy,
    wildcards: WildcardPoints,
) -> (Vec<Word>, u32) {
    let words: Vec<Word> = extraction
        .words
        .iter()
        .map(|w| Word {
            text: w.text.clone(),
            tiles: w.tiles.clone(),
            points: score_word(w, tile_set, policy, wildcards),
        })
        .collect();
    let total: u32 = words.iter().map(|w| w.points).sum();
    (words, total)
}
