//! Game rules: placement validation, word extraction and scoring.
//!
//! These are pure functions over board snapshots. The turn pipeline in
//! `session` calls them in order and commits nothing until all pass:
//! - `placement`: what may be placed
//! - `extraction`: which words a placement forms
//! - `scoring`: what those words are worth

pub mod extraction;
pub mod placement;
pub mod scoring;

pub use extraction::{extract_words, ExtractedWord, Extraction, WordTile};
pub use placement::{check_anchor, parse_placements, pay_from_rack, validate_placement, BoardRules, Placement};
pub use scoring::{score_turn, score_word, Word};
