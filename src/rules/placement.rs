//! Placement validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. no new tiles -> `no-change`
//! 2. a new tile without a usable position or letter -> `malformed-tiles`
//! 3. first move misses the center -> `must-use-center`
//! 4. later move touches nothing already on the board -> `no-adjacent`
//! 5. letters the rack cannot pay for -> `illegal-move`
//!
//! Only one placed tile has to touch the existing board for rule 4; the other
//! tiles of the move may float free.
//!
//! Validation is pure. It returns the rack as it would look after paying for
//! the move and leaves committing that rack to the caller.

use rustc_hash::FxHashSet;

use crate::board::{diff, Board, PlacedTile, ProposedTile};
use crate::core::{GameError, Letter, Position, Rack, RackTile};
use crate::tiles::TileSet;

/// A move that passed every placement check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Newly placed tiles, wildcard substitutions marked `blank`.
    pub tiles: Vec<PlacedTile>,
    /// The acting player's rack after paying for `tiles`.
    pub rack_after: Rack,
}

/// Geometry the placement rules need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardRules {
    pub board_size: u32,
    pub center: Position,
}

/// Run all placement checks for one proposed board.
pub fn validate_placement(
    previous: &Board,
    proposed: &[ProposedTile],
    rack: &Rack,
    tile_set: &TileSet,
    rules: BoardRules,
) -> Result<Placement, GameError> {
    let new_tiles = diff(previous, proposed);
    if new_tiles.is_empty() {
        return Err(GameError::NoChange);
    }

    let mut tiles = parse_placements(&new_tiles, rules.board_size)?;
    check_anchor(previous, &tiles, rules.center)?;
    let rack_after = pay_from_rack(rack, &mut tiles, tile_set)?;

    Ok(Placement { tiles, rack_after })
}

/// Turn diff tiles into placements, rejecting anything malformed.
///
/// Malformed means: missing position, position off the board, missing,
/// empty or multi-character letter, or two new tiles on one cell.
pub fn parse_placements(
    new_tiles: &[&ProposedTile],
    board_size: u32,
) -> Result<Vec<PlacedTile>, GameError> {
    let mut seen = FxHashSet::default();
    let mut placed = Vec::with_capacity(new_tiles.len());

    for tile in new_tiles {
        let position = tile
            .position
            .ok_or_else(|| GameError::MalformedTiles("tile without a position".into()))?;
        if !position.within(board_size) {
            return Err(GameError::MalformedTiles(format!("{position} is off the board")));
        }
        let letter = tile
            .letter
            .as_deref()
            .and_then(Letter::parse)
            .ok_or_else(|| GameError::MalformedTiles(format!("tile at {position} has no letter")))?;
        if !seen.insert(position) {
            return Err(GameError::MalformedTiles(format!("two tiles placed on {position}")));
        }
        placed.push(PlacedTile::new(position, letter));
    }

    Ok(placed)
}

/// Center rule on an empty board, adjacency rule otherwise.
pub fn check_anchor(previous: &Board, placed: &[PlacedTile], center: Position) -> Result<(), GameError> {
    if previous.is_empty() {
        if placed.iter().any(|t| t.position == center) {
            Ok(())
        } else {
            Err(GameError::MustUseCenter)
        }
    } else if placed.iter().any(|t| previous.touches(t.position)) {
        Ok(())
    } else {
        Err(GameError::NoAdjacent)
    }
}

/// Pay for `placed` out of a copy of `rack`.
///
/// Exact letters are matched first; wildcards cover whatever is left, one
/// wildcard per letter, and only for letters in the tile set. Tiles paid by a
/// wildcard are marked `blank`.
pub fn pay_from_rack(rack: &Rack, placed: &mut [PlacedTile], tile_set: &TileSet) -> Result<Rack, GameError> {
    let mut remaining = rack.clone();
    let mut unpaid = Vec::new();

    for (i, tile) in placed.iter().enumerate() {
        if !remaining.remove(RackTile::Letter(tile.letter)) {
            unpaid.push(i);
        }
    }

    let wildcards = remaining.wildcards();
    if unpaid.len() > wildcards {
        return Err(GameError::IllegalMove(format!(
            "{} tiles are not on the rack and only {wildcards} wildcards remain",
            unpaid.len()
        )));
    }

    for i in unpaid {
        let letter = placed[i].letter;
        if !tile_set.contains_letter(letter) {
            return Err(GameError::IllegalMove(format!("`{letter}` is not in the tile set")));
        }
        remaining.remove(RackTile::Wildcard);
        placed[i].blank = true;
    }

    Ok(remaining)
}
