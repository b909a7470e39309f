// crates/thorview-core/src/replay/mod.rs
//
// Tolerant replay of archived move lists. Archives carry illegal moves;
// replay never errors, it just stops at the first slot it cannot play.

use crate::archive::record::MoveSlot;
use crate::board::{Bitboard, Position, Square};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    /// `positions[k]` is the position after `k` moves; `positions[0]` is the start.
    pub positions: Vec<Position>,
    /// Fewer than the requested plies could be played.
    pub stopped_early: bool,
}

impl Replay {
    #[inline]
    pub fn final_position(&self) -> Position {
        self.positions.last().copied().unwrap_or_else(Position::initial)
    }

    /// Moves actually played.
    #[inline]
    pub fn plies(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}

/// One replay step: `None` on a sentinel or an illegal square.
/// Forced passes are inserted after the move.
#[inline]
pub fn step(pos: &Position, slot: MoveSlot) -> Option<Position> {
    let sq = slot.square()?;
    pos.play_with_forced_pass(sq)
}

/// Replays up to `max_ply` moves, keeping every intermediate position.
pub fn replay(moves: &[MoveSlot], max_ply: usize) -> Replay {
    let mut pos = Position::initial();
    let mut positions = Vec::with_capacity(max_ply.min(moves.len()) + 1);
    positions.push(pos);

    for ply in 0..max_ply {
        let slot = moves.get(ply).copied().unwrap_or(MoveSlot::Unused);
        match step(&pos, slot) {
            Some(next) => {
                pos = next;
                positions.push(pos);
            }
            None => return Replay { positions, stopped_early: true },
        }
    }
    Replay { positions, stopped_early: false }
}

pub fn replay_squares(squares: &[Square], max_ply: usize) -> Replay {
    let slots: Vec<MoveSlot> = squares.iter().copied().map(MoveSlot::Square).collect();
    replay(&slots, max_ply)
}

/// Position after exactly `ply` legal moves, without keeping history.
pub fn position_after(moves: &[MoveSlot], ply: usize) -> Option<Position> {
    let mut pos = Position::initial();
    for p in 0..ply {
        pos = step(&pos, moves.get(p).copied().unwrap_or(MoveSlot::Unused))?;
    }
    Some(pos)
}

/// Empty squares after `ply` placements, ignoring legality entirely.
/// `None` when the list holds fewer than `ply` squares.
pub fn empties_after(moves: &[MoveSlot], ply: usize) -> Option<Bitboard> {
    let mut empty = Position::initial().empty();
    for p in 0..ply {
        let sq = moves.get(p)?.square()?;
        empty = empty.without(sq);
    }
    Some(empty)
}
