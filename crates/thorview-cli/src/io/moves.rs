// crates/thorview-cli/src/io/moves.rs

use anyhow::{bail, Context};
use thorview_core::board::parse_move_list;
use thorview_core::Position;

/// Plays a live move list from the start position. Forced passes are
/// inserted the same way archived games replay.
pub fn live_position(moves: &str) -> anyhow::Result<Position> {
    let squares = parse_move_list(moves).with_context(|| format!("parse moves: {moves:?}"))?;
    let mut pos = Position::initial();
    for (ply, sq) in squares.into_iter().enumerate() {
        pos = match pos.play_with_forced_pass(sq) {
            Some(next) => next,
            None => bail!("move {} ({sq}) is illegal", ply + 1),
        };
    }
    Ok(pos)
}
