// crates/thorview-core/src/archive/view.rs

use std::fmt;

use crate::archive::record::{Outcome, MOVES_PER_GAME};
use crate::archive::Archive;
use crate::board::{Position, Side, Square};
use crate::opening::{OpeningBook, OpeningCode};
use crate::replay;

/// A game record rebuilt for display.
#[derive(Clone, Debug)]
pub struct GameView {
    pub index: usize,
    pub black: String,
    pub white: String,
    pub tournament: String,
    pub year: u16,
    pub black_discs: u8,
    pub perfect_score: u8,
    pub result: Outcome,
    pub opening: OpeningCode,
    pub opening_name: String,
    /// Moves that replayed legally.
    pub moves: Vec<Square>,
    /// `positions[k]` is the position after `k` moves.
    pub positions: Vec<Position>,
    /// The record holds more moves than replayed legally.
    pub truncated: bool,
}

impl GameView {
    /// `F5D6C3...`
    pub fn move_text(&self) -> String {
        self.moves.iter().map(|m| m.to_string()).collect()
    }

    pub fn final_position(&self) -> Position {
        self.positions.last().copied().unwrap_or_else(Position::initial)
    }
}

impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self.result {
            Outcome::Win => "black wins",
            Outcome::Draw => "draw",
            Outcome::Loss => "white wins",
        };
        writeln!(f, "#{} {} ({})", self.index, self.tournament, self.year)?;
        writeln!(f, "{} - {}  {} ({} black discs)", self.black, self.white, result, self.black_discs)?;
        writeln!(f, "opening: {}", self.opening_name)?;
        write!(f, "{}", self.move_text())?;
        if self.truncated {
            write!(f, " (truncated)")?;
        }
        Ok(())
    }
}

/// Replays game `index` and resolves its names. `None` past the end.
pub fn game_at(archive: &Archive, index: usize) -> Option<GameView> {
    let g = archive.game(index)?;
    let r = replay::replay(g.moves(), MOVES_PER_GAME);

    let moves: Vec<Square> = g
        .moves()
        .iter()
        .take(r.plies())
        .filter_map(|m| m.square())
        .collect();

    Some(GameView {
        index,
        black: archive.player_name(g.black_player()).to_string(),
        white: archive.player_name(g.white_player()).to_string(),
        tournament: archive.tournament_name(g.tournament()).to_string(),
        year: g.year(),
        black_discs: g.black_discs(),
        perfect_score: g.perfect_score(),
        result: g.outcome_for(Side::Black),
        opening: g.opening(),
        opening_name: OpeningBook::standard().name(g.opening()).to_string(),
        truncated: g.recorded_len() > r.plies(),
        moves,
        positions: r.positions,
    })
}
