// crates/thorview-core/src/archive/record.rs

use crate::board::{Side, Square};
use crate::opening::OpeningCode;

pub const MOVES_PER_GAME: usize = 60;

/// One slot of an archived move list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveSlot {
    Square(Square),
    /// No move: the game ended before this slot.
    Unused,
    /// A missing move with recorded moves after it; replay stops here.
    Truncated,
}

impl MoveSlot {
    #[inline]
    pub fn square(self) -> Option<Square> {
        match self {
            MoveSlot::Square(sq) => Some(sq),
            MoveSlot::Unused | MoveSlot::Truncated => None,
        }
    }

    #[inline]
    pub fn to_thor_byte(self) -> u8 {
        match self {
            MoveSlot::Square(sq) => sq.to_thor_byte(),
            MoveSlot::Unused | MoveSlot::Truncated => 0,
        }
    }
}

/// Final outcome from one side's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    tournament: u16,
    black_player: u16,
    white_player: u16,
    black_discs: u8,
    perfect_score: u8,
    year: u16,
    moves: [MoveSlot; MOVES_PER_GAME],
    opening: OpeningCode,
    playable: u8,
}

/// Everything but the moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameMeta {
    pub tournament: u16,
    pub black_player: u16,
    pub white_player: u16,
    pub black_discs: u8,
    pub perfect_score: u8,
    pub year: u16,
}

impl GameRecord {
    /// Slots beyond `moves.len()` (or beyond 60) become `Unused`/dropped.
    /// Opening code and playable length start unset; archive loading fills
    /// them in through [`GameRecord::classified`].
    pub fn new(meta: GameMeta, moves: &[MoveSlot]) -> Self {
        let mut slots = [MoveSlot::Unused; MOVES_PER_GAME];
        for (dst, src) in slots.iter_mut().zip(moves) {
            *dst = *src;
        }
        let playable = slots
            .iter()
            .take_while(|m| m.square().is_some())
            .count() as u8;
        GameRecord {
            tournament: meta.tournament,
            black_player: meta.black_player,
            white_player: meta.white_player,
            black_discs: meta.black_discs,
            perfect_score: meta.perfect_score,
            year: meta.year,
            moves: slots,
            opening: 0,
            playable,
        }
    }

    /// Convenience for in-memory games: every square is a played move.
    pub fn from_squares(meta: GameMeta, squares: &[Square]) -> Self {
        let slots: Vec<MoveSlot> = squares.iter().copied().map(MoveSlot::Square).collect();
        Self::new(meta, &slots)
    }

    /// Stamps the load-time classification onto the record.
    pub fn classified(mut self, opening: OpeningCode, playable: usize) -> Self {
        self.opening = opening;
        self.playable = playable.min(MOVES_PER_GAME) as u8;
        self
    }

    pub fn meta(&self) -> GameMeta {
        GameMeta {
            tournament: self.tournament,
            black_player: self.black_player,
            white_player: self.white_player,
            black_discs: self.black_discs,
            perfect_score: self.perfect_score,
            year: self.year,
        }
    }

    #[inline]
    pub fn moves(&self) -> &[MoveSlot; MOVES_PER_GAME] {
        &self.moves
    }

    /// Slot `ply`, `Unused` past the end.
    #[inline]
    pub fn move_at(&self, ply: usize) -> MoveSlot {
        self.moves.get(ply).copied().unwrap_or(MoveSlot::Unused)
    }

    /// Number of leading slots holding a square.
    pub fn recorded_len(&self) -> usize {
        self.moves.iter().take_while(|m| m.square().is_some()).count()
    }

    /// Moves that replay legally from the start.
    #[inline]
    pub fn playable_len(&self) -> usize {
        self.playable as usize
    }

    #[inline]
    pub fn tournament(&self) -> u16 {
        self.tournament
    }

    #[inline]
    pub fn black_player(&self) -> u16 {
        self.black_player
    }

    #[inline]
    pub fn white_player(&self) -> u16 {
        self.white_player
    }

    #[inline]
    pub fn black_discs(&self) -> u8 {
        self.black_discs
    }

    #[inline]
    pub fn perfect_score(&self) -> u8 {
        self.perfect_score
    }

    #[inline]
    pub fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub fn opening(&self) -> OpeningCode {
        self.opening
    }

    /// Final result for `side`, judged on the black disc count against 32.
    pub fn outcome_for(&self, side: Side) -> Outcome {
        let black = match self.black_discs {
            n if n > 32 => Outcome::Win,
            32 => Outcome::Draw,
            _ => Outcome::Loss,
        };
        match (side, black) {
            (Side::Black, o) => o,
            (Side::White, Outcome::Win) => Outcome::Loss,
            (Side::White, Outcome::Loss) => Outcome::Win,
            (Side::White, Outcome::Draw) => Outcome::Draw,
        }
    }
}
