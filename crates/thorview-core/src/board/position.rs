// crates/thorview-core/src/board/position.rs

use std::fmt;

use crate::board::bitboard::Bitboard;
use crate::board::square::Square;

const DIRECTIONS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

/// Disc layout plus side to move. `black & white` is always empty; the
/// remaining squares are empty squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    black: Bitboard,
    white: Bitboard,
    to_move: Side,
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl Position {
    /// Standard start: D5/E4 black, D4/E5 white, Black to move.
    pub fn initial() -> Self {
        Position {
            black: Bitboard((1u64 << 35) | (1u64 << 28)),
            white: Bitboard((1u64 << 27) | (1u64 << 36)),
            to_move: Side::Black,
        }
    }

    /// Returns `None` when the two sets overlap.
    pub fn from_bitboards(black: Bitboard, white: Bitboard, to_move: Side) -> Option<Self> {
        (black & white)
            .is_empty()
            .then_some(Position { black, white, to_move })
    }

    #[inline]
    pub fn black(&self) -> Bitboard {
        self.black
    }

    #[inline]
    pub fn white(&self) -> Bitboard {
        self.white
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    pub fn empty(&self) -> Bitboard {
        !(self.black | self.white)
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.empty().count()
    }

    /// Disc placements so far (passes excluded).
    #[inline]
    pub fn ply(&self) -> usize {
        60usize.saturating_sub(self.empty_count() as usize)
    }

    #[inline]
    fn mover_and_opponent(&self) -> (Bitboard, Bitboard) {
        match self.to_move {
            Side::Black => (self.black, self.white),
            Side::White => (self.white, self.black),
        }
    }

    pub fn legal_moves(&self) -> Bitboard {
        let (me, opp) = self.mover_and_opponent();
        let empty = self.empty();
        let mut moves = Bitboard::EMPTY;
        for &dir in &DIRECTIONS {
            let mut run = me.shift(dir) & opp;
            while !run.is_empty() {
                let next = run.shift(dir);
                moves |= next & empty;
                run = next & opp;
            }
        }
        moves
    }

    #[inline]
    pub fn has_legal_move(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    #[inline]
    pub fn is_legal(&self, sq: Square) -> bool {
        self.legal_moves().contains(sq)
    }

    /// Neither side can move.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move() && !self.pass().has_legal_move()
    }

    /// Discs captured by playing `sq`; empty when the move is illegal.
    pub fn flips(&self, sq: Square) -> Bitboard {
        if !self.empty().contains(sq) {
            return Bitboard::EMPTY;
        }
        let (me, opp) = self.mover_and_opponent();
        let origin = Bitboard::from_square(sq);
        let mut flipped = Bitboard::EMPTY;
        for &dir in &DIRECTIONS {
            let mut line = Bitboard::EMPTY;
            let mut cur = origin.shift(dir);
            while !(cur & opp).is_empty() {
                line |= cur;
                cur = cur.shift(dir);
            }
            if !(cur & me).is_empty() {
                flipped |= line;
            }
        }
        flipped
    }

    /// Plays `sq` for the side to move. Returns `None` if the move is illegal.
    /// Does not insert forced passes; see [`Position::play_with_forced_pass`].
    pub fn play(&self, sq: Square) -> Option<Position> {
        let flipped = self.flips(sq);
        if flipped.is_empty() {
            return None;
        }
        let placed = flipped | Bitboard::from_square(sq);
        let next = match self.to_move {
            Side::Black => Position {
                black: self.black | placed,
                white: self.white & !flipped,
                to_move: Side::White,
            },
            Side::White => Position {
                black: self.black & !flipped,
                white: self.white | placed,
                to_move: Side::Black,
            },
        };
        Some(next)
    }

    /// Plays `sq`, then passes for the new side if it has no move while the
    /// game is still going.
    pub fn play_with_forced_pass(&self, sq: Square) -> Option<Position> {
        let next = self.play(sq)?;
        if !next.has_legal_move() && next.pass().has_legal_move() {
            return Some(next.pass());
        }
        Some(next)
    }

    /// Same discs, other side to move.
    #[inline]
    pub fn pass(&self) -> Position {
        Position {
            to_move: self.to_move.opponent(),
            ..*self
        }
    }

    /// Disc count of `side`.
    #[inline]
    pub fn discs(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black.count(),
            Side::White => self.white.count(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for row in 0..8u8 {
            write!(f, "{}", row + 1)?;
            for col in 0..8u8 {
                let sq = Square::from_row_col(row, col).ok_or(fmt::Error)?;
                let c = if self.black.contains(sq) {
                    'X'
                } else if self.white.contains(sq) {
                    'O'
                } else {
                    '.'
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        let side = match self.to_move {
            Side::Black => "black",
            Side::White => "white",
        };
        write!(f, "{side} to move")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    #[test]
    fn initial_has_four_moves() {
        let p = Position::initial();
        let moves: Vec<String> = p.legal_moves().squares().map(|s| s.to_string()).collect();
        assert_eq!(moves, ["D3", "C4", "F5", "E6"]);
        assert_eq!(p.empty_count(), 60);
        assert_eq!(p.ply(), 0);
    }

    #[test]
    fn play_flips_and_switches_side() {
        let p = Position::initial().play(sq("f5")).unwrap();
        assert_eq!(p.to_move(), Side::White);
        assert_eq!(p.discs(Side::Black), 4);
        assert_eq!(p.discs(Side::White), 1);
        assert!(p.black().contains(sq("e5")));
        assert!(p.play(sq("a1")).is_none());
        assert!(p.play(sq("f5")).is_none());
    }

    #[test]
    fn forced_pass_is_inserted() {
        // After C1 White's only disc is G8, walled in by a full black row.
        let mut black = Bitboard::from_square(sq("a1"));
        for s in ["a8", "b8", "c8", "d8", "e8", "f8"] {
            black = black.with(sq(s));
        }
        let white = Bitboard::from_square(sq("b1")) | Bitboard::from_square(sq("g8"));
        let p = Position::from_bitboards(black, white, Side::Black).unwrap();
        let plain = p.play(sq("c1")).unwrap();
        assert_eq!(plain.to_move(), Side::White);
        assert!(!plain.has_legal_move());
        let next = p.play_with_forced_pass(sq("c1")).unwrap();
        assert_eq!(next.to_move(), Side::Black);
        assert!(next.is_legal(sq("h8")));
    }

    #[test]
    fn no_pass_when_game_over() {
        let black = Bitboard::from_square(sq("b1"));
        let white = Bitboard::from_square(sq("a1")) | Bitboard::from_square(sq("h8"));
        let p = Position::from_bitboards(black, white, Side::White).unwrap();
        let next = p.play_with_forced_pass(sq("c1")).unwrap();
        assert_eq!(next.discs(Side::Black), 0);
        assert_eq!(next.to_move(), Side::Black);
        assert!(next.is_game_over());
    }
}
