// crates/thorview-core/src/board/symmetry.rs

use crate::board::bitboard::Bitboard;
use crate::board::position::Position;
use crate::board::square::Square;

/// One of the 8 board symmetries.
///
/// Bit layout of the index, applied in this order:
/// - bit 2: transpose (row <-> col)
/// - bit 0: flip rows (row r -> 7-r)
/// - bit 1: flip columns (col c -> 7-c)
///
/// Index 0 is the identity. The order of [`Symmetry::ALL`] is the order in
/// which matching tries transforms, so "first matching index" is stable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symmetry(u8);

const TRANSPOSE: u8 = 0b100;
const FLIP_ROWS: u8 = 0b001;
const FLIP_COLS: u8 = 0b010;

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry(0);

    pub const ALL: [Symmetry; 8] = [
        Symmetry(0),
        Symmetry(1),
        Symmetry(2),
        Symmetry(3),
        Symmetry(4),
        Symmetry(5),
        Symmetry(6),
        Symmetry(7),
    ];

    #[inline]
    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(Symmetry(index))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// The transform that undoes `self`.
    ///
    /// Flips commute and are involutions. Behind a transpose, a row flip
    /// turns into a column flip, so the two flip bits trade places.
    #[inline]
    pub fn inverse(self) -> Symmetry {
        let i = self.0;
        if i & TRANSPOSE == 0 {
            return self;
        }
        let rows = (i & FLIP_ROWS) << 1;
        let cols = (i & FLIP_COLS) >> 1;
        Symmetry(TRANSPOSE | rows | cols)
    }

    /// `self` followed by `then`.
    pub fn then(self, then: Symmetry) -> Symmetry {
        // A square with no stabilizer identifies the group element.
        let probe = Square::from_row_col(0, 1).map(Bitboard::from_square).unwrap_or_default();
        let target = then.apply_bitboard(self.apply_bitboard(probe));
        Symmetry::ALL
            .into_iter()
            .find(|s| s.apply_bitboard(probe) == target)
            .unwrap_or(Symmetry::IDENTITY)
    }

    #[inline]
    pub fn apply_bitboard(self, b: Bitboard) -> Bitboard {
        let mut x = b;
        if self.0 & TRANSPOSE != 0 {
            x = x.transpose();
        }
        if self.0 & FLIP_ROWS != 0 {
            x = x.flip_vertical();
        }
        if self.0 & FLIP_COLS != 0 {
            x = x.flip_horizontal();
        }
        x
    }

    #[inline]
    pub fn apply_square(self, sq: Square) -> Square {
        let (mut r, mut c) = (sq.row(), sq.col());
        if self.0 & TRANSPOSE != 0 {
            std::mem::swap(&mut r, &mut c);
        }
        if self.0 & FLIP_ROWS != 0 {
            r = 7 - r;
        }
        if self.0 & FLIP_COLS != 0 {
            c = 7 - c;
        }
        Square::from_row_col(r, c).unwrap_or(sq)
    }

    #[inline]
    pub fn apply_position(self, p: &Position) -> Position {
        let black = self.apply_bitboard(p.black());
        let white = self.apply_bitboard(p.white());
        // Bijections keep the two sets disjoint.
        Position::from_bitboards(black, white, p.to_move()).unwrap_or(*p)
    }
}

/// All 8 images of `p`, indexed by [`Symmetry::index`].
pub fn all_symmetries(p: &Position) -> [Position; 8] {
    Symmetry::ALL.map(|s| s.apply_position(p))
}
