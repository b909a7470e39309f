// crates/thorview-core/src/board/square.rs

use std::fmt;

use crate::error::{Result, ThorError};

/// A board square, `row * 8 + col`. Column 0 is `A`, row 0 is `1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub fn new(index: u8) -> Option<Self> {
        (index < 64).then_some(Square(index))
    }

    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        (row < 8 && col < 8).then_some(Square(row * 8 + col))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// Archive move byte: `(row+1)*10 + (col+1)`. `0` and out-of-board
    /// codes yield `None`.
    pub fn from_thor_byte(b: u8) -> Option<Self> {
        let (r, c) = (b / 10, b % 10);
        if !(1..=8).contains(&r) || !(1..=8).contains(&c) {
            return None;
        }
        Square::from_row_col(r - 1, c - 1)
    }

    #[inline]
    pub fn to_thor_byte(self) -> u8 {
        (self.row() + 1) * 10 + (self.col() + 1)
    }

    /// Parses `f5` / `F5`.
    pub fn parse(s: &str) -> Result<Self> {
        let b = s.trim().as_bytes();
        if b.len() != 2 {
            return Err(ThorError::Notation(format!("bad square {s:?}")));
        }
        let col = b[0].to_ascii_lowercase().wrapping_sub(b'a');
        let row = b[1].wrapping_sub(b'1');
        Square::from_row_col(row, col).ok_or_else(|| ThorError::Notation(format!("bad square {s:?}")))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col()) as char, self.row() + 1)
    }
}

/// Parses a move list such as `"f5d6c3"` or `"F5 D6, C3"`.
pub fn parse_move_list(text: &str) -> Result<Vec<Square>> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '-')
        .collect();
    if compact.len() % 2 != 0 || !compact.is_ascii() {
        return Err(ThorError::Notation(format!("bad move list {text:?}")));
    }
    compact
        .as_bytes()
        .chunks(2)
        .map(|pair| Square::parse(std::str::from_utf8(pair).unwrap_or("")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thor_byte_codes() {
        let f5 = Square::parse("f5").unwrap();
        assert_eq!(f5.row(), 4);
        assert_eq!(f5.col(), 5);
        assert_eq!(f5.to_thor_byte(), 56);
        assert_eq!(Square::from_thor_byte(56), Some(f5));
        assert_eq!(Square::from_thor_byte(11), Square::new(0));
        assert_eq!(Square::from_thor_byte(88), Square::new(63));
        for bad in [0u8, 9, 10, 19, 20, 89, 90, 99, 255] {
            assert_eq!(Square::from_thor_byte(bad), None, "byte {bad}");
        }
    }

    #[test]
    fn move_list_forms() {
        let a = parse_move_list("f5d6c3").unwrap();
        let b = parse_move_list("F5 D6, C3").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.iter().map(|s| s.to_string()).collect::<Vec<_>>(), ["F5", "D6", "C3"]);
        assert!(parse_move_list("f5d").is_err());
        assert!(parse_move_list("z9").is_err());
    }
}
