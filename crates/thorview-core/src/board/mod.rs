// crates/thorview-core/src/board/mod.rs

pub mod bitboard;
pub mod position;
pub mod square;
pub mod symmetry;

pub use bitboard::Bitboard;
pub use position::{Position, Side};
pub use square::{parse_move_list, Square};
pub use symmetry::{all_symmetries, Symmetry};
