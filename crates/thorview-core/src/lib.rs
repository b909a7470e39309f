pub mod error;
pub mod validate;

pub mod board;
pub mod archive;
pub mod replay;
pub mod opening;
pub mod search;

pub use crate::archive::{Archive, GameRecord, MoveSlot};
pub use crate::board::{Bitboard, Position, Side, Square, Symmetry};
pub use crate::opening::OpeningBook;
pub use crate::search::{query, QueryOptions, QueryResult};
