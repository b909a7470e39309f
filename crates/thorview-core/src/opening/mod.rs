// crates/thorview-core/src/opening/mod.rs

pub mod catalog;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::archive::record::MoveSlot;
use crate::board::{all_symmetries, parse_move_list, Position};
use crate::error::{Result, ThorError};
use crate::replay;

/// Index into the opening catalog. 0 = no named opening.
pub type OpeningCode = u16;

pub const UNCLASSIFIED: OpeningCode = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Deepest named position reached.
    pub code: OpeningCode,
    /// Moves replayed before a sentinel or illegal move.
    pub playable: usize,
}

/// Position -> opening code table covering every prefix of every named
/// line, in all 8 orientations.
#[derive(Clone, Debug)]
pub struct OpeningBook {
    names: Vec<String>,
    table: HashMap<Position, OpeningCode>,
}

impl OpeningBook {
    /// Builds from `(name, moves)` pairs; the pair's index is its code.
    /// Later pairs overwrite earlier ones on shared positions.
    pub fn build<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut names = Vec::new();
        let mut table = HashMap::new();

        for (idx, (name, moves)) in entries.into_iter().enumerate() {
            let code = OpeningCode::try_from(idx)
                .map_err(|_| ThorError::Validation("too many openings".into()))?;
            let squares = parse_move_list(moves)?;

            let mut pos = Position::initial();
            for sq in squares {
                pos = pos.play_with_forced_pass(sq).ok_or_else(|| {
                    ThorError::Validation(format!("opening {name:?}: illegal move {sq}"))
                })?;
                for image in all_symmetries(&pos) {
                    table.insert(image, code);
                }
            }
            names.push(name.to_string());
        }

        Ok(OpeningBook { names, table })
    }

    /// The built-in catalog, built on first use.
    pub fn standard() -> &'static OpeningBook {
        static BOOK: OnceLock<OpeningBook> = OnceLock::new();
        BOOK.get_or_init(|| {
            OpeningBook::build(catalog::CATALOG.iter().map(|o| (o.name, o.moves)))
                .expect("built-in opening catalog replays legally")
        })
    }

    /// Replays `moves` (stopping like [`replay::step`]) and keeps the code
    /// of the last table hit.
    pub fn classify(&self, moves: &[MoveSlot]) -> Classification {
        let mut pos = Position::initial();
        let mut code = UNCLASSIFIED;
        let mut playable = 0usize;

        for &slot in moves {
            let Some(next) = replay::step(&pos, slot) else {
                break;
            };
            pos = next;
            playable += 1;
            if let Some(&c) = self.table.get(&pos) {
                code = c;
            }
        }
        Classification { code, playable }
    }

    pub fn name(&self, code: OpeningCode) -> &str {
        self.names.get(code as usize).map(String::as_str).unwrap_or("")
    }

    pub fn code_of(&self, name: &str) -> Option<OpeningCode> {
        self.names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .and_then(|i| OpeningCode::try_from(i).ok())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
