// crates/thorview-core/src/archive/mod.rs

pub mod format;
pub mod header;
pub mod load;
pub mod record;
pub mod view;

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::opening::OpeningBook;

pub use load::{load_archive, FileOutcome, FileReport, LoadOptions, LoadProgress, LoadReport};
pub use record::{GameMeta, GameRecord, MoveSlot, Outcome, MOVES_PER_GAME};
pub use view::{game_at, GameView};

/// Shown for player/tournament ids missing from the name tables.
pub const UNKNOWN_NAME: &str = "?";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    Games,
    Players,
    Tournaments,
}

impl ArchiveKind {
    /// `.wtb` games, `.jou` players, `.trn` tournaments (any case).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "wtb" => Some(ArchiveKind::Games),
            "jou" => Some(ArchiveKind::Players),
            "trn" => Some(ArchiveKind::Tournaments),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArchiveKind::Games => "games",
            ArchiveKind::Players => "players",
            ArchiveKind::Tournaments => "tournaments",
        }
    }
}

/// Decoded games plus the player and tournament name tables.
/// Built once, then only read.
#[derive(Clone, Debug, Default)]
pub struct Archive {
    games: Vec<GameRecord>,
    players: Vec<String>,
    tournaments: Vec<String>,
}

impl Archive {
    /// Classifies every game against `book` and freezes the result.
    pub fn from_parts(
        games: Vec<GameRecord>,
        players: Vec<String>,
        tournaments: Vec<String>,
        book: &OpeningBook,
    ) -> Self {
        let games = games
            .into_iter()
            .map(|g| {
                let c = book.classify(g.moves());
                g.classified(c.code, c.playable)
            })
            .collect();
        Archive { games, players, tournaments }
    }

    #[inline]
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    #[inline]
    pub fn game(&self, index: usize) -> Option<&GameRecord> {
        self.games.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn tournaments(&self) -> &[String] {
        &self.tournaments
    }

    pub fn player_name(&self, id: u16) -> &str {
        self.players.get(id as usize).map(String::as_str).unwrap_or(UNKNOWN_NAME)
    }

    pub fn tournament_name(&self, id: u16) -> &str {
        self.tournaments.get(id as usize).map(String::as_str).unwrap_or(UNKNOWN_NAME)
    }
}

/// The archive currently in use. Reloading builds a fresh [`Archive`] and
/// swaps it in; readers keep whatever snapshot they already hold.
#[derive(Debug, Default)]
pub struct SharedArchive {
    current: RwLock<Arc<Archive>>,
}

impl SharedArchive {
    pub fn new(archive: Archive) -> Self {
        SharedArchive { current: RwLock::new(Arc::new(archive)) }
    }

    pub fn snapshot(&self) -> Arc<Archive> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Swaps in `archive` and returns the previous one.
    pub fn replace(&self, archive: Archive) -> Arc<Archive> {
        let next = Arc::new(archive);
        let mut guard = match self.current.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }
}
