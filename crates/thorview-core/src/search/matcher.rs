// crates/thorview-core/src/search/matcher.rs

use log::debug;

use crate::archive::{Archive, GameRecord};
use crate::board::{all_symmetries, Bitboard, Position, Symmetry};
use crate::replay;
use crate::search::QueryOptions;

/// One archived game passing through the query position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Index into [`Archive::games`].
    pub game: usize,
    /// First symmetry `s` (in [`Symmetry::ALL`] order) with
    /// `game position == s(query)`.
    pub symmetry: Symmetry,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    /// Query ply: moves played to reach the query position.
    pub ply: usize,
    entries: Vec<Match>,
}

impl MatchSet {
    pub fn new(ply: usize, entries: Vec<Match>) -> Self {
        MatchSet { ply, entries }
    }

    pub fn empty(ply: usize) -> Self {
        MatchSet { ply, entries: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Match] {
        &self.entries
    }

    pub fn game_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|m| m.game)
    }

    pub fn contains_game(&self, game: usize) -> bool {
        self.entries.iter().any(|m| m.game == game)
    }
}

/// All games whose history reaches `query` up to symmetry.
pub fn find_matches(archive: &Archive, query: &Position, opts: &QueryOptions) -> MatchSet {
    let ply = query.ply();
    if query.empty_count() < opts.min_empties {
        return MatchSet::empty(ply);
    }

    let images = all_symmetries(query);
    let empties = images.map(|p| p.empty());
    // Replay inserts forced passes, so a stuck query mover is compared
    // with its opponent to move as well.
    let passed = (!query.has_legal_move() && !query.is_game_over())
        .then(|| all_symmetries(&query.pass()));

    let mut survivors = 0usize;
    let mut entries = Vec::new();
    for (game, g) in archive.games().iter().enumerate() {
        if !passes_prefilter(g, ply, &empties) {
            continue;
        }
        survivors += 1;
        if let Some(symmetry) = exact_match(g, ply, &images, passed.as_ref()) {
            entries.push(Match { game, symmetry });
        }
    }

    debug!(
        "ply {ply}: {} games, {survivors} past the empty-mask filter, {} matched",
        archive.len(),
        entries.len()
    );
    MatchSet::new(ply, entries)
}

/// Cheap over-approximation: the first `ply` squares of `g`, legal or not,
/// must leave the same empty set as some image of the query.
pub fn passes_prefilter(g: &GameRecord, ply: usize, query_empties: &[Bitboard; 8]) -> bool {
    match replay::empties_after(g.moves(), ply) {
        Some(e) => query_empties.contains(&e),
        None => false,
    }
}

/// Full legal replay of `ply` moves compared against every query image.
/// A position where the mover is stuck is retried once after passing;
/// `passed` holds the images of the query after its own forced pass.
pub fn exact_match(
    g: &GameRecord,
    ply: usize,
    images: &[Position; 8],
    passed: Option<&[Position; 8]>,
) -> Option<Symmetry> {
    let pos = replay::position_after(g.moves(), ply)?;
    if let Some(s) = first_equal(&pos, images) {
        return Some(s);
    }
    if !pos.has_legal_move() {
        if let Some(s) = first_equal(&pos.pass(), images) {
            return Some(s);
        }
    }
    passed.and_then(|p| first_equal(&pos, p))
}

#[inline]
fn first_equal(pos: &Position, images: &[Position; 8]) -> Option<Symmetry> {
    images
        .iter()
        .position(|img| img == pos)
        .and_then(|i| Symmetry::new(i as u8))
}
