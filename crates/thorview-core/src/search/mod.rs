// crates/thorview-core/src/search/mod.rs

pub mod filter;
pub mod matcher;
pub mod summary;

use crate::archive::Archive;
use crate::board::Position;

pub use filter::{GameFilter, ResultFilter};
pub use matcher::{find_matches, Match, MatchSet};
pub use summary::{summarize, Move, MoveSummary, Summary};

#[derive(Clone, Copy, Debug)]
pub struct QueryOptions {
    /// Positions with fewer empty squares return no matches.
    pub min_empties: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions { min_empties: 4 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryResult {
    /// Every matching game.
    pub matches: MatchSet,
    /// The matches the filter kept; equal to `matches` without a filter.
    pub selected: MatchSet,
    pub summary: Summary,
}

/// Match, filter, summarise. Pure: same inputs, same result.
pub fn query(
    archive: &Archive,
    position: &Position,
    opts: &QueryOptions,
    filter: Option<&GameFilter>,
) -> QueryResult {
    let matches = find_matches(archive, position, opts);
    let selected = match filter {
        Some(f) if !f.is_empty() => f.apply(archive, &matches),
        _ => matches.clone(),
    };
    let summary = summarize(archive, &selected, position);
    QueryResult { matches, selected, summary }
}
