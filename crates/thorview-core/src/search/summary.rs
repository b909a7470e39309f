// crates/thorview-core/src/search/summary.rs

use std::collections::BTreeMap;
use std::fmt;

use crate::archive::{Archive, MoveSlot, Outcome};
use crate::board::{Position, Square};
use crate::search::matcher::MatchSet;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Play(Square),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(sq) => write!(f, "{sq}"),
            Move::Pass => write!(f, "PS"),
        }
    }
}

/// Statistics for one candidate move, from the query mover's side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveSummary {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// `(wins - losses + played) / (2 * played)`: 1.0 all wins, 0.5 all draws.
    pub score: f64,
    /// `played / total matches`.
    pub frequency: f64,
}

impl MoveSummary {
    fn record(&mut self, outcome: Outcome) {
        self.played += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    fn finish(&mut self, total: usize) {
        if self.played == 0 {
            return;
        }
        let played = self.played as f64;
        self.score = (self.wins as f64 - self.losses as f64 + played) / (2.0 * played);
        self.frequency = if total == 0 { 0.0 } else { played / total as f64 };
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Matches summarised, including games that ended at the query position.
    pub total: usize,
    pub moves: BTreeMap<Square, MoveSummary>,
    pub pass: MoveSummary,
}

impl Summary {
    pub fn get(&self, m: Move) -> Option<&MoveSummary> {
        match m {
            Move::Play(sq) => self.moves.get(&sq),
            Move::Pass => (self.pass.played > 0).then_some(&self.pass),
        }
    }

    /// Most played first, ties by square; the pass bucket last if used.
    pub fn ranked(&self) -> Vec<(Move, MoveSummary)> {
        let mut rows: Vec<(Move, MoveSummary)> =
            self.moves.iter().map(|(sq, s)| (Move::Play(*sq), *s)).collect();
        rows.sort_by(|a, b| b.1.played.cmp(&a.1.played).then_with(|| a.0.cmp(&b.0)));
        if self.pass.played > 0 {
            rows.push((Move::Pass, self.pass));
        }
        rows
    }
}

/// Aggregates the next move of every match, mapped back into the query's
/// orientation.
pub fn summarize(archive: &Archive, matches: &MatchSet, query: &Position) -> Summary {
    let ply = matches.ply;
    let mover = query.to_move();
    let stuck = !query.has_legal_move();

    let mut summary = Summary { total: matches.len(), ..Summary::default() };

    for m in matches.iter() {
        let Some(g) = archive.game(m.game) else {
            continue;
        };
        // Games ending here, or continuing with an illegal move, add nothing.
        let MoveSlot::Square(mirrored) = g.move_at(ply) else {
            continue;
        };
        if ply >= g.playable_len() {
            continue;
        }

        let outcome = g.outcome_for(mover);
        if stuck {
            summary.pass.record(outcome);
        } else {
            let sq = m.symmetry.inverse().apply_square(mirrored);
            summary.moves.entry(sq).or_default().record(outcome);
        }
    }

    let total = summary.total;
    for s in summary.moves.values_mut() {
        s.finish(total);
    }
    summary.pass.finish(total);
    summary
}
