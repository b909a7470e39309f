// crates/thorview-core/src/search/filter.rs

use crate::archive::{Archive, GameRecord, Outcome};
use crate::board::Side;
use crate::error::{Result, ThorError};
use crate::opening::OpeningBook;
use crate::search::matcher::{Match, MatchSet};

/// Final result from Black's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultFilter {
    BlackWin,
    WhiteWin,
    Draw,
}

/// Restricts which matches are summarised. Every set field must accept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameFilter {
    /// Case-insensitive substring of either player's name.
    pub player: Option<String>,
    /// Case-insensitive substring of the opening name.
    pub opening: Option<String>,
    pub year: Option<u16>,
    pub result: Option<ResultFilter>,
}

impl GameFilter {
    /// Parses `key:value` tokens: `player:`, `opening:`, `year:`, `result:`
    /// (`black`, `white`, `draw`). Values containing spaces go in double
    /// quotes: `player:"van den Berg"`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut f = GameFilter::default();
        for token in tokenize(text)? {
            let (key, value) = token
                .split_once(':')
                .ok_or_else(|| ThorError::Validation(format!("filter token {token:?} has no ':'")))?;
            if value.is_empty() {
                return Err(ThorError::Validation(format!("filter key {key:?} has no value")));
            }
            match key.to_ascii_lowercase().as_str() {
                "player" => f.player = Some(value.to_lowercase()),
                "opening" => f.opening = Some(value.to_lowercase()),
                "year" => {
                    let y = value
                        .parse::<u16>()
                        .map_err(|_| ThorError::Validation(format!("bad year {value:?}")))?;
                    f.year = Some(y);
                }
                "result" => {
                    f.result = Some(match value.to_ascii_lowercase().as_str() {
                        "black" => ResultFilter::BlackWin,
                        "white" => ResultFilter::WhiteWin,
                        "draw" => ResultFilter::Draw,
                        other => {
                            return Err(ThorError::Validation(format!("bad result {other:?}")))
                        }
                    });
                }
                other => return Err(ThorError::Validation(format!("unknown filter key {other:?}"))),
            }
        }
        Ok(f)
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_none() && self.opening.is_none() && self.year.is_none() && self.result.is_none()
    }

    pub fn accepts(&self, archive: &Archive, g: &GameRecord) -> bool {
        if let Some(p) = &self.player {
            let black = archive.player_name(g.black_player()).to_lowercase();
            let white = archive.player_name(g.white_player()).to_lowercase();
            if !black.contains(p.as_str()) && !white.contains(p.as_str()) {
                return false;
            }
        }
        if let Some(o) = &self.opening {
            let name = OpeningBook::standard().name(g.opening()).to_lowercase();
            if !name.contains(o.as_str()) {
                return false;
            }
        }
        if let Some(y) = self.year {
            if g.year() != y {
                return false;
            }
        }
        if let Some(r) = self.result {
            let ok = matches!(
                (r, g.outcome_for(Side::Black)),
                (ResultFilter::BlackWin, Outcome::Win)
                    | (ResultFilter::WhiteWin, Outcome::Loss)
                    | (ResultFilter::Draw, Outcome::Draw)
            );
            if !ok {
                return false;
            }
        }
        true
    }

    /// The matches whose game this filter accepts, order kept.
    pub fn apply(&self, archive: &Archive, matches: &MatchSet) -> MatchSet {
        let kept: Vec<Match> = matches
            .iter()
            .filter(|m| archive.game(m.game).is_some_and(|g| self.accepts(archive, g)))
            .copied()
            .collect();
        MatchSet::new(matches.ply, kept)
    }
}

fn tokenize(text: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut cur = String::new();
    let mut quoted = false;
    for c in text.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !cur.is_empty() {
                    tokens.push(std::mem::take(&mut cur));
                }
            }
            c => cur.push(c),
        }
    }
    if quoted {
        return Err(ThorError::Validation("unterminated quote in filter".into()));
    }
    if !cur.is_empty() {
        tokens.push(cur);
    }
    Ok(tokens)
}
