// crates/thorview-core/src/archive/format.rs

use crate::archive::header::{read_u16, read_u8, Header, HEADER_LEN};
use crate::archive::record::{GameMeta, GameRecord, MoveSlot, MOVES_PER_GAME};
use crate::board::Square;
use crate::error::{Result, ThorError};

/// tournament:u16 black:u16 white:u16 black_discs:u8 perfect_score:u8 moves[60]
pub const GAME_RECORD_LEN: usize = 2 + 2 + 2 + 1 + 1 + MOVES_PER_GAME;
pub const PLAYER_NAME_LEN: usize = 20;
pub const TOURNAMENT_NAME_LEN: usize = 26;

/// Decodes every game record of a games file (`bytes` includes the header).
pub fn decode_game_records(bytes: &[u8], header: &Header) -> Result<Vec<GameRecord>> {
    decode_game_records_with_progress(bytes, header, usize::MAX, &mut |_, _| {})
}

/// Same as [`decode_game_records`], calling `progress(done, total)` every
/// `every` records. The last record always gets exactly one call.
pub fn decode_game_records_with_progress(
    bytes: &[u8],
    header: &Header,
    every: usize,
    progress: &mut dyn FnMut(usize, usize),
) -> Result<Vec<GameRecord>> {
    let payload = payload(bytes)?;
    if payload.len() % GAME_RECORD_LEN != 0 {
        return Err(ThorError::Truncated(format!(
            "{} trailing bytes after last whole game record",
            payload.len() % GAME_RECORD_LEN
        )));
    }

    let total = payload.len() / GAME_RECORD_LEN;
    let every = every.max(1);
    let mut games = Vec::with_capacity(total);

    for (n, chunk) in payload.chunks_exact(GAME_RECORD_LEN).enumerate() {
        games.push(decode_game(chunk, n, header.games_year)?);
        if (n + 1) % every == 0 {
            progress(n + 1, total);
        }
    }
    if total % every != 0 || total == 0 {
        progress(total, total);
    }

    let declared = header.primary_count as usize;
    if games.len() != declared {
        return Err(ThorError::CountMismatch { declared, decoded: games.len() });
    }
    Ok(games)
}

fn decode_game(chunk: &[u8], record: usize, year: u16) -> Result<GameRecord> {
    let mut i = 0usize;
    let tournament = read_u16(chunk, &mut i)?;
    let black_player = read_u16(chunk, &mut i)?;
    let white_player = read_u16(chunk, &mut i)?;
    let black_discs = read_u8(chunk, &mut i)?;
    let perfect_score = read_u8(chunk, &mut i)?;

    let bytes = chunk
        .get(i..i + MOVES_PER_GAME)
        .ok_or_else(|| ThorError::Truncated(format!("record {record}: short move list")))?;
    // Zeros after the last move end the game; a zero before it is a hole.
    let last = bytes.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);

    let mut moves = [MoveSlot::Unused; MOVES_PER_GAME];
    for (slot, (dst, &byte)) in moves.iter_mut().zip(bytes).enumerate() {
        *dst = match byte {
            0 if slot < last => MoveSlot::Truncated,
            0 => MoveSlot::Unused,
            _ => {
                let sq = Square::from_thor_byte(byte)
                    .ok_or(ThorError::BadMove { record, slot, byte })?;
                MoveSlot::Square(sq)
            }
        };
    }

    let meta = GameMeta {
        tournament,
        black_player,
        white_player,
        black_discs,
        perfect_score,
        year,
    };
    Ok(GameRecord::new(meta, &moves))
}

/// Decodes fixed-width, NUL-padded Latin-1 name records.
pub fn decode_name_records(bytes: &[u8], header: &Header, width: usize) -> Result<Vec<String>> {
    if width == 0 {
        return Err(ThorError::Validation("name record width must be non-zero".into()));
    }
    let payload = payload(bytes)?;
    if payload.len() % width != 0 {
        return Err(ThorError::Truncated(format!(
            "{} trailing bytes after last whole name record",
            payload.len() % width
        )));
    }

    let names: Vec<String> = payload.chunks_exact(width).map(decode_name).collect();

    let declared = header.secondary_count as usize;
    if names.len() != declared {
        return Err(ThorError::CountMismatch { declared, decoded: names.len() });
    }
    Ok(names)
}

fn decode_name(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    // Latin-1 maps byte-for-byte onto the first 256 code points.
    let s: String = field[..end].iter().map(|&b| b as char).collect();
    s.trim_end().to_string()
}

fn payload(bytes: &[u8]) -> Result<&[u8]> {
    if bytes.len() < HEADER_LEN {
        return Err(ThorError::Truncated("file shorter than header".into()));
    }
    Ok(&bytes[HEADER_LEN..])
}

/// Writes a games file. Counts in `header` are replaced with the actual ones.
pub fn encode_games_file(header: &Header, games: &[GameRecord]) -> Vec<u8> {
    let mut h = *header;
    h.primary_count = games.len() as u32;
    h.secondary_count = 0;

    let mut b = Vec::with_capacity(HEADER_LEN + games.len() * GAME_RECORD_LEN);
    b.extend_from_slice(&h.encode());
    for g in games {
        let m = g.meta();
        b.extend_from_slice(&m.tournament.to_le_bytes());
        b.extend_from_slice(&m.black_player.to_le_bytes());
        b.extend_from_slice(&m.white_player.to_le_bytes());
        b.push(m.black_discs);
        b.push(m.perfect_score);
        b.extend(g.moves().iter().map(|s| s.to_thor_byte()));
    }
    b
}

/// Writes a players/tournaments file. Names longer than `width - 1`
/// bytes are cut; characters outside Latin-1 become `?`.
pub fn encode_names_file(header: &Header, names: &[String], width: usize) -> Vec<u8> {
    let mut h = *header;
    h.primary_count = 0;
    h.secondary_count = names.len().min(u16::MAX as usize) as u16;

    let mut b = Vec::with_capacity(HEADER_LEN + names.len() * width);
    b.extend_from_slice(&h.encode());
    for name in names.iter().take(h.secondary_count as usize) {
        let mut field = vec![0u8; width];
        for (dst, c) in field.iter_mut().take(width.saturating_sub(1)).zip(name.chars()) {
            *dst = u8::try_from(c as u32).unwrap_or(b'?');
        }
        b.extend_from_slice(&field);
    }
    b
}
