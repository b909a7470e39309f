// crates/thorview-core/src/archive/header.rs

use crate::error::{Result, ThorError};

pub const HEADER_LEN: usize = 16;

/// Common 16-byte header of games, players and tournaments files.
/// Layout (little-endian):
/// century:u8 year:u8 month:u8 day:u8      (creation date)
/// primary_count:u32                        (games)
/// secondary_count:u16                      (players / tournaments)
/// games_year:u16
/// board_size:u8                            (0 or 8 = 8x8)
/// solitaire:u8
/// depth:u8                                 (perfect-play depth)
/// reserved:u8
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub century: u8,
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub primary_count: u32,
    pub secondary_count: u16,
    pub games_year: u16,
    pub board_size: u8,
    pub solitaire: u8,
    pub depth: u8,
    pub reserved: u8,
}

impl Header {
    /// Full creation year, e.g. 2004.
    pub fn created_year(&self) -> u16 {
        self.century as u16 * 100 + self.year as u16
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut b = [0u8; HEADER_LEN];
        b[0] = self.century;
        b[1] = self.year;
        b[2] = self.month;
        b[3] = self.day;
        b[4..8].copy_from_slice(&self.primary_count.to_le_bytes());
        b[8..10].copy_from_slice(&self.secondary_count.to_le_bytes());
        b[10..12].copy_from_slice(&self.games_year.to_le_bytes());
        b[12] = self.board_size;
        b[13] = self.solitaire;
        b[14] = self.depth;
        b[15] = self.reserved;
        b
    }
}

/// Parses the raw fields. Kind-specific rules live in
/// [`crate::validate::validate_header`].
pub fn decode_header(bytes: &[u8]) -> Result<Header> {
    if bytes.len() < HEADER_LEN {
        return Err(ThorError::HeaderInvalid(format!(
            "need {HEADER_LEN} header bytes, got {}",
            bytes.len()
        )));
    }
    let mut i = 4usize;
    let primary_count = read_u32(bytes, &mut i)?;
    let secondary_count = read_u16(bytes, &mut i)?;
    let games_year = read_u16(bytes, &mut i)?;
    Ok(Header {
        century: bytes[0],
        year: bytes[1],
        month: bytes[2],
        day: bytes[3],
        primary_count,
        secondary_count,
        games_year,
        board_size: bytes[12],
        solitaire: bytes[13],
        depth: bytes[14],
        reserved: bytes[15],
    })
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(ThorError::Truncated(format!("need {n} bytes at offset {i}")));
    }
    Ok(())
}

pub(crate) fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    need(bytes, *i, 2)?;
    let v = u16::from_le_bytes([bytes[*i], bytes[*i + 1]]);
    *i += 2;
    Ok(v)
}

pub(crate) fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    need(bytes, *i, 4)?;
    let v = u32::from_le_bytes([bytes[*i], bytes[*i + 1], bytes[*i + 2], bytes[*i + 3]]);
    *i += 4;
    Ok(v)
}

pub(crate) fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    need(bytes, *i, 1)?;
    let v = bytes[*i];
    *i += 1;
    Ok(v)
}
