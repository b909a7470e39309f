// crates/thorview-core/src/archive/load.rs

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::archive::format::{
    decode_game_records_with_progress, decode_name_records, PLAYER_NAME_LEN, TOURNAMENT_NAME_LEN,
};
use crate::archive::header::{decode_header, Header};
use crate::archive::record::GameRecord;
use crate::archive::{Archive, ArchiveKind};
use crate::error::{Result, ThorError};
use crate::opening::OpeningBook;
use crate::validate::validate_header;

#[derive(Clone, Copy, Debug)]
pub struct LoadOptions {
    /// Games decoded between two progress callbacks.
    pub progress_every: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions { progress_every: 4096 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    /// Position of the file in the requested path list.
    pub file_index: usize,
    pub done: usize,
    pub total: usize,
}

#[derive(Debug)]
pub enum FileOutcome {
    Loaded { records: usize, crc32: u32 },
    /// `rejected` is the record count the header declared (0 if unreadable).
    Failed { error: ThorError, rejected: usize },
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub kind: Option<ArchiveKind>,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome, FileOutcome::Loaded { .. })
    }
}

#[derive(Debug)]
pub struct LoadReport {
    pub archive: Archive,
    pub files: Vec<FileReport>,
}

impl LoadReport {
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_loaded())
    }

    pub fn rejected_records(&self) -> usize {
        self.files
            .iter()
            .map(|f| match f.outcome {
                FileOutcome::Failed { rejected, .. } => rejected,
                FileOutcome::Loaded { .. } => 0,
            })
            .sum()
    }
}

enum Decoded {
    Games(Vec<GameRecord>),
    Names(Vec<String>),
}

/// Loads every path independently into one new [`Archive`]. A bad file is
/// reported and skipped; the others still load. Games and names from
/// several files are appended in path order.
pub fn load_archive<P: AsRef<Path>>(
    paths: &[P],
    opts: &LoadOptions,
    progress: &mut dyn FnMut(LoadProgress),
) -> LoadReport {
    let mut games = Vec::new();
    let mut players = Vec::new();
    let mut tournaments = Vec::new();
    let mut files = Vec::with_capacity(paths.len());

    for (file_index, p) in paths.iter().enumerate() {
        let path = p.as_ref();
        let kind = ArchiveKind::from_path(path);

        let outcome = match kind {
            None => FileOutcome::Failed {
                error: ThorError::UnknownKind(path.display().to_string()),
                rejected: 0,
            },
            Some(kind) => {
                let mut report = |done: usize, total: usize| progress(LoadProgress { file_index, done, total });
                match load_file(path, kind, opts, &mut report) {
                    Ok((decoded, crc32)) => {
                        let records = match decoded {
                            Decoded::Games(g) => {
                                let n = g.len();
                                games.extend(g);
                                n
                            }
                            Decoded::Names(n) => {
                                let count = n.len();
                                match kind {
                                    ArchiveKind::Players => players.extend(n),
                                    _ => tournaments.extend(n),
                                }
                                count
                            }
                        };
                        FileOutcome::Loaded { records, crc32 }
                    }
                    Err((error, rejected)) => FileOutcome::Failed { error, rejected },
                }
            }
        };

        match &outcome {
            FileOutcome::Loaded { records, crc32 } => {
                info!("loaded {}: {records} records (crc32 {crc32:08x})", path.display())
            }
            FileOutcome::Failed { error, rejected } => {
                warn!("rejected {}: {error} ({rejected} records)", path.display())
            }
        }
        files.push(FileReport { path: path.to_path_buf(), kind, outcome });
    }

    let archive = Archive::from_parts(games, players, tournaments, OpeningBook::standard());
    LoadReport { archive, files }
}

fn load_file(
    path: &Path,
    kind: ArchiveKind,
    opts: &LoadOptions,
    progress: &mut dyn FnMut(usize, usize),
) -> std::result::Result<(Decoded, u32), (ThorError, usize)> {
    let bytes = std::fs::read(path).map_err(|e| (ThorError::Io(e), 0))?;
    let header = decode_header(&bytes).map_err(|e| (e, 0))?;
    let declared = declared_count(&header, kind);

    let decoded = decode_kind(&bytes, &header, kind, opts, progress).map_err(|e| (e, declared))?;
    Ok((decoded, crc32(&bytes)))
}

fn decode_kind(
    bytes: &[u8],
    header: &Header,
    kind: ArchiveKind,
    opts: &LoadOptions,
    progress: &mut dyn FnMut(usize, usize),
) -> Result<Decoded> {
    validate_header(header, kind)?;
    Ok(match kind {
        ArchiveKind::Games => Decoded::Games(decode_game_records_with_progress(
            bytes,
            header,
            opts.progress_every,
            progress,
        )?),
        ArchiveKind::Players => Decoded::Names(decode_name_records(bytes, header, PLAYER_NAME_LEN)?),
        ArchiveKind::Tournaments => {
            Decoded::Names(decode_name_records(bytes, header, TOURNAMENT_NAME_LEN)?)
        }
    })
}

fn declared_count(h: &Header, kind: ArchiveKind) -> usize {
    match kind {
        ArchiveKind::Games => h.primary_count as usize,
        ArchiveKind::Players | ArchiveKind::Tournaments => h.secondary_count as usize,
    }
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}
