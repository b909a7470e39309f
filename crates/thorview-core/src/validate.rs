use crate::archive::header::Header;
use crate::archive::ArchiveKind;
use crate::error::{Result, ThorError};

pub fn validate_header(h: &Header, kind: ArchiveKind) -> Result<()> {
    match kind {
        ArchiveKind::Games => {
            if h.secondary_count != 0 {
                return Err(ThorError::HeaderInvalid(format!(
                    "games file declares {} name records",
                    h.secondary_count
                )));
            }
            if h.board_size != 0 && h.board_size != 8 {
                return Err(ThorError::HeaderInvalid(format!(
                    "board size {} is not 8x8",
                    h.board_size
                )));
            }
        }
        ArchiveKind::Players | ArchiveKind::Tournaments => {
            if h.primary_count != 0 {
                return Err(ThorError::HeaderInvalid(format!(
                    "{} file declares {} game records",
                    kind.label(),
                    h.primary_count
                )));
            }
        }
    }

    Ok(())
}
