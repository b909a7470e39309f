use std::path::Path;

use clap::Args;
use thorview_core::archive::header::decode_header;
use thorview_core::archive::{ArchiveKind, LoadOptions};
use thorview_core::validate::validate_header;

use crate::io::archive::load_with_report;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Archive file (.wtb games, .jou players, .trn tournaments); repeatable
    #[arg(long = "file", required = true)]
    pub files: Vec<String>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    for path in &args.files {
        let kind = ArchiveKind::from_path(Path::new(path));

        eprintln!("--- inspect ---");
        eprintln!("file            = {}", path);
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("read            = FAILED ({e})");
                continue;
            }
        };
        eprintln!("bytes           = {}", bytes.len());
        eprintln!("kind            = {}", kind.map_or("unknown", ArchiveKind::label));

        let h = match decode_header(&bytes) {
            Ok(h) => h,
            Err(e) => {
                eprintln!("header          = INVALID ({e})");
                continue;
            }
        };
        eprintln!(
            "created         = {:04}-{:02}-{:02}",
            h.created_year(),
            h.month,
            h.day
        );
        eprintln!("games_declared  = {}", h.primary_count);
        eprintln!("names_declared  = {}", h.secondary_count);
        eprintln!("games_year      = {}", h.games_year);
        eprintln!("board_size      = {}", h.board_size);
        eprintln!("solitaire       = {}", h.solitaire);
        eprintln!("depth           = {}", h.depth);

        if let Some(kind) = kind {
            match validate_header(&h, kind) {
                Ok(()) => eprintln!("header_ok       = true"),
                Err(e) => eprintln!("header_ok       = false ({e})"),
            }
        }
    }

    eprintln!("--- decode ---");
    load_with_report(&args.files, &LoadOptions::default());
    Ok(())
}
