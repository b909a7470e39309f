// crates/thorview-cli/src/io/archive.rs

use anyhow::bail;
use thorview_core::archive::{load_archive, FileOutcome, LoadOptions, LoadProgress, LoadReport};
use thorview_core::Archive;

/// Loads `files`, printing one report line per file. Fails only when no
/// file loaded at all.
pub fn load(files: &[String]) -> anyhow::Result<Archive> {
    if files.is_empty() {
        bail!("no archive files given (use --file)");
    }
    let report = load_with_report(files, &LoadOptions::default());
    if report.files.iter().all(|f| !f.is_loaded()) {
        bail!("none of the {} archive files loaded", files.len());
    }
    Ok(report.archive)
}

pub fn load_with_report(files: &[String], opts: &LoadOptions) -> LoadReport {
    let report = load_archive(files, opts, &mut |p: LoadProgress| {
        log::debug!("file #{}: {}/{} games", p.file_index, p.done, p.total);
    });

    for f in &report.files {
        match &f.outcome {
            FileOutcome::Loaded { records, crc32 } => {
                eprintln!("loaded   {}  records={} crc32={:08x}", f.path.display(), records, crc32)
            }
            FileOutcome::Failed { error, rejected } => {
                eprintln!("REJECTED {}  rejected={} error={}", f.path.display(), rejected, error)
            }
        }
    }
    eprintln!(
        "archive  games={} players={} tournaments={} rejected_records={}",
        report.archive.len(),
        report.archive.players().len(),
        report.archive.tournaments().len(),
        report.rejected_records()
    );
    report
}
