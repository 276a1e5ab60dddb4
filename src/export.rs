//! File exporters
//!
//! Two flat files are produced from the same records: a detailed CSV table
//! and a simplified list of `address#👍<city>` lines meant for copy-paste.
//! Both are skipped when the output path is blank or there is nothing to
//! write.

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{region::display_name, Config, RankedResult};

pub const TABLE_HEADER: [&str; 7] = [
    "address",
    "sent",
    "received",
    "loss_rate",
    "avg_delay_ms",
    "download_speed_MBs",
    "region",
];

/// Decorative glyph between the address and the city name
pub const MARKER: &str = "👍";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output file {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Files written by [`export`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub table: PathBuf,
    pub simplified: PathBuf,
}

/// Write the header and one row per result, in input order.
pub fn write_table<W: io::Write>(writer: W, results: &[RankedResult]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(TABLE_HEADER)?;
    for result in results {
        writer.write_record(result.to_row())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn simplified_row(result: &RankedResult) -> String {
    format!("{}#{}{}", result.addr(), MARKER, display_name(result.colo()))
}

/// Write one `address#👍<city>` field per result, without a header.
pub fn write_simplified<W: io::Write>(writer: W, results: &[RankedResult]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for result in results {
        writer.write_record([simplified_row(result)])?;
    }
    writer.flush()?;
    Ok(())
}

/// Export the CSV table to `config.output`.
pub fn export_table(
    results: &[RankedResult],
    config: &Config,
) -> Result<Option<PathBuf>, ExportError> {
    if config.no_output() || results.is_empty() {
        return Ok(None);
    }
    write_table_file(results, config).map(Some)
}

/// Export the simplified list next to the CSV table, with a `.txt` extension.
pub fn export_simplified(
    results: &[RankedResult],
    config: &Config,
) -> Result<Option<PathBuf>, ExportError> {
    if config.no_output() || results.is_empty() {
        return Ok(None);
    }
    write_simplified_file(results, config).map(Some)
}

/// Export both files. A failure on the table aborts before the simplified
/// list is attempted.
pub fn export(
    results: &[RankedResult],
    config: &Config,
) -> Result<Option<ExportPaths>, ExportError> {
    if config.no_output() {
        debug!("No output path configured, skipping export");
        return Ok(None);
    }
    if results.is_empty() {
        debug!("No results to export");
        return Ok(None);
    }

    let table = write_table_file(results, config)?;
    let simplified = write_simplified_file(results, config)?;

    info!(
        "Exported {} results to {} and {}",
        results.len(),
        table.display(),
        simplified.display()
    );
    Ok(Some(ExportPaths { table, simplified }))
}

fn write_table_file(results: &[RankedResult], config: &Config) -> Result<PathBuf, ExportError> {
    let path = PathBuf::from(&config.output);
    write_file(&path, |file| write_table(file, results))?;
    Ok(path)
}

fn write_simplified_file(
    results: &[RankedResult],
    config: &Config,
) -> Result<PathBuf, ExportError> {
    let path = PathBuf::from(config.txt_output());
    write_file(&path, |file| write_simplified(file, results))?;
    Ok(path)
}

fn write_file<F>(path: &Path, write: F) -> Result<(), ExportError>
where
    F: FnOnce(BufWriter<File>) -> csv::Result<()>,
{
    let file = create_file(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write(BufWriter::new(file)).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn create_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
