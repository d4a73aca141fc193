//! Exportación del reporte de metadata en CSV por secciones o JSON.

use super::{CORE_KEYS, FILE_INFO_HEADERS, MetadataReport};
use crate::error::{MetadataError, Result};
use crate::metadata::output::print_saved;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

const EXTRA_HEADERS: [&str; 2] = ["Tag", "Value"];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

pub fn parse_report_format(input: &str) -> Result<ReportFormat> {
    match input.trim().to_lowercase().as_str() {
        "csv" => Ok(ReportFormat::Csv),
        "json" => Ok(ReportFormat::Json),
        other => Err(MetadataError::UnknownFormat(other.to_string())),
    }
}

/// Escribe el reporte en `path`, reemplazando cualquier archivo previo.
pub fn write_report(report: &MetadataReport, format: ReportFormat, path: &Path) -> Result<()> {
    match format {
        ReportFormat::Csv => export_csv(report, path)?,
        ReportFormat::Json => export_json(report, path)?,
    }
    debug!(path = %path.display(), format = format.extension(), "reporte escrito");
    print_saved("Organized metadata saved to", path);
    Ok(())
}

fn export_json(report: &MetadataReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| MetadataError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn export_csv(report: &MetadataReport, path: &Path) -> Result<()> {
    let write_error = |source| MetadataError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut out = BufWriter::new(file);

    write_section(
        &mut out,
        path,
        "File Information",
        &FILE_INFO_HEADERS,
        [report.file_info.row().to_vec()],
    )?;

    writeln!(out).map_err(write_error)?;
    let core_row: Vec<&str> = report.core.iter().map(|entry| entry.value.as_str()).collect();
    write_section(&mut out, path, "Core Metadata", &CORE_KEYS, [core_row])?;

    writeln!(out).map_err(write_error)?;
    write_section(
        &mut out,
        path,
        "Additional Metadata",
        &EXTRA_HEADERS,
        report
            .extras
            .iter()
            .map(|entry| vec![entry.tag.as_str(), entry.value.as_str()]),
    )?;

    out.flush().map_err(write_error)
}

/// Escribe `=== título ===` seguido de una tabla CSV con cabecera.
fn write_section<'a, W, R>(
    out: &mut W,
    path: &Path,
    title: &str,
    headers: &[&str],
    rows: R,
) -> Result<()>
where
    W: Write,
    R: IntoIterator<Item = Vec<&'a str>>,
{
    let write_error = |source| MetadataError::Write {
        path: path.to_path_buf(),
        source,
    };
    let csv_error = |source| MetadataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    writeln!(out, "=== {title} ===").map_err(write_error)?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(&mut *out);
    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.write_record(&row).map_err(csv_error)?;
    }
    writer.flush().map_err(write_error)
}
