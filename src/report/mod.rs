//! Reporte organizado de metadata: información del archivo, campos
//! principales y campos adicionales.

mod export;

pub use export::{ReportFormat, parse_report_format, write_report};

use crate::error::{MetadataError, Result};
use crate::formatting::{format_kilobytes, format_system_time};
use crate::metadata::MetadataMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Nombre base del reporte; la extensión depende del formato.
pub const DEFAULT_REPORT_STEM: &str = "metadata_report";

/// Campos destacados en todos los reportes, en el orden en que se escriben.
pub const CORE_KEYS: [&str; 11] = [
    "Author",
    "Last Modified By",
    "Created",
    "Modified",
    "Producer",
    "Creator",
    "Title",
    "Camera Model",
    "DateTime",
    "GPS Latitude",
    "GPS Longitude",
];

pub const FILE_INFO_HEADERS: [&str; 5] = [
    "File Name",
    "File Path",
    "File Type",
    "File Size (KB)",
    "Last Modified",
];

/// Datos del archivo tomados del sistema de archivos al generar el reporte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub file_name: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size_kb: String,
    pub last_modified: String,
}

impl FileInfo {
    pub fn from_path(path: &Path) -> Result<Self> {
        let read_error = |source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        };
        let metadata = fs::metadata(path).map_err(read_error)?;
        let absolute = std::path::absolute(path).map_err(read_error)?;

        Ok(Self {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            file_path: absolute.display().to_string(),
            file_type: path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default(),
            file_size_kb: format_kilobytes(metadata.len()),
            last_modified: metadata
                .modified()
                .map(format_system_time)
                .unwrap_or_default(),
        })
    }

    pub fn row(&self) -> [&str; 5] {
        [
            &self.file_name,
            &self.file_path,
            &self.file_type,
            &self.file_size_kb,
            &self.last_modified,
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub tag: String,
    pub value: String,
}

impl ReportEntry {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MetadataReport {
    pub file_info: FileInfo,
    pub core: Vec<ReportEntry>,
    pub extras: Vec<ReportEntry>,
}

impl MetadataReport {
    pub fn build(metadata: &MetadataMap, path: &Path) -> Result<Self> {
        Ok(Self {
            file_info: FileInfo::from_path(path)?,
            core: core_fields(metadata),
            extras: extra_fields(metadata),
        })
    }
}

/// Ruta por defecto del reporte en el directorio actual, p. ej. `metadata_report.json`.
pub fn default_report_path(format: ReportFormat) -> PathBuf {
    PathBuf::from(format!("{DEFAULT_REPORT_STEM}.{}", format.extension()))
}

pub fn is_core_key(tag: &str) -> bool {
    CORE_KEYS.contains(&tag)
}

/// Todos los campos principales; los ausentes quedan como cadena vacía.
pub fn core_fields(metadata: &MetadataMap) -> Vec<ReportEntry> {
    CORE_KEYS
        .iter()
        .map(|key| ReportEntry::new(*key, metadata.get(key).unwrap_or_default()))
        .collect()
}

/// Todo lo que no pertenece a los campos principales.
pub fn extra_fields(metadata: &MetadataMap) -> Vec<ReportEntry> {
    metadata
        .iter()
        .filter(|(tag, _)| !is_core_key(tag))
        .map(|(tag, value)| ReportEntry::new(tag, value))
        .collect()
}
