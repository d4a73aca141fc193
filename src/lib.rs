//! MetaLens: extracción de metadata EXIF, PDF y DOCX con reporte
//! organizado y mapa de ubicación.

pub mod app;
pub mod cli;
pub mod error;
pub mod extractors;
pub mod formatting;
pub mod map;
pub mod metadata;
pub mod report;

pub use error::{MetadataError, Result};
pub use extractors::{Extractor, FileFormat, extract_metadata};
pub use metadata::MetadataMap;
