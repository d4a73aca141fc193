//! Extracción de metadata para los formatos soportados y despacho por extensión.

mod document;
mod image;
mod pdf;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::error::Result;
use crate::metadata::MetadataMap;
use std::path::Path;
use tracing::debug;

pub use document::DocumentExtractor;
pub use image::ImageExtractor;
pub use pdf::PdfExtractor;

/// Contrato común de los extractores: una ruta en, un mapa de etiquetas fuera.
pub trait Extractor {
    fn extract(&self, path: &Path) -> Result<MetadataMap>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileFormat {
    Image,
    Pdf,
    Document,
    Unsupported,
}

impl FileFormat {
    /// Determina el formato a partir de la extensión, sin distinguir mayúsculas.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

        match extension.as_deref() {
            Some("jpg" | "jpeg" | "png" | "tiff") => FileFormat::Image,
            Some("pdf") => FileFormat::Pdf,
            Some("docx") => FileFormat::Document,
            _ => FileFormat::Unsupported,
        }
    }

    pub fn extractor(self) -> Option<&'static dyn Extractor> {
        match self {
            FileFormat::Image => Some(&ImageExtractor),
            FileFormat::Pdf => Some(&PdfExtractor),
            FileFormat::Document => Some(&DocumentExtractor),
            FileFormat::Unsupported => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileFormat::Image => "imagen",
            FileFormat::Pdf => "PDF",
            FileFormat::Document => "documento DOCX",
            FileFormat::Unsupported => "no soportado",
        }
    }
}

/// Extrae la metadata de `path` con el extractor que corresponde a su extensión.
///
/// Las extensiones desconocidas no son un error: devuelven
/// `{"Error": "Unsupported file type"}` para que el reporte y el mapa
/// puedan ejecutarse igualmente.
pub fn extract_metadata(path: &Path) -> Result<MetadataMap> {
    let format = FileFormat::from_path(path);
    debug!(path = %path.display(), format = format.label(), "despachando extracción");

    match format.extractor() {
        Some(extractor) => {
            let metadata = extractor.extract(path)?;
            debug!(tags = metadata.len(), "extracción completada");
            Ok(metadata)
        }
        None => Ok(MetadataMap::unsupported()),
    }
}
