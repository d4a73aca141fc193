use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("No se pudo abrir `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No se pudo leer la metadata EXIF de `{path}`: {source}")]
    Exif { path: PathBuf, source: exif::Error },

    #[error("No se pudo leer el PDF `{path}`: {source}")]
    Pdf { path: PathBuf, source: lopdf::Error },

    #[error("`{path}` no es un documento Office válido: {source}")]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("XML inválido en `{path}` ({part}): {source}")]
    Xml {
        path: PathBuf,
        part: String,
        source: xmltree::ParseError,
    },

    #[error("No se pudo escribir `{path}`: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No se pudo escribir el CSV `{path}`: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("No se pudo serializar el reporte JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error al leer la entrada: {0}")]
    Input(std::io::Error),

    #[error("No se indicó ninguna ruta de archivo")]
    MissingPath,

    #[error("Formato de reporte no reconocido: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
