//! Flujo completo: extracción, reporte y mapa para un único archivo.

use crate::error::{MetadataError, Result};
use crate::extractors::extract_metadata;
use crate::map::generate_map;
use crate::metadata::MetadataMap;
use crate::metadata::output::print_metadata;
use crate::report::{MetadataReport, ReportFormat, write_report};
use console::style;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Archivo a analizar; `None` para pedirlo por consola.
    pub input: Option<PathBuf>,
    pub report_path: PathBuf,
    pub report_format: ReportFormat,
    /// Destino del mapa; `None` desactiva su generación.
    pub map_path: Option<PathBuf>,
}

/// Resultado de una ejecución, útil para quien invoca el flujo como biblioteca.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub metadata: MetadataMap,
    pub report_path: PathBuf,
    pub map_path: Option<PathBuf>,
}

pub fn run(config: &AppConfig) -> Result<RunSummary> {
    let path = match &config.input {
        Some(path) => path.clone(),
        None => prompt_path(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    info!(path = %path.display(), "analizando archivo");

    let metadata = extract_metadata(&path)?;
    print_metadata(&metadata);

    let report = MetadataReport::build(&metadata, &path)?;
    write_report(&report, config.report_format, &config.report_path)?;

    let map_path = match &config.map_path {
        Some(output) => generate_map(&metadata, output)?,
        None => None,
    };

    Ok(RunSummary {
        metadata,
        report_path: config.report_path.clone(),
        map_path,
    })
}

/// Solicita la ruta del archivo y devuelve la línea sin espacios alrededor.
pub fn prompt_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{} ", style("Enter file path:").bold().cyan()).map_err(MetadataError::Input)?;
    output.flush().map_err(MetadataError::Input)?;

    let mut buffer = String::new();
    input.read_line(&mut buffer).map_err(MetadataError::Input)?;

    let line = buffer.trim();
    if line.is_empty() {
        return Err(MetadataError::MissingPath);
    }
    Ok(PathBuf::from(line))
}
