use crate::app::AppConfig;
use crate::error::Result;
use crate::map::DEFAULT_MAP_PATH;
use crate::report::{default_report_path, parse_report_format};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "metalens",
    version,
    about = "Extrae metadata de imágenes, PDFs y documentos DOCX"
)]
pub struct Cli {
    #[arg(help = "Archivo a analizar; si se omite se solicita de forma interactiva")]
    pub path: Option<PathBuf>,
    #[arg(
        short = 'o',
        long,
        help = "Ruta del reporte generado [por defecto: metadata_report.<formato>]"
    )]
    pub report: Option<PathBuf>,
    #[arg(
        short,
        long,
        default_value = "csv",
        help = "Formato del reporte (csv o json)"
    )]
    pub format: String,
    #[arg(
        short,
        long,
        default_value = DEFAULT_MAP_PATH,
        help = "Ruta del mapa HTML cuando hay coordenadas GPS"
    )]
    pub map: PathBuf,
    #[arg(long, default_value_t = false, help = "No generar el mapa de ubicación")]
    pub no_map: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<AppConfig> {
        let report_format = parse_report_format(&self.format)?;
        Ok(AppConfig {
            input: self.path,
            report_path: self
                .report
                .unwrap_or_else(|| default_report_path(report_format)),
            report_format,
            map_path: (!self.no_map).then_some(self.map),
        })
    }
}
