//! Utilidades de presentación para mostrar la metadata en consola.

use super::MetadataMap;
use console::style;
use std::path::Path;

/// Imprime cada etiqueta extraída como `clave: valor`.
pub fn print_metadata(metadata: &MetadataMap) {
    println!("\n{}", style("[+] Extracted Metadata:").cyan().bold());
    for (tag, value) in metadata.iter() {
        println!("{}: {}", style(tag).bold(), value);
    }
}

/// Confirma que un artefacto quedó escrito en disco.
pub fn print_saved(message: &str, path: &Path) {
    println!(
        "{} {} {}",
        style("[+]").green().bold(),
        message,
        style(path.display()).bold()
    );
}

pub fn print_error(message: &str) {
    eprintln!("{}", error_line(message));
}

/// Línea de error con estilo según las capacidades de stderr.
fn error_line(message: &str) -> String {
    format!(
        "{} {}",
        style("[-]").for_stderr().red().bold(),
        style(message).for_stderr().red()
    )
}
