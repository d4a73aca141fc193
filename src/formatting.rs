//! Utilidades de formato compartidas por extractores y reportes.

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Longitud máxima que conserva un valor de metadata antes de recortarse.
pub const MAX_VALUE_LEN: usize = 120;

/// Marca que se añade al final de un valor recortado.
pub const TRUNCATION_MARKER: char = '…';

/// Recorta `value` a `max_len` caracteres y añade la marca de truncado.
///
/// La longitud se mide en caracteres, no en bytes, para no partir
/// secuencias UTF-8.
pub fn clamp_string(value: &str, max_len: usize) -> String {
    match value.char_indices().nth(max_len) {
        Some((cut, _)) => {
            let mut clamped = String::with_capacity(cut + TRUNCATION_MARKER.len_utf8());
            clamped.push_str(&value[..cut]);
            clamped.push(TRUNCATION_MARKER);
            clamped
        }
        None => value.to_string(),
    }
}

pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Convierte bytes a kilobytes redondeados a dos decimales.
pub fn format_kilobytes(bytes: u64) -> String {
    let kilobytes = bytes as f64 / 1024.0;
    format!("{:.2}", (kilobytes * 100.0).round() / 100.0)
}
