//! Modelo de metadata extraída y utilidades asociadas.

pub mod gps;
pub mod output;

use crate::formatting::{MAX_VALUE_LEN, clamp_string};
use serde::Serialize;
use std::collections::BTreeMap;

pub const ERROR_KEY: &str = "Error";
pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type";

pub const GPS_LATITUDE_KEY: &str = "GPS Latitude";
pub const GPS_LONGITUDE_KEY: &str = "GPS Longitude";
pub const CAMERA_MODEL_KEY: &str = "Camera Model";
pub const DATETIME_KEY: &str = "DateTime";

/// Etiquetas extraídas de un archivo con sus valores ya recortados.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetadataMap {
    entries: BTreeMap<String, String>,
}

impl MetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resultado uniforme para extensiones que ningún extractor soporta.
    pub fn unsupported() -> Self {
        let mut map = Self::new();
        map.insert(ERROR_KEY, UNSUPPORTED_FILE_TYPE);
        map
    }

    /// Inserta una etiqueta recortando el valor a [`MAX_VALUE_LEN`] caracteres.
    pub fn insert(&mut self, tag: impl Into<String>, value: impl AsRef<str>) {
        self.entries
            .insert(tag.into(), clamp_string(value.as_ref(), MAX_VALUE_LEN));
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    pub fn contains_key(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn is_unsupported(&self) -> bool {
        self.get(ERROR_KEY) == Some(UNSUPPORTED_FILE_TYPE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(tag, value)| (tag.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for MetadataMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (tag, value) in iter {
            map.insert(tag, value);
        }
        map
    }
}
