//! Generación de un mapa HTML interactivo a partir de las coordenadas GPS.

use crate::error::{MetadataError, Result};
use crate::metadata::output::print_saved;
use crate::metadata::{GPS_LATITUDE_KEY, GPS_LONGITUDE_KEY, MetadataMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_MAP_PATH: &str = "metadata_map.html";
pub const DEFAULT_ZOOM: u8 = 15;
pub const MARKER_LABEL: &str = "Image Location";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl MapLocation {
    /// Lee las coordenadas decimales del mapa de metadata.
    ///
    /// Devuelve `None` si falta alguna clave o si su valor no es numérico.
    pub fn from_metadata(metadata: &MetadataMap) -> Option<Self> {
        let latitude = metadata.get(GPS_LATITUDE_KEY)?;
        let longitude = metadata.get(GPS_LONGITUDE_KEY)?;

        match (parse_coordinate(latitude), parse_coordinate(longitude)) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => {
                warn!(latitude, longitude, "coordenadas GPS no numéricas, se omite el mapa");
                None
            }
        }
    }
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|coordinate| coordinate.is_finite())
}

/// Escribe el mapa en `output` si la metadata trae latitud y longitud.
///
/// Sin coordenadas no se escribe nada y se devuelve `Ok(None)`.
pub fn generate_map(metadata: &MetadataMap, output: &Path) -> Result<Option<PathBuf>> {
    let Some(location) = MapLocation::from_metadata(metadata) else {
        debug!("sin coordenadas GPS, no se genera mapa");
        return Ok(None);
    };

    fs::write(output, render_map_html(location, DEFAULT_ZOOM, MARKER_LABEL)).map_err(
        |source| MetadataError::Write {
            path: output.to_path_buf(),
            source,
        },
    )?;

    print_saved("Map saved to", output);
    Ok(Some(output.to_path_buf()))
}

/// Página Leaflet autónoma con un único marcador.
pub fn render_map_html(location: MapLocation, zoom: u8, label: &str) -> String {
    let MapLocation {
        latitude,
        longitude,
    } = location;
    let label = escape_html(label);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{label}</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
        #map {{ position: absolute; top: 0; bottom: 0; right: 0; left: 0; }}
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        var map = L.map("map", {{ center: [{latitude}, {longitude}], zoom: {zoom} }});
        L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
            maxZoom: 19,
            attribution: "&copy; OpenStreetMap contributors"
        }}).addTo(map);
        L.marker([{latitude}, {longitude}]).addTo(map).bindPopup("{label}");
    </script>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
