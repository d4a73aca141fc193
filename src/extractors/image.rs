//! Extracción de metadata EXIF para imágenes JPEG, PNG y TIFF.

use super::Extractor;
use crate::error::{MetadataError, Result};
use crate::metadata::gps::{
    Rational, convert_to_degrees, format_coordinate, signed_coordinate,
};
use crate::metadata::{
    CAMERA_MODEL_KEY, DATETIME_KEY, GPS_LATITUDE_KEY, GPS_LONGITUDE_KEY, MetadataMap,
};
use exif::{Context, Exif, Field, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default)]
pub struct ImageExtractor;

impl Extractor for ImageExtractor {
    fn extract(&self, path: &Path) -> Result<MetadataMap> {
        let file = File::open(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut bufreader = BufReader::new(file);

        let exif = match exif::Reader::new().read_from_container(&mut bufreader) {
            Ok(exif) => exif,
            Err(exif::Error::NotFound(_)) => {
                debug!(path = %path.display(), "la imagen no contiene EXIF");
                return Ok(MetadataMap::new());
            }
            Err(source) => {
                return Err(MetadataError::Exif {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Ok(collect_tags(&exif))
    }
}

fn collect_tags(exif: &Exif) -> MetadataMap {
    let mut metadata = MetadataMap::new();

    for field in exif.fields() {
        // Las notas del fabricante son binarios propietarios sin valor legible.
        if field.tag == Tag::MakerNote {
            continue;
        }
        metadata.insert(tag_key(field), field_to_string(exif, field));
    }

    if let (Some(latitude), Some(longitude)) = (
        read_coordinate(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef),
        read_coordinate(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef),
    ) {
        metadata.insert(GPS_LATITUDE_KEY, format_coordinate(latitude));
        metadata.insert(GPS_LONGITUDE_KEY, format_coordinate(longitude));
    }

    if let Some(field) = exif.get_field(Tag::Model, In::PRIMARY) {
        metadata.insert(CAMERA_MODEL_KEY, field_to_string(exif, field));
    }

    if let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) {
        metadata.insert(DATETIME_KEY, field_to_string(exif, field));
    }

    metadata
}

/// Nombre de la etiqueta precedido por su grupo IFD, p. ej. `GPS GPSLatitude`.
fn tag_key(field: &Field) -> String {
    let group = match field.tag.context() {
        Context::Exif => "EXIF",
        Context::Gps => "GPS",
        Context::Interop => "Interoperability",
        _ if field.ifd_num == In::THUMBNAIL => "Thumbnail",
        _ => "Image",
    };
    format!("{} {}", group, field.tag)
}

fn field_to_string(exif: &Exif, field: &Field) -> String {
    match &field.value {
        Value::Ascii(lines) => lines
            .iter()
            .map(|line| String::from_utf8_lossy(line).trim_end_matches('\0').to_string())
            .collect::<Vec<_>>()
            .join(", ")
            .trim()
            .to_string(),
        _ => field.display_value().with_unit(exif).to_string(),
    }
}

fn read_coordinate(exif: &Exif, value_tag: Tag, reference_tag: Tag) -> Option<f64> {
    let field = exif.get_field(value_tag, In::PRIMARY)?;
    let components = match &field.value {
        Value::Rational(values) if values.len() >= 3 => [
            Rational::from(values[0]),
            Rational::from(values[1]),
            Rational::from(values[2]),
        ],
        _ => return None,
    };
    let value = convert_to_degrees(components)?;

    let reference = exif
        .get_field(reference_tag, In::PRIMARY)
        .map(|field| field_to_string(exif, field));
    Some(signed_coordinate(value, reference.as_deref()))
}
