//! Lectura de las propiedades de documentos DOCX empaquetados en ZIP.

use super::Extractor;
use crate::error::{MetadataError, Result};
use crate::metadata::MetadataMap;
use chrono::DateTime;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use xmltree::{Element, XMLNode};
use zip::ZipArchive;
use zip::result::ZipError;

pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const CP_NS: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
pub const APP_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";

const CORE_PART: &str = "docProps/core.xml";
const APP_PART: &str = "docProps/app.xml";

struct FieldSpec {
    label: &'static str,
    local_name: &'static str,
    namespace: &'static str,
    timestamp: bool,
}

impl FieldSpec {
    const fn text(label: &'static str, local_name: &'static str, namespace: &'static str) -> Self {
        Self {
            label,
            local_name,
            namespace,
            timestamp: false,
        }
    }

    const fn timestamp(
        label: &'static str,
        local_name: &'static str,
        namespace: &'static str,
    ) -> Self {
        Self {
            label,
            local_name,
            namespace,
            timestamp: true,
        }
    }
}

/// Propiedades que siempre aparecen en el resultado, vacías si faltan.
const CORE_FIELDS: [FieldSpec; 5] = [
    FieldSpec::text("Author", "creator", DC_NS),
    FieldSpec::text("Last Modified By", "lastModifiedBy", CP_NS),
    FieldSpec::timestamp("Created", "created", DCTERMS_NS),
    FieldSpec::timestamp("Modified", "modified", DCTERMS_NS),
    FieldSpec::text("Title", "title", DC_NS),
];

/// Propiedades adicionales que solo se registran cuando tienen contenido.
const OPTIONAL_CORE_FIELDS: [FieldSpec; 6] = [
    FieldSpec::text("Subject", "subject", DC_NS),
    FieldSpec::text("Keywords", "keywords", CP_NS),
    FieldSpec::text("Description", "description", DC_NS),
    FieldSpec::text("Category", "category", CP_NS),
    FieldSpec::text("Revision", "revision", CP_NS),
    FieldSpec::timestamp("Last Printed", "lastPrinted", CP_NS),
];

const APP_FIELDS: [FieldSpec; 5] = [
    FieldSpec::text("Application", "Application", APP_NS),
    FieldSpec::text("Company", "Company", APP_NS),
    FieldSpec::text("Manager", "Manager", APP_NS),
    FieldSpec::text("Pages", "Pages", APP_NS),
    FieldSpec::text("Words", "Words", APP_NS),
];

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentExtractor;

impl Extractor for DocumentExtractor {
    fn extract(&self, path: &Path) -> Result<MetadataMap> {
        let file = File::open(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut archive = ZipArchive::new(file).map_err(|source| MetadataError::Archive {
            path: path.to_path_buf(),
            source,
        })?;

        let mut metadata = MetadataMap::new();

        let core = read_part(&mut archive, path, CORE_PART)?;
        if core.is_none() {
            debug!(path = %path.display(), "el documento no incluye {CORE_PART}");
        }
        for field in &CORE_FIELDS {
            let value = core
                .as_ref()
                .and_then(|root| field_value(root, field))
                .unwrap_or_default();
            metadata.insert(field.label, value);
        }
        if let Some(root) = &core {
            insert_present(&mut metadata, root, &OPTIONAL_CORE_FIELDS);
        }

        if let Some(root) = read_part(&mut archive, path, APP_PART)? {
            insert_present(&mut metadata, &root, &APP_FIELDS);
        }

        Ok(metadata)
    }
}

/// Lee y analiza una parte XML del paquete; `None` si la parte no existe.
fn read_part(
    archive: &mut ZipArchive<File>,
    path: &Path,
    part: &str,
) -> Result<Option<Element>> {
    let mut entry = match archive.by_name(part) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(source) => {
            return Err(MetadataError::Archive {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut contents = Vec::new();
    entry
        .read_to_end(&mut contents)
        .map_err(|source| MetadataError::Archive {
            path: path.to_path_buf(),
            source: ZipError::Io(source),
        })?;

    Element::parse(contents.as_slice())
        .map(Some)
        .map_err(|source| MetadataError::Xml {
            path: path.to_path_buf(),
            part: part.to_string(),
            source,
        })
}

fn insert_present(metadata: &mut MetadataMap, root: &Element, fields: &[FieldSpec]) {
    for field in fields {
        if let Some(value) = field_value(root, field)
            && !value.is_empty()
        {
            metadata.insert(field.label, value);
        }
    }
}

fn field_value(root: &Element, field: &FieldSpec) -> Option<String> {
    let text = find_child_text(root, field.local_name, field.namespace)?;
    if field.timestamp {
        Some(format_timestamp(&text))
    } else {
        Some(text)
    }
}

/// Normaliza fechas W3CDTF a `AAAA-MM-DD HH:MM:SS+HH:MM`; si no se reconocen, se devuelven tal cual.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(datetime) => datetime.format("%Y-%m-%d %H:%M:%S%:z").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn find_child_text(root: &Element, local_name: &str, namespace: &str) -> Option<String> {
    root.children.iter().find_map(|node| match node {
        XMLNode::Element(child)
            if child.name == local_name && child.namespace.as_deref() == Some(namespace) =>
        {
            Some(element_text_content(child))
        }
        _ => None,
    })
}

fn element_text_content(element: &Element) -> String {
    let mut content = String::new();
    for node in &element.children {
        if let XMLNode::Text(text) = node {
            content.push_str(text);
        }
    }
    content.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;

    #[test]
    fn formats_w3cdtf_timestamps() {
        assert_eq!(
            format_timestamp("2024-01-01T08:30:00Z"),
            "2024-01-01 08:30:00+00:00"
        );
        assert_eq!(
            format_timestamp("2024-03-05T10:00:00-05:00"),
            "2024-03-05 10:00:00-05:00"
        );
    }

    #[test]
    fn keeps_unrecognized_timestamps_verbatim() {
        assert_eq!(format_timestamp("2024"), "2024");
        assert_eq!(format_timestamp(""), "");
    }
}
