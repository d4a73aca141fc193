//! Extracción de metadata en PDFs mediante lectura del diccionario Info.

use super::Extractor;
use crate::error::{MetadataError, Result};
use crate::formatting::MAX_VALUE_LEN;
use crate::metadata::MetadataMap;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

const MAX_REFERENCE_DEPTH: usize = 8;

#[derive(Clone, Copy, Debug, Default)]
pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<MetadataMap> {
        let file = File::open(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Document::load_from(BufReader::new(file)).map_err(|source| {
            MetadataError::Pdf {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut metadata = MetadataMap::new();
        let Some(info_dict) = info_dictionary(&doc) else {
            debug!(path = %path.display(), "el PDF no tiene diccionario Info");
            return Ok(metadata);
        };

        for (key, value) in info_dict.iter() {
            let name = String::from_utf8_lossy(key);
            let name = name.strip_prefix('/').unwrap_or(&name);
            metadata.insert(name, object_to_string(&doc, value));
        }

        Ok(metadata)
    }
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info_ref = doc.trailer.get(b"Info").ok()?;
    deref_dictionary(doc, info_ref)
}

fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Convierte un valor PDF en texto legible.
///
/// Las referencias se siguen hasta `MAX_REFERENCE_DEPTH` niveles y las que ya
/// están en expansión se dejan como `n g R`. La salida se corta en cuanto
/// supera `MAX_VALUE_LEN` caracteres.
fn object_to_string(doc: &Document, obj: &Object) -> String {
    let mut renderer = ValueRenderer::new(doc, MAX_VALUE_LEN);
    renderer.write_object(obj);
    renderer.out
}

struct ValueRenderer<'a> {
    doc: &'a Document,
    out: String,
    written: usize,
    limit: usize,
    active: Vec<ObjectId>,
}

impl<'a> ValueRenderer<'a> {
    fn new(doc: &'a Document, limit: usize) -> Self {
        Self {
            doc,
            out: String::new(),
            written: 0,
            limit,
            active: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.written > self.limit
    }

    fn push(&mut self, text: &str) {
        if self.is_full() {
            return;
        }
        self.out.push_str(text);
        self.written += text.chars().count();
    }

    fn write_object(&mut self, obj: &Object) {
        if self.is_full() {
            return;
        }
        match obj {
            Object::Null => self.push("null"),
            Object::Boolean(value) => self.push(&value.to_string()),
            Object::Integer(value) => self.push(&value.to_string()),
            Object::Real(value) => self.push(&value.to_string()),
            Object::String(bytes, _) => self.push(&decode_text_string(bytes)),
            Object::Name(name) => {
                self.push("/");
                self.push(&String::from_utf8_lossy(name));
            }
            Object::Array(items) => {
                self.push("[");
                for (index, item) in items.iter().enumerate() {
                    if self.is_full() {
                        return;
                    }
                    if index > 0 {
                        self.push(", ");
                    }
                    self.write_object(item);
                }
                self.push("]");
            }
            Object::Dictionary(dict) => self.write_dictionary(dict),
            Object::Stream(stream) => self.write_dictionary(&stream.dict),
            Object::Reference(id) => self.write_reference(*id),
        }
    }

    fn write_dictionary(&mut self, dict: &Dictionary) {
        self.push("{");
        for (index, (key, value)) in dict.iter().enumerate() {
            if self.is_full() {
                return;
            }
            if index > 0 {
                self.push(", ");
            }
            self.push("/");
            self.push(&String::from_utf8_lossy(key));
            self.push(": ");
            self.write_object(value);
        }
        self.push("}");
    }

    fn write_reference(&mut self, id: ObjectId) {
        let doc = self.doc;
        let target = if self.active.contains(&id) || self.active.len() >= MAX_REFERENCE_DEPTH {
            None
        } else {
            doc.get_object(id).ok()
        };

        match target {
            Some(inner) => {
                self.active.push(id);
                self.write_object(inner);
                self.active.pop();
            }
            None => self.push(&format!("{} {} R", id.0, id.1)),
        }
    }
}

/// Decodifica una cadena de texto PDF: UTF-16BE si lleva BOM, UTF-8 en otro caso.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    String::from_utf8_lossy(bytes).into_owned()
}
