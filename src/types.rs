//! Core types for the album directory

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

const ALBUM_FIELDS: [&str; 4] = ["id", "title", "artist", "price"];

/// A record album
///
/// Fields missing from an incoming payload bind to their zero value, so
/// `{"id": "9"}` parses into an album with an empty title and artist and a
/// price of `0.0`. Nothing else is validated.
///
/// Request bodies go through [`Album::from_json`], which only accepts a JSON
/// object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Parse an album from a request body
    ///
    /// The body must be a JSON object. Keys match field names without regard
    /// to ASCII case (`"ID"` binds `id`); an exact-case key takes precedence
    /// over a differently cased one. Unknown keys are ignored.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(Error::InvalidRequest(format!(
                    "album payload must be a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let album = serde_json::from_value(Value::Object(fold_field_keys(object)))?;
        Ok(album)
    }
}

fn fold_field_keys(object: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    let mut loose = Vec::new();

    for (key, value) in object {
        match ALBUM_FIELDS.iter().find(|f| key.eq_ignore_ascii_case(f)) {
            Some(field) if key == *field => {
                folded.insert(key, value);
            }
            Some(field) => loose.push((field.to_string(), value)),
            None => {}
        }
    }

    for (field, value) in loose {
        folded.entry(field).or_insert(value);
    }

    folded
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Albums the directory holds at startup, in display order
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}
