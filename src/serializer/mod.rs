// src/serializer/mod.rs
//! Song serializers selected by format key.

pub mod json;
pub mod song;
pub mod xml;

pub use self::json::serialize_to_json;
pub use self::song::Song;
pub use self::xml::serialize_to_xml;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Encoder for one output format
pub type SerializeFn = fn(&Song) -> Result<String>;

/// Formats a caller can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKey {
    Json,
    Xml,
    /// Recognised but has no encoder
    Yaml,
}

impl FormatKey {
    pub const ALL: [FormatKey; 3] = [FormatKey::Json, FormatKey::Xml, FormatKey::Yaml];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKey::Json => "JSON",
            FormatKey::Xml => "XML",
            FormatKey::Yaml => "YAML",
        }
    }

    /// Keys that have an encoder
    pub fn supported() -> impl Iterator<Item = &'static str> {
        [FormatKey::Json, FormatKey::Xml].into_iter().map(|key| key.as_str())
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unknown_key("format", s, Self::supported()))
    }
}

/// Pick the encoder for a format
pub fn get_serializer(format: FormatKey) -> Result<SerializeFn> {
    match format {
        FormatKey::Json => Ok(serialize_to_json),
        FormatKey::Xml => Ok(serialize_to_xml),
        FormatKey::Yaml => Err(Error::UnsupportedFormat(format.to_string())),
    }
}

/// Serializes songs into the format named by a key
#[derive(Debug, Default, Clone, Copy)]
pub struct SongSerializer;

impl SongSerializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize(&self, song: &Song, format: &str) -> Result<String> {
        let serializer = get_serializer(format.parse()?)?;
        debug!("Serializing song {} as {}", song.id, format);
        serializer(song)
    }
}
