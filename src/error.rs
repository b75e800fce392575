// src/error.rs
use thiserror::Error;

/// Errors raised while selecting or running an exporter or serializer
#[derive(Debug, Error)]
pub enum Error {
    /// The key is not present in the registry it was looked up in
    #[error("Unknown {kind} option: {key} (valid options: {valid})")]
    UnknownSelectionKey {
        kind: &'static str,
        key: String,
        valid: String,
    },

    /// The key names a known format that has no encoder
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to encode payload: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Encoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a valid key was supplied
    #[error("Input closed before a valid selection was made")]
    InputClosed,
}

impl Error {
    /// Build an unknown-key error listing the accepted keys
    pub fn unknown_key<'a>(
        kind: &'static str,
        key: &str,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Error::UnknownSelectionKey {
            kind,
            key: key.to_string(),
            valid: valid.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Whether asking the user again can resolve the error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::UnknownSelectionKey { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_lists_valid_options() {
        let err = Error::unknown_key("output quality", "ultra", ["low", "high", "master"]);

        assert_eq!(
            err.to_string(),
            "Unknown output quality option: ultra (valid options: low, high, master)"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unsupported_format_is_not_recoverable() {
        let err = Error::UnsupportedFormat("YAML".to_string());

        assert_eq!(err.to_string(), "Unsupported format: YAML");
        assert!(!err.is_recoverable());
    }
}
