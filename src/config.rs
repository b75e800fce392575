// src/config.rs
use crate::error::Result;
use crate::export::MediaPayload;
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "media-factory.toml";

/// Prefix for environment overrides, e.g. `MEDIA_FACTORY__EXPORT__FOLDER`
pub const ENV_PREFIX: &str = "MEDIA_FACTORY";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    pub export: ExportSettings,
    pub serializer: SerializerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    /// Folder handed to the export step
    pub folder: PathBuf,
    pub video_data: String,
    pub audio_data: String,
}

impl ExportSettings {
    pub fn payload(&self) -> MediaPayload {
        MediaPayload {
            video_data: self.video_data.clone(),
            audio_data: self.audio_data.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerializerSettings {
    pub default_format: String,
}

impl AppConfig {
    /// Load defaults, then the config file, then environment overrides.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = MediaPayload::default();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("log_level", "info")?
            .set_default("export.folder", "exports")?
            .set_default("export.video_data", defaults.video_data)?
            .set_default("export.audio_data", defaults.audio_data)?
            .set_default("serializer.default_format", "JSON")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\n\n[export]\nfolder = \"/data/renders\"\n"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.export.folder, PathBuf::from("/data/renders"));
        assert_eq!(config.export.video_data, "placeholder_for_video_data");
        assert_eq!(config.serializer.default_format, "JSON");
    }

    #[test]
    fn test_environment_overrides_file() {
        // Only this test touches export.audio_data, so parallel loads are unaffected
        let key = "MEDIA_FACTORY__EXPORT__AUDIO_DATA";
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[export]\naudio_data = \"from_file\"\n").unwrap();

        std::env::set_var(key, "from_env");
        let loaded = AppConfig::load(Some(file.path()));
        std::env::remove_var(key);

        assert_eq!(loaded.unwrap().export.audio_data, "from_env");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(AppConfig::load(Some(&missing)).is_err());
    }
}
