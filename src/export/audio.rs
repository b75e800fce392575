// src/export/audio.rs
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Audio codecs an exporter can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AudioCodec {
    Aac,
    Wav,
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioCodec::Aac => write!(f, "AAC"),
            AudioCodec::Wav => write!(f, "WAV"),
        }
    }
}

/// Two-phase audio export, mirroring [`crate::export::VideoExporter`]
pub trait AudioExporter {
    fn codec(&self) -> AudioCodec;

    /// Prepare the audio data for export
    fn prepare_export(&self, audio_data: &str) -> String;

    /// Export the prepared audio data to a folder
    fn do_export(&self, folder: &Path) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AacAudioExporter;

impl AudioExporter for AacAudioExporter {
    fn codec(&self) -> AudioCodec {
        AudioCodec::Aac
    }

    fn prepare_export(&self, _audio_data: &str) -> String {
        "Preparing audio data for AAC export.".to_string()
    }

    fn do_export(&self, folder: &Path) -> String {
        format!("Exporting audio data in AAC format to {}.", folder.display())
    }
}

/// WAV (lossless) audio export
#[derive(Debug, Default, Clone, Copy)]
pub struct WavAudioExporter;

impl AudioExporter for WavAudioExporter {
    fn codec(&self) -> AudioCodec {
        AudioCodec::Wav
    }

    fn prepare_export(&self, _audio_data: &str) -> String {
        "Preparing audio data for WAV export.".to_string()
    }

    fn do_export(&self, folder: &Path) -> String {
        format!("Exporting audio data in WAV format to {}.", folder.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_messages() {
        let exporter = WavAudioExporter;

        assert_eq!(exporter.codec(), AudioCodec::Wav);
        assert_eq!(exporter.prepare_export("pcm"), "Preparing audio data for WAV export.");
        assert_eq!(
            exporter.do_export(Path::new("out")),
            "Exporting audio data in WAV format to out."
        );
    }
}
