// src/export/pipeline.rs
use crate::export::factory::MediaExporter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Media handed to the exporters. The strategies never look inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPayload {
    pub video_data: String,
    pub audio_data: String,
}

impl Default for MediaPayload {
    fn default() -> Self {
        Self {
            video_data: "placeholder_for_video_data".to_string(),
            audio_data: "placeholder_for_audio_data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportRole {
    Video,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportPhase {
    Prepare,
    Commit,
}

impl fmt::Display for ExportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportPhase::Prepare => write!(f, "prepare"),
            ExportPhase::Commit => write!(f, "commit"),
        }
    }
}

/// One step of an export run and the line the exporter reported for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportStep {
    pub role: ExportRole,
    pub phase: ExportPhase,
    pub message: String,
}

/// Ordered record of an export run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub folder: PathBuf,
    pub steps: Vec<ExportStep>,
}

impl ExportReport {
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.message.as_str())
    }
}

/// Run a test export with a video and audio exporter.
///
/// Both exporters are prepared before either one exports, always in the
/// order video, audio.
pub fn do_export(exporter: &MediaExporter, payload: &MediaPayload, folder: &Path) -> ExportReport {
    info!("Starting export to {}", folder.display());

    let mut steps = Vec::with_capacity(4);
    let mut record = |role: ExportRole, phase: ExportPhase, message: String| {
        debug!("{:?} {}: {}", role, phase, message);
        steps.push(ExportStep { role, phase, message });
    };

    // Prepare the export
    record(
        ExportRole::Video,
        ExportPhase::Prepare,
        exporter.video.prepare_export(&payload.video_data),
    );
    record(
        ExportRole::Audio,
        ExportPhase::Prepare,
        exporter.audio.prepare_export(&payload.audio_data),
    );

    // Do the export
    record(ExportRole::Video, ExportPhase::Commit, exporter.video.do_export(folder));
    record(ExportRole::Audio, ExportPhase::Commit, exporter.audio.do_export(folder));

    info!("Export finished with {} steps", steps.len());

    ExportReport {
        folder: folder.to_path_buf(),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::factory::QualityTier;

    #[test]
    fn test_low_tier_messages() {
        let exporter = MediaExporter::for_tier(QualityTier::Low);
        let report = do_export(&exporter, &MediaPayload::default(), Path::new("/srv/exports"));

        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            vec![
                "Preparing video data for H.264 (Baseline) export.",
                "Preparing audio data for AAC export.",
                "Exporting video data in H.264 (Baseline) format to /srv/exports.",
                "Exporting audio data in AAC format to /srv/exports.",
            ]
        );
        assert_eq!(report.folder, PathBuf::from("/srv/exports"));
    }

    #[test]
    fn test_default_payload_placeholders() {
        let payload = MediaPayload::default();

        assert_eq!(payload.video_data, "placeholder_for_video_data");
        assert_eq!(payload.audio_data, "placeholder_for_audio_data");
    }
}
