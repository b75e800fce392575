// src/export/factory.rs
use crate::error::{Error, Result};
use crate::export::audio::{AacAudioExporter, AudioExporter, WavAudioExporter};
use crate::export::video::{
    H264BPVideoExporter, H264Hi422PVideoExporter, LosslessVideoExporter, VideoExporter,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// A combination of video and audio codecs.
///
/// Factories keep no reference to the exporters they hand out; every call
/// builds a fresh instance.
pub trait ExporterFactory {
    /// Returns a new video exporter instance
    fn video_exporter(&self) -> Box<dyn VideoExporter>;

    /// Returns a new audio exporter instance
    fn audio_exporter(&self) -> Box<dyn AudioExporter>;

    /// Short human-readable summary of the trade-off this factory makes
    fn description(&self) -> &'static str;
}

/// High speed, lower quality export
#[derive(Debug, Default, Clone, Copy)]
pub struct FastExporter;

impl ExporterFactory for FastExporter {
    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(H264BPVideoExporter)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(AacAudioExporter)
    }

    fn description(&self) -> &'static str {
        "High speed, lower quality export"
    }
}

/// Slower, high quality export
#[derive(Debug, Default, Clone, Copy)]
pub struct HighQualityExporter;

impl ExporterFactory for HighQualityExporter {
    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(H264Hi422PVideoExporter)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(AacAudioExporter)
    }

    fn description(&self) -> &'static str {
        "Slower speed, high quality export"
    }
}

/// Slowest, master quality export
#[derive(Debug, Default, Clone, Copy)]
pub struct MasterQualityExporter;

impl ExporterFactory for MasterQualityExporter {
    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(LosslessVideoExporter)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(WavAudioExporter)
    }

    fn description(&self) -> &'static str {
        "Slower speed, master quality export"
    }
}

/// Export quality selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    High,
    Master,
}

impl QualityTier {
    /// All tiers in registry order
    pub const ALL: [QualityTier; 3] = [QualityTier::Low, QualityTier::High, QualityTier::Master];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Low => "low",
            QualityTier::High => "high",
            QualityTier::Master => "master",
        }
    }

    /// Keys accepted by [`QualityTier::from_str`]
    pub fn keys() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|tier| tier.as_str())
    }

    /// Build the factory for this tier
    pub fn factory(&self) -> Box<dyn ExporterFactory> {
        match self {
            QualityTier::Low => Box::new(FastExporter),
            QualityTier::High => Box::new(HighQualityExporter),
            QualityTier::Master => Box::new(MasterQualityExporter),
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| Error::unknown_key("output quality", s, Self::keys()))
    }
}

/// A video exporter paired with an audio exporter for one export request
pub struct MediaExporter {
    pub video: Box<dyn VideoExporter>,
    pub audio: Box<dyn AudioExporter>,
}

impl MediaExporter {
    /// Pull one exporter of each kind out of a factory
    pub fn from_factory(factory: &dyn ExporterFactory) -> Self {
        Self {
            video: factory.video_exporter(),
            audio: factory.audio_exporter(),
        }
    }

    pub fn for_tier(tier: QualityTier) -> Self {
        Self::from_factory(tier.factory().as_ref())
    }
}

impl fmt::Debug for MediaExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaExporter")
            .field("video", &self.video.codec())
            .field("audio", &self.audio.codec())
            .finish()
    }
}

/// Build the exporter bundle for a chosen tier and log the selection
pub fn build_exporter(tier: QualityTier) -> MediaExporter {
    let exporter = MediaExporter::for_tier(tier);

    info!(
        "Selected {} quality export: video={}, audio={}",
        tier,
        exporter.video.codec(),
        exporter.audio.codec()
    );

    exporter
}

/// Look up a quality key and build its exporter bundle
pub fn select_exporter(key: &str) -> Result<MediaExporter> {
    let tier: QualityTier = key.parse()?;
    Ok(build_exporter(tier))
}
