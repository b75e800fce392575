// src/export/mod.rs
//! Media export strategies selected by quality tier.
//!
//! A [`QualityTier`] picks an [`ExporterFactory`], which builds one video and
//! one audio exporter. [`do_export`] then runs both through prepare and
//! export.

pub mod audio;
pub mod factory;
pub mod pipeline;
pub mod video;

pub use self::audio::{AacAudioExporter, AudioCodec, AudioExporter, WavAudioExporter};
pub use self::factory::{
    build_exporter, select_exporter, ExporterFactory, FastExporter, HighQualityExporter, MasterQualityExporter,
    MediaExporter, QualityTier,
};
pub use self::pipeline::{do_export, ExportPhase, ExportReport, ExportRole, ExportStep, MediaPayload};
pub use self::video::{
    H264BPVideoExporter, H264Hi422PVideoExporter, LosslessVideoExporter, VideoCodec, VideoExporter,
};
