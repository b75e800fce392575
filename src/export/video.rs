// src/export/video.rs
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Video codecs an exporter can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VideoCodec {
    Lossless,
    H264Baseline,
    H264Hi422P,
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoCodec::Lossless => write!(f, "lossless"),
            VideoCodec::H264Baseline => write!(f, "H.264 (Baseline)"),
            VideoCodec::H264Hi422P => write!(f, "H.264 (Hi422P)"),
        }
    }
}

/// Two-phase video export: prepare the payload, then write it to a folder.
///
/// Both methods return the report line for the step. Implementations hold no
/// state, so preparing never changes what the export step does.
pub trait VideoExporter {
    /// Codec this exporter produces
    fn codec(&self) -> VideoCodec;

    /// Prepare the video data for export
    fn prepare_export(&self, video_data: &str) -> String;

    /// Export the prepared video data to a folder
    fn do_export(&self, folder: &Path) -> String;
}

/// Lossless video export
#[derive(Debug, Default, Clone, Copy)]
pub struct LosslessVideoExporter;

impl VideoExporter for LosslessVideoExporter {
    fn codec(&self) -> VideoCodec {
        VideoCodec::Lossless
    }

    fn prepare_export(&self, _video_data: &str) -> String {
        "Preparing video data for lossless export.".to_string()
    }

    fn do_export(&self, folder: &Path) -> String {
        format!("Exporting video data in lossless format to {}.", folder.display())
    }
}

/// H.264 export with the Baseline profile
#[derive(Debug, Default, Clone, Copy)]
pub struct H264BPVideoExporter;

impl VideoExporter for H264BPVideoExporter {
    fn codec(&self) -> VideoCodec {
        VideoCodec::H264Baseline
    }

    fn prepare_export(&self, _video_data: &str) -> String {
        "Preparing video data for H.264 (Baseline) export.".to_string()
    }

    fn do_export(&self, folder: &Path) -> String {
        format!("Exporting video data in H.264 (Baseline) format to {}.", folder.display())
    }
}

/// H.264 export with the Hi422P profile (10-bit, 4:2:2 chroma sampling)
#[derive(Debug, Default, Clone, Copy)]
pub struct H264Hi422PVideoExporter;

impl VideoExporter for H264Hi422PVideoExporter {
    fn codec(&self) -> VideoCodec {
        VideoCodec::H264Hi422P
    }

    fn prepare_export(&self, _video_data: &str) -> String {
        "Preparing video data for H.264 (Hi422P) export.".to_string()
    }

    fn do_export(&self, folder: &Path) -> String {
        format!("Exporting video data in H.264 (Hi422P) format to {}.", folder.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_codec_and_folder() {
        let exporter = H264Hi422PVideoExporter;
        let folder = Path::new("/tmp/renders");

        assert_eq!(
            exporter.prepare_export("frames"),
            "Preparing video data for H.264 (Hi422P) export."
        );
        assert_eq!(
            exporter.do_export(folder),
            "Exporting video data in H.264 (Hi422P) format to /tmp/renders."
        );
    }

    #[test]
    fn test_codec_display() {
        assert_eq!(LosslessVideoExporter.codec().to_string(), "lossless");
        assert_eq!(H264BPVideoExporter.codec().to_string(), "H.264 (Baseline)");
    }
}
