//! Serializable output handed to the item assembly renderer.

pub(crate) mod records;

use std::path::Path;

use crate::{
    bundle::records::CircuitRecord,
    foundation::{
        core::FrameGeometry,
        error::{OledError, OledResult},
    },
};

/// Frame and buffer sizes plus the helper patterns the runtime uses to slice the stream.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometryRecord {
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
    pub frame_length: usize,
    pub buffer_length: u64,
    /// One frame plus the color dictionary.
    pub concat_length: usize,
    pub frame_pattern: String,
    pub frame_remover_pattern: String,
    pub buffer_pattern: String,
    pub buffer_remover_pattern: String,
    pub frame_empty_pattern: String,
}

impl GeometryRecord {
    pub fn new(geom: FrameGeometry, dictionary_length: usize) -> Self {
        let frame = geom.frame_size();
        let buffer = geom.buffer_size();
        Self {
            width: geom.width,
            height: geom.height,
            frame_rate: geom.fps.as_f64(),
            frame_length: frame,
            buffer_length: buffer,
            concat_length: frame + dictionary_length,
            frame_pattern: format!("^(?<out>.{{{frame}}})"),
            frame_remover_pattern: format!("^.{{{frame}}}(?<out>.+)"),
            buffer_pattern: format!("^(?<out>.{{{frame},{buffer}}})"),
            buffer_remover_pattern: format!("^.{{{buffer}}}(?<out>.+)"),
            frame_empty_pattern: format!("^.{{{frame}}}$"),
        }
    }
}

/// Everything the renderer needs to produce the item assembly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bundle {
    pub filename: String,
    pub item_description: String,
    pub geometry: GeometryRecord,
    pub video_data: String,
    pub video_data_length: usize,
    pub dictionary: String,
    pub dictionary_length: usize,
    pub caption_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions_length: Option<usize>,
    pub circuit: CircuitRecord,
}

impl Bundle {
    /// Output name derived from the source video's file stem.
    pub fn filename_for(source_name: &str) -> String {
        let stem = Path::new(source_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_name.to_string());
        format!("oled_{stem}")
    }

    pub fn description_for(source_name: &str, geom: FrameGeometry) -> String {
        format!(
            "A {}x{} OLED screen with a video generated from {source_name}",
            geom.width, geom.height
        )
    }

    pub fn to_json_pretty(&self) -> OledResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OledError::serde(format!("serialize bundle: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bundle/geometry.rs"]
mod tests;
