use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::{Fps, FrameGeometry, Point},
    error::{OledError, OledResult},
};

/// First identity handed out by the address assignor.
pub const DEFAULT_ID_OFFSET: u32 = 62;
/// Upper bound on the number of frames the runtime can address.
pub const DEFAULT_MAX_FRAMES: u64 = 16_777_216;

/// Synthesis and encoding settings.
///
/// Every field has a default, so a config file only needs to list what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OledConfig {
    /// Screen width in cells.
    pub width: u32,
    /// Screen height in cells.
    pub height: u32,
    /// Sampling frame rate.
    pub fps: Fps,
    /// First assigned component/wire identity.
    pub id_offset: u32,
    /// Maximum number of frames in the video stream.
    pub max_frames: u64,
    /// Output ports on the stream source.
    pub source_fanout: usize,
    /// Output ports per splitter branch (each splitter has two branches).
    pub branch_fanout: usize,
    /// Where components are placed in the assembly.
    pub layout: LayoutConfig,
}

/// Placement of every component kind in layout space.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Top-left corner of the stream source.
    pub source_origin: Point,
    /// Top-left corner shared by all splitters.
    pub splitter_origin: Point,
    /// Top-left corner of the extractor for cell `(0, HEIGHT-1)`.
    pub extractor_origin: Point,
    /// Top-left corner of the light for cell `(0, HEIGHT-1)`.
    pub sink_origin: Point,
    /// Distance between neighbouring cells.
    pub cell_pitch: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_origin: Point::new(-224.0, 71.0),
            splitter_origin: Point::new(-207.0, 88.0),
            extractor_origin: Point::new(-192.0, 103.0),
            sink_origin: Point::new(-192.0, 103.0),
            cell_pitch: 16.0,
        }
    }
}

impl Default for OledConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 18,
            fps: Fps { num: 8, den: 1 },
            id_offset: DEFAULT_ID_OFFSET,
            max_frames: DEFAULT_MAX_FRAMES,
            source_fanout: 5,
            branch_fanout: 5,
            layout: LayoutConfig::default(),
        }
    }
}

impl OledConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> OledResult<Self> {
        serde_json::from_reader(r).map_err(|e| OledError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> OledResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            OledError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Screen geometry described by this config.
    pub fn geometry(&self) -> FrameGeometry {
        FrameGeometry {
            width: self.width,
            height: self.height,
            fps: self.fps,
        }
    }

    /// Check every field that synthesis relies on.
    pub fn validate(&self) -> OledResult<()> {
        self.geometry().validate()?;
        if self.source_fanout < 2 {
            // With one source port the first splitter would have to feed itself.
            return Err(OledError::validation("source_fanout must be >= 2"));
        }
        if self.branch_fanout < 2 {
            // A branch of one port would consume as many ports as it frees.
            return Err(OledError::validation("branch_fanout must be >= 2"));
        }
        if self.max_frames == 0 {
            return Err(OledError::validation("max_frames must be >= 1"));
        }
        if !(self.layout.cell_pitch.is_finite() && self.layout.cell_pitch > 0.0) {
            return Err(OledError::validation("layout cell_pitch must be finite and > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
