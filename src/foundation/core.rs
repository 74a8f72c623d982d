use crate::foundation::error::{OledError, OledResult};

pub use kurbo::{Point, Size};

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> OledResult<Self> {
        if den == 0 {
            return Err(OledError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(OledError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Re-check a value that bypassed [`Fps::new`] (e.g. deserialized).
    pub fn validate(self) -> OledResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// One sampled pixel color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Lowercase `#rrggbb` form used by the color dictionary.
    pub fn hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Screen geometry shared by the stream encoder, the synthesizer and the bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameGeometry {
    /// Screen width in cells.
    pub width: u32,
    /// Screen height in cells.
    pub height: u32,
    /// Sampling frame rate.
    pub fps: Fps,
}

impl FrameGeometry {
    /// Create a validated geometry.
    pub fn new(width: u32, height: u32, fps: Fps) -> OledResult<Self> {
        let geom = Self { width, height, fps };
        geom.validate()?;
        Ok(geom)
    }

    /// Reject empty screens, invalid frame rates and sizes that overflow.
    pub fn validate(self) -> OledResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OledError::validation("screen width/height must be > 0"));
        }
        self.fps.validate()?;
        usize::try_from(u64::from(self.width) * u64::from(self.height))
            .map_err(|_| OledError::validation("screen cell count does not fit in usize"))?;
        if self.checked_buffer_size().is_none() {
            return Err(OledError::validation(format!(
                "one minute of {}x{} frames at {} fps does not fit in u64",
                self.width,
                self.height,
                self.fps.as_f64()
            )));
        }
        Ok(())
    }

    /// Characters per frame, one per cell.
    pub fn frame_size(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Characters buffered at runtime: one minute worth of frames.
    ///
    /// Saturates at `u64::MAX`; [`FrameGeometry::validate`] rejects geometries where it would.
    pub fn buffer_size(self) -> u64 {
        self.checked_buffer_size().unwrap_or(u64::MAX)
    }

    fn checked_buffer_size(self) -> Option<u64> {
        (self.frame_size() as u64).checked_mul(self.fps.secs_to_frames_floor(60.0).max(1))
    }

    /// Longest stream that `max_frames` frames can address.
    pub fn max_stream_len(self, max_frames: u64) -> u64 {
        max_frames.saturating_mul(self.frame_size() as u64)
    }

    /// Position of cell `(x, y)` inside one frame.
    pub fn cell_offset(self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// All cells in row-major order (`y` outer, `x` inner).
    pub fn cells(self) -> impl Iterator<Item = (u32, u32)> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
