use crate::{
    foundation::{
        core::{FrameGeometry, Rgb},
        error::{OledError, OledResult},
    },
    stream::palette::Palette,
};

/// Palette-encoded video: one symbol per cell, frames back to back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoStream {
    pub data: String,
    pub frames: u64,
}

impl VideoStream {
    /// Length in characters (the alphabet is ASCII, so also in bytes).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Frame `index` as a slice of the stream.
    pub fn frame(&self, geom: FrameGeometry, index: u64) -> Option<&str> {
        let size = geom.frame_size();
        let start = usize::try_from(index).ok()?.checked_mul(size)?;
        self.data.get(start..start.checked_add(size)?)
    }
}

/// Encode `samples` with `palette`, enforcing the addressable frame budget.
///
/// The budget check runs before any character is produced, so an oversized input fails fast.
#[tracing::instrument(skip(samples, palette), fields(samples = samples.len()))]
pub fn encode_stream(
    samples: &[Rgb],
    palette: &Palette,
    geom: FrameGeometry,
    max_frames: u64,
) -> OledResult<VideoStream> {
    let frame_size = geom.frame_size();
    if !samples.len().is_multiple_of(frame_size) {
        return Err(OledError::validation(format!(
            "{} samples do not form whole {}x{} frames",
            samples.len(),
            geom.width,
            geom.height
        )));
    }
    let max_len = geom.max_stream_len(max_frames);
    if samples.len() as u64 > max_len {
        return Err(OledError::capacity(format!(
            "stream of {} characters exceeds the {max_frames}-frame limit ({max_len} characters)",
            samples.len()
        )));
    }

    let mut data = String::with_capacity(samples.len());
    for (i, px) in samples.iter().enumerate() {
        let c = palette.symbol(*px).ok_or_else(|| {
            OledError::validation(format!("sample {i} ({}) is not in the palette", px.hex()))
        })?;
        data.push(c);
    }

    let frames = (samples.len() / frame_size) as u64;
    tracing::debug!(frames, "video stream encoded");
    Ok(VideoStream { data, frames })
}

#[cfg(test)]
#[path = "../../tests/unit/stream/encode.rs"]
mod tests;
