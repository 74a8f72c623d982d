use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::Fps,
    error::{OledError, OledResult},
};

/// Separator between caption records; never appears inside caption text.
pub const CAPTION_SEPARATOR: char = '~';

/// One already-timed caption.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaptionEvent {
    /// Display start, in seconds from the beginning of the video.
    pub start_secs: f64,
    /// Caption text; each line becomes its own record.
    pub text: String,
}

/// Parse caption events from a JSON array.
pub fn read_captions<R: std::io::Read>(r: R) -> OledResult<Vec<CaptionEvent>> {
    serde_json::from_reader(r).map_err(|e| OledError::serde(format!("parse captions JSON: {e}")))
}

/// Parse caption events from a JSON file on disk.
pub fn read_captions_file(path: &Path) -> OledResult<Vec<CaptionEvent>> {
    let f = File::open(path).map_err(|e| {
        OledError::validation(format!("open captions JSON '{}': {e}", path.display()))
    })?;
    read_captions(BufReader::new(f))
}

/// Encode captions as `~` followed by one `"{frame} {line}~"` record per text line.
///
/// `frame` is the start time floored to the sampling frame rate.
pub fn encode_captions(events: &[CaptionEvent], fps: Fps) -> OledResult<String> {
    let mut out = String::from(CAPTION_SEPARATOR);
    for ev in events {
        if !ev.start_secs.is_finite() {
            return Err(OledError::validation(format!(
                "caption '{}' has a non-finite start time",
                ev.text
            )));
        }
        let frame = fps.secs_to_frames_floor(ev.start_secs);
        let text = ev.text.replace(CAPTION_SEPARATOR, "-");
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            out.push_str(&format!("{frame} {line}{CAPTION_SEPARATOR}"));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/stream/captions.rs"]
mod tests;
