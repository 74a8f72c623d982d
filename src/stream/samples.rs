use std::{fs::File, io::Read, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    core::Rgb,
    error::{OledError, OledResult},
};

/// Split packed `rgb24` bytes (ffmpeg `-f rawvideo -pix_fmt rgb24`) into samples.
pub fn samples_from_rgb24(bytes: &[u8]) -> OledResult<Vec<Rgb>> {
    if !bytes.len().is_multiple_of(3) {
        return Err(OledError::validation(format!(
            "rgb24 data length {} is not a multiple of 3",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(3)
        .map(|px| Rgb([px[0], px[1], px[2]]))
        .collect())
}

/// Read every sample from an `rgb24` stream.
pub fn read_rgb24<R: Read>(mut r: R) -> OledResult<Vec<Rgb>> {
    let mut bytes = Vec::new();
    r.read_to_end(&mut bytes).context("read rgb24 samples")?;
    samples_from_rgb24(&bytes)
}

/// Read every sample from an `rgb24` file on disk.
pub fn read_rgb24_file(path: &Path) -> OledResult<Vec<Rgb>> {
    let f = File::open(path).with_context(|| format!("open rgb24 file '{}'", path.display()))?;
    read_rgb24(std::io::BufReader::new(f))
}
