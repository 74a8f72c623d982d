//! Character stream side of the artifact: palette, encoded frames and the caption track.

pub(crate) mod captions;
pub(crate) mod encode;
pub(crate) mod palette;
pub(crate) mod samples;
