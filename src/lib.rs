//! oledcast turns a sampled video into the data bundle for an in-game OLED screen.
//!
//! The pipeline has two halves:
//!
//! - Encode frames into a character stream plus a `c#rrggbb` color dictionary
//! - Synthesize the splitter/extractor/light circuit that decodes one frame per tick
//!
//! [`build_bundle`] runs both and returns a serializable [`Bundle`].
#![forbid(unsafe_code)]

mod bundle;
mod circuit;
mod foundation;
mod stream;
mod synth;

/// Screen, limits and layout configuration.
pub mod config;
/// End-to-end bundle construction.
pub mod pipeline;

pub use crate::foundation::core::{Fps, FrameGeometry, Point, Rgb, Size};
pub use crate::foundation::error::{OledError, OledResult};

pub use crate::bundle::records::{
    CircuitRecord, ExtractorRecord, SinkRecord, SplitterRecord, ToRecord, WireRecord,
};
pub use crate::bundle::{Bundle, GeometryRecord};
pub use crate::circuit::arena::Circuit;
pub use crate::circuit::component::{
    Body, Component, EXTRACTOR_SIZE, Extractor, SINK_SIZE, SOURCE_SIZE, SPLITTER_SIZE, Sink,
    Source, Splitter,
};
pub use crate::circuit::port::{ComponentKind, ComponentRef, Port, PortId, PortRole, PortSide};
pub use crate::circuit::wire::{Wire, WireId};
pub use crate::config::{LayoutConfig, OledConfig};
pub use crate::pipeline::build_bundle;
pub use crate::stream::captions::{
    CAPTION_SEPARATOR, CaptionEvent, encode_captions, read_captions, read_captions_file,
};
pub use crate::stream::encode::{VideoStream, encode_stream};
pub use crate::stream::palette::{Palette, RESERVED_MARKUP, alphabet};
pub use crate::stream::samples::{read_rgb24, read_rgb24_file, samples_from_rgb24};
pub use crate::synth::assign::assign_addresses;
pub use crate::synth::cells::{cell_origin, wire_cells};
pub use crate::synth::fanout::{build_fanout, splitter_count};
pub use crate::synth::pattern::{CAPTURE_LEN, ENTRY_LEN, ExtractionPattern};
pub use crate::synth::synthesize;
