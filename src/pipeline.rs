use crate::{
    bundle::{Bundle, GeometryRecord, records::CircuitRecord},
    config::OledConfig,
    foundation::{core::Rgb, error::OledResult},
    stream::{
        captions::{CaptionEvent, encode_captions},
        encode::encode_stream,
        palette::Palette,
    },
    synth::synthesize,
};

/// Turn sampled frames (and optional captions) into a renderer bundle.
///
/// Order matters: the frame budget is checked while encoding the stream, before the circuit is
/// synthesized.
#[tracing::instrument(skip(config, samples, captions), fields(samples = samples.len()))]
pub fn build_bundle(
    config: &OledConfig,
    source_name: &str,
    samples: &[Rgb],
    captions: Option<&[CaptionEvent]>,
) -> OledResult<Bundle> {
    config.validate()?;
    let geom = config.geometry();

    let palette = Palette::by_frequency(samples)?;
    let stream = encode_stream(samples, &palette, geom, config.max_frames)?;
    let dictionary = palette.dictionary();
    tracing::info!(
        colors = palette.len(),
        frames = stream.frames,
        "stream encoded"
    );

    let captions = captions
        .map(|events| encode_captions(events, geom.fps))
        .transpose()?;

    let circuit = synthesize(config)?;
    let circuit = CircuitRecord::from_circuit(&circuit)?;

    Ok(Bundle {
        filename: Bundle::filename_for(source_name),
        item_description: Bundle::description_for(source_name, geom),
        geometry: GeometryRecord::new(geom, dictionary.len()),
        video_data_length: stream.len(),
        video_data: stream.data,
        dictionary_length: dictionary.len(),
        dictionary,
        caption_enabled: captions.is_some(),
        captions_length: captions.as_ref().map(|c| c.chars().count()),
        captions,
        circuit,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
