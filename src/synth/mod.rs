//! Circuit synthesis: fan-out tree, per-cell wiring, extraction patterns and addressing.

pub(crate) mod assign;
pub(crate) mod cells;
pub(crate) mod fanout;
pub(crate) mod pattern;

use crate::{
    circuit::arena::Circuit,
    config::OledConfig,
    foundation::error::OledResult,
};

/// Build, wire and address the full circuit for `config`.
///
/// Deterministic: the same config always yields the same topology, patterns and identities.
#[tracing::instrument(skip(config), fields(width = config.width, height = config.height))]
pub fn synthesize(config: &OledConfig) -> OledResult<Circuit> {
    config.validate()?;
    let geom = config.geometry();
    let layout = &config.layout;

    let mut circuit = Circuit::new(layout.source_origin, config.source_fanout);
    let mut queue = fanout::build_fanout(
        &mut circuit,
        geom.frame_size(),
        config.branch_fanout,
        layout.splitter_origin,
    )?;
    cells::wire_cells(&mut circuit, &mut queue, geom, layout)?;

    let circuit = assign::assign_addresses(circuit, config.id_offset)?;
    circuit.check_wires()?;

    tracing::info!(
        splitters = circuit.splitters().len(),
        extractors = circuit.extractors().len(),
        sinks = circuit.sinks().len(),
        wires = circuit.wires().len(),
        "circuit synthesized"
    );
    Ok(circuit)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesize.rs"]
mod tests;
