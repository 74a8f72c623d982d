use std::collections::VecDeque;

use crate::{
    circuit::{arena::Circuit, port::PortId},
    config::LayoutConfig,
    foundation::{
        core::{FrameGeometry, Point},
        error::{OledError, OledResult},
    },
    synth::{fanout::pop_free, pattern::ExtractionPattern},
};

/// Screen position of cell `(x, y)` relative to `origin`; row 0 is the top row.
pub fn cell_origin(
    origin: Point,
    pitch: f64,
    geom: FrameGeometry,
    x: u32,
    y: u32,
) -> OledResult<Point> {
    if x >= geom.width || y >= geom.height {
        return Err(OledError::validation(format!(
            "cell ({x}, {y}) is outside the {}x{} screen",
            geom.width, geom.height
        )));
    }
    Ok(Point::new(
        origin.x + f64::from(x) * pitch,
        origin.y + f64::from(geom.height - 1 - y) * pitch,
    ))
}

/// Attach one extractor and one light per cell, in row-major order.
///
/// Each cell takes the oldest free fan-out port. Running out of ports means the tree builder
/// broke its guarantee and aborts synthesis.
#[tracing::instrument(skip(circuit, queue, layout))]
pub fn wire_cells(
    circuit: &mut Circuit,
    queue: &mut VecDeque<PortId>,
    geom: FrameGeometry,
    layout: &LayoutConfig,
) -> OledResult<()> {
    for (x, y) in geom.cells() {
        let feed = pop_free(queue)?;

        let pattern = ExtractionPattern::for_cell(geom, x, y)?;
        let origin = cell_origin(layout.extractor_origin, layout.cell_pitch, geom, x, y)?;
        let e = circuit.add_extractor(origin, (x, y), pattern);
        let (input, output) = {
            let ex = &circuit.extractors()[e];
            (ex.input, ex.output)
        };
        circuit.connect(feed, input)?;

        let origin = cell_origin(layout.sink_origin, layout.cell_pitch, geom, x, y)?;
        let s = circuit.add_sink(origin, (x, y));
        let set_color = circuit.sinks()[s].input;
        circuit.connect(output, set_color)?;
    }

    tracing::debug!(
        cells = geom.frame_size(),
        spare_ports = queue.len(),
        "cells wired"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/synth/cells.rs"]
mod tests;
