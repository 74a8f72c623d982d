use std::collections::VecDeque;

use crate::{
    circuit::{arena::Circuit, port::PortId},
    foundation::{
        core::Point,
        error::{OledError, OledResult},
    },
};

/// Number of splitters the breadth-first builder attaches.
///
/// Every splitter that receives both inputs frees `2 * branch_fanout - 2` ports, so this is the
/// smallest `n` with `source_fanout + (2 * branch_fanout - 2) * n >= consumers`.
pub fn splitter_count(consumers: usize, source_fanout: usize, branch_fanout: usize) -> usize {
    let gain = 2 * branch_fanout.saturating_sub(1);
    if consumers <= source_fanout || gain == 0 {
        return 0;
    }
    (consumers - source_fanout).div_ceil(gain)
}

/// Grow a breadth-first splitter tree until at least `consumers` output ports are free.
///
/// The queue is seeded with the source outputs. Each new splitter takes the oldest free port on
/// its first input and appends its first branch; its second input is only wired (and its second
/// branch only appended) while the queue is still short. An unwired second input leaves an idle
/// branch that no consumer is ever attached to.
#[tracing::instrument(skip(circuit))]
pub fn build_fanout(
    circuit: &mut Circuit,
    consumers: usize,
    branch_fanout: usize,
    splitter_origin: Point,
) -> OledResult<VecDeque<PortId>> {
    if branch_fanout < 2 {
        return Err(OledError::validation("branch_fanout must be >= 2"));
    }
    if circuit.source().outputs.len() < 2 {
        return Err(OledError::validation("source needs at least 2 outputs to grow a tree"));
    }

    let mut queue: VecDeque<PortId> = circuit.source().outputs.iter().copied().collect();
    while queue.len() < consumers {
        let idx = circuit.add_splitter(splitter_origin, branch_fanout);
        let (input1, input2) = {
            let s = &circuit.splitters()[idx];
            (s.input1, s.input2)
        };

        let feed = pop_free(&mut queue)?;
        circuit.connect(feed, input1)?;
        queue.extend(circuit.splitters()[idx].branch1.iter().copied());

        if queue.len() < consumers {
            let feed = pop_free(&mut queue)?;
            circuit.connect(feed, input2)?;
            queue.extend(circuit.splitters()[idx].branch2.iter().copied());
        } else {
            tracing::debug!(splitter = idx, "second input left unwired");
        }
    }

    tracing::debug!(
        splitters = circuit.splitters().len(),
        free_ports = queue.len(),
        "fan-out tree built"
    );
    Ok(queue)
}

pub(crate) fn pop_free(queue: &mut VecDeque<PortId>) -> OledResult<PortId> {
    queue
        .pop_front()
        .ok_or_else(|| OledError::synthesis("fan-out queue exhausted"))
}

#[cfg(test)]
#[path = "../../tests/unit/synth/fanout.rs"]
mod tests;
