use crate::{
    circuit::{arena::Circuit, component::Component},
    foundation::error::{OledError, OledResult},
};

/// Hands out identities in a fixed precedence: splitters, extractors, lights, then wires.
///
/// Identities start at `base` and increase by one with no gaps. The renderer refers to
/// components by these numbers, so the order is part of the output format.
#[tracing::instrument(skip(circuit))]
pub fn assign_addresses(mut circuit: Circuit, base: u32) -> OledResult<Circuit> {
    let mut next = IdSource { next: base };

    claim_all(circuit.splitters_mut(), &mut next)?;
    claim_all(circuit.extractors_mut(), &mut next)?;
    claim_all(circuit.sinks_mut(), &mut next)?;

    let mut endpoints = Vec::with_capacity(circuit.wires().len());
    for wire in circuit.wires_mut() {
        if wire.address.is_some() {
            return Err(OledError::synthesis("wire already has an address"));
        }
        let id = next.take()?;
        wire.address = Some(id);
        endpoints.push((wire.start, wire.end, id));
    }
    for (start, end, id) in endpoints {
        circuit.port_mut(start).address = Some(id);
        circuit.port_mut(end).address = Some(id);
    }

    tracing::debug!(first = base, next = next.next, "addresses assigned");
    Ok(circuit)
}

struct IdSource {
    next: u32,
}

impl IdSource {
    fn take(&mut self) -> OledResult<u32> {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .ok_or_else(|| OledError::synthesis("identity space exhausted"))?;
        Ok(id)
    }
}

fn claim_all<C: Component>(components: &mut [C], ids: &mut IdSource) -> OledResult<()> {
    for (i, c) in components.iter_mut().enumerate() {
        let body = c.body_mut();
        if body.id.is_some() {
            return Err(OledError::synthesis(format!(
                "{:?} {i} already has an identity",
                C::KIND
            )));
        }
        body.id = Some(ids.take()?);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/synth/assign.rs"]
mod tests;
