use crate::{
    circuit::{
        component::{
            Body, Component, EXTRACTOR_SIZE, Extractor, SINK_SIZE, SOURCE_SIZE, SPLITTER_SIZE,
            Sink, Source, Splitter,
        },
        port::{ComponentKind, ComponentRef, Port, PortId, PortRole},
        wire::{Wire, WireId},
    },
    foundation::{
        core::Point,
        error::{OledError, OledResult},
    },
    synth::pattern::ExtractionPattern,
};

/// Synthesis context: owns every port, component and wire of one circuit.
///
/// Collections only grow, in topology-build order. Ports and wires are referenced by index,
/// so the graph never holds pointers into itself.
#[derive(Clone, Debug)]
pub struct Circuit {
    ports: Vec<Port>,
    source: Source,
    splitters: Vec<Splitter>,
    extractors: Vec<Extractor>,
    sinks: Vec<Sink>,
    wires: Vec<Wire>,
}

impl Circuit {
    /// Create a circuit holding only the stream source with `fanout` outputs.
    pub fn new(source_origin: Point, fanout: usize) -> Self {
        let owner = ComponentRef {
            kind: ComponentKind::Source,
            index: 0,
        };
        let ports: Vec<Port> = (0..fanout)
            .map(|n| Port::new(owner, PortRole::SignalOut(n)))
            .collect();
        let outputs = (0..fanout).map(PortId).collect();
        Self {
            ports,
            source: Source {
                body: Body::new(source_origin, SOURCE_SIZE),
                outputs,
            },
            splitters: Vec::new(),
            extractors: Vec::new(),
            sinks: Vec::new(),
            wires: Vec::new(),
        }
    }

    fn add_port(&mut self, owner: ComponentRef, role: PortRole) -> PortId {
        self.ports.push(Port::new(owner, role));
        PortId(self.ports.len() - 1)
    }

    /// Add a fully instantiated splitter (both inputs, both branches).
    pub(crate) fn add_splitter(&mut self, origin: Point, branch_fanout: usize) -> usize {
        let owner = ComponentRef {
            kind: ComponentKind::Splitter,
            index: self.splitters.len(),
        };
        let input1 = self.add_port(owner, PortRole::SignalIn1);
        let input2 = self.add_port(owner, PortRole::SignalIn2);
        let branch1 = (0..branch_fanout)
            .map(|n| self.add_port(owner, PortRole::SignalOut1(n)))
            .collect();
        let branch2 = (0..branch_fanout)
            .map(|n| self.add_port(owner, PortRole::SignalOut2(n)))
            .collect();
        self.splitters.push(Splitter {
            body: Body::new(origin, SPLITTER_SIZE),
            input1,
            input2,
            branch1,
            branch2,
        });
        owner.index
    }

    pub(crate) fn add_extractor(
        &mut self,
        origin: Point,
        cell: (u32, u32),
        pattern: ExtractionPattern,
    ) -> usize {
        let owner = ComponentRef {
            kind: ComponentKind::Extractor,
            index: self.extractors.len(),
        };
        let input = self.add_port(owner, PortRole::SignalIn);
        let output = self.add_port(owner, PortRole::Extracted);
        self.extractors.push(Extractor {
            body: Body::new(origin, EXTRACTOR_SIZE),
            cell,
            input,
            output,
            pattern,
        });
        owner.index
    }

    pub(crate) fn add_sink(&mut self, origin: Point, cell: (u32, u32)) -> usize {
        let owner = ComponentRef {
            kind: ComponentKind::Sink,
            index: self.sinks.len(),
        };
        let input = self.add_port(owner, PortRole::SetColor);
        self.sinks.push(Sink {
            body: Body::new(origin, SINK_SIZE),
            cell,
            input,
        });
        owner.index
    }

    /// Place a wire between two free ports of two different components.
    pub(crate) fn connect(&mut self, start: PortId, end: PortId) -> OledResult<WireId> {
        let (a, b) = (self.port_checked(start)?, self.port_checked(end)?);
        if a.owner == b.owner {
            return Err(OledError::synthesis(format!(
                "wire would connect {:?} to itself ({} -> {})",
                a.owner, a.role, b.role
            )));
        }
        for (id, port) in [(start, a), (end, b)] {
            if port.is_connected() {
                return Err(OledError::synthesis(format!(
                    "port {} ({} on {:?}) already has a wire",
                    id.0, port.role, port.owner
                )));
            }
        }

        let wire = WireId(self.wires.len());
        self.wires.push(Wire {
            start,
            end,
            address: None,
        });
        self.ports[start.0].wire = Some(wire);
        self.ports[end.0].wire = Some(wire);
        Ok(wire)
    }

    fn port_checked(&self, id: PortId) -> OledResult<&Port> {
        self.ports
            .get(id.0)
            .ok_or_else(|| OledError::synthesis(format!("unknown port {}", id.0)))
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn splitters(&self) -> &[Splitter] {
        &self.splitters
    }

    pub fn extractors(&self) -> &[Extractor] {
        &self.extractors
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn port(&self, id: PortId) -> &Port {
        &self.ports[id.0]
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    pub(crate) fn splitters_mut(&mut self) -> &mut [Splitter] {
        &mut self.splitters
    }

    pub(crate) fn extractors_mut(&mut self) -> &mut [Extractor] {
        &mut self.extractors
    }

    pub(crate) fn sinks_mut(&mut self) -> &mut [Sink] {
        &mut self.sinks
    }

    pub(crate) fn wires_mut(&mut self) -> &mut [Wire] {
        &mut self.wires
    }

    pub(crate) fn port_mut(&mut self, id: PortId) -> &mut Port {
        &mut self.ports[id.0]
    }

    /// Body of the component owning `owner`.
    pub fn body_of(&self, owner: ComponentRef) -> &Body {
        match owner.kind {
            ComponentKind::Source => self.source.body(),
            ComponentKind::Splitter => self.splitters[owner.index].body(),
            ComponentKind::Extractor => self.extractors[owner.index].body(),
            ComponentKind::Sink => self.sinks[owner.index].body(),
        }
    }

    /// Rendered coordinate of a port, derived from its owner's placement.
    pub fn port_point(&self, id: PortId) -> Point {
        let port = self.port(id);
        self.body_of(port.owner).anchor(port.role.side())
    }

    /// `true` once the address assignor has run.
    pub fn is_addressed(&self) -> bool {
        self.wires.iter().all(|w| w.address.is_some())
            && self.splitters.iter().all(|c| c.body.id.is_some())
            && self.extractors.iter().all(|c| c.body.id.is_some())
            && self.sinks.iter().all(|c| c.body.id.is_some())
    }

    /// Verify port ownership and the wire invariants: distinct owners, back-links, and matching
    /// addresses.
    pub fn check_wires(&self) -> OledResult<()> {
        self.check_owned(std::slice::from_ref(&self.source))?;
        self.check_owned(&self.splitters)?;
        self.check_owned(&self.extractors)?;
        self.check_owned(&self.sinks)?;

        for (i, wire) in self.wires.iter().enumerate() {
            let (a, b) = (self.port(wire.start), self.port(wire.end));
            if a.owner == b.owner {
                return Err(OledError::synthesis(format!(
                    "wire {i} connects a component to itself"
                )));
            }
            for port in [a, b] {
                if port.wire != Some(WireId(i)) {
                    return Err(OledError::synthesis(format!(
                        "wire {i} endpoint {} does not link back to it",
                        port.role
                    )));
                }
                if port.address != wire.address {
                    return Err(OledError::synthesis(format!(
                        "wire {i} endpoint {} has address {:?}, wire has {:?}",
                        port.role, port.address, wire.address
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_owned<C: Component>(&self, components: &[C]) -> OledResult<()> {
        for (index, c) in components.iter().enumerate() {
            let owner = ComponentRef {
                kind: C::KIND,
                index,
            };
            for id in c.ports() {
                let port = self.port_checked(id)?;
                if port.owner != owner {
                    return Err(OledError::synthesis(format!(
                        "{:?} {index} lists port {} owned by {:?}",
                        C::KIND,
                        id.0,
                        port.owner
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/circuit/arena.rs"]
mod tests;
