use crate::{
    circuit::{
        arena::Circuit,
        component::{Component, Extractor, Sink, Source, Splitter},
        port::PortId,
        wire::Wire,
    },
    foundation::{
        core::Point,
        error::{OledError, OledResult},
    },
};

/// Serialize-to-bundle capability, one implementation per circuit element.
pub trait ToRecord {
    type Record: serde::Serialize;

    fn to_record(&self, circuit: &Circuit) -> OledResult<Self::Record>;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SplitterRecord {
    pub id: u32,
    pub position: Point,
    /// `None` when the input is unwired.
    pub input1: Option<u32>,
    pub input2: Option<u32>,
    /// Wire addresses of connected branch outputs only.
    pub branch1: Vec<u32>,
    pub branch2: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExtractorRecord {
    pub id: u32,
    pub position: Point,
    pub cell: [u32; 2],
    pub input: Option<u32>,
    pub output: Option<u32>,
    pub pattern: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SinkRecord {
    pub id: u32,
    pub position: Point,
    pub cell: [u32; 2],
    pub input: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WireRecord {
    pub id: u32,
    pub midpoint: Point,
    pub endpoints: [Point; 2],
}

/// Every circuit element, in identity order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircuitRecord {
    /// Wire address per source output, `None` for unused outputs.
    pub source_out: Vec<Option<u32>>,
    pub splitters: Vec<SplitterRecord>,
    pub extractors: Vec<ExtractorRecord>,
    pub sinks: Vec<SinkRecord>,
    pub wires: Vec<WireRecord>,
}

impl CircuitRecord {
    /// Snapshot an addressed circuit.
    pub fn from_circuit(circuit: &Circuit) -> OledResult<Self> {
        if !circuit.is_addressed() {
            return Err(OledError::synthesis(
                "circuit must be addressed before it is recorded",
            ));
        }
        Ok(Self {
            source_out: circuit.source().to_record(circuit)?,
            splitters: records(circuit.splitters(), circuit)?,
            extractors: records(circuit.extractors(), circuit)?,
            sinks: records(circuit.sinks(), circuit)?,
            wires: records(circuit.wires(), circuit)?,
        })
    }
}

fn records<T: ToRecord>(items: &[T], circuit: &Circuit) -> OledResult<Vec<T::Record>> {
    items.iter().map(|item| item.to_record(circuit)).collect()
}

fn identity<C: Component>(c: &C) -> OledResult<u32> {
    c.body()
        .id
        .ok_or_else(|| OledError::synthesis(format!("{:?} has no identity", C::KIND)))
}

fn address(circuit: &Circuit, port: PortId) -> Option<u32> {
    circuit.port(port).address
}

fn connected(circuit: &Circuit, ports: &[PortId]) -> Vec<u32> {
    ports.iter().filter_map(|p| address(circuit, *p)).collect()
}

impl ToRecord for Source {
    type Record = Vec<Option<u32>>;

    fn to_record(&self, circuit: &Circuit) -> OledResult<Self::Record> {
        Ok(self.outputs.iter().map(|p| address(circuit, *p)).collect())
    }
}

impl ToRecord for Splitter {
    type Record = SplitterRecord;

    fn to_record(&self, circuit: &Circuit) -> OledResult<Self::Record> {
        Ok(SplitterRecord {
            id: identity(self)?,
            position: self.body.origin,
            input1: address(circuit, self.input1),
            input2: address(circuit, self.input2),
            branch1: connected(circuit, &self.branch1),
            branch2: connected(circuit, &self.branch2),
        })
    }
}

impl ToRecord for Extractor {
    type Record = ExtractorRecord;

    fn to_record(&self, circuit: &Circuit) -> OledResult<Self::Record> {
        Ok(ExtractorRecord {
            id: identity(self)?,
            position: self.body.origin,
            cell: [self.cell.0, self.cell.1],
            input: address(circuit, self.input),
            output: address(circuit, self.output),
            pattern: self.pattern.render(),
        })
    }
}

impl ToRecord for Sink {
    type Record = SinkRecord;

    fn to_record(&self, circuit: &Circuit) -> OledResult<Self::Record> {
        Ok(SinkRecord {
            id: identity(self)?,
            position: self.body.origin,
            cell: [self.cell.0, self.cell.1],
            input: address(circuit, self.input),
        })
    }
}

impl ToRecord for Wire {
    type Record = WireRecord;

    fn to_record(&self, circuit: &Circuit) -> OledResult<Self::Record> {
        let id = self
            .address
            .ok_or_else(|| OledError::synthesis("wire has no address"))?;
        let (a, b) = (circuit.port_point(self.start), circuit.port_point(self.end));
        Ok(WireRecord {
            id,
            midpoint: a.midpoint(b),
            endpoints: [a, b],
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bundle/records.rs"]
mod tests;
