use crate::circuit::port::PortId;

/// Index of a wire inside a [`crate::Circuit`], in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireId(pub usize);

/// Undirected link between two ports of two different components.
#[derive(Clone, Debug)]
pub struct Wire {
    pub start: PortId,
    pub end: PortId,
    /// Assigned identity; `None` until address assignment.
    pub address: Option<u32>,
}
