//! Arena model of the synthesized circuit: ports, wires and the four component variants.

pub(crate) mod arena;
pub(crate) mod component;
pub(crate) mod port;
pub(crate) mod wire;
