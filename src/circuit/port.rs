use std::fmt;

use crate::circuit::wire::WireId;

/// Index of a port inside a [`crate::Circuit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(pub usize);

/// Component variant tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ComponentKind {
    Source,
    Splitter,
    Extractor,
    Sink,
}

/// Stable reference to a component: its kind plus creation index within that kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    pub kind: ComponentKind,
    pub index: usize,
}

/// Which edge of its component a port sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortSide {
    Input,
    Output,
}

/// Role of a port on its component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortRole {
    /// One of the stream source's fan-out outputs.
    SignalOut(usize),
    /// First splitter input, feeding branch one.
    SignalIn1,
    /// Second splitter input, feeding branch two.
    SignalIn2,
    /// Output `n` of splitter branch one.
    SignalOut1(usize),
    /// Output `n` of splitter branch two.
    SignalOut2(usize),
    /// Extractor input.
    SignalIn,
    /// Extractor output.
    Extracted,
    /// Light color input.
    SetColor,
}

impl PortRole {
    pub fn side(self) -> PortSide {
        match self {
            Self::SignalIn1 | Self::SignalIn2 | Self::SignalIn | Self::SetColor => PortSide::Input,
            Self::SignalOut(_) | Self::SignalOut1(_) | Self::SignalOut2(_) | Self::Extracted => {
                PortSide::Output
            }
        }
    }
}

impl fmt::Display for PortRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignalOut(n) => write!(f, "signal_out-{n}"),
            Self::SignalIn1 => f.write_str("signal_in1"),
            Self::SignalIn2 => f.write_str("signal_in2"),
            Self::SignalOut1(n) => write!(f, "signal_out1-{n}"),
            Self::SignalOut2(n) => write!(f, "signal_out2-{n}"),
            Self::SignalIn => f.write_str("signal_in"),
            Self::Extracted => f.write_str("signal_out"),
            Self::SetColor => f.write_str("set_color"),
        }
    }
}

/// Single-use connection point owned by exactly one component.
#[derive(Clone, Debug)]
pub struct Port {
    pub owner: ComponentRef,
    pub role: PortRole,
    /// Wire terminating here, set when the wire is placed.
    pub wire: Option<WireId>,
    /// Identity of that wire, set by the address assignor.
    pub address: Option<u32>,
}

impl Port {
    pub(crate) fn new(owner: ComponentRef, role: PortRole) -> Self {
        Self {
            owner,
            role,
            wire: None,
            address: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wire.is_some()
    }
}
