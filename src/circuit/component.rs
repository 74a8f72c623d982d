use crate::{
    circuit::port::{ComponentKind, PortId, PortSide},
    foundation::core::{Point, Size},
    synth::pattern::ExtractionPattern,
};

pub const SOURCE_SIZE: Size = Size::new(15.0, 14.0);
pub const SPLITTER_SIZE: Size = Size::new(15.0, 13.0);
pub const EXTRACTOR_SIZE: Size = Size::new(15.0, 13.0);
pub const SINK_SIZE: Size = Size::new(16.0, 16.0);

/// Placement and identity shared by every component variant.
///
/// `origin` is the top-left corner in layout space, where `y` grows upwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub origin: Point,
    pub size: Size,
    /// Assigned once, after the topology is frozen.
    pub id: Option<u32>,
}

impl Body {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            id: None,
        }
    }

    /// Rendered coordinate of a port: inputs on the left edge, outputs on the right edge.
    pub fn anchor(&self, side: PortSide) -> Point {
        let y = self.origin.y - self.size.height / 2.0;
        match side {
            PortSide::Input => Point::new(self.origin.x, y),
            PortSide::Output => Point::new(self.origin.x + self.size.width, y),
        }
    }
}

/// Behaviour common to all component variants.
pub trait Component {
    const KIND: ComponentKind;

    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Every port the component owns, connected or not.
    fn ports(&self) -> Vec<PortId>;
}

/// Single origin of the data stream.
#[derive(Clone, Debug)]
pub struct Source {
    pub body: Body,
    pub outputs: Vec<PortId>,
}

/// Two-input relay; each input drives its own branch of outputs.
#[derive(Clone, Debug)]
pub struct Splitter {
    pub body: Body,
    pub input1: PortId,
    pub input2: PortId,
    pub branch1: Vec<PortId>,
    pub branch2: Vec<PortId>,
}

/// Regex component pulling one cell's color out of the shared stream.
#[derive(Clone, Debug)]
pub struct Extractor {
    pub body: Body,
    pub cell: (u32, u32),
    pub input: PortId,
    pub output: PortId,
    pub pattern: ExtractionPattern,
}

/// Light showing one screen cell.
#[derive(Clone, Debug)]
pub struct Sink {
    pub body: Body,
    pub cell: (u32, u32),
    pub input: PortId,
}

impl Component for Source {
    const KIND: ComponentKind = ComponentKind::Source;

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn ports(&self) -> Vec<PortId> {
        self.outputs.clone()
    }
}

impl Component for Splitter {
    const KIND: ComponentKind = ComponentKind::Splitter;

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn ports(&self) -> Vec<PortId> {
        let mut ports = vec![self.input1, self.input2];
        ports.extend(&self.branch1);
        ports.extend(&self.branch2);
        ports
    }
}

impl Component for Extractor {
    const KIND: ComponentKind = ComponentKind::Extractor;

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn ports(&self) -> Vec<PortId> {
        vec![self.input, self.output]
    }
}

impl Component for Sink {
    const KIND: ComponentKind = ComponentKind::Sink;

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn ports(&self) -> Vec<PortId> {
        vec![self.input]
    }
}
