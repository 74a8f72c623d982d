use super::*;
use crate::{config::OledConfig, synth::synthesize};

fn circuit(width: u32, height: u32) -> Circuit {
    synthesize(&OledConfig {
        width,
        height,
        ..OledConfig::default()
    })
    .unwrap()
}

#[test]
fn two_by_one_record() {
    let rec = CircuitRecord::from_circuit(&circuit(2, 1)).unwrap();
    assert_eq!(rec.source_out, vec![Some(66), Some(68), None, None, None]);
    assert!(rec.splitters.is_empty());

    assert_eq!(rec.extractors[0].id, 62);
    assert_eq!(rec.extractors[0].input, Some(66));
    assert_eq!(rec.extractors[0].output, Some(67));
    assert_eq!(rec.extractors[1].cell, [1, 0]);
    assert_eq!(
        rec.extractors[1].pattern,
        r"^(?:.{1})(?<px>.)(?:.{8})*?\k<px>(?<out>.{7})"
    );

    assert_eq!(rec.sinks[0].id, 64);
    assert_eq!(rec.sinks[0].input, Some(67));
    assert_eq!(rec.sinks[1].position, Point::new(-176.0, 103.0));

    let ids: Vec<u32> = rec.wires.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![66, 67, 68, 69]);
}

#[test]
fn wire_geometry_matches_ports() {
    let rec = CircuitRecord::from_circuit(&circuit(2, 1)).unwrap();
    let w = &rec.wires[1];
    // Extractor (0,0) output to light (0,0) input.
    assert_eq!(w.endpoints, [Point::new(-177.0, 96.5), Point::new(-192.0, 95.0)]);
    assert_eq!(w.midpoint, Point::new(-184.5, 95.75));
}

#[test]
fn one_input_splitter_lists_only_connected_outputs() {
    let c = circuit(3, 3);
    let rec = CircuitRecord::from_circuit(&c).unwrap();
    let s = &rec.splitters[0];
    assert!(s.input1.is_some());
    assert_eq!(s.input2, None);
    assert!(s.branch2.is_empty());
    assert_eq!(s.branch1.len(), 5);
    assert_eq!(s.position, Point::new(-207.0, 88.0));
}

#[test]
fn unaddressed_circuit_is_refused() {
    let c = Circuit::new(Point::ZERO, 1);
    let mut c2 = c.clone();
    c2.add_sink(Point::ZERO, (0, 0));
    assert!(CircuitRecord::from_circuit(&c2).is_err());
    // No components and no wires counts as addressed.
    assert!(CircuitRecord::from_circuit(&c).is_ok());
}

#[test]
fn record_serializes_to_json() {
    let rec = CircuitRecord::from_circuit(&circuit(2, 2)).unwrap();
    let s = serde_json::to_string(&rec).unwrap();
    let de: CircuitRecord = serde_json::from_str(&s).unwrap();
    assert_eq!(de, rec);
}
