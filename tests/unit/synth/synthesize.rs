use super::*;

fn config(width: u32, height: u32) -> OledConfig {
    OledConfig {
        width,
        height,
        ..OledConfig::default()
    }
}

#[test]
fn two_by_one_scenario() {
    let c = synthesize(&config(2, 1)).unwrap();
    assert!(c.splitters().is_empty());
    assert_eq!(c.extractors().len(), 2);
    assert_eq!(c.sinks().len(), 2);

    let p0 = c.extractors()[0].pattern;
    let p1 = c.extractors()[1].pattern;
    assert_eq!((p0.offset, p0.tail), (0, 1));
    assert_eq!((p1.offset, p1.tail), (1, 0));

    // Extractors 62..64, lights 64..66, wires 66..70.
    assert_eq!(c.extractors()[0].body.id, Some(62));
    assert_eq!(c.sinks()[1].body.id, Some(65));
    assert_eq!(c.wires()[3].address, Some(69));
}

#[test]
fn single_cell_scenario() {
    let c = synthesize(&config(1, 1)).unwrap();
    assert!(c.splitters().is_empty());
    assert_eq!(c.extractors().len(), 1);
    let p = c.extractors()[0].pattern;
    assert_eq!((p.offset, p.tail), (0, 0));
    assert_eq!(p.render(), r"^(?<px>.)(?:.{8})*?\k<px>(?<out>.{7})");
}

#[test]
fn default_screen_counts() {
    let c = synthesize(&OledConfig::default()).unwrap();
    assert_eq!(c.splitters().len(), 72);
    assert_eq!(c.extractors().len(), 576);
    assert_eq!(c.sinks().len(), 576);

    let splitter_inputs = c
        .splitters()
        .iter()
        .filter(|s| c.port(s.input2).is_connected())
        .count()
        + c.splitters().len();
    assert_eq!(c.wires().len(), splitter_inputs + 2 * 576);
}

#[test]
fn synthesis_is_deterministic() {
    let cfg = config(7, 5);
    let a = synthesize(&cfg).unwrap();
    let b = synthesize(&cfg).unwrap();
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}

#[test]
fn invalid_config_is_rejected_before_building() {
    let err = synthesize(&config(0, 3)).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}
