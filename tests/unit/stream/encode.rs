use super::*;
use crate::foundation::core::Fps;

const BLACK: Rgb = Rgb([0, 0, 0]);
const WHITE: Rgb = Rgb([255, 255, 255]);

fn geom(width: u32, height: u32) -> FrameGeometry {
    FrameGeometry::new(width, height, Fps::new(8, 1).unwrap()).unwrap()
}

#[test]
fn encodes_one_symbol_per_sample() {
    let samples = [BLACK, WHITE, BLACK, BLACK];
    let palette = Palette::by_frequency(&samples).unwrap();
    let stream = encode_stream(&samples, &palette, geom(2, 1), 16).unwrap();
    assert_eq!(stream.data, " !  ");
    assert_eq!(stream.len(), 4);
    assert_eq!(stream.frames, 2);
    assert_eq!(stream.frame(geom(2, 1), 1), Some("  "));
    assert_eq!(stream.frame(geom(2, 1), 2), None);
}

#[test]
fn partial_frames_are_rejected() {
    let samples = [BLACK, WHITE, BLACK];
    let palette = Palette::by_frequency(&samples).unwrap();
    assert!(encode_stream(&samples, &palette, geom(2, 1), 16).is_err());
}

#[test]
fn frame_budget_is_enforced() {
    let samples = vec![BLACK; 6];
    let palette = Palette::by_frequency(&samples).unwrap();

    let err = encode_stream(&samples, &palette, geom(2, 1), 2).unwrap_err();
    assert!(err.to_string().contains("capacity error:"));

    let ok = encode_stream(&samples, &palette, geom(2, 1), 3).unwrap();
    assert_eq!(ok.frames, 3);
}

#[test]
fn unknown_colors_are_rejected() {
    let palette = Palette::by_frequency(&[BLACK]).unwrap();
    let err = encode_stream(&[BLACK, WHITE], &palette, geom(2, 1), 16).unwrap_err();
    assert!(err.to_string().contains("#ffffff"));
}

#[test]
fn empty_input_is_an_empty_stream() {
    let palette = Palette::by_frequency(&[]).unwrap();
    let stream = encode_stream(&[], &palette, geom(2, 1), 16).unwrap();
    assert!(stream.is_empty());
    assert_eq!(stream.frames, 0);
}
