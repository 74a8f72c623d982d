use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(8, 0).is_err());
    assert!(Fps { num: 8, den: 0 }.validate().is_err());
}

#[test]
fn fps_floor_conversion() {
    let fps = Fps::new(8, 1).unwrap();
    assert_eq!(fps.secs_to_frames_floor(1.49), 11);
    assert_eq!(fps.secs_to_frames_floor(-3.0), 0);
}

#[test]
fn rgb_hex_is_lowercase_and_padded() {
    assert_eq!(Rgb([255, 0, 10]).hex(), "#ff000a");
}

#[test]
fn geometry_sizes() {
    let geom = FrameGeometry::new(32, 18, Fps::new(8, 1).unwrap()).unwrap();
    assert_eq!(geom.frame_size(), 576);
    assert_eq!(geom.buffer_size(), 576 * 480);
    assert_eq!(geom.max_stream_len(16_777_216), 16_777_216 * 576);
}

#[test]
fn oversized_buffer_is_rejected() {
    let fast = Fps {
        num: u32::MAX,
        den: 1,
    };
    let err = FrameGeometry::new(1 << 16, 1 << 16, fast).unwrap_err();
    assert!(err.to_string().contains("does not fit in u64"));

    // Constructed without validation, the size saturates instead of overflowing.
    let geom = FrameGeometry {
        width: 1 << 16,
        height: 1 << 16,
        fps: fast,
    };
    assert_eq!(geom.buffer_size(), u64::MAX);
}

#[test]
fn geometry_rejects_empty_screen() {
    let fps = Fps::new(8, 1).unwrap();
    assert!(FrameGeometry::new(0, 4, fps).is_err());
    assert!(FrameGeometry::new(4, 0, fps).is_err());
}

#[test]
fn cells_are_row_major() {
    let geom = FrameGeometry::new(3, 2, Fps::new(1, 1).unwrap()).unwrap();
    let cells: Vec<_> = geom.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    for (i, (x, y)) in cells.into_iter().enumerate() {
        assert_eq!(geom.cell_offset(x, y), i);
    }
}
