use super::*;
use crate::foundation::core::Fps;

fn geom(width: u32, height: u32) -> FrameGeometry {
    FrameGeometry::new(width, height, Fps::new(8, 1).unwrap()).unwrap()
}

#[test]
fn two_by_one_offsets_and_tails() {
    let g = geom(2, 1);
    let a = ExtractionPattern::for_cell(g, 0, 0).unwrap();
    let b = ExtractionPattern::for_cell(g, 1, 0).unwrap();
    assert_eq!((a.offset, a.tail), (0, 1));
    assert_eq!((b.offset, b.tail), (1, 0));
    assert_eq!(a.render(), r"^(?<px>.)(?:.{1})(?:.{8})*?\k<px>(?<out>.{7})");
    assert_eq!(b.render(), r"^(?:.{1})(?<px>.)(?:.{8})*?\k<px>(?<out>.{7})");
}

#[test]
fn single_cell_has_no_skips() {
    let p = ExtractionPattern::for_cell(geom(1, 1), 0, 0).unwrap();
    assert_eq!((p.offset, p.tail), (0, 0));
    assert_eq!(p.render(), r"^(?<px>.)(?:.{8})*?\k<px>(?<out>.{7})");
}

#[test]
fn offsets_cover_exactly_one_frame() {
    let g = geom(32, 18);
    for (x, y) in g.cells() {
        let p = ExtractionPattern::for_cell(g, x, y).unwrap();
        assert_eq!(p.offset, (x + y * 32) as usize);
        assert_eq!(p.tail, 576 - p.offset - 1);
        assert_eq!(p.frame_span(), 576);
    }
}

#[test]
fn middle_cell_renders_both_skips() {
    let p = ExtractionPattern::for_cell(geom(32, 18), 3, 1).unwrap();
    assert_eq!(
        p.render(),
        r"^(?:.{35})(?<px>.)(?:.{540})(?:.{8})*?\k<px>(?<out>.{7})"
    );
}

#[test]
fn cells_outside_the_screen_are_rejected() {
    assert!(ExtractionPattern::for_cell(geom(2, 1), 2, 0).is_err());
    assert!(ExtractionPattern::for_cell(geom(2, 1), 0, 1).is_err());
}

#[test]
fn extract_reads_the_dictionary_color_of_the_anchor() {
    let g = geom(2, 1);
    // Frame "AB" followed by the dictionary.
    let buffer = "ABA#ff0000B#00ff00";

    let a = ExtractionPattern::for_cell(g, 0, 0).unwrap();
    let b = ExtractionPattern::for_cell(g, 1, 0).unwrap();
    assert_eq!(a.extract(buffer), Some("#ff0000"));
    assert_eq!(b.extract(buffer), Some("#00ff00"));
}

#[test]
fn cells_sharing_a_pixel_each_match_their_own_anchor() {
    let g = geom(3, 1);
    let buffer = "BAB A#111111B#222222".replace(' ', "");
    for x in 0..3 {
        let p = ExtractionPattern::for_cell(g, x, 0).unwrap();
        let want = if x == 1 { "#111111" } else { "#222222" };
        assert_eq!(p.extract(&buffer), Some(want), "cell {x}");
    }
}

#[test]
fn anchor_only_matches_on_block_boundaries() {
    // 'a' shows up inside the first entry's hex digits, but only the second entry starts with it.
    let g = geom(1, 1);
    let buffer = "a0#aaaaaaa#0b0c0d";
    let p = ExtractionPattern::for_cell(g, 0, 0).unwrap();
    assert_eq!(p.extract(buffer), Some("#0b0c0d"));
}

#[test]
fn truncated_stream_yields_no_match() {
    let g = geom(2, 1);
    let a = ExtractionPattern::for_cell(g, 0, 0).unwrap();
    let b = ExtractionPattern::for_cell(g, 1, 0).unwrap();

    // Anchor never recurs.
    assert_eq!(a.extract("ABB#00ff00"), None);
    // Anchor recurs but the capture would run off the end.
    assert_eq!(a.extract("ABA#ff00"), None);
    // Shorter than one frame.
    assert_eq!(b.extract("A"), None);
    // Other cells are unaffected by one cell's miss.
    assert_eq!(b.extract("ABB#00ff00"), Some("#00ff00"));
}

#[test]
fn extract_handles_multibyte_characters() {
    let g = geom(1, 1);
    let p = ExtractionPattern::for_cell(g, 0, 0).unwrap();
    assert_eq!(p.extract("éé#c0ffee"), Some("#c0ffee"));
}
