use super::*;
use crate::synth::pattern::ENTRY_LEN;

const RED: Rgb = Rgb([255, 0, 0]);
const GREEN: Rgb = Rgb([0, 255, 0]);
const BLUE: Rgb = Rgb([0, 0, 255]);

#[test]
fn alphabet_skips_markup() {
    let a = alphabet();
    assert_eq!(a.len(), 90);
    assert_eq!(a[0], ' ');
    assert_eq!(*a.last().unwrap(), '~');
    for c in RESERVED_MARKUP.chars() {
        assert!(!a.contains(&c));
    }
}

#[test]
fn most_frequent_color_gets_first_symbol() {
    let samples = [BLUE, RED, RED, GREEN, RED, GREEN];
    let p = Palette::by_frequency(&samples).unwrap();
    assert_eq!(p.entries(), &[(RED, ' '), (GREEN, '!'), (BLUE, '#')]);
    assert_eq!(p.symbol(GREEN), Some('!'));
    assert_eq!(p.symbol(Rgb([1, 2, 3])), None);
}

#[test]
fn ties_keep_first_seen_order() {
    let p = Palette::by_frequency(&[GREEN, BLUE, RED]).unwrap();
    let order: Vec<Rgb> = p.entries().iter().map(|(px, _)| *px).collect();
    assert_eq!(order, vec![GREEN, BLUE, RED]);
}

#[test]
fn dictionary_entries_are_block_sized() {
    let p = Palette::by_frequency(&[RED, GREEN, GREEN]).unwrap();
    let dict = p.dictionary();
    assert_eq!(dict, " #00ff00!#ff0000");
    assert_eq!(dict.len(), p.len() * ENTRY_LEN);
}

#[test]
fn too_many_colors_is_a_capacity_error() {
    let samples: Vec<Rgb> = (0..=90u8).map(|v| Rgb([v, 0, 0])).collect();
    let err = Palette::by_frequency(&samples).unwrap_err();
    assert!(err.to_string().contains("capacity error:"));

    assert_eq!(Palette::by_frequency(&samples[..90]).unwrap().len(), 90);
}

#[test]
fn empty_input_gives_empty_palette() {
    let p = Palette::by_frequency(&[]).unwrap();
    assert!(p.is_empty());
    assert_eq!(p.dictionary(), "");
}
