use std::collections::HashMap;

use crate::foundation::{
    core::Rgb,
    error::{OledError, OledResult},
};

/// Characters that would need escaping inside the item assembly markup.
pub const RESERVED_MARKUP: &str = "<>&\"'";

/// Printable ASCII minus [`RESERVED_MARKUP`], in code point order.
pub fn alphabet() -> Vec<char> {
    (0x20u8..=0x7e)
        .map(char::from)
        .filter(|c| !RESERVED_MARKUP.contains(*c))
        .collect()
}

/// One-to-one mapping from sampled colors to stream symbols.
///
/// The most frequent color gets the first alphabet symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(Rgb, char)>,
    lookup: HashMap<Rgb, char>,
}

impl Palette {
    /// Rank colors by occurrence (ties keep first-seen order) and zip them with the alphabet.
    pub fn by_frequency(samples: &[Rgb]) -> OledResult<Self> {
        let mut counts: HashMap<Rgb, (usize, usize)> = HashMap::new();
        for (i, px) in samples.iter().enumerate() {
            counts.entry(*px).or_insert((0, i)).0 += 1;
        }

        let mut ranked: Vec<(Rgb, usize, usize)> = counts
            .into_iter()
            .map(|(px, (count, first))| (px, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        let symbols = alphabet();
        if ranked.len() > symbols.len() {
            return Err(OledError::capacity(format!(
                "{} distinct colors but only {} symbols; quantize to at most {} colors",
                ranked.len(),
                symbols.len(),
                symbols.len()
            )));
        }

        let entries: Vec<(Rgb, char)> = ranked
            .into_iter()
            .zip(symbols)
            .map(|((px, _, _), c)| (px, c))
            .collect();
        let lookup = entries.iter().copied().collect();
        Ok(Self { entries, lookup })
    }

    pub fn symbol(&self, px: Rgb) -> Option<char> {
        self.lookup.get(&px).copied()
    }

    pub fn entries(&self) -> &[(Rgb, char)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color dictionary appended after every frame at runtime: `c#rrggbb` per entry.
    pub fn dictionary(&self) -> String {
        self.entries
            .iter()
            .map(|(px, c)| format!("{c}{}", px.hex()))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stream/palette.rs"]
mod tests;
