//! Glyph tables as truth tables of 64 output bits.
//!
//! A glyph is stored as one `u64` word: the 8 raster rows concatenated
//! big-endian, so row 0 is the most-significant byte. Output bit `b` of the
//! word is then a boolean function of the 7-bit character code, and each such
//! function is minimized separately.

use std::ops::Index;

use crate::font::{FONT8X8_BASIC, GLYPH_COUNT};
use crate::implicant::Implicant;

/// One glyph: 8 raster rows, top row first.
pub type Glyph = [u8; 8];

/// Number of output bits in a glyph word.
pub const OUTPUT_BITS: usize = 64;

/// Input bits actually used by a character code.
pub const CODE_MASK: u8 = (GLYPH_COUNT - 1) as u8;

/// Converts a glyph into its 64-bit word.
pub fn glyph_to_word(glyph: &Glyph) -> u64 {
    u64::from_be_bytes(*glyph)
}

/// Converts a 64-bit word back into raster rows.
pub fn word_to_glyph(word: u64) -> Glyph {
    word.to_be_bytes()
}

/// A table of [`GLYPH_COUNT`] glyph words, indexed by character code.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GlyphTable {
    words: [u64; GLYPH_COUNT],
}

impl GlyphTable {
    pub fn new(glyphs: &[Glyph; GLYPH_COUNT]) -> Self {
        let mut words = [0; GLYPH_COUNT];
        for (word, glyph) in words.iter_mut().zip(glyphs) {
            *word = glyph_to_word(glyph);
        }
        let table = Self { words };

        // Every raster row must survive the conversion.
        for (code, glyph) in glyphs.iter().enumerate() {
            assert_eq!(&word_to_glyph(table.words[code]), glyph);
        }

        table
    }

    /// The embedded `font8x8_basic` table.
    pub fn font8x8_basic() -> Self {
        Self::new(&FONT8X8_BASIC)
    }

    pub fn from_words(words: [u64; GLYPH_COUNT]) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[u64; GLYPH_COUNT] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks whether output `bit` is set in the glyph for `code`.
    pub fn bit(&self, code: usize, bit: usize) -> bool {
        (self.words[code] >> bit) & 1 == 1
    }

    /// Returns the minterms of output `bit`: one implicant per code whose glyph
    /// has that bit set.
    ///
    /// The bits in `reserved` do not take part in the code and are marked
    /// don't-care (and asserted) in every seed.
    ///
    /// # Panics
    ///
    /// Panics if `reserved` overlaps [`CODE_MASK`].
    pub fn seed(&self, bit: usize, reserved: u8) -> Vec<Implicant> {
        assert!(bit < OUTPUT_BITS, "Output bit {} out of range", bit);
        assert_eq!(reserved & CODE_MASK, 0, "Reserved bits overlap the character code");

        (0..self.len())
            .filter(|&code| self.bit(code, bit))
            .map(|code| Implicant::new(code as u8 | reserved, reserved))
            .collect()
    }
}

impl Index<usize> for GlyphTable {
    type Output = u64;

    fn index(&self, code: usize) -> &Self::Output {
        &self.words[code]
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_glyph_word() {
        let glyph = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x80];
        let word = glyph_to_word(&glyph);
        assert_eq!(word, 0x0102_0304_0506_0780);
        assert_eq!(word_to_glyph(word), glyph);
    }

    #[test]
    fn test_font_table() {
        let table = GlyphTable::font8x8_basic();
        assert_eq!(table.len(), 128);
        assert_eq!(table[0], 0);
        // 'A'
        assert_eq!(table[0x41], 0x0c1e_3333_3f33_3300);
        assert_eq!(table[0x7f], 0);
    }

    #[test]
    fn test_seed() {
        let mut words = [0; GLYPH_COUNT];
        words[3] = 1 << 5;
        words[100] = (1 << 5) | 1;
        let table = GlyphTable::from_words(words);

        let seeds = table.seed(5, 0x80);
        assert_eq!(seeds, vec![Implicant::from_packed(0x8083), Implicant::from_packed(0x80e4)]);
        assert!(seeds.iter().all(|i| i.covers(3) || i.covers(100)));

        assert_eq!(table.seed(0, 0x80), vec![Implicant::from_packed(0x80e4)]);
        assert_eq!(table.seed(0, 0), vec![Implicant::minterm(100)]);
        assert!(table.seed(63, 0x80).is_empty());
    }

    #[test]
    fn test_seed_matches_bits() {
        let table = GlyphTable::font8x8_basic();
        for bit in 0..OUTPUT_BITS {
            let seeds = table.seed(bit, 0x80);
            for code in 0..table.len() {
                let seeded = seeds.iter().any(|i| i.covers(code as u8));
                assert_eq!(seeded, table.bit(code, bit), "code {:#04x}, bit {}", code, bit);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Reserved bits overlap the character code")]
    fn test_seed_bad_reserved() {
        GlyphTable::font8x8_basic().seed(0, 0x01);
    }
}
