//! Per-bit compilation of a glyph table into packed implicant records.
//!
//! Each of the [`OUTPUT_BITS`] output bits is minimized on its own:
//!
//! 1. seed one minterm per character code whose glyph has the bit set;
//! 2. reduce the minterms to prime implicants with [`minimize`];
//! 3. pack the prime implicants two per record.
//!
//! Finally every glyph is decoded back from the records and compared against
//! the source table. A mismatch means the minimizer produced a wrong cover and
//! is reported as [`Error::ReconstructionMismatch`].

use log::{debug, info};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::minimize::{minimize, MinimizeStats};
use crate::pack::{pack, PackedPair};
use crate::table::{GlyphTable, CODE_MASK, OUTPUT_BITS};

/// Options for [`compile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CompileOptions {
    /// Input bits that never take part in the character code.
    /// They are don't-care in every implicant.
    pub reserved_mask: u8,
    /// Minimize the output bits on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            reserved_mask: 0x80,
            parallel: false,
        }
    }
}

impl CompileOptions {
    pub fn validate(&self) -> Result<()> {
        if self.reserved_mask & CODE_MASK != 0 {
            return Err(Error::InvalidReservedMask {
                mask: self.reserved_mask,
            });
        }
        Ok(())
    }
}

/// The minimized form of one output bit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitCover {
    /// The output bit this cover computes.
    pub bit: usize,
    /// Number of minterms the minimization started from.
    pub minterms: usize,
    /// The prime implicants, in the order they were packed.
    pub implicants: Vec<Implicant>,
    /// The packed records.
    pub records: Vec<PackedPair>,
    pub stats: MinimizeStats,
}

impl BitCover {
    /// Checks whether this bit is set for `code`, using the packed records.
    pub fn eval(&self, code: u8) -> bool {
        self.records.iter().any(|r| r.covers(code))
    }
}

/// A glyph table compiled into per-bit sum-of-products covers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CompiledFont {
    bits: Vec<BitCover>,
    len: usize,
}

impl CompiledFont {
    pub fn bits(&self) -> &[BitCover] {
        &self.bits
    }

    pub fn bit(&self, bit: usize) -> &BitCover {
        &self.bits[bit]
    }

    /// Packed records of output `bit`.
    pub fn records(&self, bit: usize) -> &[PackedPair] {
        &self.bits[bit].records
    }

    /// Number of character codes the font was compiled from.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of prime implicants over all bits.
    pub fn implicant_count(&self) -> usize {
        self.bits.iter().map(|b| b.implicants.len()).sum()
    }

    /// Total number of packed records over all bits.
    pub fn record_count(&self) -> usize {
        self.bits.iter().map(|b| b.records.len()).sum()
    }

    /// Length of the longest record list.
    pub fn max_records(&self) -> usize {
        self.bits.iter().map(|b| b.records.len()).max().unwrap_or(0)
    }

    /// Accumulated minimization counters over all bits.
    pub fn stats(&self) -> MinimizeStats {
        let mut stats = MinimizeStats::default();
        for b in &self.bits {
            stats += b.stats;
        }
        stats
    }

    /// Decodes the glyph word for `code` from the packed records.
    pub fn glyph(&self, code: usize) -> Result<u64> {
        if code >= self.len {
            return Err(Error::CodeOutOfRange {
                code,
                len: self.len,
            });
        }
        Ok(self.decode(code as u8))
    }

    fn decode(&self, code: u8) -> u64 {
        self.bits
            .iter()
            .filter(|b| b.eval(code))
            .fold(0u64, |word, b| word | (1u64 << b.bit))
    }

    /// Decodes every glyph and compares it against `table`.
    pub fn verify(&self, table: &GlyphTable) -> Result<()> {
        for code in 0..table.len() {
            let expected = table[code];
            let actual = self.decode(code as u8);
            if actual != expected {
                return Err(Error::ReconstructionMismatch {
                    code,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Minimizes a single output bit of `table`.
pub fn compile_bit(table: &GlyphTable, bit: usize, reserved_mask: u8) -> BitCover {
    let mut implicants = table.seed(bit, reserved_mask);
    let minterms = implicants.len();

    let stats = minimize(&mut implicants);
    for implicant in &implicants {
        assert_eq!(
            implicant.dc_mask() & reserved_mask,
            reserved_mask,
            "Reserved bits must stay don't-care"
        );
    }
    debug!(
        "bit {}: {} minterms => {} prime implicants ({})",
        bit,
        minterms,
        implicants.len(),
        stats
    );

    let records = pack(&implicants);
    BitCover {
        bit,
        minterms,
        implicants,
        records,
        stats,
    }
}

/// Compiles `table` and checks that the result reproduces it exactly.
pub fn compile(table: &GlyphTable, options: &CompileOptions) -> Result<CompiledFont> {
    options.validate()?;
    info!(
        "Compiling {} glyphs x {} bits (reserved mask = {:#04x}, parallel = {})",
        table.len(),
        OUTPUT_BITS,
        options.reserved_mask,
        options.parallel
    );

    let bits: Vec<BitCover> = if options.parallel {
        (0..OUTPUT_BITS)
            .into_par_iter()
            .map(|bit| compile_bit(table, bit, options.reserved_mask))
            .collect()
    } else {
        (0..OUTPUT_BITS)
            .map(|bit| compile_bit(table, bit, options.reserved_mask))
            .collect()
    };

    let font = CompiledFont {
        bits,
        len: table.len(),
    };
    font.verify(table)?;

    info!(
        "Compiled into {} prime implicants in {} records ({})",
        font.implicant_count(),
        font.record_count(),
        font.stats()
    );
    Ok(font)
}
