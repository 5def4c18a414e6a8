//! # qmc-font: glyph tables as minimized sum-of-products rules
//!
//! **`qmc-font`** compresses an 8x8 raster font into a small set of matching
//! rules. Every glyph is a 64-bit word; each of the 64 output bits is a boolean
//! function of the 7-bit character code, and each function is reduced to a
//! list of prime implicants by a self-validating variant of the
//! Quine–McCluskey algorithm.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_font::compile::{compile, CompileOptions};
//! use qmc_font::table::GlyphTable;
//!
//! let table = GlyphTable::font8x8_basic();
//! let font = compile(&table, &CompileOptions::default()).unwrap();
//!
//! // Every glyph decodes back from the packed records.
//! assert_eq!(font.glyph(b'A' as usize).unwrap(), table[b'A' as usize]);
//! assert!(font.record_count() < table.len() * 8);
//! ```
//!
//! ## Core Components
//!
//! - **[`implicant`]**: cubes over 8 bits, covering relations, minterm expansion and merging.
//! - **[`cover`]**: the coverage oracle used to validate don't-care expansion.
//! - **[`minimize`]**: merge and expansion passes and the fixpoint driver.
//! - **[`table`]**: glyph tables and seeding of minterms per output bit.
//! - **[`pack`]**: two implicants per 32-bit record.
//! - **[`compile`]**: per-bit orchestration and the mandatory reconstruction check.

pub mod compile;
pub mod cover;
pub mod error;
pub mod font;
pub mod implicant;
pub mod minimize;
pub mod pack;
pub mod table;
