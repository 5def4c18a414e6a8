//! Implicants over 8 input bits.
//!
//! An [`Implicant`] is a cube in the 8-dimensional boolean hypercube: a `value`
//! together with a don't-care mask. Positions marked don't-care are always
//! asserted in `value`, which keeps the covering check a plain equality:
//!
//! ```text
//! covers(i, p)  <=>  (p | i.dc_mask) == (i.value | i.dc_mask)
//! ```
//!
//! The packed form is a 16-bit word: the high byte is the don't-care mask,
//! the low byte is the value.

use std::fmt;

/// A partial assignment over 8 boolean variables.
///
/// # Invariants
///
/// - Every don't-care bit is also set in `value`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Implicant {
    value: u8,
    dc_mask: u8,
}

impl Implicant {
    /// Creates an implicant from its value and don't-care mask.
    ///
    /// # Panics
    ///
    /// Panics if a don't-care bit is not asserted in `value`.
    pub fn new(value: u8, dc_mask: u8) -> Self {
        assert_eq!(
            value & dc_mask,
            dc_mask,
            "Don't-care bits must be set in the value (value = {:#04x}, dc_mask = {:#04x})",
            value,
            dc_mask
        );
        Self { value, dc_mask }
    }

    /// Creates a fully specified implicant (a minterm).
    pub const fn minterm(value: u8) -> Self {
        Self { value, dc_mask: 0 }
    }

    /// Decodes the 16-bit packed form (`dc_mask << 8 | value`).
    ///
    /// # Panics
    ///
    /// Panics if the decoded implicant violates the normalization invariant.
    pub fn from_packed(packed: u16) -> Self {
        Self::new(packed as u8, (packed >> 8) as u8)
    }

    /// Returns the 16-bit packed form.
    pub const fn packed(self) -> u16 {
        ((self.dc_mask as u16) << 8) | self.value as u16
    }

    pub const fn value(self) -> u8 {
        self.value
    }

    pub const fn dc_mask(self) -> u8 {
        self.dc_mask
    }

    /// Number of don't-care positions.
    pub const fn dc_count(self) -> u32 {
        self.dc_mask.count_ones()
    }

    /// Number of points this implicant covers.
    pub const fn size(self) -> usize {
        1 << self.dc_count()
    }

    /// Checks whether the concrete `point` matches at every cared position.
    pub const fn covers(self, point: u8) -> bool {
        (point | self.dc_mask) == (self.value | self.dc_mask)
    }

    /// Checks whether every point covered by `child` is covered by `self`.
    ///
    /// This holds when:
    /// 1. the don't-care mask of `self` is a superset of the child's, i.e.
    ///    wherever `self` cares, the child cares too;
    /// 2. both agree on every position `self` cares about.
    pub const fn implicant_covers(self, child: Implicant) -> bool {
        if self.dc_mask & child.dc_mask != child.dc_mask {
            return false;
        }
        let cared = !self.dc_mask;
        (self.value & cared) == (child.value & cared)
    }

    /// Marks the bits in `mask` as don't-care, asserting them in the value.
    pub fn mark_dc(self, mask: u8) -> Self {
        let result = Self {
            value: self.value | mask,
            dc_mask: self.dc_mask | mask,
        };
        debug_assert!(result.implicant_covers(self));
        result
    }

    /// Returns the implicant with the cared bits in `mask` inverted.
    ///
    /// # Panics
    ///
    /// Panics if `mask` touches a don't-care position.
    pub fn flip(self, mask: u8) -> Self {
        assert_eq!(mask & self.dc_mask, 0, "Cannot flip a don't-care bit");
        Self {
            value: self.value ^ mask,
            dc_mask: self.dc_mask,
        }
    }

    /// Enumerates every point covered by this implicant.
    ///
    /// The result has exactly `2^dc_count` distinct values. The `k`-th
    /// don't-care bit (in increasing bit order) is toggled in the first half
    /// of every block pair, with blocks of size `n >> (k + 1)`:
    ///
    /// ```text
    /// dc bit #0: toggle the first half
    /// dc bit #1: toggle the first and the third quarter
    /// ...
    /// last dc bit: toggle every other element
    /// ```
    pub fn explode(self) -> Vec<u8> {
        let count = self.size();
        let mut points = vec![self.value; count];

        let mut dc_index = 0;
        for bit in 0..8 {
            let toggle = 1u8 << bit;
            if self.dc_mask & toggle == 0 {
                continue;
            }
            let block_size = count >> (dc_index + 1);
            let block_pairs = 1 << dc_index;
            assert_eq!(2 * block_size * block_pairs, count);
            for pair in 0..block_pairs {
                let start = 2 * pair * block_size;
                for point in &mut points[start..start + block_size] {
                    *point ^= toggle;
                }
            }
            dc_index += 1;
        }

        points
    }

    /// Tries to combine two implicants into one that covers exactly their union.
    ///
    /// Returns the more general implicant if one covers the other, or the
    /// merged cube if both share a don't-care mask and differ in exactly one
    /// cared bit. Otherwise returns `None`.
    pub fn try_merge(self, other: Implicant) -> Option<Implicant> {
        if self.implicant_covers(other) {
            return Some(self);
        }
        if other.implicant_covers(self) {
            return Some(other);
        }

        if self.dc_mask != other.dc_mask {
            return None;
        }
        // Don't-care positions are asserted on both sides, so they cancel out.
        let diff = self.value ^ other.value;
        if diff.count_ones() != 1 {
            return None;
        }

        Some(self.mark_dc(diff))
    }
}

impl From<Implicant> for u16 {
    fn from(implicant: Implicant) -> Self {
        implicant.packed()
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in (0..8).rev() {
            let c = if (self.dc_mask >> bit) & 1 == 1 {
                'X'
            } else if (self.value >> bit) & 1 == 1 {
                '1'
            } else {
                '0'
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
