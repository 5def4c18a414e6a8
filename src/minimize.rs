//! Modified Quine–McCluskey minimization.
//!
//! This differs from the textbook algorithm: we do not enumerate all prime
//! implicants and then select the essential ones. Instead, adjacent or covering
//! implicants are merged until no merge applies, and then single implicants are
//! widened by marking one more bit as don't-care, which doubles their coverage.
//! A widening is accepted only if the newly covered half is already covered by
//! the current list, so no point outside the function is ever gained.
//!
//! The two passes alternate until neither makes progress:
//!
//! ```text
//!          merges > 0
//!         +----------+
//!         v          |
//!  ---> [merge pass] +--(no merges)--> [expand pass] --(no expansions)--> done
//!         ^                                 |
//!         +---------(expansions > 0)--------+
//! ```

use std::fmt;

use log::debug;

use crate::cover::fully_covered;
use crate::implicant::Implicant;

/// Counters collected by [`minimize`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MinimizeStats {
    /// Number of merge passes performed.
    pub merge_passes: usize,
    /// Number of expansion passes performed.
    pub expand_passes: usize,
    /// Total number of successful merges.
    pub merges: usize,
    /// Total number of bits marked don't-care by expansion.
    pub expansions: usize,
}

impl std::ops::AddAssign for MinimizeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.merge_passes += rhs.merge_passes;
        self.expand_passes += rhs.expand_passes;
        self.merges += rhs.merges;
        self.expansions += rhs.expansions;
    }
}

impl fmt::Display for MinimizeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} merges in {} passes, {} expansions in {} passes",
            self.merges, self.merge_passes, self.expansions, self.expand_passes
        )
    }
}

/// Performs one merge pass over `implicants`, returning the number of merges.
///
/// For every pair `i < j` of live implicants, a successful merge replaces `i`
/// with the result and removes `j` by swapping the last live element into its
/// place. The swapped-in element is not compared against `i` again in this
/// pass; the next pass picks it up.
pub fn merge_pass(implicants: &mut Vec<Implicant>) -> usize {
    let mut merges = 0;
    let mut count = implicants.len();

    let mut i = 0;
    while i < count {
        let mut j = i + 1;
        while j < count {
            if let Some(merged) = implicants[i].try_merge(implicants[j]) {
                debug!(
                    "merged {:#06x} and {:#06x} into {:#06x}",
                    implicants[i].packed(),
                    implicants[j].packed(),
                    merged.packed()
                );
                implicants[i] = merged;
                count -= 1;
                implicants.swap(j, count);
                merges += 1;
            }
            j += 1;
        }
        i += 1;
    }

    implicants.truncate(count);
    merges
}

/// Performs one expansion pass over `implicants`, returning the number of
/// bits marked don't-care.
///
/// For each implicant and each cared bit, the bit is marked don't-care if the
/// cube obtained by flipping it is already fully covered by the list. The
/// coverage check sees every expansion made so far in this pass, including
/// earlier ones on the same implicant.
pub fn expand_pass(implicants: &mut [Implicant]) -> usize {
    let mut expansions = 0;

    for i in 0..implicants.len() {
        for bit in 0..8 {
            let mask = 1u8 << bit;
            // Re-read: earlier bits of this loop may have widened it.
            let implicant = implicants[i];
            if implicant.dc_mask() & mask != 0 {
                continue;
            }

            let companion = implicant.flip(mask);
            debug_assert_eq!(companion.dc_mask(), implicant.dc_mask());
            debug_assert_eq!(implicant.try_merge(companion), Some(implicant.mark_dc(mask)));

            if fully_covered(implicants, companion) {
                implicants[i] = implicant.mark_dc(mask);
                debug!(
                    "expanded {:#06x} into {:#06x}",
                    implicant.packed(),
                    implicants[i].packed()
                );
                expansions += 1;
            }
        }
    }

    expansions
}

/// Reduces `implicants` in place to a list of prime implicants.
///
/// The list never grows, so the seed list can be passed in directly. The
/// covered point set is preserved exactly.
pub fn minimize(implicants: &mut Vec<Implicant>) -> MinimizeStats {
    let mut stats = MinimizeStats::default();

    loop {
        let merges = merge_pass(implicants);
        stats.merge_passes += 1;
        stats.merges += merges;
        debug!("merge pass #{}: {} merges", stats.merge_passes, merges);
        if merges > 0 {
            continue;
        }

        // Slow step, only taken once merging is exhausted.
        let expansions = expand_pass(implicants);
        stats.expand_passes += 1;
        stats.expansions += expansions;
        debug!("expand pass #{}: {} expansions", stats.expand_passes, expansions);
        if expansions == 0 {
            return stats;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use test_log::test;

    use super::*;

    fn minterms(values: &[u8]) -> Vec<Implicant> {
        values.iter().map(|&v| Implicant::minterm(v)).collect()
    }

    fn packed_set(implicants: &[Implicant]) -> BTreeSet<u16> {
        implicants.iter().map(|i| i.packed()).collect()
    }

    fn covered_points(implicants: &[Implicant]) -> BTreeSet<u8> {
        implicants.iter().flat_map(|i| i.explode()).collect()
    }

    #[test]
    fn test_merge_pass() {
        let mut implicants = minterms(&[0b0001, 0b0011, 0b1111]);
        assert_eq!(merge_pass(&mut implicants), 1);
        assert_eq!(implicants, vec![Implicant::new(0b0011, 0b0010), Implicant::minterm(0b1111)]);
        assert_eq!(merge_pass(&mut implicants), 0);
    }

    #[test]
    fn test_merge_pass_duplicates() {
        // The last element is swapped into the removed slot and skipped,
        // so the third copy only goes away in the next pass.
        let mut implicants = minterms(&[5, 5, 5]);
        assert_eq!(merge_pass(&mut implicants), 1);
        assert_eq!(implicants, minterms(&[5, 5]));
        assert_eq!(merge_pass(&mut implicants), 1);
        assert_eq!(implicants, minterms(&[5]));
    }

    #[test]
    fn test_merge_pass_empty() {
        let mut implicants = Vec::new();
        assert_eq!(merge_pass(&mut implicants), 0);
        assert!(implicants.is_empty());
    }

    #[test]
    fn test_expand_pass() {
        // 000000XX and 000001XX: each can absorb the other's half.
        let mut implicants = vec![Implicant::from_packed(0x0303), Implicant::from_packed(0x0307)];
        let expansions = expand_pass(&mut implicants);
        assert_eq!(expansions, 2);
        assert_eq!(implicants, vec![Implicant::from_packed(0x0707); 2]);
    }

    #[test]
    fn test_expand_pass_nothing() {
        let mut implicants = minterms(&[0b0000, 0b0011]);
        assert_eq!(expand_pass(&mut implicants), 0);
        assert_eq!(implicants, minterms(&[0b0000, 0b0011]));
    }

    #[test]
    fn test_minimize_three_minterms() {
        let mut implicants = minterms(&[0b0000_0001, 0b0000_0011, 0b0000_1111]);
        minimize(&mut implicants);
        assert_eq!(implicants.len(), 2);
        assert_eq!(
            packed_set(&implicants),
            BTreeSet::from([0x0203, 0x000f]),
        );
    }

    #[test]
    fn test_minimize_four_variables() {
        let mut implicants = minterms(&[0, 2, 3, 5, 6, 7, 9, 12, 13, 15]);
        let stats = minimize(&mut implicants);
        assert_eq!(implicants.len(), 5);
        assert_eq!(
            packed_set(&implicants),
            BTreeSet::from([0x0507, 0x0a0f, 0x0202, 0x040d, 0x010d]),
        );
        assert!(stats.merges >= 5);
        assert!(stats.expand_passes >= 1);
    }

    #[test]
    fn test_minimize_preserves_points() {
        let seeds: &[&[u8]] = &[
            &[0b0000_0001, 0b0000_0011, 0b0000_1111],
            &[0, 2, 3, 5, 6, 7, 9, 12, 13, 15],
            &[1, 4, 7, 8, 11, 13, 14],
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
            &[0x10, 0x30, 0x50, 0x70, 0x11, 0x33, 0x55, 0x77, 0xff],
        ];
        for &seed in seeds {
            let mut implicants = minterms(seed);
            minimize(&mut implicants);
            assert!(implicants.len() <= seed.len());
            assert_eq!(covered_points(&implicants), seed.iter().copied().collect());
        }
    }

    #[test]
    fn test_minimize_full_nibble() {
        let mut implicants = minterms(&(0..16).collect::<Vec<_>>());
        minimize(&mut implicants);
        assert_eq!(implicants, vec![Implicant::from_packed(0x0f0f)]);
    }

    #[test]
    fn test_minimize_idempotent() {
        let mut implicants = minterms(&[0, 2, 3, 5, 6, 7, 9, 12, 13, 15]);
        minimize(&mut implicants);

        let mut again = implicants.clone();
        let stats = minimize(&mut again);
        assert_eq!(packed_set(&again), packed_set(&implicants));
        assert_eq!(stats.merges, 0);
        assert_eq!(stats.expansions, 0);
    }

    #[test]
    fn test_minimize_empty() {
        let mut implicants = Vec::new();
        let stats = minimize(&mut implicants);
        assert!(implicants.is_empty());
        assert_eq!(stats.merge_passes, 1);
        assert_eq!(stats.expand_passes, 1);
    }
}
