//! Packing prime implicants two per 32-bit record.

use std::fmt;

use crate::implicant::Implicant;

/// Two implicants in one 32-bit word: the first in the upper half, the second
/// in the lower half.
///
/// A record holding a single implicant keeps it in the lower half and leaves
/// the upper half zero. An all-zero upper half always reads as empty.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PackedPair(u32);

impl PackedPair {
    /// Packs `first` and `second` into one record.
    ///
    /// The all-zero implicant (covering only the point 0) would be lost in the
    /// upper half, so it is moved to the lower half.
    pub fn pair(first: Implicant, second: Implicant) -> Self {
        let (upper, lower) = if first.packed() == 0 {
            (second, first)
        } else {
            (first, second)
        };
        Self(((upper.packed() as u32) << 16) | lower.packed() as u32)
    }

    pub fn single(implicant: Implicant) -> Self {
        Self(implicant.packed() as u32)
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the upper half, or `None` if it is empty.
    pub fn upper(self) -> Option<Implicant> {
        let upper = (self.0 >> 16) as u16;
        (upper != 0).then(|| Implicant::from_packed(upper))
    }

    pub fn lower(self) -> Implicant {
        Implicant::from_packed(self.0 as u16)
    }

    /// Iterates over the implicants in this record.
    pub fn implicants(self) -> impl Iterator<Item = Implicant> {
        self.upper().into_iter().chain(std::iter::once(self.lower()))
    }

    /// Checks whether either half covers `point`.
    pub fn covers(self, point: u8) -> bool {
        self.lower().covers(point) || self.upper().map_or(false, |i| i.covers(point))
    }
}

impl From<PackedPair> for u32 {
    fn from(pair: PackedPair) -> Self {
        pair.0
    }
}

impl fmt::Display for PackedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Packs implicants two at a time, in order; an odd one out is packed alone.
pub fn pack(implicants: &[Implicant]) -> Vec<PackedPair> {
    implicants
        .chunks(2)
        .map(|chunk| match *chunk {
            [first, second] => PackedPair::pair(first, second),
            [single] => PackedPair::single(single),
            _ => unreachable!(),
        })
        .collect()
}

/// Unpacks records back into the implicants they hold.
pub fn unpack(records: &[PackedPair]) -> Vec<Implicant> {
    records.iter().flat_map(|r| r.implicants()).collect()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_pair() {
        let a = Implicant::from_packed(0x8283);
        let b = Implicant::from_packed(0x80c1);
        let pair = PackedPair::pair(a, b);
        assert_eq!(pair.raw(), 0x8283_80c1);
        assert_eq!(pair.upper(), Some(a));
        assert_eq!(pair.lower(), b);
        assert_eq!(pair.implicants().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(pair.to_string(), "0x828380c1");
    }

    #[test]
    fn test_single() {
        let a = Implicant::from_packed(0x8283);
        let single = PackedPair::single(a);
        assert_eq!(single.raw(), 0x0000_8283);
        assert_eq!(single.upper(), None);
        assert_eq!(single.implicants().collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_covers() {
        let pair = PackedPair::pair(Implicant::from_packed(0x8283), Implicant::minterm(0x41));
        assert!(pair.covers(0x01));
        assert!(pair.covers(0x83));
        assert!(pair.covers(0x41));
        assert!(!pair.covers(0x42));

        // An empty upper half must not match the point 0.
        let single = PackedPair::single(Implicant::minterm(0x41));
        assert!(!single.covers(0));
    }

    #[test]
    fn test_zero_implicant_not_lost() {
        let zero = Implicant::minterm(0);
        let other = Implicant::minterm(3);
        let pair = PackedPair::pair(zero, other);
        assert_eq!(pair.upper(), Some(other));
        assert_eq!(pair.lower(), zero);
        assert!(pair.covers(0));
        assert!(pair.covers(3));
    }

    #[test]
    fn test_pack_unpack() {
        let implicants: Vec<_> = [0x8081, 0x8283, 0x80c4, 0x8c8c, 0x80ff]
            .into_iter()
            .map(Implicant::from_packed)
            .collect();
        let records = pack(&implicants);
        assert_eq!(
            records.iter().map(|r| r.raw()).collect::<Vec<_>>(),
            vec![0x8081_8283, 0x80c4_8c8c, 0x0000_80ff]
        );
        assert_eq!(unpack(&records), implicants);
        assert!(pack(&[]).is_empty());
    }
}
