//! Coverage queries over a list of implicants.

use crate::implicant::Implicant;

/// Checks whether any implicant in the list covers `point`.
pub fn any_covers(implicants: &[Implicant], point: u8) -> bool {
    implicants.iter().any(|i| i.covers(point))
}

/// Checks whether the union of `implicants` covers every point of `target`.
///
/// Note that this is expensive: it performs `N * 2^D` checks, where `N` is the
/// number of implicants and `D` is the number of don't-care bits in the target.
/// Unlike [`Implicant::implicant_covers`], no single implicant has to cover the
/// target on its own.
pub fn fully_covered(implicants: &[Implicant], target: Implicant) -> bool {
    if implicants.is_empty() {
        return false;
    }
    target
        .explode()
        .into_iter()
        .all(|point| any_covers(implicants, point))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_any_covers() {
        let implicants = [Implicant::minterm(1), Implicant::new(0b1100, 0b0100)];
        assert!(any_covers(&implicants, 1));
        assert!(any_covers(&implicants, 0b1000));
        assert!(any_covers(&implicants, 0b1100));
        assert!(!any_covers(&implicants, 0));
        assert!(!any_covers(&[], 1));
    }

    #[test]
    fn test_fully_covered_by_union() {
        let implicants = [
            Implicant::from_packed(0x0303), // 000000XX
            Implicant::from_packed(0x0307), // 000001XX
        ];

        // Together they cover bits 1..=2 as don't-care, neither does alone.
        let target = Implicant::from_packed(0x0607);
        assert!(fully_covered(&implicants, target));
        assert!(!fully_covered(&implicants[..1], target));
        assert!(!fully_covered(&implicants[1..], target));
        assert!(!fully_covered(&[], target));

        let target = Implicant::from_packed(0x0507);
        assert!(fully_covered(&implicants, target));
        assert!(!fully_covered(&implicants[..1], target));
        assert!(!fully_covered(&implicants[1..], target));
        assert!(!fully_covered(&[], target));
    }

    #[test]
    fn test_fully_covered_minterm() {
        let implicants = [Implicant::from_packed(0x0303), Implicant::from_packed(0x0307)];
        let target = Implicant::minterm(0b0111);
        assert!(fully_covered(&implicants, target));
        assert!(!fully_covered(&implicants[..1], target));
        assert!(fully_covered(&implicants[1..], target));
        assert!(!fully_covered(&[], target));
    }

    #[test]
    fn test_not_fully_covered() {
        let implicants = [Implicant::from_packed(0x0303), Implicant::from_packed(0x0307)];
        assert!(!fully_covered(&implicants, Implicant::from_packed(0x030f)));
        assert!(!fully_covered(&implicants, Implicant::from_packed(0x040f)));
        assert!(!fully_covered(&[], Implicant::from_packed(0x030f)));
    }
}
