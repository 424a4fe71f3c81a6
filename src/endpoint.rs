//! Endpoint records and their total order.
//!
//! Grounded on `original_source/endpoint.hh`: each endpoint is a scalar value
//! tagged by which extreme of an interval it is, and which set (A or B) the
//! owning interval belongs to.

use std::cmp::Ordering;

/// Which bound of an interval this endpoint represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extreme {
    Lower,
    Upper,
}

/// Which input collection the owning interval belongs to.
///
/// Named after the spec's A/B terminology (equivalently
/// SUBSCRIPTION/UPDATE in the source this spec was distilled from).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    A,
    B,
}

/// A single scalar bound of an interval, carrying enough to be scattered
/// back to its owning interval's id after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub id: u32,
    pub v: i32,
    pub extreme: Extreme,
    pub origin: Origin,
}

impl Endpoint {
    #[inline]
    pub fn new(id: u32, v: i32, extreme: Extreme, origin: Origin) -> Self {
        Self {
            id,
            v,
            extreme,
            origin,
        }
    }
}

/// Total order over endpoints (spec §3).
///
/// Primary key is the scalar value; ties break with LOWER preceding UPPER.
/// Since intervals are closed, two intervals touching at a single point
/// intersect, and placing LOWER before UPPER at equal values is what makes
/// the count identity in spec §4.5 hold. Any remaining tie (same value, same
/// extreme) is left unordered — the algorithm is correct either way.
impl Ord for Endpoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.v.cmp(&other.v).then_with(|| match (self.extreme, other.extreme) {
            (Extreme::Lower, Extreme::Upper) => Ordering::Less,
            (Extreme::Upper, Extreme::Lower) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }
}

impl PartialOrd for Endpoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ep(v: i32, extreme: Extreme) -> Endpoint {
        Endpoint::new(0, v, extreme, Origin::A)
    }

    #[test]
    fn test_value_order() {
        assert!(ep(5, Extreme::Upper) < ep(10, Extreme::Lower));
    }

    #[test]
    fn test_tie_break_lower_before_upper() {
        let lower = ep(20, Extreme::Lower);
        let upper = ep(20, Extreme::Upper);
        assert!(lower < upper);
        assert_ne!(lower.cmp(&upper), Ordering::Equal);
    }

    #[test]
    fn test_same_extreme_ties_are_equal_order() {
        let a = ep(20, Extreme::Lower);
        let b = ep(20, Extreme::Lower);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_sort_stability_across_origin() {
        let mut eps = vec![
            Endpoint::new(0, 20, Extreme::Upper, Origin::A),
            Endpoint::new(1, 20, Extreme::Lower, Origin::B),
        ];
        eps.sort();
        assert_eq!(eps[0].origin, Origin::B);
        assert_eq!(eps[0].extreme, Extreme::Lower);
    }
}
