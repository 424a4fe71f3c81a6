//! Core interval type shared by the counting engine and its collaborators.

use crate::error::Error;

/// A closed integer interval `[lower, upper]`.
///
/// `id` is a dense, zero-based index unique within the owning collection: for
/// a slice `a` passed as the `A` side of [`crate::engine::count_intersections`],
/// the invariant `a[i].id == i` must hold (and symmetrically for `B`).
///
/// `payload` is an opaque datum the engine never inspects; it exists purely
/// so callers (BAM alignments, BED records, ...) can carry their own data
/// through the pipeline without a second lookup after counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    pub id: u32,
    pub lower: i32,
    pub upper: i32,
    pub payload: T,
}

impl<T> Interval<T> {
    /// Create a new closed interval `[lower, upper]` with the given id.
    #[inline]
    pub fn new(id: u32, lower: i32, upper: i32, payload: T) -> Self {
        Self {
            id,
            lower,
            upper,
            payload,
        }
    }

    /// Check whether this interval intersects `other`.
    ///
    /// Normative predicate (spec §6): `x.lower <= y.upper && y.lower <= x.upper`.
    #[inline]
    pub fn intersects<U>(&self, other: &Interval<U>) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Validate the `lower <= upper` precondition, tagging failures with the
    /// interval's position in its owning collection.
    #[inline]
    pub fn validate(&self, index: usize) -> Result<(), Error> {
        if self.lower > self.upper {
            return Err(Error::InvalidInterval {
                index,
                reason: format!("lower ({}) > upper ({})", self.lower, self.upper),
            });
        }
        if self.id as usize != index {
            return Err(Error::InvalidInterval {
                index,
                reason: format!("id ({}) does not match position {}", self.id, index),
            });
        }
        Ok(())
    }
}

impl Interval<()> {
    /// Convenience constructor for the common counting-only case where no
    /// payload is carried.
    #[inline]
    pub fn closed(id: u32, lower: i32, upper: i32) -> Self {
        Self::new(id, lower, upper, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_closed() {
        let a = Interval::closed(0, 10, 20);
        let b = Interval::closed(0, 20, 30);
        let c = Interval::closed(0, 21, 30);
        assert!(a.intersects(&b)); // touch at 20: closed intervals intersect
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_point_interval() {
        let point = Interval::closed(0, 100, 100);
        let covering = Interval::closed(0, 99, 101);
        assert!(point.intersects(&covering));
    }

    #[test]
    fn test_validate_rejects_inverted() {
        let bad = Interval::closed(0, 10, 5);
        assert!(bad.validate(0).is_err());
    }

    #[test]
    fn test_validate_rejects_id_mismatch() {
        let bad = Interval::closed(3, 10, 20);
        assert!(bad.validate(0).is_err());
        assert!(bad.validate(3).is_ok());
    }
}
