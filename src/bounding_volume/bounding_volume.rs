use crate::math::{Point, Real};

/// A conservative volume enclosing a shape.
///
/// Inclusion tests and merges between two bounding volumes of the same kind are
/// expected to run in constant time, so they can prune pairs of shapes before any
/// exact query.
pub trait BoundingVolume {
    /// A point inside of this bounding volume, ideally its center.
    fn center(&self) -> Point<Real>;

    /// Is `other` entirely inside of `self`?
    fn contains(&self, other: &Self) -> bool;

    /// Grows `self` so it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume of this kind enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;
}
