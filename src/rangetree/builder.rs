use crate::error::Result;
use crate::point::Point;
use crate::rangetree::node::{Node, PointId};
use crate::rangetree::RangeTree;
use crate::r#type::IndexableNum;

/// A builder to create a [`RangeTree`] one point at a time.
#[derive(Debug, Default)]
pub struct RangeTreeBuilder<T: IndexableNum, const D: usize> {
    points: Vec<Point<T, D>>,
}

impl<T: IndexableNum, const D: usize> RangeTreeBuilder<T, D> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create an empty builder with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Add a point to the builder.
    ///
    /// This returns a positional index that provides a lookup back into the
    /// tree's [`points`][RangeTree::points] arena.
    #[inline]
    pub fn add(&mut self, point: impl Into<Point<T, D>>) -> u32 {
        let index = self.points.len();
        self.points.push(point.into());
        index.try_into().unwrap()
    }

    /// Consume this builder, sorting the layered levels and producing a
    /// [`RangeTree`] ready for queries.
    ///
    /// ## Errors
    ///
    /// - If no points were added.
    pub fn finish(self) -> Result<RangeTree<T, D>> {
        RangeTree::new(self.points)
    }
}

/// Build one tree level over `ids`, sorting the slice on `axis` first.
///
/// Entered once per tree: at the root for axis 0, and through `build_assoc`
/// for every deeper axis.
pub(crate) fn build_level<T: IndexableNum, const D: usize>(
    points: &[Point<T, D>],
    ids: &mut [PointId],
    axis: usize,
) -> Node<T> {
    sort_on_axis(points, ids, axis);
    build_node(points, ids, axis)
}

/// Build the subtree over a slice already sorted on `axis`.
fn build_node<T: IndexableNum, const D: usize>(
    points: &[Point<T, D>],
    ids: &mut [PointId],
    axis: usize,
) -> Node<T> {
    if ids.len() == 1 {
        let point = ids[0];
        let assoc = build_assoc(points, ids, axis);
        return Node::Leaf { point, assoc };
    }

    let mid = ids.len() / 2;

    // The key and both children come from this level's sort order, so all
    // three must be taken before the associated build re-sorts the slice on
    // the next axis.
    let key = points[ids[mid - 1] as usize].at(axis);
    let (lo, hi) = ids.split_at_mut(mid);
    let left = Box::new(build_node(points, lo, axis));
    let right = Box::new(build_node(points, hi, axis));
    let assoc = build_assoc(points, ids, axis);

    Node::Inner {
        key,
        left,
        right,
        assoc,
    }
}

/// Build the associated tree on the next axis, or `None` at the innermost
/// one.
fn build_assoc<T: IndexableNum, const D: usize>(
    points: &[Point<T, D>],
    ids: &mut [PointId],
    axis: usize,
) -> Option<Box<Node<T>>> {
    if axis + 1 == D {
        return None;
    }
    Some(Box::new(build_level(points, ids, axis + 1)))
}

/// Stable sort of `ids` by the points' coordinate on `axis`.
///
/// Stability keeps runs of equal keys in a deterministic order across levels.
fn sort_on_axis<T: IndexableNum, const D: usize>(
    points: &[Point<T, D>],
    ids: &mut [PointId],
    axis: usize,
) {
    ids.sort_by(|&a, &b| {
        let ka = points[a as usize].at(axis);
        let kb = points[b as usize].at(axis);
        ka.partial_cmp(&kb).unwrap()
    });
}
