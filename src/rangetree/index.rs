use std::fmt;

use crate::error::{RangeIndexError, Result};
use crate::point::Point;
use crate::rangetree::builder::build_level;
use crate::rangetree::node::{Node, PointId};
use crate::rangetree::query::search_level;
use crate::r#type::IndexableNum;

/// A layered range tree over a fixed set of `D`-dimensional points.
///
/// The top level is a balanced binary search tree on the points' first
/// coordinate; every inner node of a level owns an associated tree over the
/// same point subset, keyed on the next coordinate. Points live in a single
/// arena on the top-level tree and are referenced by index from every level.
///
/// The tree is immutable once built: queries take `&self` and the whole
/// structure is `Send + Sync`, so concurrent queries need no synchronization.
#[derive(Debug, Clone)]
pub struct RangeTree<T: IndexableNum, const D: usize> {
    points: Vec<Point<T, D>>,
    root: Node<T>,
}

impl<T: IndexableNum, const D: usize> RangeTree<T, D> {
    /// Build a tree over `points`.
    ///
    /// Construction sorts shared ids over the arena level by level; the
    /// input order is preserved in [`points`][Self::points].
    ///
    /// ## Errors
    ///
    /// - If `points` is empty.
    pub fn new(points: Vec<Point<T, D>>) -> Result<Self> {
        if points.is_empty() {
            return Err(RangeIndexError::EmptyPointSet);
        }

        let mut ids: Vec<PointId> = (0..points.len() as PointId).collect();
        let root = build_level(&points, &mut ids, 0);
        Ok(Self { points, root })
    }

    /// Report every stored point inside the closed box `[from, to]`.
    ///
    /// A box with `from` above `to` on any axis selects nothing. Duplicate
    /// stored points are reported once per occurrence. The order of the
    /// result is unspecified; sort it if a canonical order is needed.
    pub fn query(&self, from: &Point<T, D>, to: &Point<T, D>) -> Vec<Point<T, D>> {
        let mut result = Vec::new();
        if !from.le(to) {
            return result;
        }

        let upper = to.successor();
        search_level(&self.points, &self.root, 0, from, &upper, &mut result);
        result
    }

    /// The number of stored points, counting duplicates.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the tree is empty. Always false: construction rejects an
    /// empty point set.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The stored points, in insertion order.
    pub fn points(&self) -> &[Point<T, D>] {
        &self.points
    }
}

impl<T: IndexableNum, const D: usize> fmt::Display for RangeTree<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        fmt_node(f, &self.points, &self.root)?;
        write!(f, "]")
    }
}

/// Render a subtree: `left,{assoc},right` for inner nodes, the point itself
/// for leaves. Innermost inner nodes have no associated tree and omit the
/// braces.
fn fmt_node<T: IndexableNum, const D: usize>(
    f: &mut fmt::Formatter<'_>,
    points: &[Point<T, D>],
    node: &Node<T>,
) -> fmt::Result {
    match node {
        Node::Inner {
            left, right, assoc, ..
        } => {
            fmt_node(f, points, left)?;
            match assoc {
                Some(assoc) => {
                    write!(f, ",{{")?;
                    fmt_node(f, points, assoc)?;
                    write!(f, "}},")?;
                }
                None => write!(f, ",")?,
            }
            fmt_node(f, points, right)
        }
        Node::Leaf { point, .. } => write!(f, "{}", points[*point as usize]),
    }
}
