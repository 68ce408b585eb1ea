//! Split-node search and the canonical-subtree walk.
//!
//! Each level of the layered tree is searched the same way: descend to the
//! node where the paths for the two bounds diverge, then walk both paths,
//! reporting every maximal subtree that lies fully inside the bounds on this
//! axis. Reported subtrees are filtered on the remaining axes through their
//! associated trees; the innermost axis reports leaves directly.

use crate::point::Point;
use crate::rangetree::node::Node;
use crate::r#type::IndexableNum;

/// Search one tree level for points inside the half-open box `[from, to)`.
///
/// `axis` is the coordinate this level is keyed on. `to` must already be the
/// successor of the query's closed upper corner, so every key comparison
/// against it is strict.
pub(crate) fn search_level<T: IndexableNum, const D: usize>(
    points: &[Point<T, D>],
    root: &Node<T>,
    axis: usize,
    from: &Point<T, D>,
    to: &Point<T, D>,
    out: &mut Vec<Point<T, D>>,
) {
    let from_key = from.at(axis);
    let to_key = to.at(axis);

    let split = find_split_node(root, from_key, to_key);

    let Node::Inner { left, right, .. } = split else {
        // the descent bottomed out on a leaf
        visit_leaf(points, split, axis, from, to, out);
        return;
    };

    // Follow the path to `from`; subtrees right of the path are entirely
    // at or above `from` on this axis.
    let mut v = left.as_ref();
    while let Node::Inner { key, left, right, .. } = v {
        if from_key <= *key {
            report_subtree(points, right, axis, from, to, out);
            v = left;
        } else {
            v = right;
        }
    }
    visit_leaf(points, v, axis, from, to, out);

    // Follow the path to `to`; subtrees left of the path are entirely
    // below `to` on this axis.
    let mut v = right.as_ref();
    while let Node::Inner { key, left, right, .. } = v {
        if *key < to_key {
            report_subtree(points, left, axis, from, to, out);
            v = right;
        } else {
            v = left;
        }
    }
    visit_leaf(points, v, axis, from, to, out);
}

/// Descend from `v` to the node where the search paths for `from_key` and
/// `to_key` diverge, or to a leaf if they never do.
fn find_split_node<'a, T: IndexableNum>(
    mut v: &'a Node<T>,
    from_key: T,
    to_key: T,
) -> &'a Node<T> {
    while let Node::Inner { key, left, right, .. } = v {
        if to_key <= *key {
            v = left;
        } else if *key < from_key {
            v = right;
        } else {
            break;
        }
    }
    v
}

/// Report every point under `node`, filtered on the remaining axes.
///
/// Above the innermost axis this recurses into the associated tree, which
/// indexes the same point subset by the next coordinate. At the innermost
/// axis the subtree's bounds have already been enforced, so every leaf below
/// is reported unconditionally.
fn report_subtree<T: IndexableNum, const D: usize>(
    points: &[Point<T, D>],
    node: &Node<T>,
    axis: usize,
    from: &Point<T, D>,
    to: &Point<T, D>,
    out: &mut Vec<Point<T, D>>,
) {
    match node.assoc() {
        Some(assoc) => search_level(points, assoc, axis + 1, from, to, out),
        None => collect_leaves(points, node, out),
    }
}

/// A leaf reached directly by the split search or the end of a descent:
/// report its point iff its key lies inside `[from_key, to_key)`, subject to
/// the remaining axes.
fn visit_leaf<T: IndexableNum, const D: usize>(
    points: &[Point<T, D>],
    leaf: &Node<T>,
    axis: usize,
    from: &Point<T, D>,
    to: &Point<T, D>,
    out: &mut Vec<Point<T, D>>,
) {
    let key = leaf.key(points, axis);
    if from.at(axis) <= key && key < to.at(axis) {
        report_subtree(points, leaf, axis, from, to, out);
    }
}

/// Append every leaf point below `node` to the result.
fn collect_leaves<T: IndexableNum, const D: usize>(
    points: &[Point<T, D>],
    node: &Node<T>,
    out: &mut Vec<Point<T, D>>,
) {
    match node {
        Node::Inner { left, right, .. } => {
            collect_leaves(points, left, out);
            collect_leaves(points, right, out);
        }
        Node::Leaf { point, .. } => out.push(points[*point as usize]),
    }
}
