//! Randomized cross-checks of the tree against the linear scan.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::rangetree::RangeTree;
use crate::scan::linear_scan;
use crate::r#type::IndexableNum;

fn sorted<T: IndexableNum, const D: usize>(mut points: Vec<Point<T, D>>) -> Vec<Point<T, D>> {
    points.sort_by(|a, b| a.partial_cmp(b).unwrap());
    points
}

/// Assert the tree and the linear scan agree on `[from, to]` as multisets.
fn check<T: IndexableNum, const D: usize>(
    tree: &RangeTree<T, D>,
    from: Point<T, D>,
    to: Point<T, D>,
) {
    let expected = sorted(linear_scan(tree.points(), &from, &to));
    let actual = sorted(tree.query(&from, &to));
    assert_eq!(
        actual, expected,
        "query {from} {to} diverged from the linear scan"
    );
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

#[test]
fn random_1d() {
    let mut rng = StdRng::seed_from_u64(42);
    let n: usize = rng.gen_range(500..=2000);
    let points: Vec<Point<i32, 1>> = (0..n)
        .map(|_| Point::new([rng.gen_range(-100..=100)]))
        .collect();
    let tree = RangeTree::new(points).unwrap();

    for _ in 0..n / 2 {
        let (lo, hi) = ordered(rng.gen_range(-100..=100), rng.gen_range(-100..=100));
        check(&tree, Point::new([lo]), Point::new([hi]));
    }
}

#[test]
fn random_2d() {
    let mut rng = StdRng::seed_from_u64(7);
    let n: usize = rng.gen_range(500..=2000);
    let points: Vec<Point<i32, 2>> = (0..n)
        .map(|_| {
            Point::new([rng.gen_range(-100..=100), rng.gen_range(-100..=100)])
        })
        .collect();
    let tree = RangeTree::new(points).unwrap();

    for _ in 0..n / 2 {
        let (x0, x1) = ordered(rng.gen_range(-100..=100), rng.gen_range(-100..=100));
        let (y0, y1) = ordered(rng.gen_range(-100..=100), rng.gen_range(-100..=100));
        check(&tree, Point::new([x0, y0]), Point::new([x1, y1]));
    }
}

#[test]
fn random_3d() {
    let mut rng = StdRng::seed_from_u64(1234);
    let n: usize = rng.gen_range(333..=666);
    let points: Vec<Point<f64, 3>> = (0..n)
        .map(|_| {
            Point::new([
                rng.gen_range(-100.0..=100.0),
                rng.gen_range(-100.0..=100.0),
                rng.gen_range(-100.0..=100.0),
            ])
        })
        .collect();
    let tree = RangeTree::new(points).unwrap();

    for _ in 0..n / 2 {
        let (x0, x1) = ordered(rng.gen_range(-100.0..=100.0), rng.gen_range(-100.0..=100.0));
        let (y0, y1) = ordered(rng.gen_range(-100.0..=100.0), rng.gen_range(-100.0..=100.0));
        let (z0, z1) = ordered(rng.gen_range(-100.0..=100.0), rng.gen_range(-100.0..=100.0));
        check(&tree, Point::new([x0, y0, z0]), Point::new([x1, y1, z1]));
    }
}

#[test]
fn random_duplicates_2d() {
    // a tiny coordinate universe so nearly every point repeats
    let mut rng = StdRng::seed_from_u64(99);
    let n: usize = rng.gen_range(500..=1000);
    let points: Vec<Point<i32, 2>> = (0..n)
        .map(|_| Point::new([rng.gen_range(0..=9), rng.gen_range(0..=9)]))
        .collect();
    let tree = RangeTree::new(points).unwrap();

    for _ in 0..n / 2 {
        let (x0, x1) = ordered(rng.gen_range(0..=9), rng.gen_range(0..=9));
        let (y0, y1) = ordered(rng.gen_range(0..=9), rng.gen_range(0..=9));
        check(&tree, Point::new([x0, y0]), Point::new([x1, y1]));
    }
}
