//! Debug-only invariant checks.
//!
//! Every function here compiles down to nothing in release builds; in debug builds they panic with a message
//! pointing at the caller.

use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use approx::*;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn normal3(n: impl Borrow<Vector3>) {
    debug_assert_only!();
    let n = n.borrow();
    vector3(n);
    assert!(
        n.is_normalized(),
        "should be normalised; vec: {n:?}, len: {:?}",
        n.length()
    );
}

#[inline(always)]
#[track_caller]
pub fn point3(v: impl Borrow<Point3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn uv(uv: impl Borrow<Point2>) {
    debug_assert_only!();
    let uv = uv.borrow();
    assert!(!uv.is_nan(), "should not be nan; uvs: {uv:?}");
}

/// Asserts that a probability density is usable: not NaN, and not negative
#[inline(always)]
#[track_caller]
pub fn pdf(val: impl Borrow<Number>) {
    debug_assert_only!();
    let val = val.borrow();
    number(val);
    assert!(*val >= 0., "probability density should be >= 0; val: {val}");
}

/// Asserts that the corners of a box are ordered
#[inline(always)]
#[track_caller]
pub fn aabb(aabb: impl Borrow<Aabb>) {
    debug_assert_only!();
    let aabb = aabb.borrow();
    point3(aabb.min());
    point3(aabb.max());
    assert!(
        aabb.min().x <= aabb.max().x && aabb.min().y <= aabb.max().y && aabb.min().z <= aabb.max().z,
        "aabb corners should be ordered; aabb: {aabb:?}"
    );
}

/// Asserts that an intersection was valid
#[inline(always)]
#[track_caller]
pub fn intersection(
    ray: impl Borrow<Ray>,
    intersect: impl Borrow<Intersection>,
    interval: impl Borrow<Interval<Number>>,
) {
    debug_assert_only!();

    let intersect = intersect.borrow();
    let interval = interval.borrow();
    let ray = ray.borrow();

    uv(&intersect.uv);

    point3(intersect.pos_w);
    number(intersect.dist);

    assert!(
        interval.contains(&intersect.dist),
        "intersect dist {} not in interval {}",
        intersect.dist,
        interval
    );

    // Dist between start and end should match `.dist` field
    let ray_len = (ray.pos() - intersect.pos_w).length();
    assert_relative_eq!(
        ray_len,
        intersect.dist.abs(),
        epsilon = EPSILON,
        max_relative = RELATIVE
    );

    let expected = ray.at(intersect.dist);
    let actual = intersect.pos_w;
    assert!(
        [
            (actual.x, expected.x),
            (actual.y, expected.y),
            (actual.z, expected.z)
        ]
        .into_iter()
        .all(|(a, e)| relative_eq!(a, e, epsilon = EPSILON, max_relative = RELATIVE)),
        "intersect position doesn't match ray at intersection dist; intersect_pos: {actual:?}, dist: {dist}, ray: {ray:?}, ray_pos: {expected:?}",
        dist = intersect.dist,
    );

    normal3(intersect.ray_normal);
    normal3(intersect.normal);
}
