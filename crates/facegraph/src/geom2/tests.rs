use super::*;
use nalgebra::{vector, Vector2};
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn bbox_is_half_open() {
    let b = BoundingBox {
        position: vector![0.0, 0.0],
        size: vector![1.0, 2.0],
    };
    assert!(b.contains_point(vector![0.0, 0.0]));
    assert!(b.contains_point(vector![0.5, 1.999]));
    assert!(!b.contains_point(vector![1.0, 0.5]));
    assert!(!b.contains_point(vector![0.5, 2.0]));
    assert!(!b.contains_point(vector![-1e-12, 0.5]));
}

#[test]
fn bbox_from_points_reduces_min_max() {
    let pts = [vector![1.0, -2.0], vector![-3.0, 4.0], vector![0.5, 0.5]];
    let b = BoundingBox::from_points(pts).unwrap();
    assert_eq!(b.position, vector![-3.0, -2.0]);
    assert_eq!(b.size, vector![4.0, 6.0]);
    assert_eq!(b.max(), vector![1.0, 4.0]);
    assert!(BoundingBox::from_points(Vec::<Vector2<f64>>::new()).is_none());
}

#[test]
fn ray_normalizes_direction() {
    let r = Ray::new(vector![1.0, 1.0], vector![3.0, 4.0]);
    assert!((r.dir.norm() - 1.0).abs() < 1e-12);
    assert!((r.dir.x - 0.6).abs() < 1e-12);
    let shifted = r.translated(vector![0.0, 1e-6]);
    assert_eq!(shifted.dir, r.dir);
    assert!((shifted.point.y - (1.0 + 1e-6)).abs() < 1e-15);
}

#[test]
fn intersection_hits_segment_ahead() {
    let ray = Ray::new(vector![0.0, 0.5], RAY_DIR);
    let hit = segment_ray_intersection(vector![1.0, 0.0], vector![1.0, 1.0], &ray).unwrap();
    assert!((hit.x - 1.0).abs() < 1e-12);
    assert!((hit.y - 0.5).abs() < 1e-12);
    // Same line, reversed segment direction.
    assert!(segment_ray_intersection(vector![1.0, 1.0], vector![1.0, 0.0], &ray).is_some());
}

#[test]
fn intersection_rejects_behind_and_at_origin() {
    let ray = Ray::new(vector![2.0, 0.5], RAY_DIR);
    assert!(segment_ray_intersection(vector![1.0, 0.0], vector![1.0, 1.0], &ray).is_none());
    let on = Ray::new(vector![1.0, 0.5], RAY_DIR);
    assert!(segment_ray_intersection(vector![1.0, 0.0], vector![1.0, 1.0], &on).is_none());
}

#[test]
fn intersection_rejects_outside_segment_extent() {
    let ray = Ray::new(vector![0.0, 2.0], RAY_DIR);
    assert!(segment_ray_intersection(vector![1.0, 0.0], vector![1.0, 1.0], &ray).is_none());
}

#[test]
fn intersection_parallel_is_none() {
    let ray = Ray::new(vector![0.0, 0.0], RAY_DIR);
    // Parallel, offset.
    assert!(segment_ray_intersection(vector![0.0, 1.0], vector![2.0, 1.0], &ray).is_none());
    // Collinear overlap is a known limitation: reported as no hit.
    assert!(segment_ray_intersection(vector![1.0, 0.0], vector![2.0, 0.0], &ray).is_none());
}

#[test]
fn intersection_at_shared_vertex_has_equal_keys() {
    // Two diamond edges meeting at (1, 0); the computed hits must be
    // bit-identical (no -0.0 vs +0.0 split).
    let ray = Ray::new(vector![-0.5, 0.0], RAY_DIR);
    let a = segment_ray_intersection(vector![0.0, -1.0], vector![1.0, 0.0], &ray).unwrap();
    let b = segment_ray_intersection(vector![1.0, 0.0], vector![0.0, 1.0], &ray).unwrap();
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
    assert_eq!(a.y.to_bits(), 0.0f64.to_bits());
}

#[test]
fn turn_angle_is_clockwise_from_back() {
    let west = vector![-1.0, 0.0];
    assert!((turn_angle(west, vector![0.0, 1.0]) - FRAC_PI_2).abs() < 1e-12);
    assert!((turn_angle(west, vector![1.0, 0.0]) - PI).abs() < 1e-12);
    assert!((turn_angle(west, vector![0.0, -1.0]) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert!(turn_angle(west, vector![-2.0, 0.0]).abs() < 1e-12);
    // Unnormalized inputs give the same answer.
    assert!((turn_angle(west * 5.0, vector![0.0, 0.1]) - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn signed_area_sum_orientation() {
    let ccw = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!((signed_area_sum(ccw) - 2.0).abs() < 1e-12);
    let mut cw = ccw;
    cw.reverse();
    assert!((signed_area_sum(cw) + 2.0).abs() < 1e-12);
    // A two-vertex "cycle" (edge and twin) encloses nothing.
    assert_eq!(signed_area_sum([vector![0.0, 0.0], vector![1.0, 3.0]]), 0.0);
    assert_eq!(signed_area_sum(Vec::<Vector2<f64>>::new()), 0.0);
}
