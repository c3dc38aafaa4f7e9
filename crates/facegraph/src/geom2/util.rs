use nalgebra::Vector2;

use super::types::Ray;

/// Intersect the closed segment `s..e` with `ray`.
///
/// Both are written as implicit lines `a·x + b·y = c` and solved with
/// Cramer's rule. An exactly-zero determinant (parallel or collinear) is
/// reported as no hit; collinear overlap is not resolved. A hit must lie
/// inside the segment's axis-aligned extent and strictly ahead of the ray
/// origin.
pub fn segment_ray_intersection(
    s: Vector2<f64>,
    e: Vector2<f64>,
    ray: &Ray,
) -> Option<Vector2<f64>> {
    let a0 = e.y - s.y;
    let b0 = s.x - e.x;
    let c0 = a0 * s.x + b0 * s.y;

    let r0 = ray.point;
    let r1 = ray.point + ray.dir;
    let a1 = r1.y - r0.y;
    let b1 = r0.x - r1.x;
    let c1 = a1 * r0.x + b1 * r0.y;

    let det = a0 * b1 - a1 * b0;
    if det == 0.0 {
        return None;
    }
    let x = (c0 * b1 - b0 * c1) / det;
    let y = (a0 * c1 - a1 * c0) / det;

    let h = s.x.min(e.x) <= x && x <= s.x.max(e.x);
    let v = s.y.min(e.y) <= y && y <= s.y.max(e.y);
    if !h || !v {
        return None;
    }
    let hit = Vector2::new(x, y);
    if (hit - r0).dot(&ray.dir) > 0.0 {
        // `+ 0.0` folds -0.0 into +0.0 so equal hits compare bit-equal.
        Some(Vector2::new(x + 0.0, y + 0.0))
    } else {
        None
    }
}

/// Clockwise angle in `[0, 2π)` from `back` to `out`.
///
/// At a traced vertex `back` points along the reversed incoming edge; the
/// smallest angle is the tightest left turn for the walker.
pub fn turn_angle(back: Vector2<f64>, out: Vector2<f64>) -> f64 {
    let back = back.normalize();
    let out = out.normalize();
    let dot = back.dot(&out);
    let det = out.x * back.y - out.y * back.x;
    let angle = det.atan2(dot);
    if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    }
}

/// Newell-style sum `Σ (x_i − x_{i+1})(y_i + y_{i+1})` over a closed cycle.
///
/// Equals twice the signed area: positive for counterclockwise cycles.
pub fn signed_area_sum<I>(cycle: I) -> f64
where
    I: IntoIterator<Item = Vector2<f64>>,
    I::IntoIter: Clone,
{
    let iter = cycle.into_iter();
    let Some(first) = iter.clone().next() else {
        return 0.0;
    };
    let mut sum = 0.0;
    let mut prev: Option<Vector2<f64>> = None;
    for cur in iter {
        if let Some(p) = prev {
            sum += (p.x - cur.x) * (p.y + cur.y);
        }
        prev = Some(cur);
    }
    if let Some(last) = prev {
        sum += (last.x - first.x) * (last.y + first.y);
    }
    sum
}
