//! Curve flattening with a fixed number of segments per curve.

use glam::DVec2;

/// Appends `segments` points along a quadratic Bézier, excluding `from`.
pub fn flatten_quad(out: &mut Vec<DVec2>, from: DVec2, ctrl: DVec2, to: DVec2, segments: u32) {
    let segments = segments.max(1);
    for i in 1..=segments {
        let t = i as f64 / segments as f64;
        let mt = 1.0 - t;
        out.push(from * (mt * mt) + ctrl * (2.0 * mt * t) + to * (t * t));
    }
}

/// Appends `segments` points along a cubic Bézier, excluding `from`.
pub fn flatten_cubic(
    out: &mut Vec<DVec2>,
    from: DVec2,
    ctrl1: DVec2,
    ctrl2: DVec2,
    to: DVec2,
    segments: u32,
) {
    let segments = segments.max(1);
    for i in 1..=segments {
        let t = i as f64 / segments as f64;
        let mt = 1.0 - t;
        out.push(
            from * (mt * mt * mt)
                + ctrl1 * (3.0 * mt * mt * t)
                + ctrl2 * (3.0 * mt * t * t)
                + to * (t * t * t),
        );
    }
}
