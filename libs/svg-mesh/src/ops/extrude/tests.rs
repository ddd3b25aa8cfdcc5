//! # Extrusion Tests
//!
//! Layer layout, bevel extents, and watertightness of extruded shapes.

use std::collections::HashMap;

use super::*;
use approx::assert_relative_eq;

fn square_with_hole() -> Shape {
    let outer = Shape::rect(DVec2::ZERO, DVec2::splat(10.0)).outer;
    let hole = Shape::rect(DVec2::splat(3.0), DVec2::splat(4.0)).outer;
    Shape::with_holes(outer, vec![hole])
}

/// Every undirected edge of a closed surface is shared by exactly two faces.
fn is_watertight(mesh: &Mesh) -> bool {
    let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
    for tri in mesh.triangles() {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }
    edges.values().all(|&count| count == 2)
}

#[test]
fn test_profile_layers_span_bevels() {
    let layers = ExtrusionProfile::default().layers();
    assert_eq!(layers.len(), 12);

    let (z_first, offset_first) = layers[0];
    assert_relative_eq!(z_first, -3.0);
    assert_relative_eq!(offset_first, 0.0);

    // Wall layers sit at the full bevel size.
    assert_eq!(layers[5], (0.0, 3.0));
    assert_eq!(layers[6], (15.0, 3.0));

    let (z_last, offset_last) = layers[11];
    assert_relative_eq!(z_last, 18.0);
    assert_relative_eq!(offset_last, 0.0);
}

#[test]
fn test_profile_without_bevel() {
    let profile = ExtrusionProfile {
        bevel_segments: 0,
        ..Default::default()
    };
    assert_eq!(profile.layers(), vec![(0.0, 0.0), (15.0, 0.0)]);
}

#[test]
fn test_profile_validation() {
    let flat = ExtrusionProfile {
        depth: 0.0,
        ..Default::default()
    };
    assert!(flat.validate().is_err());

    let no_steps = ExtrusionProfile {
        steps: 0,
        ..Default::default()
    };
    assert!(no_steps.validate().is_err());
    assert!(ExtrusionProfile::default().validate().is_ok());
}

#[test]
fn test_extrude_square_face_count() {
    let square = Shape::rect(DVec2::ZERO, DVec2::splat(10.0));
    let mesh = extrude(&square, &ExtrusionProfile::default()).unwrap();

    // 2 + 2 cap triangles, 4 edges * 11 layer gaps * 2 side triangles
    assert_eq!(mesh.triangle_count(), 92);
    assert_eq!(mesh.vertex_count(), 92 * 3);
    assert_eq!(mesh.normals().unwrap().len(), mesh.vertex_count());
    assert!(mesh.validate());
}

#[test]
fn test_extrude_square_bounds_include_bevel() {
    let square = Shape::rect(DVec2::ZERO, DVec2::splat(10.0));
    let bounds = extrude(&square, &ExtrusionProfile::default())
        .unwrap()
        .bounding_box()
        .unwrap();

    assert_relative_eq!(bounds.min.x, -3.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.x, 13.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.min.y, -3.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.y, 13.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.min.z, -3.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.z, 18.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_merged_square_is_watertight() {
    let square = Shape::rect(DVec2::ZERO, DVec2::splat(10.0));
    let merged = extrude(&square, &ExtrusionProfile::default())
        .unwrap()
        .merge_vertices(1e-4);

    assert_eq!(merged.vertex_count(), 12 * 4);
    assert!(is_watertight(&merged));
}

#[test]
fn test_extrude_with_hole_is_watertight() {
    let merged = extrude(&square_with_hole(), &ExtrusionProfile::default())
        .unwrap()
        .merge_vertices(1e-4);

    assert_eq!(merged.vertex_count(), 12 * 8);
    assert!(is_watertight(&merged));
}

#[test]
fn test_extrude_orientation_independent() {
    let ccw = Shape::rect(DVec2::ZERO, DVec2::splat(10.0));
    let mut cw = ccw.clone();
    cw.outer.reverse();

    let a = extrude(&ccw, &ExtrusionProfile::default()).unwrap();
    let b = extrude(&cw, &ExtrusionProfile::default()).unwrap();
    assert_eq!(a.triangle_count(), b.triangle_count());
    assert_eq!(a.bounding_box(), b.bounding_box());
}

#[test]
fn test_side_normals_point_outward() {
    let square = Shape::rect(DVec2::ZERO, DVec2::splat(10.0));
    let mesh = extrude(&square, &ExtrusionProfile::default()).unwrap();
    let normals = mesh.normals().unwrap();

    for (tri, normal) in mesh.triangles().iter().zip(normals.iter().step_by(3)) {
        let centroid = (mesh.vertex(tri[0]) + mesh.vertex(tri[1]) + mesh.vertex(tri[2])) / 3.0;
        let from_center = centroid - DVec3::new(5.0, 5.0, 7.5);
        assert!(normal.dot(from_center) > 0.0, "inward face at {centroid:?}");
    }
}

#[test]
fn test_extrude_rejects_degenerate_shape() {
    let line = Shape::new(vec![DVec2::ZERO, DVec2::X]);
    assert!(extrude(&line, &ExtrusionProfile::default()).is_err());
}
