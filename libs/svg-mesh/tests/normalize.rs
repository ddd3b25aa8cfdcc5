use glam::{DVec2, DVec3};
use svg_mesh::ops::triangulate;
use svg_mesh::path::{PathSource, UsvgSource, VectorPath};
use config::constants::TessellationConfig;
use svg_mesh::{extrude, normalize, ExtrusionProfile, MeshError, Normalizer, Shape, SurfaceMaterial};

fn document(body: &str) -> String {
    format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200">{body}</svg>"#)
}

#[test]
fn single_rect_yields_one_mesh() {
    let svg = document(r#"<path d="M10 10 H60 V40 H10 Z"/>"#);
    let group = normalize(&svg, &SurfaceMaterial::shared()).unwrap();
    assert_eq!(group.len(), 1);
}

#[test]
fn centered_group_straddles_origin() {
    let inputs = [
        document(r#"<rect x="120" y="30" width="50" height="20"/>"#),
        document(r#"<circle cx="40" cy="150" r="25"/><rect x="100" y="10" width="5" height="90"/>"#),
        document(r#"<path d="M0 0 H100 V100 H0 Z M25 25 V75 H75 V25 Z"/>"#),
    ];
    for svg in &inputs {
        let bounds = normalize(svg, &SurfaceMaterial::shared())
            .unwrap()
            .bounding_box()
            .unwrap();
        assert!(bounds.min.x < 0.0 && bounds.max.x > 0.0);
        assert!(bounds.min.y < 0.0 && bounds.max.y > 0.0);
        assert!(bounds.center().x.abs() < 1e-9);
        assert!(bounds.center().y.abs() < 1e-9);
    }
}

#[test]
fn normalization_is_deterministic() {
    let svg = document(r#"<circle cx="50" cy="50" r="30"/><rect x="90" width="10" height="10"/>"#);
    let material = SurfaceMaterial::shared();
    let first = normalize(&svg, &material).unwrap();
    let second = normalize(&svg, &material).unwrap();

    assert_eq!(first.vertex_count(), second.vertex_count());
    assert_eq!(first.triangle_count(), second.triangle_count());
    assert_eq!(first.bounding_box(), second.bounding_box());
}

#[test]
fn final_mesh_is_one_fifth_of_extrusion() {
    let svg = document(r#"<rect x="10" y="10" width="40" height="70"/>"#);
    let paths = UsvgSource::default().parse(&svg).unwrap();
    let shape = UsvgSource::default().shapes_of(&paths[0]).unwrap().remove(0);
    let extruded = extrude(&shape, &ExtrusionProfile::default())
        .unwrap()
        .bounding_box()
        .unwrap()
        .size();

    let group = normalize(&svg, &SurfaceMaterial::shared()).unwrap();
    let final_size = group.bounding_box().unwrap().size();

    assert!((final_size.x / extruded.x - 0.2).abs() < 1e-9);
    assert!((final_size.y / extruded.y - 0.2).abs() < 1e-9);
}

#[test]
fn group_mirrors_vertical_axis() {
    // The apex sits at the top of the document (smallest y, since SVG y
    // grows downward) and must end up with the largest y after the mirror.
    let svg = document(r#"<path d="M0 100 L50 0 L100 100 Z"/>"#);
    let group = normalize(&svg, &SurfaceMaterial::shared()).unwrap();
    let baked = group.bake();

    let apex = baked
        .vertices()
        .iter()
        .copied()
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .unwrap();
    assert!(apex.x.abs() < 1.0, "apex should be near the vertical axis, got {apex:?}");
}

#[test]
fn hole_is_excluded_from_caps() {
    let outer = Shape::rect(DVec2::ZERO, DVec2::splat(10.0)).outer;
    let hole = Shape::rect(DVec2::splat(3.0), DVec2::splat(4.0)).outer;
    let shape = Shape::with_holes(outer, vec![hole]);

    let points: Vec<DVec2> = shape
        .outer
        .iter()
        .chain(shape.holes.iter().flatten())
        .copied()
        .collect();
    let area: f64 = triangulate(&shape)
        .unwrap()
        .iter()
        .map(|[a, b, c]| (points[*b] - points[*a]).perp_dot(points[*c] - points[*a]).abs() / 2.0)
        .sum();

    assert!((area - 84.0).abs() < 1e-9);
}

#[test]
fn merging_welds_vertices_and_normals_are_unit() {
    let svg = document(r#"<path d="M0 0 H100 V100 H0 Z M25 25 V75 H75 V25 Z"/>"#);
    let group = normalize(&svg, &SurfaceMaterial::shared()).unwrap();
    let child = &group.children()[0];

    let soup = extrude(
        &UsvgSource::default()
            .shapes_of(&UsvgSource::default().parse(&svg).unwrap()[0])
            .unwrap()[0],
        &ExtrusionProfile::default(),
    )
    .unwrap();
    assert!(child.geometry.vertex_count() < soup.vertex_count());

    let normals = child.geometry.normals().unwrap();
    assert_eq!(normals.len(), child.geometry.vertex_count());
    for n in normals {
        assert!((n.length() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn empty_document_yields_empty_group() {
    let group = normalize(&document(""), &SurfaceMaterial::shared()).unwrap();
    assert!(group.is_empty());
    assert!(group.bounding_box().is_none());
}

#[test]
fn markup_without_namespace_is_accepted() {
    let svg = r#"<svg width="100" height="100"><rect x="10" y="10" width="40" height="40"/></svg>"#;
    let group = normalize(svg, &SurfaceMaterial::shared()).unwrap();
    assert_eq!(group.len(), 1);
}

#[test]
fn malformed_markup_is_a_parse_error() {
    let err = normalize("<svg><path", &SurfaceMaterial::shared()).unwrap_err();
    assert!(matches!(err, MeshError::Parse(_)));
}

#[test]
fn fewer_curve_segments_give_fewer_vertices() {
    let svg = document(r#"<circle cx="50" cy="50" r="40"/>"#);
    let material = SurfaceMaterial::shared();
    let coarse_config = TessellationConfig::new(3, 1e-4).unwrap();

    let fine = Normalizer::new().normalize(&svg, &material).unwrap();
    let coarse = Normalizer::new()
        .with_config(coarse_config)
        .normalize(&svg, &material)
        .unwrap();

    assert!(coarse.vertex_count() < fine.vertex_count());
    // Both are whole rings of the twelve-layer profile.
    assert_eq!(fine.vertex_count() % 12, 0);
    assert_eq!(coarse.vertex_count() % 12, 0);
}

#[test]
fn profile_without_bevel_has_two_rings() {
    let svg = document(r#"<rect width="10" height="10"/>"#);
    let profile = ExtrusionProfile {
        bevel_segments: 0,
        ..Default::default()
    };
    let group = Normalizer::new()
        .with_profile(profile)
        .normalize(&svg, &SurfaceMaterial::shared())
        .unwrap();

    assert_eq!(group.vertex_count(), 2 * 4);
    let bounds = group.children()[0].geometry.bounding_box().unwrap();
    assert_eq!(bounds.min.z, 0.0);
    assert_eq!(bounds.max.z, 15.0);
}

struct FixedSource(Vec<Shape>);

impl PathSource for FixedSource {
    fn parse(&self, _markup: &str) -> Result<Vec<VectorPath>, MeshError> {
        Ok(vec![VectorPath::default()])
    }

    fn shapes_of(&self, _path: &VectorPath) -> Result<Vec<Shape>, MeshError> {
        Ok(self.0.clone())
    }
}

#[test]
fn custom_path_source_drives_the_pipeline() {
    let shapes = vec![
        Shape::rect(DVec2::ZERO, DVec2::splat(10.0)),
        Shape::circle(DVec2::new(40.0, 5.0), 5.0, 16),
    ];
    let group = Normalizer::with_source(FixedSource(shapes))
        .normalize("", &SurfaceMaterial::shared())
        .unwrap();

    assert_eq!(group.len(), 2);
    for child in group.children() {
        assert_eq!(child.transform.scale, DVec3::splat(0.2));
    }
}
