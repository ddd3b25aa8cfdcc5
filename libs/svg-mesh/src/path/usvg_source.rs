//! `usvg`-backed [`PathSource`].
//!
//! `usvg` resolves styles, converts basic shapes (rect, circle, ellipse,
//! polygon, ...) and text into paths, and exposes each path's absolute
//! transform, which is baked into the flattened contours here.

use std::borrow::Cow;

use config::constants::{CURVE_SEGMENTS, EPSILON};
use glam::DVec2;
use usvg::tiny_skia_path::{PathSegment, Point};
use usvg::{Node, Options, Transform, Tree};

use super::flatten::{flatten_cubic, flatten_quad};
use super::{Contour, FillRule, PathSource, VectorPath};
use crate::error::MeshError;

/// Parses SVG markup with `usvg` and flattens every path element.
#[derive(Debug, Clone, Copy)]
pub struct UsvgSource {
    curve_segments: u32,
}

impl Default for UsvgSource {
    fn default() -> Self {
        Self {
            curve_segments: CURVE_SEGMENTS,
        }
    }
}

impl UsvgSource {
    /// Creates a source flattening each curve into `curve_segments` lines.
    pub fn new(curve_segments: u32) -> Self {
        Self {
            curve_segments: curve_segments.max(1),
        }
    }

    fn collect(&self, group: &usvg::Group, out: &mut Vec<VectorPath>) {
        for child in group.children() {
            match child {
                Node::Group(g) => self.collect(g, out),
                Node::Path(p) => {
                    let fill_rule = match p.fill().map(|f| f.rule()) {
                        Some(usvg::FillRule::EvenOdd) => FillRule::EvenOdd,
                        _ => FillRule::NonZero,
                    };
                    let contours = self.flatten(p.data(), &p.abs_transform());
                    if contours.is_empty() {
                        tracing::debug!("skipping path without closed contours");
                        continue;
                    }
                    out.push(VectorPath::new(contours, fill_rule));
                }
                Node::Text(t) => self.collect(t.flattened(), out),
                Node::Image(_) => {
                    tracing::debug!("skipping embedded image");
                }
            }
        }
    }

    fn flatten(&self, data: &usvg::tiny_skia_path::Path, ts: &Transform) -> Vec<Contour> {
        let map = |p: Point| -> DVec2 {
            let (x, y) = (p.x as f64, p.y as f64);
            DVec2::new(
                ts.sx as f64 * x + ts.kx as f64 * y + ts.tx as f64,
                ts.ky as f64 * x + ts.sy as f64 * y + ts.ty as f64,
            )
        };

        let mut contours = Vec::new();
        let mut current: Contour = Vec::new();
        let mut cursor = DVec2::ZERO;

        for segment in data.segments() {
            match segment {
                PathSegment::MoveTo(p) => {
                    finish_contour(&mut current, &mut contours);
                    cursor = map(p);
                    current.push(cursor);
                }
                PathSegment::LineTo(p) => {
                    cursor = map(p);
                    current.push(cursor);
                }
                PathSegment::QuadTo(c, p) => {
                    let to = map(p);
                    flatten_quad(&mut current, cursor, map(c), to, self.curve_segments);
                    cursor = to;
                }
                PathSegment::CubicTo(c1, c2, p) => {
                    let to = map(p);
                    flatten_cubic(&mut current, cursor, map(c1), map(c2), to, self.curve_segments);
                    cursor = to;
                }
                PathSegment::Close => {
                    if let Some(&first) = current.first() {
                        cursor = first;
                    }
                    finish_contour(&mut current, &mut contours);
                }
            }
        }
        finish_contour(&mut current, &mut contours);

        contours
    }
}

/// Removes repeated points (including a closing duplicate of the first
/// point) and keeps the contour if it still has at least three points.
fn finish_contour(current: &mut Contour, contours: &mut Vec<Contour>) {
    let mut contour = std::mem::take(current);
    contour.dedup_by(|b, a| a.distance_squared(*b) < EPSILON);
    while contour.len() > 1 {
        let (first, last) = (contour[0], contour[contour.len() - 1]);
        if first.distance_squared(last) < EPSILON {
            contour.pop();
        } else {
            break;
        }
    }
    if contour.len() >= 3 {
        contours.push(contour);
    }
}

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Adds the SVG default namespace to a root `<svg>` element that lacks one.
///
/// `usvg` only recognizes elements in the SVG namespace, while hand-written
/// and many exported files omit `xmlns`. The prolog (declaration, comments,
/// doctype) is skipped to find the root element; markup whose root is not
/// an unprefixed `svg` element is returned unchanged.
pub(super) fn with_svg_namespace(markup: &str) -> Cow<'_, str> {
    let Some(start) = root_element_start(markup) else {
        return Cow::Borrowed(markup);
    };
    let tag = &markup[start..];
    let name_end = 4;
    let is_svg = tag.starts_with("<svg")
        && tag[name_end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace() || c == '>' || c == '/');
    if !is_svg {
        return Cow::Borrowed(markup);
    }

    let tag_end = tag.find('>').unwrap_or(tag.len());
    let has_default_ns = tag[..tag_end]
        .match_indices("xmlns")
        .any(|(i, _)| tag[i + 5..tag_end].trim_start().starts_with('='));
    if has_default_ns {
        return Cow::Borrowed(markup);
    }

    tracing::debug!("adding missing svg namespace to root element");
    let insert_at = start + name_end;
    Cow::Owned(format!(
        r#"{} xmlns="{SVG_NAMESPACE}"{}"#,
        &markup[..insert_at],
        &markup[insert_at..]
    ))
}

/// Byte offset of the root element's `<`, skipping the XML prolog.
fn root_element_start(markup: &str) -> Option<usize> {
    let mut pos = 0;
    loop {
        let offset = markup[pos..].find('<')?;
        let at = pos + offset;
        let rest = &markup[at..];
        pos = if rest.starts_with("<!--") {
            at + rest.find("-->")? + 3
        } else if rest.starts_with("<?") || rest.starts_with("<!") {
            at + rest.find('>')? + 1
        } else {
            return Some(at);
        };
    }
}

impl PathSource for UsvgSource {
    fn parse(&self, markup: &str) -> Result<Vec<VectorPath>, MeshError> {
        let markup = with_svg_namespace(markup);
        let tree = Tree::from_str(&markup, &Options::default())?;
        let mut paths = Vec::new();
        self.collect(tree.root(), &mut paths);
        tracing::debug!(paths = paths.len(), "parsed svg markup");
        Ok(paths)
    }
}
