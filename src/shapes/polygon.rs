use super::Shape2D;
use crate::collision::sat::collect_edge_normals;
use crate::common::{PhysicsError, Result};
use crate::math::point::Point64;
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;
use crate::objects::BodyHandle;

/// Represents a convex polygon that can be moved and rotated freely.
///
/// Vertices are kept relative to the polygon's centroid and in clockwise
/// order, whatever order they were supplied in.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    local_vertices: Vec<Vec2>,
    transform: Transform,
    size: Vec2,
    body: Option<BodyHandle>,
}

impl Polygon {
    /// Creates a polygon from world-space vertices at zero rotation. The
    /// polygon's position becomes their centroid.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        match Self::try_new(vertices) {
            Ok(polygon) => polygon,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible variant of [`Polygon::new`].
    /// TODO: Add validation for convexity.
    pub fn try_new(mut vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices(vertices.len()));
        }
        if signed_area(&vertices) > 0.0 {
            // Counter-clockwise input
            vertices.reverse();
        }
        let center = centroid(&vertices);
        let local_vertices: Vec<Vec2> = vertices.into_iter().map(|v| v - center).collect();
        let size = local_extent(&local_vertices);
        Ok(Polygon {
            local_vertices,
            transform: Transform::new(center, 0.0),
            size,
            body: None,
        })
    }

    /// Creates a rectangle centered on `position`, rotated by `rotation` radians.
    pub fn rectangle(position: Vec2, size: Vec2, rotation: f32) -> Self {
        let half = size.abs() * 0.5;
        let local_vertices = vec![
            Vec2::new(-half.x, -half.y),
            Vec2::new(-half.x, half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(half.x, -half.y),
        ];
        Polygon {
            local_vertices,
            transform: Transform::new(position, rotation),
            size: half * 2.0,
            body: None,
        }
    }

    pub fn with_body(mut self, body: BodyHandle) -> Self {
        self.body = Some(body);
        self
    }

    /// Vertices relative to the polygon's position, before rotation.
    pub fn local_vertices(&self) -> &[Vec2] {
        &self.local_vertices
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn area(&self) -> f32 {
        signed_area(&self.local_vertices).abs()
    }

    /// Outward unit normal of every edge, in world space.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        let mut normals = Vec::with_capacity(self.local_vertices.len());
        collect_edge_normals(&self.hull(), &mut normals);
        normals
    }
}

impl Shape2D for Polygon {
    fn position(&self) -> Vec2 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn rotation(&self) -> f32 {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.transform.rotation = rotation;
    }

    fn body(&self) -> Option<BodyHandle> {
        self.body
    }

    fn set_body(&mut self, body: Option<BodyHandle>) {
        self.body = body;
    }

    fn contains_point(&self, point: Point64) -> bool {
        let hull: Vec<Point64> = self.hull().into_iter().map(Point64::from).collect();
        // Bounds first; a flat or zero-size hull has no edge that rejects
        // points along its own line.
        let (min, max) = hull.iter().fold(
            (Point64::new(f64::INFINITY, f64::INFINITY), Point64::new(f64::NEG_INFINITY, f64::NEG_INFINITY)),
            |(lo, hi), p| (Point64::new(lo.x.min(p.x), lo.y.min(p.y)), Point64::new(hi.x.max(p.x), hi.y.max(p.y))),
        );
        if point.x < min.x || point.x > max.x || point.y < min.y || point.y > max.y {
            return false;
        }

        let n = hull.len();
        // Clockwise winding: inside points lie right of (or on) every edge.
        (0..n).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % n];
            if a == b {
                return true;
            }
            let cross = (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x);
            cross <= 0.0
        })
    }

    fn vertices(&self) -> Vec<Vec2> {
        self.hull()
    }

    fn hull(&self) -> Vec<Vec2> {
        self.local_vertices.iter().map(|&v| self.transform.apply(v)).collect()
    }
}

/// Positive for counter-clockwise vertex order, negative for clockwise.
fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        area += vertices[i].cross(vertices[(i + 1) % n]);
    }
    area / 2.0
}

/// Calculates the centroid (center of mass for uniform density) of the polygon.
fn centroid(vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    let mut centroid = Vec2::ZERO;
    let mut signed_area_sum = 0.0;
    let origin = vertices[0];

    for i in 1..(n - 1) {
        let v2 = vertices[i];
        let v3 = vertices[i + 1];

        let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
        signed_area_sum += triangle_signed_area;

        let triangle_centroid = (origin + v2 + v3) / 3.0;
        centroid += triangle_centroid * triangle_signed_area;
    }

    if signed_area_sum.abs() < 1e-10 {
        // Degenerate (e.g. collinear vertices): fall back to the vertex average
        let sum = vertices.iter().fold(Vec2::ZERO, |acc, v| acc + *v);
        sum / n as f32
    } else {
        centroid / signed_area_sum
    }
}

fn local_extent(vertices: &[Vec2]) -> Vec2 {
    let (min, max) = vertices
        .iter()
        .fold((vertices[0], vertices[0]), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    max - min
}
