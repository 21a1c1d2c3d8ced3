//! Separating Axis Theorem test for convex polygons.
//!
//! Candidate axes are the edge normals of the shapes, plus edge directions
//! for flat or zero-size shapes. Any axis on which the
//! projected intervals do not overlap proves the shapes apart; otherwise the
//! axis with the smallest overlap is the resolution normal.

use serde::{Deserialize, Serialize};

use crate::common::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use crate::shapes::Shape2D;

/// Squared length below which an edge normal has no usable direction.
const DEGENERATE_AXIS: f32 = 1e-10;

/// Which shapes contribute candidate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScope {
    /// Edge normals of both shapes. Exact for any pair of convex polygons.
    #[default]
    Combined,
    /// Edge normals of the first shape only. Exact when both shapes share edge
    /// directions (e.g. two AABBs); may report false contacts for rotated pairs.
    FirstShapeOnly,
}

/// Minimum-penetration result of an overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit axis of least overlap, pointing from the first shape toward the second.
    pub normal: Vec2,
    /// Overlap along `normal`.
    pub depth: f32,
}

/// Unit normal of every edge `(v[i], v[(i + 1) % n])`, computed as the
/// clockwise perpendicular of `v[i] - v[i + 1]`. For clockwise vertex lists
/// the normals point outward. Zero-length edges give a zero normal.
pub fn edge_normals(vertices: &[Vec2]) -> Result<Vec<Vec2>> {
    if vertices.is_empty() {
        return Err(PhysicsError::EmptyVertexList);
    }
    let mut normals = Vec::with_capacity(vertices.len());
    collect_edge_normals(vertices, &mut normals);
    Ok(normals)
}

pub(crate) fn collect_edge_normals(vertices: &[Vec2], normals: &mut Vec<Vec2>) {
    let n = vertices.len();
    for i in 0..n {
        let edge = vertices[i] - vertices[(i + 1) % n];
        normals.push(edge.perpendicular().normalize());
    }
}

/// Candidate separating axes of a hull: its edge normals, minus zero ones.
///
/// A hull with zero-length edges (a flat or zero-size shape) is closed off
/// along its remaining edge directions, or along x and y when every edge is
/// degenerate, so the axes still bound the shape on every side.
pub(crate) fn collect_axes(vertices: &[Vec2], axes: &mut Vec<Vec2>) {
    let n = vertices.len();
    let mut degenerate = false;
    for i in 0..n {
        let normal = (vertices[i] - vertices[(i + 1) % n]).perpendicular().normalize();
        if normal.magnitude_squared() < DEGENERATE_AXIS {
            degenerate = true;
        } else {
            axes.push(normal);
        }
    }
    if !degenerate {
        return;
    }

    let mut closed = false;
    for i in 0..n {
        if let Some(direction) = (vertices[(i + 1) % n] - vertices[i]).try_normalize() {
            axes.push(direction);
            closed = true;
        }
    }
    if !closed {
        axes.push(Vec2::new(1.0, 0.0));
        axes.push(Vec2::UP);
    }
}

/// Projects a vertex set onto `axis` and returns the `(min, max)` interval.
pub fn project_onto_axis(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    vertices.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(min_proj, max_proj), v| {
        let projection = v.dot(axis);
        (min_proj.min(projection), max_proj.max(projection))
    })
}

/// Narrow-phase SAT detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SatDetector {
    pub axis_scope: AxisScope,
}

impl SatDetector {
    pub fn new(axis_scope: AxisScope) -> Self {
        Self { axis_scope }
    }

    /// Returns the resolution axis if the shapes overlap, `None` otherwise.
    pub fn detect<A, B>(&self, a: &A, b: &B) -> Option<Vec2>
    where
        A: Shape2D + ?Sized,
        B: Shape2D + ?Sized,
    {
        self.penetration(a, b).map(|p| p.normal)
    }

    /// Like [`SatDetector::detect`], also reporting the overlap depth.
    pub fn penetration<A, B>(&self, a: &A, b: &B) -> Option<Penetration>
    where
        A: Shape2D + ?Sized,
        B: Shape2D + ?Sized,
    {
        let hull_a = a.hull();
        let hull_b = b.hull();
        self.penetration_between(&hull_a, &hull_b, b.position() - a.position())
    }

    /// SAT over raw vertex lists. The returned normal is oriented from the
    /// vertex average of `a` toward that of `b`.
    pub fn penetration_of_vertices(&self, a: &[Vec2], b: &[Vec2]) -> Result<Option<Penetration>> {
        if a.is_empty() || b.is_empty() {
            return Err(PhysicsError::EmptyVertexList);
        }
        let center_offset = vertex_average(b) - vertex_average(a);
        Ok(self.penetration_between(a, b, center_offset))
    }

    fn penetration_between(&self, a: &[Vec2], b: &[Vec2], center_offset: Vec2) -> Option<Penetration> {
        let mut axes = Vec::with_capacity(a.len() + b.len());
        collect_axes(a, &mut axes);
        if self.axis_scope == AxisScope::Combined {
            collect_axes(b, &mut axes);
        }

        let mut min_overlap = f32::INFINITY;
        let mut mtv_axis = Vec2::ZERO; // Minimum Translation Vector axis

        for axis in axes {
            let (min_a, max_a) = project_onto_axis(a, axis);
            let (min_b, max_b) = project_onto_axis(b, axis);

            if max_a < min_b || max_b < min_a {
                log::trace!("separating axis found: {axis:?}");
                return None;
            }

            let overlap = max_a.min(max_b) - min_a.max(min_b);
            if overlap < min_overlap {
                min_overlap = overlap;
                mtv_axis = axis;
            }
        }

        if !min_overlap.is_finite() {
            // Nothing was tested
            return None;
        }

        // Orient from A toward B
        let normal = if center_offset.dot(mtv_axis) < 0.0 { -mtv_axis } else { mtv_axis };
        Some(Penetration { normal, depth: min_overlap })
    }
}

fn vertex_average(vertices: &[Vec2]) -> Vec2 {
    vertices.iter().fold(Vec2::ZERO, |acc, v| acc + *v) / vertices.len() as f32
}
