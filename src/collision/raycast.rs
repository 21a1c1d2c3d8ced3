//! Ray queries against convex shapes.

use serde::{Deserialize, Serialize};

use super::sat::{collect_axes, project_onto_axis};
use crate::math::vec2::Vec2;
use crate::shapes::Shape2D;

/// Half-line starting at `origin`. `direction` is stored normalized, so `t`
/// values are distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray2D {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray2D {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction: direction.normalize() }
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// Scratch record filled by [`raycast`].
///
/// Build one per query site and pass it to every cast; each cast resets it
/// first, so no result is allocated per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaycastResult {
    pub point: Vec2,
    pub normal: Vec2,
    /// Distance along the ray; `-1.0` until a hit is recorded.
    pub t: f32,
    pub hit: bool,
}

impl RaycastResult {
    pub const NO_HIT_T: f32 = -1.0;

    pub fn new() -> Self {
        Self {
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            t: Self::NO_HIT_T,
            hit: false,
        }
    }

    pub fn init(&mut self, point: Vec2, normal: Vec2, t: f32, hit: bool) {
        self.point = point;
        self.normal = normal;
        self.t = t;
        self.hit = hit;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RaycastResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Casts `ray` against a convex shape, writing the nearest hit into `result`.
///
/// Clips the ray against the slab the shape occupies along each of its
/// separating axes. Flat and zero-size shapes are handled the same way, so a
/// zero-width box is only hit on its segment. A ray that starts inside the
/// shape hits at `t = 0` with the normal facing back along the ray.
pub fn raycast<S>(shape: &S, ray: &Ray2D, result: &mut RaycastResult) -> bool
where
    S: Shape2D + ?Sized,
{
    result.reset();

    let hull = shape.hull();
    if hull.is_empty() {
        return false;
    }
    let mut axes = Vec::with_capacity(hull.len());
    collect_axes(&hull, &mut axes);

    let mut t_enter = 0.0f32;
    let mut t_exit = f32::INFINITY;
    let mut enter_normal: Option<Vec2> = None;

    for axis in axes {
        let (lo, hi) = project_onto_axis(&hull, axis);
        let start = axis.dot(ray.origin);
        let speed = axis.dot(ray.direction);

        if speed.abs() < 1e-10 {
            // Parallel to the slab: starting outside it means a miss
            if start < lo || start > hi {
                return false;
            }
            continue;
        }

        // Entering through the low face exposes -axis, the high face +axis
        let (t_near, t_far, face_normal) = if speed > 0.0 {
            ((lo - start) / speed, (hi - start) / speed, -axis)
        } else {
            ((hi - start) / speed, (lo - start) / speed, axis)
        };

        if t_near > t_enter {
            t_enter = t_near;
            enter_normal = Some(face_normal);
        }
        t_exit = t_exit.min(t_far);

        if t_enter > t_exit {
            return false;
        }
    }

    let normal = enter_normal.unwrap_or(-ray.direction);
    result.init(ray.point_at(t_enter), normal, t_enter, true);
    true
}
