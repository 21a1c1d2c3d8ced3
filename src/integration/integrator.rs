use crate::objects::rigid_body::RigidBody2D;

/// Integrates the rigid body's state forward in time using Semi-Implicit Euler.
///
/// Static, disabled and sleeping bodies keep their state. The force accumulator
/// is cleared in every case so forces never leak into the next step.
pub fn integrate(body: &mut RigidBody2D, dt: f32) {
    if body.is_static() || !body.is_active() {
        body.clear_accumulators();
        return;
    }

    // v = v + (F/m)*dt, then p = p + v*dt
    let acceleration = body.force * body.inv_mass;
    body.velocity += acceleration * dt;
    body.position += body.velocity * dt;

    body.clear_accumulators();
}
