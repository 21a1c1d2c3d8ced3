use std::collections::BTreeMap;

use crate::collision::{CollisionManifold, SatDetector};
use crate::common::{Arena, PhysicsConfig, PhysicsError, Result};
use crate::forces::{
    BoxedForceGenerator, ForceGenerator, ForceRegistration, ForceRegistry, GeneratorHandle,
    Gravity2D, JumpForce, RegistrationKey,
};
use crate::integration::integrator;
use crate::objects::{BodyHandle, RigidBody2D};
use crate::shapes::{Shape, Shape2D};

/// Owns bodies, generators and shapes, and drives one simulation tick at a time.
///
/// Everything outside the world refers to its contents by handle. Removing a
/// body or generator also drops every registration and shape that pointed at it.
pub struct PhysicsWorld {
    bodies: Arena<RigidBody2D>,
    generators: Arena<BoxedForceGenerator>,
    registry: ForceRegistry,
    shapes: BTreeMap<BodyHandle, Shape>,
    detector: SatDetector,
    config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Creates a new, empty physics world with default settings.
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    pub fn with_config(config: PhysicsConfig) -> Self {
        log::debug!("creating physics world with {config:?}");
        Self {
            bodies: Arena::new(),
            generators: Arena::new(),
            registry: ForceRegistry::new(),
            shapes: BTreeMap::new(),
            detector: SatDetector::new(config.axis_scope),
            config,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    // --- Bodies ---

    pub fn add_body(&mut self, body: RigidBody2D) -> BodyHandle {
        self.bodies.insert(body)
    }

    /// Removes a body together with its shape and force registrations.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<RigidBody2D> {
        let body = self.bodies.remove(handle)?;
        self.registry.remove_body(handle);
        self.shapes.remove(&handle);
        log::debug!("removed body {handle}");
        Some(body)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody2D> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody2D> {
        self.bodies.get_mut(handle)
    }

    pub fn bodies(&self) -> &Arena<RigidBody2D> {
        &self.bodies
    }

    // --- Force generators ---

    pub fn add_generator<G>(&mut self, generator: G) -> GeneratorHandle
    where
        G: ForceGenerator + 'static,
    {
        self.generators.insert(Box::new(generator))
    }

    /// Adds a [`Gravity2D`] using the configured gravity.
    pub fn add_gravity(&mut self) -> GeneratorHandle {
        self.add_generator(Gravity2D::new(self.config.gravity))
    }

    /// Adds a [`JumpForce`] using the configured jump vector.
    pub fn add_jump(&mut self) -> GeneratorHandle {
        self.add_generator(JumpForce::new(self.config.jump_force))
    }

    /// Removes a generator and every registration that uses it.
    pub fn remove_generator(&mut self, handle: GeneratorHandle) -> Option<BoxedForceGenerator> {
        let generator = self.generators.remove(handle)?;
        self.registry.remove_generator(handle);
        log::debug!("removed force generator {handle}");
        Some(generator)
    }

    // --- Registrations ---

    /// Registers `generator` against `body`. Both handles must be live.
    pub fn register_force(&mut self, body: BodyHandle, generator: GeneratorHandle) -> Result<RegistrationKey> {
        if !self.bodies.contains(body) {
            return Err(PhysicsError::DanglingBody(body));
        }
        if !self.generators.contains(generator) {
            return Err(PhysicsError::DanglingGenerator(generator));
        }
        Ok(self.registry.add(body, generator))
    }

    pub fn unregister_force(&mut self, key: RegistrationKey) -> Option<ForceRegistration> {
        self.registry.remove_by_key(key)
    }

    pub fn registry(&self) -> &ForceRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ForceRegistry {
        &mut self.registry
    }

    // --- Shapes ---

    /// Attaches a shape to `body`, replacing any previous one. The shape is
    /// moved onto the body and follows it every step.
    pub fn attach_shape(&mut self, body: BodyHandle, shape: impl Into<Shape>) -> Result<()> {
        let position = self
            .bodies
            .get(body)
            .map(|b| b.position)
            .ok_or(PhysicsError::DanglingBody(body))?;
        let mut shape = shape.into();
        shape.set_body(Some(body));
        shape.set_position(position);
        self.shapes.insert(body, shape);
        Ok(())
    }

    pub fn detach_shape(&mut self, body: BodyHandle) -> Option<Shape> {
        let mut shape = self.shapes.remove(&body)?;
        shape.set_body(None);
        Some(shape)
    }

    pub fn shape(&self, body: BodyHandle) -> Option<&Shape> {
        self.shapes.get(&body)
    }

    // --- Simulation ---

    /// Advances the simulation by one time step `dt`: accumulate forces,
    /// integrate, then move shapes onto their bodies.
    pub fn step(&mut self, dt: f32) -> Result<()> {
        // NaN fails `dt <= 0.0`, so check finiteness first
        if !dt.is_finite() {
            log::warn!("ignoring step with non-finite dt {dt}");
            return Ok(());
        }
        if dt <= 0.0 {
            return Ok(());
        }

        self.registry.update_forces(&mut self.bodies, &self.generators, dt)?;

        for (_, body) in self.bodies.iter_mut() {
            integrator::integrate(body, dt);
        }

        for (handle, shape) in self.shapes.iter_mut() {
            if let Some(body) = self.bodies.get(*handle) {
                shape.set_position(body.position);
            }
        }
        Ok(())
    }

    /// Tests every pair of shaped bodies and reports the overlapping ones.
    ///
    /// Pairs where both bodies are static, or either body is disabled or
    /// asleep, are skipped. Contacts shallower than `contact_epsilon` are
    /// dropped.
    pub fn detect_collisions(&self) -> Vec<CollisionManifold> {
        let candidates: Vec<_> = self
            .shapes
            .iter()
            .filter_map(|(handle, shape)| {
                let body = self.bodies.get(*handle)?;
                body.is_active().then(|| (*handle, shape, body.is_static(), shape.bounds()))
            })
            .collect();

        let mut contacts = Vec::new();
        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                let (handle_a, shape_a, static_a, bounds_a) = &candidates[i];
                let (handle_b, shape_b, static_b, bounds_b) = &candidates[j];

                if *static_a && *static_b {
                    continue;
                }
                if !bounds_a.overlaps(bounds_b) {
                    continue;
                }

                if let Some(p) = self.detector.penetration(*shape_a, *shape_b) {
                    if p.depth >= self.config.contact_epsilon {
                        contacts.push(CollisionManifold {
                            body_a: *handle_a,
                            body_b: *handle_b,
                            normal: p.normal,
                            depth: p.depth,
                        });
                    }
                }
            }
        }
        contacts
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
