use std::collections::HashMap;

use super::{BoxedForceGenerator, GeneratorHandle};
use crate::common::{Arena, PhysicsError, Result};
use crate::objects::rigid_body::{BodyHandle, RigidBody2D};

/// Composite identity of a registration: one body, one generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationKey {
    pub body: BodyHandle,
    pub generator: GeneratorHandle,
}

/// Immutable pairing of a generator with the body it pushes on.
///
/// Both sides are non-owning handles; the arenas own the objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForceRegistration {
    body: BodyHandle,
    generator: GeneratorHandle,
}

impl ForceRegistration {
    pub fn new(body: BodyHandle, generator: GeneratorHandle) -> Self {
        Self { body, generator }
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn generator(&self) -> GeneratorHandle {
        self.generator
    }

    pub fn key(&self) -> RegistrationKey {
        RegistrationKey { body: self.body, generator: self.generator }
    }
}

/// Active (body, generator) associations, applied once per tick.
#[derive(Debug, Clone, Default)]
pub struct ForceRegistry {
    registrations: HashMap<RegistrationKey, ForceRegistration>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `generator` against `body` and returns the key that removes it
    /// again. Registering the same pair twice keeps a single registration.
    pub fn add(&mut self, body: BodyHandle, generator: GeneratorHandle) -> RegistrationKey {
        let registration = ForceRegistration::new(body, generator);
        let key = registration.key();
        if self.registrations.insert(key, registration).is_some() {
            log::debug!("force registration {body} <- {generator} already present");
        } else {
            log::debug!("registered force {generator} on body {body}");
        }
        key
    }

    /// Removes the registration under `key`. Missing keys are ignored.
    pub fn remove_by_key(&mut self, key: RegistrationKey) -> Option<ForceRegistration> {
        let removed = self.registrations.remove(&key);
        if removed.is_some() {
            log::debug!("unregistered force {} from body {}", key.generator, key.body);
        }
        removed
    }

    pub fn remove(&mut self, body: BodyHandle, generator: GeneratorHandle) -> Option<ForceRegistration> {
        self.remove_by_key(RegistrationKey { body, generator })
    }

    /// Drops every registration that targets `body`. Returns how many were dropped.
    pub fn remove_body(&mut self, body: BodyHandle) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|key, _| key.body != body);
        let purged = before - self.registrations.len();
        if purged > 0 {
            log::debug!("purged {purged} force registration(s) of body {body}");
        }
        purged
    }

    /// Drops every registration that uses `generator`. Returns how many were dropped.
    pub fn remove_generator(&mut self, generator: GeneratorHandle) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|key, _| key.generator != generator);
        let purged = before - self.registrations.len();
        if purged > 0 {
            log::debug!("purged {purged} force registration(s) of generator {generator}");
        }
        purged
    }

    pub fn clear(&mut self) {
        if !self.registrations.is_empty() {
            log::debug!("clearing {} force registration(s)", self.registrations.len());
        }
        self.registrations.clear();
    }

    pub fn contains(&self, body: BodyHandle, generator: GeneratorHandle) -> bool {
        self.registrations.contains_key(&RegistrationKey { body, generator })
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Registrations in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &ForceRegistration> {
        self.registrations.values()
    }

    /// Runs every registered generator against its body.
    ///
    /// Bodies that are disabled or asleep are skipped but stay registered.
    /// Every handle is resolved before any force is applied: if one of them is
    /// dangling the call fails and no body is touched.
    pub fn update_forces(
        &self,
        bodies: &mut Arena<RigidBody2D>,
        generators: &Arena<BoxedForceGenerator>,
        dt: f32,
    ) -> Result<()> {
        for registration in self.registrations.values() {
            if !bodies.contains(registration.body) {
                return Err(PhysicsError::DanglingBody(registration.body));
            }
            if !generators.contains(registration.generator) {
                return Err(PhysicsError::DanglingGenerator(registration.generator));
            }
        }

        for registration in self.registrations.values() {
            let (Some(body), Some(generator)) = (
                bodies.get_mut(registration.body),
                generators.get(registration.generator),
            ) else {
                continue;
            };
            if !body.is_active() {
                log::trace!("body {} inactive, skipping force {}", registration.body, registration.generator);
                continue;
            }
            generator.update_force(body, dt);
        }
        Ok(())
    }
}
