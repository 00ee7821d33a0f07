//! Activation flag.
//!
//! Entities whose [`Activable`] is off are skipped by the render and mouse
//! systems. Entities without the component always count as active.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activable {
    pub active: bool,
}

impl Default for Activable {
    fn default() -> Self {
        Activable { active: true }
    }
}

impl Activable {
    pub fn new(active: bool) -> Self {
        Activable { active }
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }
}
