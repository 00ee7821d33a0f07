//! Components for the fear system.
//!
//! A [`Frightening`] entity (moving furniture) scares a [`Frightenable`]
//! one (a character looking up at it). See [`crate::systems::fear`].

use std::fmt;

use bevy_ecs::prelude::Component;

use super::clickable::Callback;

#[derive(Component, Clone)]
pub struct Frightenable {
    pub on_fright: Callback,
    pub look_up: bool,
}

impl Frightenable {
    pub fn new(on_fright: Callback) -> Self {
        Frightenable {
            on_fright,
            look_up: false,
        }
    }
}

impl fmt::Debug for Frightenable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frightenable")
            .field("look_up", &self.look_up)
            .finish_non_exhaustive()
    }
}

/// Set to moving by the fear system while the entity carries a move animation.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Frightening {
    pub moving: bool,
}
