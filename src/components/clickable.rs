//! Mouse interaction components.
//!
//! Callbacks receive the [`World`] so they can toggle entities, queue
//! animations or request a screen change. They run from the mouse system,
//! never while a component is borrowed.

use std::fmt;
use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::ecs::World;
use crate::error::ScenarioError;

/// Gameplay callback invoked by the mouse and fear systems.
pub type Callback = Arc<dyn Fn(&mut World) -> Result<(), ScenarioError> + Send + Sync>;

/// Wrap a closure as a [`Callback`].
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(&mut World) -> Result<(), ScenarioError> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    /// Map a 1-based hardware button number; only left (1) and right (3) are used.
    pub fn from_number(button: u8) -> Option<Self> {
        match button {
            1 => Some(MouseButton::Left),
            3 => Some(MouseButton::Right),
            _ => None,
        }
    }
}

#[derive(Component, Clone)]
pub struct Clickable {
    pub callback: Callback,
    pub button: MouseButton,
}

impl Clickable {
    pub fn new(button: MouseButton, callback: Callback) -> Self {
        Clickable { callback, button }
    }
}

impl fmt::Debug for Clickable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clickable")
            .field("button", &self.button)
            .finish_non_exhaustive()
    }
}

/// Fires `on_hover` when the pointer enters the entity and `on_unhover` when it leaves.
#[derive(Component, Clone)]
pub struct Hoverable {
    pub on_hover: Callback,
    pub on_unhover: Callback,
    pub is_hovered: bool,
}

impl Hoverable {
    pub fn new(on_hover: Callback, on_unhover: Callback) -> Self {
        Hoverable {
            on_hover,
            on_unhover,
            is_hovered: false,
        }
    }
}

impl fmt::Debug for Hoverable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hoverable")
            .field("is_hovered", &self.is_hovered)
            .finish_non_exhaustive()
    }
}
