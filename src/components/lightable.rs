use bevy_ecs::prelude::Component;

use super::colorable::Color;
use super::position::Position;

/// Light source drawn into the night overlay.
///
/// Both ellipses are bounding rectangles relative to the entity's
/// [`Position`]. `flicker` is added to the fade ratio and is driven by the
/// flicker animation.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Lightable {
    pub inner: Position,
    pub outer: Position,
    pub color: Color,
    pub toggled: bool,
    pub flicker: f32,
}

impl Lightable {
    pub fn new(inner: Position, outer: Position, color: Color) -> Self {
        Lightable {
            inner,
            outer,
            color,
            toggled: false,
            flicker: 0.0,
        }
    }

    pub fn toggle(&mut self, on: bool) {
        self.toggled = on;
    }
}
