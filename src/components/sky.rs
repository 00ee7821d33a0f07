//! Sky overlay marker and its day/night colors.

use bevy_ecs::prelude::Component;

use super::colorable::Color;

pub const DAY_COLOR: Color = Color::rgba(12.0, 32.0, 139.0, 0.0);
pub const NIGHT_COLOR: Color = Color::rgba(12.0, 32.0, 139.0, 128.0);
/// Seconds a day/night transition lasts.
pub const SKY_TRANSITION: f32 = 3.0;

/// Marks the entity the light system paints the night overlay on.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Sky;
