//! Building layout shown on the minimap.
//!
//! Each [`Room`] lists the doors and windows that exist when the family's
//! room is that one. The player picks a room by clicking its
//! [`MinimapCell`]; see [`crate::systems::minimap`].

use bevy_ecs::prelude::{Component, Entity, Resource};

#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    /// Offset of the cell on the minimap, in pixels.
    pub position: (f32, f32),
    /// Doors and windows activated while this room is selected.
    pub openings: Vec<Entity>,
}

impl Room {
    pub fn new(position: (f32, f32), openings: Vec<Entity>) -> Self {
        Room { position, openings }
    }
}

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Building {
    pub rooms: Vec<Room>,
    pub room_size: (f32, f32),
    pub selected: Option<usize>,
}

impl Building {
    pub fn new(rooms: Vec<Room>, room_size: (f32, f32)) -> Self {
        Building {
            rooms,
            room_size,
            selected: None,
        }
    }
}

/// Clickable minimap square standing for `rooms[room]`.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimapCell {
    pub room: usize,
}
