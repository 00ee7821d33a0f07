//! Tile spaces and tile positions.
//!
//! A [`TileSpace`] attached to an entity with a
//! [`Position`](super::position::Position) defines a named grid whose origin
//! is that position's top-left corner. A [`TilePosition`] places an entity on
//! such a grid; the tile system converts it to pixels every frame.

use bevy_ecs::prelude::Component;

/// Named grid with a pixels-per-unit ratio on each axis.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct TileSpace {
    pub name: String,
    pub ratio: (f32, f32),
}

impl TileSpace {
    pub fn new(name: impl Into<String>, ratio: (f32, f32)) -> Self {
        TileSpace {
            name: name.into(),
            ratio,
        }
    }
}

/// Fractional position on a named tile space.
///
/// `layer` orders entities sharing a row; rows further down draw on top.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct TilePosition {
    pub space: String,
    pub x: f32,
    pub y: f32,
    pub layer: f32,
}

impl TilePosition {
    pub fn new(space: impl Into<String>, pos: (f32, f32), layer: f32) -> Self {
        TilePosition {
            space: space.into(),
            x: pos.0,
            y: pos.1,
            layer,
        }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}
