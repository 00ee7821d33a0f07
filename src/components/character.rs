//! Scripted character data.
//!
//! Sprites follow the `"{set}_{facing}_idle.png"`, `"{set}_{facing}_move_1.png"`,
//! `"{set}_{facing}_move_2.png"` naming. The facing suffix names the side of
//! the sprite sheet, hence the crossed letters for left and right.

use bevy_ecs::prelude::Component;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn sprite_suffix(self) -> &'static str {
        match self {
            Direction::Left => "r",
            Direction::Right => "l",
            Direction::Down => "t",
            Direction::Up => "b",
        }
    }

    /// Unit tile vector scaled by `distance`.
    pub fn vector(self, distance: f32) -> (f32, f32) {
        match self {
            Direction::Left => (-distance, 0.0),
            Direction::Right => (distance, 0.0),
            Direction::Up => (0.0, -distance),
            Direction::Down => (0.0, distance),
        }
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct Character {
    pub sprite_set: String,
    pub direction: Direction,
    /// Walk cycle frames per second.
    pub fps: f32,
}

impl Character {
    pub fn new(sprite_set: impl Into<String>, direction: Direction, fps: f32) -> Self {
        Character {
            sprite_set: sprite_set.into(),
            direction,
            fps,
        }
    }

    /// Idle sprite first, then the move sprites.
    pub fn sprites(&self) -> Vec<String> {
        let suffix = self.direction.sprite_suffix();
        vec![
            format!("{}_{}_idle.png", self.sprite_set, suffix),
            format!("{}_{}_move_1.png", self.sprite_set, suffix),
            format!("{}_{}_move_2.png", self.sprite_set, suffix),
        ]
    }

    pub fn idle_sprite(&self) -> String {
        format!(
            "{}_{}_idle.png",
            self.sprite_set,
            self.direction.sprite_suffix()
        )
    }
}
