//! Pointer input events.
//!
//! This module defines [`PointerEvent`], the only input the game reacts to.
//! The host translates hardware input into these (the raylib loop polls the
//! mouse each frame, tests build them directly) and the game hands them to
//! [`dispatch`].

use crate::components::clickable::MouseButton;
use crate::ecs::World;
use crate::error::ScenarioError;
use crate::systems::mouse::{on_pointer_moved, on_pointer_pressed};

/// Discrete pointer event in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button went down at `(x, y)`.
    Pressed { x: f32, y: f32, button: MouseButton },
    /// The pointer is now at `(x, y)`.
    Moved { x: f32, y: f32 },
}

impl PointerEvent {
    pub fn position(&self) -> (f32, f32) {
        match *self {
            PointerEvent::Pressed { x, y, .. } | PointerEvent::Moved { x, y } => (x, y),
        }
    }
}

/// Route an event to the matching mouse handler.
pub fn dispatch(world: &mut World, event: PointerEvent) -> Result<(), ScenarioError> {
    match event {
        PointerEvent::Pressed { x, y, button } => on_pointer_pressed(world, x, y, button),
        PointerEvent::Moved { x, y } => on_pointer_moved(world, x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::clickable::{Clickable, callback};
    use crate::components::position::Position;
    use bevy_ecs::prelude::Resource;

    #[derive(Resource, Default)]
    struct Clicks(u32);

    #[test]
    fn test_press_reaches_clickable() {
        let mut world = World::new();
        world.insert_resource(Clicks::default());
        world.spawn((
            Position::new(0.0, 0.0, 10.0, 10.0),
            Clickable::new(
                MouseButton::Right,
                callback(|w| {
                    w.resource_mut::<Clicks>().0 += 1;
                    Ok(())
                }),
            ),
        ));

        let press = |button| PointerEvent::Pressed { x: 5.0, y: 5.0, button };
        dispatch(&mut world, press(MouseButton::Left)).unwrap();
        dispatch(&mut world, press(MouseButton::Right)).unwrap();
        dispatch(&mut world, PointerEvent::Moved { x: 5.0, y: 5.0 }).unwrap();
        assert_eq!(world.resource::<Clicks>().0, 1);
        assert_eq!(press(MouseButton::Left).position(), (5.0, 5.0));
    }
}
