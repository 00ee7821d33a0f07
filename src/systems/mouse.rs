//! Pointer hit-testing.
//!
//! The host turns raw pointer input into [`PointerEvent`](crate::events::input::PointerEvent)s
//! and the game forwards them here. Inactive entities are skipped; entities
//! without [`Activable`] count as active. Callbacks run with no component
//! borrowed, so they may freely change the world.

use bevy_ecs::prelude::Entity;

use crate::components::activable::Activable;
use crate::components::clickable::{Clickable, Hoverable, MouseButton};
use crate::components::position::Position;
use crate::ecs::{ComponentKind, World};
use crate::error::ScenarioError;

fn counts_as_active(world: &World, entity: Entity) -> bool {
    world
        .get_component::<Activable>(entity)
        .map(|a| a.active)
        .unwrap_or(true)
}

fn hit(world: &World, entity: Entity, x: f32, y: f32) -> bool {
    world
        .get_component::<Position>(entity)
        .map(|p| p.contains(x, y))
        .unwrap_or(false)
}

/// Invoke the callback of every active clickable under `(x, y)` bound to `button`.
pub fn on_pointer_pressed(
    world: &mut World,
    x: f32,
    y: f32,
    button: MouseButton,
) -> Result<(), ScenarioError> {
    for entity in world.query(&[ComponentKind::Position, ComponentKind::Clickable]) {
        if !counts_as_active(world, entity) || !hit(world, entity, x, y) {
            continue;
        }
        let Some(clickable) = world.get_component::<Clickable>(entity) else {
            continue;
        };
        if clickable.button == button {
            let callback = clickable.callback.clone();
            callback(world)?;
        }
    }
    Ok(())
}

/// Fire hover and unhover callbacks for a pointer now at `(x, y)`.
pub fn on_pointer_moved(world: &mut World, x: f32, y: f32) -> Result<(), ScenarioError> {
    for entity in world.query(&[ComponentKind::Position, ComponentKind::Hoverable]) {
        if !counts_as_active(world, entity) {
            continue;
        }
        let inside = hit(world, entity, x, y);
        let Some(mut hoverable) = world.get_component_mut::<Hoverable>(entity) else {
            continue;
        };
        let callback = if inside && !hoverable.is_hovered {
            hoverable.is_hovered = true;
            hoverable.on_hover.clone()
        } else if !inside && hoverable.is_hovered {
            hoverable.is_hovered = false;
            hoverable.on_unhover.clone()
        } else {
            continue;
        };
        callback(world)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::clickable::callback;
    use bevy_ecs::prelude::Resource;

    #[derive(Resource, Default)]
    struct Clicks(Vec<&'static str>);

    fn record(name: &'static str) -> crate::components::clickable::Callback {
        callback(move |w| {
            w.resource_mut::<Clicks>().0.push(name);
            Ok(())
        })
    }

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(Clicks::default());
        world
    }

    #[test]
    fn test_click_hits_matching_button_only() {
        let mut world = world();
        world.spawn((
            Position::new(0.0, 0.0, 10.0, 10.0),
            Clickable::new(MouseButton::Left, record("left")),
        ));
        world.spawn((
            Position::new(0.0, 0.0, 10.0, 10.0),
            Clickable::new(MouseButton::Right, record("right")),
        ));
        on_pointer_pressed(&mut world, 5.0, 5.0, MouseButton::Left).unwrap();
        on_pointer_pressed(&mut world, 50.0, 5.0, MouseButton::Right).unwrap();
        assert_eq!(world.resource::<Clicks>().0, vec!["left"]);
    }

    #[test]
    fn test_inactive_entities_ignore_clicks() {
        let mut world = world();
        let e = world.spawn((
            Position::new(0.0, 0.0, 10.0, 10.0),
            Clickable::new(MouseButton::Left, record("door")),
            Activable::new(false),
        ));
        on_pointer_pressed(&mut world, 1.0, 1.0, MouseButton::Left).unwrap();
        assert!(world.resource::<Clicks>().0.is_empty());

        world.require_mut::<Activable>(e).unwrap().toggle();
        on_pointer_pressed(&mut world, 1.0, 1.0, MouseButton::Left).unwrap();
        assert_eq!(world.resource::<Clicks>().0, vec!["door"]);
    }

    #[test]
    fn test_hover_enter_and_leave_fire_once() {
        let mut world = world();
        let e = world.spawn((
            Position::new(0.0, 0.0, 10.0, 10.0),
            Hoverable::new(record("enter"), record("leave")),
        ));
        on_pointer_moved(&mut world, 1.0, 1.0).unwrap();
        on_pointer_moved(&mut world, 2.0, 2.0).unwrap();
        assert!(world.get_component::<Hoverable>(e).unwrap().is_hovered);
        on_pointer_moved(&mut world, 20.0, 2.0).unwrap();
        on_pointer_moved(&mut world, 30.0, 2.0).unwrap();
        assert_eq!(world.resource::<Clicks>().0, vec!["enter", "leave"]);
    }
}
