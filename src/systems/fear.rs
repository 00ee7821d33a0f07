//! Fear system.
//!
//! Furniture moving on its own scares a character watching it. A
//! [`Frightening`] entity counts as moving while its [`Animable`] holds a
//! move animation. A [`Frightenable`] entity that looks up while such an
//! entity is within [`FEAR_DISTANCE`] on the horizontal axis has its callback
//! invoked, once per frame for as long as that holds. The vertical distance
//! is ignored.

use crate::components::animation::Animable;
use crate::components::fear::{Frightenable, Frightening};
use crate::components::tile::TilePosition;
use crate::ecs::{ComponentKind, World};
use crate::error::ScenarioError;

/// Squared horizontal tile distance below which a watcher is frightened.
pub const FEAR_DISTANCE: f32 = 2.0;

pub fn update_fear(world: &mut World) -> Result<(), ScenarioError> {
    let watchers = world.query(&[ComponentKind::Frightenable, ComponentKind::TilePosition]);

    for entity in world.query(&[ComponentKind::Frightening, ComponentKind::TilePosition]) {
        let moving = world
            .get_component::<Animable>(entity)
            .map(Animable::is_moving)
            .unwrap_or(false);
        world.require_mut::<Frightening>(entity)?.moving = moving;
        if !moving {
            continue;
        }

        let fx = world.require::<TilePosition>(entity)?.x;
        for &watcher in &watchers {
            let (on_fright, look_up) = {
                let f = world.require::<Frightenable>(watcher)?;
                (f.on_fright.clone(), f.look_up)
            };
            let dx = world.require::<TilePosition>(watcher)?.x - fx;
            if look_up && dx * dx < FEAR_DISTANCE {
                on_fright(world)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::Animation;
    use crate::components::clickable::callback;
    use crate::resources::scenario::ScenarioState;
    use bevy_ecs::prelude::Entity;

    fn setup(shelf_x: f32, look_up: bool) -> (World, Entity) {
        setup_at((shelf_x, 1.0), look_up)
    }

    fn setup_at(shelf: (f32, f32), look_up: bool) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(ScenarioState::default());
        let shelf = world.spawn((
            TilePosition::new("ground", shelf, 1.0),
            Animable::new(),
            Frightening::default(),
        ));
        let mut frightenable = Frightenable::new(callback(|w| {
            w.resource_mut::<ScenarioState>().ghosts = true;
            Ok(())
        }));
        frightenable.look_up = look_up;
        world.spawn((TilePosition::new("ground", (1.0, 4.0), 2.0), frightenable));
        (world, shelf)
    }

    #[test]
    fn test_moving_shelf_frightens_watcher() {
        let (mut world, shelf) = setup(2.0, true);
        update_fear(&mut world).unwrap();
        assert!(!world.resource::<ScenarioState>().ghosts);

        world
            .require_mut::<Animable>(shelf)
            .unwrap()
            .add(Animation::movement((-2.0, 0.0), 1.0));
        update_fear(&mut world).unwrap();
        assert!(world.get_component::<Frightening>(shelf).unwrap().moving);
        assert!(world.resource::<ScenarioState>().ghosts);
    }

    #[test]
    fn test_watcher_looking_away_is_not_frightened() {
        let (mut world, shelf) = setup(2.0, false);
        world
            .require_mut::<Animable>(shelf)
            .unwrap()
            .add(Animation::movement((-2.0, 0.0), 1.0));
        update_fear(&mut world).unwrap();
        assert!(!world.resource::<ScenarioState>().ghosts);
    }

    #[test]
    fn test_far_shelf_is_not_frightening() {
        let (mut world, shelf) = setup(4.0, true);
        world
            .require_mut::<Animable>(shelf)
            .unwrap()
            .add(Animation::movement((-2.0, 0.0), 1.0));
        update_fear(&mut world).unwrap();
        assert!(!world.resource::<ScenarioState>().ghosts);
    }

    #[test]
    fn test_vertical_distance_is_ignored() {
        // Below the watcher and far down the room, but in the same column.
        let (mut world, shelf) = setup_at((1.5, 9.0), true);
        world
            .require_mut::<Animable>(shelf)
            .unwrap()
            .add(Animation::movement((0.0, 1.0), 1.0));
        update_fear(&mut world).unwrap();
        assert!(world.resource::<ScenarioState>().ghosts);
    }
}
