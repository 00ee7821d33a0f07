//! Scripted actions shared by step hooks and gameplay callbacks.

use bevy_ecs::prelude::Entity;
use log::debug;

use crate::components::activable::Activable;
use crate::components::animation::{Animable, Animation};
use crate::components::character::{Character, Direction};
use crate::components::fear::Frightenable;
use crate::components::renderable::Renderable;
use crate::components::tile::TilePosition;
use crate::ecs::World;
use crate::error::ScenarioError;
use crate::resources::soundcues::SoundCues;

/// Tile offset of the speech bubble from the character it belongs to.
pub const BUBBLE_OFFSET: (f32, f32) = (0.4, -1.4);

/// Whether the entity is active. Entities without [`Activable`] count as inactive.
pub fn is_active(world: &World, entity: Entity) -> bool {
    world
        .get_component::<Activable>(entity)
        .map(|a| a.active)
        .unwrap_or(false)
}

/// Walk `distance` tiles toward `direction` over `duration` seconds.
///
/// Faces the character that way and queues a tile move plus a walk cycle of
/// the new facing's sprites.
pub fn walk(
    world: &mut World,
    character: Entity,
    direction: Direction,
    distance: f32,
    duration: f32,
) -> Result<(), ScenarioError> {
    let (sprites, fps) = {
        let mut c = world.require_mut::<Character>(character)?;
        c.direction = direction;
        (c.sprites(), c.fps)
    };
    world.require_mut::<Animable>(character)?.add_all([
        Animation::movement(direction.vector(distance), duration),
        Animation::sprite_cycle(duration, fps, sprites),
    ]);
    Ok(())
}

/// Turn a character to `direction` and show its idle sprite.
///
/// A running walk cycle is stopped; a frightenable character looks up only
/// while facing up.
pub fn look(world: &mut World, character: Entity, direction: Direction) -> Result<(), ScenarioError> {
    let idle = {
        let mut c = world.require_mut::<Character>(character)?;
        c.direction = direction;
        c.idle_sprite()
    };
    world.require_mut::<Renderable>(character)?.set_image(idle);
    if let Some(mut animable) = world.get_component_mut::<Animable>(character) {
        animable
            .animations
            .retain(|a| !matches!(a, Animation::SpriteCycle(_)));
    }
    if let Some(mut frightenable) = world.get_component_mut::<Frightenable>(character) {
        frightenable.look_up = direction == Direction::Up;
    }
    Ok(())
}

/// Swap a character's sprite set, keeping its facing.
pub fn set_sprite_set(
    world: &mut World,
    character: Entity,
    sprite_set: &str,
) -> Result<(), ScenarioError> {
    let idle = {
        let mut c = world.require_mut::<Character>(character)?;
        c.sprite_set = sprite_set.to_string();
        c.idle_sprite()
    };
    world.require_mut::<Renderable>(character)?.set_image(idle);
    Ok(())
}

/// Pop the shared speech bubble over `character` for `duration` seconds.
///
/// The bubble must be inactive and carry [`Animable`], [`Renderable`] and
/// [`TilePosition`]; it deactivates itself through a vanish animation.
pub fn show_bubble(
    world: &mut World,
    character: Entity,
    bubble: Entity,
    image: &str,
    duration: f32,
) -> Result<(), ScenarioError> {
    if world.require::<Activable>(bubble)?.active {
        return Err(ScenarioError::BubbleBusy { bubble });
    }
    world.require::<Animable>(bubble)?;
    world.require::<Renderable>(bubble)?;

    let (x, y) = {
        let tile = world.require::<TilePosition>(character)?;
        (tile.x, tile.y)
    };
    world
        .require_mut::<TilePosition>(bubble)?
        .set(x + BUBBLE_OFFSET.0, y + BUBBLE_OFFSET.1);
    world.require_mut::<Renderable>(bubble)?.set_image(image);
    world.require_mut::<Activable>(bubble)?.active = true;
    world
        .require_mut::<Animable>(bubble)?
        .add(Animation::vanish(duration));
    Ok(())
}

/// Queue a sound cue if the world collects them.
pub fn play_sound(world: &mut World, cue: &'static str) {
    debug!("sound cue '{cue}'");
    if let Some(mut cues) = world.get_resource_mut::<SoundCues>() {
        cues.play(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::position::Position;

    fn character(world: &mut World) -> Entity {
        world.spawn((
            Position::new(0.0, 0.0, 40.0, 80.0),
            Renderable::empty(2.0),
            TilePosition::new("ground", (1.0, 4.0), 2.0),
            Animable::new(),
            Activable::new(true),
            Character::new("girl", Direction::Left, 2.5),
        ))
    }

    fn bubble(world: &mut World) -> Entity {
        world.spawn((
            Position::new(0.0, 0.0, 70.0, 70.0),
            Renderable::empty(20.0),
            TilePosition::new("ground", (0.0, 0.0), 20.0),
            Activable::new(false),
            Animable::new(),
        ))
    }

    #[test]
    fn test_walk_queues_move_and_cycle() {
        let mut world = World::new();
        let c = character(&mut world);
        walk(&mut world, c, Direction::Up, 3.5, 2.0).unwrap();
        let animable = world.get_component::<Animable>(c).unwrap();
        assert_eq!(animable.len(), 2);
        assert!(animable.is_moving());
        assert_eq!(
            world.get_component::<Character>(c).unwrap().direction,
            Direction::Up
        );
    }

    #[test]
    fn test_look_sets_idle_sprite_and_look_up() {
        let mut world = World::new();
        let c = character(&mut world);
        world
            .add_component(
                c,
                Frightenable::new(crate::components::clickable::callback(|_| Ok(()))),
            )
            .unwrap();
        walk(&mut world, c, Direction::Right, 1.0, 1.0).unwrap();

        look(&mut world, c, Direction::Up).unwrap();
        assert_eq!(
            world.get_component::<Renderable>(c).unwrap().current_image(),
            Some("girl_b_idle.png")
        );
        assert!(world.get_component::<Frightenable>(c).unwrap().look_up);
        // The move keeps going, the walk cycle is gone.
        let animable = world.get_component::<Animable>(c).unwrap();
        assert_eq!(animable.len(), 1);
        assert!(animable.is_moving());

        look(&mut world, c, Direction::Right).unwrap();
        assert!(!world.get_component::<Frightenable>(c).unwrap().look_up);
    }

    #[test]
    fn test_bubble_positions_over_character() {
        let mut world = World::new();
        let c = character(&mut world);
        let b = bubble(&mut world);
        show_bubble(&mut world, c, b, "bubble_smile.png", 1.0).unwrap();

        assert!(is_active(&world, b));
        let tile = world.get_component::<TilePosition>(b).unwrap();
        assert!((tile.x - 1.4).abs() < 1e-6);
        assert!((tile.y - 2.6).abs() < 1e-6);
        assert_eq!(
            world.get_component::<Renderable>(b).unwrap().current_image(),
            Some("bubble_smile.png")
        );
        assert_eq!(world.get_component::<Animable>(b).unwrap().len(), 1);
    }

    #[test]
    fn test_bubble_busy_is_an_error() {
        let mut world = World::new();
        let c = character(&mut world);
        let b = bubble(&mut world);
        show_bubble(&mut world, c, b, "a.png", 1.0).unwrap();
        assert_eq!(
            show_bubble(&mut world, c, b, "b.png", 1.0),
            Err(ScenarioError::BubbleBusy { bubble: b })
        );
    }

    #[test]
    fn test_bubble_without_animable_is_an_error() {
        let mut world = World::new();
        let c = character(&mut world);
        let b = world.spawn((
            Renderable::empty(20.0),
            TilePosition::new("ground", (0.0, 0.0), 20.0),
            Activable::new(false),
        ));
        assert!(matches!(
            show_bubble(&mut world, c, b, "a.png", 1.0),
            Err(ScenarioError::Ecs(_))
        ));
        assert!(!is_active(&world, b));
    }

    #[test]
    fn test_set_sprite_set_keeps_facing() {
        let mut world = World::new();
        let c = character(&mut world);
        set_sprite_set(&mut world, c, "boy").unwrap();
        assert_eq!(
            world.get_component::<Renderable>(c).unwrap().current_image(),
            Some("boy_r_idle.png")
        );
    }

    #[test]
    fn test_play_sound_collects_cues() {
        let mut world = World::new();
        play_sound(&mut world, "bubble");
        world.insert_resource(SoundCues::default());
        play_sound(&mut world, "window");
        assert_eq!(world.resource::<SoundCues>().pending(), &["window"]);
    }
}
