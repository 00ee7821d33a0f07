//! The family's house: room, furniture, doors and windows, characters.
//!
//! Everything is placed on two tile spaces: `"ground"` (the floor, 10x8
//! cells) and `"wall"` (the room including its walls, 12x10 cells), both with
//! 50 pixel cells.

use bevy_ecs::prelude::Entity;

use crate::components::activable::Activable;
use crate::components::animation::{Animable, Animation};
use crate::components::character::{Character, Direction};
use crate::components::clickable::{Clickable, MouseButton, callback};
use crate::components::colorable::{Color, Colorable};
use crate::components::fear::{Frightenable, Frightening};
use crate::components::lightable::Lightable;
use crate::components::minimap::{Building, Room};
use crate::components::position::Position;
use crate::components::renderable::Renderable;
use crate::components::sky::{DAY_COLOR, Sky};
use crate::components::tile::{TilePosition, TileSpace};
use crate::ecs::World;
use crate::error::ScenarioError;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scenario::ScenarioState;
use crate::scheduler::actions::play_sound;
use crate::systems::minimap::create_minimap;

pub const GROUND: &str = "ground";
pub const WALL: &str = "wall";
const CELL: (f32, f32) = (50.0, 50.0);

pub const CHARACTER_FPS: f32 = 2.5;
pub const MINIMAP_ORIGIN: (f32, f32) = (700.0, 50.0);
const ROOM_SIZE: (f32, f32) = (30.0, 30.0);
const LIGHT_COLOR: Color = Color::rgba(205.0, 155.0, 29.0, 64.0);
const BOOKSHELF_SHIFT: f32 = 2.0;

pub const SOUND_FURNITURE: &str = "furniture";
pub const SOUND_WINDOW: &str = "window";

/// Handles on the entities the scenario script drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct House {
    pub father: Entity,
    pub mother: Entity,
    pub burglar: Entity,
    pub bubble: Entity,
    pub sky: Entity,
    pub fireplace: Entity,
    pub compartment: Entity,
    pub bookshelf: Entity,
    pub openings: Openings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Openings {
    pub up_door: Entity,
    pub left_door: Entity,
    pub down_door: Entity,
    pub right_door: Entity,
    pub up_window: Entity,
    pub left_window: Entity,
    pub down_window: Entity,
}

/// Spawn the whole house. Needs the [`ScenarioState`] resource for the
/// callbacks it installs.
pub fn build(world: &mut World) -> Result<House, ScenarioError> {
    spawn_room(world);
    spawn_furniture(world);
    let compartment = spawn_compartment(world);
    let father = spawn_character(world, (0.0, 4.5), "boy_chest", Direction::Right, true);
    let mother = spawn_mother(world)?;
    let burglar = spawn_burglar(world)?;
    let bubble = spawn_bubble(world);

    let openings = spawn_openings(world)?;
    spawn_building(world, &openings);
    let bookshelf = spawn_bookshelves(world)?;
    let fireplace = spawn_fireplace(world);
    let sky = spawn_sky(world);

    Ok(House {
        father,
        mother,
        burglar,
        bubble,
        sky,
        fireplace,
        compartment,
        bookshelf,
        openings,
    })
}

fn flicker_fps(world: &World) -> f32 {
    world
        .get_resource::<GameConfig>()
        .map(|config| config.flicker_fps as f32)
        .unwrap_or(6.0)
}

fn spawn_image(
    world: &mut World,
    image: &str,
    size: (f32, f32),
    space: &str,
    at: (f32, f32),
    layer: f32,
) -> Entity {
    world.spawn((
        Position::new(0.0, 0.0, size.0, size.1),
        Renderable::image(image, layer),
        TilePosition::new(space, at, layer),
    ))
}

/// Tile spaces, floor tiles and the surrounding walls.
pub fn spawn_room(world: &mut World) {
    let ground = Position::new(100.0, 100.0, 500.0, 400.0);
    let outer = Position::new(0.0, 0.0, 600.0, 500.0);
    world.spawn((ground, TileSpace::new(GROUND, CELL)));
    world.spawn((outer, TileSpace::new(WALL, CELL)));

    let (w, h) = CELL;
    for i in 0..(ground.w / w) as i32 {
        for j in 0..(ground.h / h) as i32 {
            spawn_image(world, "basic_ground_tile.png", (w, h), GROUND, (i as f32, j as f32), 0.0);
        }
    }

    let w_max = (outer.w / w) as i32;
    let h_max = (outer.h / h) as i32;
    let corners = [("tl", 0, 0), ("tr", w_max, 0), ("bl", 0, h_max), ("br", w_max, h_max)];
    for (corner, i, j) in corners {
        let image = format!("corner_tile_{corner}.png");
        spawn_image(world, &image, (2.0 * w, 2.0 * h), WALL, (i as f32, j as f32), 0.0);
    }
    for i in 2..w_max {
        let i = i as f32;
        spawn_image(world, "wall_tile_t.png", (w, 2.0 * h), WALL, (i, 0.0), 0.0);
        spawn_image(world, "wall_tile_b.png", (w, 2.0 * h), WALL, (i, h_max as f32), 0.0);
    }
    for j in 2..h_max {
        let j = j as f32;
        spawn_image(world, "wall_tile_l.png", (2.0 * w, h), WALL, (0.0, j), 0.0);
        spawn_image(world, "wall_tile_r.png", (2.0 * w, h), WALL, (w_max as f32, j), 0.0);
    }
}

fn spawn_furniture(world: &mut World) {
    spawn_image(world, "table_textured.png", (150.0, 100.0), GROUND, (1.0, 4.0), 1.0);
    spawn_image(world, "stool.png", (40.0, 40.0), GROUND, (2.0, 6.0), 1.0);
    spawn_image(world, "bookshelf.png", (50.0, 100.0), GROUND, (3.0, -1.5), 1.0);
}

/// The hiding place of the treasure, on the back wall.
fn spawn_compartment(world: &mut World) -> Entity {
    spawn_image(world, "compartment_open.png", (50.0, 50.0), WALL, (2.0, 0.3), 2.0)
}

fn spawn_opening(
    world: &mut World,
    image: &str,
    size: (f32, f32),
    at: (f32, f32),
    layer: f32,
) -> Result<Entity, ScenarioError> {
    let entity = spawn_image(world, image, size, WALL, at, layer);
    world.add_component(entity, Activable::new(false))?;
    Ok(entity)
}

/// Doors and windows, all closed until a room is selected.
pub fn spawn_openings(world: &mut World) -> Result<Openings, ScenarioError> {
    let up_door = spawn_opening(world, "door2_t.png", (50.0, 100.0), (8.0, 1.0), 1.0)?;
    let left_door = spawn_opening(world, "door2_l.png", (50.0, 100.0), (0.0, 6.0), 3.0)?;
    let down_door = spawn_opening(world, "door2_b.png", (50.0, 100.0), (8.0, 10.0), 3.0)?;
    let right_door = spawn_opening(world, "door2_r.png", (100.0, 50.0), (12.0, 6.0), 3.0)?;
    let up_window = spawn_opening(world, "window_t.png", (100.0, 100.0), (7.0, 1.0), 1.0)?;
    let left_window = spawn_opening(world, "window_l.png", (100.0, 100.0), (0.0, 3.0), 1.0)?;
    let down_window = spawn_opening(world, "window_b.png", (100.0, 100.0), (4.0, 10.0), 1.0)?;

    world.add_component(
        down_window,
        Clickable::new(
            MouseButton::Left,
            callback(move |world| toggle_down_window(world, down_window)),
        ),
    )?;

    Ok(Openings {
        up_door,
        left_door,
        down_door,
        right_door,
        up_window,
        left_window,
        down_window,
    })
}

fn toggle_down_window(world: &mut World, window: Entity) -> Result<(), ScenarioError> {
    let open = {
        let mut state = world.resource_mut::<ScenarioState>();
        state.down_window_open = !state.down_window_open;
        state.down_window_open
    };
    let mut renderable = world.require_mut::<Renderable>(window)?;
    if open {
        renderable.set_image_offset("window_semiopen_b.png", (-24.0, 0.0));
    } else {
        renderable.set_image("window_b.png");
    }
    play_sound(world, SOUND_WINDOW);
    Ok(())
}

/// Insert the [`Building`] resource and its minimap.
fn spawn_building(world: &mut World, o: &Openings) {
    world.insert_resource(Building::new(
        vec![
            Room::new((0.0, 0.0), vec![o.left_door, o.right_door, o.down_door, o.left_window]),
            Room::new((0.0, 30.0), vec![o.up_door, o.left_window]),
            Room::new((30.0, 0.0), vec![o.left_door, o.down_door, o.up_window]),
            Room::new((30.0, 30.0), vec![o.up_door, o.down_window]),
        ],
        ROOM_SIZE,
    ));
    create_minimap(world, MINIMAP_ORIGIN);
}

/// Three bookshelves against the back wall. The first one slides aside
/// when clicked and hides the compartment; it is returned.
fn spawn_bookshelves(world: &mut World) -> Result<Entity, ScenarioError> {
    let shelf = spawn_image(world, "bookshelf.png", (50.0, 100.0), GROUND, (2.0, 1.0), 1.0);
    world.add_components(
        shelf,
        (
            Animable::new(),
            Frightening::default(),
            Clickable::new(
                MouseButton::Left,
                callback(move |world| {
                    if world.resource::<ScenarioState>().bookshelf_can_move {
                        move_bookshelf(world, shelf)?;
                    }
                    Ok(())
                }),
            ),
        ),
    )?;
    for i in 3..5 {
        spawn_image(world, "bookshelf.png", (50.0, 100.0), GROUND, (i as f32, 1.0), 1.0);
    }
    Ok(shelf)
}

/// Slide the bookshelf over the compartment, or back if it already covers it.
pub fn move_bookshelf(world: &mut World, bookshelf: Entity) -> Result<(), ScenarioError> {
    let dx = {
        let mut state = world.resource_mut::<ScenarioState>();
        let dx = if state.bookshelf_moved {
            BOOKSHELF_SHIFT
        } else {
            -BOOKSHELF_SHIFT
        };
        state.bookshelf_moved = !state.bookshelf_moved;
        dx
    };
    world
        .require_mut::<Animable>(bookshelf)?
        .add(Animation::movement((dx, 0.0), 1.0));
    play_sound(world, SOUND_FURNITURE);
    Ok(())
}

fn spawn_fireplace(world: &mut World) -> Entity {
    let fps = flicker_fps(world);
    world.spawn((
        Position::new(0.0, 0.0, 100.0, 100.0),
        Renderable::image("fireplace.png", 1.0),
        TilePosition::new(GROUND, (8.0, 1.0), 1.0),
        Lightable::new(
            Position::new(-130.0, 60.0, 360.0, 120.0),
            Position::new(-230.0, 30.0, 560.0, 200.0),
            LIGHT_COLOR,
        ),
        Animable::with(Animation::flicker(fps)),
    ))
}

/// Spawn a character showing its idle sprite.
pub fn spawn_character(
    world: &mut World,
    at: (f32, f32),
    sprite_set: &str,
    direction: Direction,
    active: bool,
) -> Entity {
    let character = Character::new(sprite_set, direction, CHARACTER_FPS);
    world.spawn((
        Position::new(0.0, 0.0, 40.0, 80.0),
        Renderable::image(character.idle_sprite(), 2.0),
        TilePosition::new(GROUND, at, 2.0),
        Animable::new(),
        Activable::new(active),
        character,
    ))
}

/// The mother believes in ghosts.
fn spawn_mother(world: &mut World) -> Result<Entity, ScenarioError> {
    let mother = spawn_character(world, (1.0, 4.0), "girl", Direction::Left, true);
    world.add_component(
        mother,
        Frightenable::new(callback(|world| {
            world.resource_mut::<ScenarioState>().ghosts = true;
            Ok(())
        })),
    )?;
    Ok(mother)
}

/// The burglar carries a lantern and waits offstage.
fn spawn_burglar(world: &mut World) -> Result<Entity, ScenarioError> {
    let fps = flicker_fps(world);
    let burglar = spawn_character(world, (1.0, 4.0), "burglar_lantern", Direction::Left, false);
    world.add_component(
        burglar,
        Lightable::new(
            Position::new(-20.0, 10.0, 60.0, 60.0),
            Position::new(-70.0, -40.0, 160.0, 160.0),
            LIGHT_COLOR,
        ),
    )?;
    world
        .require_mut::<Animable>(burglar)?
        .add(Animation::flicker(fps));
    Ok(burglar)
}

/// The speech bubble shared by every character.
fn spawn_bubble(world: &mut World) -> Entity {
    world.spawn((
        Position::new(0.0, 0.0, 70.0, 70.0),
        Renderable::empty(20.0),
        TilePosition::new(GROUND, (0.0, 0.0), 20.0),
        Activable::new(false),
        Animable::new(),
    ))
}

/// Day/night tint over the room. The light system turns its plain
/// rectangle into the night overlay.
fn spawn_sky(world: &mut World) -> Entity {
    let size = (700.0, 550.0);
    world.spawn((
        Sky,
        Position::new(0.0, 0.0, size.0, size.1),
        Colorable::new(DAY_COLOR),
        Renderable::new(300.0, move |brush, color| {
            brush.draw_rect(color.unwrap_or(DAY_COLOR), (0.0, 0.0), size, true)
        }),
        Animable::new(),
    ))
}
