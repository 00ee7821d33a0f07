//! Minimap: choose the family's room.
//!
//! [`create_minimap`] spawns one clickable cell per room of the
//! [`Building`] resource. Clicking an enabled cell calls [`select_room`],
//! which closes the openings of the previously selected room and opens the
//! new room's doors and windows. The scenario enables the cells only during
//! the evening, between the family leaving and the burglar arriving.

use bevy_ecs::prelude::Entity;
use log::debug;

use crate::components::activable::Activable;
use crate::components::clickable::{Clickable, MouseButton, callback};
use crate::components::colorable::{Color, Colorable};
use crate::components::minimap::{Building, MinimapCell};
use crate::components::position::Position;
use crate::components::renderable::Renderable;
use crate::ecs::{ComponentKind, World};
use crate::error::ScenarioError;

pub const MINIMAP_LAYER: f32 = 200.0;
pub const CELL_COLOR: Color = Color::WHITE;
pub const SELECTED_COLOR: Color = Color::rgb(205.0, 155.0, 29.0);

/// Spawn the cells of the [`Building`] resource with their top-left at `origin`.
///
/// Cells start disabled.
pub fn create_minimap(world: &mut World, origin: (f32, f32)) -> Vec<Entity> {
    let (rooms, size): (Vec<(f32, f32)>, (f32, f32)) = {
        let building = world.resource::<Building>();
        (
            building.rooms.iter().map(|r| r.position).collect(),
            building.room_size,
        )
    };

    rooms
        .into_iter()
        .enumerate()
        .map(|(index, (x, y))| {
            world.spawn((
                Position::new(origin.0 + x, origin.1 + y, size.0, size.1),
                Colorable::new(CELL_COLOR),
                Renderable::new(MINIMAP_LAYER, move |brush, color| {
                    brush.draw_rect(color.unwrap_or(CELL_COLOR), (0.0, 0.0), size, true);
                    brush.draw_rect(Color::BLACK, (0.0, 0.0), size, false);
                }),
                Clickable::new(
                    MouseButton::Left,
                    callback(move |world| select_room(world, index)),
                ),
                Activable::new(false),
                MinimapCell { room: index },
            ))
        })
        .collect()
}

/// Show or hide the minimap cells.
pub fn set_minimap_enabled(world: &mut World, enabled: bool) -> Result<(), ScenarioError> {
    for cell in world.query(&[ComponentKind::MinimapCell, ComponentKind::Activable]) {
        world.require_mut::<Activable>(cell)?.active = enabled;
    }
    Ok(())
}

/// Make room `index` the family's room.
pub fn select_room(world: &mut World, index: usize) -> Result<(), ScenarioError> {
    let (closing, opening) = {
        let building = world.resource::<Building>();
        if building.selected == Some(index) || index >= building.rooms.len() {
            return Ok(());
        }
        let closing = building
            .selected
            .map(|previous| building.rooms[previous].openings.clone())
            .unwrap_or_default();
        (closing, building.rooms[index].openings.clone())
    };
    debug!("room {index} selected");

    for entity in closing {
        world.require_mut::<Activable>(entity)?.active = false;
    }
    for entity in opening {
        world.require_mut::<Activable>(entity)?.active = true;
    }
    world.resource_mut::<Building>().selected = Some(index);

    for cell in world.query(&[ComponentKind::MinimapCell, ComponentKind::Colorable]) {
        let selected = world.require::<MinimapCell>(cell)?.room == index;
        world.require_mut::<Colorable>(cell)?.color =
            if selected { SELECTED_COLOR } else { CELL_COLOR };
    }
    Ok(())
}
