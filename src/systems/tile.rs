//! Tile-to-pixel resolution.
//!
//! Every frame each [`TilePosition`] is resolved against the [`TileSpace`]
//! it names: `origin + tile * ratio` gives the pixel [`Position`] and
//! `tile_y * layers_per_cell + layer` the draw layer, so entities further
//! down the grid draw on top.

use rustc_hash::FxHashMap;

use crate::components::position::Position;
use crate::components::renderable::Renderable;
use crate::components::tile::{TilePosition, TileSpace};
use crate::ecs::{ComponentKind, World};
use crate::error::ScenarioError;

/// Resolved tile space: pixel origin and pixels per tile unit.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    origin: (f32, f32),
    ratio: (f32, f32),
}

fn tile_spaces(world: &World) -> FxHashMap<String, Frame> {
    let mut spaces = FxHashMap::default();
    for entity in world.query(&[ComponentKind::Position, ComponentKind::TileSpace]) {
        if let (Some(position), Some(space)) = (
            world.get_component::<Position>(entity),
            world.get_component::<TileSpace>(entity),
        ) {
            spaces.insert(
                space.name.clone(),
                Frame {
                    origin: (position.x, position.y),
                    ratio: space.ratio,
                },
            );
        }
    }
    spaces
}

/// Update `Position` and `Renderable::layer` of every tile entity.
pub fn update_tile_positions(world: &mut World, layers_per_cell: f32) -> Result<(), ScenarioError> {
    let spaces = tile_spaces(world);
    let kinds = [
        ComponentKind::Position,
        ComponentKind::Renderable,
        ComponentKind::TilePosition,
    ];
    for entity in world.query(&kinds) {
        let tile = world.require::<TilePosition>(entity)?.clone();
        let frame = spaces
            .get(&tile.space)
            .ok_or_else(|| ScenarioError::UnknownTileSpace(tile.space.clone()))?;

        let mut position = world.require_mut::<Position>(entity)?;
        position.x = frame.origin.0 + tile.x * frame.ratio.0;
        position.y = frame.origin.1 + tile.y * frame.ratio.1;

        world.require_mut::<Renderable>(entity)?.layer = tile.y * layers_per_cell + tile.layer;
    }
    Ok(())
}
