//! Text entities for the title and ending screens.

use bevy_ecs::prelude::Entity;

use crate::components::clickable::{Callback, Clickable, Hoverable, MouseButton, callback};
use crate::components::colorable::{Color, Colorable};
use crate::components::position::Position;
use crate::components::renderable::Renderable;
use crate::ecs::World;
use crate::error::ScenarioError;
use crate::render::text_size;

/// Spawn a line of text with its top-left corner at `(x, y)`.
///
/// The entity's [`Position`] spans the approximate text extent so it can be
/// hit-tested and centered.
pub fn spawn_text(
    world: &mut World,
    text: &str,
    color: Color,
    font_size: f32,
    (x, y): (f32, f32),
) -> Entity {
    let (w, h) = text_size(text, font_size);
    let text = text.to_string();
    world.spawn((
        Position::new(x, y, w, h),
        Colorable::new(color),
        Renderable::new(0.0, move |brush, color| {
            brush.draw_text(&text, color.unwrap_or(Color::WHITE), font_size)
        }),
    ))
}

/// Spawn text drawn in `idle` that switches to `hover` under the pointer.
pub fn spawn_hoverable_text(
    world: &mut World,
    text: &str,
    idle: Color,
    hover: Color,
    font_size: f32,
    at: (f32, f32),
) -> Result<Entity, ScenarioError> {
    let entity = spawn_text(world, text, idle, font_size, at);
    let recolor = move |color: Color| {
        callback(move |world| {
            world.require_mut::<Colorable>(entity)?.color = color;
            Ok(())
        })
    };
    world.add_component(entity, Hoverable::new(recolor(hover), recolor(idle)))?;
    Ok(entity)
}

/// Make a text entity react to left clicks.
pub fn on_click(world: &mut World, entity: Entity, action: Callback) -> Result<(), ScenarioError> {
    world.add_component(entity, Clickable::new(MouseButton::Left, action))?;
    Ok(())
}

/// Center the entity horizontally in a window `width` pixels wide.
pub fn center_horizontally(world: &mut World, entity: Entity, width: f32) -> Result<(), ScenarioError> {
    world.require_mut::<Position>(entity)?.center_horizontally(width);
    Ok(())
}
