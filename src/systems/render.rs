//! Render pass.
//!
//! Collects active entities holding a [`Position`] and a [`Renderable`],
//! sorts them by layer (stable, so equal layers keep creation order) and
//! invokes each draw callback with a [`Brush`] anchored at the entity and
//! its [`Colorable`] color when it has one.

use crate::components::activable::Activable;
use crate::components::colorable::Colorable;
use crate::components::position::Position;
use crate::components::renderable::Renderable;
use crate::ecs::{ComponentKind, World};
use crate::render::{Brush, Surface};

/// Draw the world onto `surface`. Returns the number of entities drawn.
pub fn render_system(world: &World, surface: &mut dyn Surface) -> usize {
    let mut to_draw: Vec<_> = world
        .query(&[ComponentKind::Position, ComponentKind::Renderable])
        .into_iter()
        .filter(|&e| {
            world
                .get_component::<Activable>(e)
                .map(|a| a.active)
                .unwrap_or(true)
        })
        .filter_map(|e| {
            let position = *world.get_component::<Position>(e)?;
            let renderable = world.get_component::<Renderable>(e)?;
            let color = world.get_component::<Colorable>(e).map(|c| c.color);
            Some((renderable.layer, position, renderable.render.clone(), color))
        })
        .collect();

    to_draw.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_, position, render, color) in &to_draw {
        let mut brush = Brush::new(&mut *surface, *position);
        render(&mut brush, *color);
    }
    to_draw.len()
}
