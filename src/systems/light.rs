//! Night lighting.
//!
//! Rebuilds the overlay of every [`Sky`] entity each frame: the sky color
//! with the ellipses of every switched-on [`Lightable`] painted over it.
//! Outer ellipses go first with alpha `a / (3 + flicker)`, inner ones
//! second with alpha `a / (1 + flicker)`, so overlapping inner cores stay
//! bright. The overlay is installed as the sky's draw callback.

use std::sync::Arc;

use crate::components::activable::Activable;
use crate::components::colorable::Colorable;
use crate::components::lightable::Lightable;
use crate::components::position::Position;
use crate::components::renderable::Renderable;
use crate::ecs::{ComponentKind, World};
use crate::error::EcsError;
use crate::render::{LightOverlay, LightPatch};

const OUTER_FADE: f32 = 3.0;
const INNER_FADE: f32 = 1.0;

pub fn update_lights(world: &mut World) -> Result<(), EcsError> {
    let lights: Vec<(Position, Lightable)> = world
        .query(&[ComponentKind::Position, ComponentKind::Lightable])
        .into_iter()
        .filter(|&e| {
            world
                .get_component::<Activable>(e)
                .map(|a| a.active)
                .unwrap_or(true)
        })
        .filter_map(|e| {
            let light = world.get_component::<Lightable>(e)?;
            let position = world.get_component::<Position>(e)?;
            light.toggled.then(|| (*position, light.clone()))
        })
        .collect();

    let skies = world.query(&[
        ComponentKind::Sky,
        ComponentKind::Position,
        ComponentKind::Colorable,
        ComponentKind::Renderable,
    ]);
    for sky in skies {
        let area = *world.require::<Position>(sky)?;
        let fill = world.require::<Colorable>(sky)?.color;

        let patch = |position: &Position, ellipse: &Position, light: &Lightable, fade: f32| {
            LightPatch {
                ellipse: ellipse.translated(position.x - area.x, position.y - area.y),
                color: light.color.faded(fade + light.flicker),
            }
        };
        let mut patches = Vec::with_capacity(lights.len() * 2);
        patches.extend(
            lights
                .iter()
                .map(|(position, light)| patch(position, &light.outer, light, OUTER_FADE)),
        );
        patches.extend(
            lights
                .iter()
                .map(|(position, light)| patch(position, &light.inner, light, INNER_FADE)),
        );

        let overlay = Arc::new(LightOverlay {
            size: (area.w, area.h),
            fill,
            patches,
        });
        world
            .require_mut::<Renderable>(sky)?
            .set_render(move |brush, _| brush.draw_light_overlay(&overlay));
    }
    Ok(())
}
