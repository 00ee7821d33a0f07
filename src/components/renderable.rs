//! Draw callback component.
//!
//! The render system calls [`Renderable::render`] once per frame with a
//! [`Brush`] anchored at the entity's [`Position`](super::position::Position)
//! and, when the entity is [`Colorable`](super::colorable::Colorable), its
//! current color. Callbacks only draw; they never touch the world.

use std::fmt;
use std::sync::Arc;

use bevy_ecs::prelude::Component;

use super::colorable::Color;
use crate::render::Brush;

pub type RenderFn = Arc<dyn Fn(&mut Brush<'_>, Option<Color>) + Send + Sync>;

#[derive(Component, Clone)]
pub struct Renderable {
    pub render: RenderFn,
    /// Draw order, ascending.
    pub layer: f32,
    /// Image currently drawn, when the callback was installed by `set_image`.
    image: Option<String>,
}

impl Renderable {
    pub fn new<F>(layer: f32, render: F) -> Self
    where
        F: Fn(&mut Brush<'_>, Option<Color>) + Send + Sync + 'static,
    {
        Renderable {
            render: Arc::new(render),
            layer,
            image: None,
        }
    }

    /// Draws nothing until an image or callback is installed.
    pub fn empty(layer: f32) -> Self {
        Renderable::new(layer, |_, _| {})
    }

    pub fn image(key: impl Into<String>, layer: f32) -> Self {
        let mut renderable = Renderable::empty(layer);
        renderable.set_image(key);
        renderable
    }

    /// Replace the drawn image, blitted at the entity origin.
    pub fn set_image(&mut self, key: impl Into<String>) {
        self.set_image_offset(key, (0.0, 0.0));
    }

    /// Replace the drawn image, blitted at `offset` from the entity origin.
    pub fn set_image_offset(&mut self, key: impl Into<String>, offset: (f32, f32)) {
        let key: String = key.into();
        self.image = Some(key.clone());
        self.render = Arc::new(move |brush, _| brush.draw_image_at(&key, offset));
    }

    /// Replace the callback with an arbitrary one.
    pub fn set_render<F>(&mut self, render: F)
    where
        F: Fn(&mut Brush<'_>, Option<Color>) + Send + Sync + 'static,
    {
        self.image = None;
        self.render = Arc::new(render);
    }

    pub fn current_image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderable")
            .field("layer", &self.layer)
            .field("image", &self.image)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::position::Position;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn test_set_image_draws_at_origin_plus_offset() {
        let mut r = Renderable::image("door.png", 3.0);
        assert_eq!(r.current_image(), Some("door.png"));
        r.set_image_offset("door_open.png", (-24.0, 0.0));
        assert_eq!(r.current_image(), Some("door_open.png"));

        let mut surface = RecordingSurface::default();
        let mut brush = Brush::new(&mut surface, Position::new(100.0, 50.0, 10.0, 10.0));
        (r.render)(&mut brush, None);
        assert_eq!(
            surface.commands,
            vec![DrawCommand::Image {
                key: "door_open.png".to_string(),
                x: 76.0,
                y: 50.0
            }]
        );
    }

    #[test]
    fn test_set_render_forgets_image() {
        let mut r = Renderable::image("a.png", 0.0);
        r.set_render(|_, _| {});
        assert_eq!(r.current_image(), None);
    }
}
