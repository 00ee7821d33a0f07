//! Drawing boundary.
//!
//! Render callbacks never talk to a graphics backend directly. They receive a
//! [`Brush`], which anchors every primitive at the entity's resolved pixel
//! position and forwards it to a [`Surface`]. The game always draws into a
//! [`RecordingSurface`]; hosts replay the recorded [`DrawCommand`]s (the
//! raylib window does this in `render::window`, the headless runner just
//! drops them).
//!
//! Submodules overview:
//! - [`assets`] – lookup-or-load cache for backend assets keyed by file name
//! - `window` – raylib window host (feature `window`)

pub mod assets;
#[cfg(feature = "window")]
pub mod window;

use crate::components::colorable::Color;
use crate::components::position::Position;

/// One light ellipse of a [`LightOverlay`], relative to the overlay origin.
#[derive(Clone, Debug, PartialEq)]
pub struct LightPatch {
    /// Bounding rectangle of the ellipse.
    pub ellipse: Position,
    pub color: Color,
}

/// Night overlay: a filled rectangle with light ellipses painted over it.
///
/// Patches are painted in order; later patches replace what earlier ones
/// painted where they overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct LightOverlay {
    pub size: (f32, f32),
    pub fill: Color,
    pub patches: Vec<LightPatch>,
}

/// Drawing primitives a host backend must provide. Coordinates are absolute pixels.
pub trait Surface {
    fn draw_image(&mut self, key: &str, x: f32, y: f32);
    fn draw_rect(&mut self, rect: Position, color: Color, filled: bool);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
    fn draw_light_overlay(&mut self, x: f32, y: f32, overlay: &LightOverlay);
}

/// Primitive recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Image {
        key: String,
        x: f32,
        y: f32,
    },
    Rect {
        rect: Position,
        color: Color,
        filled: bool,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
    LightOverlay {
        x: f32,
        y: f32,
        overlay: LightOverlay,
    },
}

/// Surface that stores every primitive for later replay.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Image keys drawn so far, in draw order.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { key, .. } => Some(key.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn draw_image(&mut self, key: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Image {
            key: key.to_string(),
            x,
            y,
        });
    }

    fn draw_rect(&mut self, rect: Position, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            filled,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn draw_light_overlay(&mut self, x: f32, y: f32, overlay: &LightOverlay) {
        self.commands.push(DrawCommand::LightOverlay {
            x,
            y,
            overlay: overlay.clone(),
        });
    }
}

/// Surface handle given to render callbacks, offset to the entity position.
pub struct Brush<'a> {
    surface: &'a mut dyn Surface,
    origin: Position,
}

impl<'a> Brush<'a> {
    pub fn new(surface: &'a mut dyn Surface, origin: Position) -> Self {
        Brush { surface, origin }
    }

    /// Rectangle of the entity being drawn.
    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn draw_image(&mut self, key: &str) {
        self.draw_image_at(key, (0.0, 0.0));
    }

    pub fn draw_image_at(&mut self, key: &str, offset: (f32, f32)) {
        self.surface
            .draw_image(key, self.origin.x + offset.0, self.origin.y + offset.1);
    }

    pub fn draw_rect(&mut self, color: Color, offset: (f32, f32), size: (f32, f32), filled: bool) {
        let rect = Position::new(
            self.origin.x + offset.0,
            self.origin.y + offset.1,
            size.0,
            size.1,
        );
        self.surface.draw_rect(rect, color, filled);
    }

    pub fn draw_text(&mut self, text: &str, color: Color, size: f32) {
        self.surface
            .draw_text(text, self.origin.x, self.origin.y, size, color);
    }

    pub fn draw_light_overlay(&mut self, overlay: &LightOverlay) {
        self.surface
            .draw_light_overlay(self.origin.x, self.origin.y, overlay);
    }
}

/// Approximate pixel extent of `text` at `font_size`.
///
/// Used to size clickable text before any font is loaded.
pub fn text_size(text: &str, font_size: f32) -> (f32, f32) {
    (text.chars().count() as f32 * font_size * 0.5, font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_offsets_by_origin() {
        let mut surface = RecordingSurface::new();
        {
            let mut brush = Brush::new(&mut surface, Position::new(10.0, 20.0, 5.0, 5.0));
            brush.draw_image("a.png");
            brush.draw_rect(Color::WHITE, (30.0, 0.0), (30.0, 30.0), true);
            brush.draw_text("hi", Color::BLACK, 12.0);
        }
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Image {
                    key: "a.png".to_string(),
                    x: 10.0,
                    y: 20.0
                },
                DrawCommand::Rect {
                    rect: Position::new(40.0, 20.0, 30.0, 30.0),
                    color: Color::WHITE,
                    filled: true
                },
                DrawCommand::Text {
                    text: "hi".to_string(),
                    x: 10.0,
                    y: 20.0,
                    size: 12.0,
                    color: Color::BLACK
                },
            ]
        );
    }

    #[test]
    fn test_drain_empties_surface() {
        let mut surface = RecordingSurface::new();
        surface.draw_image("x.png", 0.0, 0.0);
        assert_eq!(surface.images().collect::<Vec<_>>(), vec!["x.png"]);
        assert_eq!(surface.drain().len(), 1);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_text_size_scales_with_length() {
        assert_eq!(text_size("Exit", 40.0), (80.0, 40.0));
    }
}
