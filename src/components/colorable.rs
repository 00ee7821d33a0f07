use bevy_ecs::prelude::Component;

/// RGBA color with channels in `0.0..=255.0`.
///
/// Channels are kept as floats so color transitions can accumulate
/// fractional steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(255.0, 255.0, 255.0);

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 255.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    pub fn channels(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_channels(c: [f32; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }

    /// Same color with its alpha divided by `ratio`, truncated to an integer.
    pub fn faded(&self, ratio: f32) -> Self {
        Color {
            a: (self.a / ratio).floor(),
            ..*self
        }
    }
}

/// Current color of an entity, passed to its render callback.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Colorable {
    pub color: Color,
}

impl Colorable {
    pub fn new(color: Color) -> Self {
        Colorable { color }
    }
}
