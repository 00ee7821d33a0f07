use bevy_ecs::prelude::Component;

/// Pixel rectangle: left, top, width, height.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Position { x, y, w, h }
    }

    /// Half-open containment test, right and bottom edges excluded.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Same rectangle moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Center the rectangle horizontally inside `[0, width)`.
    pub fn center_horizontally(&mut self, width: f32) {
        self.x = width / 2.0 - self.w / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_excludes_far_edges() {
        let p = Position::new(10.0, 20.0, 30.0, 40.0);
        assert!(p.contains(10.0, 20.0));
        assert!(p.contains(39.9, 59.9));
        assert!(!p.contains(40.0, 30.0));
        assert!(!p.contains(20.0, 60.0));
        assert!(!p.contains(9.9, 30.0));
    }

    #[test]
    fn test_center_horizontally() {
        let mut p = Position::new(0.0, 0.0, 200.0, 10.0);
        p.center_horizontally(800.0);
        assert_eq!(p.x, 300.0);
    }
}
