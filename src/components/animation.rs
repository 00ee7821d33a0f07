//! Animations and the component that carries them.
//!
//! An [`Animation`] is a time-bounded mutator of one entity's components.
//! Every variant owns its own progress and is advanced by
//! [`crate::systems::animation::update_animations`]; `advance` returns
//! `false` once the animation is finished, after its last effect has been
//! applied.
//!
//! Variants:
//! - [`TileMove`] – linear translation of the [`TilePosition`]
//! - [`SpriteCycle`] – walk cycle over a list of sprites on the [`Renderable`]
//! - [`ColorTransition`] – linear fade of the [`Colorable`] color
//! - [`Flicker`] – random flicker offset on the [`Lightable`], never ends
//! - [`Vanish`] – deactivates the entity after a delay

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

use super::activable::Activable;
use super::colorable::{Color, Colorable};
use super::lightable::Lightable;
use super::renderable::Renderable;
use super::tile::TilePosition;
use crate::ecs::World;
use crate::error::EcsError;

/// Remaining durations at or below this are treated as finished.
pub const EPSILON: f32 = 1e-6;

/// Upper bound (exclusive) of the random flicker offset.
pub const FLICKER_AMPLITUDE: f32 = 0.25;

/// Translates a [`TilePosition`] by a fixed displacement over a duration.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMove {
    /// Tiles per second.
    pub velocity: (f32, f32),
    pub remaining: f32,
}

impl TileMove {
    pub fn new(displacement: (f32, f32), duration: f32) -> Self {
        let duration = duration.max(EPSILON);
        TileMove {
            velocity: (displacement.0 / duration, displacement.1 / duration),
            remaining: duration,
        }
    }

    pub fn advance(&mut self, world: &mut World, entity: Entity, dt: f32) -> Result<bool, EcsError> {
        let step = dt.min(self.remaining);
        let mut tile = world.require_mut::<TilePosition>(entity)?;
        tile.x += self.velocity.0 * step;
        tile.y += self.velocity.1 * step;
        self.remaining -= dt;
        Ok(self.remaining > EPSILON)
    }
}

/// Cycles a [`Renderable`] through move sprites, ending on the idle one.
///
/// `sprites[0]` is the idle sprite, `sprites[1..]` the move sprites.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteCycle {
    pub sprites: Vec<String>,
    pub frame_period: f32,
    pub remaining: f32,
    current: usize,
    frame_elapsed: f32,
    started: bool,
}

impl SpriteCycle {
    pub fn new(duration: f32, fps: f32, sprites: Vec<String>) -> Self {
        SpriteCycle {
            sprites,
            frame_period: 1.0 / fps,
            remaining: duration,
            current: 0,
            frame_elapsed: 0.0,
            started: false,
        }
    }

    /// Index of the sprite currently shown.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self, world: &mut World, entity: Entity, dt: f32) -> Result<bool, EcsError> {
        let move_sprites = self.sprites.len().saturating_sub(1);
        let mut changed = false;

        if !self.started {
            self.started = true;
            if move_sprites > 0 {
                self.current = 1;
                changed = true;
            }
        }

        self.frame_elapsed += dt;
        if self.frame_elapsed > self.frame_period && move_sprites > 0 {
            self.current = self.current % move_sprites + 1;
            self.frame_elapsed = 0.0;
            changed = true;
        }

        self.remaining -= dt;
        let finished = self.remaining <= EPSILON;
        if finished {
            self.current = 0;
            changed = true;
        }

        if changed && !self.sprites.is_empty() {
            world
                .require_mut::<Renderable>(entity)?
                .set_image(self.sprites[self.current].clone());
        }
        Ok(!finished)
    }
}

/// Fades a [`Colorable`] toward `target` over a duration.
///
/// The start color is read on the first tick, not at construction, so an
/// earlier transition still running on the same entity is taken into account.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTransition {
    pub target: Color,
    pub remaining: f32,
    delta: Option<[f32; 4]>,
    current: [f32; 4],
}

impl ColorTransition {
    pub fn new(target: Color, duration: f32) -> Self {
        ColorTransition {
            target,
            remaining: duration.max(EPSILON),
            delta: None,
            current: [0.0; 4],
        }
    }

    pub fn advance(&mut self, world: &mut World, entity: Entity, dt: f32) -> Result<bool, EcsError> {
        let step = dt.min(self.remaining);
        let mut colorable = world.require_mut::<Colorable>(entity)?;

        let delta = match self.delta {
            Some(delta) => delta,
            None => {
                self.current = colorable.color.channels();
                let target = self.target.channels();
                let mut delta = [0.0; 4];
                for i in 0..4 {
                    delta[i] = (target[i] - self.current[i]) / self.remaining;
                }
                self.delta = Some(delta);
                delta
            }
        };

        for i in 0..4 {
            self.current[i] += delta[i] * step;
        }
        colorable.color = Color::from_channels(self.current);

        self.remaining -= dt;
        Ok(self.remaining > EPSILON)
    }
}

/// Re-rolls a [`Lightable`]'s flicker offset `fps` times per second.
#[derive(Clone, Debug, PartialEq)]
pub struct Flicker {
    pub period: f32,
    elapsed: f32,
}

impl Flicker {
    pub fn new(fps: f32) -> Self {
        Flicker {
            period: 1.0 / fps,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, world: &mut World, entity: Entity, dt: f32) -> Result<bool, EcsError> {
        self.elapsed += dt;
        if self.elapsed >= self.period {
            world.require_mut::<Lightable>(entity)?.flicker = fastrand::f32() * FLICKER_AMPLITUDE;
            self.elapsed %= self.period;
        }
        Ok(true)
    }
}

/// Deactivates the entity once its delay runs out.
#[derive(Clone, Debug, PartialEq)]
pub struct Vanish {
    pub remaining: f32,
}

impl Vanish {
    pub fn new(duration: f32) -> Self {
        Vanish { remaining: duration }
    }

    pub fn advance(&mut self, world: &mut World, entity: Entity, dt: f32) -> Result<bool, EcsError> {
        self.remaining -= dt;
        if self.remaining <= EPSILON {
            world.require_mut::<Activable>(entity)?.active = false;
            return Ok(false);
        }
        Ok(true)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Animation {
    Move(TileMove),
    SpriteCycle(SpriteCycle),
    ColorTransition(ColorTransition),
    Flicker(Flicker),
    Vanish(Vanish),
}

impl Animation {
    pub fn movement(displacement: (f32, f32), duration: f32) -> Self {
        Animation::Move(TileMove::new(displacement, duration))
    }

    pub fn sprite_cycle(duration: f32, fps: f32, sprites: Vec<String>) -> Self {
        Animation::SpriteCycle(SpriteCycle::new(duration, fps, sprites))
    }

    pub fn color_transition(target: Color, duration: f32) -> Self {
        Animation::ColorTransition(ColorTransition::new(target, duration))
    }

    pub fn flicker(fps: f32) -> Self {
        Animation::Flicker(Flicker::new(fps))
    }

    pub fn vanish(duration: f32) -> Self {
        Animation::Vanish(Vanish::new(duration))
    }

    /// Apply one tick to `entity`. Returns whether the animation is still running.
    pub fn advance(&mut self, world: &mut World, entity: Entity, dt: f32) -> Result<bool, EcsError> {
        match self {
            Animation::Move(a) => a.advance(world, entity, dt),
            Animation::SpriteCycle(a) => a.advance(world, entity, dt),
            Animation::ColorTransition(a) => a.advance(world, entity, dt),
            Animation::Flicker(a) => a.advance(world, entity, dt),
            Animation::Vanish(a) => a.advance(world, entity, dt),
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Animation::Move(_))
    }
}

/// Animations currently running on an entity.
#[derive(Component, Clone, Debug, Default)]
pub struct Animable {
    pub animations: SmallVec<[Animation; 2]>,
}

impl Animable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(animation: Animation) -> Self {
        let mut animable = Self::default();
        animable.add(animation);
        animable
    }

    pub fn add(&mut self, animation: Animation) {
        self.animations.push(animation);
    }

    pub fn add_all(&mut self, animations: impl IntoIterator<Item = Animation>) {
        self.animations.extend(animations);
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn is_moving(&self) -> bool {
        self.animations.iter().any(Animation::is_move)
    }
}
