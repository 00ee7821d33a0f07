//! Game systems.
//!
//! This module groups the per-frame passes that advance the scenario and
//! draw it. Each one is a plain function over the [`World`](crate::ecs::World);
//! [`crate::game::Game::update`] runs them in frame order.
//!
//! Submodules overview
//! - [`animation`] – advance every running animation and detach finished ones
//! - [`fear`] – mark moving furniture and frighten characters watching it
//! - [`light`] – rebuild the night overlay from switched-on lights
//! - [`minimap`] – spawn the room cells and switch doors and windows per room
//! - [`mouse`] – hit-test pointer events against clickable and hoverable entities
//! - [`render`] – draw active renderables in layer order onto a surface
//! - [`tile`] – resolve tile positions to pixel positions and draw layers
//! - [`time`] – update elapsed time and delta

pub mod animation;
pub mod fear;
pub mod light;
pub mod minimap;
pub mod mouse;
pub mod render;
pub mod tile;
pub mod time;
