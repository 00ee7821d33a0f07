//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Each type is tagged with a
//! [`ComponentKind`](crate::ecs::ComponentKind) so that the entity store can
//! query by kind set.
//!
//! Submodules overview:
//! - [`activable`] – on/off flag; inactive entities are neither drawn nor clickable
//! - [`animation`] – per-entity list of running animations and the animation variants
//! - [`character`] – scripted character data: sprite set, facing and walk cadence
//! - [`clickable`] – mouse click and hover callbacks
//! - [`colorable`] – RGBA color handed to render callbacks
//! - [`fear`] – frightenable / frightening pair used by the fear system
//! - [`lightable`] – light ellipses drawn through the night overlay
//! - [`minimap`] – building layout and the clickable minimap cells
//! - [`position`] – pixel rectangle on screen
//! - [`renderable`] – draw callback and draw layer
//! - [`sky`] – marker for the sky overlay entity
//! - [`tile`] – named tile spaces and positions expressed in tile units

pub mod activable;
pub mod animation;
pub mod character;
pub mod clickable;
pub mod colorable;
pub mod fear;
pub mod lightable;
pub mod minimap;
pub mod position;
pub mod renderable;
pub mod sky;
pub mod tile;
