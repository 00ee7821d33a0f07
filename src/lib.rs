//! The Family's Treasure Tale.
//!
//! A short point-and-click night: the family hides its treasure and goes
//! out, a burglar comes in, and the player's few interventions decide how
//! it ends. The library exposes the entity store, the animation engine and
//! the branching event scheduler the game is built on, plus the screens
//! themselves, for use by the binary and the integration tests.

pub mod components;
pub mod ecs;
pub mod error;
pub mod events;
pub mod game;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod systems;
