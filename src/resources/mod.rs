//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the world and read
//! by systems, hooks and callbacks. Resources survive
//! [`World::clear`](crate::ecs::World::clear), so each screen decides which
//! ones it resets.
//!
//! Overview
//! - `gameconfig` – window and game settings loaded from an INI file
//! - `scenario` – flags of the burglar scenario shared by hooks and callbacks
//! - `screen` – requested screen transition
//! - `soundcues` – named sound effects queued for the host
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod scenario;
pub mod screen;
pub mod soundcues;
pub mod worldtime;
