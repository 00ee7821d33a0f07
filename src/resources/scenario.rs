//! Mutable state of the burglar scenario.
//!
//! Hooks, predicates and mouse callbacks read and write these flags through
//! the world instead of sharing a dictionary. The in-game screen inserts a
//! fresh value every time it is built.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ScenarioState {
    /// The mother saw the bookshelf move by itself.
    pub ghosts: bool,
    /// The burglar's wind put the fire out.
    pub fireplace_unlit: bool,
    /// The bookshelf currently hides the compartment.
    pub bookshelf_moved: bool,
    /// Clicking the bookshelf moves it.
    pub bookshelf_can_move: bool,
    /// The lower window has been opened by the player.
    pub down_window_open: bool,
}
