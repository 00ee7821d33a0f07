//! Ending screens. Clicking the message returns to the title.

use crate::components::clickable::callback;
use crate::components::colorable::Color;
use crate::ecs::World;
use crate::error::ScenarioError;
use crate::resources::screen::{NextScreen, Screen};

use super::text::{center_horizontally, on_click, spawn_text};

pub const GAME_OVER: &str = "Game Over";
pub const HAPPY_END: &str = "The treasure is safe !";
const ENDING_FONT_SIZE: f32 = 100.0;

fn build_message(
    world: &mut World,
    message: &str,
    color: Color,
    window_width: f32,
) -> Result<(), ScenarioError> {
    let entity = spawn_text(world, message, color, ENDING_FONT_SIZE, (250.0, 250.0));
    on_click(
        world,
        entity,
        callback(|world| {
            world.resource_mut::<NextScreen>().set(Screen::Title);
            Ok(())
        }),
    )?;
    center_horizontally(world, entity, window_width)
}

/// The treasure was stolen, or the family fled from the ghosts.
pub fn build_game_over(world: &mut World, window_width: f32) -> Result<(), ScenarioError> {
    build_message(world, GAME_OVER, Color::rgb(255.0, 0.0, 0.0), window_width)
}

/// The burglar left empty-handed.
pub fn build_happy_end(world: &mut World, window_width: f32) -> Result<(), ScenarioError> {
    build_message(world, HAPPY_END, Color::rgb(0.0, 205.0, 0.0), window_width)
}
