//! Title screen: the game's name, "Start" and "Exit".

use log::info;

use crate::components::clickable::callback;
use crate::components::colorable::Color;
use crate::ecs::World;
use crate::error::ScenarioError;
use crate::resources::screen::{NextScreen, Screen};

use super::text::{on_click, spawn_hoverable_text, spawn_text};

pub const TITLE: &str = "The Family's Treasure Tale";
const MENU_IDLE: Color = Color::rgb(160.0, 160.0, 160.0);
const MENU_HOVER: Color = Color::WHITE;
const MENU_FONT_SIZE: f32 = 40.0;

pub fn build(world: &mut World) -> Result<(), ScenarioError> {
    spawn_text(world, TITLE, Color::WHITE, 60.0, (50.0, 150.0));

    let start = spawn_hoverable_text(
        world,
        "Start",
        MENU_IDLE,
        MENU_HOVER,
        MENU_FONT_SIZE,
        (200.0, 300.0),
    )?;
    on_click(
        world,
        start,
        callback(|world| {
            world.resource_mut::<NextScreen>().set(Screen::InGame);
            Ok(())
        }),
    )?;

    let exit = spawn_hoverable_text(
        world,
        "Exit",
        MENU_IDLE,
        MENU_HOVER,
        MENU_FONT_SIZE,
        (200.0, 400.0),
    )?;
    on_click(
        world,
        exit,
        callback(|world| {
            info!("exit requested");
            world.resource_mut::<NextScreen>().quit();
            Ok(())
        }),
    )?;
    Ok(())
}
