//! Screens and the frame loop.
//!
//! [`Game`] owns the [`World`] and the [`Scheduler`] and builds one screen at
//! a time. Hooks and callbacks never switch screens themselves: they request
//! a transition through the [`NextScreen`] resource and [`Game::update`]
//! applies it once the frame's scenario passes are done, by clearing the
//! world, resetting the scheduler and building the target screen.
//!
//! Frame order:
//!
//! 1. pointer events ([`Game::handle_event`], called by the host beforehand)
//! 2. world time
//! 3. scheduler
//! 4. animations
//! 5. fear
//! 6. pending screen change
//! 7. tile positions
//! 8. lights
//! 9. render ([`Game::draw`])
//!
//! Submodules:
//! - [`endings`] – game over and happy end messages
//! - [`house`] – room, furniture, openings and characters of the scenario
//! - [`ingame`] – the scenario script
//! - [`text`] – text entity helpers
//! - [`title`] – title menu

pub mod endings;
pub mod house;
pub mod ingame;
pub mod text;
pub mod title;

use log::{debug, info};

use crate::ecs::World;
use crate::error::ScenarioError;
use crate::events::input::{PointerEvent, dispatch};
use crate::render::{RecordingSurface, Surface};
use crate::resources::gameconfig::GameConfig;
use crate::resources::screen::{NextScreen, NextScreens, Screen};
use crate::resources::soundcues::SoundCues;
use crate::resources::worldtime::WorldTime;
use crate::scheduler::Scheduler;
use crate::systems::animation::update_animations;
use crate::systems::fear::update_fear;
use crate::systems::light::update_lights;
use crate::systems::render::render_system;
use crate::systems::tile::update_tile_positions;
use crate::systems::time::update_world_time;

pub struct Game {
    world: World,
    scheduler: Scheduler,
    screen: Screen,
}

/// Outcome of [`Game::run_headless`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessRun {
    pub frames: u64,
    pub screen: Screen,
    pub quit: bool,
}

impl Game {
    /// Create the game on the title screen.
    pub fn new(config: GameConfig) -> Result<Self, ScenarioError> {
        let mut world = World::new();
        world.insert_resource(config);
        world.insert_resource(WorldTime::default());
        world.insert_resource(NextScreen::new());
        world.insert_resource(SoundCues::default());

        let mut game = Game {
            world,
            scheduler: Scheduler::new(),
            screen: Screen::Title,
        };
        game.enter(Screen::Title)?;
        Ok(game)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    /// Game time and frame count since start, across every screen.
    pub fn world_time(&self) -> WorldTime {
        *self.world.resource::<WorldTime>()
    }

    /// Whether "Exit" was clicked.
    pub fn should_quit(&self) -> bool {
        self.world.resource::<NextScreen>().get() == NextScreens::Quit
    }

    /// Tear down the current screen and build `screen`.
    pub fn enter(&mut self, screen: Screen) -> Result<(), ScenarioError> {
        info!("entering {screen:?} screen");
        self.world.clear();
        self.scheduler.reset();
        self.screen = screen;

        let width = self.config().window_width as f32;
        match screen {
            Screen::Title => title::build(&mut self.world)?,
            Screen::InGame => {
                ingame::build(&mut self.world, &mut self.scheduler)?;
            }
            Screen::GameOver => endings::build_game_over(&mut self.world, width)?,
            Screen::HappyEnd => endings::build_happy_end(&mut self.world, width)?,
        }
        // Resolve tile positions so the first frame draws everything in place.
        self.resolve_layout()
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> Result<(), ScenarioError> {
        dispatch(&mut self.world, event)
    }

    /// Advance the game by `dt` seconds of wall-clock time.
    pub fn update(&mut self, dt: f32) -> Result<(), ScenarioError> {
        let dt = update_world_time(&mut self.world, dt);
        self.scheduler.update(&mut self.world, dt)?;
        update_animations(&mut self.world, dt)?;
        update_fear(&mut self.world)?;
        self.apply_pending_screen()?;
        self.resolve_layout()
    }

    fn resolve_layout(&mut self) -> Result<(), ScenarioError> {
        let layers_per_cell = self.config().layers_per_cell as f32;
        update_tile_positions(&mut self.world, layers_per_cell)?;
        update_lights(&mut self.world)?;
        Ok(())
    }

    fn apply_pending_screen(&mut self) -> Result<(), ScenarioError> {
        match self.world.resource_mut::<NextScreen>().take() {
            NextScreens::Pending(screen) => self.enter(screen),
            NextScreens::Quit | NextScreens::Unchanged => Ok(()),
        }
    }

    /// Draw the current frame. Returns the number of entities drawn.
    pub fn draw(&self, surface: &mut dyn Surface) -> usize {
        render_system(&self.world, surface)
    }

    /// Sound cues queued since the last call.
    pub fn drain_sound_cues(&mut self) -> Vec<&'static str> {
        self.world.resource_mut::<SoundCues>().drain()
    }

    /// Run without a window for `seconds` at a fixed `fps`, feeding `events`
    /// (scenario-independent wall-clock time, event) as their time comes.
    ///
    /// Stops early when the game asks to quit.
    pub fn run_headless(
        &mut self,
        seconds: f32,
        fps: u32,
        mut events: Vec<(f32, PointerEvent)>,
    ) -> Result<HeadlessRun, ScenarioError> {
        let dt = 1.0 / fps.max(1) as f32;
        let frames = (seconds / dt).ceil() as u64;
        events.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut events = events.into_iter().peekable();
        let mut surface = RecordingSurface::new();
        let mut elapsed = 0.0;

        let mut frame = 0;
        while frame < frames && !self.should_quit() {
            while let Some((_, event)) = events.next_if(|(at, _)| *at <= elapsed) {
                self.handle_event(event)?;
            }
            self.update(dt)?;
            for cue in self.drain_sound_cues() {
                debug!("sound '{cue}'");
            }
            self.draw(&mut surface);
            surface.drain();
            elapsed += dt;
            frame += 1;
        }

        Ok(HeadlessRun {
            frames: frame,
            screen: self.screen,
            quit: self.should_quit(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::clickable::MouseButton;

    fn click(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Pressed {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_starts_on_title() {
        let game = Game::new(GameConfig::new()).unwrap();
        assert_eq!(game.screen(), Screen::Title);
        let mut surface = RecordingSurface::new();
        assert_eq!(game.draw(&mut surface), 3);
    }

    #[test]
    fn test_start_click_enters_game_next_frame() {
        let mut game = Game::new(GameConfig::new()).unwrap();
        game.handle_event(click(210.0, 310.0)).unwrap();
        assert_eq!(game.screen(), Screen::Title);
        game.update(0.016).unwrap();
        assert_eq!(game.screen(), Screen::InGame);
        assert_eq!(game.scheduler().time(), 0.0);
    }

    #[test]
    fn test_exit_click_quits() {
        let mut game = Game::new(GameConfig::new()).unwrap();
        let run = game
            .run_headless(5.0, 30, vec![(0.5, click(210.0, 410.0))])
            .unwrap();
        assert!(run.quit);
        assert!(run.frames < 150);
    }

    #[test]
    fn test_world_time_counts_across_screens() {
        let mut game = Game::new(GameConfig::new()).unwrap();
        let first = game
            .run_headless(1.0, 20, vec![(0.1, click(210.0, 310.0))])
            .unwrap();
        assert_eq!(first.screen, Screen::InGame);
        let second = game.run_headless(1.0, 20, Vec::new()).unwrap();

        let time = game.world_time();
        assert_eq!(time.frame_count, first.frames + second.frames);
        assert!((time.elapsed - 2.0).abs() < 1e-3);
    }
}
