//! Raylib window host.
//!
//! Opens the window, turns mouse input into [`PointerEvent`]s and draws each
//! frame by replaying the commands the game recorded. Images are loaded on
//! first use from [`ASSET_DIR`]; one that fails to load is reported once and
//! skipped afterwards.
//!
//! The light overlay is approximated by alpha-blending the ellipses over the
//! fill instead of replacing the fill's pixels.

use log::{debug, info, warn};
use raylib::color::Color as RlColor;
use raylib::consts::MouseButton as RlMouseButton;
use raylib::prelude::{RaylibDraw, RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashSet;

use super::assets::AssetCache;
use super::{DrawCommand, RecordingSurface};
use crate::components::clickable::MouseButton;
use crate::components::colorable::Color;
use crate::error::ScenarioError;
use crate::events::input::PointerEvent;
use crate::game::Game;
use crate::game::title::TITLE;
use crate::resources::gameconfig::GameConfig;

/// Directory holding the game's images.
pub const ASSET_DIR: &str = "data";

fn rl_color(c: Color) -> RlColor {
    RlColor::new(c.r as u8, c.g as u8, c.b as u8, c.a as u8)
}

pub struct WindowHost {
    rl: RaylibHandle,
    thread: RaylibThread,
    textures: AssetCache<Texture2D>,
    missing: FxHashSet<String>,
    recording: RecordingSurface,
    pointer: (f32, f32),
}

impl WindowHost {
    pub fn open(config: &GameConfig) -> Self {
        let (width, height) = config.window_size();
        let (mut rl, thread) = raylib::init()
            .size(width as i32, height as i32)
            .title(TITLE)
            .build();
        rl.set_target_fps(config.target_fps);
        info!(
            "window opened: {}x{} at {} fps",
            width, height, config.target_fps
        );
        WindowHost {
            rl,
            thread,
            textures: AssetCache::new(),
            missing: FxHashSet::default(),
            recording: RecordingSurface::new(),
            pointer: (-1.0, -1.0),
        }
    }

    /// Run frames until the window closes or the game asks to quit.
    pub fn run(&mut self, game: &mut Game) -> Result<(), ScenarioError> {
        while !self.rl.window_should_close() && !game.should_quit() {
            for event in self.poll_events() {
                game.handle_event(event)?;
            }
            let dt = self.rl.get_frame_time();
            game.update(dt)?;
            for cue in game.drain_sound_cues() {
                debug!("sound '{cue}'");
            }

            game.draw(&mut self.recording);
            let commands = self.recording.drain();
            self.load_textures(&commands);
            self.present(&commands);
        }
        let time = game.world_time();
        info!(
            "window closed after {} frames, {:.1}s of game time",
            time.frame_count, time.elapsed
        );
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let position = self.rl.get_mouse_position();
        let (x, y) = (position.x, position.y);
        if (x, y) != self.pointer {
            self.pointer = (x, y);
            events.push(PointerEvent::Moved { x, y });
        }
        let buttons = [
            (RlMouseButton::MOUSE_BUTTON_LEFT, MouseButton::Left),
            (RlMouseButton::MOUSE_BUTTON_RIGHT, MouseButton::Right),
        ];
        for (rl_button, button) in buttons {
            if self.rl.is_mouse_button_pressed(rl_button) {
                events.push(PointerEvent::Pressed { x, y, button });
            }
        }
        events
    }

    fn load_textures(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            let DrawCommand::Image { key, .. } = command else {
                continue;
            };
            if self.missing.contains(key) {
                continue;
            }
            let (rl, thread) = (&mut self.rl, &self.thread);
            let loaded = self
                .textures
                .get_or_load(key, |k| rl.load_texture(thread, &format!("{ASSET_DIR}/{k}")))
                .map(|_| ());
            if let Err(e) = loaded {
                warn!("cannot load image '{key}': {e}");
                self.missing.insert(key.clone());
            }
        }
    }

    fn present(&mut self, commands: &[DrawCommand]) {
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(RlColor::BLACK);
        for command in commands {
            match command {
                DrawCommand::Image { key, x, y } => {
                    if let Some(texture) = self.textures.get(key) {
                        d.draw_texture(texture, *x as i32, *y as i32, RlColor::WHITE);
                    }
                }
                DrawCommand::Rect {
                    rect,
                    color,
                    filled,
                } => {
                    let (x, y, w, h) = (rect.x as i32, rect.y as i32, rect.w as i32, rect.h as i32);
                    if *filled {
                        d.draw_rectangle(x, y, w, h, rl_color(*color));
                    } else {
                        d.draw_rectangle_lines(x, y, w, h, rl_color(*color));
                    }
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size,
                    color,
                } => d.draw_text(text, *x as i32, *y as i32, *size as i32, rl_color(*color)),
                DrawCommand::LightOverlay { x, y, overlay } => {
                    let (w, h) = overlay.size;
                    d.draw_rectangle(*x as i32, *y as i32, w as i32, h as i32, rl_color(overlay.fill));
                    for patch in &overlay.patches {
                        let e = patch.ellipse;
                        d.draw_ellipse(
                            (x + e.x + e.w / 2.0) as i32,
                            (y + e.y + e.h / 2.0) as i32,
                            e.w / 2.0,
                            e.h / 2.0,
                            rl_color(patch.color),
                        );
                    }
                }
            }
        }
    }
}
