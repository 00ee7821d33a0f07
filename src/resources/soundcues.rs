//! Sound cue queue.
//!
//! Scenario hooks and callbacks name sound effects (`"bubble"`, `"window"`,
//! `"wind"`, `"furniture"`); the host drains the queue once per frame and
//! plays or logs them.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone)]
pub struct SoundCues {
    queue: Vec<&'static str>,
}

impl SoundCues {
    pub fn play(&mut self, cue: &'static str) {
        self.queue.push(cue);
    }

    /// Cues queued since the last drain, oldest first.
    pub fn pending(&self) -> &[&'static str] {
        &self.queue
    }

    pub fn drain(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.queue)
    }
}
