use bevy_ecs::prelude::Resource;

/// Wall-clock style time of the running game, in seconds.
///
/// `elapsed` keeps counting across screens; the scenario clock lives in the
/// scheduler and restarts with every screen.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
