use crate::{Bird, Config, Pipe, Time};
use hecs::World;

/// Integrate bird physics and wing animation
pub fn move_bird(world: &mut World, time: &Time, config: &Config) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.update(time.dt, config);
    }
}

/// Scroll every pipe to the left
pub fn move_pipes(world: &mut World, time: &Time, config: &Config) {
    let delta = config.pipe_speed * time.dt;
    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        pipe.x -= delta;
    }
}
