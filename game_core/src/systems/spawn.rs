use crate::{create_pipe, Config, Events, GameRng, PipeSpawner, Time};
use hecs::World;

/// Spawn a pipe at the right edge once the spawn interval has elapsed
pub fn spawn_pipes(
    world: &mut World,
    time: &Time,
    config: &Config,
    spawner: &mut PipeSpawner,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if !spawner.is_due(time.now, config.pipe_interval) {
        return;
    }

    let (lo, hi) = config.gap_range();
    let gap_y = rng.range_inclusive(lo, hi);
    let seq = spawner.mark(time.now);
    create_pipe(world, config.screen_width, gap_y, seq);
    events.pipes_spawned += 1;
}
