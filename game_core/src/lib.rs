pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one tick of the Flappy Bird simulation while the round is active.
///
/// `time.dt` is expected to be sanitised already; `time.now` advances by it
/// before the spawn timer is consulted. Hits are reported through `events`;
/// the caller decides what a hit means for the game phase.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    spawner: &mut PipeSpawner,
    rng: &mut GameRng,
) {
    time.now += time.dt;

    // 1. Bird physics
    move_bird(world, time, config);

    // 2. Spawn, scroll, retire pipes
    spawn_pipes(world, time, config, spawner, rng, events);
    move_pipes(world, time, config);
    retire_pipes(world, config, events);

    // 3. Score pipes the bird got past
    score_passed_pipes(world, score, events);

    // 4. Collisions (bounds, then pipes)
    check_bounds(world, map, config, events);
    check_pipe_collisions(world, config, events);
}

/// Helper to create the bird entity at its start position
pub fn create_bird(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Bird::new(config.bird_start.x, config.bird_start.y),))
}

/// Helper to create a pipe entity
pub fn create_pipe(world: &mut World, x: f32, gap_y: i32, seq: u32) -> hecs::Entity {
    world.spawn((Pipe::new(x, gap_y, seq),))
}
