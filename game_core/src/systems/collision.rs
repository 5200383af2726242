use crate::{Bird, Config, Events, GameMap, Hit, Pipe};
use hecs::World;

/// End the round if the bird touches the ceiling or the floor
pub fn check_bounds(world: &World, map: &GameMap, config: &Config, events: &mut Events) {
    for (_entity, bird) in world.query::<&Bird>().iter() {
        let rect = bird.rect(config);
        if map.hits_ceiling(&rect) {
            events.record_hit(Hit::Ceiling);
        } else if map.hits_floor(&rect) {
            events.record_hit(Hit::Floor);
        }
    }
}

/// End the round if the bird overlaps either half of any pipe
pub fn check_pipe_collisions(world: &World, config: &Config, events: &mut Events) {
    let bird_rect = match world.query::<&Bird>().iter().next() {
        Some((_e, bird)) => bird.rect(config),
        None => return,
    };

    for (_entity, pipe) in world.query::<&Pipe>().iter() {
        let (upper, lower) = pipe.rects(config);
        if bird_rect.intersects(&upper) || bird_rect.intersects(&lower) {
            events.record_hit(Hit::Pipe);
            return;
        }
    }
}
