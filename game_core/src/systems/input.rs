use crate::{Bird, Config, Events};
use hecs::World;

/// Apply a jump to the bird
pub fn jump_bird(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.jump(config);
        events.jumped = true;
    }
}
