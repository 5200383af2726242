use hecs::World;

use crate::{Config, Events, Pipe};

/// Despawn pipes that have scrolled fully past the left edge
pub fn retire_pipes(world: &mut World, config: &Config, events: &mut Events) {
    let to_remove: Vec<_> = world
        .query::<&Pipe>()
        .iter()
        .filter(|(_e, pipe)| pipe.is_offscreen(config))
        .map(|(e, _)| e)
        .collect();

    for entity in to_remove {
        if world.despawn(entity).is_ok() {
            events.pipes_retired += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_pipe;

    #[test]
    fn test_retire_only_offscreen_pipes() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let edge = create_pipe(&mut world, -config.pipe_width, 100, 0);
        let gone = create_pipe(&mut world, -config.pipe_width - 0.01, 100, 1);
        let visible = create_pipe(&mut world, 20.0, 100, 2);

        retire_pipes(&mut world, &config, &mut events);

        assert!(world.contains(edge));
        assert!(!world.contains(gone));
        assert!(world.contains(visible));
        assert_eq!(events.pipes_retired, 1);
    }
}
