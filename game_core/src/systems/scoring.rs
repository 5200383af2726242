use crate::{Bird, Events, Pipe, Score};
use hecs::World;

/// Score each pipe once, when its left edge moves past the bird
pub fn score_passed_pipes(world: &mut World, score: &mut Score, events: &mut Events) {
    let bird_x = match world.query::<&Bird>().iter().next() {
        Some((_e, bird)) => bird.x,
        None => return,
    };

    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        if !pipe.passed && pipe.x < bird_x {
            pipe.passed = true;
            score.increment();
            events.pipes_passed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_bird, create_pipe, Config};

    fn setup_world() -> (World, Config, Score, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_bird(&mut world, &config);
        (world, config, Score::new(), Events::new())
    }

    #[test]
    fn test_pipe_behind_bird_scores() {
        let (mut world, _config, mut score, mut events) = setup_world();
        let pipe = create_pipe(&mut world, 99.9, 200, 0);

        score_passed_pipes(&mut world, &mut score, &mut events);

        assert_eq!(score.value, 1);
        assert_eq!(events.pipes_passed, 1);
        assert!(world.get::<&Pipe>(pipe).unwrap().passed);
    }

    #[test]
    fn test_pipe_scores_only_once() {
        let (mut world, _config, mut score, mut events) = setup_world();
        create_pipe(&mut world, 50.0, 200, 0);

        for _ in 0..5 {
            score_passed_pipes(&mut world, &mut score, &mut events);
        }

        assert_eq!(score.value, 1, "Passed flag must make scoring idempotent");
    }

    #[test]
    fn test_pipe_at_bird_x_not_scored() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_pipe(&mut world, config.bird_start.x, 200, 0);
        create_pipe(&mut world, 300.0, 200, 1);

        score_passed_pipes(&mut world, &mut score, &mut events);

        assert_eq!(score.value, 0);
        assert_eq!(events.pipes_passed, 0);
    }
}
