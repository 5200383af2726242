//! A complete game session: the world plus every resource the systems need.

use crate::systems::jump_bird;
use crate::{
    create_bird, step, Bird, Config, Events, GameAction, GameFsm, GameMap, GameRng,
    Input, InputQueue, Phase, Pipe, PipeSpawner, PipeView, Score, Snapshot, Time,
};
use hecs::World;

pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub inputs: InputQueue,
    pub spawner: PipeSpawner,
    pub rng: GameRng,
    pub fsm: GameFsm,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        create_bird(&mut world, &config);

        Self {
            world,
            time: Time::default(),
            map: GameMap::from(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            spawner: PipeSpawner::new(),
            rng: GameRng::new(seed),
            fsm: GameFsm::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn is_game_over(&self) -> bool {
        self.fsm.is_game_over()
    }

    /// Queue an input for the next tick
    pub fn push_input(&mut self, input: Input) {
        self.inputs.push(input);
    }

    /// Advance the game by one frame of `dt` seconds.
    ///
    /// Queued inputs are applied first: the action jumps while active and
    /// restarts after game over. The simulation then runs only if the round
    /// is active, and a hit moves the game to `GameOver`.
    pub fn tick(&mut self, dt: f32) -> &Events {
        self.events.clear();

        for input in self.inputs.drain() {
            match (input, self.fsm.phase()) {
                (Input::Action, Phase::Active) => {
                    jump_bird(&mut self.world, &self.config, &mut self.events)
                }
                (Input::Action, Phase::GameOver) => self.restart(),
            }
        }

        if self.fsm.is_active() {
            self.time.dt = Time::sanitize_dt(dt);
            step(
                &mut self.world,
                &mut self.time,
                &self.map,
                &self.config,
                &mut self.score,
                &mut self.events,
                &mut self.spawner,
                &mut self.rng,
            );

            if self.events.hit.is_some() {
                self.fsm.transition(GameAction::Crash);
            }
        }

        &self.events
    }

    /// Back to a fresh round. The random stream carries on so the next
    /// round gets different pipes.
    pub fn restart(&mut self) {
        if !self.fsm.transition(GameAction::Restart).success {
            return;
        }

        self.world.clear();
        create_bird(&mut self.world, &self.config);
        self.time = Time::default();
        self.score.reset();
        self.spawner = PipeSpawner::new();
        self.events.restarted = true;
    }

    pub fn bird(&self) -> Option<Bird> {
        self.world
            .query::<&Bird>()
            .iter()
            .next()
            .map(|(_e, bird)| *bird)
    }

    /// Live pipes in spawn order
    pub fn pipes(&self) -> Vec<Pipe> {
        let mut pipes: Vec<Pipe> = self
            .world
            .query::<&Pipe>()
            .iter()
            .map(|(_e, pipe)| *pipe)
            .collect();
        pipes.sort_by_key(|pipe| pipe.seq);
        pipes
    }

    pub fn snapshot(&self) -> Snapshot {
        let bird = self
            .bird()
            .unwrap_or_else(|| Bird::new(self.config.bird_start.x, self.config.bird_start.y));

        Snapshot {
            bird: (&bird).into(),
            pipes: self.pipes().iter().map(PipeView::from).collect(),
            score: self.score.value,
            game_over: self.fsm.is_game_over(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hit;

    #[test]
    fn test_new_game_defaults() {
        let game = Game::new(1);
        assert_eq!(game.phase(), Phase::Active);
        assert_eq!(game.score.value, 0);
        assert!(game.pipes().is_empty());
        let bird = game.bird().unwrap();
        assert_eq!(bird, Bird::new(100.0, 300.0));
    }

    #[test]
    fn test_action_jumps_while_active() {
        let mut game = Game::new(1);
        game.push_input(Input::Action);
        let events = game.tick(0.0);
        assert!(events.jumped);
        assert_eq!(game.bird().unwrap().velocity, game.config.jump_strength);
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut game = Game::new(1);
        for (_e, bird) in game.world.query_mut::<&mut Bird>() {
            bird.y = 600.0;
        }
        game.tick(0.016);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.events.hit, Some(Hit::Floor));

        let frozen = game.bird().unwrap();
        let now = game.time.now;
        for _ in 0..10 {
            game.tick(0.016);
        }
        assert_eq!(game.bird().unwrap(), frozen);
        assert_eq!(game.time.now, now);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut game = Game::new(1);
        game.score.increment();
        game.restart();
        assert_eq!(game.score.value, 1, "Restart is ignored while active");
    }

    #[test]
    fn test_snapshot_orders_pipes_by_spawn() {
        let mut game = Game::new(1);
        crate::create_pipe(&mut game.world, 120.0, 60, 2);
        crate::create_pipe(&mut game.world, 390.0, 80, 5);
        crate::create_pipe(&mut game.world, 250.0, 70, 3);

        let snapshot = game.snapshot();
        let xs: Vec<f32> = snapshot.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![120.0, 250.0, 390.0]);
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.game_over);
    }
}
