/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Clamp a raw frame delta into something the integrator can take
    pub fn sanitize_dt(dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, crate::Params::MAX_DT)
        } else {
            0.0
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Pipes passed this round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform integer in the inclusive range
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        use rand::Rng;
        self.0.gen_range(lo..=hi)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Ceiling,
    Floor,
    Pipe,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub jumped: bool,
    pub restarted: bool,
    pub pipes_spawned: u32,
    pub pipes_passed: u32,
    pub pipes_retired: u32,
    pub hit: Option<Hit>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Keep the first hit; later checks in the same tick don't override it
    pub fn record_hit(&mut self, hit: Hit) {
        if self.hit.is_none() {
            self.hit = Some(hit);
        }
    }
}

/// Player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Jump while playing, restart after game over
    Action,
}

/// Inputs received since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<Input>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: Input) {
        self.inputs.push(input);
    }

    pub fn drain(&mut self) -> Vec<Input> {
        std::mem::take(&mut self.inputs)
    }
}

/// Pipe spawn timer
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeSpawner {
    pub last_spawn: f32, // Time::now of the last spawn
    pub next_seq: u32,
}

impl PipeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_due(&self, now: f32, interval: f32) -> bool {
        now - self.last_spawn > interval
    }

    /// Mark a spawn at `now` and hand out the next sequence number
    pub fn mark(&mut self, now: f32) -> u32 {
        self.last_spawn = now;
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.value, 0);
        score.increment();
        score.increment();
        assert_eq!(score.value, 2);
        score.reset();
        assert_eq!(score.value, 0);
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(Time::sanitize_dt(0.016), 0.016);
        assert_eq!(Time::sanitize_dt(-0.5), 0.0);
        assert_eq!(Time::sanitize_dt(3.0), crate::Params::MAX_DT);
        assert_eq!(Time::sanitize_dt(f32::NAN), 0.0);
        assert_eq!(Time::sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..32 {
            let x = a.range_inclusive(50, 450);
            assert_eq!(x, b.range_inclusive(50, 450));
            assert!((50..=450).contains(&x));
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.jumped = true;
        events.pipes_spawned = 2;
        events.record_hit(Hit::Floor);
        events.record_hit(Hit::Pipe);
        assert_eq!(events.hit, Some(Hit::Floor));

        events.clear();

        assert!(!events.jumped);
        assert_eq!(events.pipes_spawned, 0);
        assert_eq!(events.hit, None);
    }

    #[test]
    fn test_input_queue_drain() {
        let mut queue = InputQueue::new();
        queue.push(Input::Action);
        queue.push(Input::Action);

        assert_eq!(queue.drain(), vec![Input::Action, Input::Action]);
        assert!(queue.inputs.is_empty());
    }

    #[test]
    fn test_spawner_is_due_strictly_after_interval() {
        let mut spawner = PipeSpawner::new();
        assert!(!spawner.is_due(1.5, 1.5));
        assert!(spawner.is_due(1.51, 1.5));
        assert_eq!(spawner.mark(1.51), 0);
        assert_eq!(spawner.mark(3.1), 1);
        assert_eq!(spawner.last_spawn, 3.1);
    }
}
