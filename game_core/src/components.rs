use crate::map::Aabb;
use crate::Config;

/// Which wing cycle the bird is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapCycle {
    /// Slow idle cycle, loops forever
    Idle,
    /// Fast one-shot cycle started by a jump; falls back to Idle when it wraps
    Flap,
}

/// Wing animation state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingAnimation {
    pub cycle: FlapCycle,
    pub counter: f32, // floor(counter) is the frame index
}

impl WingAnimation {
    pub fn new() -> Self {
        Self {
            cycle: FlapCycle::Idle,
            counter: 0.0,
        }
    }

    pub fn speed(&self, config: &Config) -> f32 {
        match self.cycle {
            FlapCycle::Idle => config.idle_animation_speed,
            FlapCycle::Flap => config.flap_animation_speed,
        }
    }

    /// Restart the wing beat from the down-flap frame
    pub fn flap(&mut self) {
        self.cycle = FlapCycle::Flap;
        self.counter = crate::Params::FLAP_START_FRAME;
    }

    pub fn advance(&mut self, dt: f32, config: &Config) {
        self.counter += self.speed(config) * dt;
        if self.counter >= config.animation_frames {
            self.counter = 0.0;
            self.cycle = FlapCycle::Idle;
        }
    }

    /// Frame index: 0 = up-flap, 1 = mid-flap, 2 = down-flap
    pub fn frame(&self) -> u8 {
        (self.counter.max(0.0).floor() as u8).min(2)
    }
}

impl Default for WingAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Bird component - the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f32,        // Fixed after spawn
    pub y: f32,        // Top edge
    pub velocity: f32, // px/s, positive = down
    pub rotation: f32, // degrees, positive = nose up
    pub wing: WingAnimation,
}

impl Bird {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            rotation: 0.0,
            wing: WingAnimation::new(),
        }
    }

    pub fn jump(&mut self, config: &Config) {
        self.velocity = config.jump_strength;
        self.rotation = 0.0;
        self.wing.flap();
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity
    pub fn update(&mut self, dt: f32, config: &Config) {
        self.velocity += config.gravity * dt;
        self.y += self.velocity * dt;

        // The easing factor is scaled by dt, so it is frame-rate dependent.
        let target = self.velocity * config.rotation_per_velocity;
        self.rotation += (target - self.rotation) * config.rotation_smoothing * dt;

        self.wing.advance(dt, config);
    }

    pub fn rect(&self, config: &Config) -> Aabb {
        config.bird_rect(self.x, self.y)
    }
}

/// Pipe component - a pair of pipes around a vertical gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,       // Left edge
    pub gap_y: i32,   // Top edge of the gap
    pub passed: bool, // Scored already
    pub seq: u32,     // Spawn order
}

impl Pipe {
    pub fn new(x: f32, gap_y: i32, seq: u32) -> Self {
        Self {
            x,
            gap_y,
            passed: false,
            seq,
        }
    }

    pub fn rects(&self, config: &Config) -> (Aabb, Aabb) {
        config.pipe_rects(self.x, self.gap_y)
    }

    /// Fully scrolled past the left edge
    pub fn is_offscreen(&self, config: &Config) -> bool {
        self.x < -config.pipe_width
    }
}
