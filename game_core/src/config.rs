use crate::map::Aabb;
use crate::params::Params;
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_start: Vec2,
    pub gravity: f32,
    pub jump_strength: f32,
    pub rotation_per_velocity: f32,
    pub rotation_smoothing: f32,
    pub animation_frames: f32,
    pub idle_animation_speed: f32,
    pub flap_animation_speed: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_speed: f32,
    pub pipe_gap: f32,
    pub pipe_interval: f32, // seconds
    pub gap_top_margin: i32,
    pub gap_bottom_margin: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            bird_width: Params::BIRD_WIDTH,
            bird_height: Params::BIRD_HEIGHT,
            bird_start: Vec2::new(Params::BIRD_START_X, Params::BIRD_START_Y),
            gravity: Params::GRAVITY,
            jump_strength: Params::JUMP_STRENGTH,
            rotation_per_velocity: Params::ROTATION_PER_VELOCITY,
            rotation_smoothing: Params::ROTATION_SMOOTHING,
            animation_frames: Params::ANIMATION_FRAMES,
            idle_animation_speed: Params::IDLE_ANIMATION_SPEED,
            flap_animation_speed: Params::FLAP_ANIMATION_SPEED,
            pipe_width: Params::PIPE_WIDTH,
            pipe_height: Params::PIPE_HEIGHT,
            pipe_speed: Params::PIPE_SPEED,
            pipe_gap: Params::PIPE_GAP,
            pipe_interval: Params::PIPE_INTERVAL_MS as f32 / 1000.0,
            gap_top_margin: Params::GAP_TOP_MARGIN,
            gap_bottom_margin: Params::GAP_BOTTOM_MARGIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive range the gap's top edge is drawn from
    pub fn gap_range(&self) -> (i32, i32) {
        let lo = self.gap_top_margin;
        let hi = (self.screen_height as i32 - self.gap_bottom_margin).max(lo);
        (lo, hi)
    }

    /// Bird bounding box anchored at its top-left corner
    pub fn bird_rect(&self, x: f32, y: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(self.bird_width, self.bird_height))
    }

    /// Upper and lower collision rects of a pipe
    pub fn pipe_rects(&self, x: f32, gap_y: i32) -> (Aabb, Aabb) {
        let size = Vec2::new(self.pipe_width, self.pipe_height);
        let gap_y = gap_y as f32;
        let upper = Aabb::from_pos_size(Vec2::new(x, gap_y - self.pipe_height), size);
        let lower = Aabb::from_pos_size(Vec2::new(x, gap_y + self.pipe_gap), size);
        (upper, lower)
    }

    /// Lowest y the bird may reach before touching the floor
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.bird_height
    }
}
