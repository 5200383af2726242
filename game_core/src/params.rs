/// Game tuning parameters for Flappy Bird
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (pixels, origin top-left, +y down)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const TARGET_FPS: f32 = 60.0;

    // Bird
    pub const BIRD_WIDTH: f32 = 51.0;
    pub const BIRD_HEIGHT: f32 = 36.0;
    pub const BIRD_START_X: f32 = 100.0;
    pub const BIRD_START_Y: f32 = Self::SCREEN_HEIGHT / 2.0;
    pub const GRAVITY: f32 = 900.0; // px/s^2
    pub const JUMP_STRENGTH: f32 = -420.0; // px/s, negative is up
    pub const ROTATION_PER_VELOCITY: f32 = -5.0; // degrees per px/s
    pub const ROTATION_SMOOTHING: f32 = 0.1;

    // Wing animation
    pub const ANIMATION_FRAMES: f32 = 3.0; // up-flap, mid-flap, down-flap
    pub const IDLE_ANIMATION_SPEED: f32 = 0.2; // frames per second
    pub const FLAP_ANIMATION_SPEED: f32 = 3.0;
    pub const FLAP_START_FRAME: f32 = 2.0; // down-flap

    // Pipes
    pub const PIPE_WIDTH: f32 = 78.0;
    pub const PIPE_HEIGHT: f32 = 480.0;
    pub const PIPE_SPEED: f32 = 180.0; // px/s
    pub const PIPE_GAP: f32 = 150.0;
    pub const PIPE_INTERVAL_MS: u32 = 1500;
    pub const GAP_TOP_MARGIN: i32 = 50;
    pub const GAP_BOTTOM_MARGIN: i32 = 150;

    // Physics
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
