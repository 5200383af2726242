//! Snapshot to quads
//!
//! Everything on screen is a tinted, optionally rotated rectangle. This module
//! turns a game snapshot into the instance list the renderer uploads each frame.
//! It has no GPU dependencies so it can be tested natively.

use game_core::{BirdView, Config, PipeView, Snapshot};

pub const GAME_OVER_TITLE: &str = "Game Over!";
pub const GAME_OVER_HINT: &str = "Press SPACE to restart";

pub const DIGIT_WIDTH: f32 = 36.0;
pub const DIGIT_HEIGHT: f32 = 54.0;
pub const SCORE_Y: f32 = 50.0;

const SEGMENT: f32 = 6.0;
const DIGIT_INSET: f32 = 3.0;
const PIPE_LIP_HEIGHT: f32 = 24.0;
const PIPE_LIP_OVERHANG: f32 = 4.0;
const WING_LIFT: f32 = 6.0;

const SKY: [f32; 4] = [0.31, 0.75, 0.80, 1.0];
const PIPE_GREEN: [f32; 4] = [0.45, 0.75, 0.18, 1.0];
const PIPE_LIP: [f32; 4] = [0.35, 0.62, 0.12, 1.0];
const BIRD_YELLOW: [f32; 4] = [0.98, 0.80, 0.20, 1.0];
const WING_WHITE: [f32; 4] = [0.98, 0.95, 0.85, 1.0];
const EYE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const BEAK_ORANGE: [f32; 4] = [0.95, 0.45, 0.15, 1.0];
const SCORE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.45];

/// One instanced rectangle (matches the shader's instance input)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quad {
    pub rect: [f32; 4],  // x, y, width, height (screen pixels, y down)
    pub tint: [f32; 4],  // rgba
    pub pivot: [f32; 2], // rotation centre
    pub rotation: f32,   // radians, shader convention
    pub _pad: f32,
}

impl Quad {
    pub fn new(x: f32, y: f32, w: f32, h: f32, tint: [f32; 4]) -> Self {
        Self {
            rect: [x, y, w, h],
            tint,
            pivot: [x, y],
            rotation: 0.0,
            _pad: 0.0,
        }
    }

    fn rotated(mut self, pivot: [f32; 2], rotation: f32) -> Self {
        self.pivot = pivot;
        self.rotation = rotation;
        self
    }
}

/// Build the full frame, back to front
pub fn build(snapshot: &Snapshot, config: &Config) -> Vec<Quad> {
    let mut quads = vec![Quad::new(
        0.0,
        0.0,
        config.screen_width,
        config.screen_height,
        SKY,
    )];

    for pipe in &snapshot.pipes {
        push_pipe(&mut quads, pipe, config);
    }
    push_bird(&mut quads, &snapshot.bird, config);
    push_score(&mut quads, snapshot.score, config.screen_width);

    if snapshot.game_over {
        quads.push(Quad::new(
            0.0,
            0.0,
            config.screen_width,
            config.screen_height,
            DIM,
        ));
    }

    quads
}

fn push_pipe(quads: &mut Vec<Quad>, pipe: &PipeView, config: &Config) {
    let (upper, lower) = config.pipe_rects(pipe.x, pipe.gap_y);
    let lip_x = pipe.x - PIPE_LIP_OVERHANG;
    let lip_w = config.pipe_width + PIPE_LIP_OVERHANG * 2.0;

    for rect in [upper, lower] {
        let size = rect.size();
        quads.push(Quad::new(rect.min.x, rect.min.y, size.x, size.y, PIPE_GREEN));
    }
    quads.push(Quad::new(
        lip_x,
        upper.max.y - PIPE_LIP_HEIGHT,
        lip_w,
        PIPE_LIP_HEIGHT,
        PIPE_LIP,
    ));
    quads.push(Quad::new(lip_x, lower.min.y, lip_w, PIPE_LIP_HEIGHT, PIPE_LIP));
}

/// Wing offset for each animation frame: up, mid, down
pub fn wing_offset(frame: u8) -> f32 {
    match frame {
        0 => -WING_LIFT,
        1 => 0.0,
        _ => WING_LIFT,
    }
}

fn push_bird(quads: &mut Vec<Quad>, bird: &BirdView, config: &Config) {
    let (x, y) = (bird.x, bird.y);
    let (w, h) = (config.bird_width, config.bird_height);
    let pivot = [x + w / 2.0, y + h / 2.0];
    // Positive degrees turn the bird counter-clockwise on a y-down screen
    let angle = -bird.rotation.to_radians();

    let parts = [
        Quad::new(x, y, w, h, BIRD_YELLOW),
        Quad::new(
            x + w * 0.15,
            y + h * 0.4 + wing_offset(bird.frame),
            w * 0.4,
            h * 0.28,
            WING_WHITE,
        ),
        Quad::new(x + w * 0.65, y + h * 0.2, w * 0.16, h * 0.22, EYE_WHITE),
        Quad::new(x + w * 0.85, y + h * 0.5, w * 0.25, h * 0.22, BEAK_ORANGE),
    ];
    quads.extend(parts.into_iter().map(|quad| quad.rotated(pivot, angle)));
}

/// Left edge of digit `index` when `count` digits are centred on screen
pub fn digit_x(index: usize, count: usize, screen_width: f32) -> f32 {
    (screen_width - count as f32 * DIGIT_WIDTH) / 2.0 + index as f32 * DIGIT_WIDTH
}

// Segments a..g: top, top-right, bottom-right, bottom, bottom-left, top-left, middle
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b1111111, // 8
    0b1101111, // 9
];

fn push_score(quads: &mut Vec<Quad>, score: u32, screen_width: f32) {
    let digits: Vec<u8> = score
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect();

    for (i, digit) in digits.iter().enumerate() {
        let x = digit_x(i, digits.len(), screen_width) + DIGIT_INSET;
        push_digit(quads, *digit, x, SCORE_Y);
    }
}

fn push_digit(quads: &mut Vec<Quad>, digit: u8, x: f32, y: f32) {
    let w = DIGIT_WIDTH - DIGIT_INSET * 2.0;
    let h = DIGIT_HEIGHT;
    let half = h / 2.0;
    let right = x + w - SEGMENT;

    let segments = [
        (x, y, w, SEGMENT),
        (right, y, SEGMENT, half),
        (right, y + half, SEGMENT, half),
        (x, y + h - SEGMENT, w, SEGMENT),
        (x, y + half, SEGMENT, half),
        (x, y, SEGMENT, half),
        (x, y + half - SEGMENT / 2.0, w, SEGMENT),
    ];

    let mask = DIGIT_SEGMENTS[digit as usize % 10];
    for (bit, (sx, sy, sw, sh)) in segments.into_iter().enumerate() {
        if mask & (1 << bit) != 0 {
            quads.push(Quad::new(sx, sy, sw, sh, SCORE_WHITE));
        }
    }
}
