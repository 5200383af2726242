//! Read-only view of the game handed to the presentation layer once per tick

use crate::{Bird, Pipe};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub rotation: f32, // degrees, positive = counter-clockwise on screen
    pub frame: u8,     // 0 = up-flap, 1 = mid-flap, 2 = down-flap
}

impl From<&Bird> for BirdView {
    fn from(bird: &Bird) -> Self {
        Self {
            x: bird.x,
            y: bird.y,
            rotation: bird.rotation,
            frame: bird.wing.frame(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeView {
    pub x: f32,
    pub gap_y: i32,
}

impl From<&Pipe> for PipeView {
    fn from(pipe: &Pipe) -> Self {
        Self {
            x: pipe.x,
            gap_y: pipe.gap_y,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub bird: BirdView,
    pub pipes: Vec<PipeView>, // Spawn order, oldest first
    pub score: u32,
    pub game_over: bool,
}
