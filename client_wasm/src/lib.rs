//! Browser host for the Flappy Bird core
//!
//! Rendering and the `App` context only exist on wasm32; timing, input
//! mapping and layout are plain Rust and tested natively.

pub mod camera;
pub mod clock;
pub mod input;
pub mod layout;
pub mod log;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod mesh;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::App;
