//! Application context
//!
//! `App` owns everything the page needs: the game, the renderer, the frame
//! clock and the game-over overlay. JavaScript creates it once, calls
//! `frame()` from `requestAnimationFrame` and forwards key presses.

use crate::clock::FrameClock;
use crate::input::{is_game_key, map_key, KeyCommand};
use crate::layout::{self, GAME_OVER_HINT, GAME_OVER_TITLE};
use crate::renderer::Renderer;
use crate::{console_error, console_log};
use game_core::{Events, Game, Params};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

pub const WINDOW_TITLE: &str = "Flappy Bird";
const OVERLAY_ID: &str = "overlay";

#[wasm_bindgen]
pub struct App {
    game: Game,
    renderer: Renderer,
    clock: FrameClock,
    overlay: Option<Element>,
    running: bool,
}

#[wasm_bindgen]
impl App {
    /// Set up WebGPU on `canvas` and start a new game. Without a seed the
    /// pipes are different every page load.
    pub async fn create(canvas: HtmlCanvasElement, seed: Option<u32>) -> Result<App, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        document.set_title(WINDOW_TITLE);

        let overlay = document.get_element_by_id(OVERLAY_ID);
        match &overlay {
            Some(el) => {
                el.set_inner_html(&format!("<h1>{GAME_OVER_TITLE}</h1><p>{GAME_OVER_HINT}</p>"));
                el.toggle_attribute_with_force("hidden", true)?;
            }
            None => console_error!("#{} element missing, game over will not be shown", OVERLAY_ID),
        }

        let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u32);
        let game = Game::new(seed as u64);

        let renderer = Renderer::new(canvas, game.config.screen_width, game.config.screen_height)
            .await
            .map_err(|e| JsValue::from_str(&e))?;

        console_log!("Flappy Bird ready (seed {})", seed);

        Ok(App {
            game,
            renderer,
            clock: FrameClock::new(Params::TARGET_FPS),
            overlay,
            running: true,
        })
    }

    /// Advance and draw one frame. Frames faster than the target rate are
    /// skipped.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        if !self.running {
            return Ok(());
        }

        let now_ms = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .ok_or_else(|| JsValue::from_str("performance.now() unavailable"))?;
        let Some(dt) = self.clock.tick(now_ms) else {
            return Ok(());
        };

        let events = self.game.tick(dt).clone();
        self.report(&events);

        if let Some(overlay) = &self.overlay {
            overlay.toggle_attribute_with_force("hidden", !self.game.is_game_over())?;
        }

        let quads = layout::build(&self.game.snapshot(), &self.game.config);
        self.renderer.draw(&quads).map_err(|e| JsValue::from_str(&e))
    }

    /// Handle a `keydown`. Keys the game owns have their browser default
    /// (Space scrolling) suppressed, auto-repeats included. Returns true if
    /// the key did something.
    pub fn key_down(&mut self, event: KeyboardEvent) -> bool {
        if !self.running {
            return false;
        }

        let key = event.key();
        if is_game_key(&key) {
            event.prevent_default();
        }

        match map_key(&key, event.repeat()) {
            Some(KeyCommand::Game(input)) => {
                self.game.push_input(input);
                true
            }
            Some(KeyCommand::Quit) => {
                self.shutdown();
                true
            }
            None => false,
        }
    }

    /// Stop ticking. Further frames and keys are ignored.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        console_log!("Quit with score {}", self.game.score.value);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.game.score.value
    }
}

impl App {
    fn report(&self, events: &Events) {
        if events.restarted {
            console_log!("Restarted");
        }
        if let Some(hit) = events.hit {
            console_log!("Game over: hit {:?} with score {}", hit, self.game.score.value);
        }
    }
}
