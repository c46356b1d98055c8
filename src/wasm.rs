//! WebAssembly bindings for the Life engine.
//!
//! Provides a thin wrapper around `LifeEngine`, `Scheduler` and `PointerInput`
//! for browser environments. The page owns the timer and the drawing; it
//! reports elapsed time through `tick` and redraws from `liveCells`.

use std::time::Duration;

use js_sys::Uint32Array;
use wasm_bindgen::prelude::*;

use crate::{
    compute::{BoardStats, LifeEngine},
    driver::{PointerInput, Scheduler, duration_from_millis},
    schema::{BoardConfig, Seed},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_seed(seed_json: &str) -> Result<Seed, JsValue> {
    Seed::from_json_str(seed_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))
}

/// WebAssembly wrapper for a Life board and its drivers.
#[wasm_bindgen]
pub struct WasmLife {
    engine: LifeEngine,
    scheduler: Scheduler,
    input: PointerInput,
}

#[wasm_bindgen]
impl WasmLife {
    /// Create a board from JSON configuration and seed.
    ///
    /// # Arguments
    /// * `config_json` - JSON string containing BoardConfig
    /// * `seed_json` - JSON string containing Seed (empty string for an empty board)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, seed_json: &str) -> Result<WasmLife, JsValue> {
        let config = BoardConfig::from_json_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

        let seed = parse_seed(seed_json)?;

        let engine = LifeEngine::from_seed(&config, &seed).map_err(js_err)?;
        let scheduler = Scheduler::from_config(&config).map_err(js_err)?;
        let input = PointerInput::from_config(&config);

        Ok(WasmLife {
            engine,
            scheduler,
            input,
        })
    }

    /// Flip the cell at `(x, y)`.
    #[wasm_bindgen]
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), JsValue> {
        self.engine.toggle(x, y).map_err(js_err)
    }

    /// Flip the cell under a pointer position in board pixels.
    ///
    /// Returns false when the position is outside the board.
    #[wasm_bindgen]
    pub fn click(&mut self, px: f64, py: f64) -> bool {
        self.input.click(&mut self.engine, px, py).is_some()
    }

    #[wasm_bindgen(js_name = isAlive)]
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, JsValue> {
        self.engine.is_alive(x, y).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Advance one generation.
    #[wasm_bindgen]
    pub fn advance(&mut self) {
        self.engine.advance();
    }

    /// Advance several generations.
    #[wasm_bindgen]
    pub fn run(&mut self, generations: u32) {
        self.engine.step_n(u64::from(generations));
    }

    /// Reseed the board (empty string for an empty board).
    #[wasm_bindgen]
    pub fn reset(&mut self, seed_json: &str) -> Result<(), JsValue> {
        parse_seed(seed_json)?.apply(&mut self.engine);
        Ok(())
    }

    /// Live cells as a flat array of `x, y` pairs in row-major order.
    #[wasm_bindgen(js_name = liveCells)]
    pub fn live_cells(&self) -> Uint32Array {
        let flat: Vec<u32> = self
            .engine
            .live_cells()
            .flat_map(|c| [c.x as u32, c.y as u32])
            .collect();
        Uint32Array::from(flat.as_slice())
    }

    /// Get board statistics as a JS object.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        let stats = BoardStats::from_engine(&self.engine);
        serde_wasm_bindgen::to_value(&stats)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen]
    pub fn rows(&self) -> usize {
        self.engine.dimensions().0
    }

    #[wasm_bindgen]
    pub fn cols(&self) -> usize {
        self.engine.dimensions().1
    }

    #[wasm_bindgen]
    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    /// Start advancing on `tick`.
    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.scheduler.run();
    }

    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    #[wasm_bindgen(js_name = setMaxCatchUp)]
    pub fn set_max_catch_up(&mut self, max: u32) {
        self.scheduler.set_max_catch_up(max);
    }

    #[wasm_bindgen(js_name = setInterval)]
    pub fn set_interval(&mut self, ms: u32) -> Result<(), JsValue> {
        self.scheduler
            .set_interval(Duration::from_millis(u64::from(ms)))
            .map_err(js_err)
    }

    /// Report elapsed milliseconds; returns the number of generations advanced.
    ///
    /// At most the scheduler's catch-up limit (see `setMaxCatchUp`) runs per call.
    #[wasm_bindgen]
    pub fn tick(&mut self, elapsed_ms: f64) -> u32 {
        self.scheduler
            .drive(&mut self.engine, duration_from_millis(elapsed_ms))
    }
}
