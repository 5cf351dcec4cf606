//! Shooting session binding.
//!
//! Wraps the core session so the web UI keeps one instance for the life of
//! the page and persists it with `to_object` / `JsSession.from_object`.

use formatcam_core::library::RollId;
use formatcam_core::session::{Session, SessionConfig, ShootingMode};
use wasm_bindgen::prelude::*;

use crate::types::to_js_error;

#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    #[wasm_bindgen(constructor)]
    pub fn new(roll_capacity: u32) -> JsSession {
        JsSession {
            inner: Session::new(SessionConfig { roll_capacity }),
        }
    }

    /// Restore a session saved with `to_object`.
    pub fn from_object(value: JsValue) -> Result<JsSession, JsValue> {
        serde_wasm_bindgen::from_value(value)
            .map(|inner| JsSession { inner })
            .map_err(|e| JsValue::from_str(&format!("Invalid session: {}", e)))
    }

    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize session: {}", e)))
    }

    #[wasm_bindgen(getter)]
    pub fn film_mode(&self) -> bool {
        self.inner.mode == ShootingMode::Film
    }

    /// Switch between film and practice. Returns false if nothing changed.
    pub fn set_film_mode(&mut self, film: bool) -> bool {
        let mode = if film {
            ShootingMode::Film
        } else {
            ShootingMode::Practice
        };
        self.inner.set_mode(mode)
    }

    #[wasm_bindgen(getter)]
    pub fn ratio(&self) -> String {
        self.inner.ratio.label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn grid(&self) -> String {
        self.inner.grid.label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn counter_label(&self) -> String {
        self.inner.counter_label()
    }

    #[wasm_bindgen(getter)]
    pub fn can_shoot(&self) -> bool {
        self.inner.can_shoot()
    }

    #[wasm_bindgen(getter)]
    pub fn can_develop(&self) -> bool {
        self.inner.can_develop()
    }

    #[wasm_bindgen(getter)]
    pub fn can_change_ratio(&self) -> bool {
        self.inner.can_change_ratio()
    }

    /// Next format label; fails while a roll is in progress.
    pub fn cycle_ratio(&mut self) -> Result<String, JsValue> {
        self.next_ratio().map_err(to_js_error)
    }

    pub fn cycle_grid(&mut self) -> String {
        self.inner.cycle_grid().label().to_string()
    }

    /// Count a capture; fails when the roll is full.
    pub fn record_shot(&mut self) -> Result<u32, JsValue> {
        self.inner.record_shot().map_err(|e| to_js_error(e.to_string()))
    }

    /// Develop the roll under `roll_id` (`YYYYMMDD_HHMMSS`). Returns the
    /// number of shots on it.
    pub fn develop(&mut self, roll_id: &str) -> Result<u32, JsValue> {
        self.develop_roll(roll_id).map_err(to_js_error)
    }

    pub fn abandon_roll(&mut self) -> u32 {
        self.inner.abandon_roll()
    }
}

impl JsSession {
    fn next_ratio(&mut self) -> Result<String, String> {
        self.inner
            .cycle_ratio()
            .map(|r| r.label().to_string())
            .map_err(|e| e.to_string())
    }

    fn develop_roll(&mut self, roll_id: &str) -> Result<u32, String> {
        let id: RollId = roll_id.parse().map_err(|e: formatcam_core::library::RollIdError| e.to_string())?;
        self.inner
            .develop(id)
            .map(|roll| roll.shots)
            .map_err(|e| e.to_string())
    }
}
