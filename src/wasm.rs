//! Browser bindings
//!
//! The JS scene owns the animation loop: it calls `step()` once per frame,
//! then reads `instances()` to update its sphere meshes.

use wasm_bindgen::prelude::*;

use crate::render::{instance_bytes, instance_floats};
use crate::settings::Settings;
use crate::sim::Scene;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Ballpit (wasm) starting...");
}

/// Scene handle exposed to JS
#[wasm_bindgen]
pub struct BallPit {
    scene: Scene,
}

#[wasm_bindgen]
impl BallPit {
    /// Create a scene from default settings
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, body_count: u32) -> Result<BallPit, JsValue> {
        let settings = Settings {
            seed: seed as u64,
            body_count: body_count as usize,
            ..Default::default()
        };
        Self::from_settings(settings)
    }

    /// Create a scene from a JSON settings string
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<BallPit, JsValue> {
        let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Settings) -> Result<BallPit, JsValue> {
        let scene = Scene::new(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(BallPit { scene })
    }

    /// Advance one frame; returns the number of contacts resolved
    pub fn step(&mut self) -> u32 {
        self.scene.step() as u32
    }

    #[wasm_bindgen(js_name = setBodyCount)]
    pub fn set_body_count(&mut self, count: u32) -> Result<(), JsValue> {
        self.scene
            .set_body_count(count as usize)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn len(&self) -> u32 {
        self.scene.bodies().len() as u32
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.scene.bodies().is_empty()
    }

    /// Floats per instance in `instances()`
    pub fn stride() -> u32 {
        crate::render::BodyInstance::STRIDE as u32
    }

    /// Translation, scale, rotation and color for every body, flattened
    pub fn instances(&self) -> js_sys::Float32Array {
        let instances = self.scene.instances();
        js_sys::Float32Array::from(instance_floats(&instances))
    }

    /// Same records as raw bytes, for direct instance-buffer upload
    #[wasm_bindgen(js_name = instanceBytes)]
    pub fn instance_bytes(&self) -> js_sys::Uint8Array {
        let instances = self.scene.instances();
        js_sys::Uint8Array::from(instance_bytes(&instances))
    }
}
