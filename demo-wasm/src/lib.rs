use lanyard::{Rope, RopeConfig, RopeError, Vec3};
use wasm_bindgen::prelude::*;

fn to_js(err: RopeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---- Rope Demo ----

/// Browser-facing rope. The scene owns meshes and camera; it calls
/// `update` once per animation frame and copies `positions` into its line
/// and sphere meshes.
#[wasm_bindgen]
pub struct RopeDemo {
    rope: Rope<Vec3<f32>>,
}

#[wasm_bindgen]
impl RopeDemo {
    /// A rope of `count` particles hanging from `(x, y, z)`, anchored at the top.
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32, z: f32, segment_length: f32, count: usize) -> Result<RopeDemo, JsValue> {
        let rope = Rope::hanging(Vec3::new(x, y, z), segment_length, count, RopeConfig::new())
            .map_err(to_js)?;
        Ok(RopeDemo { rope })
    }

    /// Same as `new`, with parameters from a JSON `RopeConfig`.
    pub fn with_config(
        x: f32,
        y: f32,
        z: f32,
        segment_length: f32,
        count: usize,
        config_json: &str,
    ) -> Result<RopeDemo, JsValue> {
        let config: RopeConfig<Vec3<f32>> = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        config.validate().map_err(to_js)?;
        let rope = Rope::hanging(Vec3::new(x, y, z), segment_length, count, config)
            .map_err(to_js)?;
        Ok(RopeDemo { rope })
    }

    pub fn update(&mut self) {
        self.rope.tick();
    }

    pub fn set_gravity(&mut self, x: f32, y: f32, z: f32) {
        self.rope.set_gravity(Vec3::new(x, y, z));
    }

    pub fn set_locked(&mut self, index: usize, locked: bool) -> Result<(), JsValue> {
        self.rope.set_locked(index, locked).map_err(to_js)
    }

    /// Drag a locked particle, e.g. the anchor following a selection.
    pub fn move_particle(&mut self, index: usize, x: f32, y: f32, z: f32) -> Result<(), JsValue> {
        self.rope.move_particle(index, Vec3::new(x, y, z)).map_err(to_js)
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        self.rope
            .particles()
            .iter()
            .flat_map(|p| p.position.to_array())
            .collect()
    }

    pub fn particle_count(&self) -> usize {
        self.rope.len()
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.rope.is_settled(epsilon)
    }
}

