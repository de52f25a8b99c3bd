// src/app/state_getter.rs
//! Gets the current world state and converts it to JSON.

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::app::lock;
use crate::snapshot::WorldSnapshot;
use crate::world::World;

/// ワールドの状態を JSON 文字列にする。
pub fn world_state_json(world_arc: &Arc<Mutex<World>>) -> Result<String, String> {
    let snapshot = WorldSnapshot::capture(&lock(world_arc));
    debug!(
        "Captured world state at frame {} ({} platforms)",
        snapshot.frame,
        snapshot.platforms.len()
    );
    serde_json::to_string(&snapshot).map_err(|e| {
        let error_msg = format!("Failed to serialize world state: {}", e);
        error!("{}", error_msg);
        error_msg
    })
}

/// GameApp::get_world_state_json のロジック。
pub fn get_world_state_json(world_arc: &Arc<Mutex<World>>) -> Result<JsValue, JsValue> {
    world_state_json(world_arc)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_json_contains_player_and_status() {
        let world = Arc::new(Mutex::new(World::default()));
        lock(&world).step();

        let json = world_state_json(&world).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["frame"], 1);
        assert_eq!(value["ready"], false);
        assert_eq!(value["status"], "playing");
        assert_eq!(value["player"]["width"], 30.0);
    }
}
