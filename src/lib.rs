// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod level;
pub mod logger;
pub mod snapshot;
pub mod system;
pub mod systems;
pub mod world;

pub use app::game_app::GameApp;
pub use assets::{AssetKey, AssetManifest, AssetSizes, ImageSize};
pub use config::{FloorPolicy, GameSettings, JumpPolicy, KeyBindings, SettingsError};
pub use snapshot::WorldSnapshot;
pub use world::{FrameReport, World};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("Panic hook set!");
}

/// "error" / "warn" / "info" / "debug" / "trace" / "off" でログの量を変える。
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    logger::set_level(level).map_err(|e| JsValue::from_str(&e))
}
