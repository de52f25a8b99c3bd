// src/config/mod.rs
//! ゲーム全体の設定。定数 (`physics`, `layout`) と、JS から上書きできる `settings`。

pub mod layout;
pub mod physics;
pub mod settings;

pub use settings::{FloorPolicy, GameSettings, JumpPolicy, KeyBindings, SettingsError};
