// src/components/mod.rs

// World が持つデータの部品たち。
pub mod entity;
pub mod game_state;
pub mod generic_object;
pub mod intents;
pub mod platform;
pub mod player;
pub mod vector2;

pub use entity::Entity;
pub use game_state::{GameStatus, Outcome};
pub use generic_object::GenericObject;
pub use intents::Intents;
pub use platform::Platform;
pub use player::{Advance, Player};
pub use vector2::Vector2;
