// src/systems/mod.rs
//! 1 フレームの処理を担当するシステムたち。`World::step` がこの順番で動かすよ。
//!
//! 1. `PlayerPhysicsSystem` … 位置の更新と重力
//! 2. `PlatformCollisionSystem` … 足場への着地
//! 3. `MovementSystem` … 左右移動とカメラスクロール
//! 4. `OutcomeSystem` … クリア / 落下 (リセット) の判定

pub mod collision_system;
pub mod movement_system;
pub mod outcome_system;
pub mod physics_system;

pub use collision_system::{resolve_collisions, PlatformCollisionSystem, TopContact};
pub use movement_system::{select_motion, MotionState, MovementSystem};
pub use outcome_system::OutcomeSystem;
pub use physics_system::PlayerPhysicsSystem;
