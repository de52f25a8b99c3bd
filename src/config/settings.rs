// src/config/settings.rs
//! 実行時に使う設定。既定値は `physics` / `layout` の定数で、JS から JSON で上書きできるよ。

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use super::physics::{
    GRAVITY, JUMP_IMPULSE, LEFT_BOUND, PARALLAX_FACTOR, PLAYER_HEIGHT, PLAYER_SPEED,
    PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, RIGHT_BOUND,
};
use crate::assets::AssetManifest;
use crate::components::vector2::Vector2;

/// プレイヤーが画面の床 (canvas の下端) に届きそうな時どうするか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorPolicy {
    /// 床で止まる (velocity.y = 0)。
    Clamp,
    /// 床を素通りして落ち続ける。画面外に落ちたら負け。
    FallThrough,
}

/// ジャンプキーを押した時、空中でもジャンプできるか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpPolicy {
    /// いつでもジャンプ (空中で何回でも)。
    Unlimited,
    /// 着地している時だけ。
    GroundedOnly,
}

/// キーボードの `KeyboardEvent.code` とアクションの対応表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub jump: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let codes = |list: &[&str]| list.iter().map(|c| c.to_string()).collect();
        Self {
            left: codes(&["KeyA", "ArrowLeft"]),
            right: codes(&["KeyD", "ArrowRight"]),
            jump: codes(&["KeyW", "ArrowUp", "Space"]),
        }
    }
}

/// ゲームの設定一式だよ！⚙️
///
/// `#[serde(default)]` なので、JSON に書かなかった項目は既定値のまま。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub world_width: f64,
    pub world_height: f64,
    pub gravity: f64,
    pub player_speed: f64,
    pub jump_impulse: f64,
    pub player_start: Vector2,
    pub player_width: f64,
    pub player_height: f64,
    pub right_bound: f64,
    pub left_bound: f64,
    pub parallax_factor: f64,
    pub floor_policy: FloorPolicy,
    pub jump_policy: JumpPolicy,
    pub key_bindings: KeyBindings,
    pub assets: AssetManifest,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            world_width: CANVAS_WIDTH,
            world_height: CANVAS_HEIGHT,
            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            jump_impulse: JUMP_IMPULSE,
            player_start: Vector2::new(PLAYER_START_X, PLAYER_START_Y),
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            right_bound: RIGHT_BOUND,
            left_bound: LEFT_BOUND,
            parallax_factor: PARALLAX_FACTOR,
            floor_policy: FloorPolicy::FallThrough,
            jump_policy: JumpPolicy::Unlimited,
            key_bindings: KeyBindings::default(),
            assets: AssetManifest::default(),
        }
    }
}

impl GameSettings {
    /// JSON 文字列から設定を読み込んで、値の範囲もチェックする。
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_speed", self.player_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SettingsError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if self.gravity < 0.0 || self.jump_impulse < 0.0 {
            return Err(SettingsError::Invalid("gravity and jump_impulse must not be negative".into()));
        }
        if !(0.0..=1.0).contains(&self.parallax_factor) {
            return Err(SettingsError::Invalid(format!(
                "parallax_factor must be within 0..=1, got {}",
                self.parallax_factor
            )));
        }
        if self.left_bound >= self.right_bound {
            return Err(SettingsError::Invalid(format!(
                "left_bound ({}) must be left of right_bound ({})",
                self.left_bound, self.right_bound
            )));
        }
        Ok(())
    }
}

/// 設定の読み込みエラー。
#[derive(Debug)]
pub enum SettingsError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
