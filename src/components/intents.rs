// src/components/intents.rs

use serde::{Deserialize, Serialize};

/// 左右キーが今押されているかどうか。
///
/// キーイベントはフレームの外で書き込まれて、World はフレームの頭でだけ読む。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
}

impl Intents {
    pub fn new(move_left: bool, move_right: bool) -> Self {
        Self { move_left, move_right }
    }
}
