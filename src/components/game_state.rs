// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の今の状態だよ！🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// プレイ中
    #[default]
    Playing,
    /// ステージの終わりまでスクロールした！🏆 (そのあとも動かせる)
    Won,
}

/// 1 フレームの最後に判定される結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// このフレームで初めてゴールに着いた
    Won,
    /// 画面の下に落ちた → セッションはリセット済み
    Lost,
}
