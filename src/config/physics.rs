// src/config/physics.rs
//! プレイヤーの動きに関する定数だよ！
//! 1 フレームごとの固定ステップで使う値なので、単位は「px/フレーム」。

pub const GRAVITY: f64 = 1.5; // 毎フレーム velocity.y に足される重力加速度
pub const PLAYER_SPEED: f64 = 5.0; // 歩き・スクロールの速さ
pub const JUMP_IMPULSE: f64 = 30.0; // ジャンプで velocity.y から引く量

pub const PLAYER_WIDTH: f64 = 30.0;
pub const PLAYER_HEIGHT: f64 = 30.0;
pub const PLAYER_START_X: f64 = 100.0;
pub const PLAYER_START_Y: f64 = 40.0;

// --- カメラ (スクロール) の境界 ---
pub const RIGHT_BOUND: f64 = 400.0; // これより右に行こうとすると世界の方がスクロールする
pub const LEFT_BOUND: f64 = 100.0; // これより左に行こうとすると世界の方がスクロールする

pub const PARALLAX_FACTOR: f64 = 0.66; // 背景は足場よりゆっくり動く
