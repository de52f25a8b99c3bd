// src/config/layout.rs
//! 画面とステージ配置に関する定数を定義するよ！
//! 足場の x 座標は足場画像の幅から計算するので、ここにはオフセットだけ置く。

pub const CANVAS_WIDTH: f64 = 1024.0;
pub const CANVAS_HEIGHT: f64 = 576.0;

pub const GROUND_Y: f64 = 470.0; // 地面の足場の y 座標
pub const LEDGE_Y: f64 = 270.0; // 高い足場 (platform_small_tall) の y 座標

// --- 足場どうしの継ぎ目 ---
pub const FIRST_PLATFORM_X: f64 = -1.0; // 左端の隙間が見えないように 1px はみ出させる
pub const SEAM_OVERLAP: f64 = 3.0; // 1 枚目と 2 枚目を少し重ねる
pub const FIRST_GAP: f64 = 100.0;
pub const SECOND_GAP: f64 = 300.0;
pub const NUDGE: f64 = 2.0;
pub const FINAL_GAP: f64 = 700.0;

pub const BACKDROP_X: f64 = -1.0; // 背景・丘は画面外から少しはみ出して置く
pub const BACKDROP_Y: f64 = -1.0;
