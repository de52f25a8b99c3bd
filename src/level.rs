// src/level.rs
//! ステージの配置を作るよ！🧱
//!
//! 足場の x 座標は足場画像の幅 (`pw`) から決まる。同じ `AssetSizes` からは
//! 毎回まったく同じ配置ができるので、リセットの時もこれを呼ぶだけ。

use crate::assets::{AssetKey, AssetSizes};
use crate::components::{GenericObject, Platform, Vector2};
use crate::config::layout::{
    BACKDROP_X, BACKDROP_Y, FINAL_GAP, FIRST_GAP, FIRST_PLATFORM_X, GROUND_Y, LEDGE_Y, NUDGE,
    SEAM_OVERLAP, SECOND_GAP,
};

/// 組み立て済みのステージ。
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub platforms: Vec<Platform>,
    pub generic_objects: Vec<GenericObject>,
    /// これ以上スクロールしたらクリア。
    pub level_end: f64,
}

impl LevelLayout {
    pub fn build(sizes: &AssetSizes) -> Self {
        Self {
            platforms: platforms(sizes),
            generic_objects: generic_objects(sizes),
            level_end: level_end(sizes),
        }
    }
}

/// 足場の並び。配列の順番は描画の順番にもなる (高い足場を先に描いて後ろに回す)。
pub fn platforms(sizes: &AssetSizes) -> Vec<Platform> {
    let pw = sizes.platform.width;
    let tall = sizes.platform_small_tall;
    let ground = |x: f64| Platform::new(Vector2::new(x, GROUND_Y), AssetKey::Platform, sizes.platform);

    let fifth_x = pw * 4.0 + SECOND_GAP - NUDGE;
    vec![
        // 5 枚目の右端にそろえた高い足場
        Platform::new(
            Vector2::new(fifth_x + pw - tall.width, LEDGE_Y),
            AssetKey::PlatformSmallTall,
            tall,
        ),
        ground(FIRST_PLATFORM_X),
        ground(pw - SEAM_OVERLAP),
        ground(pw * 2.0 + FIRST_GAP),
        ground(pw * 3.0 + SECOND_GAP),
        ground(fifth_x),
        ground(pw * 5.0 + FINAL_GAP - NUDGE),
    ]
}

/// 背景 → 丘の順。
pub fn generic_objects(sizes: &AssetSizes) -> Vec<GenericObject> {
    let origin = Vector2::new(BACKDROP_X, BACKDROP_Y);
    vec![
        GenericObject::new(origin, AssetKey::Background, sizes.background),
        GenericObject::new(origin, AssetKey::Hills, sizes.hills),
    ]
}

/// ゴールのスクロール量 = 最後の足場の x。
pub fn level_end(sizes: &AssetSizes) -> f64 {
    sizes.platform.width * 5.0 + FINAL_GAP - NUDGE
}
