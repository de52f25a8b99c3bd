// src/components/platform.rs

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::vector2::Vector2;
use crate::assets::{AssetKey, ImageSize};

/// 足場だよ！プレイヤーはこの上に着地できる。
///
/// サイズは画像 (`asset`) のピクセルサイズそのもので、作ったあとは変わらない。
/// 動くのはスクロールの時の x だけ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub body: Entity,
    pub asset: AssetKey,
}

impl Platform {
    pub fn new(position: Vector2, asset: AssetKey, size: ImageSize) -> Self {
        Self {
            body: Entity::new(position, size.width, size.height),
            asset,
        }
    }
}
