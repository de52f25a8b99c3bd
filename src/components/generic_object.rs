// src/components/generic_object.rs

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::vector2::Vector2;
use crate::assets::{AssetKey, ImageSize};

/// 背景や丘みたいな飾りのオブジェクト。当たり判定はなし、スクロールだけする。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericObject {
    pub body: Entity,
    pub asset: AssetKey,
}

impl GenericObject {
    pub fn new(position: Vector2, asset: AssetKey, size: ImageSize) -> Self {
        Self {
            body: Entity::new(position, size.width, size.height),
            asset,
        }
    }
}
