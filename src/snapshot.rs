// src/snapshot.rs

// World の中身を描画側 (JS やレンダラー) に渡すためのデータ型だよ！
// World 自体は外に出さないで、読み取り専用のコピーをここで作る。
use serde::{Deserialize, Serialize};

use crate::assets::AssetKey;
use crate::components::{Entity, GameStatus, Intents, Vector2};
use crate::systems::MotionState;
use crate::world::World;

/// 描画に必要な 1 つ分の情報 (位置・サイズ・どの画像か)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityData {
    pub position: Vector2,
    pub width: f64,
    pub height: f64,
    /// 画像なし (プレイヤーは四角で描く) なら None
    pub asset: Option<AssetKey>,
}

impl EntityData {
    fn from_body(body: &Entity, asset: Option<AssetKey>) -> Self {
        Self {
            position: body.position,
            width: body.width,
            height: body.height,
            asset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    #[serde(flatten)]
    pub body: EntityData,
    pub velocity: Vector2,
    pub grounded: bool,
}

/// ある 1 フレームの World 全体。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub ready: bool,
    pub status: GameStatus,
    pub scroll_offset: f64,
    pub level_end: Option<f64>,
    pub intents: Intents,
    pub motion: MotionState,
    pub player: PlayerData,
    pub platforms: Vec<EntityData>,
    pub generic_objects: Vec<EntityData>,
}

impl WorldSnapshot {
    pub fn capture(world: &World) -> Self {
        let player = world.player();
        Self {
            frame: world.frame(),
            ready: world.is_ready(),
            status: world.status(),
            scroll_offset: world.scroll_offset(),
            level_end: world.level_end(),
            intents: world.intents(),
            motion: world.last_report().motion,
            player: PlayerData {
                body: EntityData::from_body(&player.body, None),
                velocity: player.velocity,
                grounded: player.grounded,
            },
            platforms: world
                .platforms()
                .iter()
                .map(|p| EntityData::from_body(&p.body, Some(p.asset)))
                .collect(),
            generic_objects: world
                .generic_objects()
                .iter()
                .map(|g| EntityData::from_body(&g.body, Some(g.asset)))
                .collect(),
        }
    }
}
