// src/components/player.rs

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::vector2::Vector2;
use crate::config::settings::{FloorPolicy, GameSettings};

/// 1 フレーム分の重力計算の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// 空中。velocity.y に重力が足された。
    Falling,
    /// 床で止まった (`FloorPolicy::Clamp`)。
    HitFloor,
    /// 床を越えたけど止まらなかった (`FloorPolicy::FallThrough`)。
    PastFloor,
}

/// プレイヤーだよ！👤
///
/// 形 (`body`) に速度と歩く速さを足したもの。
/// `grounded` はフレームの途中で「床か足場に乗った」ら true になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Entity,
    pub velocity: Vector2,
    pub speed: f64,
    pub grounded: bool,
}

impl Player {
    pub fn new(start: Vector2, width: f64, height: f64, speed: f64) -> Self {
        Self {
            body: Entity::new(start, width, height),
            velocity: Vector2::ZERO,
            speed,
            grounded: false,
        }
    }

    /// 設定のスタート地点に新しいプレイヤーを作る。リセットでも使う。
    pub fn spawn(settings: &GameSettings) -> Self {
        Self::new(
            settings.player_start,
            settings.player_width,
            settings.player_height,
            settings.player_speed,
        )
    }

    pub fn position(&self) -> Vector2 {
        self.body.position
    }

    /// 1 フレーム進める。
    ///
    /// 先に今の速度で位置を動かして、そのあと重力を速度に足す (順番はこのまま)。
    /// 次のフレームの下端が `world_height` を越える時は `floor` に従う。
    pub fn advance(&mut self, gravity: f64, world_height: f64, floor: FloorPolicy) -> Advance {
        self.body.position += self.velocity;

        if self.body.bottom() + self.velocity.y <= world_height {
            self.velocity.y += gravity;
            return Advance::Falling;
        }

        match floor {
            FloorPolicy::Clamp => {
                self.velocity.y = 0.0;
                self.grounded = true;
                Advance::HitFloor
            }
            FloorPolicy::FallThrough => Advance::PastFloor,
        }
    }

    /// 足場に着地した。位置は補正しない (最大 1 フレーム分めり込むことがある)。
    pub fn land(&mut self) {
        self.velocity.y = 0.0;
        self.grounded = true;
    }
}
