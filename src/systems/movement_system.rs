// src/systems/movement_system.rs

use log::trace;
use serde::{Deserialize, Serialize};

use crate::components::Intents;
use crate::config::GameSettings;
use crate::system::System;
use crate::world::World;

/// 1 フレームの左右移動の状態。毎フレームちょうど 1 つが選ばれるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionState {
    /// プレイヤー自身が右へ歩く
    WalkRight,
    /// プレイヤー自身が左へ歩く
    WalkLeft,
    /// プレイヤーは止まって、世界が左へ流れる (カメラが右へ)
    ScrollRight,
    /// プレイヤーは止まって、世界が右へ流れる (カメラが左へ)
    ScrollLeft,
    #[default]
    Idle,
}

/// 入力と今の位置から、このフレームの状態を選ぶ。
///
/// 優先順位: 右に歩く → 左に歩く → スクロール → 何もしない。
/// スクロール量が 0 の時はカメラが戻れないので、左は画面の端 (x > 0) まで歩ける。
pub fn select_motion(intents: Intents, player_x: f64, scroll_offset: f64, settings: &GameSettings) -> MotionState {
    let can_walk_left =
        player_x > settings.left_bound || (scroll_offset == 0.0 && player_x > 0.0);

    if intents.move_right && player_x < settings.right_bound {
        MotionState::WalkRight
    } else if intents.move_left && can_walk_left {
        MotionState::WalkLeft
    } else if intents.move_right {
        MotionState::ScrollRight
    } else if intents.move_left && scroll_offset > 0.0 {
        MotionState::ScrollLeft
    } else {
        MotionState::Idle
    }
}

/// 左右移動とカメラスクロールのシステム。
///
/// 横の速度は慣性なしで毎フレーム `+speed` / `-speed` / `0` に直接セットする。
/// スクロール中は足場を `speed`、背景を `speed * parallax_factor` だけ動かす。
pub struct MovementSystem;

impl MovementSystem {
    /// スクロール量を `delta` だけ進めて、足場と背景を逆向きに動かす。
    /// `scroll_offset` は 0 より小さくならない。
    fn scroll(world: &mut World, delta: f64) {
        let delta = delta.max(-world.scroll_offset);
        world.scroll_offset += delta;

        let parallax = world.settings.parallax_factor;
        for platform in world.platforms.iter_mut() {
            platform.body.shift_x(-delta);
        }
        for object in world.generic_objects.iter_mut() {
            object.body.shift_x(-delta * parallax);
        }
    }
}

impl System for MovementSystem {
    fn run(&mut self, world: &mut World) {
        let speed = world.player.speed;
        let motion = select_motion(
            world.intents,
            world.player.body.position.x,
            world.scroll_offset,
            &world.settings,
        );

        world.player.velocity.x = match motion {
            MotionState::WalkRight => speed,
            MotionState::WalkLeft => -speed,
            MotionState::ScrollRight | MotionState::ScrollLeft | MotionState::Idle => 0.0,
        };

        match motion {
            MotionState::ScrollRight => Self::scroll(world, speed),
            MotionState::ScrollLeft => Self::scroll(world, -speed),
            _ => {}
        }

        trace!("MovementSystem: {:?} scroll_offset={}", motion, world.scroll_offset);
        world.report.motion = motion;
    }
}
