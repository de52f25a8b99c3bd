// src/systems/physics_system.rs

use log::trace;

use crate::system::System;
use crate::world::World;

/// プレイヤーを 1 フレーム進めるシステム (位置 += 速度 → 重力)。
pub struct PlayerPhysicsSystem;

impl System for PlayerPhysicsSystem {
    fn run(&mut self, world: &mut World) {
        let gravity = world.settings.gravity;
        let world_height = world.settings.world_height;
        let floor = world.settings.floor_policy;

        let result = world.player.advance(gravity, world_height, floor);
        trace!(
            "PlayerPhysicsSystem: {:?} pos={:?} vel={:?}",
            result,
            world.player.body.position,
            world.player.velocity
        );
        world.report.advance = Some(result);
    }
}
