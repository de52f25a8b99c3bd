// src/systems/outcome_system.rs

use log::info;

use crate::components::{GameStatus, Outcome};
use crate::system::System;
use crate::world::World;

/// クリアと落下をチェックするシステムだよ！🏆
///
/// - スクロール量がステージの終わり (`level_end`) 以上になったらクリア。
///   クリアしたのは最初の 1 回だけ報告して、そのあとも遊び続けられる。
/// - プレイヤーの y が画面の高さを越えたら負け。その場でセッションをリセットする。
pub struct OutcomeSystem;

impl OutcomeSystem {
    fn reached_level_end(world: &World) -> bool {
        world
            .level_end
            .map_or(false, |level_end| world.scroll_offset >= level_end)
    }

    fn fell_off_screen(world: &World) -> bool {
        world.player.body.position.y > world.settings.world_height
    }
}

impl System for OutcomeSystem {
    fn run(&mut self, world: &mut World) {
        if world.status == GameStatus::Playing && Self::reached_level_end(world) {
            info!("You win");
            world.status = GameStatus::Won;
            world.report.outcome = Some(Outcome::Won);
        }

        if Self::fell_off_screen(world) {
            info!("You lose");
            world.reset();
            world.report.outcome = Some(Outcome::Lost);
        }
    }
}
