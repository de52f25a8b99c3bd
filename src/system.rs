// src/system.rs

use crate::world::World;

/// System（システム）トレイトだよ！
///
/// 1 フレームの中の「物理」「当たり判定」「スクロール」「勝ち負け判定」みたいな
/// 処理を 1 つずつ分けて持つ。`World::step` が決まった順番で `run` を呼ぶよ。
///
/// 結果は `World` のフレームレポート (`FrameReport`) に書き込む。
pub trait System {
    fn run(&mut self, world: &mut World);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Vector2;

    /// プレイヤーを右に 1 だけずらすダミー
    struct NudgeRight;

    impl System for NudgeRight {
        fn run(&mut self, world: &mut World) {
            world.player_mut().body.position.x += 1.0;
        }
    }

    #[test]
    fn system_can_mutate_world() {
        let mut world = World::default();
        let start = world.player().position();

        let mut system = NudgeRight;
        system.run(&mut world);
        system.run(&mut world);

        assert_eq!(world.player().position(), start + Vector2::new(2.0, 0.0));
    }
}
