// src/systems/collision_system.rs

use log::debug;

use crate::components::{Platform, Player};
use crate::system::System;
use crate::world::World;

/// プレイヤーと 1 枚の足場の「上面」についての 4 つの判定。
///
/// 4 つ全部 true の時だけ着地になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopContact {
    /// プレイヤーの下端が足場の上面と同じか、それより上
    pub above_top: bool,
    /// このフレームの落下量を足すと上面に届く (か越える)
    pub will_cross_top: bool,
    /// プレイヤーの右端が足場の左端以上
    pub overlaps_left: bool,
    /// プレイヤーの左端が足場の右端以下
    pub overlaps_right: bool,
}

impl TopContact {
    pub fn between(player: &Player, platform: &Platform) -> Self {
        let p = &player.body;
        let top = platform.body.top();
        Self {
            above_top: p.bottom() <= top,
            will_cross_top: p.bottom() + player.velocity.y >= top,
            overlaps_left: p.right() >= platform.body.left(),
            overlaps_right: p.left() <= platform.body.right(),
        }
    }

    pub fn is_landing(&self) -> bool {
        self.above_top && self.will_cross_top && self.overlaps_left && self.overlaps_right
    }
}

/// 全部の足場について着地判定をして、着地したら velocity.y を 0 にする。
///
/// 位置の補正はしないし、1 フレームで足場を飛び越えるような速さの時は
/// すり抜ける (連続的な当たり判定はしない)。
///
/// 判定はどの足場もこのフレームに入った時点のプレイヤーで行う。
/// 戻り値は着地した足場の数。
pub fn resolve_collisions(player: &mut Player, platforms: &[Platform]) -> usize {
    let landings = platforms
        .iter()
        .filter(|platform| TopContact::between(player, platform).is_landing())
        .count();
    if landings > 0 {
        player.land();
    }
    landings
}

/// 足場への着地を処理するシステム。
pub struct PlatformCollisionSystem;

impl System for PlatformCollisionSystem {
    fn run(&mut self, world: &mut World) {
        let landings = resolve_collisions(&mut world.player, &world.platforms);
        if landings > 0 {
            debug!("PlatformCollisionSystem: landed on {} platform(s)", landings);
        }
        world.report.landings = landings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetKey, ImageSize};
    use crate::components::Vector2;

    fn platform(x: f64, y: f64) -> Platform {
        Platform::new(Vector2::new(x, y), AssetKey::Platform, ImageSize::new(200.0, 20.0))
    }

    fn falling_player(x: f64, bottom: f64, vy: f64) -> Player {
        let mut p = Player::new(Vector2::new(x, bottom - 30.0), 30.0, 30.0, 5.0);
        p.velocity.y = vy;
        p
    }

    #[test]
    fn lands_when_about_to_cross_top() {
        let plat = platform(200.0, 150.0);
        let mut player = falling_player(250.0, 145.0, 6.0);

        let contact = TopContact::between(&player, &plat);
        assert!(contact.is_landing());

        assert_eq!(resolve_collisions(&mut player, &[plat]), 1);
        assert_eq!(player.velocity.y, 0.0);
        // 位置はそのまま (スナップしない)
        assert_eq!(player.body.bottom(), 145.0);
    }

    #[test]
    fn standing_player_is_idempotent() {
        let plat = platform(200.0, 150.0);
        let mut player = falling_player(250.0, 150.0, 0.0);

        assert_eq!(resolve_collisions(&mut player, &[plat.clone()]), 1);
        let after_first = player.clone();
        assert_eq!(resolve_collisions(&mut player, &[plat]), 1);
        assert_eq!(player, after_first);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn no_landing_when_not_reaching_top() {
        let plat = platform(200.0, 150.0);
        let mut player = falling_player(250.0, 100.0, 6.0);

        let contact = TopContact::between(&player, &plat);
        assert!(contact.above_top);
        assert!(!contact.will_cross_top);
        assert_eq!(resolve_collisions(&mut player, &[plat]), 0);
        assert_eq!(player.velocity.y, 6.0);
    }

    #[test]
    fn no_landing_when_already_below_top() {
        let plat = platform(200.0, 150.0);
        let mut player = falling_player(250.0, 155.0, 6.0);
        assert!(!TopContact::between(&player, &plat).above_top);
        assert_eq!(resolve_collisions(&mut player, &[plat]), 0);
    }

    #[test]
    fn no_landing_beside_platform() {
        let plat = platform(200.0, 150.0);

        // 左側: 右端 169 < 200
        let left = falling_player(139.0, 145.0, 6.0);
        assert!(!TopContact::between(&left, &plat).overlaps_left);

        // 右側: 左端 401 > 400
        let right = falling_player(401.0, 145.0, 6.0);
        assert!(!TopContact::between(&right, &plat).overlaps_right);

        // 端ちょうどは乗れる
        let edge = falling_player(170.0, 145.0, 6.0);
        assert!(TopContact::between(&edge, &plat).is_landing());
        let edge = falling_player(400.0, 145.0, 6.0);
        assert!(TopContact::between(&edge, &plat).is_landing());
    }

    #[test]
    fn moving_upwards_never_lands() {
        let plat = platform(200.0, 150.0);
        let mut player = falling_player(250.0, 145.0, -20.0);
        assert_eq!(resolve_collisions(&mut player, &[plat]), 0);
        assert_eq!(player.velocity.y, -20.0);
    }

    #[test]
    fn overlapping_platforms_each_count() {
        let plats = [platform(200.0, 150.0), platform(220.0, 150.0), platform(800.0, 150.0)];
        let mut player = falling_player(250.0, 148.0, 3.0);
        assert_eq!(resolve_collisions(&mut player, &plats), 2);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn fast_fall_passes_through_thin_platform() {
        use crate::config::FloorPolicy;

        // 上面 150、厚さ 5 の薄い足場
        let thin = Platform::new(Vector2::new(200.0, 150.0), AssetKey::Platform, ImageSize::new(200.0, 5.0));
        let mut player = falling_player(250.0, 140.0, 40.0);

        player.advance(1.5, 576.0, FloorPolicy::FallThrough);

        // 1 フレームで 140 → 180、足場 (150..155) をまたいだ
        assert_eq!(player.body.bottom(), 180.0);
        assert_eq!(player.velocity.y, 41.5);
        assert!(!TopContact::between(&player, &thin).above_top);
        assert_eq!(resolve_collisions(&mut player, &[thin]), 0);
        assert_eq!(player.velocity.y, 41.5);
        assert!(!player.grounded);
    }

    #[test]
    fn empty_platform_list_does_nothing() {
        let mut player = falling_player(250.0, 148.0, 3.0);
        assert_eq!(resolve_collisions(&mut player, &[]), 0);
        assert_eq!(player.velocity.y, 3.0);
    }
}
