// src/world.rs

use log::{debug, info};

use crate::assets::AssetSizes;
use crate::components::{
    Advance, GameStatus, GenericObject, Intents, Outcome, Platform, Player,
};
use crate::config::{GameSettings, JumpPolicy};
use crate::level::LevelLayout;
use crate::system::System;
use crate::systems::{
    MotionState, MovementSystem, OutcomeSystem, PlatformCollisionSystem, PlayerPhysicsSystem,
};

/// 1 回の `World::step` で何が起きたかのまとめ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// 何フレーム目か (1 始まり)
    pub frame: u64,
    pub advance: Option<Advance>,
    /// 着地した足場の数
    pub landings: usize,
    pub motion: MotionState,
    pub outcome: Option<Outcome>,
}

/// ゲーム世界の全部を持つ構造体だよ！🌏
///
/// プレイヤー、足場、背景オブジェクト、スクロール量、入力 (左右キー) を
/// ここだけが持っていて、外からは読み取り用のメソッド越しに見る。
/// 画像の読み込みが終わるまでは足場も背景も空っぽ。
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) settings: GameSettings,
    pub(crate) player: Player,
    pub(crate) platforms: Vec<Platform>,
    pub(crate) generic_objects: Vec<GenericObject>,
    pub(crate) scroll_offset: f64,
    pub(crate) intents: Intents,
    pub(crate) status: GameStatus,
    /// 読み込み済みの画像サイズ。リセットの時にレイアウトを作り直すのに使う。
    pub(crate) assets: Option<AssetSizes>,
    pub(crate) level_end: Option<f64>,
    pub(crate) frame: u64,
    pub(crate) report: FrameReport,
}

impl Default for World {
    fn default() -> Self {
        World::new(GameSettings::default())
    }
}

impl World {
    pub fn new(settings: GameSettings) -> Self {
        World {
            player: Player::spawn(&settings),
            platforms: Vec::new(),
            generic_objects: Vec::new(),
            scroll_offset: 0.0,
            intents: Intents::default(),
            status: GameStatus::Playing,
            assets: None,
            level_end: None,
            frame: 0,
            report: FrameReport::default(),
            settings,
        }
    }

    // --- 読み取り用 ---

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn generic_objects(&self) -> &[GenericObject] {
        &self.generic_objects
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn intents(&self) -> Intents {
        self.intents
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn level_end(&self) -> Option<f64> {
        self.level_end
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// 画像の読み込みが終わってステージができているか。
    pub fn is_ready(&self) -> bool {
        self.assets.is_some()
    }

    pub fn last_report(&self) -> FrameReport {
        self.report
    }

    // --- 入力 ---

    pub fn set_intents(&mut self, intents: Intents) {
        self.intents = intents;
    }

    pub fn set_move_left(&mut self, pressed: bool) {
        self.intents.move_left = pressed;
    }

    pub fn set_move_right(&mut self, pressed: bool) {
        self.intents.move_right = pressed;
    }

    /// ジャンプ！velocity.y から `jump_impulse` を引く。
    ///
    /// `JumpPolicy::Unlimited` なら空中でも何度でも。`GroundedOnly` なら
    /// 直前のフレームで床か足場に乗っていた時だけ。ジャンプしたら `true`。
    pub fn jump(&mut self) -> bool {
        let allowed = match self.settings.jump_policy {
            JumpPolicy::Unlimited => true,
            JumpPolicy::GroundedOnly => self.player.grounded,
        };
        if !allowed {
            debug!("World: jump ignored, player is airborne");
            return false;
        }
        self.player.velocity.y -= self.settings.jump_impulse;
        self.player.grounded = false;
        true
    }

    // --- ライフサイクル ---

    /// 画像の読み込みが終わった時に 1 回だけ呼ぶ。ステージを組み立てる。
    pub fn load_layout(&mut self, sizes: AssetSizes) {
        self.assets = Some(sizes);
        self.install_layout(LevelLayout::build(&sizes));
        info!(
            "World: layout ready ({} platforms, {} generic objects)",
            self.platforms.len(),
            self.generic_objects.len()
        );
    }

    fn install_layout(&mut self, layout: LevelLayout) {
        self.platforms = layout.platforms;
        self.generic_objects = layout.generic_objects;
        self.level_end = Some(layout.level_end);
    }

    /// セッションを最初からやり直す。
    ///
    /// プレイヤーを作り直して、スクロールを 0 に戻して、足場と背景を同じルールで
    /// 並べ直す。押しっぱなしのキーはそのまま。何回呼んでも同じ状態になる。
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.settings);
        self.scroll_offset = 0.0;
        self.status = GameStatus::Playing;
        match self.assets {
            Some(sizes) => self.install_layout(LevelLayout::build(&sizes)),
            None => {
                self.platforms.clear();
                self.generic_objects.clear();
                self.level_end = None;
            }
        }
        debug!("World: session reset");
    }

    /// 1 フレーム進める。
    ///
    /// 順番: 物理 (位置 → 重力) → 足場への着地 → 左右移動とスクロール → クリア / 落下判定。
    pub fn step(&mut self) -> FrameReport {
        self.frame += 1;
        self.report = FrameReport {
            frame: self.frame,
            ..FrameReport::default()
        };
        self.player.grounded = false;

        PlayerPhysicsSystem.run(self);
        PlatformCollisionSystem.run(self);
        MovementSystem.run(self);
        OutcomeSystem.run(self);

        self.report
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
