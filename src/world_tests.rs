// src/world_tests.rs
// World のユニットテスト！ 1 フレームの流れ全体をここで確かめるよ。

use super::*;
use wasm_bindgen_test::*;

use crate::components::Vector2;
use crate::config::FloorPolicy;
use crate::level::tests::sample_sizes;

fn ready_world(settings: GameSettings) -> World {
    let mut world = World::new(settings);
    world.load_layout(sample_sizes());
    world
}

fn platform_xs(world: &World) -> Vec<f64> {
    world.platforms().iter().map(|p| p.body.position.x).collect()
}

#[wasm_bindgen_test]
fn new_world_is_empty_until_assets_load() {
    let world = World::default();
    assert!(!world.is_ready());
    assert!(world.platforms().is_empty());
    assert!(world.generic_objects().is_empty());
    assert_eq!(world.level_end(), None);
    assert_eq!(world.scroll_offset(), 0.0);
    assert_eq!(world.status(), GameStatus::Playing);
    assert_eq!(world.player().position(), Vector2::new(100.0, 40.0));
}

#[wasm_bindgen_test]
fn load_layout_installs_platforms() {
    let world = ready_world(GameSettings::default());
    assert!(world.is_ready());
    assert_eq!(world.platforms().len(), 7);
    assert_eq!(world.generic_objects().len(), 2);
    assert_eq!(world.level_end(), Some(3598.0));
}

#[wasm_bindgen_test]
fn step_counts_frames_and_reports_motion() {
    let mut world = ready_world(GameSettings::default());
    let first = world.step();
    let second = world.step();
    assert_eq!(first.frame, 1);
    assert_eq!(second.frame, 2);
    assert_eq!(second.motion, MotionState::Idle);
    assert_eq!(second.advance, Some(Advance::Falling));
}

#[wasm_bindgen_test]
fn player_lands_on_first_platform_and_stays() {
    let mut world = ready_world(GameSettings::default());
    let mut landed_frames = 0;
    for _ in 0..120 {
        if world.step().landings > 0 {
            landed_frames += 1;
        }
    }
    assert!(landed_frames > 0);
    let player = world.player();
    assert_eq!(player.velocity.y, 0.0);
    assert!(player.body.bottom() <= 470.0);
    assert!(player.body.bottom() > 470.0 - 30.0);
    assert!(player.grounded);
    assert_eq!(world.last_report().landings, 1);

    // もう動かない
    let rest = player.position();
    world.step();
    assert_eq!(world.player().position(), rest);
}

#[wasm_bindgen_test]
fn walking_right_moves_player_not_world() {
    let mut world = ready_world(GameSettings::default());
    world.set_intents(Intents::new(false, true));
    world.player_mut().body.position.x = 200.0;

    let report = world.step();

    assert_eq!(report.motion, MotionState::WalkRight);
    assert_eq!(world.player().velocity.x, 5.0);
    assert_eq!(world.scroll_offset(), 0.0);

    // 速度は次のフレームの位置更新で効く
    world.step();
    assert_eq!(world.player().position().x, 205.0);
}

#[wasm_bindgen_test]
fn pushing_past_right_bound_scrolls_world() {
    let mut world = ready_world(GameSettings::default());
    world.set_intents(Intents::new(false, true));
    world.player_mut().body.position.x = 450.0;
    let before = platform_xs(&world);

    let report = world.step();

    assert_eq!(report.motion, MotionState::ScrollRight);
    assert_eq!(world.player().velocity.x, 0.0);
    assert_eq!(world.scroll_offset(), 5.0);
    let after = platform_xs(&world);
    for (a, b) in after.iter().zip(before.iter()) {
        assert_eq!(*a, *b - 5.0);
    }
}

#[wasm_bindgen_test]
fn falling_below_canvas_resets_session() {
    let mut world = ready_world(GameSettings::default());
    let fresh = platform_xs(&world);

    world.scroll_offset = 40.0;
    for p in world.platforms.iter_mut() {
        p.body.shift_x(-40.0);
    }
    world.player_mut().body.position = Vector2::new(300.0, 576.0 + 1.0);

    let report = world.step();

    assert_eq!(report.outcome, Some(Outcome::Lost));
    assert_eq!(world.player().position(), Vector2::new(100.0, 40.0));
    assert_eq!(world.scroll_offset(), 0.0);
    assert_eq!(platform_xs(&world), fresh);
}

#[wasm_bindgen_test]
fn fall_through_without_platforms_keeps_resetting() {
    let mut world = World::default();
    let mut losses = 0;
    for _ in 0..200 {
        if world.step().outcome == Some(Outcome::Lost) {
            losses += 1;
        }
    }
    assert!(losses >= 2, "expected repeated resets, got {}", losses);
}

#[wasm_bindgen_test]
fn clamp_policy_never_loses() {
    let settings = GameSettings {
        floor_policy: FloorPolicy::Clamp,
        ..GameSettings::default()
    };
    let mut world = World::new(settings);
    for _ in 0..300 {
        assert_eq!(world.step().outcome, None);
    }
    // 位置を動かしてから重力を足すので、床から最大 1 フレーム分 (gravity) はみ出す
    assert_eq!(world.player().velocity.y, 0.0);
    assert!(world.player().body.bottom() <= 576.0 + 1.5);
}

#[wasm_bindgen_test]
fn reset_matches_fresh_session_and_is_idempotent() {
    let mut world = ready_world(GameSettings::default());
    world.set_intents(Intents::new(false, true));
    for _ in 0..150 {
        world.step();
    }
    assert!(world.scroll_offset() > 0.0);

    world.reset();
    let fresh = ready_world(GameSettings::default());
    assert_eq!(world.player(), fresh.player());
    assert_eq!(world.platforms(), fresh.platforms());
    assert_eq!(world.generic_objects(), fresh.generic_objects());
    assert_eq!(world.scroll_offset(), 0.0);
    // キーは押しっぱなしのまま
    assert_eq!(world.intents(), Intents::new(false, true));

    let once = (world.player().clone(), world.platforms().to_vec(), world.scroll_offset());
    world.reset();
    let twice = (world.player().clone(), world.platforms().to_vec(), world.scroll_offset());
    assert_eq!(once, twice);
}

#[wasm_bindgen_test]
fn reaching_level_end_wins() {
    let mut world = ready_world(GameSettings::default());
    world.scroll_offset = 3598.0 - 5.0;
    world.set_intents(Intents::new(false, true));
    world.player_mut().body.position.x = 450.0;

    let report = world.step();

    assert_eq!(report.outcome, Some(Outcome::Won));
    assert_eq!(world.status(), GameStatus::Won);
    assert_eq!(world.step().outcome, None);
    assert_eq!(world.status(), GameStatus::Won);
}

#[wasm_bindgen_test]
fn unlimited_jump_works_in_mid_air() {
    let mut world = World::default();
    assert!(world.jump());
    assert!(world.jump());
    assert_eq!(world.player().velocity.y, -60.0);
}

#[wasm_bindgen_test]
fn grounded_only_jump_needs_ground() {
    let settings = GameSettings {
        jump_policy: JumpPolicy::GroundedOnly,
        ..GameSettings::default()
    };
    let mut world = ready_world(settings);

    // 落下中はジャンプできない
    world.step();
    assert!(!world.jump());

    for _ in 0..120 {
        world.step();
    }
    assert!(world.player().grounded);
    assert!(world.jump());
    assert_eq!(world.player().velocity.y, -30.0);
    // 2 段目はなし
    assert!(!world.jump());
}

#[wasm_bindgen_test]
fn scroll_offset_stays_non_negative_over_long_run() {
    let mut world = ready_world(GameSettings::default());
    let pattern = [
        Intents::new(false, true),
        Intents::new(true, false),
        Intents::new(true, true),
        Intents::default(),
    ];
    for i in 0..2000 {
        world.set_intents(pattern[(i / 37) % pattern.len()]);
        world.step();
        assert!(world.scroll_offset() >= 0.0);
    }
}
