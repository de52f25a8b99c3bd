// src/app/frame_loop.rs
//! requestAnimationFrame で毎フレーム World を進めて描く。

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::app::lock;
use crate::app::renderer::Renderer;
use crate::world::{FrameReport, World};

pub(crate) type FrameCallback = Arc<Mutex<Option<Closure<dyn FnMut()>>>>;
pub(crate) type SharedRenderer = Arc<Mutex<Option<Renderer>>>;

/// World と Renderer を両方ロックして `f` を呼ぶ。ロックは必ず World → Renderer の順。
pub(crate) fn with_world_and_renderer<R, T>(
    world_arc: &Arc<Mutex<World>>,
    renderer_arc: &Mutex<Option<R>>,
    f: impl FnOnce(&mut World, Option<&R>) -> T,
) -> T {
    let mut world = lock(world_arc);
    let renderer = lock(renderer_arc);
    f(&mut world, renderer.as_ref())
}

/// 1 フレーム分: World を 1 歩進めて、描画できるなら描く。
pub(crate) fn run_frame(
    world_arc: &Arc<Mutex<World>>,
    renderer_arc: &SharedRenderer,
) -> Result<FrameReport, JsValue> {
    with_world_and_renderer(world_arc, renderer_arc, |world, renderer| {
        let report = world.step();
        if let Some(renderer) = renderer {
            renderer.draw(world)?;
        }
        Ok(report)
    })
}

/// 止まっていたら slot の中身を捨てて true を返す。
pub(crate) fn release_if_stopped<T>(running: &AtomicBool, slot: &Mutex<Option<T>>) -> bool {
    if running.load(Ordering::SeqCst) {
        return false;
    }
    let released = lock(slot).take();
    drop(released);
    true
}

/// `fut` がエラーで終わったら `rollback` を呼んでからエラーを返す。
pub(crate) async fn rollback_on_error<T, E>(
    fut: impl Future<Output = Result<T, E>>,
    rollback: impl FnOnce(&E),
) -> Result<T, E> {
    let result = fut.await;
    if let Err(e) = &result {
        rollback(e);
    }
    result
}

/// ループを始める。`running` が false になったら次のフレームを予約せず、
/// `frame_slot` のクロージャも捨てる (tick と slot の Arc の循環を切る)。
pub(crate) fn start_frame_loop(
    world_arc: Arc<Mutex<World>>,
    renderer_arc: SharedRenderer,
    frame_slot: FrameCallback,
    running: Arc<AtomicBool>,
) -> Result<(), JsValue> {
    let next_slot = Arc::clone(&frame_slot);
    let tick = Closure::wrap(Box::new(move || {
        if release_if_stopped(&running, &next_slot) {
            info!("App::FrameLoop: stopped");
            return;
        }
        if let Err(e) = run_frame(&world_arc, &renderer_arc) {
            error!("App::FrameLoop: frame failed: {:?}", e);
        }
        if let Some(callback) = lock(&next_slot).as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                error!("App::FrameLoop: failed to schedule next frame: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>);

    request_animation_frame(&tick)?;
    *lock(&frame_slot) = Some(tick);
    info!("App::FrameLoop: started");
    Ok(())
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("Failed to get window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
