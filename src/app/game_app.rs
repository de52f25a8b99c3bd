// src/app/game_app.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use js_sys::Promise;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::browser_event_manager::{self, EventClosures};
use crate::app::frame_loop::{self, FrameCallback, SharedRenderer};
use crate::app::input_handler::{self, InputController};
use crate::app::renderer::Renderer;
use crate::app::{asset_loader, init_handler, lock, state_getter};
use crate::config::GameSettings;
use crate::world::World;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    world: Arc<Mutex<World>>,
    controller: Arc<InputController>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    // 画像の読み込みが終わるまでは None
    renderer: SharedRenderer,
    // window に付けた keydown / keyup のクロージャ
    event_closures: EventClosures,
    frame_closure: FrameCallback,
    running: Arc<AtomicBool>,
    started: Arc<AtomicBool>,
}

#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定で作る。`canvas_id` の要素がなければエラー。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GameApp, JsValue> {
        GameApp::build(canvas_id, GameSettings::default())
    }

    /// JSON の設定で作る。書いてない項目はデフォルトのまま。
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(canvas_id: &str, settings_json: &str) -> Result<GameApp, JsValue> {
        let settings = GameSettings::from_json(settings_json).map_err(|e| {
            error!("GameApp: invalid settings: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        GameApp::build(canvas_id, settings)
    }

    /// 画像を読み込んで、ステージを組んで、キー入力とフレームループを始める。
    ///
    /// 全部の画像が揃ったら resolve、1 枚でも失敗したら reject する Promise を返す。
    pub fn start(&self) -> Promise {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("GameApp: start() called again (already started or stopped), ignored");
            return Promise::resolve(&JsValue::UNDEFINED);
        }

        let world = Arc::clone(&self.world);
        let controller = Arc::clone(&self.controller);
        let renderer = Arc::clone(&self.renderer);
        let event_closures = Arc::clone(&self.event_closures);
        let frame_closure = Arc::clone(&self.frame_closure);
        let running = Arc::clone(&self.running);
        let started = Arc::clone(&self.started);
        let context = self.context.clone();
        let manifest = lock(&self.world).settings().assets.clone();

        future_to_promise(async move {
            let launch = async {
                let images = asset_loader::load_images(&manifest).await?;
                let sizes = images.sizes()?;
                lock(&world).load_layout(sizes);
                *lock(&renderer) = Some(Renderer::new(context, images));

                browser_event_manager::attach_keyboard_listeners(&world, &controller, &event_closures)?;
                running.store(true, Ordering::SeqCst);
                frame_loop::start_frame_loop(
                    Arc::clone(&world),
                    Arc::clone(&renderer),
                    Arc::clone(&frame_closure),
                    Arc::clone(&running),
                )?;
                Ok::<(), JsValue>(())
            };

            // どこで失敗しても、もう一回 start() できるように戻しておく
            frame_loop::rollback_on_error(launch, |e| {
                error!("GameApp: start failed: {:?}", e);
                running.store(false, Ordering::SeqCst);
                if let Err(detach_err) = browser_event_manager::detach_keyboard_listeners(&event_closures) {
                    error!("GameApp: failed to detach listeners: {:?}", detach_err);
                }
                started.store(false, Ordering::SeqCst);
            })
            .await?;

            info!("GameApp: started");
            Ok(JsValue::UNDEFINED)
        })
    }

    /// フレームループを止めて、キー入力も外す。
    ///
    /// 止めたら終わり。このあと `start()` を呼んでも何もしない (新しい GameApp を作る)。
    pub fn stop(&self) -> Result<(), JsValue> {
        self.running.store(false, Ordering::SeqCst);
        browser_event_manager::detach_keyboard_listeners(&self.event_closures)
    }

    /// 自前でループを回したい時用。1 フレーム進めて描く。
    pub fn tick(&self) -> Result<(), JsValue> {
        frame_loop::run_frame(&self.world, &self.renderer).map(|_| ())
    }

    /// 今の状態を描くだけ。World は進めない。
    pub fn render(&self) -> Result<(), JsValue> {
        frame_loop::with_world_and_renderer(&self.world, &self.renderer, |world, renderer| {
            match renderer {
                Some(renderer) => renderer.draw(world),
                None => {
                    warn!("GameApp: render() before images were loaded");
                    Ok(())
                }
            }
        })
    }

    /// `KeyboardEvent.code` を渡す。知ってるキーなら true。
    pub fn key_down(&self, code: &str) -> bool {
        input_handler::handle_key(&self.world, &self.controller, code, true)
    }

    pub fn key_up(&self, code: &str) -> bool {
        input_handler::handle_key(&self.world, &self.controller, code, false)
    }

    pub fn jump(&self) -> bool {
        lock(&self.world).jump()
    }

    pub fn reset(&self) {
        lock(&self.world).reset();
        info!("GameApp: reset");
    }

    pub fn is_ready(&self) -> bool {
        lock(&self.world).is_ready()
    }

    pub fn scroll_offset(&self) -> f64 {
        lock(&self.world).scroll_offset()
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas.height()
    }

    // JSでデバッグ用に World の状態を JSON で返す
    pub fn get_world_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_world_state_json(&self.world)
    }
}

impl GameApp {
    fn build(canvas_id: &str, settings: GameSettings) -> Result<GameApp, JsValue> {
        info!("GameApp: 初期化中...");
        let (canvas, context) = init_handler::initialize_canvas(canvas_id, &settings)?;
        let controller = Arc::new(InputController::new(settings.key_bindings.clone()));
        let world = init_handler::initialize_world(settings);
        info!("GameApp: 初期化完了。");

        Ok(GameApp {
            world,
            controller,
            canvas,
            context,
            renderer: Arc::new(Mutex::new(None)),
            event_closures: Arc::new(Mutex::new(Vec::new())),
            frame_closure: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
            started: Arc::new(AtomicBool::new(false)),
        })
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        info!("GameApp: dropping, detaching listeners");
        self.running.store(false, Ordering::SeqCst);
        if let Err(e) = browser_event_manager::detach_keyboard_listeners(&self.event_closures) {
            error!("GameApp: failed to detach listeners: {:?}", e);
        }
    }
}
