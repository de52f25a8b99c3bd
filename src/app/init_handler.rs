// src/app/init_handler.rs
//! GameApp の初期化に関するロジック。

use std::sync::{Arc, Mutex};

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::GameSettings;
use crate::world::World;

/// World を作って Arc<Mutex<>> で包む。
pub(crate) fn initialize_world(settings: GameSettings) -> Arc<Mutex<World>> {
    info!("App::Init: creating world");
    Arc::new(Mutex::new(World::new(settings)))
}

/// Canvas を探して、ワールドの大きさに合わせて 2D コンテキストを取る。
pub(crate) fn initialize_canvas(
    canvas_id: &str,
    settings: &GameSettings,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = window()
        .ok_or("Failed to get window")?
        .document()
        .ok_or("Failed to get document")?;

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas element #{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} is not a canvas", canvas_id)))?;

    canvas.set_width(settings.world_width as u32);
    canvas.set_height(settings.world_height as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or("Failed to get 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Context is not CanvasRenderingContext2d"))?;

    info!(
        "App::Init: canvas #{} ready ({}x{})",
        canvas_id,
        canvas.width(),
        canvas.height()
    );
    Ok((canvas, context))
}
