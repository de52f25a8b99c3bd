// src/app/renderer.rs
//! GameApp の描画関連ロジック。

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::app::asset_loader::LoadedImages;
use crate::assets::AssetKey;
use crate::components::Vector2;
use crate::world::World;

const BACKGROUND_COLOR: &str = "white";
const PLAYER_COLOR: &str = "red";

/// Canvas に 1 フレーム分を描く。画像が揃ってから作る。
pub struct Renderer {
    context: CanvasRenderingContext2d,
    images: LoadedImages,
}

impl Renderer {
    pub fn new(context: CanvasRenderingContext2d, images: LoadedImages) -> Self {
        Self { context, images }
    }

    /// 背景を白で塗って、背景オブジェクト → 足場 → プレイヤーの順で描く。
    pub fn draw(&self, world: &World) -> Result<(), JsValue> {
        let settings = world.settings();
        self.context.set_fill_style_str(BACKGROUND_COLOR);
        self.context
            .fill_rect(0.0, 0.0, settings.world_width, settings.world_height);

        for object in world.generic_objects() {
            self.draw_image(object.asset, object.body.position)?;
        }
        for platform in world.platforms() {
            self.draw_image(platform.asset, platform.body.position)?;
        }

        let body = &world.player().body;
        self.context.set_fill_style_str(PLAYER_COLOR);
        self.context
            .fill_rect(body.position.x, body.position.y, body.width, body.height);
        Ok(())
    }

    fn draw_image(&self, key: AssetKey, at: Vector2) -> Result<(), JsValue> {
        match self.images.get(key) {
            Some(image) => self
                .context
                .draw_image_with_html_image_element(image, at.x, at.y),
            None => {
                warn!("App::Renderer: image {} is missing, skipped", key);
                Ok(())
            }
        }
    }
}
