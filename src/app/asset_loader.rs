// src/app/asset_loader.rs
//! 画像を全部読み込んでから先に進むためのローダー。
//!
//! 1 枚ごとに onload / onerror を oneshot チャンネルにつないで Future にして、
//! `try_join_all` で全部待つ。1 枚でも失敗したら全体がエラー。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use futures::future::try_join_all;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlImageElement};

use crate::app::lock;
use crate::assets::{AssetKey, AssetManifest, AssetSizes, ImageSize};

type LoadSender = Arc<Mutex<Option<oneshot::Sender<Result<(), JsValue>>>>>;

/// 読み込み済みの画像たち。
pub struct LoadedImages {
    images: HashMap<AssetKey, HtmlImageElement>,
}

impl LoadedImages {
    pub fn get(&self, key: AssetKey) -> Option<&HtmlImageElement> {
        self.images.get(&key)
    }

    /// ステージの組み立てに使うサイズ一覧。
    pub fn sizes(&self) -> Result<AssetSizes, JsValue> {
        AssetSizes::from_lookup(|key| {
            self.get(key)
                .map(|image| ImageSize::new(image.width() as f64, image.height() as f64))
        })
        .map_err(|key| JsValue::from_str(&format!("Image {} was not loaded", key)))
    }
}

/// マニフェストにある画像を全部読み込む。
pub async fn load_images(manifest: &AssetManifest) -> Result<LoadedImages, JsValue> {
    info!("App::Assets: loading {} images", AssetKey::ALL.len());
    let loads = AssetKey::ALL
        .iter()
        .map(|&key| load_image(key, manifest.url(key)));
    let images = try_join_all(loads).await?;
    info!("App::Assets: all images loaded");
    Ok(LoadedImages {
        images: images.into_iter().collect(),
    })
}

async fn load_image(key: AssetKey, url: String) -> Result<(AssetKey, HtmlImageElement), JsValue> {
    let image = HtmlImageElement::new()?;
    let (sender, receiver) = oneshot::channel::<Result<(), JsValue>>();
    let sender: LoadSender = Arc::new(Mutex::new(Some(sender)));

    let onload: Closure<dyn FnMut()> = {
        let sender = Arc::clone(&sender);
        Closure::once(move || notify(&sender, Ok(())))
    };
    let onerror: Closure<dyn FnMut(Event)> = {
        let sender = Arc::clone(&sender);
        let url = url.clone();
        Closure::once(move |_event: Event| {
            notify(&sender, Err(JsValue::from_str(&format!("Failed to load image {}", url))))
        })
    };
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    // ほかの画像が失敗してこの Future ごと捨てられても、クロージャより先にハンドラを外す
    let _detach = OnDrop::new({
        let image = image.clone();
        move || {
            image.set_onload(None);
            image.set_onerror(None);
        }
    });
    image.set_src(&url);

    let outcome = receiver
        .await
        .map_err(|_| JsValue::from_str(&format!("Loading of {} was cancelled", url)));

    if let Err(e) = outcome.and_then(|result| result) {
        error!("App::Assets: {} ({}) failed: {:?}", key, url, e);
        return Err(e);
    }
    debug!(
        "App::Assets: {} loaded from {} ({}x{})",
        key,
        url,
        image.width(),
        image.height()
    );
    Ok((key, image))
}

/// スコープを抜ける時に 1 回だけ `F` を呼ぶ。
pub(crate) struct OnDrop<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
    pub(crate) fn new(action: F) -> Self {
        Self { action: Some(action) }
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

fn notify(sender: &LoadSender, result: Result<(), JsValue>) {
    if let Some(tx) = lock(sender).take() {
        // 受け手がもういないなら結果は捨てる
        let _ = tx.send(result);
    }
}
