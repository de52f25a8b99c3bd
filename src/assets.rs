// src/assets.rs
//! 画像アセットの名前とサイズ。
//!
//! ここはブラウザに依存しない部分だけ。実際の読み込みは `app::asset_loader` がやるよ。

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// ゲームが使う画像の種類だよ！🖼️
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKey {
    Platform,
    PlatformSmallTall,
    Background,
    Hills,
}

impl AssetKey {
    pub const ALL: [AssetKey; 4] = [
        AssetKey::Platform,
        AssetKey::PlatformSmallTall,
        AssetKey::Background,
        AssetKey::Hills,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AssetKey::Platform => "platform",
            AssetKey::PlatformSmallTall => "platform_small_tall",
            AssetKey::Background => "background",
            AssetKey::Hills => "hills",
        }
    }

    fn default_url(self) -> String {
        format!("img/{}.png", self.name())
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 画像のピクセルサイズ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 読み込みが終わった画像たちのサイズ一覧。
///
/// 足場の幅・高さは画像のサイズそのものなので、レイアウトを作るにはこれが必要。
/// 読み込み完了イベントが来るまでは World はこれを持っていない (= 足場は空っぽ)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetSizes {
    pub platform: ImageSize,
    pub platform_small_tall: ImageSize,
    pub background: ImageSize,
    pub hills: ImageSize,
}

impl AssetSizes {
    pub fn get(&self, key: AssetKey) -> ImageSize {
        match key {
            AssetKey::Platform => self.platform,
            AssetKey::PlatformSmallTall => self.platform_small_tall,
            AssetKey::Background => self.background,
            AssetKey::Hills => self.hills,
        }
    }

    /// キーごとのサイズ一覧から組み立てる。足りないキーがあれば `Err(そのキー)`。
    pub fn from_lookup(lookup: impl Fn(AssetKey) -> Option<ImageSize>) -> Result<Self, AssetKey> {
        let size = |key| lookup(key).ok_or(key);
        Ok(Self {
            platform: size(AssetKey::Platform)?,
            platform_small_tall: size(AssetKey::PlatformSmallTall)?,
            background: size(AssetKey::Background)?,
            hills: size(AssetKey::Hills)?,
        })
    }
}

/// どの画像をどの URL から読むか。JS から設定 JSON で上書きできる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest {
    urls: BTreeMap<AssetKey, String>,
}

impl AssetManifest {
    /// URL を返す。マニフェストに無いキーは `img/<name>.png`。
    pub fn url(&self, key: AssetKey) -> String {
        self.urls.get(&key).cloned().unwrap_or_else(|| key.default_url())
    }

    pub fn set_url(&mut self, key: AssetKey, url: impl Into<String>) {
        self.urls.insert(key, url.into());
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        let urls = AssetKey::ALL.iter().map(|&key| (key, key.default_url())).collect();
        Self { urls }
    }
}
