// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

use std::sync::{Mutex, MutexGuard};

use log::warn;

pub mod asset_loader;
pub mod browser_event_manager;
pub mod frame_loop;
pub mod game_app;
pub mod init_handler;
pub mod input_handler;
pub mod renderer;
pub mod state_getter;

/// Mutex をロックする。前の持ち主がパニックしてても中身はそのまま使う。
///
/// wasm はシングルスレッドなので、ここで待たされることはない。
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("mutex was poisoned, recovering inner value");
        poisoned.into_inner()
    })
}
