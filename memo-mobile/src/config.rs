//! Swipe configuration stored in the browser

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use memo_common::SwipeConfig;
use wasm_bindgen::JsValue;

const CONFIG_KEY: &str = "memo_swipe_config";

/// Load the stored swipe config, falling back to defaults
pub fn load_swipe_config() -> SwipeConfig {
    match LocalStorage::get::<SwipeConfig>(CONFIG_KEY) {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn(&format!("Ignoring stored swipe config: {}", err));
                SwipeConfig::default()
            }
        },
        Err(StorageError::KeyNotFound(_)) => SwipeConfig::default(),
        Err(err) => {
            warn(&format!("Failed to read swipe config: {}", err));
            SwipeConfig::default()
        }
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
