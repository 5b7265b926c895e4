//! Persisted session credentials, keyed `token` / `userRole` to match
//! what the backend's other clients expect. Browser localStorage on
//! wasm; a process-local map on desktop builds.

use super::model::Role;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "userRole";

#[cfg(target_arch = "wasm32")]
mod store {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod store {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();

    fn map() -> &'static Mutex<HashMap<String, String>> {
        STORE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    fn lock() -> std::sync::MutexGuard<'static, HashMap<String, String>> {
        map().lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(key: &str) -> Option<String> {
        lock().get(key).cloned()
    }

    pub fn set(key: &str, value: &str) {
        lock().insert(key.to_string(), value.to_string());
    }

    pub fn remove(key: &str) {
        lock().remove(key);
    }
}

pub fn token() -> Option<String> {
    store::get(TOKEN_KEY)
}

pub fn store_credentials(token: &str, role: Role) {
    store::set(TOKEN_KEY, token);
    store::set(ROLE_KEY, role.as_str());
}

pub fn clear() {
    store::remove(TOKEN_KEY);
    store::remove(ROLE_KEY);
}
