use contracts::system::auth::AdminInfo;
use web_sys::window;

use crate::shared::config::config;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(&config().token_storage_key, token);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(&config().token_storage_key)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Save the signed-in admin's profile as JSON
pub fn save_admin_info(admin: &AdminInfo) {
    let Ok(json) = serde_json::to_string(admin) else {
        return;
    };
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(&config().admin_storage_key, &json);
    }
}

/// Stored admin profile; a malformed entry reads as absent.
pub fn get_admin_info() -> Option<AdminInfo> {
    let raw = get_local_storage()?.get_item(&config().admin_storage_key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(admin) => Some(admin),
        Err(e) => {
            log::warn!("discarding stored admin info: {}", e);
            None
        }
    }
}

/// Clear token and profile
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(&config().token_storage_key);
        let _ = storage.remove_item(&config().admin_storage_key);
    }
}
