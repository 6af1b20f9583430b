//! Service Configuration
//!
//! Credentials for the maps SDK and the storage service. A localStorage
//! override wins so a deployed build can be repointed without rebuilding;
//! otherwise the values baked in at compile time apply.

/// Read a localStorage override
fn local_storage_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Google Maps JS SDK key; an empty key still loads the SDK in
/// development-watermark mode
pub fn maps_api_key() -> String {
    local_storage_get("matsuri_maps_api_key")
        .or_else(|| option_env!("MATSURI_MAPS_API_KEY").map(str::to_string))
        .unwrap_or_default()
}

/// Storage service project URL, e.g. `https://xyz.supabase.co`
pub fn storage_url() -> Option<String> {
    local_storage_get("matsuri_storage_url")
        .or_else(|| option_env!("MATSURI_SUPABASE_URL").map(str::to_string))
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
}

/// Storage service publishable key
pub fn storage_api_key() -> Option<String> {
    local_storage_get("matsuri_storage_key")
        .or_else(|| option_env!("MATSURI_SUPABASE_KEY").map(str::to_string))
        .filter(|key| !key.is_empty())
}
