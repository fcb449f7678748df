//! Configuration
//!
//! API endpoint resolution and the fixed map settings.

/// Fallback API base URL when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// localStorage key holding a user-chosen API base URL
pub const API_URL_STORAGE_KEY: &str = "sg_dashboard_api_url";

/// Map centre (latitude, longitude): Singapore
pub const MAP_CENTER: (f64, f64) = (1.3521, 103.8198);

/// Zoom for both maps; at 960x640 this spans Tuas to Pulau Tekong
pub const MAP_ZOOM: u32 = 11;

/// Map viewport size in CSS pixels
pub const MAP_WIDTH: f64 = 960.0;
pub const MAP_HEIGHT: f64 = 640.0;

/// Tile template for the dengue cluster map
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Tile template for the rainfall map
pub const CARTO_LIGHT_TILE_URL: &str = "https://a.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png";

/// Marker icons for rainfall stations
pub const RAINY_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/414/414927.png";
pub const SUNNY_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/869/869869.png";

/// Default base URL, honouring a build-time override
pub fn default_api_base() -> String {
    normalize_base(option_env!("SG_DASHBOARD_API_URL").unwrap_or(DEFAULT_API_BASE))
}

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten());

    match stored {
        Some(url) if !url.trim().is_empty() => normalize_base(&url),
        _ => default_api_base(),
    }
}

/// Persist the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(e) = storage.set_item(API_URL_STORAGE_KEY, &normalize_base(url)) {
                log::warn!("Could not persist API URL: {:?}", e);
            }
        }
    }
}

/// Forget the stored API base URL
pub fn clear_api_base() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(API_URL_STORAGE_KEY);
        }
    }
}

/// Trim whitespace and trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", normalize_base(base), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_base("  http://api.local//  "), "http://api.local");
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        assert_eq!(
            endpoint("http://localhost:5000/", "/gemini-response"),
            "http://localhost:5000/gemini-response"
        );
        assert_eq!(
            endpoint("http://localhost:5000", "denguecluster"),
            "http://localhost:5000/denguecluster"
        );
    }

    #[test]
    fn test_default_base_has_no_trailing_slash() {
        assert!(!default_api_base().ends_with('/'));
    }
}
