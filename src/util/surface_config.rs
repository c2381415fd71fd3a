//! Surface configuration from the page URL.
//!
//! A bad query string never blocks the page: the problem is logged and the
//! defaults are used instead.

use canvas::config::SurfaceConfig;

/// Parse `search` (e.g. `?scale=25&grid=10`) into a config, falling back to
/// defaults on any error.
pub fn config_from_search(search: &str) -> SurfaceConfig {
    match SurfaceConfig::from_query(search) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring surface settings in URL: {e}");
            SurfaceConfig::default()
        }
    }
}

/// Config for the current page, read from `window.location.search`.
#[cfg(feature = "csr")]
pub fn page_config() -> SurfaceConfig {
    let Some(window) = web_sys::window() else {
        return SurfaceConfig::default();
    };
    match window.location().search() {
        Ok(search) => config_from_search(&search),
        Err(e) => {
            log::warn!("location.search unavailable: {e:?}");
            SurfaceConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "surface_config_test.rs"]
mod surface_config_test;
