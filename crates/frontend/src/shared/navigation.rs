use contracts::shared::navigation::NavigationHost;
use web_sys::window;

/// Navigation through the browser location and history.
///
/// `navigate_to` performs a full page load; the static host answers every
/// route with the application bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigation;

impl BrowserNavigation {
    /// Search part of the current location, e.g. `?name=Huntsman`
    pub fn current_search(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
}

impl NavigationHost for BrowserNavigation {
    fn navigate_to(&self, path: &str) {
        log::debug!("navigate to {}", path);
        if let Some(w) = window() {
            if let Err(e) = w.location().set_href(path) {
                log::error!("navigation to {} failed: {:?}", path, e);
            }
        }
    }

    fn go_back(&self) {
        if let Some(w) = window() {
            if let Err(e) = w.history().and_then(|history| history.back()) {
                log::error!("history back failed: {:?}", e);
            }
        }
    }
}
