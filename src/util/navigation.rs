//! Imperative navigation used by session side effects.
//!
//! Logout has to leave the current page even when it is triggered outside a
//! router-aware component, so it goes through this hook rather than
//! `use_navigate`.

/// Sends the browser to a new path.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigates by assigning `window.location`, which reloads the app at `path`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("navigation to {path} ignored outside the browser");
        }
    }
}
