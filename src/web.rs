//! Navigator backed by the browser's `window.location` and `window.history`.

use crate::compat::String;
use crate::location::Location;
use crate::navigator::Navigator;
use wasm_bindgen::JsValue;

/// The current tab's address bar.
///
/// `push` goes through `history.pushState`, so the page is never reloaded.
#[derive(Debug, Clone)]
pub struct BrowserNavigator {
    window: web_sys::Window,
}

impl BrowserNavigator {
    /// `None` when there is no `window` (workers, non-browser hosts).
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn read(&self) -> core::result::Result<Location, JsValue> {
        let location = self.window.location();
        let pathname = location.pathname()?;
        let search = location.search()?;
        let hash = location.hash()?;

        Ok(Location::from_browser_parts(&pathname, &search, &hash))
    }
}

impl Navigator for BrowserNavigator {
    fn current(&self) -> Location {
        self.read().unwrap_or_else(|err| {
            tracing::warn!(?err, "failed to read window.location");
            Location::default()
        })
    }

    fn push(&mut self, next: Location) {
        let href: String = next.href();
        let result = self
            .window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&href)));

        match result {
            Ok(()) => tracing::debug!(%href, "history.pushState"),
            Err(err) => tracing::warn!(?err, %href, "history.pushState failed"),
        }
    }
}
