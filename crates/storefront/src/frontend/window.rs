//! Browser navigation.

use crate::navigator::{NavigationError, Navigator};

/// Opens order links in a new tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn open(&mut self, url: &str) -> Result<(), NavigationError> {
        let window = web_sys::window()
            .ok_or_else(|| NavigationError::Unavailable("no window".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // `window.open` returns null when a pop-up blocker steps in.
            Ok(None) => Err(NavigationError::Blocked("new tab was not opened".to_string())),
            Err(e) => Err(NavigationError::Unavailable(format!("{e:?}"))),
        }
    }
}
