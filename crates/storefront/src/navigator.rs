//! Host navigation: opening a deep link outside the storefront.
//!
//! Fire-and-forget. The storefront never learns what happens after the link
//! opens, and a failure is reported once, never retried.

use std::io::Write;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The host refused to open a new browsing context (e.g. pop-up blocker).
    #[error("navigation blocked: {0}")]
    Blocked(String),

    /// There is nowhere to open the link.
    #[error("navigation unavailable: {0}")]
    Unavailable(String),
}

pub trait Navigator {
    /// Open `url` in a new browsing context.
    fn open(&mut self, url: &str) -> Result<(), NavigationError>;
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn open(&mut self, url: &str) -> Result<(), NavigationError> {
        (**self).open(url)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn open(&mut self, url: &str) -> Result<(), NavigationError> {
        (**self).open(url)
    }
}

/// Remembers every URL it was asked to open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    opened: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    pub fn last(&self) -> Option<&str> {
        self.opened.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn open(&mut self, url: &str) -> Result<(), NavigationError> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// Writes each URL on its own line, for terminal hosts.
#[derive(Debug)]
pub struct WriteNavigator<W> {
    out: W,
}

impl<W: Write> WriteNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for WriteNavigator<W> {
    fn open(&mut self, url: &str) -> Result<(), NavigationError> {
        writeln!(self.out, "{url}")
            .and_then(|()| self.out.flush())
            .map_err(|e| NavigationError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_order() {
        let mut nav = RecordingNavigator::new();
        nav.open("https://wa.me/1?text=a").unwrap();
        nav.open("https://wa.me/1?text=b").unwrap();
        assert_eq!(nav.opened(), ["https://wa.me/1?text=a", "https://wa.me/1?text=b"]);
        assert_eq!(nav.last(), Some("https://wa.me/1?text=b"));
    }

    #[test]
    fn write_navigator_emits_lines() {
        let mut nav = WriteNavigator::new(Vec::new());
        nav.open("https://wa.me/1?text=hi").unwrap();
        let out = String::from_utf8(nav.into_inner()).unwrap();
        assert_eq!(out, "https://wa.me/1?text=hi\n");
    }

    #[test]
    fn mutable_reference_forwards() {
        fn open_via<N: Navigator>(mut nav: N) {
            nav.open("x").unwrap();
        }

        let mut nav = RecordingNavigator::new();
        open_via(&mut nav);
        assert_eq!(nav.opened(), ["x"]);
    }
}
