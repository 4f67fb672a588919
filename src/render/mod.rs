//! View layer boundary.
//!
//! Flows never touch a document directly. They build view models
//! ([`ProfileView`], [`InventoryView`], [`ShopView`], [`StatusLine`]) from
//! server payloads and hand them to a [`Renderer`]. In the browser the
//! renderer writes into the DOM; [`HtmlRenderer`] keeps the equivalent HTML
//! fragments in memory, and [`NoopRenderer`] discards everything.

pub mod html;
pub mod views;

pub use html::{escape_html, HtmlDocument, HtmlRenderer};
pub use views::{BuyControl, InventoryEntry, InventoryView, ProfileView, ShopEntry, ShopView};

use crate::error::SdkError;

/// Rendering capability. Implementations must be cheap and infallible.
pub trait Renderer: Send + Sync {
    /// Show the profile box with `view`, hide the login box.
    fn profile(&self, view: &ProfileView);
    /// Hide the profile box, show the login box.
    fn logged_out(&self);
    /// Replace the inventory list and the displayed coin balance.
    fn inventory(&self, view: &InventoryView);
    /// Replace the shop list and its buy bindings.
    fn shop(&self, view: &ShopView);
    /// Overwrite the single status indicator.
    fn status(&self, line: &StatusLine);
    /// Enable or disable every buy control.
    fn purchase_controls(&self, enabled: bool);
}

/// A renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn profile(&self, _view: &ProfileView) {}
    fn logged_out(&self) {}
    fn inventory(&self, _view: &InventoryView) {}
    fn shop(&self, _view: &ShopView) {}
    fn status(&self, _line: &StatusLine) {}
    fn purchase_controls(&self, _enabled: bool) {}
}

// ─── Status line ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Neutral,
    Error,
}

impl StatusKind {
    /// CSS colour of the status text.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Neutral => "rgba(255,255,255,0.85)",
            Self::Error => "#ff7676",
        }
    }
}

/// The latest user-facing message. Each new line replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusLine {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Neutral,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    /// Empty neutral line.
    pub fn clear() -> Self {
        Self::default()
    }

    /// Error line with the error's message, or `fallback` when it has none.
    ///
    /// Undecodable responses always show `fallback`; decoder output is only
    /// logged.
    pub fn error_or(err: &SdkError, fallback: &str) -> Self {
        let message = match err {
            SdkError::Serde(e) => {
                tracing::debug!(error = %e, "response did not decode");
                String::new()
            }
            _ => err.message(),
        };
        if message.is_empty() {
            Self::error(fallback)
        } else {
            Self::error(message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_or_prefers_message() {
        let err = SdkError::Other("Not enough coins".into());
        let line = StatusLine::error_or(&err, "Purchase failed.");
        assert_eq!(line.text, "Not enough coins");
        assert!(line.is_error());

        let err = SdkError::Other(String::new());
        assert_eq!(StatusLine::error_or(&err, "Purchase failed.").text, "Purchase failed.");
    }

    #[test]
    fn test_error_or_hides_decoder_text() {
        let err = SdkError::from(serde_json::from_str::<u8>("\"x\"").unwrap_err());
        let line = StatusLine::error_or(&err, "Failed to load shop.");
        assert_eq!(line.text, "Failed to load shop.");
        assert!(line.is_error());
    }

    #[test]
    fn test_clear_is_neutral_and_empty() {
        let line = StatusLine::clear();
        assert!(line.text.is_empty());
        assert!(!line.is_error());
        assert_eq!(line.kind.color(), "rgba(255,255,255,0.85)");
    }
}
