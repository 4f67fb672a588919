//! In-memory HTML renderer.
//!
//! Produces the same fragments a browser page would assign to `innerHTML`
//! (achievements, inventory and shop lists) plus the scalar text fields and
//! visibility flags, and keeps the latest state in an [`HtmlDocument`].

use std::fmt::Write as _;
use std::sync::{Mutex, MutexGuard};

use super::views::{BuyControl, InventoryView, ProfileView, ShopView};
use super::{Renderer, StatusLine};

const PLACEHOLDER_STYLE: &str = "opacity:0.75";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Snapshot of everything the renderer has drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    pub profile_visible: bool,
    pub login_visible: bool,
    pub username: String,
    pub xp: String,
    pub level: String,
    pub coins: String,
    pub achievements_html: String,
    pub inventory_html: String,
    pub shop_html: String,
    /// Item ids with a live buy binding in the current shop list.
    pub buy_bindings: Vec<String>,
    pub status_text: String,
    pub status_color: &'static str,
    pub purchase_controls_enabled: bool,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self {
            profile_visible: false,
            login_visible: true,
            username: String::new(),
            xp: String::new(),
            level: String::new(),
            coins: String::new(),
            achievements_html: String::new(),
            inventory_html: String::new(),
            shop_html: String::new(),
            buy_bindings: Vec::new(),
            status_text: String::new(),
            status_color: StatusLine::default().kind.color(),
            purchase_controls_enabled: true,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    doc: HtmlDocument,
    /// Last shop view, re-drawn when purchase controls toggle.
    shop: Option<ShopView>,
}

#[derive(Debug, Default)]
pub struct HtmlRenderer {
    state: Mutex<State>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> HtmlDocument {
        self.lock().doc.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Renderer for HtmlRenderer {
    fn profile(&self, view: &ProfileView) {
        let mut state = self.lock();
        let doc = &mut state.doc;
        doc.username = view.username.clone();
        doc.xp = view.xp.to_string();
        doc.level = view.level.to_string();
        doc.coins = view.coins.to_string();
        doc.profile_visible = true;
        doc.login_visible = false;
        doc.achievements_html = if view.achievements.is_empty() {
            placeholder_item(ProfileView::NO_ACHIEVEMENTS)
        } else {
            view.achievements
                .iter()
                .map(|id| format!("<li>{}</li>", escape_html(id)))
                .collect()
        };
    }

    fn logged_out(&self) {
        let mut state = self.lock();
        state.doc.profile_visible = false;
        state.doc.login_visible = true;
    }

    fn inventory(&self, view: &InventoryView) {
        let mut state = self.lock();
        let doc = &mut state.doc;
        doc.coins = view.coins.to_string();
        doc.inventory_html = if view.entries.is_empty() {
            placeholder_item(InventoryView::EMPTY)
        } else {
            view.entries
                .iter()
                .map(|e| {
                    format!(
                        "<li><strong>{}</strong> \u{d7} {}</li>",
                        escape_html(e.item_id.as_str()),
                        e.count
                    )
                })
                .collect()
        };
    }

    fn shop(&self, view: &ShopView) {
        let mut state = self.lock();
        let enabled = state.doc.purchase_controls_enabled;
        state.doc.shop_html = shop_html(view, enabled);
        state.doc.buy_bindings = view
            .bindings()
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        state.shop = Some(view.clone());
    }

    fn status(&self, line: &StatusLine) {
        let mut state = self.lock();
        state.doc.status_text = line.text.clone();
        state.doc.status_color = line.kind.color();
    }

    fn purchase_controls(&self, enabled: bool) {
        let mut state = self.lock();
        state.doc.purchase_controls_enabled = enabled;
        if let Some(view) = state.shop.clone() {
            state.doc.shop_html = shop_html(&view, enabled);
        }
    }
}

fn placeholder_item(text: &str) -> String {
    format!(
        "<li style=\"{}\">{}</li>",
        PLACEHOLDER_STYLE,
        escape_html(text)
    )
}

fn shop_html(view: &ShopView, controls_enabled: bool) -> String {
    let entries = match view {
        ShopView::Empty { placeholder } => return placeholder_item(placeholder),
        ShopView::Listing(entries) => entries,
    };

    let mut html = String::new();
    for entry in entries {
        let disabled = entry.control == BuyControl::Soon || !controls_enabled;
        let id = escape_html(entry.item_id.as_str());
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "<li style=\"display:flex;justify-content:space-between;gap:12px;align-items:center\">\
             <span><strong>{label}</strong><br><span style=\"{dim}\">{id}</span></span>\
             <span><span style=\"margin-right:10px\">{price} coins</span>\
             <button class=\"cta-button\" data-buy=\"{id}\"{disabled}>{text}</button></span></li>",
            label = escape_html(&entry.label),
            dim = PLACEHOLDER_STYLE,
            id = id,
            price = entry.price,
            disabled = if disabled { " disabled" } else { "" },
            text = entry.control.label(),
        );
    }
    html
}
