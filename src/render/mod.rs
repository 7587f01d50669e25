//! Server-side HTML rendering.
//!
//! Every page is one [`PageContext`] pushed through [`layout::document`],
//! which wraps a page body from [`pages`] in the shared chrome: metadata,
//! navigation menu, and loading overlay. All text taken from catalogs or
//! request paths goes through [`escape`].

mod layout;
mod pages;

use boda_core::locale::Locale;
use boda_core::messages::Translator;
use boda_core::route::Route;
use boda_ui::{OverlayStyle, PageLoader, UiState, UiStore};

pub const STYLESHEET: &str = include_str!("site.css");

/// Everything a page needs to render itself.
pub struct PageContext<'a> {
    pub t: Translator<'a>,
    pub site_name: &'a str,
    /// Request path, used for the language switch and active links.
    pub pathname: &'a str,
    /// `None` for the not-found page.
    pub route: Option<Route>,
    pub ui: UiState,
    pub loader: Option<OverlayStyle>,
}

impl<'a> PageContext<'a> {
    /// Fresh per-request UI state: navigation as requested, overlay mounted.
    pub fn new(
        t: Translator<'a>,
        site_name: &'a str,
        pathname: &'a str,
        route: Option<Route>,
        menu_open: bool,
    ) -> Self {
        let store = UiStore::new();
        if menu_open {
            store.open_navigation();
        }
        let loader = PageLoader::mount(&store, pathname);
        Self {
            t,
            site_name,
            pathname,
            route,
            ui: store.snapshot(),
            loader: loader.style(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.t.locale()
    }
}

/// Render the page for `ctx.route`, or the not-found page.
pub fn render(ctx: &PageContext<'_>) -> String {
    let (title, description, body) = match ctx.route {
        Some(Route::Home) => (
            ctx.site_name.to_string(),
            ctx.t.t("site.description").to_string(),
            pages::home(ctx),
        ),
        Some(route) => {
            let meta = ctx.t.page_metadata(route.namespace());
            let body = pages::content(&meta.title, &meta.description);
            (format!("{} | {}", meta.title, ctx.site_name), meta.description, body)
        }
        None => (
            format!("404 | {}", ctx.site_name),
            ctx.t.t("site.description").to_string(),
            pages::not_found(ctx),
        ),
    };
    layout::document(ctx, &title, &description, &body)
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
