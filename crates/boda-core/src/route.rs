//! Site routes and locale-prefixed path building.
//!
//! Path helpers operate on plain strings so that a route the site does not
//! know about still round-trips: `strip_locale(build_locale_path(l, r), l)`
//! gives `r` back for any non-home `r`.

use crate::locale::Locale;

/// Path of the home route.
pub const HOME: &str = "/";

/// A page of the site, independent of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Media,
    Rsvp,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Media, Route::Rsvp];

    /// Locale-independent path, e.g. `/media`.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => HOME,
            Self::Media => "/media",
            Self::Rsvp => "/rsvp",
        }
    }

    /// Translation namespace holding this page's `title` and `description`.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Media => "media",
            Self::Rsvp => "rsvp",
        }
    }

    /// Translation key of this route's navigation label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Self::Home => "navigation.home",
            Self::Media => "navigation.media",
            Self::Rsvp => "navigation.rsvp",
        }
    }
}

/// Prefix `route` with `/<locale>`.
///
/// The home route maps to `/<locale>` with no trailing slash.
pub fn build_locale_path(locale: Locale, route: &str) -> String {
    if route == HOME {
        return format!("/{locale}");
    }
    format!("/{locale}{route}")
}

/// Remove a leading `/<locale>` prefix from `path`.
///
/// Only the first occurrence goes; later ones are part of the route. The
/// prefix is matched as raw text so that `build_locale_path` of any route
/// string strips back to that string. An empty result is the home route.
pub fn strip_locale(path: &str, locale: Locale) -> String {
    let prefix = format!("/{locale}");
    let rest = path.strip_prefix(prefix.as_str()).unwrap_or(path);
    if rest.is_empty() {
        HOME.to_string()
    } else {
        rest.to_string()
    }
}

/// Whether `pathname` is the landing page, with or without a locale prefix.
pub fn is_home_page(pathname: &str) -> bool {
    let normalized = pathname.strip_suffix('/').unwrap_or(pathname);
    if normalized.is_empty() || normalized == HOME {
        return true;
    }
    let mut segments = pathname.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(first), None) => first.parse::<Locale>().is_ok(),
        _ => false,
    }
}

/// Whether the navigation link for `route` should be highlighted on `pathname`.
///
/// A trailing slash is ignored, so `/eus/` highlights home like `/eus`.
pub fn is_active_route(pathname: &str, locale: Locale, route: Route) -> bool {
    let pathname = match pathname.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => pathname,
    };
    pathname == build_locale_path(locale, route.path())
}
