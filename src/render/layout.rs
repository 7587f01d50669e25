//! Shared page chrome: document head, navigation menu, loading overlay.

use std::fmt::Write;

use boda_core::locale::Locale;
use boda_core::route::{build_locale_path, is_active_route, strip_locale, Route, HOME};
use boda_ui::OverlayStyle;

use super::{escape, PageContext};

pub fn document(ctx: &PageContext<'_>, title: &str, description: &str, body: &str) -> String {
    let locale = ctx.locale();
    let mut html = String::with_capacity(4096 + body.len());
    let _ = write!(
        html,
        "<!DOCTYPE html>\n\
         <html lang=\"{locale}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n\
         <link rel=\"stylesheet\" href=\"/assets/site.css\">\n",
        title = escape(title),
        description = escape(description),
    );
    for alt in Locale::ALL {
        let _ = writeln!(
            html,
            "<link rel=\"alternate\" hreflang=\"{alt}\" href=\"{}\">",
            escape(&switch_href(ctx, alt))
        );
    }
    html.push_str("</head>\n<body>\n");
    if let Some(style) = ctx.loader {
        html.push_str(&loader_overlay(ctx, style));
    }
    html.push_str(&hamburger(ctx));
    if ctx.ui.navigation_open {
        html.push_str(&navigation(ctx));
    }
    html.push_str("<main class=\"page\">\n");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Same page in `target`'s language.
///
/// A path that does not start with a locale segment has no counterpart in
/// another language, so it switches to that language's home.
fn switch_href(ctx: &PageContext<'_>, target: Locale) -> String {
    let first = ctx.pathname.split('/').find(|s| !s.is_empty());
    if first.and_then(|s| s.parse::<Locale>().ok()).is_none() {
        return build_locale_path(target, HOME);
    }
    let rest = strip_locale(ctx.pathname, ctx.locale());
    build_locale_path(target, &rest)
}

/// Menu button. Without script it is a link that flips `?menu=open`.
fn hamburger(ctx: &PageContext<'_>) -> String {
    let open = ctx.ui.navigation_open;
    let (href, label) = if open {
        (ctx.pathname.to_string(), ctx.t.t("navigation.close"))
    } else {
        (format!("{}?menu=open", ctx.pathname), ctx.t.t("navigation.open"))
    };
    format!(
        "<a class=\"hamburger{}\" href=\"{}\" aria-label=\"{}\" aria-expanded=\"{open}\">\
         <span></span><span></span><span></span></a>\n",
        if open { " hamburger--open" } else { "" },
        escape(&href),
        escape(label),
    )
}

fn navigation(ctx: &PageContext<'_>) -> String {
    let locale = ctx.locale();
    let mut nav = String::from("<nav class=\"nav\">\n<ul class=\"nav__list\">\n");

    let _ = write!(
        nav,
        "<li class=\"nav__item\"><div class=\"language-switch\" aria-label=\"{}\">",
        escape(ctx.t.t("navigation.language"))
    );
    for target in Locale::ALL {
        let class = if target == locale {
            "language-switch__link language-switch__link--active"
        } else {
            "language-switch__link"
        };
        let _ = write!(
            nav,
            "<a class=\"{class}\" href=\"{}\" hreflang=\"{target}\">{}</a>",
            escape(&switch_href(ctx, target)),
            target.as_str().to_uppercase(),
        );
    }
    nav.push_str("</div></li>\n");

    for route in Route::ALL {
        let href = build_locale_path(locale, route.path());
        let active = is_active_route(ctx.pathname, locale, route);
        let _ = writeln!(
            nav,
            "<li class=\"nav__item\"><a class=\"nav__link{}\" href=\"{}\"{}>\
             <span>{}</span><span class=\"nav__chevron\" aria-hidden=\"true\">&rsaquo;</span></a></li>",
            if active { " nav__link--active" } else { "" },
            escape(&href),
            if active { " aria-current=\"page\"" } else { "" },
            escape(ctx.t.t(route.nav_key())),
        );
    }
    nav.push_str("</ul>\n</nav>\n");
    nav
}

fn loader_overlay(ctx: &PageContext<'_>, style: OverlayStyle) -> String {
    let fade = style.fade.as_millis();
    let label = escape(ctx.t.t("loader.label"));
    format!(
        "<div class=\"loader\" aria-hidden=\"true\" aria-busy=\"{busy}\" \
         style=\"opacity:{opacity};pointer-events:{events};transition:opacity {fade}ms ease-out\">\
         <div style=\"transform:scale({scale});opacity:{opacity};\
         transition:transform {fade}ms ease-out, opacity {fade}ms ease-out\">\
         <div class=\"loader__spinner\" role=\"status\" aria-label=\"{label}\">\
         <span class=\"sr-only\">{label}</span></div></div></div>\n",
        busy = style.aria_busy,
        opacity = style.opacity,
        events = if style.pointer_events { "auto" } else { "none" },
        scale = style.scale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use boda_core::messages::Catalog;

    fn ctx<'a>(catalog: &'a Catalog, path: &'a str, open: bool) -> PageContext<'a> {
        let locale = Locale::from_path(path);
        PageContext::new(
            catalog.translator(locale),
            "Iker eta Nerea",
            path,
            Some(Route::Media),
            open,
        )
    }

    #[test]
    fn test_language_switch_keeps_page() {
        let catalog = Catalog::embedded().unwrap();
        let c = ctx(&catalog, "/eus/media", true);
        assert_eq!(switch_href(&c, Locale::Es), "/es/media");
        assert_eq!(switch_href(&c, Locale::Eus), "/eus/media");
    }

    #[test]
    fn test_language_switch_without_locale_goes_home() {
        let catalog = Catalog::embedded().unwrap();
        let c = ctx(&catalog, "/fr/media", false);
        assert_eq!(switch_href(&c, Locale::Es), "/es");
        assert_eq!(switch_href(&c, Locale::Eus), "/eus");
        let c = ctx(&catalog, "/espacio", false);
        assert_eq!(switch_href(&c, Locale::Eus), "/eus");
    }

    #[test]
    fn test_navigation_marks_active_route() {
        let catalog = Catalog::embedded().unwrap();
        let html = navigation(&ctx(&catalog, "/eus/media", true));
        assert!(html.contains(
            "<a class=\"nav__link nav__link--active\" href=\"/eus/media\" aria-current=\"page\">"
        ));
        assert!(html.contains("<a class=\"nav__link\" href=\"/eus\">"));
        assert!(html.contains("Argazkiak"));
        assert!(html.contains(">EUS</a>"));
    }

    #[test]
    fn test_closed_menu_renders_only_hamburger() {
        let catalog = Catalog::embedded().unwrap();
        let c = ctx(&catalog, "/es/media", false);
        let html = document(&c, "t", "d", "");
        assert!(html.contains("href=\"/es/media?menu=open\""));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("<nav"));
    }

    #[test]
    fn test_open_menu_hamburger_closes() {
        let catalog = Catalog::embedded().unwrap();
        let html = hamburger(&ctx(&catalog, "/es/media", true));
        assert!(html.contains("href=\"/es/media\""));
        assert!(html.contains("aria-label=\"Cerrar menú\""));
    }

    #[test]
    fn test_loader_overlay_markup() {
        let catalog = Catalog::embedded().unwrap();
        let c = ctx(&catalog, "/eus/media", false);
        let html = loader_overlay(&c, c.loader.unwrap());
        assert!(html.contains("aria-busy=\"true\""));
        assert!(html.contains("opacity:1;pointer-events:auto;transition:opacity 550ms ease-out"));
        assert!(html.contains("<span class=\"sr-only\">Kargatzen</span>"));
    }
}
