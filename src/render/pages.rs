//! Page bodies.

use std::fmt::Write;

use boda_core::locale::Locale;
use boda_core::phrases;
use boda_core::route::{build_locale_path, HOME};

use super::{escape, PageContext};

/// Landing page: names, marquee, language links.
pub fn home(ctx: &PageContext<'_>) -> String {
    let t = ctx.t;
    let mut html = String::from("<section class=\"hero\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"hero__names\">{}</h1>\n<h2 class=\"hero__title\">{}</h2>",
        escape(t.t("home.couple")),
        escape(t.t("home.title")),
    );
    html.push_str(&marquee());
    let _ = writeln!(
        html,
        "<p class=\"hero__status\">{}</p>\n<p class=\"hero__notice\">{}</p>",
        escape(t.t("home.status")),
        escape(t.t("home.notice")),
    );

    // Language picker, Euskera first.
    html.push_str("<ul class=\"language-select\">\n");
    for locale in [Locale::Eus, Locale::Es] {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\" hreflang=\"{locale}\">{}</a></li>",
            build_locale_path(locale, HOME),
            locale.label(),
        );
    }
    html.push_str("</ul>\n");

    let _ = writeln!(
        html,
        "<div class=\"scroll-indicator\" aria-hidden=\"true\">{}</div>\n</section>",
        escape(t.t("home.scroll")),
    );
    html
}

/// Scrolling band of phrases, rendered twice for a seamless loop.
fn marquee() -> String {
    let mut html = String::from("<div class=\"marquee\" aria-hidden=\"true\"><div class=\"marquee__track\">");
    for _ in 0..2 {
        html.push_str("<ul class=\"marquee__group\">");
        for phrase in phrases::we_get_married() {
            let _ = write!(html, "<li>{}</li>", escape(phrase));
        }
        html.push_str("</ul>");
    }
    html.push_str("</div></div>\n");
    html
}

/// Placeholder page: a title and a description.
pub fn content(title: &str, description: &str) -> String {
    format!(
        "<section class=\"content\">\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
        escape(title),
        escape(description),
    )
}

pub fn not_found(ctx: &PageContext<'_>) -> String {
    format!(
        "<section class=\"content\">\n<h1>404</h1>\n<p><a href=\"{}\">{}</a></p>\n</section>\n",
        build_locale_path(ctx.locale(), HOME),
        escape(ctx.t.t("navigation.home")),
    )
}
