use dioxus::prelude::*;

use crate::components::page_link;
use crate::core::routes::Page;
use crate::i18n::use_language;
use crate::t;

/// Catch-all for paths that match no page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let lang = use_language();
    tracing::debug!(path = %segments.join("/"), "no page for path");

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            {page_link(Page::Home, lang, "button button--primary", t!("nav-home"))}
        }
    }
}
