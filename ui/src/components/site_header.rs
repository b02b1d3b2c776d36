use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::language::Language;
use crate::core::order::general_order_link;
use crate::core::routes::Page;
use crate::core::{platform, site, storage};
use crate::i18n::{self, use_language};
use crate::t;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Platforms register a `NavBuilder` so `ui` can render router links without
/// knowing each platform's `Route` enum.
///
/// `link` must return a `Link` (or an element styled like one) pointing at
/// `target` in `lang`, whose only child is `label`. `switch_language` moves
/// the visitor to the page they are on, in the new language.
///
/// ```ignore
/// register_nav(NavBuilder {
///     link: |target, lang, class, label| rsx!(Link { class, to: Route::localized(&target, lang), "{label}" }),
///     switch_language: |lang| { navigator().replace(...); },
/// });
/// ```
///
/// Without a builder, links fall back to plain anchors and switching
/// language only re-renders.
pub struct NavBuilder {
    pub link: fn(target: Page, lang: Language, class: &'static str, label: String) -> Element,
    pub switch_language: fn(lang: Language),
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to a page in the given language.
pub fn page_link(target: Page, lang: Language, class: &'static str, label: String) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(target, lang, class, label),
        None => rsx! {
            a { class, href: target.path(lang), "{label}" }
        },
    }
}

/// Open the generic WhatsApp greeting for the active language.
pub fn open_general_order(lang: Language) {
    match general_order_link(site(), lang) {
        Ok(link) => platform::open_external(&link),
        Err(err) => tracing::warn!(%err, "could not build general order link"),
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let lang = use_language();
    let lang_ctx: Option<Signal<Language>> = try_use_context::<Signal<Language>>();
    let langs = use_signal(i18n::switchable_languages);
    let show_switcher = langs().len() > 1;

    let on_change = move |evt: FormEvent| {
        let Some(next) = Language::from_tag(&evt.value()) else {
            tracing::warn!(value = %evt.value(), "ignoring unknown language option");
            return;
        };
        if let Some(mut signal) = lang_ctx {
            signal.set(next);
        }
        i18n::apply_language(next, &*storage::default_store());
        if let Some(builder) = NAV_BUILDER.get() {
            (builder.switch_language)(next);
        }
    };

    let brand = &site().brand;

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    {page_link(Page::Home, lang, "site-header__brand-link", brand.clone())}
                    span { class: "site-header__tagline", {t!("tagline")} }
                }

                nav { class: "site-header__links",
                    {page_link(Page::Home, lang, "site-header__link", t!("nav-home"))}
                    a { class: "site-header__link", href: "/#menu", {t!("nav-menu")} }
                    a { class: "site-header__link", href: "/#how-it-works", {t!("nav-how-it-works")} }
                    {page_link(Page::Calculator, lang, "site-header__link", t!("nav-calculator"))}
                    {page_link(Page::About, lang, "site-header__link", t!("nav-about"))}
                }

                div { class: "site-header__actions",
                    if show_switcher {
                        div { class: "site-header__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{lang.code()}",
                                oninput: on_change,
                                for option_lang in langs() {
                                    option {
                                        key: "{option_lang.code()}",
                                        value: "{option_lang.code()}",
                                        selected: option_lang == lang,
                                        {option_lang.code().to_uppercase()}
                                    }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "site-header__order",
                        onclick: move |_| open_general_order(lang),
                        {t!("nav-order")}
                    }
                }
            }
        }
    }
}
