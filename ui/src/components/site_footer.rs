use dioxus::prelude::*;

use crate::core::routes::Page;
use crate::core::site;
use crate::i18n::use_language;
use crate::t;

use super::site_header::page_link;

#[component]
pub fn SiteFooter() -> Element {
    let lang = use_language();
    let config = site();

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__grid",
                div { class: "site-footer__col",
                    strong { class: "site-footer__brand", "{config.brand}" }
                    p { {t!("footer-slogan")} }
                    p { class: "site-footer__muted", {t!("footer-made-in")} }
                }

                div { class: "site-footer__col",
                    h3 { {t!("footer-links-title")} }
                    ul {
                        li { {page_link(Page::Home, lang, "site-footer__link", t!("nav-home"))} }
                        li { a { class: "site-footer__link", href: "/#menu", {t!("nav-menu")} } }
                        li { {page_link(Page::Calculator, lang, "site-footer__link", t!("nav-calculator"))} }
                        li { {page_link(Page::About, lang, "site-footer__link", t!("nav-about"))} }
                    }
                }

                div { class: "site-footer__col",
                    h3 { {t!("footer-contact-title")} }
                    p { class: "site-footer__label", {t!("footer-phone-label")} }
                    for phone in config.phone_numbers.iter() {
                        p { key: "{phone}", "{phone}" }
                    }
                    p { class: "site-footer__label", {t!("footer-location-label")} }
                    p { "{config.location}" }
                }

                div { class: "site-footer__col",
                    h3 { {t!("footer-hours-title")} }
                    p { {t!("footer-open-days")} }
                    p { {t!("footer-closed-days")} }
                    h3 { {t!("footer-delivery-title")} }
                    p { {config.delivery_areas.join(", ")} }
                }
            }
            p { class: "site-footer__rights",
                "© {config.brand}. "
                {t!("footer-rights")}
            }
        }
    }
}
