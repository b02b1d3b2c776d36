use dioxus::prelude::*;

use crate::components::page_link;
use crate::core::routes::Page;
use crate::core::site;
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn About() -> Element {
    let lang = use_language();
    let areas = site().delivery_areas.join(", ");

    rsx! {
        section { class: "page page-about",
            h1 { {t!("about-title")} }
            p { class: "page-about__intro", {t!("about-intro")} }

            div { class: "page-about__block",
                h2 { {t!("about-story-title")} }
                p { {t!("about-story-body")} }
            }
            div { class: "page-about__block",
                h2 { {t!("about-quality-title")} }
                p { {t!("about-quality-body")} }
            }
            div { class: "page-about__block",
                h2 { {t!("about-delivery-title")} }
                p { {t!("about-delivery-body", areas = areas)} }
            }

            {page_link(Page::Calculator, lang, "button button--primary", t!("about-cta"))}
        }
    }
}
