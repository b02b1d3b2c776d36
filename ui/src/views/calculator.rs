use dioxus::prelude::*;

use crate::calculator::PartyCalculator;
use crate::components::page_link;
use crate::core::routes::Page;
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn CalculatorPage() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "page page-calculator",
            {page_link(Page::Home, lang, "page__back", t!("calc-back"))}
            PartyCalculator {}
        }
    }
}
