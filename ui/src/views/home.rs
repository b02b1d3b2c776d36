use dioxus::prelude::*;

use crate::components::{open_general_order, page_link};
use crate::core::catalog::{catalog, Category, Product};
use crate::core::format::format_price_short;
use crate::core::language::Language;
use crate::core::routes::Page;
use crate::i18n::use_language;
use crate::t;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

#[component]
pub fn Home() -> Element {
    let lang = use_language();

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        section { class: "page page-home",
            div { class: "hero",
                span { class: "hero__badge", {t!("hero-badge")} }
                h1 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__subtitle", {t!("hero-subtitle")} }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| open_general_order(lang),
                    {t!("hero-cta")}
                }
            }

            section { id: "menu", class: "menu",
                h2 { {t!("menu-title")} }
                p { class: "menu__subtitle", {t!("menu-subtitle")} }
                {render_menu_group(Category::Savory, t!("menu-savory"), lang)}
                {render_menu_group(Category::Sweet, t!("menu-sweet"), lang)}
            }

            section { class: "features",
                h2 { {t!("features-title")} }
                p { {t!("features-subtitle")} }
                ul { class: "features__grid",
                    li { class: "features__item",
                        h3 { {t!("feature-delivery-title")} }
                        p { {t!("feature-delivery-desc")} }
                    }
                    li { class: "features__item",
                        h3 { {t!("feature-frozen-title")} }
                        p { {t!("feature-frozen-desc")} }
                    }
                    li { class: "features__item",
                        h3 { {t!("feature-made-to-order-title")} }
                        p { {t!("feature-made-to-order-desc")} }
                    }
                    li { class: "features__item",
                        h3 { {t!("feature-packages-title")} }
                        p { {t!("feature-packages-desc")} }
                    }
                }
            }

            section { class: "calc-cta",
                h2 { {t!("calc-cta-title")} }
                p { {t!("calc-cta-subtitle")} }
                {page_link(Page::Calculator, lang, "button button--primary", t!("calc-cta-button"))}
            }

            section { id: "how-it-works", class: "steps",
                h2 { {t!("steps-title")} }
                ol { class: "steps__list",
                    li { class: "steps__item",
                        h3 { {t!("step-choose-title")} }
                        p { {t!("step-choose-desc")} }
                    }
                    li { class: "steps__item",
                        h3 { {t!("step-order-title")} }
                        p { {t!("step-order-desc")} }
                    }
                    li { class: "steps__item",
                        h3 { {t!("step-receive-title")} }
                        p { {t!("step-receive-desc")} }
                    }
                }
            }

            section { class: "closing-cta",
                h2 { {t!("cta-title")} }
                p { {t!("cta-subtitle")} }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| open_general_order(lang),
                    {t!("cta-button")}
                }
            }
        }
    }
}

fn render_menu_group(category: Category, title: String, lang: Language) -> Element {
    rsx! {
        div { class: "menu__group",
            h3 { class: "menu__group-title", "{title}" }
            div { class: "menu__grid",
                for product in catalog().by_category(category) {
                    {render_menu_card(product, lang)}
                }
            }
        }
    }
}

fn render_menu_card(product: &'static Product, lang: Language) -> Element {
    let name = product.name(lang);

    rsx! {
        article { key: "{product.id}", class: "menu-card",
            img { class: "menu-card__image", src: "{product.image}", alt: "{name}", loading: "lazy" }
            div { class: "menu-card__body",
                if product.is_popular {
                    span { class: "menu-card__badge", {t!("menu-popular")} }
                }
                h4 { class: "menu-card__name", "{name}" }
                p { class: "menu-card__description", "{product.description.get(lang)}" }
                p { class: "menu-card__price",
                    strong { "{format_price_short(product.price)}" }
                    " "
                    span { class: "menu-card__unit", {t!("menu-per-hundred")} }
                }
                {page_link(Page::Product(product.id.clone()), lang, "menu-card__more", t!("menu-learn-more"))}
            }
        }
    }
}
