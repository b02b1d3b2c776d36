use dioxus::prelude::*;

use crate::components::{open_general_order, page_link};
use crate::core::catalog::{catalog, Category, Product, ProductDetails};
use crate::core::format::{format_price, format_price_short};
use crate::core::language::Language;
use crate::core::routes::Page;
use crate::i18n::use_language;
use crate::t;

const PRODUCT_CSS: Asset = asset!("/assets/styling/product.css");

#[component]
pub fn ProductPage(id: String) -> Element {
    let lang = use_language();

    let body = match catalog().find(&id) {
        Some(product) => render_product(product, lang),
        None => {
            tracing::info!(id = %id, "unknown product requested");
            render_missing_product()
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PRODUCT_CSS }
        {body}
    }
}

fn render_missing_product() -> Element {
    rsx! {
        section { class: "page page-product page-product--missing",
            h1 { {t!("product-not-found-title")} }
            p { {t!("product-not-found-body")} }
            a { class: "button button--primary", href: "/#menu", {t!("product-not-found-action")} }
        }
    }
}

fn render_product(product: &'static Product, lang: Language) -> Element {
    let name = product.name(lang);
    let category = match product.category {
        Category::Savory => t!("menu-savory"),
        Category::Sweet => t!("menu-sweet"),
    };

    rsx! {
        section { class: "page page-product",
            a { class: "page__back", href: "/#menu", {t!("product-back")} }

            div { class: "product__top",
                div { class: "product__media",
                    img { class: "product__image", src: "{product.image}", alt: "{name}" }
                    div { class: "product__tags",
                        if product.is_popular {
                            span { class: "product__tag product__tag--popular", {t!("product-popular")} }
                        }
                        span { class: "product__tag", "{category}" }
                    }
                }

                div { class: "product__summary",
                    h1 { "{name}" }
                    p { class: "product__description", "{product.description.get(lang)}" }
                    p { class: "product__price",
                        strong { "{format_price_short(product.price)}" }
                        " "
                        span { {t!("menu-per-hundred")} }
                    }

                    if !product.pricing_tiers.is_empty() {
                        h2 { {t!("product-tiers")} }
                        ul { class: "product__tiers",
                            for tier in product.tiers_ascending() {
                                li { key: "{tier.quantity}", class: "product__tier",
                                    span { {t!("product-tier-units", size = tier.quantity.to_string())} }
                                    strong { "{format_price(tier.price)}" }
                                }
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "button button--primary product__order",
                        onclick: move |_| open_general_order(lang),
                        {t!("product-order")}
                    }
                    {page_link(Page::Calculator, lang, "product__calculator-link", t!("nav-calculator"))}
                }
            }

            if let Some(details) = product.details.as_ref() {
                {render_details(details, lang)}
            }
        }
    }
}

fn render_details(details: &'static ProductDetails, lang: Language) -> Element {
    let nutrition = &details.nutrition;

    rsx! {
        div { class: "product__details",
            div { class: "product__panel",
                h2 { {t!("product-ingredients")} }
                ul { class: "product__ingredients",
                    for ingredient in details.ingredients.get(lang).iter() {
                        li { key: "{ingredient}", "{ingredient}" }
                    }
                }
            }

            div { class: "product__panel",
                h2 { {t!("product-nutrition")} }
                p { class: "product__serving",
                    {t!("product-serving", serving = nutrition.serving_size.get(lang).clone())}
                }
                dl { class: "product__nutrition",
                    dt { {t!("product-calories")} }
                    dd { "{nutrition.calories}" }
                    dt { {t!("product-protein")} }
                    dd { "{nutrition.protein}" }
                    dt { {t!("product-carbs")} }
                    dd { "{nutrition.carbs}" }
                    dt { {t!("product-fats")} }
                    dd { "{nutrition.fats}" }
                }
            }

            if let Some(preparation) = details.preparation.as_ref() {
                div { class: "product__panel product__panel--wide",
                    h2 { {t!("product-preparation")} }
                    ol { class: "product__steps",
                        for (index, step) in preparation.steps.iter().enumerate() {
                            li { key: "{index}", "{step.get(lang)}" }
                        }
                    }
                    p { class: "product__tip", "{preparation.tips.get(lang)}" }
                }
            }
        }
    }
}
