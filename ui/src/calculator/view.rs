use dioxus::prelude::*;

use crate::core::catalog::{catalog, Category, Product};
use crate::core::error::OrderError;
use crate::core::format::{format_price, format_price_short};
use crate::core::language::Language;
use crate::core::message::format_line;
use crate::core::order::prepare_order;
use crate::core::selection::{CalculatorState, Selection};
use crate::core::{platform, site};
use crate::i18n::use_language;
use crate::t;

use super::input::{parse_guest_count, parse_quantity};

const CALCULATOR_CSS: Asset = asset!("/assets/styling/calculator.css");

#[component]
pub fn PartyCalculator() -> Element {
    let lang = use_language();
    let config = site();
    let mut state = use_signal(|| CalculatorState::new(config.default_guest_count));
    let mut notice = use_signal(|| Option::<OrderError>::None);

    let snapshot = state();
    let recommendation = snapshot.recommendation(&config.recommendation);
    let guests = snapshot.guest_count();
    let has_food = snapshot.has_other_food();
    let total = format_price(snapshot.total());
    let lines: Vec<(String, String)> = snapshot
        .line_items()
        .map(|line| (line.product.id.clone(), format_line(&line, lang)))
        .collect();
    let notice_message = notice().as_ref().map(notice_text);

    let send_order = move |_: MouseEvent| {
        let result = prepare_order(&state.read(), site(), lang);
        match result {
            Ok(link) => {
                notice.set(None);
                platform::open_external(&link);
            }
            Err(err) => {
                tracing::info!(%err, "order not sent");
                notice.set(Some(err));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: CALCULATOR_CSS }

        section { id: "calculator", class: "calculator",
            div { class: "calculator__header",
                h2 { {t!("calc-title")} }
                p { {t!("calc-subtitle")} }
            }

            div { class: "calculator__layout",
                div { class: "calculator__inputs",
                    div { class: "calculator__card",
                        label { class: "calc-field", r#for: "guest-count",
                            span { {t!("calc-guests-label")} }
                        }
                        input {
                            id: "guest-count",
                            r#type: "number",
                            min: "1",
                            value: "{guests}",
                            oninput: move |evt: FormEvent| {
                                state.write().set_guest_count(parse_guest_count(&evt.value()));
                            },
                        }

                        button {
                            r#type: "button",
                            role: "switch",
                            class: format!("calc-switch {}", if has_food { "calc-switch--on" } else { "" }),
                            aria_checked: "{has_food}",
                            onclick: move |_| {
                                let mut session = state.write();
                                let next = !session.has_other_food();
                                session.set_has_other_food(next);
                            },
                            span { class: "calc-switch__knob", aria_hidden: "true" }
                            span { class: "calc-switch__label", {t!("calc-has-food-label")} }
                        }
                        p { class: "calc-switch__hint",
                            {t!(
                                "calc-recommendation",
                                savory = recommendation.savory.to_string(),
                                sweet = recommendation.sweet.to_string()
                            )}
                        }

                        div { class: "calculator__recommendation",
                            div { class: "calc-stat",
                                span { class: "calc-stat__value", "{recommendation.savory}" }
                                span { class: "calc-stat__label", {t!("calc-recommended-savory")} }
                            }
                            div { class: "calc-stat",
                                span { class: "calc-stat__value", "{recommendation.sweet}" }
                                span { class: "calc-stat__label", {t!("calc-recommended-sweet")} }
                            }
                        }
                    }

                    div { class: "calculator__card",
                        h3 { {t!("calc-select-products")} }
                        {render_category(Category::Savory, t!("menu-savory"), &snapshot, lang, state, notice)}
                        {render_category(Category::Sweet, t!("menu-sweet"), &snapshot, lang, state, notice)}
                    }
                }

                aside { class: "calculator__summary",
                    h3 { {t!("calc-summary-title")} }
                    if lines.is_empty() {
                        div { class: "calculator__empty",
                            p { class: "calculator__empty-title", {t!("calc-empty-title")} }
                            p { {t!("calc-empty-hint")} }
                        }
                    } else {
                        ul { class: "calculator__lines",
                            for (id, line) in lines {
                                li { key: "{id}", "{line}" }
                            }
                        }
                    }
                    div { class: "calculator__total",
                        span { {t!("calc-total")} }
                        strong { "{total}" }
                    }
                    if let Some(message) = notice_message {
                        p { class: "calculator__notice", role: "alert", "{message}" }
                    }
                    button {
                        r#type: "button",
                        class: "calculator__send",
                        onclick: send_order,
                        {t!("calc-send")}
                    }
                    button {
                        r#type: "button",
                        class: "calculator__reset",
                        onclick: move |_| {
                            state.write().reset();
                            notice.set(None);
                        },
                        {t!("calc-reset")}
                    }
                }
            }
        }
    }
}

fn notice_text(err: &OrderError) -> String {
    match err {
        OrderError::NoProductsSelected => t!("calc-notice-no-products"),
        OrderError::NothingToOrder => t!("calc-notice-nothing-to-order"),
        OrderError::Link(_) => t!("calc-notice-link-failed", phone = site().display_phone().to_string()),
    }
}

fn render_category(
    category: Category,
    title: String,
    snapshot: &CalculatorState,
    lang: Language,
    state: Signal<CalculatorState>,
    notice: Signal<Option<OrderError>>,
) -> Element {
    rsx! {
        div { class: "calc-category",
            h4 { class: "calc-category__title", "{title}" }
            div { class: "calc-category__grid",
                for product in catalog().by_category(category) {
                    {render_product(product, snapshot.selection(&product.id).cloned(), lang, state, notice)}
                }
            }
        }
    }
}

fn render_product(
    product: &'static Product,
    selection: Option<Selection>,
    lang: Language,
    mut state: Signal<CalculatorState>,
    mut notice: Signal<Option<OrderError>>,
) -> Element {
    let selected = selection.is_some();
    let id = product.id.clone();

    rsx! {
        div {
            key: "{product.id}",
            class: format!(
                "calc-product {}",
                if selected { "calc-product--selected" } else { "" }
            ),
            button {
                r#type: "button",
                class: "calc-product__toggle",
                aria_pressed: "{selected}",
                onclick: move |_| {
                    notice.set(None);
                    if let Err(err) = state.write().toggle(catalog(), &id) {
                        tracing::warn!(%err, "could not toggle product");
                    }
                },
                span { class: "calc-product__name", "{product.name(lang)}" }
                span { class: "calc-product__price", "{format_price_short(product.price)}" }
            }
            if let Some(selection) = selection {
                {render_selection_controls(selection, lang, state, notice)}
            }
        }
    }
}

fn render_selection_controls(
    selection: Selection,
    lang: Language,
    mut state: Signal<CalculatorState>,
    mut notice: Signal<Option<OrderError>>,
) -> Element {
    let id = selection.product.id.clone();
    let id_for_tier = id.clone();
    let tiers = selection.product.tiers_ascending();
    let tier_choices = tiers.clone();
    let current_tier = selection.tier.map(|tier| tier.quantity).unwrap_or_default();
    let line = selection
        .line_item()
        .map(|line| (line.packages, line.tier.quantity, format_price(line.price)));
    let name = selection.product.name(lang).to_string();

    rsx! {
        div { class: "calc-product__controls",
            label { class: "calc-field",
                span { {t!("calc-quantity")} }
                input {
                    r#type: "number",
                    min: "0",
                    aria_label: "{name}",
                    value: "{selection.quantity}",
                    oninput: move |evt: FormEvent| {
                        notice.set(None);
                        if let Err(err) = state.write().set_quantity(&id, parse_quantity(&evt.value())) {
                            tracing::warn!(%err, "could not set quantity");
                        }
                    },
                }
            }
            if !tiers.is_empty() {
                label { class: "calc-field",
                    span { {t!("calc-package")} }
                    select {
                        value: "{current_tier}",
                        onchange: move |evt: FormEvent| {
                            let wanted = parse_quantity(&evt.value());
                            let Some(tier) = tier_choices.iter().copied().find(|t| t.quantity == wanted) else {
                                return;
                            };
                            if let Err(err) = state.write().set_tier(&id_for_tier, tier) {
                                tracing::warn!(%err, "could not set package");
                            }
                        },
                        for tier in tiers.iter() {
                            option {
                                key: "{tier.quantity}",
                                value: "{tier.quantity}",
                                selected: tier.quantity == current_tier,
                                {t!(
                                    "calc-package-option",
                                    size = tier.quantity.to_string(),
                                    price = format_price(tier.price)
                                )}
                            }
                        }
                    }
                }
            }
            if let Some((packages, size, price)) = line {
                p { class: "calc-product__line",
                    {t!("calc-packages-needed", count = packages.to_string(), size = size.to_string())}
                    " · {price}"
                }
            }
        }
    }
}
