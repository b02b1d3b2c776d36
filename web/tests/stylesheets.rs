#![cfg(test)]
//! Selector lint for the storefront stylesheets.
//!
//! Components in `ui` rely on these class names; a rename in CSS without the
//! matching markup change only shows up at runtime. Substring checks are
//! enough as an early warning. When a selector is intentionally renamed,
//! update the component markup and the list here together.

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));
const HEADER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/header.css"
));
const HOME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/home.css"
));
const CALCULATOR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/calculator.css"
));
const PRODUCT_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/product.css"
));

const REQUIRED: &[(&str, &str, &[&str])] = &[
    (
        "main.css",
        MAIN_CSS,
        &[
            ":root",
            "--brand-yellow",
            "--brand-sea",
            ".page {",
            ".button {",
            ".button--primary",
            ".visually-hidden",
            ".site-footer",
        ],
    ),
    (
        "header.css",
        HEADER_CSS,
        &[".site-header {", ".site-header__link", ".site-header__locale", ".site-header__order"],
    ),
    (
        "home.css",
        HOME_CSS,
        &[".hero", ".menu__grid", ".menu-card", ".menu-card__more", ".steps__item"],
    ),
    (
        "calculator.css",
        CALCULATOR_CSS,
        &[
            ".calculator__layout",
            ".calc-switch--on",
            ".calc-product--selected",
            ".calculator__notice",
            ".calculator__send",
            ".calculator__reset",
            "@media (max-width: 860px)",
        ],
    ),
    (
        "product.css",
        PRODUCT_CSS,
        &[".product__tiers", ".product__nutrition", ".page-product--missing"],
    ),
];

#[test]
fn stylesheets_contain_required_selectors() {
    let mut missing = Vec::new();
    for (name, css, selectors) in REQUIRED {
        for selector in *selectors {
            if !css.contains(selector) {
                missing.push(format!("{name}: {selector}"));
            }
        }
    }
    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn stylesheets_are_not_trivially_empty() {
    for (name, css, _) in REQUIRED {
        let non_ws = css.chars().filter(|c| !c.is_whitespace()).count();
        assert!(non_ws > 400, "{name} looks truncated ({non_ws} non-whitespace chars)");
    }
}
