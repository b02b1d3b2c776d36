use dioxus::logger::tracing;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, SiteFooter, SiteHeader};
use ui::core::storage;
use ui::core::{platform, Language, Page};
use ui::i18n;
use ui::views::{About, CalculatorPage, Home, NotFound, ProductPage};

/// One variant per localized path. `/calculadora` serves both Portuguese and
/// Spanish; the language for it is resolved in `SiteLayout`.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/calculadora", CalculatorPage)]
    Calculadora {},
    #[route("/calculator", CalculatorPage)]
    Calculator {},
    #[route("/produto/:id", ProductPage)]
    Produto { id: String },
    #[route("/product/:id", ProductPage)]
    Product { id: String },
    #[route("/producto/:id", ProductPage)]
    Producto { id: String },
    #[route("/sobre", About)]
    Sobre {},
    #[route("/about")]
    About {},
    #[route("/acerca-de", About)]
    AcercaDe {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn localized(page: &Page, lang: Language) -> Self {
        let path = page.path(lang);
        path.parse().unwrap_or_else(|_| {
            tracing::warn!(%path, "localized path did not match a route");
            Route::Home {}
        })
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_link(target: Page, lang: Language, class: &'static str, label: String) -> Element {
    rsx!(Link {
        class,
        to: Route::localized(&target, lang),
        "{label}"
    })
}

fn switch_language(lang: Language) {
    let current = router().current::<Route>().to_string();
    match Page::from_path(&current) {
        Some(page) => {
            if let Some(err) = navigator().replace(Route::localized(&page, lang)) {
                tracing::warn!(?err, "language switch navigation failed");
            }
        }
        None => tracing::debug!(path = %current, "no localized twin for path"),
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let initial = use_hook(|| {
        let path = platform::current_path().unwrap_or_else(|| "/".to_string());
        let lang = i18n::initial_language(&path, &*storage::default_store());
        i18n::init(lang);
        platform::set_document_language(lang.code());
        register_nav(NavBuilder {
            link: nav_link,
            switch_language,
        });
        lang
    });
    use_context_provider(|| Signal::new(initial));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared chrome around every page. Keeps the language signal in step with
/// the path when the visitor follows a link or uses back/forward.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let mut lang = use_context::<Signal<Language>>();
    let path = route.to_string();

    use_effect(use_reactive((&path,), move |(path,)| {
        let store = storage::default_store();
        let detected = i18n::language_for_location(&path, &*store);
        if detected != *lang.peek() {
            lang.set(detected);
            i18n::apply_language(detected, &*store);
        }
    }));

    rsx! {
        SiteHeader {}
        main { class: "site-main",
            Outlet::<Route> {}
        }
        SiteFooter {}
    }
}
