//! End-to-end calculator session against the embedded catalog and site config.

use rust_decimal::Decimal;
use ui::core::error::OrderError;
use ui::core::message::format_order_message;
use ui::core::order::prepare_order;
use ui::core::routes::language_for_path;
use ui::core::storage::{load_language, save_language, MemoryStore};
use ui::core::{catalog, site, CalculatorState, Category, Language, Page};
use ui::i18n::initial_language;

fn decoded_text(link: &str) -> String {
    let url = url::Url::parse(link).expect("link parses");
    assert_eq!(url.host_str(), Some("wa.me"));
    url.query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
        .expect("text parameter present")
}

#[test]
fn party_for_twenty_round_trips_through_whatsapp_link() {
    let config = site();
    let mut state = CalculatorState::new(config.default_guest_count);

    let rec = state.recommendation(&config.recommendation);
    assert_eq!((rec.savory, rec.sweet), (100, 60));

    assert!(state.toggle(catalog(), "coxinha").unwrap());
    assert!(state.toggle(catalog(), "mini-churros").unwrap());
    assert!(state.toggle(catalog(), "brigadeiro").unwrap());
    state.set_quantity("coxinha", 100).unwrap();
    // Churros come in 50 and 100; 60 needs the 100 pack.
    state.set_quantity("mini-churros", 60).unwrap();

    assert_eq!(state.total(), Decimal::from(130));
    assert_eq!(state.line_items_in(Category::Sweet).count(), 1);

    let link = prepare_order(&state, config, Language::En).unwrap();
    assert!(link.starts_with("https://wa.me/12677260916?text="));
    assert!(!link.contains('+'), "spaces must be percent-encoded: {link}");

    let text = decoded_text(&link);
    assert_eq!(
        text,
        format_order_message(20, state.selections(), state.total(), Language::En)
    );
    assert!(text.contains("Coxinha (Chicken): 100 units (1x 100ct) - $60.00"));
    assert!(text.contains("Mini Churros: 60 units (1x 100ct) - $70.00"));
    assert!(!text.contains("Brigadeiro"));
    assert!(text.contains("💰 TOTAL: $130.00"));
}

#[test]
fn snacks_only_party_needs_more() {
    let config = site();
    let mut state = CalculatorState::new(config.default_guest_count);
    state.set_has_other_food(false);
    let rec = state.recommendation(&config.recommendation);
    assert_eq!((rec.savory, rec.sweet), (240, 90));
}

#[test]
fn reset_session_cannot_be_ordered() {
    let mut state = CalculatorState::new(site().default_guest_count);
    state.toggle(catalog(), "kibe").unwrap();
    state.set_quantity("kibe", 30).unwrap();
    state.set_guest_count(55);
    assert!(prepare_order(&state, site(), Language::Pt).is_ok());

    state.reset();
    assert_eq!(state.guest_count(), 20);
    assert!(state.has_other_food());
    assert_eq!(
        prepare_order(&state, site(), Language::Pt),
        Err(OrderError::NoProductsSelected)
    );
}

#[test]
fn language_switch_keeps_the_visitor_on_the_same_page() {
    let store = MemoryStore::default();
    let page = Page::from_path("/sobre").unwrap();
    assert_eq!(language_for_path("/sobre", load_language(&store), None), Language::Pt);

    save_language(&store, Language::Es);
    let target = page.path(Language::Es);
    assert_eq!(target, "/acerca-de");
    assert_eq!(
        language_for_path(&target, load_language(&store), Some("pt-BR")),
        Language::Es
    );

    // The calculator path is shared by pt and es; the stored choice decides.
    let calc = Page::Calculator.path(Language::Es);
    assert_eq!(
        language_for_path(&calc, load_language(&store), Some("pt-BR")),
        Language::Es
    );
}

#[test]
fn deep_link_language_survives_the_home_link() {
    let store = MemoryStore::default();
    assert_eq!(initial_language("/about", &store), Language::En);
    assert_eq!(load_language(&store), Some(Language::En));

    // Home is shared by every language; the stored landing choice decides.
    assert_eq!(
        language_for_path("/", load_language(&store), Some("pt-BR")),
        Language::En
    );
}

#[test]
fn returning_visitor_keeps_their_stored_language() {
    let store = MemoryStore::with_value("es");
    assert_eq!(initial_language("/", &store), Language::Es);
    assert_eq!(initial_language("/calculadora", &store), Language::Es);
    assert_eq!(load_language(&store), Some(Language::Es));
}
