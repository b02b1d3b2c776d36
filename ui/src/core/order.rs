//! Turning a calculator session into an outbound order link.

use super::config::SiteConfig;
use super::error::OrderError;
use super::language::Language;
use super::link::build_whatsapp_link;
use super::message::{format_order_message, general_order_message};
use super::selection::CalculatorState;

/// Compose the order message and its WhatsApp link.
///
/// Refuses empty orders: nothing selected, or every selection still at zero.
pub fn prepare_order(
    state: &CalculatorState,
    config: &SiteConfig,
    lang: Language,
) -> Result<String, OrderError> {
    if state.is_empty() {
        return Err(OrderError::NoProductsSelected);
    }
    if state.line_items().next().is_none() {
        return Err(OrderError::NothingToOrder);
    }
    let message = format_order_message(
        state.guest_count(),
        state.selections(),
        state.total(),
        lang,
    );
    let link = build_whatsapp_link(&config.whatsapp_number, &message)?;
    tracing::info!(
        lines = state.line_items().count(),
        total = %state.total(),
        lang = %lang,
        "order link composed"
    );
    Ok(link)
}

/// Link for the generic "order now" buttons.
pub fn general_order_link(config: &SiteConfig, lang: Language) -> Result<String, OrderError> {
    Ok(build_whatsapp_link(
        &config.whatsapp_number,
        general_order_message(lang),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::catalog;
    use crate::core::config::site;

    #[test]
    fn empty_session_is_rejected() {
        let state = CalculatorState::new(20);
        assert_eq!(
            prepare_order(&state, site(), Language::Pt),
            Err(OrderError::NoProductsSelected)
        );
    }

    #[test]
    fn zero_quantities_are_rejected() {
        let mut state = CalculatorState::new(20);
        state.toggle(catalog(), "kibe").unwrap();
        assert_eq!(
            prepare_order(&state, site(), Language::En),
            Err(OrderError::NothingToOrder)
        );
    }

    #[test]
    fn composes_link_for_configured_number() {
        let mut state = CalculatorState::new(20);
        state.toggle(catalog(), "coxinha").unwrap();
        state.set_quantity("coxinha", 40).unwrap();
        let link = prepare_order(&state, site(), Language::En).unwrap();
        assert!(link.starts_with("https://wa.me/12677260916?text=Hello%21"));
        assert!(link.contains("%2435.00"));
    }

    #[test]
    fn general_link_uses_greeting() {
        let link = general_order_link(site(), Language::Es).unwrap();
        assert!(link.contains("text=%C2%A1Hola%21"));
    }
}
