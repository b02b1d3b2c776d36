//! Shared UI crate for the Brazilian's Snack storefront. Catalog, party
//! calculator, order hand-off and localized views live here; platform crates
//! only supply the router.

pub mod calculator;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Header with localized navigation and language switcher (components/site_header.rs)
    pub mod site_header;
    pub use site_header::{open_general_order, page_link, register_nav, NavBuilder, SiteHeader};

    pub mod site_footer;
    pub use site_footer::SiteFooter;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
