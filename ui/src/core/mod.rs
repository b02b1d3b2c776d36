//! Platform-agnostic storefront logic: catalog, party calculator, order
//! messages and language handling. Nothing in here touches the DOM except
//! through `platform` and `storage`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod language;
pub mod link;
pub mod message;
pub mod order;
pub mod platform;
pub mod recommend;
pub mod routes;
pub mod selection;
pub mod storage;
pub mod tiers;

pub use catalog::{catalog, Catalog, Category, PricingTier, Product};
pub use config::{site, SiteConfig};
pub use language::Language;
pub use routes::Page;
pub use selection::{CalculatorState, LineItem, Selection};
