//! Error types for the storefront core.

use thiserror::Error;

/// Problems found while loading the embedded product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate product id `{0}`")]
    DuplicateProduct(String),
    #[error("product `{product}` has a pricing tier with zero quantity")]
    ZeroQuantityTier { product: String },
    #[error("product `{product}` has a non-positive price for the {quantity}-unit tier")]
    NonPositiveTierPrice { product: String, quantity: u32 },
    #[error("product `{product}` lists the {quantity}-unit tier more than once")]
    DuplicateTier { product: String, quantity: u32 },
}

/// Problems found while loading the embedded site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site configuration is malformed: {0}")]
    Malformed(#[from] toml::de::Error),
    #[error("whatsapp number must be digits only, got `{0}`")]
    InvalidWhatsAppNumber(String),
    #[error("default guest count must be at least 1")]
    InvalidDefaultGuests,
    #[error("recommendation ratio `{0}` must not be negative")]
    NegativeRatio(&'static str),
}

/// Rejected calculator mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("unknown product `{0}`")]
    UnknownProduct(String),
    #[error("product `{0}` is not selected")]
    NotSelected(String),
    #[error("product `{product}` is not sold in packs of {quantity}")]
    UnknownTier { product: String, quantity: u32 },
}

/// Reasons an order cannot be sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("no products selected")]
    NoProductsSelected,
    #[error("selected products all have zero quantity")]
    NothingToOrder,
    #[error(transparent)]
    Link(#[from] LinkError),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("phone number must contain digits only, got `{0}`")]
    InvalidPhone(String),
    #[error("could not build link: {0}")]
    Url(#[from] url::ParseError),
}

/// Language preference persistence failures. Never fatal.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("preference i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
