//! Product catalog: the static menu with localized copy and package pricing.
//!
//! The catalog ships inside the binary (`assets/catalog.json`) and is parsed
//! and validated once, on first access. Tiers must have a positive quantity
//! and price, so the totalizer never divides by zero.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use super::language::Language;

const CATALOG_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/catalog.json"
));

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("embedded catalog is valid");
    tracing::debug!(products = catalog.products().len(), "catalog loaded");
    catalog
});

/// The embedded storefront catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Savory,
    Sweet,
}

/// A string published in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T = String> {
    pub pt: T,
    pub en: T,
    pub es: T,
}

impl<T> Localized<T> {
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Pt => &self.pt,
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }
}

/// "Buy `quantity` units for `price`."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PricingTier {
    pub quantity: u32,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub serving_size: Localized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preparation {
    pub steps: Vec<Localized>,
    pub tips: Localized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub ingredients: Localized<Vec<String>>,
    pub nutrition: Nutrition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<Preparation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub category: Category,
    pub name: Localized,
    pub description: Localized,
    pub image: String,
    /// Reference price for a hundred units.
    pub price: Decimal,
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProductDetails>,
}

impl Product {
    pub fn name(&self, lang: Language) -> &str {
        self.name.get(lang)
    }

    /// Tiers ordered by ascending package size.
    pub fn tiers_ascending(&self) -> Vec<PricingTier> {
        let mut tiers = self.pricing_tiers.clone();
        tiers.sort_by_key(|tier| tier.quantity);
        tiers
    }

    pub fn has_tier(&self, tier: &PricingTier) -> bool {
        self.pricing_tiers.contains(tier)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting data that would break pricing arithmetic.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for product in &products {
            if !ids.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            let mut sizes = HashSet::new();
            for tier in &product.pricing_tiers {
                if tier.quantity == 0 {
                    return Err(CatalogError::ZeroQuantityTier {
                        product: product.id.clone(),
                    });
                }
                if tier.price <= Decimal::ZERO {
                    return Err(CatalogError::NonPositiveTierPrice {
                        product: product.id.clone(),
                        quantity: tier.quantity,
                    });
                }
                if !sizes.insert(tier.quantity) {
                    return Err(CatalogError::DuplicateTier {
                        product: product.id.clone(),
                        quantity: tier.quantity,
                    });
                }
            }
        }
        Ok(Self { products })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        #[derive(Deserialize)]
        struct Document {
            products: Vec<Product>,
        }

        let doc: Document = serde_json::from_str(raw)?;
        Self::new(doc.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }
}
