//! Package tier selection.
//!
//! Products are sold in fixed packs ("50 for $35"). For a desired unit count
//! we pick the smallest pack that covers it; when the count is larger than
//! every pack, the largest pack is used and bought several times.

use rust_decimal::Decimal;

use super::catalog::{PricingTier, Product};

/// Smallest pack with `quantity >= desired`, else the largest pack, else `None`
/// for products sold without tiers.
pub fn resolve_tier(product: &Product, desired: u32) -> Option<PricingTier> {
    let tiers = product.tiers_ascending();
    tiers
        .iter()
        .find(|tier| tier.quantity >= desired)
        .or_else(|| tiers.last())
        .copied()
}

/// Display default shown while the desired quantity is still zero.
pub fn smallest_tier(product: &Product) -> Option<PricingTier> {
    product
        .pricing_tiers
        .iter()
        .min_by_key(|tier| tier.quantity)
        .copied()
}

/// Whole packs needed to cover `quantity` units.
pub fn packages_needed(quantity: u32, tier: &PricingTier) -> u32 {
    quantity.div_ceil(tier.quantity)
}

/// Price of covering `quantity` units with `tier` packs.
pub fn line_price(quantity: u32, tier: &PricingTier) -> Decimal {
    Decimal::from(packages_needed(quantity, tier)) * tier.price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::tests::product;
    use crate::core::catalog::Category;

    fn savory() -> Product {
        // Deliberately unsorted, as source data may be.
        product(
            "coxinha",
            Category::Savory,
            &[(100, 60), (30, 22), (150, 95), (50, 35)],
        )
    }

    #[test]
    fn picks_smallest_covering_tier() {
        let cases = [
            (0, 30),
            (1, 30),
            (30, 30),
            (31, 50),
            (40, 50),
            (50, 50),
            (51, 100),
            (100, 100),
            (101, 150),
            (150, 150),
        ];
        let p = savory();
        for (desired, expected) in cases {
            let tier = resolve_tier(&p, desired).unwrap();
            assert_eq!(tier.quantity, expected, "desired {desired}");
        }
    }

    #[test]
    fn beyond_every_tier_uses_largest() {
        let p = savory();
        let tier = resolve_tier(&p, 400).unwrap();
        assert_eq!(tier.quantity, 150);
        assert_eq!(packages_needed(400, &tier), 3);
        assert_eq!(line_price(400, &tier), Decimal::from(285));
    }

    #[test]
    fn no_tiers_resolves_to_none() {
        let p = product("plain", Category::Sweet, &[]);
        assert_eq!(resolve_tier(&p, 10), None);
        assert_eq!(smallest_tier(&p), None);
    }

    #[test]
    fn forty_units_cost_one_pack_of_fifty() {
        let p = savory();
        let tier = resolve_tier(&p, 40).unwrap();
        assert_eq!(tier.price, Decimal::from(35));
        assert_eq!(packages_needed(40, &tier), 1);
        assert_eq!(line_price(40, &tier), Decimal::from(35));
    }

    #[test]
    fn smallest_tier_ignores_source_order() {
        assert_eq!(smallest_tier(&savory()).unwrap().quantity, 30);
    }
}
