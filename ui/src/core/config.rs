//! Site configuration (`assets/site.toml`).

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::ConfigError;
use super::recommend::RecommendationPolicy;

const SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.toml"));

static SITE: Lazy<SiteConfig> =
    Lazy::new(|| SiteConfig::from_toml(SITE_TOML).expect("embedded site.toml is valid"));

/// The embedded site configuration.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub whatsapp_number: String,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub delivery_areas: Vec<String>,
    #[serde(default = "default_guest_count")]
    pub default_guest_count: u32,
    #[serde(default)]
    pub recommendation: RecommendationPolicy,
}

fn default_guest_count() -> u32 {
    20
}

impl SiteConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let number = &self.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsAppNumber(number.clone()));
        }
        if self.default_guest_count == 0 {
            return Err(ConfigError::InvalidDefaultGuests);
        }
        let policy = &self.recommendation;
        let ratios = [
            ("with_other_food.savory", policy.with_other_food.savory),
            ("with_other_food.sweet", policy.with_other_food.sweet),
            ("snacks_only.savory", policy.snacks_only.savory),
            ("snacks_only.sweet", policy.snacks_only.sweet),
        ];
        for (name, value) in ratios {
            if value < Decimal::ZERO {
                return Err(ConfigError::NegativeRatio(name));
            }
        }
        Ok(())
    }

    /// Number shown to visitors (first listed, else the WhatsApp digits).
    pub fn display_phone(&self) -> &str {
        self.phone_numbers
            .first()
            .map(String::as_str)
            .unwrap_or(self.whatsapp_number.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_loads() {
        let config = SiteConfig::from_toml(SITE_TOML).unwrap();
        assert_eq!(config.whatsapp_number, "12677260916");
        assert_eq!(config.default_guest_count, 20);
        assert_eq!(config.recommendation, RecommendationPolicy::default());
        assert_eq!(config.display_phone(), "(267) 726-0916");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            brand = "Test"
            whatsapp_number = "5511999999999"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_guest_count, 20);
        assert_eq!(config.display_phone(), "5511999999999");
    }

    #[test]
    fn rejects_formatted_phone() {
        let err = SiteConfig::from_toml(
            r#"
            brand = "Test"
            whatsapp_number = "+1 (267) 726-0916"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWhatsAppNumber(_)));
    }

    #[test]
    fn rejects_zero_default_guests() {
        let err = SiteConfig::from_toml(
            r#"
            brand = "Test"
            whatsapp_number = "1"
            default_guest_count = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaultGuests));
    }
}
