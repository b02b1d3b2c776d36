//! Localized page paths.
//!
//! Each page has a path per language (`/sobre`, `/about`, `/acerca-de`), and
//! the path a visitor lands on usually tells us which language to show.
//! `/calculadora` is shared by Portuguese and Spanish, so it defers to the
//! stored preference and the browser locale.

use super::language::{detect, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Calculator,
    About,
    Product(String),
}

impl Page {
    pub fn path(&self, lang: Language) -> String {
        match (self, lang) {
            (Self::Home, _) => "/".to_string(),
            (Self::Calculator, Language::En) => "/calculator".to_string(),
            (Self::Calculator, _) => "/calculadora".to_string(),
            (Self::About, Language::Pt) => "/sobre".to_string(),
            (Self::About, Language::En) => "/about".to_string(),
            (Self::About, Language::Es) => "/acerca-de".to_string(),
            (Self::Product(id), lang) => format!("{}/{id}", product_prefix(lang)),
        }
    }

    /// Recognize any localized path. Unknown paths return `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        match path {
            "/" => return Some(Self::Home),
            "/calculator" | "/calculadora" => return Some(Self::Calculator),
            "/sobre" | "/about" | "/acerca-de" => return Some(Self::About),
            _ => {}
        }
        Language::ALL.iter().find_map(|&lang| {
            path.strip_prefix(product_prefix(lang))
                .and_then(|rest| rest.strip_prefix('/'))
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::Product(id.to_string()))
        })
    }
}

fn product_prefix(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "/produto",
        Language::En => "/product",
        Language::Es => "/producto",
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Language implied by a path, falling back to the stored preference and
/// browser locale where the path is shared.
pub fn language_for_path(path: &str, stored: Option<Language>, locale: Option<&str>) -> Language {
    let path = normalize(path);
    let starts = |prefix: &str| path == prefix || path.starts_with(&format!("{prefix}/"));

    if starts("/calculator") || starts("/about") || starts("/product") {
        return Language::En;
    }
    if starts("/sobre") || starts("/produto") {
        return Language::Pt;
    }
    if starts("/acerca-de") || starts("/producto") {
        return Language::Es;
    }
    if starts("/calculadora") {
        return match stored {
            Some(lang @ (Language::Pt | Language::Es)) => lang,
            _ if locale.and_then(Language::from_tag) == Some(Language::Es) => Language::Es,
            _ => Language::Pt,
        };
    }
    detect(stored.map(Language::code), locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips_in_every_language() {
        let pages = [
            Page::Home,
            Page::Calculator,
            Page::About,
            Page::Product("coxinha".into()),
        ];
        for lang in Language::ALL {
            for page in &pages {
                let path = page.path(lang);
                assert_eq!(Page::from_path(&path).as_ref(), Some(page), "{path}");
            }
        }
    }

    #[test]
    fn localized_paths() {
        assert_eq!(Page::About.path(Language::Es), "/acerca-de");
        assert_eq!(Page::Calculator.path(Language::Pt), "/calculadora");
        assert_eq!(Page::Product("kibe".into()).path(Language::Pt), "/produto/kibe");
        assert_eq!(Page::Product("kibe".into()).path(Language::Es), "/producto/kibe");
    }

    #[test]
    fn unknown_paths_are_not_pages() {
        assert_eq!(Page::from_path("/cardapio"), None);
        assert_eq!(Page::from_path("/product/"), None);
        assert_eq!(Page::from_path("/product/a/b"), None);
        assert_eq!(Page::from_path("/about/"), Some(Page::About));
    }

    #[test]
    fn unambiguous_paths_fix_language() {
        assert_eq!(language_for_path("/about", Some(Language::Pt), None), Language::En);
        assert_eq!(language_for_path("/sobre", Some(Language::Es), None), Language::Pt);
        assert_eq!(language_for_path("/producto/kibe", None, Some("pt-BR")), Language::Es);
        assert_eq!(language_for_path("/produto/kibe", None, Some("es")), Language::Pt);
        assert_eq!(language_for_path("/product/kibe", None, None), Language::En);
    }

    #[test]
    fn shared_calculator_path_defers_to_preference() {
        assert_eq!(
            language_for_path("/calculadora", Some(Language::Es), Some("pt-BR")),
            Language::Es
        );
        // English preference can't apply to the pt/es path.
        assert_eq!(
            language_for_path("/calculadora", Some(Language::En), Some("es-MX")),
            Language::Es
        );
        assert_eq!(
            language_for_path("/calculadora", Some(Language::En), Some("en-US")),
            Language::Pt
        );
    }

    #[test]
    fn home_uses_preference_then_locale() {
        assert_eq!(language_for_path("/", Some(Language::En), Some("es")), Language::En);
        assert_eq!(language_for_path("/", None, Some("es-AR")), Language::Es);
        assert_eq!(language_for_path("/", None, None), Language::Pt);
    }
}
