//! Internationalization (i18n) support for `brazilsnack-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/brazilsnack-ui.ftl   (fallback/reference)
//!   pt-BR/brazilsnack-ui.ftl
//!   es-ES/brazilsnack-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init(lang)` once at app start):
//! ```ignore
//! use crate::t;
//! let home_label = t!("nav-home");
//! ```
//!
//! The active language is owned by the platform shell as a
//! `Signal<Language>` context. Views read it with [`use_language`] so they
//! re-render when it changes; [`apply_language`] switches the Fluent bundle,
//! persists the preference and updates `<html lang>`.
//!
//! NOTE: The hyphenated filename `brazilsnack-ui.ftl` is canonical across all locales.
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::language::Language;
use crate::core::platform;
use crate::core::routes::language_for_path;
use crate::core::storage::{load_language, save_language, PreferenceStore};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("calc-recommendation", savory = "100", sweet = "60")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "brazilsnack-ui"; // pinned explicitly, mirrored in i18n.toml

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Prices and counts are interpolated into plain LTR text.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Load bundles for the given language (idempotent; later switches go
/// through [`set_language`]).
pub fn init(lang: Language) {
    INIT.call_once(|| {
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[lang.langid()]) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch the Fluent bundle at runtime.
pub fn set_language(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, &[lang.langid()]).map(|_| ())
}

/// Switch language everywhere it is observed outside the signal graph.
pub fn apply_language(lang: Language, store: &dyn PreferenceStore) {
    if let Err(err) = set_language(lang) {
        tracing::warn!(%err, lang = %lang, "could not load language bundle");
    }
    save_language(store, lang);
    platform::set_document_language(lang.code());
    tracing::info!(lang = %lang, "language applied");
}

/// Language for a path: what the path implies, then the stored preference,
/// then the browser/OS locale.
pub fn language_for_location(path: &str, store: &dyn PreferenceStore) -> Language {
    language_for_path(path, load_language(store), platform::preferred_locale().as_deref())
}

/// Language for the first page of a visit. The result is persisted so that
/// later navigation to language-neutral paths keeps it.
pub fn initial_language(path: &str, store: &dyn PreferenceStore) -> Language {
    let lang = language_for_location(path, store);
    save_language(store, lang);
    lang
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Storefront languages that have an embedded bundle, in display order.
pub fn switchable_languages() -> Vec<Language> {
    let embedded = available_languages();
    Language::ALL
        .into_iter()
        .filter(|lang| embedded.iter().any(|tag| tag == lang.fluent_tag()))
        .collect()
}

/// Current language from the shell-provided context (Portuguese if absent).
///
/// Reading the signal subscribes the calling component to language changes.
pub fn use_language() -> Language {
    let lang: Option<Signal<Language>> = try_use_context::<Signal<Language>>();
    lang.map(|signal| signal()).unwrap_or_default()
}
