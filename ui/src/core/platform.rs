//! Platform glue: locale discovery, document language, outbound navigation.

/// Primary locale reported by the browser (`navigator.language`) or the OS.
pub fn preferred_locale() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.navigator().language())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        i18n_embed::DesktopLanguageRequester::requested_languages()
            .first()
            .map(|lang| lang.to_string())
    }
}

/// Path of the page being loaded, before the router takes over.
pub fn current_path() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Mirror the active language on `<html lang>`.
pub fn set_document_language(code: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("lang", code);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = code;
    }
}

/// Open an external link in a new tab (the WhatsApp hand-off).
pub fn open_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let opened = web_sys::window()
            .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
            .flatten();
        if opened.is_none() {
            tracing::warn!(url, "browser refused to open external link");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(url, "external link requested");
    }
}
