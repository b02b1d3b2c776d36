//! WhatsApp deep links.

use url::{form_urlencoded, Url};

use super::error::LinkError;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// `https://wa.me/<digits>?text=<percent-encoded message>`
pub fn build_whatsapp_link(phone: &str, message: &str) -> Result<String, LinkError> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(LinkError::InvalidPhone(phone.to_string()));
    }
    let mut url = Url::parse(WHATSAPP_BASE)?.join(phone)?;
    // Form encoding turns spaces into `+`; the text param wants `%20`.
    let text: String = form_urlencoded::byte_serialize(message.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    url.set_query(Some(&format!("text={text}")));
    Ok(url.into())
}
