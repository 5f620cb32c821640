//! WhatsApp click-to-chat handoff.
//!
//! The single place where an order leaves the storefront. The composed
//! message is percent-encoded here and nowhere else, so the rest of the
//! pipeline works with readable plain text.

use crate::order::ComposedOrder;

/// Base of the wa.me click-to-chat endpoint.
const WHATSAPP_BASE: &str = "https://wa.me";

/// Number that receives orders when settings carry none.
pub const FALLBACK_WHATSAPP: &str = "5511999999999";

/// Build the click-to-chat URL for a composed order.
///
/// The whole message is encoded in one pass, which keeps emoji, accents,
/// and newlines intact inside the `text` query parameter.
#[must_use]
pub fn whatsapp_url(order: &ComposedOrder) -> String {
    format!(
        "{WHATSAPP_BASE}/{}?text={}",
        order.phone,
        urlencoding::encode(&order.message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_the_order_phone() {
        let order = ComposedOrder {
            message: "oi".to_owned(),
            phone: "5511999999999".to_owned(),
        };
        assert_eq!(
            whatsapp_url(&order),
            "https://wa.me/5511999999999?text=oi"
        );
    }

    #[test]
    fn message_is_fully_percent_encoded() {
        let order = ComposedOrder {
            message: "🌟 *PEDIDO*\nlinha 2".to_owned(),
            phone: "5511988887777".to_owned(),
        };

        let url = whatsapp_url(&order);

        assert!(url.starts_with("https://wa.me/5511988887777?text="));
        // Newlines become %0A and nothing after `text=` is left raw.
        assert!(url.contains("%0A"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
        assert!(!url.contains('*'));
    }
}
