//! Shop-wide configuration.

use serde::{Deserialize, Serialize};

/// Fixed row ID of the settings singleton in the remote store.
pub const SETTINGS_ROW_ID: i64 = 1;

/// Shop identity and contact configuration.
///
/// Exactly one logical record exists; the remote store keeps it under row ID
/// [`SETTINGS_ROW_ID`]. The struct itself carries no ID so the write path
/// injects the singleton key in one place. Lowercase aliases accept rows
/// written under the all-lowercase column convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(alias = "shopname")]
    pub shop_name: String,
    #[serde(default, alias = "logourl")]
    pub logo_url: String,
    #[serde(default, alias = "promobanner", skip_serializing_if = "Option::is_none")]
    pub promo_banner: Option<String>,
    #[serde(
        default,
        alias = "whatsappnumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub whatsapp_number: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shop_name: "Hott Rossi".to_owned(),
            logo_url: String::new(),
            promo_banner: None,
            whatsapp_number: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_either_casing() {
        let camel: Settings = serde_json::from_value(serde_json::json!({
            "shopName": "Hott Rossi",
            "logoUrl": "https://example.com/logo.png",
            "whatsappNumber": "5511988887777",
        }))
        .expect("camelCase row");
        assert_eq!(camel.whatsapp_number.as_deref(), Some("5511988887777"));

        let lower: Settings = serde_json::from_value(serde_json::json!({
            "shopname": "Hott Rossi",
            "logourl": "",
            "promobanner": "Entrega grátis hoje!",
        }))
        .expect("lowercase row");
        assert_eq!(lower.promo_banner.as_deref(), Some("Entrega grátis hoje!"));
        assert_eq!(lower.whatsapp_number, None);
    }

    #[test]
    fn optional_fields_are_omitted_when_unset() {
        let json = serde_json::to_value(Settings::default()).expect("serialize");
        assert_eq!(json["shopName"], "Hott Rossi");
        assert!(json.get("promoBanner").is_none());
        assert!(json.get("whatsappNumber").is_none());
    }
}
