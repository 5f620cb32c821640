//! Dual-casing payload serializer.
//!
//! The remote schema has lived under two key casings: early tables used
//! all-lowercase column names (`imageurl`, `ispromo`), later ones the
//! canonical camelCase (`imageUrl`, `isPromo`). Every outgoing write carries
//! both: each field is serialized under its canonical key and duplicated
//! under its all-lowercase form where the two differ, so either schema
//! variant picks up the value. Reads go the other way: [`collapse_dual`]
//! strips the lowercase shadows from fetched rows, and the serde aliases in
//! `hott-rossi-core` accept whichever single casing remains.

use serde::Serialize;
use serde_json::Value;

/// Serialize an entity and duplicate every mixed-case key in lowercase.
///
/// Keys that are already all-lowercase (`id`, `name`, `price`, `addons`) are
/// left alone. An existing lowercase key is never overwritten.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the entity fails to
/// serialize.
pub fn dual_keyed<T: Serialize>(entity: &T) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(entity)?;
    if let Value::Object(map) = &mut value {
        let duplicates: Vec<(String, Value)> = map
            .iter()
            .filter(|(key, _)| key.chars().any(char::is_uppercase))
            .map(|(key, field)| (key.to_lowercase(), field.clone()))
            .collect();
        for (key, field) in duplicates {
            map.entry(key).or_insert(field);
        }
    }
    Ok(value)
}

/// Drop the lowercase twin of every mixed-case key in a fetched row.
///
/// Rows written by [`dual_keyed`] come back carrying both casings of a key,
/// which the serde aliases on the entity structs would refuse as duplicate
/// fields. Collapsing keeps the mixed-case spelling and removes its
/// lowercase shadow; rows from single-cased schemas pass through untouched.
#[must_use]
pub fn collapse_dual(row: Value) -> Value {
    match row {
        Value::Object(mut map) => {
            let shadowed: Vec<String> = map
                .keys()
                .filter(|key| key.chars().any(char::is_uppercase))
                .map(|key| key.to_lowercase())
                .filter(|lower| map.contains_key(lower))
                .collect();
            for key in shadowed {
                map.remove(&key);
            }
            Value::Object(map)
        }
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hott_rossi_core::{Addon, AddonId, Category, Product, ProductId, Settings};
    use rust_decimal::Decimal;

    fn product() -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Margherita".to_owned(),
            description: "Clássica".to_owned(),
            price: Decimal::new(5500, 2),
            category: Category::Pizzas,
            image_url: "https://example.test/m.jpg".to_owned(),
            is_promo: true,
            is_best_seller: false,
            promo_text: Some("Promoção".to_owned()),
            addon_ids: vec![AddonId::new("a-1")],
        }
    }

    #[test]
    fn product_payload_carries_both_casings() {
        let payload = dual_keyed(&product()).unwrap();
        let map = payload.as_object().unwrap();

        for (canonical, lowercase) in [
            ("imageUrl", "imageurl"),
            ("isPromo", "ispromo"),
            ("isBestSeller", "isbestseller"),
            ("promoText", "promotext"),
        ] {
            assert_eq!(map[canonical], map[lowercase], "{canonical} mismatch");
        }
        assert_eq!(map["imageurl"], "https://example.test/m.jpg");
        assert_eq!(map["ispromo"], true);
    }

    #[test]
    fn lowercase_keys_are_not_duplicated() {
        let payload = dual_keyed(&product()).unwrap();
        let map = payload.as_object().unwrap();

        assert_eq!(map["id"], "p-1");
        assert_eq!(map["addons"][0], "a-1");
        // id, name, description, price, category, addons + the four pairs.
        assert_eq!(map.len(), 6 + 8);
    }

    #[test]
    fn absent_optional_fields_stay_absent() {
        let bare = Product {
            promo_text: None,
            ..product()
        };
        let payload = dual_keyed(&bare).unwrap();
        let map = payload.as_object().unwrap();

        assert!(!map.contains_key("promoText"));
        assert!(!map.contains_key("promotext"));
    }

    #[test]
    fn settings_payload_carries_both_casings() {
        let settings = Settings {
            shop_name: "Hott Rossi".to_owned(),
            logo_url: "https://example.test/logo.png".to_owned(),
            promo_banner: Some("Frete grátis hoje!".to_owned()),
            whatsapp_number: Some("5511988887777".to_owned()),
        };
        let payload = dual_keyed(&settings).unwrap();
        let map = payload.as_object().unwrap();

        for (canonical, lowercase) in [
            ("shopName", "shopname"),
            ("logoUrl", "logourl"),
            ("promoBanner", "promobanner"),
            ("whatsappNumber", "whatsappnumber"),
        ] {
            assert_eq!(map[canonical], map[lowercase], "{canonical} mismatch");
        }
    }

    #[test]
    fn addon_payload_is_untouched() {
        let addon = Addon {
            id: AddonId::new("a-1"),
            name: "Borda Recheada".to_owned(),
            price: Decimal::new(800, 2),
        };
        let payload = dual_keyed(&addon).unwrap();
        let map = payload.as_object().unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map["price"], "8.00");
    }

    #[test]
    fn collapse_removes_only_the_lowercase_shadows() {
        let collapsed = collapse_dual(dual_keyed(&product()).unwrap());
        let map = collapsed.as_object().unwrap();

        assert!(map.contains_key("imageUrl"));
        assert!(!map.contains_key("imageurl"));
        assert!(map.contains_key("isPromo"));
        assert!(!map.contains_key("ispromo"));
        // Genuinely lowercase keys survive.
        assert_eq!(map["id"], "p-1");
        // 6 already-lowercase fields + 4 mixed-case ones, shadows gone.
        assert_eq!(map.len(), 6 + 4);
    }

    #[test]
    fn collapse_leaves_single_cased_rows_alone() {
        let row = serde_json::json!({
            "id": "p-2", "name": "Portuguesa", "price": "48.90",
            "category": "Pizzas", "imageurl": "https://example.test/p.jpg",
        });
        assert_eq!(collapse_dual(row.clone()), row);
    }

    #[test]
    fn written_rows_decode_back_after_collapsing() {
        let original = product();
        let row = collapse_dual(dual_keyed(&original).unwrap());
        let decoded: Product = serde_json::from_value(row).unwrap();
        assert_eq!(decoded, original);
    }
}
