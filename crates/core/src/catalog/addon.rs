//! Optional paid modifiers ("sub-produtos") attachable to products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::AddonId;

/// An optional paid modifier linked to products via [`Product::addon_ids`].
///
/// Addons are independently owned rows; products reference them by ID.
///
/// [`Product::addon_ids`]: crate::catalog::Product::addon_ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub id: AddonId,
    pub name: String,
    pub price: Decimal,
}
