//! Order composition.
//!
//! [`compose`] turns the cart, the delivery form, and the shop settings into
//! the exact plain-text message the operator receives on WhatsApp. The output
//! carries real newlines; percent-encoding is the handoff's job, not ours.
//!
//! Composition is pure and repeatable: the same cart, form, and settings
//! always produce byte-identical output.

use hott_rossi_core::{PaymentMethod, Settings, format_brl};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartLine};
use crate::handoff::FALLBACK_WHATSAPP;

/// Pix key printed in the payment block of every pix order.
pub const PIX_KEY: &str = "30507986881";

/// Shop banner used when settings carry an empty name.
const FALLBACK_SHOP_NAME: &str = "HOTT ROSSI";

/// Visual section divider inside the message.
const SEPARATOR: &str = "---------------------------------------";

// ============================================================================
// Delivery Form
// ============================================================================

/// Customer-entered delivery details.
///
/// Empty strings mean "not filled in"; [`compose`] refuses to build an order
/// until every required field is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryForm {
    pub name: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    /// Optional landmark; rendered as "N/A" when empty.
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Cash orders only: the bill the customer will pay with.
    #[serde(default)]
    pub change_for: String,
}

impl DeliveryForm {
    fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            return Some("name");
        }
        if self.street.is_empty() {
            return Some("street");
        }
        if self.number.is_empty() {
            return Some("number");
        }
        if self.neighborhood.is_empty() {
            return Some("neighborhood");
        }
        None
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("cannot compose an order from an empty cart")]
    EmptyCart,

    #[error("missing required delivery field: {0}")]
    MissingField(&'static str),
}

// ============================================================================
// Composition
// ============================================================================

/// A finished order: the message text plus the number that receives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedOrder {
    /// Full order message, plain text with real newlines.
    pub message: String,
    /// Destination WhatsApp number in international digits-only form.
    pub phone: String,
}

/// Build the order message from the cart, delivery form, and shop settings.
///
/// # Errors
///
/// Returns [`OrderError::EmptyCart`] when the cart has no lines and
/// [`OrderError::MissingField`] naming the first required field that is
/// still empty.
pub fn compose(
    cart: &Cart,
    form: &DeliveryForm,
    settings: &Settings,
) -> Result<ComposedOrder, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    if let Some(field) = form.missing_field() {
        return Err(OrderError::MissingField(field));
    }

    let shop_name = if settings.shop_name.is_empty() {
        FALLBACK_SHOP_NAME.to_owned()
    } else {
        settings.shop_name.to_uppercase()
    };

    let items = cart
        .lines()
        .iter()
        .map(item_entry)
        .collect::<Vec<_>>()
        .join("\n\n");
    let total = format_brl(cart.total());
    let reference = if form.reference.is_empty() {
        "N/A"
    } else {
        form.reference.as_str()
    };
    let payment = payment_entry(form);

    let message = format!(
        "🌟 *NOVO PEDIDO - {shop_name}* 🌟\n\
         {SEPARATOR}\n\
         \n\
         📋 *ITENS:*\n\
         {items}\n\
         \n\
         {SEPARATOR}\n\
         💰 *TOTAL: {total}*\n\
         {SEPARATOR}\n\
         \n\
         📍 *DADOS DE ENTREGA:*\n\
         👤 *Nome:* {name}\n\
         🏠 *Endereço:* {street}, nº {number}\n\
         🏘️ *Bairro:* {neighborhood}\n\
         🎯 *Ref:* {reference}\n\
         \n\
         💳 *FORMA DE PAGAMENTO:*\n\
         {payment}\n\
         \n\
         {SEPARATOR}\n\
         🙏 _Obrigado pela preferência!_",
        name = form.name,
        street = form.street,
        number = form.number,
        neighborhood = form.neighborhood,
    );

    let phone = settings
        .whatsapp_number
        .as_deref()
        .filter(|number| !number.is_empty())
        .unwrap_or(FALLBACK_WHATSAPP)
        .to_owned();

    Ok(ComposedOrder { message, phone })
}

/// Render one cart line: bullet, quantity, bold name, line total, and the
/// addon sub-line when the customer picked any.
fn item_entry(line: &CartLine) -> String {
    let mut entry = format!(
        "• {}x *{}* - {}",
        line.quantity,
        line.name,
        format_brl(line.line_total())
    );
    if !line.selected_addons.is_empty() {
        let names = line
            .selected_addons
            .iter()
            .map(|addon| addon.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        entry.push_str("\n   └─ _Adicionais: ");
        entry.push_str(&names);
        entry.push('_');
    }
    entry
}

fn payment_entry(form: &DeliveryForm) -> String {
    match form.payment_method {
        PaymentMethod::Pix => format!("💠 *Pix (Chave CPF: {PIX_KEY})*"),
        PaymentMethod::Credito => "💳 *Cartão de Crédito*".to_owned(),
        PaymentMethod::Debito => "💳 *Cartão de Débito*".to_owned(),
        PaymentMethod::Dinheiro => {
            if form.change_for.is_empty() {
                "💵 *Dinheiro* (Não precisa de troco)".to_owned()
            } else {
                format!("💵 *Dinheiro* (Troco para R$ {})", form.change_for)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
