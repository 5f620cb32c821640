//! Payment methods offered at checkout.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a payment method.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct ParsePaymentMethodError(String);

/// How the customer intends to pay on delivery.
///
/// Wire values are the lowercase Portuguese identifiers used by the checkout
/// form. The order message renders richer labels (pix key, change request);
/// see the order composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Pix,
    Credito,
    Debito,
    Dinheiro,
}

impl PaymentMethod {
    /// Short display label for pickers and summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pix => "Pix",
            Self::Credito => "Crédito",
            Self::Debito => "Débito",
            Self::Dinheiro => "Dinheiro",
        }
    }

    /// The lowercase wire identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pix => "pix",
            Self::Credito => "credito",
            Self::Debito => "debito",
            Self::Dinheiro => "dinheiro",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pix" => Ok(Self::Pix),
            "credito" => Ok(Self::Credito),
            "debito" => Ok(Self::Debito),
            "dinheiro" => Ok(Self::Dinheiro),
            _ => Err(ParsePaymentMethodError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Credito).expect("serialize"),
            "\"credito\""
        );
        let back: PaymentMethod = serde_json::from_str("\"dinheiro\"").expect("deserialize");
        assert_eq!(back, PaymentMethod::Dinheiro);
    }

    #[test]
    fn defaults_to_pix() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Pix);
    }
}
