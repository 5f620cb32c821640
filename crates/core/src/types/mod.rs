//! Core types for Hott Rossi.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod money;
pub mod payment;
pub mod status;

pub use category::{Category, ParseCategoryError};
pub use id::*;
pub use money::{format_amount, format_brl};
pub use payment::{ParsePaymentMethodError, PaymentMethod};
pub use status::SyncStatus;
