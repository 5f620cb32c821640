//! Hott Rossi Storefront - the customer-facing order pipeline.
//!
//! This crate owns everything between "customer taps a pizza" and "operator's
//! WhatsApp opens with the order": the in-memory [`cart::Cart`], order
//! composition in [`order`], and the click-to-chat handoff in [`handoff`].
//! Display projections for UI layers live in [`views`].
//!
//! Nothing here touches the network. The composed order is plain text with
//! real newlines; percent-encoding happens once, at the handoff boundary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod handoff;
pub mod order;
pub mod views;

pub use cart::{Cart, CartLine};
pub use handoff::whatsapp_url;
pub use order::{ComposedOrder, DeliveryForm, OrderError, compose};
