//! `rossi-cli` command implementations.

pub mod admin;
pub mod catalog;
pub mod seed;
pub mod sync;
