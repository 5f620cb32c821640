//! Operator access gate.
//!
//! Admin access is guarded by a single fixed six-digit code shared by every
//! operator, compared verbatim against the typed input. There is no hashing,
//! no lockout, and no expiry; the code travels with the build.

/// The shared operator code.
pub const ADMIN_CODE: &str = "116289";

/// Check an operator-typed code against the gate.
#[must_use]
pub fn verify(input: &str) -> bool {
    input == ADMIN_CODE
}
