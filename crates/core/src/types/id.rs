//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_string()`
/// - `generate()` minting a fresh ID from the current wall-clock millis
/// - `From<String>`, `From<&str>`, and `Into<String>` implementations
///
/// Remote store rows carry IDs as opaque strings, so the wrapper keeps the
/// string representation rather than parsing into a numeric type.
///
/// # Example
///
/// ```rust
/// # use hott_rossi_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new("1724500000000");
/// let order_id = OrderId::new("1724500000000");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh ID from the current wall-clock time in
            /// milliseconds.
            ///
            /// Two calls within the same millisecond yield the same ID. For a
            /// single-operator admin panel this collision window is an
            /// accepted risk.
            #[must_use]
            pub fn generate() -> Self {
                Self(::chrono::Utc::now().timestamp_millis().to_string())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper, returning the underlying string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(AddonId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        let id = ProductId::new("p-calabresa");
        assert_eq!(id.as_str(), "p-calabresa");
        assert_eq!(id.to_string(), "p-calabresa");
        assert_eq!(String::from(id), "p-calabresa");
    }

    #[test]
    fn generated_ids_are_numeric_timestamps() {
        let id = AddonId::generate();
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
        assert!(id.as_str().len() >= 13);
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = ProductId::new("1724500000000");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"1724500000000\"");

        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
