//! Newtype identifiers for type-safe references.
//!
//! Use the `define_handle!` macro to create string-backed wrappers that
//! prevent accidentally passing a cart line key where a product id is
//! expected.

/// Macro to define a type-safe string identifier.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use lexic_core::define_handle;
/// define_handle!(SkuCode);
/// define_handle!(CollectionHandle);
///
/// let sku = SkuCode::new("lexic-cuff-7");
/// assert_eq!(sku.as_str(), "lexic-cuff-7");
///
/// // These are different types, so this won't compile:
/// // let _: CollectionHandle = sku;
/// ```
#[macro_export]
macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_handle!(
    /// Catalog product identifier, stable for the catalog's lifetime.
    ProductId
);
define_handle!(
    /// Identity of a cart line: the product plus its canonical selection.
    LineKey
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display_and_conversions() {
        let id = ProductId::new("lexic-cuff");
        assert_eq!(id.to_string(), "lexic-cuff");
        assert_eq!(id.as_str(), "lexic-cuff");
        assert_eq!(ProductId::from("lexic-cuff"), id);
        assert_eq!(String::from(id), "lexic-cuff");
    }

    #[test]
    fn test_product_id_serializes_transparently() {
        let id = ProductId::new("r1");
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("\"r1\""));
    }
}
