//! Newtype keys for the catalog's opaque identifiers.
//!
//! Every key in the catalog is an opaque string minted by content authors or
//! by the booking partner. Newtypes keep them from being mixed up, e.g.
//! passing a guide slug where a listing slug is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype key structs.
///
/// Unlike session or order IDs there is no `generate()` here: catalog keys
/// only ever come from authored data or the partner feed.
macro_rules! define_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a key from a string.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Get the key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_key! {
    /// Partner product code for one bookable tour. Stable across snapshot
    /// refreshes; never parsed, only compared.
    ProductCode
}

define_key! {
    /// URL slug of a top-level marketing category ("pillar").
    CategorySlug
}

define_key! {
    /// URL slug of an authored tour listing, unique within its category.
    ListingSlug
}

define_key! {
    /// URL slug of a sub-category guide page, unique within its category.
    GuideSlug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_creation() {
        let code = ProductCode::new("7411KUTNA");
        assert_eq!(code.as_str(), "7411KUTNA");
    }

    #[test]
    fn test_key_from_str() {
        let slug: CategorySlug = "prague-day-trips".into();
        assert_eq!(slug.as_str(), "prague-day-trips");
    }

    #[test]
    fn test_key_display() {
        let slug = ListingSlug::new("kutna-hora-sedlec-ossuary");
        assert_eq!(format!("{}", slug), "kutna-hora-sedlec-ossuary");
    }

    #[test]
    fn test_key_equality() {
        let a = ProductCode::new("4452TASTE");
        let b = ProductCode::new("4452TASTE");
        let c = ProductCode::new("7023BEER");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_as_json_string() {
        let slug = GuideSlug::new("best-day-trips-from-prague");
        let json = serde_json::to_string(&slug).unwrap();
        assert_eq!(json, r#""best-day-trips-from-prague""#);
    }
}
