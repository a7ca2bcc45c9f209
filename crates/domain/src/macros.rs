//! Macro for implementing string conversions on closed record enums
//!
//! Every status/category column in the back office is a closed set rendered
//! through a fixed lookup. This macro generates the string side of that
//! contract in one place: `as_str`, an `ALL` listing, `Display`, and a
//! case-insensitive `FromStr` that rejects unknown values with a
//! [`DashboardError::Validation`](crate::DashboardError::Validation).
//!
//! # Example
//!
//! ```rust
//! use veggieworld_domain::impl_record_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Freshness {
//!     Fresh,
//!     Wilting,
//! }
//!
//! impl_record_enum_conversions!(Freshness {
//!     Fresh => "fresh",
//!     Wilting => "wilting",
//! });
//!
//! assert_eq!("FRESH".parse::<Freshness>().unwrap(), Freshness::Fresh);
//! assert_eq!(Freshness::ALL.len(), 2);
//! ```

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a closed enum
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings
///
/// Parsing is case-insensitive and ignores surrounding whitespace; display
/// always emits the canonical wire string.
#[macro_export]
macro_rules! impl_record_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every value of the closed set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::DashboardError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let needle = s.trim();
                $(
                    if needle.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::errors::DashboardError::validation(
                    stringify!($enum_name),
                    format!("unrecognized value '{}'", s),
                ))
            }
        }
    };
}
