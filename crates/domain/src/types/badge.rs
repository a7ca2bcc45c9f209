//! Badge lookups for closed enums
//!
//! Each status/category enum renders through a fixed label + style table.
//! Unknown raw values never reach these tables through parsing (see
//! [`impl_record_enum_conversions`](crate::impl_record_enum_conversions));
//! [`render_badge`] is the one entry point that accepts raw text and falls
//! back to a neutral badge for it.

use std::borrow::Cow;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::NEUTRAL_BADGE_CLASS;

/// Display label and CSS class for a badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStyle {
    pub label: Cow<'static, str>,
    pub class_name: &'static str,
}

impl BadgeStyle {
    /// Badge from static label and class.
    pub const fn new(label: &'static str, class_name: &'static str) -> Self {
        Self { label: Cow::Borrowed(label), class_name }
    }

    /// Neutral gray badge showing the raw text as-is.
    pub fn fallback(raw: &str) -> Self {
        Self { label: Cow::Owned(raw.to_string()), class_name: NEUTRAL_BADGE_CLASS }
    }

    /// Whether this badge came from [`BadgeStyle::fallback`].
    pub fn is_fallback(&self) -> bool {
        matches!(self.label, Cow::Owned(_)) && self.class_name == NEUTRAL_BADGE_CLASS
    }
}

/// A closed enum with a fixed badge lookup
pub trait Badge {
    fn badge(&self) -> BadgeStyle;
}

/// Render a raw value through `E`'s lookup, or the neutral fallback badge if
/// the value is outside the closed set.
pub fn render_badge<E>(raw: &str) -> BadgeStyle
where
    E: Badge + FromStr,
{
    match raw.parse::<E>() {
        Ok(value) => value.badge(),
        Err(_) => BadgeStyle::fallback(raw),
    }
}

// Shared palette
pub(crate) const GREEN_SOFT: &str = "bg-green-50 text-green-800 border-green-200";
pub(crate) const BLUE_SOFT: &str = "bg-blue-50 text-blue-800 border-blue-200";
pub(crate) const PURPLE_SOFT: &str = "bg-purple-50 text-purple-800 border-purple-200";
pub(crate) const YELLOW_SOFT: &str = "bg-yellow-50 text-yellow-800 border-yellow-200";
pub(crate) const RED_SOFT: &str = "bg-red-50 text-red-800 border-red-200";
pub(crate) const ORANGE_SOFT: &str = "bg-orange-50 text-orange-800 border-orange-200";
pub(crate) const GRAY_SOFT: &str = NEUTRAL_BADGE_CLASS;

pub(crate) const GREEN_SOLID: &str = "bg-green-100 text-green-800 hover:bg-green-100";
pub(crate) const BLUE_SOLID: &str = "bg-blue-100 text-blue-800 hover:bg-blue-100";
pub(crate) const PURPLE_SOLID: &str = "bg-purple-100 text-purple-800 hover:bg-purple-100";
pub(crate) const YELLOW_SOLID: &str = "bg-yellow-100 text-yellow-800 hover:bg-yellow-100";
pub(crate) const RED_SOLID: &str = "bg-red-100 text-red-800 hover:bg-red-100";
