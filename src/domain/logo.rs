//! Viewport-driven brand mark model.
//!
//! The logo renders two sibling text variants and a stylesheet whose single
//! media query keeps exactly one of them visible at any viewport width. The
//! toggle lives entirely in CSS; this module is the one place that knows the
//! breakpoint, so the markup, the stylesheet, and the computed-visibility
//! checks used by tests can never drift apart.

use std::fmt;

/// Viewport width (px) at which the brand mark switches variants.
pub const TABLET_BREAKPOINT_PX: u32 = 735;

/// Default stylesheet color for the brand mark text.
pub const DEFAULT_FILL: &str = "#fff";

/// The two text variants of the brand mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoVariant {
    /// Full site name, shown below the tablet breakpoint.
    Full,
    /// Short site name, shown at and above the tablet breakpoint.
    Short,
}

impl LogoVariant {
    /// Both variants in markup order.
    pub const ALL: [LogoVariant; 2] = [LogoVariant::Full, LogoVariant::Short];

    /// Stable class name downstream styling targets.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogoVariant::Full => "site-logo__full",
            LogoVariant::Short => "site-logo__short",
        }
    }

    /// The variant hidden whenever this one is visible.
    pub fn counterpart(&self) -> LogoVariant {
        match self {
            LogoVariant::Full => LogoVariant::Short,
            LogoVariant::Short => LogoVariant::Full,
        }
    }
}

impl fmt::Display for LogoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoVariant::Full => write!(f, "full"),
            LogoVariant::Short => write!(f, "short"),
        }
    }
}

/// The variant visible at the given viewport width.
///
/// Total over all widths: below the breakpoint the full name is visible,
/// at and above it the short name is. The counterpart is always hidden.
pub fn visible_variant(viewport_width_px: u32) -> LogoVariant {
    if viewport_width_px >= TABLET_BREAKPOINT_PX { LogoVariant::Short } else { LogoVariant::Full }
}

/// Whether the given variant is hidden at the given viewport width.
pub fn is_hidden(variant: LogoVariant, viewport_width_px: u32) -> bool {
    visible_variant(viewport_width_px) != variant
}

/// Resolved text and color inputs for rendering the brand mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoSpec {
    pub full_name: String,
    pub short_name: String,
    pub fill: String,
}

impl LogoSpec {
    /// Derive the two variants from the configured site name.
    ///
    /// The short variant is the first whitespace-separated word; single-word
    /// names collapse both variants to the same text.
    pub fn from_name(name: &str, fill: Option<&str>) -> Self {
        let full_name = name.trim().to_string();
        let short_name =
            full_name.split_whitespace().next().unwrap_or_default().to_string();
        Self { full_name, short_name, fill: fill.unwrap_or(DEFAULT_FILL).to_string() }
    }

    /// Text for one variant.
    pub fn text(&self, variant: LogoVariant) -> &str {
        match variant {
            LogoVariant::Full => &self.full_name,
            LogoVariant::Short => &self.short_name,
        }
    }
}
