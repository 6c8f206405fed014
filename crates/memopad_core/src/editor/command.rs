//! Typed formatting commands and their wire protocol.
//!
//! # Invariants
//! - Command names and values are stable strings for the whole lifetime of
//!   the app.
//! - Both color commands draw from the same fixed six-color palette;
//!   `"transparent"` is reserved for clearing highlights.

/// One of the six palette colors offered for text and highlight coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Black,
    Red,
    Orange,
    Green,
    Blue,
    Purple,
}

impl PaletteColor {
    /// All palette entries in display order.
    pub const ALL: [Self; 6] = [
        Self::Black,
        Self::Red,
        Self::Orange,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Six-digit hex representation passed as the command value.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::Red => "#e03131",
            Self::Orange => "#f59f00",
            Self::Green => "#2f9e44",
            Self::Blue => "#1971c2",
            Self::Purple => "#9c36b5",
        }
    }
}

/// One of the five discrete font-size tiers.
///
/// Tokens map directly to `"1"`..`"5"`; the middle tier is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeTier {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

impl SizeTier {
    /// All tiers from smallest to largest.
    pub const ALL: [Self; 5] = [
        Self::Tiny,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Huge,
    ];

    /// Tier token passed as the command value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Tiny => "1",
            Self::Small => "2",
            Self::Medium => "3",
            Self::Large => "4",
            Self::Huge => "5",
        }
    }
}

/// A formatting command applied to the current selection in the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle bold on the selection.
    Bold,
    /// Set the foreground color.
    ForeColor(PaletteColor),
    /// Set the highlight color.
    HiliteColor(PaletteColor),
    /// Clear the highlight back to transparent.
    ClearHighlight,
    /// Set the font-size tier.
    FontSize(SizeTier),
    /// Strip inline formatting from the selection.
    RemoveFormat,
}

impl Command {
    /// Stable command name on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::ForeColor(_) => "foreColor",
            Self::HiliteColor(_) | Self::ClearHighlight => "hiliteColor",
            Self::FontSize(_) => "fontSize",
            Self::RemoveFormat => "removeFormat",
        }
    }

    /// Stable command value on the wire, when the command takes one.
    pub fn value(self) -> Option<&'static str> {
        match self {
            Self::Bold | Self::RemoveFormat => None,
            Self::ForeColor(color) | Self::HiliteColor(color) => Some(color.hex()),
            Self::ClearHighlight => Some("transparent"),
            Self::FontSize(tier) => Some(tier.token()),
        }
    }
}
