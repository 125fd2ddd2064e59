//! Panel identity, width bounds and clamping
//!
//! Widths are stored in logical pixels as integers. Every `PanelWidth` is
//! produced through `PanelBounds`, so a width can never sit outside the
//! range of the panel it belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage key namespace shared by every persisted layout record
pub const STORAGE_NAMESPACE: &str = "codexmonitor";

/// A resizable panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    /// Left sidebar, resize handle on its right edge
    Sidebar,
    /// Right panel, resize handle on its left edge
    RightPanel,
}

impl PanelKind {
    /// All panels for iteration
    pub const ALL: [PanelKind; 2] = [PanelKind::Sidebar, PanelKind::RightPanel];

    /// Width limits and default for this panel
    pub fn bounds(&self) -> PanelBounds {
        match self {
            PanelKind::Sidebar => PanelBounds::SIDEBAR,
            PanelKind::RightPanel => PanelBounds::RIGHT_PANEL,
        }
    }

    /// Storage key the width is persisted under
    pub fn storage_key(&self) -> &'static str {
        match self {
            PanelKind::Sidebar => "codexmonitor.sidebarWidth",
            PanelKind::RightPanel => "codexmonitor.rightPanelWidth",
        }
    }

    /// Display name used in logs
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelKind::Sidebar => "sidebar",
            PanelKind::RightPanel => "right panel",
        }
    }

    /// Unclamped width after the pointer moved `delta` pixels from where
    /// the drag started.
    ///
    /// The sidebar grows as the pointer moves right. The right panel grows
    /// as the pointer moves left, since its handle sits on its left edge.
    pub fn candidate_width(&self, start_width: PanelWidth, delta: f64) -> f64 {
        let start = f64::from(start_width.get());
        match self {
            PanelKind::Sidebar => start + delta,
            PanelKind::RightPanel => start - delta,
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Closed width range plus the fallback default for a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl PanelBounds {
    pub const SIDEBAR: PanelBounds = PanelBounds {
        min: 220,
        max: 420,
        default: 280,
    };

    pub const RIGHT_PANEL: PanelBounds = PanelBounds {
        min: 200,
        max: 420,
        default: 230,
    };

    /// The default width
    pub fn default_width(&self) -> PanelWidth {
        PanelWidth(self.default)
    }

    /// Round and clamp an arbitrary value into `[min, max]`.
    ///
    /// NaN has no meaningful position in the range and maps to the default.
    pub fn clamp(&self, value: f64) -> PanelWidth {
        if value.is_nan() {
            return self.default_width();
        }
        let clamped = value.round().clamp(f64::from(self.min), f64::from(self.max));
        PanelWidth(clamped as u32)
    }

    /// Interpret a persisted record.
    ///
    /// Absent or empty records and values that are not a finite number fall
    /// back to the default. Anything else is clamped, which also repairs
    /// records written under older bounds. A whitespace-only record reads
    /// as zero.
    pub fn from_stored(&self, raw: Option<&str>) -> PanelWidth {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return self.default_width();
        };
        match parse_stored_number(raw) {
            Some(parsed) if parsed.is_finite() => self.clamp(parsed),
            _ => self.default_width(),
        }
    }

    /// Whether a raw width lies inside the range
    pub fn contains(&self, width: u32) -> bool {
        (self.min..=self.max).contains(&width)
    }
}

/// Numeric value of a stored record.
///
/// Surrounding whitespace is ignored and a blank string is zero. Unsigned
/// `0x`, `0o` and `0b` literals are accepted alongside decimal and
/// exponent notation.
fn parse_stored_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix_digits = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, radix)));

    match radix_digits {
        Some(("", _)) => None,
        Some((digits, radix)) => digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        }),
        None => trimmed.parse::<f64>().ok(),
    }
}

/// Width of a panel in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelWidth(u32);

impl PanelWidth {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Width in physical pixels for the given scale factor
    pub fn physical(self, scale_factor: f64) -> f32 {
        (f64::from(self.0) * scale_factor) as f32
    }

    /// Serialized form written to storage
    pub fn to_stored(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for PanelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_namespaced_and_distinct() {
        for kind in PanelKind::ALL {
            assert!(kind.storage_key().starts_with(STORAGE_NAMESPACE));
        }
        assert_ne!(
            PanelKind::Sidebar.storage_key(),
            PanelKind::RightPanel.storage_key()
        );
    }

    #[test]
    fn test_clamp_limits() {
        let b = PanelBounds::SIDEBAR;
        assert_eq!(b.clamp(100.0).get(), 220);
        assert_eq!(b.clamp(300.0).get(), 300);
        assert_eq!(b.clamp(9999.0).get(), 420);
        assert_eq!(b.clamp(f64::NEG_INFINITY).get(), 220);
        assert_eq!(b.clamp(f64::INFINITY).get(), 420);
        assert_eq!(b.clamp(f64::NAN).get(), 280);
    }

    #[test]
    fn test_clamp_rounds_fractional_values() {
        let b = PanelBounds::RIGHT_PANEL;
        assert_eq!(b.clamp(250.4).get(), 250);
        assert_eq!(b.clamp(250.6).get(), 251);
    }

    #[test]
    fn test_from_stored_fallbacks() {
        let b = PanelBounds::SIDEBAR;
        assert_eq!(b.from_stored(None).get(), 280);
        assert_eq!(b.from_stored(Some("")).get(), 280);
        assert_eq!(b.from_stored(Some("wide")).get(), 280);
        assert_eq!(b.from_stored(Some("NaN")).get(), 280);
        assert_eq!(b.from_stored(Some("inf")).get(), 280);
        assert_eq!(b.from_stored(Some("300px")).get(), 280);
        assert_eq!(b.from_stored(Some("1e400")).get(), 280);
        assert_eq!(b.from_stored(Some("0x")).get(), 280);
        assert_eq!(b.from_stored(Some("-0x10")).get(), 280);
        assert_eq!(b.from_stored(Some("0b102")).get(), 280);
    }

    #[test]
    fn test_from_stored_blank_reads_as_zero() {
        let b = PanelBounds::SIDEBAR;
        assert_eq!(b.from_stored(Some("   ")).get(), 220);
        assert_eq!(b.from_stored(Some("\t\n")).get(), 220);
        assert_eq!(PanelBounds::RIGHT_PANEL.from_stored(Some(" ")).get(), 200);
    }

    #[test]
    fn test_from_stored_accepts_radix_literals() {
        let b = PanelBounds::SIDEBAR;
        assert_eq!(b.from_stored(Some("0x100")).get(), 256);
        assert_eq!(b.from_stored(Some("0b11111111")).get(), 255);
        assert_eq!(b.from_stored(Some("0o777")).get(), 420);
        assert_eq!(b.from_stored(Some(" 0X12C ")).get(), 300);
    }

    #[test]
    fn test_from_stored_clamps_parsed_values() {
        let b = PanelBounds::SIDEBAR;
        assert_eq!(b.from_stored(Some("9999")).get(), 420);
        assert_eq!(b.from_stored(Some("-50")).get(), 220);
        assert_eq!(b.from_stored(Some(" 310 ")).get(), 310);
        assert_eq!(b.from_stored(Some("3e2")).get(), 300);
        assert_eq!(b.from_stored(Some("1e308")).get(), 420);
    }

    #[test]
    fn test_candidate_width_direction() {
        let start = PanelBounds::SIDEBAR.clamp(280.0);
        assert_eq!(PanelKind::Sidebar.candidate_width(start, 50.0), 330.0);
        assert_eq!(PanelKind::RightPanel.candidate_width(start, 50.0), 230.0);
    }

    #[test]
    fn test_width_formatting() {
        let w = PanelBounds::RIGHT_PANEL.default_width();
        assert_eq!(w.to_stored(), "230");
        assert_eq!(w.to_string(), "230px");
        assert_eq!(w.physical(2.0), 460.0);
    }
}
