//! Accumulation duration catalog.

use crate::error::CatalogError;

/// An accumulation duration from the fixed IDF catalog.
///
/// Each duration maps to a rolling-window length in whole days.
/// Labels in hours convert by integer division by 24 (so `24-hr` is a
/// 1-day window); labels in days are the window length directly. The
/// mapping lives here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Duration {
    /// 24-hour accumulation (1-day window).
    Hr24,
    /// 2-day accumulation.
    Day2,
    /// 3-day accumulation.
    Day3,
    /// 4-day accumulation.
    Day4,
    /// 7-day accumulation.
    Day7,
    /// 10-day accumulation.
    Day10,
    /// 20-day accumulation.
    Day20,
    /// 30-day accumulation.
    Day30,
    /// 45-day accumulation.
    Day45,
    /// 60-day accumulation.
    Day60,
}

impl Duration {
    /// The full catalog, in window-length order.
    pub const ALL: [Duration; 10] = [
        Duration::Hr24,
        Duration::Day2,
        Duration::Day3,
        Duration::Day4,
        Duration::Day7,
        Duration::Day10,
        Duration::Day20,
        Duration::Day30,
        Duration::Day45,
        Duration::Day60,
    ];

    /// Returns the display label (`24-hr`, `2-day`, ...).
    pub fn label(&self) -> &'static str {
        match self {
            Duration::Hr24 => "24-hr",
            Duration::Day2 => "2-day",
            Duration::Day3 => "3-day",
            Duration::Day4 => "4-day",
            Duration::Day7 => "7-day",
            Duration::Day10 => "10-day",
            Duration::Day20 => "20-day",
            Duration::Day30 => "30-day",
            Duration::Day45 => "45-day",
            Duration::Day60 => "60-day",
        }
    }

    /// Returns the rolling-window length in whole days.
    ///
    /// Hour labels truncate by integer division by 24.
    pub fn window_days(&self) -> usize {
        match self {
            Duration::Hr24 => 24 / 24,
            Duration::Day2 => 2,
            Duration::Day3 => 3,
            Duration::Day4 => 4,
            Duration::Day7 => 7,
            Duration::Day10 => 10,
            Duration::Day20 => 20,
            Duration::Day30 => 30,
            Duration::Day45 => 45,
            Duration::Day60 => 60,
        }
    }

    /// Parses a catalog label back into a `Duration`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownDuration`] for labels outside the
    /// catalog.
    pub fn from_label(label: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label() == label)
            .ok_or_else(|| CatalogError::UnknownDuration {
                label: label.to_string(),
            })
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
