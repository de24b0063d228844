//! Heat-intensity rating for spices.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error converting a raw number into a [`HeatLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heat level must be between 1 and 5, got {0}")]
pub struct HeatLevelError(pub u8);

/// Heat-intensity rating on the 1-5 scale shown on product pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    Mild,
    Medium,
    Hot,
    VeryHot,
    Extreme,
}

impl HeatLevel {
    /// The customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Medium => "Medium",
            Self::Hot => "Hot",
            Self::VeryHot => "Very Hot",
            Self::Extreme => "Extreme",
        }
    }

    /// The numeric rating (1-5).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Mild => 1,
            Self::Medium => 2,
            Self::Hot => 3,
            Self::VeryHot => 4,
            Self::Extreme => 5,
        }
    }
}

impl fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for HeatLevel {
    type Error = HeatLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Mild),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hot),
            4 => Ok(Self::VeryHot),
            5 => Ok(Self::Extreme),
            other => Err(HeatLevelError(other)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(HeatLevel::Mild.label(), "Mild");
        assert_eq!(HeatLevel::VeryHot.label(), "Very Hot");
        assert_eq!(HeatLevel::Extreme.label(), "Extreme");
    }

    #[test]
    fn test_try_from_valid() {
        for n in 1..=5u8 {
            let level = HeatLevel::try_from(n).unwrap();
            assert_eq!(level.as_u8(), n);
        }
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(HeatLevel::try_from(0), Err(HeatLevelError(0)));
        assert_eq!(HeatLevel::try_from(6), Err(HeatLevelError(6)));
    }

    #[test]
    fn test_ordering_follows_intensity() {
        assert!(HeatLevel::Mild < HeatLevel::Hot);
        assert!(HeatLevel::Hot < HeatLevel::Extreme);
    }
}
