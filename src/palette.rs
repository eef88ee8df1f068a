//! Border colors per rarity tier.

use crate::catalog::{Color, RarityTier};

/// Maps each rarity tier to a border color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderPalette {
    /// Border for common monsters.
    pub common: Color,
    /// Border for rare monsters.
    pub rare: Color,
    /// Border for epic monsters.
    pub epic: Color,
    /// Border for legendary monsters.
    pub legendary: Color,
    /// Border for any tier without an entry.
    pub fallback: Color,
}

impl Default for BorderPalette {
    fn default() -> Self {
        Self {
            common: Color::rgb(0x6b, 0x72, 0x80),
            rare: Color::rgb(0x3b, 0x82, 0xf6),
            epic: Color::rgb(0xa8, 0x55, 0xf7),
            legendary: Color::rgb(0xf5, 0x9e, 0x0b),
            fallback: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

impl BorderPalette {
    /// Border color for a tier. Unknown tiers get the fallback.
    #[must_use]
    pub fn color_for(&self, tier: &RarityTier) -> Color {
        match tier {
            RarityTier::Common => self.common,
            RarityTier::Rare => self.rare,
            RarityTier::Epic => self.epic,
            RarityTier::Legendary => self.legendary,
            RarityTier::Unknown(_) => self.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tier_colors() {
        let palette = BorderPalette::default();
        assert_eq!(palette.color_for(&RarityTier::Common).to_string(), "#6b7280");
        assert_eq!(palette.color_for(&RarityTier::Rare).to_string(), "#3b82f6");
        assert_eq!(palette.color_for(&RarityTier::Epic).to_string(), "#a855f7");
        assert_eq!(palette.color_for(&RarityTier::Legendary).to_string(), "#f59e0b");
    }

    #[test]
    fn unknown_tier_falls_back_to_white() {
        let palette = BorderPalette::default();
        let tier = RarityTier::from_name("mythic");
        assert_eq!(palette.color_for(&tier), Color::rgb(255, 255, 255));
    }
}
