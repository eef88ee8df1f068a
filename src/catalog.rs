//! Monster descriptors and the roster they are drawn from.

use std::collections::HashSet;
use std::fmt;

use image::Rgba;

use crate::error::SpriteError;

/// The built-in roster: identifier, base color, rarity tier.
const BUILTIN_MONSTERS: &[(&str, &str, &str)] = &[
    ("feuerdrache", "#ff4444", "common"),
    ("waldgeist", "#44aa44", "common"),
    ("blitzwolf", "#ffff44", "common"),
    ("steingigant", "#888888", "common"),
    ("wasserschlange", "#4444ff", "common"),
    ("kristallbaer", "#ff44ff", "rare"),
    ("schattenrabe", "#444444", "rare"),
    ("flammenphoenix", "#ff8800", "rare"),
    ("eiswaechter", "#88ffff", "rare"),
    ("sternendrache", "#ffaa00", "epic"),
    ("urzeittytan", "#aa8844", "epic"),
    ("geisterherr", "#aa44aa", "epic"),
    ("regenbogeneinhorn", "#ff88ff", "legendary"),
    ("kosmosdrache", "#4488ff", "legendary"),
    ("zeitwaechter", "#ffaa88", "legendary"),
];

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Build a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string. The leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteError::InvalidColor`] unless the input is exactly six hex digits.
    pub fn from_hex(value: &str) -> Result<Self, SpriteError> {
        let invalid = |reason: &str| SpriteError::InvalidColor {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected six hex digits"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| invalid(&e.to_string()))
        };
        Ok(Self { r: channel(0..2)?, g: channel(2..4)?, b: channel(4..6)? })
    }

    /// Opaque RGBA pixel of this color.
    #[must_use]
    pub const fn opaque(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Game-balance classification; only decides the border color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RarityTier {
    /// Common.
    Common,
    /// Rare.
    Rare,
    /// Epic.
    Epic,
    /// Legendary.
    Legendary,
    /// A tier name this build does not know about.
    Unknown(String),
}

impl RarityTier {
    /// Map a tier name onto a tier. Never fails: unrecognized names are kept as [`RarityTier::Unknown`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "common" => Self::Common,
            "rare" => Self::Rare,
            "epic" => Self::Epic,
            "legendary" => Self::Legendary,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The tier's name as written in catalogs.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Unknown(name) => name,
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterDescriptor {
    /// Lowercase ASCII identifier; doubles as the output file stem.
    pub identifier: String,
    /// Color at the center of the gradient.
    pub base_color: Color,
    /// Tier selecting the border color.
    pub rarity: RarityTier,
}

impl MonsterDescriptor {
    /// Build a descriptor from its catalog representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `color` is not a valid `#RRGGBB` string.
    pub fn parse(identifier: &str, color: &str, rarity: &str) -> Result<Self, SpriteError> {
        Ok(Self {
            identifier: identifier.to_string(),
            base_color: Color::from_hex(color)?,
            rarity: RarityTier::from_name(rarity),
        })
    }
}

/// An ordered, validated list of descriptors processed in one run.
#[derive(Debug, Clone)]
pub struct Catalog {
    monsters: Vec<MonsterDescriptor>,
}

impl Catalog {
    /// Validate and wrap a list of descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`SpriteError::InvalidCatalog`] if an identifier is empty, contains
    /// characters outside `a-z0-9_-`, or appears more than once.
    pub fn new(monsters: Vec<MonsterDescriptor>) -> Result<Self, SpriteError> {
        let mut seen = HashSet::new();
        for monster in &monsters {
            validate_identifier(&monster.identifier)?;
            if !seen.insert(monster.identifier.as_str()) {
                return Err(SpriteError::InvalidCatalog(format!(
                    "duplicate identifier '{}'",
                    monster.identifier
                )));
            }
        }
        Ok(Self { monsters })
    }

    /// The roster compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the compiled-in table itself is malformed.
    pub fn builtin() -> Result<Self, SpriteError> {
        let monsters = BUILTIN_MONSTERS
            .iter()
            .map(|&(identifier, color, rarity)| MonsterDescriptor::parse(identifier, color, rarity))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(monsters)
    }

    /// Iterate descriptors in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, MonsterDescriptor> {
        self.monsters.iter()
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MonsterDescriptor;
    type IntoIter = std::slice::Iter<'a, MonsterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_identifier(identifier: &str) -> Result<(), SpriteError> {
    if identifier.is_empty() {
        return Err(SpriteError::InvalidCatalog("empty identifier".to_string()));
    }
    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-';
    if let Some(bad) = identifier.chars().find(|&c| !allowed(c)) {
        return Err(SpriteError::InvalidCatalog(format!(
            "identifier '{identifier}' contains '{bad}'; use lowercase ASCII letters, digits, '_' or '-'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#ff4444").unwrap(), Color::rgb(0xff, 0x44, 0x44));
        assert_eq!(Color::from_hex("44AA44").unwrap(), Color::rgb(0x44, 0xaa, 0x44));
    }

    #[test]
    fn hex_rejects_malformed() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#ff44445").is_err());
        assert!(Color::from_hex("#ÿÿÿ").is_err());
        assert!(Color::from_hex("#+f+f+f").is_err());
    }

    #[test]
    fn color_display_is_lower_hex() {
        assert_eq!(Color::rgb(0x3b, 0x82, 0xf6).to_string(), "#3b82f6");
    }

    #[test]
    fn tier_names() {
        assert_eq!(RarityTier::from_name("epic"), RarityTier::Epic);
        assert_eq!(RarityTier::from_name("mythic"), RarityTier::Unknown("mythic".into()));
        assert_eq!(RarityTier::from_name("mythic").name(), "mythic");
        assert_eq!(RarityTier::Legendary.name(), "legendary");
    }

    #[test]
    fn builtin_roster() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 15);

        let first = catalog.iter().next().unwrap();
        assert_eq!(first.identifier, "feuerdrache");
        assert_eq!(first.base_color, Color::rgb(0xff, 0x44, 0x44));
        assert_eq!(first.rarity, RarityTier::Common);

        let legendary = catalog.iter().filter(|m| m.rarity == RarityTier::Legendary).count();
        assert_eq!(legendary, 3);
        assert!(catalog.iter().all(|m| !matches!(m.rarity, RarityTier::Unknown(_))));
    }

    #[test]
    fn duplicate_identifier_rejected() {
        let a = MonsterDescriptor::parse("blitzwolf", "#ffff44", "common").unwrap();
        let err = Catalog::new(vec![a.clone(), a]).unwrap_err();
        assert!(err.to_string().contains("duplicate identifier 'blitzwolf'"));
    }

    #[test]
    fn bad_identifiers_rejected() {
        for identifier in ["", "Blitzwolf", "../escape", "wolf.png", "wölf"] {
            let monster = MonsterDescriptor {
                identifier: identifier.to_string(),
                base_color: Color::rgb(0, 0, 0),
                rarity: RarityTier::Common,
            };
            assert!(Catalog::new(vec![monster]).is_err(), "accepted {identifier:?}");
        }
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
