//! Rune modifiers.

/// Whether a rune is a potency rune or a fundamental property rune.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RuneKind {
    Potency,
    Fundamental,
}

/// A rune etched onto a crafted item.
///
/// Runes contribute price additively and impose a minimum item level; they
/// never reduce either.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rune {
    pub key: String,
    pub id: String,
    pub label: String,
    pub kind: RuneKind,
    pub tier: u8,
    /// Price contribution in coins.
    pub price: u64,
    /// Minimum level of any item carrying this rune.
    pub level: u8,
}

impl Rune {
    pub fn new(
        key: impl Into<String>,
        id: impl Into<String>,
        label: impl Into<String>,
        kind: RuneKind,
        tier: u8,
        price: u64,
        level: u8,
    ) -> Self {
        Self {
            key: key.into(),
            id: id.into(),
            label: label.into(),
            kind,
            tier,
            price,
            level,
        }
    }
}
