//! Materials, grade tiers, and the compatibility registry.

use super::runes::{Rune, RuneKind};

/// Price, level, and structural contributions of one (material, grade) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeStats {
    /// Price contribution in coins.
    pub price: u64,
    /// Level contribution (a prerequisite floor, not a cost).
    pub level: u8,
    pub hardness: u16,
    pub hit_points: u16,
    pub broken_threshold: u16,
}

impl GradeStats {
    pub fn new(price: u64, level: u8, hardness: u16, hit_points: u16, broken_threshold: u16) -> Self {
        Self {
            price,
            level,
            hardness,
            hit_points,
            broken_threshold,
        }
    }
}

/// A grade tier known to the registry, independent of any material.
///
/// Materials declare which of these tiers they support; the registry lists
/// tiers in declaration order for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeTier {
    pub key: String,
    pub id: String,
    pub label: String,
}

impl GradeTier {
    pub fn new(key: impl Into<String>, id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A crafting material and its declared grade mapping.
///
/// The grade mapping is sparse: a material only carries stats for the grades
/// it actually supports. `default_grade` must be one of the declared keys.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    pub key: String,
    pub id: String,
    pub label: String,
    /// Price contribution independent of grade; usually 0.
    pub base_price: u64,
    pub default_grade: String,
    grades: Vec<(String, GradeStats)>,
}

impl Material {
    pub fn new(
        key: impl Into<String>,
        id: impl Into<String>,
        label: impl Into<String>,
        base_price: u64,
        default_grade: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            id: id.into(),
            label: label.into(),
            base_price,
            default_grade: default_grade.into(),
            grades: Vec::new(),
        }
    }

    /// Declares a grade for this material (builder pattern). Declaration
    /// order is preserved.
    #[must_use]
    pub fn with_grade(mut self, grade_key: impl Into<String>, stats: GradeStats) -> Self {
        self.grades.push((grade_key.into(), stats));
        self
    }

    pub fn has_grade(&self, grade_key: &str) -> bool {
        self.grades.iter().any(|(key, _)| key == grade_key)
    }

    pub fn grade_stats(&self, grade_key: &str) -> Option<&GradeStats> {
        self.grades
            .iter()
            .find(|(key, _)| key == grade_key)
            .map(|(_, stats)| stats)
    }
}

/// Presentation row for a material, grade, or rune choice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierChoice {
    pub key: String,
    pub id: String,
    pub label: String,
}

/// Catalog of materials, grade tiers, and runes.
///
/// Listing operations follow declaration order (stable, not sorted), so
/// presentation layers render choices the way the data was authored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialGradeRegistry {
    materials: Vec<Material>,
    grade_tiers: Vec<GradeTier>,
    runes: Vec<Rune>,
}

impl MaterialGradeRegistry {
    pub fn new(materials: Vec<Material>, grade_tiers: Vec<GradeTier>, runes: Vec<Rune>) -> Self {
        Self {
            materials,
            grade_tiers,
            runes,
        }
    }

    pub fn material(&self, key: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.key == key)
    }

    pub fn rune(&self, key: &str) -> Option<&Rune> {
        self.runes.iter().find(|rune| rune.key == key)
    }

    /// True iff `grade_key` is a declared key of `material_key`'s grade
    /// mapping. An unknown material yields false, not an error.
    pub fn has_grade(&self, material_key: &str, grade_key: &str) -> bool {
        self.material(material_key)
            .is_some_and(|material| material.has_grade(grade_key))
    }

    /// The grade actually used for a selection: the requested key when the
    /// material declares it, otherwise the material's default grade.
    ///
    /// Callers must never assume the requested grade is the one used; every
    /// grade-dependent computation goes through here first. Returns `None`
    /// only when the material itself is unknown.
    pub fn effective_grade<'a>(&'a self, material_key: &str, grade_key: &'a str) -> Option<&'a str> {
        let material = self.material(material_key)?;
        if material.has_grade(grade_key) {
            Some(grade_key)
        } else {
            Some(material.default_grade.as_str())
        }
    }

    /// Stats for `(material, grade)` after fallback resolution.
    pub fn grade_stats(&self, material_key: &str, grade_key: &str) -> Option<&GradeStats> {
        let material = self.material(material_key)?;
        let effective = self.effective_grade(material_key, grade_key)?;
        material.grade_stats(effective)
    }

    /// All materials, in declaration order.
    pub fn list_materials(&self) -> Vec<ModifierChoice> {
        self.materials
            .iter()
            .map(|material| ModifierChoice {
                key: material.key.clone(),
                id: material.id.clone(),
                label: material.label.clone(),
            })
            .collect()
    }

    /// Grade tiers compatible with `material_key`, in declaration order.
    pub fn list_grades(&self, material_key: &str) -> Vec<ModifierChoice> {
        self.grade_tiers
            .iter()
            .filter(|tier| self.has_grade(material_key, &tier.key))
            .map(|tier| ModifierChoice {
                key: tier.key.clone(),
                id: tier.id.clone(),
                label: tier.label.clone(),
            })
            .collect()
    }

    /// Runes of one kind, in declaration order.
    pub fn list_runes(&self, kind: RuneKind) -> Vec<ModifierChoice> {
        self.runes
            .iter()
            .filter(|rune| rune.kind == kind)
            .map(|rune| ModifierChoice {
                key: rune.key.clone(),
                id: rune.id.clone(),
                label: rune.label.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MaterialGradeRegistry {
        MaterialGradeRegistry::new(
            vec![
                Material::new("cold-iron", "mat-cold-iron", "Cold Iron", 0, "standard")
                    .with_grade("standard", GradeStats::new(40, 2, 5, 20, 10))
                    .with_grade("high", GradeStats::new(880, 10, 7, 28, 14)),
                Material::new("orichalcum", "mat-orichalcum", "Orichalcum", 0, "high")
                    .with_grade("high", GradeStats::new(55_000, 20, 16, 64, 32)),
            ],
            vec![
                GradeTier::new("standard", "grd-standard", "Standard-grade"),
                GradeTier::new("high", "grd-high", "High-grade"),
            ],
            vec![],
        )
    }

    #[test]
    fn declared_grade_is_used_verbatim() {
        let registry = registry();
        assert!(registry.has_grade("cold-iron", "high"));
        assert_eq!(registry.effective_grade("cold-iron", "high"), Some("high"));
    }

    #[test]
    fn undeclared_grade_falls_back_to_default() {
        let registry = registry();
        assert!(!registry.has_grade("cold-iron", "masterwork"));
        assert_eq!(
            registry.effective_grade("cold-iron", "masterwork"),
            Some("standard")
        );
        // fallback resolves to the default grade's stats, never an error
        assert_eq!(
            registry.grade_stats("cold-iron", "masterwork"),
            registry.grade_stats("cold-iron", "standard")
        );
    }

    #[test]
    fn unknown_material_has_no_grades() {
        let registry = registry();
        assert!(!registry.has_grade("mithral", "standard"));
        assert_eq!(registry.effective_grade("mithral", "standard"), None);
        assert!(registry.list_grades("mithral").is_empty());
    }

    #[test]
    fn grade_listing_filters_by_compatibility() {
        let registry = registry();
        let grades: Vec<_> = registry
            .list_grades("orichalcum")
            .into_iter()
            .map(|choice| choice.key)
            .collect();
        assert_eq!(grades, vec!["high".to_string()]);
    }

    #[test]
    fn listings_preserve_declaration_order() {
        let registry = registry();
        let materials: Vec<_> = registry
            .list_materials()
            .into_iter()
            .map(|choice| choice.key)
            .collect();
        assert_eq!(materials, vec!["cold-iron".to_string(), "orichalcum".to_string()]);
    }
}
