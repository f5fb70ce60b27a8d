//! Built-in crafting modifier catalog.
//!
//! Declaration order here is presentation order: the registry lists
//! materials, grades, and runes exactly as they are declared below.

use loot_core::{GradeStats, GradeTier, Material, MaterialGradeRegistry, Rune, RuneKind};

/// Grade tiers known to the built-in catalog.
pub fn builtin_grade_tiers() -> Vec<GradeTier> {
    vec![
        GradeTier::new("low", "grd-low", "Low-grade"),
        GradeTier::new("standard", "grd-standard", "Standard-grade"),
        GradeTier::new("high", "grd-high", "High-grade"),
    ]
}

/// Built-in precious materials.
///
/// Grade mappings are sparse on purpose: cheap materials stop at high-grade,
/// orichalcum exists only at high-grade. Each material's default grade must
/// be one of its declared grades.
pub fn builtin_materials() -> Vec<Material> {
    vec![
        Material::new("cold-iron", "mat-cold-iron", "Cold Iron", 0, "standard")
            .with_grade("low", GradeStats::new(40, 2, 5, 20, 10))
            .with_grade("standard", GradeStats::new(880, 10, 7, 28, 14))
            .with_grade("high", GradeStats::new(9_000, 16, 10, 40, 20)),
        Material::new("silver", "mat-silver", "Silver", 0, "standard")
            .with_grade("low", GradeStats::new(20, 2, 3, 12, 6))
            .with_grade("standard", GradeStats::new(440, 8, 5, 20, 10))
            .with_grade("high", GradeStats::new(9_000, 16, 8, 32, 16)),
        Material::new("darkwood", "mat-darkwood", "Darkwood", 0, "standard")
            .with_grade("standard", GradeStats::new(1_400, 11, 5, 20, 10))
            .with_grade("high", GradeStats::new(13_500, 17, 8, 32, 16)),
        Material::new("dragonhide", "mat-dragonhide", "Dragonhide", 0, "standard")
            .with_grade("standard", GradeStats::new(1_400, 11, 4, 16, 8))
            .with_grade("high", GradeStats::new(19_000, 18, 7, 28, 14)),
        Material::new("mithral", "mat-mithral", "Mithral", 0, "standard")
            .with_grade("standard", GradeStats::new(1_400, 11, 5, 20, 10))
            .with_grade("high", GradeStats::new(13_500, 17, 9, 36, 18)),
        Material::new("adamantine", "mat-adamantine", "Adamantine", 0, "standard")
            .with_grade("standard", GradeStats::new(1_400, 11, 10, 40, 20))
            .with_grade("high", GradeStats::new(13_500, 17, 13, 52, 26)),
        Material::new("orichalcum", "mat-orichalcum", "Orichalcum", 0, "high")
            .with_grade("high", GradeStats::new(55_000, 20, 16, 64, 32)),
    ]
}

/// Built-in weapon and armor runes.
pub fn builtin_runes() -> Vec<Rune> {
    vec![
        // weapon potency
        Rune::new("potency-1", "rune-potency-1", "Weapon Potency (+1)", RuneKind::Potency, 1, 35, 2),
        Rune::new("potency-2", "rune-potency-2", "Weapon Potency (+2)", RuneKind::Potency, 2, 935, 10),
        Rune::new("potency-3", "rune-potency-3", "Weapon Potency (+3)", RuneKind::Potency, 3, 8_935, 16),
        // armor potency
        Rune::new("armor-potency-1", "rune-armor-potency-1", "Armor Potency (+1)", RuneKind::Potency, 1, 160, 5),
        Rune::new("armor-potency-2", "rune-armor-potency-2", "Armor Potency (+2)", RuneKind::Potency, 2, 1_060, 11),
        Rune::new("armor-potency-3", "rune-armor-potency-3", "Armor Potency (+3)", RuneKind::Potency, 3, 20_560, 18),
        // weapon fundamentals
        Rune::new("striking", "rune-striking", "Striking", RuneKind::Fundamental, 1, 65, 4),
        Rune::new("greater-striking", "rune-greater-striking", "Greater Striking", RuneKind::Fundamental, 2, 1_065, 12),
        Rune::new("major-striking", "rune-major-striking", "Major Striking", RuneKind::Fundamental, 3, 31_065, 19),
        // armor fundamentals
        Rune::new("resilient", "rune-resilient", "Resilient", RuneKind::Fundamental, 1, 340, 8),
        Rune::new("greater-resilient", "rune-greater-resilient", "Greater Resilient", RuneKind::Fundamental, 2, 3_440, 14),
        Rune::new("major-resilient", "rune-major-resilient", "Major Resilient", RuneKind::Fundamental, 3, 49_440, 20),
    ]
}

/// The complete built-in registry.
pub fn builtin_registry() -> MaterialGradeRegistry {
    MaterialGradeRegistry::new(builtin_materials(), builtin_grade_tiers(), builtin_runes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_grade_is_declared() {
        for material in builtin_materials() {
            assert!(
                material.has_grade(&material.default_grade),
                "{} defaults to undeclared grade {}",
                material.key,
                material.default_grade
            );
        }
    }

    #[test]
    fn every_declared_grade_is_a_known_tier() {
        let registry = builtin_registry();
        let tiers: Vec<String> = builtin_grade_tiers()
            .into_iter()
            .map(|tier| tier.key)
            .collect();
        for material in builtin_materials() {
            for tier_key in &tiers {
                // compatibility is queryable for every (material, tier) pair
                let _ = registry.has_grade(&material.key, tier_key);
            }
            let listed = registry.list_grades(&material.key);
            assert!(!listed.is_empty(), "{} lists no grades", material.key);
            for choice in listed {
                assert!(tiers.contains(&choice.key));
            }
        }
    }

    #[test]
    fn orichalcum_only_comes_high_grade() {
        let registry = builtin_registry();
        assert!(!registry.has_grade("orichalcum", "standard"));
        assert_eq!(
            registry.effective_grade("orichalcum", "standard"),
            Some("high")
        );
    }

    #[test]
    fn materials_list_in_declaration_order() {
        let registry = builtin_registry();
        let keys: Vec<String> = registry
            .list_materials()
            .into_iter()
            .map(|choice| choice.key)
            .collect();
        assert_eq!(keys[0], "cold-iron");
        assert_eq!(keys[1], "silver");
        assert_eq!(*keys.last().unwrap(), "orichalcum");
    }

    #[test]
    fn runes_split_by_kind() {
        let registry = builtin_registry();
        let potency = registry.list_runes(RuneKind::Potency);
        let fundamental = registry.list_runes(RuneKind::Fundamental);
        assert_eq!(potency.len(), 6);
        assert_eq!(fundamental.len(), 6);
        assert!(registry.rune("striking").is_some());
        assert!(registry.rune("dancing").is_none());
    }
}
