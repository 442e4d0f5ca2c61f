//! Indexed parameter families: custom definitions and enhanced e-commerce.
//!
//! These exist only so every legal indexed wire key is recognized. They are
//! generated from the slot bounds in `beacon_core::constants`.

use beacon_core::constants::{
    MAX_CUSTOM_DEFINITIONS, MAX_EC_LISTS, MAX_EC_PRODUCTS, MAX_EC_PROMOTIONS,
};

use crate::coerce::Coercer::{self, Integer, Text};
use crate::registry::AliasRegistry;

/// Product fields, `pr{p}{suffix}`.
const PRODUCT_FIELDS: &[(Coercer, &str)] = &[
    (Text, "id"),
    (Text, "nm"),
    (Text, "br"),
    (Text, "ca"),
    (Text, "va"),
    (Text, "pr"),
    (Integer, "qt"),
    (Text, "cc"),
    (Integer, "ps"),
];

/// Product impression fields, `il{l}pi{p}{suffix}`.
const IMPRESSION_FIELDS: &[(Coercer, &str)] = &[
    (Text, "id"),
    (Text, "nm"),
    (Text, "br"),
    (Text, "ca"),
    (Text, "va"),
    (Integer, "ps"),
    (Integer, "pr"),
];

/// Promotion fields, `promo{n}{suffix}`.
const PROMOTION_FIELDS: &[&str] = &["id", "nm", "cr", "ps"];

/// Enhanced e-commerce action parameters without an index.
const ACTION_FIELDS: &[(Coercer, &str)] = &[
    (Text, "pa"),
    (Text, "tcc"),
    (Text, "pal"),
    (Integer, "cos"),
    (Text, "col"),
    (Text, "promoa"),
];

pub fn register_families(registry: &mut AliasRegistry) {
    register_custom_definitions(registry);
    register_enhanced_ecommerce(registry);
}

/// `dimension{i}` → `cd{i}` (text) and `metric{i}` → `cm{i}` (integer).
fn register_custom_definitions(registry: &mut AliasRegistry) {
    for i in 0..MAX_CUSTOM_DEFINITIONS {
        let dimension = format!("dimension{i}");
        let metric = format!("metric{i}");
        registry.register(Text, &format!("cd{i}"), &[dimension.as_str()]);
        registry.register(Integer, &format!("cm{i}"), &[metric.as_str()]);
    }
}

fn register_enhanced_ecommerce(registry: &mut AliasRegistry) {
    for (coercer, code) in ACTION_FIELDS {
        registry.register(*coercer, code, &[]);
    }

    for product in 1..=MAX_EC_PRODUCTS {
        let prefix = format!("pr{product}");
        for (coercer, suffix) in PRODUCT_FIELDS {
            registry.register(*coercer, &format!("{prefix}{suffix}"), &[]);
        }
        register_custom_slots(registry, &prefix);

        for list in 1..=MAX_EC_LISTS {
            let prefix = format!("il{list}pi{product}");
            for (coercer, suffix) in IMPRESSION_FIELDS {
                registry.register(*coercer, &format!("{prefix}{suffix}"), &[]);
            }
            register_custom_slots(registry, &prefix);
        }
    }

    for list in 1..=MAX_EC_LISTS {
        registry.register(Text, &format!("il{list}nm"), &[]);
    }

    for promotion in 1..=MAX_EC_PROMOTIONS {
        for suffix in PROMOTION_FIELDS {
            registry.register(Text, &format!("promo{promotion}{suffix}"), &[]);
        }
    }
}

/// Per-product custom dimension (`{prefix}cd{c}`) and metric (`{prefix}cm{c}`).
fn register_custom_slots(registry: &mut AliasRegistry, prefix: &str) {
    for custom in 0..MAX_CUSTOM_DEFINITIONS {
        registry.register(Text, &format!("{prefix}cd{custom}"), &[]);
        registry.register(Integer, &format!("{prefix}cm{custom}"), &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn families() -> AliasRegistry {
        let mut registry = AliasRegistry::new();
        register_families(&mut registry);
        registry
    }

    #[test]
    fn family_bounds_are_inclusive_of_last_slot() {
        let registry = families();
        for present in [
            "cd0", "cd199", "dimension199", "metric0", "pr1id", "pr10ps", "pr10cm199",
            "il10pi10pr", "il1pi1cd0", "il10nm", "promo10cr", "promoa", "cos",
        ] {
            assert!(registry.contains(present), "{present} should be registered");
        }
        for absent in ["cd200", "metric200", "pr0id", "pr11id", "il11nm", "il1pi11id", "promo11id", "pr1cd200"] {
            assert!(!registry.contains(absent), "{absent} should not be registered");
        }
    }

    #[test]
    fn family_size_matches_slot_bounds() {
        let custom = 2 * 2 * MAX_CUSTOM_DEFINITIONS;
        let per_custom_slots = 2 * MAX_CUSTOM_DEFINITIONS;
        let products = MAX_EC_PRODUCTS
            * (PRODUCT_FIELDS.len()
                + per_custom_slots
                + MAX_EC_LISTS * (IMPRESSION_FIELDS.len() + per_custom_slots));
        let expected = custom
            + ACTION_FIELDS.len()
            + products
            + MAX_EC_LISTS
            + MAX_EC_PROMOTIONS * PROMOTION_FIELDS.len();
        assert_eq!(families().len(), expected);
    }

    #[test]
    fn impression_price_is_integer_but_product_price_is_text() {
        let registry = families();
        assert_eq!(registry.alias("il1pi1pr").unwrap().coercer, Integer);
        assert_eq!(registry.alias("pr1pr").unwrap().coercer, Text);
    }
}
