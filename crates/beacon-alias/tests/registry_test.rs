//! Standard registry behaviour across the catalog and generated families.

use beacon_alias::{AliasRegistry, Coercer};
use beacon_core::errors::AliasError;
use beacon_core::{ParamValue, Value};

#[test]
fn standard_registry_resolves_common_aliases() {
    let registry = AliasRegistry::shared();
    let cases = [
        ("page", "dp"),
        ("eventCategory", "ec"),
        ("category", "ec"),
        ("campaignSource", "cs"),
        ("screenName", "cd"),
        ("sku", "ic"),
        ("exFatal", "exf"),
        ("dimension7", "cd7"),
        ("metric12", "cm12"),
        ("account", "tid"),
    ];
    for (name, wire_code) in cases {
        assert_eq!(registry.resolve_name(name).unwrap(), wire_code, "{name}");
    }
}

#[test]
fn custom_metric_coerces_to_integer() {
    let registry = AliasRegistry::shared();
    let (code, value) = registry.resolve("metric3", &Value::from("17")).unwrap();
    assert_eq!(code, "cm3");
    assert_eq!(value, ParamValue::Int(17));
}

#[test]
fn coercion_failure_names_the_wire_code() {
    let registry = AliasRegistry::shared();
    let err = registry.resolve("eventValue", &Value::from("lots")).unwrap_err();
    assert_eq!(
        err,
        AliasError::CoercionFailed {
            param: "ev".to_string(),
            value: "lots".to_string(),
            expected: "integer",
        }
    );
}

#[test]
fn unknown_names_are_rejected() {
    let registry = AliasRegistry::shared();
    for name in ["pageview", "dimension200", "Page", "x-custom"] {
        let err = registry.resolve(name, &Value::from("v")).unwrap_err();
        assert!(err.is_unknown_parameter(), "{name}");
    }
}

#[test]
fn names_for_lists_every_alias_of_a_wire_code() {
    let registry = AliasRegistry::shared();
    assert_eq!(
        registry.names_for("dt"),
        vec!["dt", "page-title", "pageTitle", "pagetitle", "title"]
    );
}

#[test]
fn enhanced_ecommerce_keys_resolve_to_themselves() {
    let registry = AliasRegistry::shared();
    let (code, value) = registry.resolve("pr3qt", &Value::from(2.0)).unwrap();
    assert_eq!(code, "pr3qt");
    assert_eq!(value, ParamValue::Int(2));
    assert_eq!(registry.alias("il2pi4cd9").unwrap().coercer, Coercer::Text);
}
