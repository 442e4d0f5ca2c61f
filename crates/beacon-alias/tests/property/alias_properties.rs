use beacon_alias::AliasRegistry;
use beacon_core::Value;
use proptest::prelude::*;

const SHARED_CODES: &[&str] = &["dp", "dt", "ec", "ea", "ev", "tr", "iq", "utt", "cd", "cn", "exf"];

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        ".{0,24}".prop_map(Value::Text),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
    ]
}

proptest! {
    #[test]
    fn aliases_of_one_wire_code_resolve_identically(value in scalar(), idx in 0..SHARED_CODES.len()) {
        let registry = AliasRegistry::shared();
        let code = SHARED_CODES[idx];
        let expected = registry.resolve(code, &value);
        for name in registry.names_for(code) {
            prop_assert_eq!(&registry.resolve(name, &value), &expected);
        }
    }

    #[test]
    fn raw_override_sends_key_and_text_verbatim(key in "[a-zA-Z0-9_]{1,16}", value in scalar()) {
        let registry = AliasRegistry::shared();
        let (code, coerced) = registry.resolve(&format!("&{key}"), &value).unwrap();
        prop_assert_eq!(code, key);
        prop_assert_eq!(coerced.to_string(), value.to_string());
    }

    #[test]
    fn dimension_index_maps_to_cd_index(i in 0usize..200, text in "[a-z]{0,8}") {
        let registry = AliasRegistry::shared();
        let (code, coerced) = registry.resolve(&format!("dimension{i}"), &Value::from(text.as_str())).unwrap();
        prop_assert_eq!(code, format!("cd{i}"));
        prop_assert_eq!(coerced.to_string(), text);
    }
}
