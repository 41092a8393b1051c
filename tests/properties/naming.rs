//! Property tests for holder class and field naming.

use proptest::prelude::*;

use holdr::domain::entities::View;
use holdr::domain::services::{HolderGenerator, CLASS_SUFFIX};

fn layout_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,8}(_[a-z0-9]{1,8}){0,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `class_name_for` is pure.
    #[test]
    fn property_class_name_is_pure(name in "(?s).{0,64}") {
        prop_assert_eq!(
            HolderGenerator::class_name_for(&name),
            HolderGenerator::class_name_for(&name)
        );
    }

    /// PROPERTY: class names of snake_case layouts are valid Java identifiers
    /// ending in the holder suffix.
    #[test]
    fn property_class_name_is_identifier(name in layout_name()) {
        let class = HolderGenerator::class_name_for(&name);

        prop_assert!(class.ends_with(CLASS_SUFFIX));
        prop_assert!(class.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(!class.starts_with(|c: char| c.is_ascii_digit()));
        prop_assert!(class.starts_with(|c: char| c.is_ascii_uppercase()));
        prop_assert!(!class.trim_end_matches(CLASS_SUFFIX).contains('_'));
    }

    /// PROPERTY: field names never contain separators and never start with a digit.
    #[test]
    fn property_field_name_is_identifier(id in "[a-z0-9]{1,8}(_[a-z0-9]{1,8}){0,3}") {
        let field = HolderGenerator::field_name_for(&View::new("android.view.View", id.as_str()));

        prop_assert!(!field.is_empty());
        prop_assert!(!field.starts_with(|c: char| c.is_ascii_digit()));
        prop_assert!(field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}
