//! Property tests for the layout parser.

use proptest::prelude::*;

use holdr::domain::services::{LayoutParser, ANDROID_NS};

fn id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The parser never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(source in "(?s).{0,256}") {
        let _ = LayoutParser::default().parse("fuzz", &source);
    }

    /// PROPERTY: Every element with a distinct id becomes a view, in document order.
    #[test]
    fn property_ids_in_document_order(ids in proptest::collection::btree_set(id(), 0..8)) {
        let body: String = ids
            .iter()
            .map(|id| format!(r#"<TextView android:id="@+id/{id}"/>"#))
            .collect();
        let source = format!(r#"<LinearLayout xmlns:android="{ANDROID_NS}">{body}</LinearLayout>"#);

        let layout = LayoutParser::default().parse("main", &source).unwrap();
        let parsed: Vec<&str> = layout.views().iter().map(|v| v.id()).collect();

        prop_assert_eq!(parsed, ids.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// PROPERTY: A layout never holds two views with the same id.
    #[test]
    fn property_ids_are_unique(ids in proptest::collection::vec(id(), 0..12)) {
        let body: String = ids
            .iter()
            .map(|id| format!(r#"<TextView android:id="@+id/{id}"/>"#))
            .collect();
        let source = format!(r#"<LinearLayout xmlns:android="{ANDROID_NS}">{body}</LinearLayout>"#);

        let layout = LayoutParser::default().parse("main", &source).unwrap();
        let unique: std::collections::HashSet<&str> = layout.views().iter().map(|v| v.id()).collect();

        prop_assert_eq!(unique.len(), layout.views().len());
        prop_assert_eq!(unique.len(), ids.iter().collect::<std::collections::HashSet<_>>().len());
    }
}
