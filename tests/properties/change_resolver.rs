//! Property tests for change propagation across variant directories.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;

use holdr::domain::services::ChangeResolver;
use holdr::infrastructure::MemoryFs;

const VARIANTS: &[&str] = &["layout", "layout-land", "layout-sw600dp", "layout-v21"];
const NAMES: &[&str] = &["main", "detail", "item_row"];

/// Random subset of (variant, name) pairs present on disk
fn tree() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..VARIANTS.len(), 0..NAMES.len()), 0..12)
}

fn path(variant: usize, name: usize) -> PathBuf {
    PathBuf::from(format!("res/{}/{}.xml", VARIANTS[variant], NAMES[name]))
}

fn memory_fs(files: &[(usize, usize)]) -> MemoryFs {
    let paths: Vec<String> = files
        .iter()
        .map(|(v, n)| path(*v, *n).display().to_string())
        .collect();
    let seeded: Vec<(&str, &str)> = paths.iter().map(|p| (p.as_str(), "<a/>")).collect();
    MemoryFs::with_files(&seeded)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The recompile set never holds duplicates or removed files,
    /// and always holds every changed layout file.
    #[test]
    fn property_recompile_set_is_clean(
        files in tree(),
        changed in proptest::collection::vec((0..VARIANTS.len(), 0..NAMES.len()), 0..4),
        removed in proptest::collection::vec((0..VARIANTS.len(), 0..NAMES.len()), 0..4),
    ) {
        let fs = memory_fs(&files);
        let changed: Vec<PathBuf> = changed.iter().map(|(v, n)| path(*v, *n)).collect();
        let removed: Vec<PathBuf> = removed.iter().map(|(v, n)| path(*v, *n)).collect();

        let set = ChangeResolver::new(&fs)
            .resolve_files_to_recompile(&changed, &removed)
            .unwrap()
            .into_vec();

        let unique: HashSet<&PathBuf> = set.iter().collect();
        prop_assert_eq!(unique.len(), set.len());
        for file in &removed {
            prop_assert!(!set.contains(file));
        }
        for file in changed.iter().filter(|f| !removed.contains(f)) {
            prop_assert!(set.contains(file));
        }
    }

    /// PROPERTY: Every file in the recompile set shares a name with a touched file.
    #[test]
    fn property_recompile_set_stays_within_touched_names(
        files in tree(),
        changed in proptest::collection::vec((0..VARIANTS.len(), 0..NAMES.len()), 1..3),
    ) {
        let fs = memory_fs(&files);
        let changed: Vec<PathBuf> = changed.iter().map(|(v, n)| path(*v, *n)).collect();
        let names: HashSet<_> = changed.iter().map(|f| f.file_name().map(|n| n.to_owned())).collect();

        let set = ChangeResolver::new(&fs)
            .resolve_files_to_recompile(&changed, &[])
            .unwrap();

        for file in &set {
            prop_assert!(names.contains(&file.file_name().map(|n| n.to_owned())));
        }
    }
}
