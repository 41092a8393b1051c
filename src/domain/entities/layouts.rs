//! Layouts aggregate - every layout touched by one compile run

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::Layout;

/// Layouts keyed by logical name, in first-seen order
///
/// Variants of the same layout (`layout/`, `layout-land/`, ...) are merged on
/// insertion; see [`Layout::merge`] for the policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layouts {
    layouts: IndexMap<String, Layout>,
}

impl Layouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parsed variant, merging it into an existing layout of the same name
    pub fn add(&mut self, layout: Layout) {
        match self.layouts.entry(layout.name().to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().merge(layout),
            Entry::Vacant(entry) => {
                entry.insert(layout);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layouts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.layouts.values()
    }
}

impl FromIterator<Layout> for Layouts {
    fn from_iter<I: IntoIterator<Item = Layout>>(iter: I) -> Self {
        let mut layouts = Layouts::new();
        for layout in iter {
            layouts.add(layout);
        }
        layouts
    }
}

impl<'a> IntoIterator for &'a Layouts {
    type Item = &'a Layout;
    type IntoIter = indexmap::map::Values<'a, String, Layout>;

    fn into_iter(self) -> Self::IntoIter {
        self.layouts.values()
    }
}
