//! Layout entity - the view model of one logical layout

use super::View;

/// A named layout and the Views it declares, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Logical layout name (file stem, shared by all variants)
    name: String,
    views: Vec<View>,
}

impl Layout {
    pub fn new(name: impl Into<String>, views: Vec<View>) -> Self {
        Self {
            name: name.into(),
            views,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Find a view by its stripped id
    pub fn view(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|v| v.id() == id)
    }

    /// Merge another variant of this layout into `self`
    ///
    /// Views are unioned by id. A view whose id is already present is
    /// dropped, so the first variant wins on conflicting type or field name.
    pub(crate) fn merge(&mut self, other: Layout) {
        for view in other.views {
            self.push(view);
        }
    }

    /// Append `view` unless its id is already present; returns whether it was added
    pub(crate) fn push(&mut self, view: View) -> bool {
        if self.view(view.id()).is_some() {
            return false;
        }
        self.views.push(view);
        true
    }
}
