//! View entity - one included element of a layout

/// A layout element that gets an accessor in the generated holder
///
/// Only elements with an id that are not ignored become Views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Fully-qualified widget class, e.g. `android.widget.TextView`
    view_type: String,
    /// Identifier with the resource-reference prefix stripped
    id: String,
    /// Identifier belongs to the framework (`@android:id/...`)
    android_id: bool,
    /// Explicit accessor name override
    field_name: Option<String>,
}

impl View {
    /// Create a new application-owned View
    pub fn new(view_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            view_type: view_type.into(),
            id: id.into(),
            android_id: false,
            field_name: None,
        }
    }

    /// Builder: mark the id as framework-owned
    pub fn with_android_id(mut self, android_id: bool) -> Self {
        self.android_id = android_id;
        self
    }

    /// Builder: override the accessor name
    pub fn with_field_name(mut self, field_name: Option<String>) -> Self {
        self.field_name = field_name;
        self
    }

    pub fn view_type(&self) -> &str {
        &self.view_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_android_id(&self) -> bool {
        self.android_id
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }
}
