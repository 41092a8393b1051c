//! Layout parser
//!
//! Reads one layout XML document into a [`Layout`] in a single forward pass
//! over its start tags. Only elements with an `android:id` become Views.
//!
//! Recognized attributes:
//! - `android:id` - `@+id/name`, `@id/name` or `@android:id/name`
//! - `app:holdr_ignore="true"` - drop the element
//! - `app:holdr_field_name="name"` - accessor name override
//! - `app:holdr_include="true"` - opt in when `default_include` is off

use std::borrow::Cow;

use quick_xml::events::attributes::{AttrError, Attribute};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use thiserror::Error;

use crate::domain::entities::{Layout, View};

/// Namespace of framework attributes such as `android:id`
pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
/// Namespace of application attributes (`xmlns:app="...res-auto"`)
pub const APP_NS: &str = "http://schemas.android.com/apk/res-auto";
/// Package prepended to unqualified tag names
pub const DEFAULT_WIDGET_PACKAGE: &str = "android.widget";

const ID_ATTR: &[u8] = b"id";
const IGNORE_ATTR: &[u8] = b"holdr_ignore";
const FIELD_NAME_ATTR: &[u8] = b"holdr_field_name";
const INCLUDE_ATTR: &[u8] = b"holdr_include";
const ANDROID_ID_MARKER: &str = "@android";

/// A layout document that is not well-formed
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute at byte {position}: {source}")]
    Attribute {
        position: u64,
        #[source]
        source: AttrError,
    },

    #[error("element name at byte {position} is not valid UTF-8")]
    InvalidName { position: u64 },
}

/// Parser for layout XML documents
#[derive(Debug, Clone)]
pub struct LayoutParser {
    /// Include elements with an id unless they are explicitly ignored.
    ///
    /// When false, an element also needs `holdr_include="true"` or a
    /// `holdr_field_name` override.
    default_include: bool,
    widget_package: String,
}

impl Default for LayoutParser {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LayoutParser {
    pub fn new(default_include: bool) -> Self {
        Self {
            default_include,
            widget_package: DEFAULT_WIDGET_PACKAGE.to_string(),
        }
    }

    /// Builder: package for unqualified tags (without trailing dot)
    pub fn with_widget_package(mut self, widget_package: impl Into<String>) -> Self {
        self.widget_package = widget_package.into();
        self
    }

    /// Parse one layout document
    pub fn parse(&self, layout_name: &str, source: &str) -> Result<Layout, ParseError> {
        let mut reader = NsReader::from_str(source);
        let mut layout = Layout::new(layout_name, Vec::new());

        loop {
            let event = reader.read_event().map_err(|source| ParseError::Xml {
                position: reader.buffer_position() as u64,
                source,
            })?;

            match event {
                Event::Start(ref start) | Event::Empty(ref start) => {
                    let element = self.read_element(&reader, start)?;
                    // Repeated ids keep their first element
                    if let Some(view) = element.into_view(self.default_include) {
                        layout.push(view);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(layout)
    }

    fn read_element(
        &self,
        reader: &NsReader<&[u8]>,
        start: &BytesStart<'_>,
    ) -> Result<Element, ParseError> {
        let position = reader.buffer_position() as u64;
        let tag = std::str::from_utf8(start.local_name().into_inner())
            .map_err(|_| ParseError::InvalidName { position })?;

        let mut element = Element {
            view_type: self.resolve_type(tag),
            ..Element::default()
        };

        for attr in start.attributes() {
            let attr = attr.map_err(|source| ParseError::Attribute { position, source })?;
            let (ns, local) = reader.resolve_attribute(attr.key);
            let ResolveResult::Bound(Namespace(ns)) = ns else {
                continue;
            };
            let local = local.into_inner();

            if ns == ANDROID_NS.as_bytes() && local == ID_ATTR {
                element.raw_id = Some(attr_value(&attr, position)?.into_owned());
            } else if ns == APP_NS.as_bytes() {
                match local {
                    IGNORE_ATTR => element.ignore = attr_value(&attr, position)? == "true",
                    INCLUDE_ATTR => element.include = attr_value(&attr, position)? == "true",
                    FIELD_NAME_ATTR => {
                        element.field_name = Some(attr_value(&attr, position)?.into_owned())
                    }
                    _ => {}
                }
            }
        }

        Ok(element)
    }

    /// `TextView` -> `android.widget.TextView`; qualified names pass through
    fn resolve_type(&self, tag: &str) -> String {
        if tag.contains('.') {
            tag.to_string()
        } else {
            format!("{}.{}", self.widget_package, tag)
        }
    }
}

fn attr_value<'a>(attr: &'a Attribute<'a>, position: u64) -> Result<Cow<'a, str>, ParseError> {
    attr.unescape_value()
        .map_err(|source| ParseError::Xml { position, source })
}

/// Generation-relevant attributes of one start tag
#[derive(Debug, Default)]
struct Element {
    view_type: String,
    raw_id: Option<String>,
    ignore: bool,
    include: bool,
    field_name: Option<String>,
}

impl Element {
    fn into_view(self, default_include: bool) -> Option<View> {
        let raw_id = self.raw_id?;
        if self.ignore {
            return None;
        }
        if !default_include && !self.include && self.field_name.is_none() {
            return None;
        }

        Some(
            View::new(self.view_type, strip_id(&raw_id))
                .with_android_id(raw_id.starts_with(ANDROID_ID_MARKER))
                .with_field_name(self.field_name),
        )
    }
}

/// `@+id/title` -> `title`, `@android:id/list` -> `list`
fn strip_id(raw: &str) -> &str {
    match raw.find('/') {
        Some(sep) => &raw[sep + 1..],
        None => raw,
    }
}
