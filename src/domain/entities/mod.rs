//! Domain Entities
//!
//! The view model produced by parsing layout files:
//! - `View` - one element with an id
//! - `Layout` - the Views of one logical layout
//! - `Layouts` - all layouts of a compile run, variants merged

mod layout;
mod layouts;
mod view;

pub use layout::Layout;
pub use layouts::Layouts;
pub use view::View;
