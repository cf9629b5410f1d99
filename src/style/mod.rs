//! Resolved styles, property tables and CSS output.
//!
//! - [`ResolvedStyle`]: flat declarations keyed by canonical property name
//! - [`properties`]: the style allow-list and the shorthand tables
//! - [`stylesheet`] and [`declaration_block`]: CSS text for rules and
//!   `style` attributes

mod css;
pub mod properties;
mod resolved;

pub use css::{declaration_block, format_value, stylesheet, unscoped_stylesheet};
pub use properties::{is_style_property, to_kebab_case};
pub use resolved::ResolvedStyle;
