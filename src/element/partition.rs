//! Splitting props into style declarations and plain attributes.

use log::trace;

use super::props::{AttrValue, Attributes};
use crate::style::{is_style_property, ResolvedStyle};

/// Props split by destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    /// Allow-listed CSS props, destined for the element's style.
    pub style: ResolvedStyle,
    /// Everything else, forwarded to the element untouched.
    pub attributes: Attributes,
}

/// Routes each prop to the style channel or the attribute channel.
///
/// A prop is styled when its name is on the
/// [allow-list](crate::style::properties::STYLE_PROPERTIES) and it carries a
/// string or number. Every other prop is forwarded, in its original order:
/// event handlers, ids, `aria-*` and `data-*` attributes, CSS properties that
/// are not allow-listed, and allow-listed names holding a value that cannot
/// be a style (such as a boolean). Allow-listed props that are unset are
/// forwarded too, and hosts drop them.
///
/// # Example
///
/// ```rust
/// use tomato_box::{partition, Attributes, Scalar};
///
/// let props = Attributes::new()
///     .add("width", 200)
///     .add("id", "main")
///     .add("outline", "none");
///
/// let split = partition(&props);
/// assert_eq!(split.style.get("width"), Some(&Scalar::from(200)));
/// assert!(split.attributes.has("id"));
/// assert!(split.attributes.has("outline"));
/// ```
pub fn partition(props: &Attributes) -> Partitioned {
    let mut out = Partitioned::default();
    for (name, value) in props {
        match value {
            AttrValue::Scalar(scalar) if is_style_property(name) => {
                out.style.set(name, scalar.clone());
            }
            AttrValue::Bool(_) | AttrValue::Other(_) if is_style_property(name) => {
                trace!("prop `{name}` is allow-listed but not a style value, forwarded");
                out.attributes.insert(name, value.clone());
            }
            _ => out.attributes.insert(name, value.clone()),
        }
    }
    out
}
