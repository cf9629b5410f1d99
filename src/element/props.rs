//! Box input props.

use indexmap::map::Iter;
use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::style::ResolvedStyle;
use crate::sx::{Scalar, SxProps};

/// The kind of element a box renders as, such as `"div"` or `"section"`.
///
/// This is handed to the [`Host`](crate::Host) untouched; only the host
/// decides what a kind means or whether it is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementKind(String);

impl ElementKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::new("div")
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementKind {
    fn from(kind: &str) -> Self {
        Self::new(kind)
    }
}

impl From<String> for ElementKind {
    fn from(kind: String) -> Self {
        Self(kind)
    }
}

/// The value of a plain attribute or direct prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Scalar(Scalar),
    Bool(bool),
    /// Present but without a value.
    Unset,
    /// Any other JSON shape. Never styled; forwarded as-is.
    Other(serde_json::Value),
}

impl AttrValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, AttrValue::Unset)
    }
}

macro_rules! attr_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for AttrValue {
                fn from(value: $t) -> Self {
                    AttrValue::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

attr_from!(&str, String, i32, i64, u32, usize, f32, f64);

impl From<Scalar> for AttrValue {
    fn from(value: Scalar) -> Self {
        AttrValue::Scalar(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Unset, Into::into)
    }
}

/// Ordered name to value map of props and attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<V: Into<AttrValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert<V: Into<AttrValue>>(&mut self, name: &str, value: V) {
        self.entries.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.shift_remove(name)
    }

    pub fn iter(&self) -> Iter<'_, String, AttrValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A child of a box: text or another box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Element(BoxProps),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<BoxProps> for Child {
    fn from(props: BoxProps) -> Self {
        Child::Element(props)
    }
}

/// Everything a caller passes to a box.
///
/// Besides the named fields, any prop goes into `attributes`: direct CSS
/// props like `width` as well as plain attributes like `id` or
/// `aria-label`. Which is which is decided at resolve time.
///
/// In JSON form, `component`, `sx`, `style` and `children` are read by name
/// and every other key lands in `attributes`:
///
/// ```rust
/// use tomato_box::BoxProps;
///
/// let props = BoxProps::from_json(r##"{
///     "component": "section",
///     "sx": { "p": 2, "&:hover": { "bgcolor": "#eee" } },
///     "width": 200,
///     "id": "hero",
///     "children": "Hello Box"
/// }"##).unwrap();
///
/// assert_eq!(props.component.as_str(), "section");
/// assert!(props.attributes.has("width"));
/// assert!(props.attributes.has("id"));
/// assert_eq!(props.children.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxProps {
    pub component: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sx: Option<SxProps>,
    #[serde(skip_serializing_if = "ResolvedStyle::is_empty")]
    pub style: ResolvedStyle,
    #[serde(
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Child>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl BoxProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses props from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn component(mut self, kind: impl Into<ElementKind>) -> Self {
        self.component = kind.into();
        self
    }

    pub fn sx(mut self, sx: SxProps) -> Self {
        self.sx = Some(sx);
        self
    }

    /// Sets the inline style object. It wins over every other style source.
    pub fn style(mut self, style: ResolvedStyle) -> Self {
        self.style = style;
        self
    }

    /// Adds a direct prop or plain attribute.
    pub fn prop<V: Into<AttrValue>>(mut self, name: &str, value: V) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Child>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut children = Vec::new();
    ChildNode::deserialize(deserializer)?.flatten_into(&mut children);
    Ok(children)
}

/// The JSON shapes accepted as children.
///
/// Numbers become text, arrays are flattened, and `null`, booleans or
/// anything unreadable render nothing.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChildNode {
    Text(String),
    Number(f64),
    Many(Vec<ChildNode>),
    Element(BoxProps),
    Empty(serde_json::Value),
}

impl ChildNode {
    fn flatten_into(self, children: &mut Vec<Child>) {
        match self {
            ChildNode::Text(text) => children.push(Child::Text(text)),
            ChildNode::Number(n) => children.push(Child::Text(Scalar::Number(n).to_string())),
            ChildNode::Many(nodes) => {
                for node in nodes {
                    node.flatten_into(children);
                }
            }
            ChildNode::Element(props) => children.push(Child::Element(props)),
            ChildNode::Empty(value) => {
                if !value.is_null() && !value.is_boolean() {
                    trace!("child `{value}` is not text or a box, skipped");
                }
            }
        }
    }
}
