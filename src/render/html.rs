//! HTML markup host.

use indexmap::IndexMap;
use log::trace;
use minijinja::{context, Environment};

use super::error::RenderError;
use super::host::Host;
use crate::element::{AttrValue, ElementProps};

const ELEMENT_TEMPLATE: &str = concat!(
    "<{{ tag }}",
    "{% for name, value in attrs %} {{ name }}",
    "{% if value is not none %}=\"{{ value }}\"{% endif %}{% endfor %}>",
    "{% if not void %}{{ children|safe }}</{{ tag }}>{% endif %}",
);

const TEXT_TEMPLATE: &str = "{{ text }}";

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// A [`Host`] that renders boxes to HTML strings.
///
/// Text and attribute values are HTML-escaped. Scoped rule sets are
/// collected as elements are rendered; [`HtmlHost::stylesheet`] returns them
/// as one stylesheet, with each scope class written once.
///
/// # Example
///
/// ```rust
/// use tomato_box::{render, BoxProps, HtmlHost, StyleResolver, SxProps};
///
/// let props = BoxProps::new()
///     .component("button")
///     .sx(SxProps::new().add("px", 2).add("&:hover", SxProps::new().add("bgcolor", "red")))
///     .child("Go");
///
/// let mut host = HtmlHost::new().unwrap();
/// let html = render(&StyleResolver::new(), &props, &mut host).unwrap();
///
/// assert!(html.starts_with("<button class=\"tomato-box css-"));
/// assert!(html.ends_with(">Go</button>"));
/// assert!(host.stylesheet().contains(":hover { background-color: red; }"));
/// ```
pub struct HtmlHost {
    env: Environment<'static>,
    rules: IndexMap<String, String>,
}

impl HtmlHost {
    /// Creates a host with its markup templates compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template("element.html", ELEMENT_TEMPLATE)?;
        env.add_template("text.html", TEXT_TEMPLATE)?;
        Ok(Self {
            env,
            rules: IndexMap::new(),
        })
    }

    /// Returns the stylesheet for every scope rendered so far.
    pub fn stylesheet(&self) -> String {
        self.rules.values().map(String::as_str).collect()
    }

    /// Forgets collected rules.
    pub fn clear_stylesheet(&mut self) {
        self.rules.clear();
    }
}

impl Host for HtmlHost {
    type Node = String;
    type Error = RenderError;

    fn text(&mut self, content: &str) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("text.html")?;
        Ok(tmpl.render(context! { text => content })?)
    }

    fn element(
        &mut self,
        element: ElementProps,
        children: Vec<String>,
    ) -> Result<String, RenderError> {
        let tag = element.element.as_str();
        if !is_valid_tag(tag) {
            return Err(RenderError::InvalidElement {
                kind: tag.to_string(),
            });
        }

        if let (Some(class), Some(sheet)) = (&element.scope_class, element.stylesheet()) {
            self.rules.entry(class.clone()).or_insert(sheet);
        }

        let void = VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str());
        if void && !children.is_empty() {
            trace!("<{tag}> is a void element, {} child(ren) dropped", children.len());
        }

        let tmpl = self.env.get_template("element.html")?;
        Ok(tmpl.render(context! {
            tag => tag,
            attrs => markup_attributes(&element),
            children => children.concat(),
            void => void,
        })?)
    }
}

/// Collects `(name, value)` pairs in output order: `class`, `style`, then
/// the plain attributes. A `None` value is written as a bare attribute.
fn markup_attributes(element: &ElementProps) -> Vec<(String, Option<String>)> {
    let mut attrs = vec![("class".to_string(), Some(element.class_attribute()))];

    let style = element.style_attribute();
    if !style.is_empty() {
        attrs.push(("style".to_string(), Some(style)));
    }

    for (name, value) in &element.attributes {
        if !is_valid_attribute_name(name) {
            trace!("attribute `{name}` is not a valid HTML name, skipped");
            continue;
        }
        let name = match name.as_str() {
            "htmlFor" => "for".to_string(),
            _ => name.clone(),
        };
        match value {
            AttrValue::Scalar(scalar) => attrs.push((name, Some(scalar.to_string()))),
            AttrValue::Bool(true) => attrs.push((name, None)),
            AttrValue::Bool(false) | AttrValue::Unset => {}
            AttrValue::Other(json) => attrs.push((name, Some(json.to_string()))),
        }
    }
    attrs
}

fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "\"'>/=<".contains(c))
}
