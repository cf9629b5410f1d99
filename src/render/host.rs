//! The rendering host seam.

use crate::element::{BoxProps, Child, ElementProps, StyleResolver};

/// The UI layer that turns resolved element props into nodes.
///
/// A host receives the element kind, merged style, scoped rule sets and
/// plain attributes of each box, plus its already rendered children. It owns
/// everything about the result: what a node is, how rule sets are attached
/// to the scope class, and which element kinds are valid.
pub trait Host {
    type Node;
    type Error;

    /// Creates a text node.
    fn text(&mut self, content: &str) -> Result<Self::Node, Self::Error>;

    /// Creates an element node.
    fn element(
        &mut self,
        element: ElementProps,
        children: Vec<Self::Node>,
    ) -> Result<Self::Node, Self::Error>;
}

/// Resolves a box tree and hands it to `host`, children first.
///
/// # Errors
///
/// Returns the first error reported by the host.
pub fn render<H: Host>(
    resolver: &StyleResolver,
    props: &BoxProps,
    host: &mut H,
) -> Result<H::Node, H::Error> {
    let mut children = Vec::with_capacity(props.children.len());
    for child in &props.children {
        children.push(match child {
            Child::Text(text) => host.text(text)?,
            Child::Element(nested) => render(resolver, nested, &mut *host)?,
        });
    }
    host.element(resolver.resolve(props), children)
}
