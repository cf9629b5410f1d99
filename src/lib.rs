//! # Tomato Box
//!
//! A box layout primitive: the style resolution behind a `<Box>` component
//! that accepts spacing shorthands, direct CSS props, an inline style object
//! and pseudo-class blocks, and renders them onto any element kind.
//!
//! ## Style sources
//!
//! A box collects style from four places, merged lowest precedence first:
//!
//! 1. a base style (`box-sizing: border-box` by default)
//! 2. the `sx` object, after shorthand expansion (`p`, `px`, `bgcolor`, ...)
//! 3. direct props whose names are on the CSS allow-list (`width`, `color`, ...)
//! 4. the inline `style` object
//!
//! Pseudo-class blocks in `sx` (`"&:hover"`) cannot be inline styles. They are
//! returned as [`RuleSet`]s scoped to a generated class instead.
//!
//! Every other prop is forwarded to the element as a plain attribute.
//!
//! ## Quick Start
//!
//! ```rust
//! use tomato_box::{BoxProps, Scalar, StyleResolver, SxProps};
//!
//! let props = BoxProps::new()
//!     .component("section")
//!     .sx(SxProps::new()
//!         .add("p", 2)
//!         .add("px", 4)
//!         .add("&:hover", SxProps::new().add("bgcolor", "#eee")))
//!     .prop("width", 200)
//!     .prop("aria-label", "Greeting")
//!     .child("Hello Box");
//!
//! let element = StyleResolver::new().resolve(&props);
//!
//! assert_eq!(element.style.get("padding"), Some(&Scalar::from(2)));
//! assert_eq!(element.style.get("paddingLeft"), Some(&Scalar::from(4)));
//! assert_eq!(element.style.get("width"), Some(&Scalar::from(200)));
//! assert!(element.attributes.has("aria-label"));
//! assert_eq!(element.rules[0].selector, "&:hover");
//! assert!(element.scope_class.is_some());
//! ```
//!
//! ## Rendering
//!
//! The UI layer is behind the [`Host`] trait. [`HtmlHost`] renders to HTML:
//!
//! ```rust
//! use tomato_box::{render, BoxProps, HtmlHost, StyleResolver};
//!
//! let mut host = HtmlHost::new().unwrap();
//! let html = render(
//!     &StyleResolver::new(),
//!     &BoxProps::new().prop("color", "white").child("Hi"),
//!     &mut host,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     html,
//!     r#"<div class="tomato-box" style="box-sizing: border-box; color: white">Hi</div>"#
//! );
//! ```

pub mod element;
pub mod render;
pub mod style;
pub mod sx;

pub use element::{
    generate_class_name, partition, AttrValue, Attributes, BoxProps, Child, ElementKind,
    ElementProps, Partitioned, PseudoMode, ResolverConfig, StyleResolver,
};
pub use render::{render, Host, HtmlHost, RenderError};
pub use style::ResolvedStyle;
pub use sx::{expand, RuleSet, Scalar, SxProps, SxStyles, SxValue};
