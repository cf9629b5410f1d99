//! Shorthand expansion: `sx` objects to resolved styles.
//!
//! Expansion runs in two passes over the object:
//!
//! 1. The two-sided aliases (`px`, `py`, `mx`, `my`) and `bgcolor` are
//!    written first.
//! 2. Every other key is visited in insertion order. Single-axis spacing
//!    aliases (`p`, `pt`, ... `ml`) are written under their long-form name,
//!    pseudo-class blocks become [`RuleSet`]s, and any other scalar is copied
//!    verbatim. The last write to a property wins.
//!
//! So `{ px: 4, pl: 8 }` gives `paddingLeft: 8`, while `{ p: 2, px: 4 }` keeps
//! both `padding: 2` and the `px` sides.

use log::trace;
use serde::Serialize;

use super::value::{SxProps, SxValue};
use crate::style::properties::{
    is_first_pass_alias, spacing_longhand, AXIS_ALIASES, BGCOLOR_ALIAS,
};
use crate::style::ResolvedStyle;

/// Keys starting with this character open a pseudo-class block.
pub const PSEUDO_MARKER: char = '&';

/// A style block scoped to a pseudo-class selector such as `&:hover`.
///
/// Nested rule sets chain onto their parent: a `&:focus` block inside
/// `&:hover` applies to `:hover:focus`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSet {
    /// The selector key exactly as written, including the `&` marker.
    pub selector: String,
    pub style: ResolvedStyle,
    pub rules: Vec<RuleSet>,
}

impl RuleSet {
    /// Returns `true` if neither this block nor any nested block declares
    /// anything.
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.rules.iter().all(RuleSet::is_empty)
    }
}

/// The result of expanding an `sx` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SxStyles {
    /// Declarations that can be applied directly to the element.
    pub style: ResolvedStyle,
    /// Pseudo-class blocks, which need a scoped class to apply.
    pub rules: Vec<RuleSet>,
}

/// Expands an `sx` object into a flat style plus pseudo-class rule sets.
///
/// This never fails. Unknown keys are treated as CSS property names, unset
/// values are skipped, and object values under keys that are not
/// pseudo-class selectors are dropped, as are booleans and arrays.
///
/// # Example
///
/// ```rust
/// use tomato_box::{expand, Scalar, SxProps};
///
/// let expanded = expand(&SxProps::new().add("p", 2).add("px", 4));
///
/// assert_eq!(expanded.style.get("padding"), Some(&Scalar::from(2)));
/// assert_eq!(expanded.style.get("paddingLeft"), Some(&Scalar::from(4)));
/// assert_eq!(expanded.style.get("paddingRight"), Some(&Scalar::from(4)));
/// ```
pub fn expand(sx: &SxProps) -> SxStyles {
    let mut style = ResolvedStyle::new();
    let mut rules = Vec::new();

    for (alias, targets) in AXIS_ALIASES {
        match sx.get(alias) {
            Some(SxValue::Scalar(value)) => {
                for target in targets {
                    style.set(target, value.clone());
                }
            }
            Some(SxValue::Unset) | None => {}
            Some(_) => trace!("sx: `{alias}` is not a style value, skipped"),
        }
    }

    let (alias, target) = BGCOLOR_ALIAS;
    if let Some(SxValue::Scalar(value)) = sx.get(alias) {
        if value.is_truthy() {
            style.set(target, value.clone());
        }
    }

    for (key, value) in sx {
        if is_first_pass_alias(key) {
            continue;
        }
        match value {
            SxValue::Unset => {}
            SxValue::Nested(nested) if key.starts_with(PSEUDO_MARKER) => {
                let inner = expand(nested);
                rules.push(RuleSet {
                    selector: key.clone(),
                    style: inner.style,
                    rules: inner.rules,
                });
            }
            SxValue::Scalar(scalar) => {
                let name = spacing_longhand(key).unwrap_or(key.as_str());
                style.set(name, scalar.clone());
            }
            SxValue::Nested(_) | SxValue::Other(_) => {
                trace!("sx: `{key}` is not a style value, skipped")
            }
        }
    }

    SxStyles { style, rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sx::Scalar;

    fn s(v: impl Into<Scalar>) -> Option<Scalar> {
        Some(v.into())
    }

    fn value(out: &SxStyles, name: &str) -> Option<Scalar> {
        out.style.get(name).cloned()
    }

    #[test]
    fn test_px_expands_to_both_sides() {
        let out = expand(&SxProps::new().add("px", "1rem"));
        assert_eq!(value(&out, "paddingLeft"), s("1rem"));
        assert_eq!(value(&out, "paddingRight"), s("1rem"));
        assert!(!out.style.has("px"));
    }

    #[test]
    fn test_axis_aliases() {
        let out = expand(&SxProps::new().add("py", 1).add("mx", 2).add("my", 3));
        assert_eq!(value(&out, "paddingTop"), s(1));
        assert_eq!(value(&out, "paddingBottom"), s(1));
        assert_eq!(value(&out, "marginLeft"), s(2));
        assert_eq!(value(&out, "marginRight"), s(2));
        assert_eq!(value(&out, "marginTop"), s(3));
        assert_eq!(value(&out, "marginBottom"), s(3));
        assert_eq!(out.style.len(), 6);
    }

    #[test]
    fn test_single_axis_aliases() {
        let out = expand(
            &SxProps::new()
                .add("p", 1)
                .add("pt", 2)
                .add("m", 3)
                .add("ml", 4),
        );
        assert_eq!(value(&out, "padding"), s(1));
        assert_eq!(value(&out, "paddingTop"), s(2));
        assert_eq!(value(&out, "margin"), s(3));
        assert_eq!(value(&out, "marginLeft"), s(4));
    }

    #[test]
    fn test_p_and_px_together() {
        let out = expand(&SxProps::new().add("p", 2).add("px", 4));
        let expected = ResolvedStyle::new()
            .add("paddingLeft", 4)
            .add("paddingRight", 4)
            .add("padding", 2);
        assert_eq!(out.style, expected);
    }

    #[test]
    fn test_single_axis_overrides_axis_alias() {
        let out = expand(&SxProps::new().add("pl", 8).add("px", 4));
        assert_eq!(value(&out, "paddingLeft"), s(8));
        assert_eq!(value(&out, "paddingRight"), s(4));
    }

    #[test]
    fn test_p_and_pl() {
        let out = expand(&SxProps::new().add("p", "a").add("pl", "b"));
        assert_eq!(value(&out, "paddingLeft"), s("b"));
        assert_eq!(value(&out, "padding"), s("a"));
    }

    #[test]
    fn test_last_write_wins_during_traversal() {
        let out = expand(&SxProps::new().add("pl", 1).add("paddingLeft", 2));
        assert_eq!(value(&out, "paddingLeft"), s(2));

        let out = expand(&SxProps::new().add("paddingLeft", 2).add("pl", 1));
        assert_eq!(value(&out, "paddingLeft"), s(1));
    }

    #[test]
    fn test_bgcolor() {
        let out = expand(&SxProps::new().add("bgcolor", "tomato"));
        assert_eq!(value(&out, "backgroundColor"), s("tomato"));
        assert!(!out.style.has("bgcolor"));
    }

    #[test]
    fn test_falsy_bgcolor_is_dropped() {
        let out = expand(&SxProps::new().add("bgcolor", ""));
        assert!(out.style.is_empty());
    }

    #[test]
    fn test_explicit_background_color_wins_over_bgcolor() {
        let out = expand(
            &SxProps::new()
                .add("backgroundColor", "red")
                .add("bgcolor", "blue"),
        );
        assert_eq!(value(&out, "backgroundColor"), s("red"));
    }

    #[test]
    fn test_unset_values_are_skipped() {
        let out = expand(
            &SxProps::new()
                .add("p", None::<i32>)
                .add("px", None::<i32>)
                .add("color", None::<&str>)
                .add("width", 10),
        );
        assert_eq!(out.style, ResolvedStyle::new().add("width", 10));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let out = expand(
            &SxProps::new()
                .add("outline", "none")
                .add("WebkitTapHighlightColor", "transparent"),
        );
        assert_eq!(value(&out, "outline"), s("none"));
        assert_eq!(value(&out, "WebkitTapHighlightColor"), s("transparent"));
    }

    #[test]
    fn test_pseudo_class_block_becomes_rule_set() {
        let out = expand(
            &SxProps::new()
                .add("color", "black")
                .add("&:hover", SxProps::new().add("bgcolor", "red").add("px", 2)),
        );

        assert_eq!(out.style, ResolvedStyle::new().add("color", "black"));
        assert_eq!(out.rules.len(), 1);
        let hover = &out.rules[0];
        assert_eq!(hover.selector, "&:hover");
        assert_eq!(hover.style.get("backgroundColor"), Some(&Scalar::from("red")));
        assert_eq!(hover.style.get("paddingLeft"), Some(&Scalar::from(2)));
        assert!(hover.rules.is_empty());
    }

    #[test]
    fn test_nested_pseudo_class_chain() {
        let out = expand(&SxProps::new().add(
            "&:hover",
            SxProps::new()
                .add("color", "white")
                .add("&:focus", SxProps::new().add("outline", "none")),
        ));

        let hover = &out.rules[0];
        assert_eq!(hover.rules.len(), 1);
        assert_eq!(hover.rules[0].selector, "&:focus");
        assert_eq!(hover.rules[0].style.get("outline"), Some(&Scalar::from("none")));
    }

    #[test]
    fn test_rule_sets_keep_insertion_order() {
        let out = expand(
            &SxProps::new()
                .add("&:focus", SxProps::new().add("color", "a"))
                .add("&:active", SxProps::new().add("color", "b"))
                .add("&:disabled", SxProps::new().add("color", "c")),
        );
        let selectors: Vec<&str> = out.rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec!["&:focus", "&:active", "&:disabled"]);
    }

    #[test]
    fn test_object_under_plain_key_is_dropped() {
        let out = expand(
            &SxProps::new()
                .add("hover", SxProps::new().add("color", "red"))
                .add("p", SxProps::new().add("x", 1))
                .add("color", "blue"),
        );
        assert_eq!(out.style, ResolvedStyle::new().add("color", "blue"));
        assert!(out.rules.is_empty());
    }

    #[test]
    fn test_booleans_and_arrays_are_dropped() {
        let sx: SxProps = serde_json::from_str(
            r#"{ "p": 2, "flexWrap": true, "px": [1, 2], "bgcolor": false, "&:hover": [] }"#,
        )
        .unwrap();
        let out = expand(&sx);
        assert_eq!(out.style, ResolvedStyle::new().add("padding", 2));
        assert!(out.rules.is_empty());
    }

    #[test]
    fn test_scalar_under_marker_key_is_copied() {
        let out = expand(&SxProps::new().add("&odd", "value"));
        assert_eq!(value(&out, "&odd"), s("value"));
        assert!(out.rules.is_empty());
    }

    #[test]
    fn test_expand_is_idempotent_on_resolved_styles() {
        let resolved = ResolvedStyle::new()
            .add("padding", 2)
            .add("paddingLeft", 4)
            .add("backgroundColor", "red")
            .add("display", "flex");
        let sx: SxProps = resolved.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

        assert_eq!(expand(&sx).style, resolved);
    }

    #[test]
    fn test_empty_rule_set() {
        let out = expand(&SxProps::new().add("&:hover", SxProps::new()));
        assert_eq!(out.rules.len(), 1);
        assert!(out.rules[0].is_empty());
    }
}
