//! CSS text output.
//!
//! Turns resolved styles into declaration blocks (for `style` attributes)
//! and rule sets into scoped stylesheet text.

use log::trace;

use super::properties::{is_unitless, to_kebab_case};
use super::ResolvedStyle;
use crate::sx::{RuleSet, Scalar, PSEUDO_MARKER};

/// Formats a value for `property`.
///
/// Non-zero numbers get `unit` appended unless the property is unitless.
/// Strings are written as-is.
///
/// # Example
///
/// ```rust
/// use tomato_box::style::format_value;
/// use tomato_box::Scalar;
///
/// assert_eq!(format_value("width", &Scalar::from(200), Some("px")), "200px");
/// assert_eq!(format_value("opacity", &Scalar::from(0.5), Some("px")), "0.5");
/// assert_eq!(format_value("width", &Scalar::from("50%"), Some("px")), "50%");
/// ```
pub fn format_value(property: &str, value: &Scalar, unit: Option<&str>) -> String {
    match (value, unit) {
        (Scalar::Number(n), Some(unit)) if *n != 0.0 && !is_unitless(property) => {
            format!("{}{}", value, unit)
        }
        _ => value.to_string(),
    }
}

/// Characters that end a declaration value when they appear outside
/// brackets and strings.
const VALUE_SEPARATORS: &[char] = &[';'];

/// Characters that end a selector, or add a second one, when they appear
/// outside brackets and strings.
const SELECTOR_SEPARATORS: &[char] = &[';', ','];

/// Returns `true` if `text` cannot leave the declaration or selector it is
/// written into.
///
/// Rejects `<` and comment openers anywhere, braces and `separators` outside
/// strings and brackets, and unbalanced brackets, quotes or escapes.
fn is_contained(text: &str, separators: &[char]) -> bool {
    if text.contains('<') || text.contains("/*") {
        return false;
    }

    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;
    for c in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), '\n') => return false,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            (None, '{' | '}') => return false,
            (None, c) if depth == 0 && separators.contains(&c) => return false,
            _ => {}
        }
    }
    quote.is_none() && depth == 0 && !escaped
}

fn is_property_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Formats every declaration of `style` as `name: value`, in write-out order.
///
/// Declarations whose name or value would break out of the block are left
/// out.
fn declarations(style: &ResolvedStyle, unit: Option<&str>) -> Vec<String> {
    style
        .declarations()
        .into_iter()
        .filter_map(|(name, value)| {
            let value = format_value(name, value, unit);
            if !is_property_name(name) || !is_contained(&value, VALUE_SEPARATORS) {
                trace!("css: declaration `{name}` is not safe to write, skipped");
                return None;
            }
            Some(format!("{}: {}", to_kebab_case(name), value))
        })
        .collect()
}

/// Renders a style as the body of a `style` attribute.
///
/// ```rust
/// use tomato_box::style::declaration_block;
/// use tomato_box::ResolvedStyle;
///
/// let style = ResolvedStyle::new().add("paddingLeft", 4).add("color", "red");
/// assert_eq!(declaration_block(&style, Some("px")), "padding-left: 4px; color: red");
/// ```
pub fn declaration_block(style: &ResolvedStyle, unit: Option<&str>) -> String {
    declarations(style, unit).join("; ")
}

/// Renders rule sets as stylesheet text scoped to `scope`.
///
/// Every `&` in a selector is replaced by the enclosing selector: `scope` for
/// top-level rule sets, the parent's full selector for nested ones. Blocks
/// with no declarations are left out, and so are rule sets whose selector
/// would break out of the scope, together with everything nested in them.
///
/// ```rust
/// use tomato_box::style::stylesheet;
/// use tomato_box::{expand, SxProps};
///
/// let sx = SxProps::new().add("&:hover", SxProps::new().add("bgcolor", "red"));
/// let rules = expand(&sx).rules;
///
/// assert_eq!(
///     stylesheet(".box", &rules, Some("px")),
///     ".box:hover { background-color: red; }\n"
/// );
/// ```
pub fn stylesheet(scope: &str, rules: &[RuleSet], unit: Option<&str>) -> String {
    let mut out = String::new();
    for rule in rules {
        write_rule(&mut out, scope, rule, unit);
    }
    out
}

/// Renders rule sets with the bare `&` marker as scope.
///
/// The output does not depend on any class name, so it is stable input for
/// generating one.
pub fn unscoped_stylesheet(rules: &[RuleSet], unit: Option<&str>) -> String {
    stylesheet(&PSEUDO_MARKER.to_string(), rules, unit)
}

fn write_rule(out: &mut String, parent: &str, rule: &RuleSet, unit: Option<&str>) {
    if !is_contained(&rule.selector, SELECTOR_SEPARATORS) {
        trace!("css: selector `{}` is not safe to write, skipped", rule.selector);
        return;
    }
    let selector = rule.selector.replace(PSEUDO_MARKER, parent);
    let body: Vec<String> = declarations(&rule.style, unit)
        .into_iter()
        .map(|d| format!("{};", d))
        .collect();
    if !body.is_empty() {
        out.push_str(&format!("{} {{ {} }}\n", selector, body.join(" ")));
    }
    for nested in &rule.rules {
        write_rule(out, &selector, nested, unit);
    }
}
