//! Property-name tables.
//!
//! All tables are read-only and built once on first use:
//!
//! - the allow-list of CSS property names routed to the style channel
//! - the spacing aliases (`p`, `mt`, `px`, ...)
//! - which box shorthands cover which longhands
//! - which properties take bare numbers without a unit

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// CSS property names accepted as direct props on a box.
///
/// A direct prop whose name is not listed here is forwarded to the element
/// as a plain attribute, even if it is a valid CSS property.
pub const STYLE_PROPERTIES: &[&str] = &[
    // Layout
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "zIndex",
    "width",
    "height",
    "minWidth",
    "minHeight",
    "maxWidth",
    "maxHeight",
    // Spacing
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    // Background and border
    "backgroundColor",
    "background",
    "border",
    "borderTop",
    "borderRight",
    "borderBottom",
    "borderLeft",
    "borderRadius",
    "borderColor",
    "borderWidth",
    "borderStyle",
    "boxShadow",
    // Text
    "color",
    "fontSize",
    "fontWeight",
    "fontFamily",
    "lineHeight",
    "textAlign",
    "textDecoration",
    "textTransform",
    "letterSpacing",
    "wordSpacing",
    // Flexbox
    "flexDirection",
    "justifyContent",
    "alignItems",
    "alignContent",
    "flexWrap",
    "flex",
    "flexGrow",
    "flexShrink",
    "flexBasis",
    "gap",
    // Grid
    "gridTemplateColumns",
    "gridTemplateRows",
    "gridColumn",
    "gridRow",
    "gridArea",
    "gridGap",
    "gridColumnGap",
    "gridRowGap",
    // Other
    "opacity",
    "overflow",
    "overflowX",
    "overflowY",
    "transform",
    "transition",
    "cursor",
    "pointerEvents",
    "userSelect",
    "visibility",
];

static STYLE_PROPERTY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STYLE_PROPERTIES.iter().copied().collect());

/// Returns `true` if `name` is on the style allow-list.
pub fn is_style_property(name: &str) -> bool {
    STYLE_PROPERTY_SET.contains(name)
}

/// Single-axis spacing aliases and the property each one writes.
pub const SPACING_ALIASES: &[(&str, &str)] = &[
    ("p", "padding"),
    ("pt", "paddingTop"),
    ("pr", "paddingRight"),
    ("pb", "paddingBottom"),
    ("pl", "paddingLeft"),
    ("m", "margin"),
    ("mt", "marginTop"),
    ("mr", "marginRight"),
    ("mb", "marginBottom"),
    ("ml", "marginLeft"),
];

/// Two-sided spacing aliases. These are applied before everything else.
pub const AXIS_ALIASES: &[(&str, [&str; 2])] = &[
    ("px", ["paddingLeft", "paddingRight"]),
    ("py", ["paddingTop", "paddingBottom"]),
    ("mx", ["marginLeft", "marginRight"]),
    ("my", ["marginTop", "marginBottom"]),
];

/// The background color alias.
pub const BGCOLOR_ALIAS: (&str, &str) = ("bgcolor", "backgroundColor");

static SPACING_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SPACING_ALIASES.iter().copied().collect());

/// Returns the long-form property for a single-axis spacing alias.
pub fn spacing_longhand(alias: &str) -> Option<&'static str> {
    SPACING_MAP.get(alias).copied()
}

/// Returns `true` for keys consumed by the first expansion pass.
pub fn is_first_pass_alias(key: &str) -> bool {
    key == BGCOLOR_ALIAS.0 || AXIS_ALIASES.iter().any(|(alias, _)| *alias == key)
}

/// Box shorthands and the longhands each one resets.
const SHORTHANDS: &[(&str, &[&str])] = &[
    (
        "padding",
        &["paddingTop", "paddingRight", "paddingBottom", "paddingLeft"],
    ),
    (
        "margin",
        &["marginTop", "marginRight", "marginBottom", "marginLeft"],
    ),
    (
        "border",
        &[
            "borderTop",
            "borderRight",
            "borderBottom",
            "borderLeft",
            "borderColor",
            "borderStyle",
            "borderWidth",
        ],
    ),
    (
        "borderTop",
        &["borderTopColor", "borderTopStyle", "borderTopWidth"],
    ),
    (
        "borderRight",
        &["borderRightColor", "borderRightStyle", "borderRightWidth"],
    ),
    (
        "borderBottom",
        &["borderBottomColor", "borderBottomStyle", "borderBottomWidth"],
    ),
    (
        "borderLeft",
        &["borderLeftColor", "borderLeftStyle", "borderLeftWidth"],
    ),
    (
        "borderColor",
        &[
            "borderTopColor",
            "borderRightColor",
            "borderBottomColor",
            "borderLeftColor",
        ],
    ),
    (
        "borderStyle",
        &[
            "borderTopStyle",
            "borderRightStyle",
            "borderBottomStyle",
            "borderLeftStyle",
        ],
    ),
    (
        "borderWidth",
        &[
            "borderTopWidth",
            "borderRightWidth",
            "borderBottomWidth",
            "borderLeftWidth",
        ],
    ),
    (
        "background",
        &[
            "backgroundColor",
            "backgroundImage",
            "backgroundPosition",
            "backgroundRepeat",
            "backgroundSize",
        ],
    ),
    ("overflow", &["overflowX", "overflowY"]),
    ("flex", &["flexGrow", "flexShrink", "flexBasis"]),
    ("gap", &["rowGap", "columnGap"]),
    ("gridGap", &["gridRowGap", "gridColumnGap"]),
];

static SHORTHAND_MAP: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| SHORTHANDS.iter().copied().collect());

/// Returns the longhands a box shorthand resets, or `None` if `name` is not
/// a box shorthand.
pub fn longhands_of(name: &str) -> Option<&'static [&'static str]> {
    SHORTHAND_MAP.get(name).copied()
}

/// Returns every property a shorthand resets, following nested shorthands:
/// `border` covers `borderColor` and, through it, `borderTopColor`.
///
/// Empty if `name` is not a box shorthand.
pub fn covered_longhands(name: &str) -> Vec<&'static str> {
    let mut covered = Vec::new();
    let mut pending: Vec<&'static str> = longhands_of(name).unwrap_or_default().to_vec();
    while let Some(longhand) = pending.pop() {
        if covered.contains(&longhand) {
            continue;
        }
        covered.push(longhand);
        if let Some(nested) = longhands_of(longhand) {
            pending.extend_from_slice(nested);
        }
    }
    covered
}

/// Properties that take bare numbers.
const UNITLESS: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "columns",
    "flex",
    "flexGrow",
    "flexPositive",
    "flexShrink",
    "flexNegative",
    "flexOrder",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "fontWeight",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "scale",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    "WebkitLineClamp",
    "fillOpacity",
    "floodOpacity",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
];

static UNITLESS_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| UNITLESS.iter().copied().collect());

/// Returns `true` if numbers for this property must not get a unit.
///
/// Custom properties (`--name`) are always unitless.
pub fn is_unitless(name: &str) -> bool {
    name.starts_with("--") || UNITLESS_SET.contains(name)
}

/// Converts a camelCase property name to its kebab-case CSS form.
///
/// Vendor prefixes gain a leading dash (`WebkitTransition` becomes
/// `-webkit-transition`, `msTransform` becomes `-ms-transform`). Custom
/// properties are returned unchanged.
///
/// # Example
///
/// ```rust
/// use tomato_box::style::to_kebab_case;
///
/// assert_eq!(to_kebab_case("paddingLeft"), "padding-left");
/// assert_eq!(to_kebab_case("WebkitTransition"), "-webkit-transition");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
