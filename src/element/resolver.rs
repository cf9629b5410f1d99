//! Resolving box props into element props.

use log::{debug, trace};
use serde::Serialize;

use super::class_name::generate_class_name;
use super::partition::{partition, Partitioned};
use super::props::{AttrValue, Attributes, BoxProps, ElementKind};
use crate::style::{declaration_block, stylesheet, unscoped_stylesheet, ResolvedStyle};
use crate::sx::{expand, RuleSet, Scalar, SxStyles};

/// Class every box carries unless the caller passes its own `className`.
pub const DEFAULT_BASE_CLASS: &str = "tomato-box";

/// Prefix of generated scope classes.
pub const DEFAULT_CLASS_PREFIX: &str = "css";

/// Unit appended to bare numbers.
pub const DEFAULT_UNIT: &str = "px";

/// What to do with pseudo-class rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PseudoMode {
    /// Keep rule sets and scope them to a generated class.
    #[default]
    Scoped,
    /// Inline styles only: rule sets are dropped and no class is generated.
    Inline,
}

/// Settings for a [`StyleResolver`].
///
/// # Example
///
/// ```rust
/// use tomato_box::{PseudoMode, ResolverConfig, StyleResolver};
///
/// let resolver = StyleResolver::with_config(
///     ResolverConfig::new()
///         .base_class("card")
///         .unit("rem")
///         .pseudo_mode(PseudoMode::Inline),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    base_class: String,
    class_prefix: String,
    unit: Option<String>,
    pseudo_mode: PseudoMode,
    base_style: ResolvedStyle,
}

impl ResolverConfig {
    /// Creates the default configuration: base class `tomato-box`, scope
    /// prefix `css`, `px` units, scoped pseudo-classes and a
    /// `box-sizing: border-box` base style.
    pub fn new() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            unit: Some(DEFAULT_UNIT.to_string()),
            pseudo_mode: PseudoMode::Scoped,
            base_style: ResolvedStyle::new().add("boxSizing", "border-box"),
        }
    }

    pub fn base_class(mut self, class: &str) -> Self {
        self.base_class = class.to_string();
        self
    }

    pub fn class_prefix(mut self, prefix: &str) -> Self {
        self.class_prefix = prefix.to_string();
        self
    }

    /// Sets the unit appended to bare numbers.
    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Writes bare numbers without any unit.
    pub fn without_unit(mut self) -> Self {
        self.unit = None;
        self
    }

    pub fn pseudo_mode(mut self, mode: PseudoMode) -> Self {
        self.pseudo_mode = mode;
        self
    }

    /// Replaces the lowest-precedence style layer.
    pub fn base_style(mut self, style: ResolvedStyle) -> Self {
        self.base_style = style;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved props for one element, ready for a [`Host`](crate::Host).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementProps {
    pub element: ElementKind,
    /// Base class first, then the scope class if there is one.
    pub class_names: Vec<String>,
    /// The generated class the rule sets are scoped to.
    pub scope_class: Option<String>,
    pub style: ResolvedStyle,
    pub rules: Vec<RuleSet>,
    /// Plain attributes, `className` excluded.
    pub attributes: Attributes,
    /// Unit for bare numbers when writing CSS.
    pub unit: Option<String>,
}

impl ElementProps {
    /// The value of the `class` attribute.
    pub fn class_attribute(&self) -> String {
        self.class_names.join(" ")
    }

    /// The value of the `style` attribute.
    pub fn style_attribute(&self) -> String {
        declaration_block(&self.style, self.unit.as_deref())
    }

    /// Stylesheet text for the rule sets, or `None` if there is no scope.
    pub fn stylesheet(&self) -> Option<String> {
        self.scope_class.as_ref().map(|class| {
            stylesheet(&format!(".{}", class), &self.rules, self.unit.as_deref())
        })
    }
}

/// Turns [`BoxProps`] into [`ElementProps`].
///
/// Styles are merged from four layers, lowest precedence first:
///
/// 1. the configured base style (`box-sizing: border-box`)
/// 2. the expanded `sx` object
/// 3. allow-listed direct CSS props
/// 4. the inline `style` object
///
/// Pseudo-class blocks from `sx` are never merged into the style; they are
/// kept as rule sets scoped to a generated class.
///
/// Resolution is a pure function of the props and holds no state between
/// calls.
///
/// # Example
///
/// ```rust
/// use tomato_box::{BoxProps, ResolvedStyle, Scalar, StyleResolver, SxProps};
///
/// let props = BoxProps::new()
///     .sx(SxProps::new().add("color", "red"))
///     .prop("color", "blue")
///     .style(ResolvedStyle::new().add("color", "green"));
///
/// let element = StyleResolver::new().resolve(&props);
/// assert_eq!(element.style.get("color"), Some(&Scalar::from("green")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    config: ResolverConfig,
}

impl StyleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolves one box. Children are not visited.
    pub fn resolve(&self, props: &BoxProps) -> ElementProps {
        let SxStyles {
            style: sx_style,
            rules,
        } = props.sx.as_ref().map(expand).unwrap_or_default();
        let Partitioned {
            style: direct,
            mut attributes,
        } = partition(&props.attributes);

        let mut style = self.config.base_style.clone();
        style.layer(&sx_style);
        style.layer(&direct);
        style.layer(&props.style);

        let mut class_names = vec![self.base_class(&mut attributes)];
        let rules = self.scoped_rules(rules);
        let unscoped = unscoped_stylesheet(&rules, self.config.unit.as_deref());
        let scope_class = if unscoped.is_empty() {
            None
        } else {
            let class = generate_class_name(&self.config.class_prefix, &unscoped);
            debug!("scoped {} rule set(s) to `{}`", rules.len(), class);
            class_names.push(class.clone());
            Some(class)
        };

        ElementProps {
            element: props.component.clone(),
            class_names,
            scope_class,
            style,
            rules,
            attributes,
            unit: self.config.unit.clone(),
        }
    }

    /// Takes `className` out of the attributes; a non-empty string replaces
    /// the configured base class.
    fn base_class(&self, attributes: &mut Attributes) -> String {
        match attributes.remove("className") {
            Some(AttrValue::Scalar(Scalar::Str(class))) if !class.is_empty() => class,
            _ => self.config.base_class.clone(),
        }
    }

    fn scoped_rules(&self, mut rules: Vec<RuleSet>) -> Vec<RuleSet> {
        match self.config.pseudo_mode {
            PseudoMode::Scoped => {
                rules.retain(|rule| !rule.is_empty());
                rules
            }
            PseudoMode::Inline => {
                if !rules.is_empty() {
                    trace!("inline mode: dropping {} rule set(s)", rules.len());
                }
                Vec::new()
            }
        }
    }
}
