//! Box props and their resolution into element props.
//!
//! - [`BoxProps`]: what a caller passes to a box
//! - [`partition`]: splits direct props into style and attributes
//! - [`StyleResolver`]: merges every style source into [`ElementProps`]

mod class_name;
mod partition;
mod props;
mod resolver;

pub use class_name::generate_class_name;
pub use partition::{partition, Partitioned};
pub use props::{AttrValue, Attributes, BoxProps, Child, ElementKind};
pub use resolver::{
    ElementProps, PseudoMode, ResolverConfig, StyleResolver, DEFAULT_BASE_CLASS,
    DEFAULT_CLASS_PREFIX, DEFAULT_UNIT,
};
