//! Handing resolved boxes to a UI host.
//!
//! - [`Host`]: the seam to whatever UI layer creates the actual nodes
//! - [`render`]: resolves a box tree and drives a host
//! - [`HtmlHost`]: a host that writes HTML markup and a scoped stylesheet

mod error;
mod host;
mod html;

pub use error::RenderError;
pub use host::{render, Host};
pub use html::HtmlHost;
