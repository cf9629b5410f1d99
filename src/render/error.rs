//! Rendering errors.

/// Error returned when a host cannot render an element.
#[derive(Debug)]
pub enum RenderError {
    /// The element kind is not a usable tag name.
    InvalidElement { kind: String },
    /// The markup template failed.
    Template(minijinja::Error),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidElement { kind } => {
                write!(f, "invalid element kind '{}'", kind)
            }
            RenderError::Template(err) => write!(f, "template error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::InvalidElement { .. } => None,
            RenderError::Template(err) => Some(err),
        }
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template(err)
    }
}
