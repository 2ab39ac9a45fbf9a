use folio_tree::NodeKind;
use thiserror::Error;

/// Error type for render dispatch and scoped render execution.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No override and no format default handles this node variant.
    #[error("no render function handles node kind {0:?}")]
    UnsupportedNode(NodeKind),

    /// Acquisition, write or flush failure on an output destination.
    #[error("output '{name}' failed: {source}")]
    Destination {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A render failure wrapped with the destination it happened in.
    #[error("rendering to '{name}' failed: {source}")]
    Failed {
        name: String,
        #[source]
        source: Box<RenderError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl RenderError {
    /// Attaches the destination identity to an error raised while rendering
    /// to it. Errors that already carry a destination are left alone.
    pub fn for_target(self, name: &str) -> RenderError {
        match self {
            RenderError::Io(source) => {
                RenderError::Destination { name: name.to_string(), source }
            }
            RenderError::Destination { .. } | RenderError::Failed { .. } => self,
            other => RenderError::Failed { name: name.to_string(), source: Box::new(other) },
        }
    }
}
