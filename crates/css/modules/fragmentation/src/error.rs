//! Error type for break-point classification.
//!
//! Invalid input is reported separately from a negative answer so callers can
//! tell "not a break point" apart from "the question was malformed".

use css_style_model::NodeKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakError {
    /// The node is not present in the presentation tree.
    #[error("node {0} is not in the presentation tree")]
    UnknownNode(NodeKey),

    /// The node exists but is a document or text node.
    #[error("node {0} is not an element")]
    NotAnElement(NodeKey),

    /// The element has no computed style (for example it is not rendered).
    #[error("element {0} has no computed style")]
    MissingComputedStyle(NodeKey),

    /// The range selects content instead of denoting a single point.
    #[error("break candidate is not a collapsed range")]
    NotCollapsed,

    /// The boundary offset lies past the end of its container.
    #[error("offset {offset} is out of range for {node} (length {len})")]
    OffsetOutOfRange {
        node: NodeKey,
        offset: usize,
        len: usize,
    },

    /// A box needed for an edge comparison has no layout geometry.
    #[error("node {0} has no layout geometry")]
    MissingGeometry(NodeKey),
}

/// Result type for classification queries
pub type Result<T> = core::result::Result<T, BreakError>;
