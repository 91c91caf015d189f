//! Error handling for diagram generation and animation

use thiserror::Error;

/// Errors raised while building or driving a diagram
///
/// Every input to the generators is a compile-time constant, so most of these
/// variants flag a configuration defect rather than a runtime condition.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiagramError {
    /// A sequence or circuit references a group value with no points
    #[error("Unknown group value: {0}")]
    UnknownGroup(u8),

    /// A point identifier could not be resolved in the catalog
    #[error("Unknown point identifier: {0}")]
    UnknownPoint(String),

    /// The same group value appears twice in a traversal sequence
    #[error("Group {0} appears more than once in the sequence")]
    DuplicateSequenceGroup(u8),

    /// A point has no placement rule in the requested mode
    #[error("Point {0} has no placement in this mode")]
    UnmappedPoint(String),

    /// A generated group does not hold its fixed number of points
    #[error("Group {value} holds {found} points, expected {expected}")]
    CardinalityMismatch {
        /// Group value
        value: u8,
        /// Number of points the traditional structure requires
        expected: usize,
        /// Number of points actually generated
        found: usize,
    },

    /// Two points share an identifier
    #[error("Duplicate point identifier: {0}")]
    DuplicateIdentifier(String),

    /// The energy circuit order cannot form a path
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// The requested mode does not exist for the active diagram
    #[error("Mode {mode} is not available for the {diagram} diagram")]
    ModeNotSupported {
        /// Requested mode name
        mode: String,
        /// Active diagram name
        diagram: String,
    },

    /// Animation settings failed validation
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// A textual intent could not be parsed
    #[error("Cannot parse intent: {0}")]
    ParseIntent(String),
}

/// Result type using [`DiagramError`]
pub type Result<T> = std::result::Result<T, DiagramError>;
