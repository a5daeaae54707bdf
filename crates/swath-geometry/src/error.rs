//! Error types for the geometry kernel.

use std::error::Error;
use std::fmt;

/// Errors from region construction and partition computation.
///
/// `DegenerateCell` is the only recoverable variant: the orchestrator
/// skips control for the affected agent for one tick and continues.
/// Everything else indicates an invalid configuration or a violated
/// precondition and aborts the run.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The region polygon failed validation (too few vertices,
    /// non-convex, zero area, or a vertex violating a supplied
    /// half-plane).
    InvalidRegion {
        /// Description of the validation failure.
        reason: String,
    },
    /// A tessellation was requested for an empty generator set.
    NoGenerators,
    /// Two generators coincide within tolerance. The Voronoi
    /// tessellation is undefined for duplicate points; this is a fatal
    /// precondition violation.
    DuplicateGenerators {
        /// Index of the first generator of the coincident pair.
        a: usize,
        /// Index of the second generator of the coincident pair.
        b: usize,
    },
    /// A polygon has no enclosed area, so its centroid is undefined.
    DegeneratePolygon,
    /// A Voronoi cell collapsed to zero area for one tick.
    DegenerateCell {
        /// Index of the generator whose cell degenerated.
        generator: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion { reason } => write!(f, "invalid region: {reason}"),
            Self::NoGenerators => write!(f, "tessellation requires at least one generator"),
            Self::DuplicateGenerators { a, b } => {
                write!(f, "generators {a} and {b} coincide within tolerance")
            }
            Self::DegeneratePolygon => write!(f, "polygon has zero enclosed area"),
            Self::DegenerateCell { generator } => {
                write!(f, "cell of generator {generator} has zero area")
            }
        }
    }
}

impl Error for GeometryError {}
