use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Side;

/// Broad classification of a [`WallError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallErrorKind {
    /// An argument was outside its admissible range or had the wrong shape.
    InvalidArgument,
    /// The wall was not in a state that permits the operation.
    PreconditionViolation,
}

/// Errors raised by [`Wall`](super::Wall) operations.
///
/// Every variant records the operation that raised it.
/// Errors leave the wall unchanged, so callers may correct the input and retry.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum WallError {
    /// Emissivity outside `[0, 1]`.
    #[error("{operation}: emissivity must lie in [0, 1], got {emissivity}")]
    Emissivity {
        operation: &'static str,
        emissivity: f64,
        #[source]
        source: ConstraintError,
    },

    /// A coverage array did not match the surface species count.
    #[error("{operation}: {side} surface has {expected} species, got {actual} coverages")]
    CoverageLength {
        operation: &'static str,
        side: Side,
        expected: usize,
        actual: usize,
    },

    /// A side index other than 0 or 1.
    #[error("{operation}: side index {index} is out of range")]
    InvalidSide {
        operation: &'static str,
        index: usize,
    },

    /// A sensitivity parameter position past the end of a side's table.
    #[error("{operation}: {side} side tracks {len} sensitivity parameters, no position {position}")]
    SensitivityPosition {
        operation: &'static str,
        side: Side,
        position: usize,
        len: usize,
    },

    /// A reaction index past the end of a side's mechanism.
    #[error("{operation}: {side} mechanism has {n_reactions} reactions, no reaction {reaction}")]
    ReactionIndex {
        operation: &'static str,
        side: Side,
        reaction: usize,
        n_reactions: usize,
    },

    /// A reaction that is already tracked as a sensitivity parameter.
    #[error("{operation}: reaction {reaction} is already a {side} sensitivity parameter")]
    DuplicateReaction {
        operation: &'static str,
        side: Side,
        reaction: usize,
    },

    /// A perturbation vector whose length differs from the tracked parameter count.
    #[error(
        "{operation}: {side} side tracks {expected} sensitivity parameters, got {actual} values"
    )]
    ParameterCount {
        operation: &'static str,
        side: Side,
        expected: usize,
        actual: usize,
    },

    /// A heat transfer rate that is not a number.
    #[error("{operation}: heat transfer rate is not a number")]
    HeatRate {
        operation: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// Both ends of the wall refer to the same reactor.
    #[error("{operation}: a wall cannot connect a reactor to itself")]
    SameEndpoint { operation: &'static str },

    /// The side has no surface kinetics attached.
    #[error("{operation}: no kinetics attached to the {side} side")]
    NoKinetics { operation: &'static str, side: Side },

    /// The wall is not installed, or one of its reactors has been dropped.
    #[error("{operation}: wall is not installed between two live reactors")]
    Detached { operation: &'static str },
}

impl WallError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub fn kind(&self) -> WallErrorKind {
        match self {
            Self::Emissivity { .. }
            | Self::CoverageLength { .. }
            | Self::InvalidSide { .. }
            | Self::SensitivityPosition { .. }
            | Self::ReactionIndex { .. }
            | Self::DuplicateReaction { .. }
            | Self::ParameterCount { .. }
            | Self::HeatRate { .. } => WallErrorKind::InvalidArgument,
            Self::SameEndpoint { .. } | Self::NoKinetics { .. } | Self::Detached { .. } => {
                WallErrorKind::PreconditionViolation
            }
        }
    }

    /// Returns the name of the operation that raised this error.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Emissivity { operation, .. }
            | Self::CoverageLength { operation, .. }
            | Self::InvalidSide { operation, .. }
            | Self::SensitivityPosition { operation, .. }
            | Self::ReactionIndex { operation, .. }
            | Self::DuplicateReaction { operation, .. }
            | Self::ParameterCount { operation, .. }
            | Self::HeatRate { operation, .. }
            | Self::SameEndpoint { operation }
            | Self::NoKinetics { operation, .. }
            | Self::Detached { operation } => operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation_and_value() {
        let err = WallError::Emissivity {
            operation: "Wall::set_emissivity",
            emissivity: 1.5,
            source: ConstraintError::AboveMaximum,
        };
        assert_eq!(
            err.to_string(),
            "Wall::set_emissivity: emissivity must lie in [0, 1], got 1.5"
        );
        assert_eq!(err.operation(), "Wall::set_emissivity");
    }

    #[test]
    fn kinds() {
        let same = WallError::SameEndpoint {
            operation: "Wall::install",
        };
        assert_eq!(same.kind(), WallErrorKind::PreconditionViolation);

        let length = WallError::CoverageLength {
            operation: "Wall::set_coverages",
            side: Side::Right,
            expected: 3,
            actual: 2,
        };
        assert_eq!(length.kind(), WallErrorKind::InvalidArgument);
        assert_eq!(
            length.to_string(),
            "Wall::set_coverages: right surface has 3 species, got 2 coverages"
        );
    }
}
