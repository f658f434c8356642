use std::cmp::Ordering;

use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, StrictlyPositive,
};
use uom::{ConstZero, si::f64::Power};

/// Directional heat transfer rate through a wall.
///
/// Direction is explicit rather than carried by sign.
/// When heat flows, the stored `Power` is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatTransferRate {
    /// Heat flows from the left reactor to the right reactor.
    LeftToRight(Power),
    /// Heat flows from the right reactor to the left reactor.
    RightToLeft(Power),
    /// No heat transfer occurs.
    None,
}

impl HeatTransferRate {
    /// Constructs a left-to-right heat transfer rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `q_dot` is not strictly positive.
    pub fn left_to_right(q_dot: Power) -> ConstraintResult<Self> {
        let q_dot = Constrained::<Power, StrictlyPositive>::new(q_dot)?;
        Ok(Self::LeftToRight(q_dot.into_inner()))
    }

    /// Constructs a right-to-left heat transfer rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `q_dot` is not strictly positive.
    pub fn right_to_left(q_dot: Power) -> ConstraintResult<Self> {
        let q_dot = Constrained::<Power, StrictlyPositive>::new(q_dot)?;
        Ok(Self::RightToLeft(q_dot.into_inner()))
    }

    /// Constructs a heat transfer rate from a signed value, positive left to right.
    ///
    /// # Errors
    ///
    /// Returns an error if `q_dot` is not a number.
    pub fn from_signed_left_to_right(q_dot: Power) -> ConstraintResult<Self> {
        match q_dot.partial_cmp(&Power::ZERO) {
            Some(Ordering::Greater) => Ok(Self::LeftToRight(q_dot)),
            Some(Ordering::Less) => Ok(Self::RightToLeft(-q_dot)),
            Some(Ordering::Equal) => Ok(Self::None),
            None => Err(ConstraintError::NotANumber),
        }
    }

    /// Returns the signed heat transfer rate (positive means left to right).
    #[must_use]
    pub fn signed_left_to_right(&self) -> Power {
        match *self {
            Self::LeftToRight(q) => q,
            Self::RightToLeft(q) => -q,
            Self::None => Power::ZERO,
        }
    }

    /// Returns the non-negative heat transfer magnitude.
    #[must_use]
    pub fn magnitude(&self) -> Power {
        match *self {
            Self::LeftToRight(q) | Self::RightToLeft(q) => q,
            Self::None => Power::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::power::watt;

    #[test]
    fn sign_maps_to_direction() {
        let q = Power::new::<watt>(14_000.0);

        assert_eq!(
            HeatTransferRate::from_signed_left_to_right(q).unwrap(),
            HeatTransferRate::LeftToRight(q)
        );
        assert_eq!(
            HeatTransferRate::from_signed_left_to_right(-q).unwrap(),
            HeatTransferRate::RightToLeft(q)
        );
        assert_eq!(
            HeatTransferRate::from_signed_left_to_right(Power::ZERO).unwrap(),
            HeatTransferRate::None
        );
        assert_eq!(
            HeatTransferRate::from_signed_left_to_right(Power::new::<watt>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn signed_and_magnitude_conventions() {
        let q = Power::new::<watt>(12.0);
        let forward = HeatTransferRate::left_to_right(q).unwrap();
        let backward = HeatTransferRate::right_to_left(q).unwrap();

        assert_eq!(forward.signed_left_to_right(), q);
        assert_eq!(backward.signed_left_to_right(), -q);
        assert_eq!(backward.magnitude(), q);
        assert_eq!(HeatTransferRate::None.magnitude(), Power::ZERO);
        assert!(HeatTransferRate::left_to_right(-q).is_err());
    }
}
