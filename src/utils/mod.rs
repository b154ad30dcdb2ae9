/*!
# Utilities

Helper traits shared by the generators. Currently only [`Probability`] to validate
probabilities.
*/

use num::{One, Zero};

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`).
    /// `NaN` is never valid.
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
