/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// An exact integer ratio between a derived unit and its base unit.
/// The numerator is the number of derived units that make up the
/// denominator number of base units, so a millimeter is defined over
/// the meter with ratio 1000 (`Ratio::new(1000, 1)`).
///
/// Keeping the ratio in integers avoids floating drift for the common
/// metric prefixes; the division happens once per conversion.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Debug,
)]
pub struct Ratio {
    num: i64,
    den: i64,
}

impl Ratio {
    pub const UNIT: Self = Ratio::new(1, 1);

    pub const fn new(num: i64, den: i64) -> Self {
        assert!(num != 0 && den != 0, "ratio terms must be non-zero");
        Ratio { num, den }
    }

    pub const fn num(&self) -> i64 {
        self.num
    }

    pub const fn den(&self) -> i64 {
        self.den
    }

    /// Scale a base-unit value to this unit.
    pub fn apply(&self, value: f64) -> f64 {
        self.num as f64 * value / self.den as f64
    }

    /// Scale a value of this unit back to the base unit.
    pub fn apply_inverse(&self, value: f64) -> f64 {
        self.den as f64 * value / self.num as f64
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.den {
            1 => write!(f, "{}", self.num),
            _ => write!(f, "{}/{}", self.num, self.den),
        }
    }
}
