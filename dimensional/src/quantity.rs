/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::canonical::Canonical;
use super::error::UnitError;
use super::unit::Unit;

/// An absolute amount of a unit. Quantities of dimensionally
/// equivalent units convert into each other implicitly; any operation
/// between incompatible units is rejected when it is constructed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Quantity(pub f64, pub Unit);

/// A relative amount: the difference between two quantities. Deltas
/// are carried in the difference unit of their unit, which drops
/// affine offsets since those cancel under subtraction; a temperature
/// delta of 10 degrees Celsius is 18 Fahrenheit-sized degrees, not
/// 50.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Delta(pub f64, pub Unit);

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity(value, unit)
    }

    pub fn from_value(value: f64) -> Self {
        Quantity(value, Unit::dimensionless())
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> &Unit {
        &self.1
    }

    pub fn convert(self, unit: &Unit) -> Result<Self, UnitError> {
        Ok(Quantity(self.1.convert(unit, self.0)?, unit.clone()))
    }

    pub fn canonical(&self) -> Canonical {
        self.1.canonical()
    }

    /* Note: we cannot implement the trait, because it does not allow
    for error conditions. */
    pub fn partial_cmp(
        &self,
        rhs: &Self,
    ) -> Result<Option<Ordering>, UnitError> {
        Ok(self.0.partial_cmp(&rhs.clone().convert(&self.1)?.0))
    }
}

impl Delta {
    /// A delta of `unit`, stored in `unit`'s difference unit.
    pub fn new(value: f64, unit: Unit) -> Self {
        Delta(value, unit.difference_unit())
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> &Unit {
        &self.1
    }

    pub fn convert(self, unit: &Unit) -> Result<Self, UnitError> {
        let unit = unit.difference_unit();
        Ok(Delta(self.1.convert(&unit, self.0)?, unit))
    }

    pub fn canonical(&self) -> Canonical {
        self.1.canonical()
    }
}

/* Additive operations require dimensionally equivalent operands; the
right-hand side is converted to the left-hand unit first. */

impl Add<Delta> for Delta {
    type Output = Result<Delta, UnitError>;
    fn add(self, rhs: Delta) -> Result<Delta, UnitError> {
        let rhs = rhs.convert(&self.1)?;
        Ok(Delta(self.0 + rhs.0, self.1))
    }
}

impl Sub<Delta> for Delta {
    type Output = Result<Delta, UnitError>;
    fn sub(self, rhs: Delta) -> Result<Delta, UnitError> {
        let rhs = rhs.convert(&self.1)?;
        Ok(Delta(self.0 - rhs.0, self.1))
    }
}

impl Add<Delta> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn add(self, rhs: Delta) -> Result<Quantity, UnitError> {
        let rhs = rhs.convert(&self.1)?;
        Ok(Quantity(self.0 + rhs.0, self.1))
    }
}

impl Sub<Delta> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn sub(self, rhs: Delta) -> Result<Quantity, UnitError> {
        let rhs = rhs.convert(&self.1)?;
        Ok(Quantity(self.0 - rhs.0, self.1))
    }
}

impl Add<Quantity> for Delta {
    type Output = Result<Quantity, UnitError>;
    fn add(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        rhs + self
    }
}

impl Sub<Quantity> for Quantity {
    type Output = Result<Delta, UnitError>;
    fn sub(self, rhs: Quantity) -> Result<Delta, UnitError> {
        let rhs = rhs.convert(&self.1)?;
        Ok(Delta::new(self.0 - rhs.0, self.1))
    }
}

impl Neg for Delta {
    type Output = Delta;
    fn neg(self) -> Delta {
        Delta(-self.0, self.1)
    }
}

/* Multiplicative operations are total: the result is carried in the
compound of the operand units. A product with a relative operand is
itself relative. */

impl Mul<Quantity> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 * rhs.0, Unit::compound(self.1, rhs.1))
    }
}

impl Mul<Delta> for Delta {
    type Output = Delta;
    fn mul(self, rhs: Delta) -> Delta {
        Delta(self.0 * rhs.0, Unit::compound(self.1, rhs.1))
    }
}

impl Mul<Delta> for Quantity {
    type Output = Delta;
    fn mul(self, rhs: Delta) -> Delta {
        Delta(
            self.0 * rhs.0,
            Unit::compound(self.1.difference_unit(), rhs.1),
        )
    }
}

impl Mul<Quantity> for Delta {
    type Output = Delta;
    fn mul(self, rhs: Quantity) -> Delta {
        Delta(
            self.0 * rhs.0,
            Unit::compound(self.1, rhs.1.difference_unit()),
        )
    }
}

impl Div<Quantity> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 / rhs.0, Unit::compound(self.1, rhs.1.inverse()))
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        Quantity(self.0 * rhs, self.1)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        Quantity(self.0 / rhs, self.1)
    }
}

impl Mul<f64> for Delta {
    type Output = Delta;
    fn mul(self, rhs: f64) -> Delta {
        Delta(self.0 * rhs, self.1)
    }
}

impl Div<f64> for Delta {
    type Output = Delta;
    fn div(self, rhs: f64) -> Delta {
        Delta(self.0 / rhs, self.1)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl Display for Delta {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.0, self.1)
    }
}
