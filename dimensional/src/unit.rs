/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};

use super::canonical::{superscript, Canonical};
use super::compare::similar_units;
use super::error::UnitError;
use super::list::UnitList;
use super::ratio::Ratio;
use super::tag::Tag;

/// A unit descriptor: a fundamental unit minting a fresh dimension,
/// or a unit derived from another one by scaling, offset,
/// exponentiation or composition.
///
/// This is an open algebra: derivations chain freely and the product
/// of any two units is again a unit, so derived dimensions never need
/// to be declared up front. The price is that the descriptor is a
/// small tree rather than a register-sized enum; the tree is walked
/// only when units are compared or converted, never per value.
///
/// Every descriptor provides the same capabilities: its dimension
/// tag(s), and a pure pair of conversion functions to and from the
/// fundamental representation of its dimension. Values are `f64`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub enum Unit {
    /// Root unit of a dimension; conversions are the identity.
    Fundamental(Tag),
    /// A fixed ratio to the base unit (metric prefixes etc.).
    Scaled(Box<Unit>, Ratio),
    /// A fixed additive offset from the base unit.
    Offset(Box<Unit>, f64),
    /// Scale and offset combined (Fahrenheit-style affine scales).
    Linear(Box<Unit>, Ratio, f64),
    /// A unit raised to an integer power; negative exponents are
    /// inverse units.
    Exponent(Box<Unit>, i32),
    /// A product of unit factors, possibly repeated or cancelling.
    Compound(Box<UnitList>),
}

impl Unit {
    pub fn fundamental(tag: impl Into<Tag>) -> Self {
        Unit::Fundamental(tag.into())
    }

    pub fn scaled(base: Unit, ratio: Ratio) -> Self {
        Unit::Scaled(Box::new(base), ratio)
    }

    pub fn offset(base: Unit, offset: f64) -> Self {
        Unit::Offset(Box::new(base), offset)
    }

    pub fn linear(base: Unit, ratio: Ratio, offset: f64) -> Self {
        Unit::Linear(Box::new(base), ratio, offset)
    }

    /// The unit with no factors. Dimensionless, but distinct from a
    /// compound whose factors cancel (see [`Canonical`]).
    pub fn dimensionless() -> Self {
        Unit::Compound(Box::new(UnitList::Empty))
    }

    /// Raise this unit to an integer power. Raising an exponent unit
    /// multiplies the exponents instead of nesting, and raising a
    /// compound unit distributes over its factors, so the reciprocal
    /// of a product is the product of reciprocals.
    pub fn pow(self, n: i32) -> Self {
        match (self, n) {
            (unit, 1) => unit,
            (Unit::Exponent(base, m), n) => Unit::Exponent(base, m * n),
            (Unit::Compound(units), n) => Unit::Compound(Box::new(
                (*units).into_iter().map(|unit| unit.pow(n)).collect(),
            )),
            (unit, n) => Unit::Exponent(Box::new(unit), n),
        }
    }

    pub fn inverse(self) -> Self {
        self.pow(-1)
    }

    /// Merge two unit expressions into their product. Compounds
    /// absorb the other operand's factors instead of nesting, and two
    /// exponent units over the same base add their exponents; this is
    /// how repeated multiplication accumulates exponent and how
    /// `length * length^-2 * length` cancels out.
    pub fn compound(a: Unit, b: Unit) -> Self {
        match (a, b) {
            (Unit::Exponent(base_a, a), Unit::Exponent(base_b, b))
                if base_a == base_b =>
            {
                Unit::Exponent(base_a, a + b)
            }
            (Unit::Compound(a), Unit::Compound(b)) => {
                Unit::Compound(Box::new((*a).concat(*b)))
            }
            (Unit::Compound(a), b) => {
                Unit::Compound(Box::new((*a).concat(UnitList::Empty.push(b))))
            }
            (a, Unit::Compound(b)) => Unit::Compound(Box::new((*b).push(a))),
            (a, b) => {
                Unit::Compound(Box::new(UnitList::Empty.push(b).push(a)))
            }
        }
    }

    /// The dimension tag of a simple unit, inherited unchanged from
    /// the unit it was derived from. A compound unit carries one tag
    /// per factor instead (see [`Unit::factors`]) and has no single
    /// tag of its own.
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Unit::Fundamental(tag) => Some(tag),
            Unit::Scaled(base, _)
            | Unit::Offset(base, _)
            | Unit::Linear(base, _, _)
            | Unit::Exponent(base, _) => base.tag(),
            Unit::Compound(_) => None,
        }
    }

    /// The exponent this unit contributes to its tag's sum: the
    /// declared exponent for an exponent unit, 1 for anything else.
    pub fn exponent(&self) -> i32 {
        match self {
            Unit::Exponent(_, n) => *n,
            _ => 1,
        }
    }

    /// Flatten this unit into its factor sequence: a singleton for a
    /// simple unit, the (recursively flattened) factor list for a
    /// compound, with exponents over compounds distributed over the
    /// factors.
    pub fn factors(&self) -> UnitList {
        match self {
            Unit::Compound(units) => {
                units.iter().flat_map(|unit| unit.factors()).collect()
            }
            Unit::Exponent(base, n) => match &**base {
                Unit::Compound(_) => base
                    .factors()
                    .into_iter()
                    .map(|unit| unit.pow(*n))
                    .collect(),
                _ => UnitList::Empty.push(self.clone()),
            },
            _ => UnitList::Empty.push(self.clone()),
        }
    }

    pub fn canonical(&self) -> Canonical {
        Canonical::of(self)
    }

    /// The unit representing differences of this unit. Additive
    /// offsets cancel under subtraction, so offset and linear units
    /// lose their offset; everything else keeps its shape with the
    /// mapping applied to its base.
    pub fn difference_unit(&self) -> Unit {
        match self {
            Unit::Fundamental(_) => self.clone(),
            Unit::Scaled(base, ratio) => {
                Unit::Scaled(Box::new(base.difference_unit()), *ratio)
            }
            Unit::Offset(base, _) => base.difference_unit(),
            Unit::Linear(base, ratio, _) => {
                Unit::Scaled(Box::new(base.difference_unit()), *ratio)
            }
            Unit::Exponent(base, n) => {
                Unit::Exponent(Box::new(base.difference_unit()), *n)
            }
            Unit::Compound(units) => Unit::Compound(Box::new(
                units.iter().map(|unit| unit.difference_unit()).collect(),
            )),
        }
    }
}

/* Conversions. */

impl Unit {
    /// Express a value of this unit in the fundamental unit of its
    /// dimension. Derivation chains convert through their base, so a
    /// unit defined over an already-derived unit converts exactly.
    pub fn to_fundamental(&self, value: f64) -> f64 {
        match self {
            Unit::Fundamental(_) => value,
            Unit::Scaled(base, ratio) => {
                base.to_fundamental(ratio.apply_inverse(value))
            }
            Unit::Offset(base, offset) => base.to_fundamental(value - offset),
            Unit::Linear(base, ratio, offset) => {
                base.to_fundamental(ratio.apply_inverse(value - offset))
            }
            Unit::Exponent(base, n) => {
                value * power(base.to_fundamental(1.0), *n)
            }
            Unit::Compound(units) => {
                value
                    * units
                        .iter()
                        .map(|unit| unit.to_fundamental(1.0))
                        .product::<f64>()
            }
        }
    }

    /// Express a fundamental value of this unit's dimension in this
    /// unit. Inverse of [`Unit::to_fundamental`].
    pub fn from_fundamental(&self, value: f64) -> f64 {
        match self {
            Unit::Fundamental(_) => value,
            Unit::Scaled(base, ratio) => {
                ratio.apply(base.from_fundamental(value))
            }
            Unit::Offset(base, offset) => base.from_fundamental(value) + offset,
            Unit::Linear(base, ratio, offset) => {
                ratio.apply(base.from_fundamental(value)) + offset
            }
            Unit::Exponent(base, n) => {
                value * power(base.from_fundamental(1.0), *n)
            }
            Unit::Compound(units) => {
                value
                    * units
                        .iter()
                        .map(|unit| unit.from_fundamental(1.0))
                        .product::<f64>()
            }
        }
    }

    /// Convert a value of this unit to a dimensionally equivalent
    /// unit, via the round trip through the fundamental
    /// representation. This is the only place precision can be lost
    /// and the only path any cross-unit transformation takes.
    pub fn convert(&self, other: &Unit, value: f64) -> Result<f64, UnitError> {
        match similar_units(self, other) {
            true => Ok(other.from_fundamental(self.to_fundamental(value))),
            false => {
                Err(UnitError::Conversion(self.clone(), other.clone()))
            }
        }
    }
}

/// Integer power by repeated multiplication; negative exponents take
/// the reciprocal of the positive power. Exact for the ratio factors
/// the metric prefixes produce.
fn power(value: f64, n: i32) -> f64 {
    if n == 0 {
        1.0
    } else if n < 0 {
        1.0 / power(value, -n)
    } else {
        value * power(value, n - 1)
    }
}

/* Operations on units. */

impl Mul<Unit> for Unit {
    type Output = Unit;
    fn mul(self, rhs: Unit) -> Unit {
        Unit::compound(self, rhs)
    }
}

impl Div<Unit> for Unit {
    type Output = Unit;
    fn div(self, rhs: Unit) -> Unit {
        Unit::compound(self, rhs.inverse())
    }
}

/* Display. */

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Unit::Fundamental(tag) => tag.fmt(f),
            Unit::Scaled(base, ratio) => write!(f, "{}:{}", base, ratio),
            Unit::Offset(base, offset) => write!(f, "{}{:+}", base, offset),
            Unit::Linear(base, ratio, offset) => {
                write!(f, "{}:{}{:+}", base, ratio, offset)
            }
            Unit::Exponent(base, n) => {
                write!(f, "{}{}", base, superscript(*n))
            }
            Unit::Compound(units) => write!(
                f,
                "{}",
                units
                    .iter()
                    .map(|unit| unit.to_string())
                    .collect::<Vec<String>>()
                    .join("\u{22c5}")
            ),
        }
    }
}
