/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The SI system: the seven base units, the usual affine temperature
//! scales, and the aggregated [`UnitSystem`].

use super::ratio::Ratio;
use super::system::UnitSystem;
use super::unit::Unit;

pub fn meter() -> Unit {
    Unit::fundamental("meter")
}

pub fn kilogram() -> Unit {
    Unit::fundamental("kilogram")
}

pub fn second() -> Unit {
    Unit::fundamental("second")
}

pub fn ampere() -> Unit {
    Unit::fundamental("ampere")
}

pub fn kelvin() -> Unit {
    Unit::fundamental("kelvin")
}

pub fn mole() -> Unit {
    Unit::fundamental("mole")
}

pub fn candela() -> Unit {
    Unit::fundamental("candela")
}

/// 0 °C = 273.15 K.
pub fn celsius() -> Unit {
    Unit::offset(kelvin(), -273.15)
}

/// Defined over celsius, converting exactly through the chain:
/// 32 °F = 0 °C = 273.15 K.
pub fn fahrenheit() -> Unit {
    Unit::linear(celsius(), Ratio::new(9, 5), 32.0)
}

pub fn system() -> UnitSystem {
    UnitSystem::new(
        meter(),
        kilogram(),
        second(),
        ampere(),
        kelvin(),
        mole(),
        candela(),
    )
}
