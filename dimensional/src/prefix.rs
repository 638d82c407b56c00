/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::ratio::Ratio;
use super::unit::Unit;

/// Metric prefixes, limited to the range whose ratios stay exact in
/// `i64` terms.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
pub enum SiPrefix {
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
}

static SI_PREFIXES: [SiPrefix; 13] = [
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Centi,
    SiPrefix::Deci,
    SiPrefix::Unit,
    SiPrefix::Deca,
    SiPrefix::Hecto,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
];

impl SiPrefix {
    pub const SCALE: &'static [Self] = &SI_PREFIXES;

    pub const fn power(&self) -> i32 {
        match self {
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Unit => 0,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
        }
    }

    /// The number of prefixed units per base unit, as an exact ratio.
    pub const fn ratio(&self) -> Ratio {
        let power = self.power();
        match power < 0 {
            true => Ratio::new(pow10(-power), 1),
            false => Ratio::new(1, pow10(power)),
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "µ",
            SiPrefix::Milli => "m",
            SiPrefix::Centi => "c",
            SiPrefix::Deci => "d",
            SiPrefix::Unit => "",
            SiPrefix::Deca => "da",
            SiPrefix::Hecto => "h",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
        }
    }

    /// Derive the prefixed unit from `base`.
    pub fn scaled(&self, base: Unit) -> Unit {
        Unit::scaled(base, self.ratio())
    }
}

const fn pow10(n: i32) -> i64 {
    let mut r = 1i64;
    let mut i = 0;
    while i < n {
        r *= 10;
        i += 1;
    }
    r
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/* Convenience derivations, one per prefix. */

pub fn pico(base: Unit) -> Unit {
    SiPrefix::Pico.scaled(base)
}

pub fn nano(base: Unit) -> Unit {
    SiPrefix::Nano.scaled(base)
}

pub fn micro(base: Unit) -> Unit {
    SiPrefix::Micro.scaled(base)
}

pub fn milli(base: Unit) -> Unit {
    SiPrefix::Milli.scaled(base)
}

pub fn centi(base: Unit) -> Unit {
    SiPrefix::Centi.scaled(base)
}

pub fn deci(base: Unit) -> Unit {
    SiPrefix::Deci.scaled(base)
}

pub fn deca(base: Unit) -> Unit {
    SiPrefix::Deca.scaled(base)
}

pub fn hecto(base: Unit) -> Unit {
    SiPrefix::Hecto.scaled(base)
}

pub fn kilo(base: Unit) -> Unit {
    SiPrefix::Kilo.scaled(base)
}

pub fn mega(base: Unit) -> Unit {
    SiPrefix::Mega.scaled(base)
}

pub fn giga(base: Unit) -> Unit {
    SiPrefix::Giga.scaled(base)
}

pub fn tera(base: Unit) -> Unit {
    SiPrefix::Tera.scaled(base)
}
